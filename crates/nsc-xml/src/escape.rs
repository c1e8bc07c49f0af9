//! XML escaping for text destined for the wire

use std::fmt::{self, Write};

/// How a single character is carried into XML text.
enum Esc {
    /// Passes through unmodified.
    Keep,
    /// Replaced by a predefined entity reference.
    Entity(&'static str),
    /// Replaced by a numeric character reference.
    Numeric,
    /// Dropped entirely; forbidden by the XML character production.
    Drop,
}

/// Codepoints invalid in XML 1.0 text under any encoding, even as
/// numeric character references.
fn is_restricted(c: char) -> bool {
    matches!(
        c as u32,
        0x00..=0x08 | 0x0b..=0x0c | 0x0e..=0x1f | 0x7f..=0x84 | 0x86..=0x9f
    )
}

fn classify(c: char) -> Esc {
    match c {
        '&' => Esc::Entity("&amp;"),
        '<' => Esc::Entity("&lt;"),
        '>' => Esc::Entity("&gt;"),
        '\'' => Esc::Entity("&#39;"),
        '"' => Esc::Entity("&quot;"),
        '\t' | '\n' | '\r' => Esc::Keep,
        c if is_restricted(c) => Esc::Drop,
        c if !(' '..='~').contains(&c) => Esc::Numeric,
        _ => Esc::Keep,
    }
}

/// Escape a string for embedding in XML text or attribute values.
///
/// Reserved characters become entity references, characters outside the
/// printable ASCII range become numeric references, and restricted
/// codepoints are removed. The transform is one-directional: no inverse
/// is provided here.
///
/// # Example
///
/// ```rust
/// use nsc_xml::escape;
///
/// assert_eq!(escape("Tom & Jerry <3"), "Tom &amp; Jerry &lt;3");
/// assert_eq!(escape("r\u{00e9}sum\u{00e9}"), "r&#233;sum&#233;");
/// assert_eq!(escape("a\u{000b}b"), "ab");
/// ```
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_into(&mut out, text);
    out
}

/// Append the escaped form of `text` to an existing buffer.
pub fn escape_into(out: &mut String, text: &str) {
    escape_to(out, text).expect("writing to a String never fails");
}

/// Streaming variant: escape `text` into any [`fmt::Write`] sink.
///
/// Unmodified characters are accumulated into runs and flushed with a
/// single write per run, so clean input costs one write call.
pub fn escape_to<W: Write>(out: &mut W, text: &str) -> fmt::Result {
    let mut run = 0;
    for (i, c) in text.char_indices() {
        let esc = classify(c);
        if matches!(esc, Esc::Keep) {
            continue;
        }
        if run < i {
            out.write_str(&text[run..i])?;
        }
        run = i + c.len_utf8();
        match esc {
            Esc::Entity(entity) => out.write_str(entity)?,
            Esc::Numeric => write!(out, "&#{};", c as u32)?,
            Esc::Keep | Esc::Drop => {}
        }
    }
    if run < text.len() {
        out.write_str(&text[run..])?;
    }
    Ok(())
}
