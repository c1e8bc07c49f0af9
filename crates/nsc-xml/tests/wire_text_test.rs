//! Wire-text contract tests for nsc-xml
//!
//! These pin the behaviors the request builders depend on: template
//! expansion over realistic request documents and the escaping table.

use nsc_xml::{escape, escape_to, expand};
use pretty_assertions::assert_eq;
use std::collections::HashMap;

fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn login_template_renders() {
    let v = vars(&[("u", "alice"), ("p", "s3cr3t")]);
    let xml = expand("<Login user=\"${u}\" pass=\"${p}\"/>", &v);
    assert_eq!(xml, "<Login user=\"alice\" pass=\"s3cr3t\"/>");
}

#[test]
fn every_balanced_placeholder_is_replaced() {
    let v = vars(&[("session-id", "AB12"), ("site-id", "4")]);
    let xml = expand(
        "<SiteScanRequest session-id=\"${session-id}\" site-id=\"${site-id}\" sync-id=\"${sync-id}\"/>",
        &v,
    );
    // Known keys take their values, the unknown sync-id collapses to empty.
    assert_eq!(
        xml,
        "<SiteScanRequest session-id=\"AB12\" site-id=\"4\" sync-id=\"\"/>"
    );
}

#[test]
fn unbalanced_placeholder_survives_untouched() {
    let v = vars(&[("x", "1")]);
    assert_eq!(expand("abc${x", &v), "abc${x");
}

#[test]
fn escaped_credentials_embed_safely() {
    let mut v = HashMap::new();
    v.insert("u".to_string(), escape("o'brien"));
    v.insert("p".to_string(), escape("a<b>&c"));
    let xml = expand("<Login user=\"${u}\" pass=\"${p}\"/>", &v);
    assert_eq!(
        xml,
        "<Login user=\"o&#39;brien\" pass=\"a&lt;b&gt;&amp;c\"/>"
    );
}

#[test]
fn restricted_codepoints_never_reach_the_wire() {
    assert_eq!(escape("\u{000b}"), "");
    assert_eq!(escape("\u{0001}"), "");
    assert_eq!(escape("\t"), "\t");
    assert_eq!(escape("\u{00c8}"), "&#200;");
}

#[test]
fn streaming_escape_agrees_with_buffered() {
    let sample = "host <10.0.0.1> & \"dmz\"\u{0001}\u{00e9}";
    let mut streamed = String::new();
    escape_to(&mut streamed, sample).unwrap();
    assert_eq!(streamed, escape(sample));
}
