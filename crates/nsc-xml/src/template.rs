//! `${name}` template expansion

use std::collections::HashMap;

/// Expand `${name}` placeholders in `source` against `vars`.
///
/// The scan is a single linear left-to-right pass. A `$` immediately
/// followed by `{` opens a placeholder; the name runs to the next `}`.
/// Names are case-sensitive. A placeholder whose name is absent from
/// `vars` expands to the empty string. A bare `$`, or a `${` with no
/// closing brace before the end of the input, is copied through
/// verbatim.
///
/// Expansion is not recursive: substituted values are emitted as-is and
/// never rescanned for further placeholders.
///
/// # Example
///
/// ```rust
/// use nsc_xml::expand;
/// use std::collections::HashMap;
///
/// let mut vars = HashMap::new();
/// vars.insert("scan-id".to_string(), "71".to_string());
/// assert_eq!(
///     expand("<ScanStatusRequest scan-id=\"${scan-id}\"/>", &vars),
///     "<ScanStatusRequest scan-id=\"71\"/>"
/// );
/// ```
pub fn expand(source: &str, vars: &HashMap<String, String>) -> String {
    let mut out = String::with_capacity(source.len());
    let mut pos = 0;

    while let Some(offset) = source[pos..].find('$') {
        let dollar = pos + offset;
        out.push_str(&source[pos..dollar]);

        let rest = &source[dollar..];
        if rest.as_bytes().get(1) == Some(&b'{') {
            if let Some(close) = rest.find('}') {
                let name = &rest[2..close];
                if let Some(value) = vars.get(name) {
                    out.push_str(value);
                }
                pos = dollar + close + 1;
                continue;
            }
        }

        // Bare '$' or unterminated '${': leave the text unmodified.
        out.push('$');
        pos = dollar + 1;
    }

    out.push_str(&source[pos..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_single_placeholder() {
        let v = vars(&[("session-id", "0F1E2D3C")]);
        assert_eq!(expand("id=${session-id}", &v), "id=0F1E2D3C");
    }

    #[test]
    fn test_missing_variable_expands_empty() {
        let v = vars(&[]);
        assert_eq!(expand("a${nope}b", &v), "ab");
    }

    #[test]
    fn test_unterminated_placeholder_left_verbatim() {
        let v = vars(&[("x", "1")]);
        assert_eq!(expand("abc${x", &v), "abc${x");
    }

    #[test]
    fn test_bare_dollar_left_verbatim() {
        let v = vars(&[("x", "1")]);
        assert_eq!(expand("cost: $5", &v), "cost: $5");
        assert_eq!(expand("trailing$", &v), "trailing$");
    }

    #[test]
    fn test_adjacent_placeholders() {
        let v = vars(&[("a", "1"), ("b", "2")]);
        assert_eq!(expand("${a}${b}", &v), "12");
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let v = vars(&[("Name", "upper")]);
        assert_eq!(expand("${name}", &v), "");
        assert_eq!(expand("${Name}", &v), "upper");
    }

    #[test]
    fn test_expansion_is_not_recursive() {
        // A value that itself looks like a placeholder is emitted as-is.
        let v = vars(&[("a", "${b}"), ("b", "resolved")]);
        assert_eq!(expand("${a}", &v), "${b}");
    }

    #[test]
    fn test_empty_name_looks_up_empty_key() {
        let v = vars(&[("", "void")]);
        assert_eq!(expand("${}", &v), "void");
    }
}
