//! JSON object extraction from free-form model output
//!
//! Models wrap their JSON in prose or code fences. The scanner returns the
//! first balanced `{...}` span, skipping braces inside string literals, so
//! trailing text with its own braces is never swallowed.

/// Return the first complete top-level JSON object in `text`, if any
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    let end = start + offset + ch.len_utf8();
                    return Some(&text[start..end]);
                }
            }
            _ => {}
        }
    }

    None
}

/// Span from the first `{` to the last `}` after it, balanced or not.
///
/// A reply with such a span but no balanced object is broken JSON (for
/// example cut off at the token limit), not a reply without JSON.
pub(crate) fn brace_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}').filter(|&end| end > start)?;
    Some(&text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_object() {
        assert_eq!(extract_json_object(r#"{"a": 1}"#), Some(r#"{"a": 1}"#));
    }

    #[test]
    fn test_object_inside_prose_and_fences() {
        let text = "分析結果です。\n```json\n{\"analysis\": \"ok\"}\n```\n以上。";
        assert_eq!(extract_json_object(text), Some("{\"analysis\": \"ok\"}"));
    }

    #[test]
    fn test_no_braces() {
        assert_eq!(extract_json_object("no json here"), None);
        assert_eq!(extract_json_object(""), None);
    }

    #[test]
    fn test_unbalanced_has_no_object_but_a_brace_span() {
        let truncated = r#"{"a": {"b": 1}, "c": {"d": "誠実""#;
        assert_eq!(extract_json_object(truncated), None);
        assert_eq!(brace_span(truncated), Some(r#"{"a": {"b": 1}"#));

        assert_eq!(brace_span("closing only }"), None);
        assert_eq!(brace_span("} before {"), None);
        assert_eq!(brace_span(r#"{"cut": "#), None);
    }

    #[test]
    fn test_nested_objects() {
        let text = r#"x {"p": {"name": "自由", "confidence": 78}} y"#;
        assert_eq!(
            extract_json_object(text),
            Some(r#"{"p": {"name": "自由", "confidence": 78}}"#)
        );
    }

    #[test]
    fn test_braces_inside_strings_are_ignored() {
        let text = r#"{"evidence": "said \"}\" and {smiled}"} trailing"#;
        assert_eq!(
            extract_json_object(text),
            Some(r#"{"evidence": "said \"}\" and {smiled}"}"#)
        );
    }

    #[test]
    fn test_trailing_object_is_not_included() {
        let text = r#"{"first": 1} and later {"second": 2}"#;
        assert_eq!(extract_json_object(text), Some(r#"{"first": 1}"#));
    }
}
