//! Definition text sanitizer
//!
//! Raw angle brackets are replaced with `&gt` / `&lt` before the definition is
//! decoded, so no markup survives into names, descriptions or tags. The
//! replacements carry no trailing `;`. Only bracket characters are matched;
//! escape text already present in the input is left as written.

/// Escape every `<` and `>` in the definition text
pub fn sanitize_definition(definition: &str) -> String {
    let mut sanitized = String::with_capacity(definition.len());
    for c in definition.chars() {
        match c {
            '>' => sanitized.push_str("&gt"),
            '<' => sanitized.push_str("&lt"),
            _ => sanitized.push(c),
        }
    }
    sanitized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brackets_are_escaped() {
        assert_eq!(sanitize_definition("<b>API</b>"), "&ltb&gtAPI&lt/b&gt");
    }

    #[test]
    fn test_plain_text_is_untouched() {
        let json = r#"{"type":"Person","name":"User"}"#;
        assert_eq!(sanitize_definition(json), json);
    }

    #[test]
    fn test_existing_escapes_are_kept() {
        assert_eq!(sanitize_definition("a &gt b"), "a &gt b");
    }

    #[test]
    fn test_multibyte_text_is_preserved() {
        assert_eq!(sanitize_definition("Café -> Bar"), "Café -&gt Bar");
    }
}
