/// Replaces the five HTML-significant characters with entities.
///
/// Each occurrence is handled exactly once, so `&` produced by an entity is never
/// re-escaped within the same call. Escaping already escaped text is not detected:
/// `&amp;` becomes `&amp;amp;`.
pub fn escape(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPECIAL: [char; 5] = ['&', '<', '>', '"', '\''];

    fn chained_replace(input: &str) -> String {
        input
            .replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&#039;")
    }

    #[test]
    fn escapes_each_special_character() {
        assert_eq!(escape("&"), "&amp;");
        assert_eq!(escape("<"), "&lt;");
        assert_eq!(escape(">"), "&gt;");
        assert_eq!(escape("\""), "&quot;");
        assert_eq!(escape("'"), "&#039;");
    }

    #[test]
    fn escapes_every_occurrence() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry' & co</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#039;Jerry&#039; &amp; co&lt;/a&gt;"
        );
    }

    #[test]
    fn leaves_plain_text_untouched() {
        assert_eq!(escape(""), "");
        assert_eq!(escape("octocat"), "octocat");
        assert_eq!(escape("東京 / café"), "東京 / café");
    }

    #[test]
    fn escaping_twice_escapes_the_ampersands_again() {
        assert_eq!(escape("&amp;"), "&amp;amp;");
        assert_eq!(escape(&escape("<")), "&amp;lt;");
    }

    #[test]
    fn output_has_no_raw_special_characters_for_any_ordering() {
        let mut inputs = Vec::new();
        for a in SPECIAL {
            for b in SPECIAL {
                for c in SPECIAL {
                    inputs.push(format!("{a}x{b}{c} y"));
                }
            }
        }

        for input in inputs {
            let escaped = escape(&input);
            let stripped = escaped
                .replace("&amp;", "")
                .replace("&lt;", "")
                .replace("&gt;", "")
                .replace("&quot;", "")
                .replace("&#039;", "");
            assert!(
                !stripped.contains(&SPECIAL[..]),
                "raw special character left in {escaped:?} for {input:?}"
            );
            assert_eq!(escaped, chained_replace(&input), "input {input:?}");
        }
    }
}
