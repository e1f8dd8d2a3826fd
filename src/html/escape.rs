//! HTML escaping for text and attribute values.

/// Escape `&`, `<`, `>`, `"` and `'` so the result is safe both as element
/// text and inside a quoted attribute.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape("<script>alert(1)</script>"),
            "&lt;script&gt;alert(1)&lt;/script&gt;"
        );
    }

    #[test]
    fn escapes_quotes_and_ampersand() {
        assert_eq!(escape(r#"Tom & "Jerry's""#), "Tom &amp; &quot;Jerry&#39;s&quot;");
    }

    #[test]
    fn plain_text_unchanged() {
        assert_eq!(escape("Blue in Green"), "Blue in Green");
        assert_eq!(escape("Café – 東京"), "Café – 東京");
    }

    #[test]
    fn ampersand_escaped_once() {
        assert_eq!(escape("&amp;"), "&amp;amp;");
    }
}
