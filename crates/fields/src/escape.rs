//! HTML escaping and the restricted sanitizer for rich-text fields.

/// Escapes text for use in HTML content or attribute values.
pub fn html(s: &str) -> String {
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

/// Escapes text and converts newlines to `<br />`, for multi-line values.
pub fn html_multiline(s: &str) -> String {
    html(s).replace("\r\n", "<br />").replace('\n', "<br />")
}

/// Restricted-tag sanitizer for fields that legitimately carry markup
/// (HTML blocks, section descriptions, consent text).
///
/// Removes script/style elements wholesale, strips inline event handler
/// attributes and neutralizes `javascript:` URLs. Everything else passes
/// through.
pub fn sanitize_rich(s: &str) -> String {
    let without_blocks = strip_element(&strip_element(s, "script"), "style");
    let without_handlers = strip_event_attributes(&without_blocks);
    strip_js_urls(&without_handlers)
}

fn strip_element(input: &str, tag: &str) -> String {
    let open = format!("<{tag}");
    let close = format!("</{tag}>");
    let lower = input.to_lowercase();
    let mut out = String::with_capacity(input.len());
    let mut pos = 0;
    while let Some(rel) = lower[pos..].find(&open) {
        let start = pos + rel;
        out.push_str(&input[pos..start]);
        match lower[start..].find(&close) {
            Some(end_rel) => pos = start + end_rel + close.len(),
            // Unclosed block swallows the rest of the input.
            None => return out,
        }
    }
    out.push_str(&input[pos..]);
    out
}

fn strip_event_attributes(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = String::with_capacity(input.len());
    let mut i = 0;
    while i < bytes.len() {
        if is_event_attr_start(input, i) {
            let mut j = i;
            // attribute name
            while j < bytes.len() && (bytes[j].is_ascii_alphanumeric() || bytes[j] == b'_') {
                j += 1;
            }
            while j < bytes.len() && bytes[j].is_ascii_whitespace() {
                j += 1;
            }
            if j < bytes.len() && bytes[j] == b'=' {
                j += 1;
                while j < bytes.len() && bytes[j].is_ascii_whitespace() {
                    j += 1;
                }
                if j < bytes.len() && (bytes[j] == b'"' || bytes[j] == b'\'') {
                    let quote = bytes[j];
                    j += 1;
                    while j < bytes.len() && bytes[j] != quote {
                        j += 1;
                    }
                    j = (j + 1).min(bytes.len());
                } else {
                    while j < bytes.len() && !bytes[j].is_ascii_whitespace() && bytes[j] != b'>' {
                        j += 1;
                    }
                }
                i = j;
                continue;
            }
        }
        let ch = input[i..].chars().next().unwrap_or('\0');
        out.push(ch);
        i += ch.len_utf8();
    }
    out
}

fn is_event_attr_start(input: &str, i: usize) -> bool {
    if i == 0 || !input.is_char_boundary(i) {
        return false;
    }
    let prev = input.as_bytes()[i - 1];
    if !prev.is_ascii_whitespace() {
        return false;
    }
    let rest = &input[i..];
    let lower = rest.get(..2).map(str::to_lowercase);
    lower.as_deref() == Some("on")
        && rest
            .as_bytes()
            .get(2)
            .is_some_and(|b| b.is_ascii_alphabetic())
}

fn strip_js_urls(input: &str) -> String {
    let lower = input.to_lowercase();
    let mut out = String::with_capacity(input.len());
    let mut pos = 0;
    while let Some(rel) = lower[pos..].find("javascript:") {
        let start = pos + rel;
        out.push_str(&input[pos..start]);
        pos = start + "javascript:".len();
    }
    out.push_str(&input[pos..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_special_characters() {
        assert_eq!(
            html(r#"<b>"Tom & Jerry's"</b>"#),
            "&lt;b&gt;&quot;Tom &amp; Jerry&#39;s&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn multiline_converts_newlines() {
        assert_eq!(html_multiline("a\nb\r\nc"), "a<br />b<br />c");
    }

    #[test]
    fn sanitizer_removes_script_blocks() {
        let input = "<p>keep</p><script>alert(1)</script><em>this</em>";
        assert_eq!(sanitize_rich(input), "<p>keep</p><em>this</em>");
    }

    #[test]
    fn sanitizer_removes_event_handlers() {
        let input = r#"<img src="x.png" onerror="alert(1)" alt="ok">"#;
        let cleaned = sanitize_rich(input);
        assert!(!cleaned.to_lowercase().contains("onerror"));
        assert!(cleaned.contains(r#"src="x.png""#));
        assert!(cleaned.contains(r#"alt="ok""#));
    }

    #[test]
    fn sanitizer_neutralizes_js_urls() {
        let input = r#"<a href="JavaScript:alert(1)">x</a>"#;
        assert!(!sanitize_rich(input).to_lowercase().contains("javascript:"));
    }

    #[test]
    fn sanitizer_keeps_plain_markup() {
        let input = "<h2>Title</h2><p class=\"intro\">Body</p>";
        assert_eq!(sanitize_rich(input), input);
    }
}
