// Small helpers for the hand-rolled XML/HTML writers. Everything that ends
// up between angle brackets goes through `escape` first.

pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Writes `{indent}<{tag}>{escaped value}</{tag}>\n`.
pub(crate) fn push_element(out: &mut String, indent: &str, tag: &str, value: &str) {
    out.push_str(indent);
    out.push('<');
    out.push_str(tag);
    out.push('>');
    out.push_str(&escape(value));
    out.push_str("</");
    out.push_str(tag);
    out.push_str(">\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_all_specials() {
        assert_eq!(
            escape(r#"<a href="x">&'b'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&apos;b&apos;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_push_element_namespaced_tag() {
        let mut out = String::new();
        push_element(&mut out, "  ", "image:loc", "https://e.com/a&b.jpg");
        assert_eq!(out, "  <image:loc>https://e.com/a&amp;b.jpg</image:loc>\n");
    }
}
