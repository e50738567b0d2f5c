/// Escape text for an attribute value or text node.
///
/// Replaces `&`, `"`, `'`, `<` and `>` with `&amp;`, `&quot;`, `&apos;`,
/// `&lt;` and `&gt;`. Every character is examined once, so an existing
/// `&amp;` becomes `&amp;amp;` and decodes back to what was written.
#[must_use]
pub fn encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
    out
}
