/// Escapes `&`, `<` and `>` for HTML text content. Newlines pass through.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        push_escaped_char(&mut escaped, ch);
    }
    escaped
}

/// Escapes a value for use inside a quoted HTML attribute.
pub fn escape_html_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => push_escaped_char(&mut escaped, ch),
        }
    }
    escaped
}

/// Appends one character of text content, escaped.
pub fn push_escaped_char(out: &mut String, ch: char) {
    match ch {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        _ => out.push(ch),
    }
}
