use movement_core::detail::DetailRow;

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Popup body for one behaviour circle.
pub fn popup_html(rows: &[DetailRow]) -> String {
    let lines = rows
        .iter()
        .map(|row| format!("<b>{}:</b> {}", row.label, escape_html(&row.value)))
        .collect::<Vec<_>>()
        .join("<br>");

    format!("<div class=\"popup-content\">{lines}</div>")
}
