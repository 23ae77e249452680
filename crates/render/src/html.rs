/// Escape text for use in element content and double-quoted attributes.
pub fn escape_html(input: &str) -> String {
    input
        .chars()
        .map(|ch| match ch {
            '<' => "&lt;".into(),
            '>' => "&gt;".into(),
            '&' => "&amp;".into(),
            '"' => "&quot;".into(),
            '\'' => "&#39;".into(),
            _ => ch.to_string(),
        })
        .collect::<String>()
}

/// `<a href="url" target="_blank">text</a>` with both parts escaped.
pub fn anchor(url: &str, text: &str) -> String {
    format!(
        r#"<a href="{}" target="_blank">{}</a>"#,
        escape_html(url),
        escape_html(text)
    )
}

/// Relevance score in [0, 1] as a whole percentage. Halves round away from zero.
pub fn format_relevance(score: f64) -> String {
    format!("{:.0}%", (score * 100.0).round())
}
