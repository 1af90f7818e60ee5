const MAX_VISIBLE_CHARS: usize = 100;

const SENSITIVE_MARKERS: [&str; 5] = ["bearer ", "api_key=", "password=", "secret=", "token="];

/// Renders a user question for log output: trimmed, truncated on a char
/// boundary, and with credential-looking values masked.
pub fn sanitize_question(question: &str) -> String {
    let trimmed = question.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total = trimmed.chars().count();
    let visible = if total > MAX_VISIBLE_CHARS {
        let head: String = trimmed.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{}... ({} chars total)", head, total)
    } else {
        trimmed.to_string()
    };

    SENSITIVE_MARKERS
        .iter()
        .fold(visible, |text, marker| redact_after(&text, marker))
}

/// Masks every value following `marker` (matched case-insensitively) up to the
/// next whitespace, `&` or quote.
fn redact_after(text: &str, marker: &str) -> String {
    let lowered = text.to_ascii_lowercase();
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;

    while let Some(found) = lowered[cursor..].find(marker) {
        let value_start = cursor + found + marker.len();
        let value_end = text[value_start..]
            .find(|c: char| c.is_whitespace() || c == '&' || c == '"' || c == '\'')
            .map(|i| value_start + i)
            .unwrap_or(text.len());

        out.push_str(&text[cursor..value_start]);
        out.push_str("[REDACTED]");
        cursor = value_end;
    }

    out.push_str(&text[cursor..]);
    out
}
