//! Text helpers for long-form profile fields

/// Split long-form text into paragraphs on blank-line boundaries.
/// Example: "Para one.\n\nPara two." -> ["Para one.", "Para two."]
pub fn paragraphs(text: &str) -> Vec<String> {
    text.replace("\r\n", "\n")
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// First character of every whitespace separated token.
/// Example: "Naveen Selvan" -> "NS"
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|token| token.chars().next())
        .collect()
}

/// "start – end" when both bounds are present, otherwise whichever one is.
pub fn span(start: Option<&str>, end: Option<&str>) -> Option<String> {
    let start = start.map(str::trim).filter(|s| !s.is_empty());
    let end = end.map(str::trim).filter(|s| !s.is_empty());
    match (start, end) {
        (Some(s), Some(e)) => Some(format!("{} – {}", s, e)),
        (Some(only), None) | (None, Some(only)) => Some(only.to_string()),
        (None, None) => None,
    }
}
