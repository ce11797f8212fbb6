//! Link normalization for shortcut destinations.

/// Turn user-entered link text into an absolute URL.
///
/// Blank input yields an empty string. Input that already carries a URI
/// scheme is returned trimmed, protocol-relative input gains `https:`, and
/// anything else gains `https://` after leading slashes are stripped.
#[must_use]
pub fn normalize_url(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if has_scheme(trimmed) {
        return trimmed.to_string();
    }
    if trimmed.starts_with("//") {
        return format!("https:{trimmed}");
    }
    format!("https://{}", trimmed.trim_start_matches('/'))
}

/// `letter (letter | digit | '+' | '.' | '-')* ':'` prefix check.
fn has_scheme(value: &str) -> bool {
    let mut chars = value.chars();
    if !chars.next().is_some_and(|c| c.is_ascii_alphabetic()) {
        return false;
    }
    for c in chars {
        match c {
            ':' => return true,
            c if c.is_ascii_alphanumeric() || matches!(c, '+' | '.' | '-') => {}
            _ => return false,
        }
    }
    false
}
