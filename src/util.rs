// src/util.rs — Shared utility functions

/// Shorten `s` to at most `max_chars` characters for one-line display,
/// ending with an ellipsis when anything was cut. Newlines become spaces.
pub fn ellipsize(s: &str, max_chars: usize) -> String {
    let flat: String = s
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let keep = max_chars.saturating_sub(1);
    let mut out: String = flat.chars().take(keep).collect();
    out.push('\u{2026}');
    out
}
