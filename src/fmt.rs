use colored::Colorize;

use crate::matcher::longest_common_substring;

/// Amount text in green when positive, red otherwise.
pub fn amount(text: &str, value: f64) -> String {
    if value > 0.0 {
        text.green().to_string()
    } else {
        text.red().to_string()
    }
}

/// Render `text` with the block it shares with `reference` in green. With
/// `as_error`, the rest of `text` is red.
pub fn highlight(reference: &str, text: &str, as_error: bool) -> String {
    let span = longest_common_substring(reference, text);
    let range = span.range();
    let (before, matched, after) = (&text[..range.start], &text[range.clone()], &text[range.end..]);
    if as_error {
        format!("{}{}{}", before.red(), matched.green(), after.red())
    } else {
        format!("{}{}{}", before, matched.green(), after)
    }
}

/// Placeholder for a missing category or match.
pub fn none() -> String {
    "<none>".red().to_string()
}

pub fn or_none(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => none(),
    }
}
