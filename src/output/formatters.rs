//! Formatting utilities for terminal output

/// Split `word` around the letter at `position`
///
/// Returns (before, changed letter, after). Out-of-range positions put the
/// whole word in `before`.
#[must_use]
pub fn split_at_change(word: &str, position: usize) -> (&str, &str, &str) {
    if position >= word.len() {
        return (word, "", "");
    }
    (
        &word[..position],
        &word[position..=position],
        &word[position + 1..],
    )
}

/// A line with a caret under `position`, `width` columns wide
#[must_use]
pub fn change_marker(position: usize, width: usize) -> String {
    (0..width)
        .map(|i| if i == position { '^' } else { ' ' })
        .collect::<String>()
        .trim_end()
        .to_string()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
