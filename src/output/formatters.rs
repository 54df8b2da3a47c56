//! Formatting utilities for terminal output

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar for one bucket of the guess distribution
#[must_use]
pub fn distribution_bar(count: usize, max_count: usize, width: usize) -> String {
    if max_count == 0 {
        return "░".repeat(width);
    }
    create_progress_bar(count as f64, max_count as f64, width)
}
