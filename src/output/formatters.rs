//! Formatting utilities for status lines and labels

use crate::core::Tally;

/// Format remaining seconds as a countdown label like `1:00` or `0:07`
#[must_use]
pub fn format_timer(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Format the level label shown next to the play area
#[must_use]
pub fn format_level_label(level: u32, word_length: usize) -> String {
    format!("Level {level}: {word_length} characters")
}

/// Format a tally as a phrase like `2 bulls and 1 cow`
#[must_use]
pub fn format_tally(tally: Tally) -> String {
    format!(
        "{} {} and {} {}",
        tally.bulls,
        if tally.bulls == 1 { "bull" } else { "bulls" },
        tally.cows,
        if tally.cows == 1 { "cow" } else { "cows" },
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_label_is_minutes_and_padded_seconds() {
        assert_eq!(format_timer(60), "1:00");
        assert_eq!(format_timer(59), "0:59");
        assert_eq!(format_timer(7), "0:07");
        assert_eq!(format_timer(0), "0:00");
        assert_eq!(format_timer(125), "2:05");
    }

    #[test]
    fn level_label_names_level_and_length() {
        assert_eq!(format_level_label(3, 6), "Level 3: 6 characters");
    }

    #[test]
    fn tally_phrase_pluralizes_each_count() {
        assert_eq!(
            format_tally(Tally { bulls: 2, cows: 0 }),
            "2 bulls and 0 cows"
        );
        assert_eq!(
            format_tally(Tally { bulls: 1, cows: 1 }),
            "1 bull and 1 cow"
        );
        assert_eq!(
            format_tally(Tally { bulls: 0, cows: 3 }),
            "0 bulls and 3 cows"
        );
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }
}
