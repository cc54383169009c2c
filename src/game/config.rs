//! Game tunables

use crate::core::Word;

/// Countdown seconds granted per round in timed games
pub const DEFAULT_COUNTDOWN_SECS: u32 = 60;

/// Number of levels in a default run, one per word length 4..=8
pub const DEFAULT_MAX_LEVEL: u32 = 5;

/// Tunable parameters for a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Levels to clear before the run is complete
    pub max_level: u32,
    /// Seconds on the per-round countdown; `None` disables the timer
    pub countdown: Option<u32>,
}

impl GameConfig {
    /// Create a config from explicit tunables
    #[must_use]
    pub const fn new(max_level: u32, countdown: Option<u32>) -> Self {
        Self {
            max_level,
            countdown,
        }
    }

    /// Default levels with the countdown disabled
    #[must_use]
    pub const fn untimed() -> Self {
        Self::new(DEFAULT_MAX_LEVEL, None)
    }

    /// Hidden-word length for a level.
    ///
    /// Level 1 maps to the shortest accepted length and each level adds a
    /// letter, clamped at the longest accepted length so over-long runs
    /// repeat the hardest words instead of failing.
    #[must_use]
    pub fn word_length_for_level(&self, level: u32) -> usize {
        let offset = level.saturating_sub(1) as usize;
        (Word::MIN_LEN + offset).min(Word::MAX_LEN)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LEVEL, Some(DEFAULT_COUNTDOWN_SECS))
    }
}
