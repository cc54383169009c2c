//! Host-facing presentation capabilities
//!
//! The state machine pushes formatted status lines, two ancillary display
//! labels, and sound cues through this seam. Hosts decide what a "screen"
//! or a "sound" actually is; the engine itself has no terminal, audio, or
//! timer dependency.

/// Sound cues a host may map to audio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// The hidden word was guessed
    Success,
    /// A valid guess was wrong and cost a life
    Error,
}

/// Receives everything the game wants shown to the player
pub trait Presenter {
    /// Append one formatted status line
    fn print_line(&mut self, line: &str);

    /// Drop previously shown lines; hosts without screen control may ignore it
    fn clear_screen(&mut self) {}

    /// Update the "Level N: L characters" label
    fn set_level_label(&mut self, label: &str);

    /// Update the remaining-time label
    fn set_timer_label(&mut self, label: &str);

    /// Trigger a sound cue; silent hosts may ignore it
    fn play_sound(&mut self, _effect: SoundEffect) {}
}

/// Recording presenter: captures everything the engine emits.
///
/// Backs deterministic engine tests and any headless host that wants to
/// inspect output after the fact.
#[derive(Debug, Default, Clone)]
pub struct Transcript {
    pub lines: Vec<String>,
    pub level_labels: Vec<String>,
    pub timer_labels: Vec<String>,
    pub sounds: Vec<SoundEffect>,
    pub clears: usize,
}

impl Transcript {
    /// True if any recorded line contains `needle`
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }

    /// Lines recorded since the last `clear_screen`
    #[must_use]
    pub fn current_screen(&self) -> &[String] {
        &self.lines
    }
}

impl Presenter for Transcript {
    fn print_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    fn clear_screen(&mut self) {
        self.lines.clear();
        self.clears += 1;
    }

    fn set_level_label(&mut self, label: &str) {
        self.level_labels.push(label.to_string());
    }

    fn set_timer_label(&mut self, label: &str) {
        self.timer_labels.push(label.to_string());
    }

    fn play_sound(&mut self, effect: SoundEffect) {
        self.sounds.push(effect);
    }
}
