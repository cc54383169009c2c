//! Round state machine
//!
//! Owns the hidden word, lives, level, and countdown for a multi-round run
//! and judges each line of player input. Output goes through the
//! [`Presenter`] capability; randomness comes from an injected [`Rng`] so a
//! seeded source makes every run reproducible.

use super::config::GameConfig;
use super::presenter::{Presenter, SoundEffect};
use super::round::{Phase, Round};
use crate::catalog::Catalog;
use crate::core::{Tally, is_isogram};
use crate::output::formatters::{format_level_label, format_tally, format_timer};
use rand::Rng;
use std::fmt;

const WELCOME_BANNER: &str = "━━━ SECURE TERMINAL ━ password required ━━━";
const LOCKED_OUT_BANNER: &str = "━━━ LOCKED OUT ━━━";
const ACCESS_BANNER: &str = "━━━ ACCESS GRANTED ━━━";

/// Error type for starting a game or a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The catalog has no words of the length a level needs
    NoWordsForLevel { level: u32, length: usize },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWordsForLevel { level, length } => write!(
                f,
                "catalog has no {length}-letter words, required by level {level}"
            ),
        }
    }
}

impl std::error::Error for GameError {}

/// The Bull Cow state machine
///
/// Advances only on two external triggers: a line of player input
/// (`on_input`) and, in timed games, a once-per-second `tick`. Both are
/// expected to arrive serially; no internal blocking or scheduling.
pub struct Game<'a, R: Rng> {
    catalog: &'a Catalog,
    config: GameConfig,
    rng: R,
    round: Round,
}

impl<'a, R: Rng> Game<'a, R> {
    /// Start a run at level 1.
    ///
    /// Verifies up front that every configured level has a non-empty word
    /// bucket, then announces the first round through `out`.
    ///
    /// # Errors
    /// Returns `GameError::NoWordsForLevel` when the catalog cannot supply
    /// some level — a configuration error surfaced before play begins.
    pub fn new(
        catalog: &'a Catalog,
        config: GameConfig,
        mut rng: R,
        out: &mut impl Presenter,
    ) -> Result<Self, GameError> {
        for level in 1..=config.max_level {
            let length = config.word_length_for_level(level);
            if catalog.words_of_length(length).is_empty() {
                return Err(GameError::NoWordsForLevel { level, length });
            }
        }

        let round = Self::make_round(catalog, &config, &mut rng, 1)?;
        let game = Self {
            catalog,
            config,
            rng,
            round,
        };
        game.announce_round(out);
        Ok(game)
    }

    /// Feed one line of player input.
    ///
    /// In a terminal phase the line is the "continue" signal: a lost or
    /// completed run restarts at level 1, a cleared level starts the next
    /// one. Otherwise the line is judged as a guess.
    ///
    /// # Errors
    /// Returns `GameError::NoWordsForLevel` if the next round's bucket is
    /// empty, which `new` rules out for the configured levels.
    pub fn on_input(&mut self, input: &str, out: &mut impl Presenter) -> Result<(), GameError> {
        match self.round.phase {
            Phase::AwaitingGuess => {
                self.process_guess(input, out);
                Ok(())
            }
            Phase::RoundLost | Phase::GameComplete => {
                out.clear_screen();
                self.begin_round(1, out)
            }
            Phase::RoundWon | Phase::LevelAdvance => {
                out.clear_screen();
                self.begin_round(self.round.level, out)
            }
        }
    }

    /// Advance the countdown by one second.
    ///
    /// No-op in untimed games and outside a live round. Hitting zero takes
    /// the same failure path as running out of lives.
    pub fn tick(&mut self, out: &mut impl Presenter) {
        if self.round.phase != Phase::AwaitingGuess {
            return;
        }
        let Some(time_left) = self.round.time_left else {
            return;
        };

        let remaining = time_left.saturating_sub(1);
        self.round.time_left = Some(remaining);
        out.set_timer_label(&format_timer(remaining));

        if remaining == 0 {
            out.clear_screen();
            self.finish_round_lost("You ran out of time.", out);
        }
    }

    /// Current round state
    #[inline]
    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The answer for the live round. For reveal/debug hosts and tests.
    #[inline]
    #[must_use]
    pub fn hidden_word(&self) -> &str {
        self.round.hidden.text()
    }

    fn make_round(
        catalog: &Catalog,
        config: &GameConfig,
        rng: &mut R,
        level: u32,
    ) -> Result<Round, GameError> {
        let length = config.word_length_for_level(level);
        let hidden = catalog
            .pick(length, rng)
            .ok_or(GameError::NoWordsForLevel { level, length })?;

        Ok(Round::new(hidden.clone(), level, config.countdown))
    }

    fn begin_round(&mut self, level: u32, out: &mut impl Presenter) -> Result<(), GameError> {
        self.round = Self::make_round(self.catalog, &self.config, &mut self.rng, level)?;
        self.announce_round(out);
        Ok(())
    }

    fn announce_round(&self, out: &mut impl Presenter) {
        let round = &self.round;

        out.print_line(WELCOME_BANNER);
        out.print_line(&format!(
            "Guess the password. You have {} attempts.",
            round.lives
        ));
        out.print_line("Type in your guess and press Enter...");

        out.set_level_label(&format_level_label(round.level, round.hidden.len()));
        if let Some(seconds) = round.time_left {
            out.set_timer_label(&format_timer(seconds));
        }
    }

    // Precedence is load-bearing: exact match, then length, then isogram,
    // then life loss. Recoverable input mistakes never cost a life.
    fn process_guess(&mut self, guess: &str, out: &mut impl Presenter) {
        out.clear_screen();

        if guess == self.round.hidden.text() {
            out.play_sound(SoundEffect::Success);
            out.print_line("Login successful... Files secured.");
            self.finish_round_won(out);
            return;
        }

        let hidden_len = self.round.hidden.len();
        if guess.chars().count() != hidden_len {
            out.print_line(&format!("The password is {hidden_len} letters long."));
            out.print_line(&format!(
                "Try again. You have {} attempts remaining.",
                self.round.lives
            ));
            return;
        }

        if !is_isogram(guess) {
            out.print_line("No repeating letters. Guess again.");
            return;
        }

        out.play_sound(SoundEffect::Error);
        self.round.lives -= 1;
        out.print_line("The password you entered was incorrect.");

        if self.round.lives == 0 {
            self.finish_round_lost("Too many failed attempts.", out);
            return;
        }

        let tally = Tally::calculate(guess, self.round.hidden.text());
        out.print_line(&format!("You scored {}.", format_tally(tally)));
        out.print_line(&format!(
            "Guess again. You have {} attempts remaining.",
            self.round.lives
        ));
    }

    fn finish_round_won(&mut self, out: &mut impl Presenter) {
        self.round.phase = Phase::RoundWon;

        if self.round.level >= self.config.max_level {
            self.round.phase = Phase::GameComplete;
            out.print_line(ACCESS_BANNER);
            out.print_line("You're in. Grab the files and log off.");
            out.print_line("Press Enter to play again...");
        } else {
            self.round.phase = Phase::LevelAdvance;
            self.round.level += 1;
            out.print_line("Security layer cleared. Deeper systems await.");
            out.print_line("Press Enter to continue...");
        }
    }

    // Failure resets the run: the level drops back to 1 as part of the
    // transition, and begin_round re-derives every per-round counter.
    fn finish_round_lost(&mut self, reason: &str, out: &mut impl Presenter) {
        self.round.phase = Phase::RoundLost;
        self.round.level = 1;

        out.print_line(LOCKED_OUT_BANNER);
        out.print_line(reason);
        out.print_line(&format!("The password was: {}", self.round.hidden));
        out.print_line("Press Enter to start over...");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Transcript;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    // One word per length makes the hidden word deterministic regardless
    // of the rng.
    fn fixture_catalog() -> Catalog {
        Catalog::from_candidates(["tank", "ghost", "bounty", "auction", "keyboard"]).unwrap()
    }

    fn new_game(catalog: &Catalog, config: GameConfig) -> (Game<'_, StdRng>, Transcript) {
        let mut out = Transcript::default();
        let game = Game::new(catalog, config, StdRng::seed_from_u64(1), &mut out)
            .expect("fixture catalog covers every level");
        (game, out)
    }

    #[test]
    fn new_game_starts_level_one_with_lives_equal_to_word_length() {
        let catalog = fixture_catalog();
        let (game, out) = new_game(&catalog, GameConfig::default());

        assert_eq!(game.round().phase(), Phase::AwaitingGuess);
        assert_eq!(game.round().level(), 1);
        assert_eq!(game.round().lives(), 4);
        assert_eq!(game.round().time_left(), Some(60));
        assert_eq!(game.hidden_word(), "tank");

        assert_eq!(out.level_labels, vec!["Level 1: 4 characters"]);
        assert_eq!(out.timer_labels, vec!["1:00"]);
        assert!(out.contains("You have 4 attempts"));
    }

    #[test]
    fn new_game_fails_when_a_level_bucket_is_missing() {
        let catalog = Catalog::from_candidates(["tank"]).unwrap();
        let mut out = Transcript::default();

        let result = Game::new(
            &catalog,
            GameConfig::new(2, None),
            StdRng::seed_from_u64(0),
            &mut out,
        );

        assert!(matches!(
            result,
            Err(GameError::NoWordsForLevel {
                level: 2,
                length: 5
            })
        ));
    }

    #[test]
    fn wrong_length_guess_costs_no_life() {
        let catalog = fixture_catalog();
        let (mut game, mut out) = new_game(&catalog, GameConfig::default());

        game.on_input("ghost", &mut out).unwrap();

        assert_eq!(game.round().lives(), 4);
        assert_eq!(game.round().phase(), Phase::AwaitingGuess);
        assert_eq!(game.hidden_word(), "tank");
        assert!(out.contains("4 letters long"));
        assert!(out.sounds.is_empty());
    }

    #[test]
    fn non_isogram_guess_costs_no_life() {
        let catalog = fixture_catalog();
        let (mut game, mut out) = new_game(&catalog, GameConfig::default());

        game.on_input("tall", &mut out).unwrap();

        assert_eq!(game.round().lives(), 4);
        assert_eq!(game.round().phase(), Phase::AwaitingGuess);
        assert!(out.contains("No repeating letters"));
        assert!(out.sounds.is_empty());
    }

    #[test]
    fn length_check_precedes_isogram_check() {
        let catalog = fixture_catalog();
        let (mut game, mut out) = new_game(&catalog, GameConfig::default());

        // Wrong length and repeated letters: only the length is reported
        game.on_input("aabbcc", &mut out).unwrap();

        assert_eq!(game.round().lives(), 4);
        assert!(out.contains("4 letters long"));
        assert!(!out.contains("No repeating letters"));
    }

    #[test]
    fn incorrect_guess_loses_a_life_and_reports_bulls_and_cows() {
        let catalog = fixture_catalog();
        let (mut game, mut out) = new_game(&catalog, GameConfig::default());

        // "tame" vs "tank": t and a in place, m and e absent
        game.on_input("tame", &mut out).unwrap();

        assert_eq!(game.round().lives(), 3);
        assert_eq!(game.round().phase(), Phase::AwaitingGuess);
        assert!(out.contains("incorrect"));
        assert!(out.contains("2 bulls and 0 cows"));
        assert!(out.contains("3 attempts remaining"));
        assert_eq!(out.sounds, vec![SoundEffect::Error]);
    }

    #[test]
    fn exhausting_lives_reveals_the_word_and_resets_to_level_one() {
        let catalog = fixture_catalog();
        let (mut game, mut out) = new_game(&catalog, GameConfig::default());

        for _ in 0..4 {
            game.on_input("bone", &mut out).unwrap();
        }

        assert_eq!(game.round().lives(), 0);
        assert_eq!(game.round().phase(), Phase::RoundLost);
        assert_eq!(game.round().level(), 1);
        assert!(out.contains("The password was: tank"));

        // Continue restarts a fresh level-1 round
        game.on_input("", &mut out).unwrap();
        assert_eq!(game.round().phase(), Phase::AwaitingGuess);
        assert_eq!(game.round().level(), 1);
        assert_eq!(game.round().lives(), 4);
    }

    #[test]
    fn failure_on_a_later_level_resets_the_run() {
        let catalog = fixture_catalog();
        let (mut game, mut out) = new_game(&catalog, GameConfig::default());

        game.on_input("tank", &mut out).unwrap();
        game.on_input("", &mut out).unwrap();
        assert_eq!(game.round().level(), 2);

        for _ in 0..5 {
            game.on_input("crane", &mut out).unwrap();
        }
        assert_eq!(game.round().phase(), Phase::RoundLost);
        assert_eq!(game.round().level(), 1);

        game.on_input("", &mut out).unwrap();
        assert_eq!(game.round().level(), 1);
        assert_eq!(game.round().word_length(), 4);
    }

    #[test]
    fn exact_guess_advances_to_the_next_level() {
        let catalog = fixture_catalog();
        let (mut game, mut out) = new_game(&catalog, GameConfig::default());

        game.on_input("tank", &mut out).unwrap();

        assert_eq!(game.round().phase(), Phase::LevelAdvance);
        assert_eq!(game.round().level(), 2);
        assert_eq!(out.sounds, vec![SoundEffect::Success]);

        game.on_input("", &mut out).unwrap();
        assert_eq!(game.round().phase(), Phase::AwaitingGuess);
        assert_eq!(game.round().word_length(), 5);
        assert_eq!(game.round().lives(), 5);
        assert_eq!(game.hidden_word(), "ghost");
    }

    #[test]
    fn exact_guess_on_the_final_level_completes_the_game() {
        let catalog = fixture_catalog();
        let (mut game, mut out) = new_game(&catalog, GameConfig::new(1, None));

        game.on_input("tank", &mut out).unwrap();

        assert_eq!(game.round().phase(), Phase::GameComplete);
        assert!(out.contains("Press Enter to play again"));

        game.on_input("", &mut out).unwrap();
        assert_eq!(game.round().phase(), Phase::AwaitingGuess);
        assert_eq!(game.round().level(), 1);
    }

    #[test]
    fn full_run_reaches_game_complete() {
        let catalog = fixture_catalog();
        let (mut game, mut out) = new_game(&catalog, GameConfig::default());

        for level in 1..=5 {
            assert_eq!(game.round().level(), level);
            let answer = game.hidden_word().to_string();
            game.on_input(&answer, &mut out).unwrap();

            if level < 5 {
                assert_eq!(game.round().phase(), Phase::LevelAdvance);
                game.on_input("", &mut out).unwrap();
            }
        }

        assert_eq!(game.round().phase(), Phase::GameComplete);
    }

    #[test]
    fn tick_counts_down_and_updates_the_label() {
        let catalog = fixture_catalog();
        let (mut game, mut out) = new_game(&catalog, GameConfig::new(5, Some(3)));

        game.tick(&mut out);

        assert_eq!(game.round().time_left(), Some(2));
        assert_eq!(out.timer_labels.last().map(String::as_str), Some("0:02"));
        assert_eq!(game.round().phase(), Phase::AwaitingGuess);
    }

    #[test]
    fn countdown_expiry_fails_the_round() {
        let catalog = fixture_catalog();
        let (mut game, mut out) = new_game(&catalog, GameConfig::new(5, Some(2)));

        game.tick(&mut out);
        game.tick(&mut out);

        assert_eq!(game.round().phase(), Phase::RoundLost);
        assert_eq!(game.round().level(), 1);
        assert!(out.contains("ran out of time"));
        assert!(out.contains("The password was: tank"));
    }

    #[test]
    fn tick_is_inert_when_untimed_or_between_rounds() {
        let catalog = fixture_catalog();

        let (mut game, mut out) = new_game(&catalog, GameConfig::untimed());
        game.tick(&mut out);
        assert_eq!(game.round().time_left(), None);
        assert!(out.timer_labels.is_empty());

        let (mut game, mut out) = new_game(&catalog, GameConfig::new(5, Some(10)));
        game.on_input("tank", &mut out).unwrap();
        let before = game.round().time_left();
        game.tick(&mut out);
        assert_eq!(game.round().time_left(), before);
    }

    #[test]
    fn wrong_guesses_keep_the_hidden_word_stable() {
        let catalog = fixture_catalog();
        let (mut game, mut out) = new_game(&catalog, GameConfig::default());

        let hidden = game.hidden_word().to_string();
        game.on_input("way-too-long", &mut out).unwrap();
        game.on_input("tall", &mut out).unwrap();
        game.on_input("bone", &mut out).unwrap();

        assert_eq!(game.hidden_word(), hidden);
    }
}
