//! One-shot guess scoring command
//!
//! Runs a single guess through the same ladder the game uses: length
//! check, isogram check, then bulls and cows.

use crate::core::{Tally, Word, is_isogram};

/// Result of scoring one guess against a hidden word
#[derive(Debug)]
pub struct ScoreResult {
    pub guess: String,
    pub hidden: String,
    pub tally: Tally,
    pub exact: bool,
}

/// Score `guess` against `hidden`.
///
/// The hidden word must be a valid catalog word; the guess must match its
/// length and repeat no letter. Comparisons are case-sensitive: the hidden
/// word is normalized to lowercase, the guess is taken as typed.
///
/// # Errors
///
/// Returns an error if:
/// - The hidden word is not an isogram of 4 to 8 letters
/// - The guess length differs from the hidden word's
/// - The guess repeats a letter
pub fn score_guess(guess: &str, hidden: &str) -> Result<ScoreResult, String> {
    let hidden = Word::new(hidden).map_err(|e| format!("Invalid hidden word: {e}"))?;

    let guess_len = guess.chars().count();
    if guess_len != hidden.len() {
        return Err(format!(
            "Guess must be {} letters to match the hidden word, got {guess_len}",
            hidden.len()
        ));
    }

    if !is_isogram(guess) {
        return Err("Guess must not repeat a letter".to_string());
    }

    let tally = Tally::calculate(guess, hidden.text());

    Ok(ScoreResult {
        guess: guess.to_string(),
        hidden: hidden.text().to_string(),
        exact: tally.is_all_bulls(hidden.len()),
        tally,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_a_valid_pair() {
        let result = score_guess("abdc", "abcd").unwrap();

        assert_eq!(result.tally, Tally { bulls: 2, cows: 2 });
        assert!(!result.exact);
        assert_eq!(result.hidden, "abcd");
    }

    #[test]
    fn exact_guess_is_flagged() {
        let result = score_guess("ghost", "ghost").unwrap();

        assert_eq!(result.tally, Tally { bulls: 5, cows: 0 });
        assert!(result.exact);
    }

    #[test]
    fn hidden_word_is_validated() {
        assert!(score_guess("abcd", "cat").is_err());
        assert!(score_guess("abcd", "balloon").is_err());
    }

    #[test]
    fn guess_length_must_match() {
        let result = score_guess("ghost", "tank");
        assert!(result.unwrap_err().contains("4 letters"));
    }

    #[test]
    fn guess_must_be_an_isogram() {
        let result = score_guess("tall", "tank");
        assert!(result.unwrap_err().contains("repeat"));
    }

    #[test]
    fn hidden_word_is_normalized_but_guess_is_not() {
        let result = score_guess("TANK", "Tank").unwrap();
        assert_eq!(result.tally, Tally { bulls: 0, cows: 0 });

        let result = score_guess("tank", "TANK").unwrap();
        assert!(result.exact);
    }
}
