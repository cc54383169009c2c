//! Bulls and cows scoring
//!
//! A bull is a guessed letter in the correct position; a cow is a guessed
//! letter present in the hidden word but in the wrong position.

/// Feedback for one guess against the hidden word
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Tally {
    /// Letters in the correct position
    pub bulls: u8,
    /// Letters present elsewhere in the hidden word
    pub cows: u8,
}

impl Tally {
    /// Score `guess` against `hidden`.
    ///
    /// For each position: a matching letter counts as a bull; otherwise a
    /// letter that occurs anywhere in `hidden` counts as a cow. The caller
    /// guarantees both strings have the same character count (the game's
    /// guess ladder checks length before scoring). With isogram inputs no
    /// letter repeats, so no tie-break between bulls and cows is needed.
    ///
    /// # Examples
    /// ```
    /// use bullcow::core::Tally;
    ///
    /// let tally = Tally::calculate("badc", "abcd");
    /// assert_eq!(tally, Tally { bulls: 0, cows: 4 });
    /// ```
    #[must_use]
    pub fn calculate(guess: &str, hidden: &str) -> Self {
        debug_assert_eq!(guess.chars().count(), hidden.chars().count());

        let hidden_chars: Vec<char> = hidden.chars().collect();
        let mut tally = Self::default();

        for (position, letter) in guess.chars().enumerate() {
            if hidden_chars.get(position) == Some(&letter) {
                tally.bulls += 1;
            } else if hidden_chars.contains(&letter) {
                tally.cows += 1;
            }
        }

        tally
    }

    /// True if every position matched (the guess equals the hidden word)
    #[inline]
    #[must_use]
    pub fn is_all_bulls(self, word_len: usize) -> bool {
        usize::from(self.bulls) == word_len
    }
}
