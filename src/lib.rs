//! Bull Cow
//!
//! A terminal password-breaching minigame: guess the hidden isogram before
//! your attempts or the countdown run out. Bulls are letters in the correct
//! position, cows are letters hiding elsewhere in the word.
//!
//! # Quick Start
//!
//! ```rust
//! use bullcow::core::{Tally, is_isogram};
//!
//! assert!(is_isogram("ghost"));
//!
//! let tally = Tally::calculate("badc", "abcd");
//! assert_eq!((tally.bulls, tally.cows), (0, 4));
//! ```

// Core domain types
pub mod core;

// Hidden-word catalog
pub mod catalog;

// Round state machine
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
