//! Core domain types for Bull Cow
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod tally;
mod word;

pub use tally::Tally;
pub use word::{Word, WordError, is_isogram};
