//! Key validation errors.
//!
//! Every typed key in this crate is validated when it is constructed, so a
//! cipher transform never sees a malformed key. [`KeyError`] describes why a
//! raw key string was rejected.

use thiserror::Error;

/// Reasons a raw key could not be turned into a typed key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("key `{0}` is not a whole number")]
    NotANumber(String),

    #[error("rail fence needs at least 2 rails, got {0}")]
    TooFewRails(i64),

    #[error("monoalphabetic key must contain 26 letters, got {0}")]
    WrongKeyLength(usize),

    #[error("key character `{0}` is not a Latin letter")]
    NonLetter(char),

    #[error("letter `{0}` appears more than once in the monoalphabetic key")]
    RepeatedLetter(char),

    #[error("keyword must not be empty")]
    EmptyKeyword,

    #[error("column key must not be empty")]
    EmptyColumnKey,

    #[error("column key character `{0}` is not a digit")]
    NonDigit(char),

    #[error("word list must contain at least one word")]
    EmptyWordList,
}
