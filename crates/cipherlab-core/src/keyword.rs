//! Letters-only keywords used by the Playfair and Vigenère ciphers.

use std::{fmt, str::FromStr};

use crate::{
    alphabet::{self, LetterCase},
    error::KeyError,
};

/// A non-empty keyword made only of Latin letters.
///
/// The original spelling is kept because some ciphers derive their output
/// case from it.
///
/// # Examples
///
/// ```
/// use cipherlab_core::keyword::Keyword;
///
/// let keyword: Keyword = "Lemon".parse().unwrap();
/// assert_eq!(keyword.offsets().collect::<Vec<_>>(), vec![11, 4, 12, 14, 13]);
/// assert!("lem0n".parse::<Keyword>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Keyword(String);

impl Keyword {
    /// Validates `word` as a keyword.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::EmptyKeyword`] for an empty string and
    /// [`KeyError::NonLetter`] for the first character that is not a Latin
    /// letter.
    pub fn new(word: impl Into<String>) -> Result<Self, KeyError> {
        let word = word.into();
        if word.is_empty() {
            return Err(KeyError::EmptyKeyword);
        }
        if let Some(bad) = word.chars().find(|ch| !ch.is_ascii_alphabetic()) {
            return Err(KeyError::NonLetter(bad));
        }
        Ok(Self(word))
    }

    /// Wraps a word that already came out of a validated [`WordList`].
    ///
    /// [`WordList`]: crate::words::WordList
    pub(crate) fn from_word(word: String) -> Self {
        debug_assert!(!word.is_empty() && word.chars().all(|ch| ch.is_ascii_alphabetic()));
        Self(word)
    }

    /// Returns the keyword as written.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Alphabet offsets of the keyword letters, case ignored.
    pub fn offsets(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.chars().filter_map(alphabet::position)
    }

    /// [`LetterCase::Lower`] when every letter is lowercase, otherwise
    /// [`LetterCase::Upper`].
    pub fn letter_case(&self) -> LetterCase {
        if self.0.chars().all(|ch| ch.is_ascii_lowercase()) {
            LetterCase::Lower
        } else {
            LetterCase::Upper
        }
    }
}

impl FromStr for Keyword {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.trim())
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
