//! Monoalphabetic substitution cipher.
//!
//! The key is a rearrangement of the 26 letters: plain letter `i` becomes the
//! key's letter `i`. Mappings are built for both cases, so a letter keeps its
//! own case whichever case the key was written in.

use std::{fmt, str::FromStr};

use rand::{Rng, seq::SliceRandom};

use crate::{
    alphabet::{self, LEN, LetterCase, UPPERCASE},
    error::KeyError,
};

/// A validated permutation of the 26-letter alphabet.
///
/// # Examples
///
/// ```
/// use cipherlab_core::monoalphabetic::{self, MonoKey};
///
/// let key: MonoKey = "QWERTYUIOPASDFGHJKLZXCVBNM".parse().unwrap();
/// assert_eq!(monoalphabetic::encrypt("Hello", &key), "Itssg");
/// assert_eq!(monoalphabetic::decrypt("Itssg", &key), "Hello");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonoKey {
    text: String,
    forward: [u8; LEN as usize],
    inverse: [u8; LEN as usize],
}

impl MonoKey {
    /// Validates `key` as an alphabet permutation, ignoring case.
    ///
    /// # Errors
    ///
    /// - [`KeyError::WrongKeyLength`] if `key` does not have 26 characters
    /// - [`KeyError::NonLetter`] for a character outside A-Z/a-z
    /// - [`KeyError::RepeatedLetter`] for the first letter used twice
    pub fn new(key: impl Into<String>) -> Result<Self, KeyError> {
        let text = key.into();
        let count = text.chars().count();
        if count != usize::from(LEN) {
            return Err(KeyError::WrongKeyLength(count));
        }

        let mut forward = [0u8; LEN as usize];
        let mut inverse = [u8::MAX; LEN as usize];
        for (plain, ch) in text.chars().enumerate() {
            let cipher = alphabet::position(ch).ok_or(KeyError::NonLetter(ch))?;
            if inverse[usize::from(cipher)] != u8::MAX {
                return Err(KeyError::RepeatedLetter(ch.to_ascii_uppercase()));
            }
            forward[plain] = cipher;
            inverse[usize::from(cipher)] = plain as u8;
        }

        Ok(Self {
            text,
            forward,
            inverse,
        })
    }

    /// The key as it was written.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl FromStr for MonoKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.trim())
    }
}

impl fmt::Display for MonoKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

fn substitute(text: &str, table: &[u8; LEN as usize]) -> String {
    text.chars()
        .map(|ch| match (LetterCase::of(ch), alphabet::position(ch)) {
            (Some(case), Some(pos)) => case.letter(table[usize::from(pos)]),
            _ => ch,
        })
        .collect()
}

/// Replaces each letter with its key counterpart.
pub fn encrypt(text: &str, key: &MonoKey) -> String {
    substitute(text, &key.forward)
}

/// Maps each key letter back to the plain letter it stands for.
pub fn decrypt(text: &str, key: &MonoKey) -> String {
    substitute(text, &key.inverse)
}

/// Shuffles the alphabet (Fisher-Yates) into a fresh key written in `case`.
pub fn generate_key<R: Rng + ?Sized>(rng: &mut R, case: LetterCase) -> MonoKey {
    let mut letters: Vec<u8> = UPPERCASE.bytes().collect();
    letters.shuffle(rng);

    let mut forward = [0u8; LEN as usize];
    let mut inverse = [0u8; LEN as usize];
    let mut text = String::with_capacity(letters.len());
    for (plain, letter) in letters.iter().enumerate() {
        let cipher = letter - b'A';
        forward[plain] = cipher;
        inverse[usize::from(cipher)] = plain as u8;
        text.push(case.letter(cipher));
    }

    MonoKey {
        text,
        forward,
        inverse,
    }
}
