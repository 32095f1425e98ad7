//! Row-Column (columnar) transposition cipher.
//!
//! Text is written row by row into a grid as wide as the key and read out
//! column by column. The key is a string of digits; columns are read in
//! ascending digit order, ties going to the leftmost column.
//!
//! Whitespace is removed before encryption and the grid is completed with a
//! repeating `X`, `Y`, `Z` pad. Decryption cannot tell padding from text, so
//! the pad stays in the recovered plaintext.
//!
//! # Example
//!
//! ```
//! use cipherlab_core::row_column::{self, ColumnKey};
//!
//! let key: ColumnKey = "3142".parse().unwrap();
//! let ciphertext = row_column::encrypt("attack at dawn!", &key);
//! assert_eq!(ciphertext, "tkaXatnZacd!tawY");
//! assert_eq!(row_column::decrypt(&ciphertext, &key), "attackatdawn!XYZ");
//! ```

use std::{fmt, str::FromStr};

use log::trace;
use rand::{Rng, seq::SliceRandom};

use crate::error::KeyError;

const PADDING: [char; 3] = ['X', 'Y', 'Z'];

/// A non-empty string of digits; its length is the number of columns.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnKey(Vec<u8>);

impl ColumnKey {
    /// Validates `key` as a digit string.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::EmptyColumnKey`] for an empty key and
    /// [`KeyError::NonDigit`] for the first character that is not `0-9`.
    pub fn new(key: &str) -> Result<Self, KeyError> {
        if key.is_empty() {
            return Err(KeyError::EmptyColumnKey);
        }
        key.chars()
            .map(|ch| {
                ch.to_digit(10)
                    .map(|digit| digit as u8)
                    .ok_or(KeyError::NonDigit(ch))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Number of grid columns.
    pub fn columns(&self) -> usize {
        self.0.len()
    }

    /// Column indices in reading order: ascending digit, stable on ties.
    pub fn order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.0.len()).collect();
        order.sort_by_key(|&col| self.0[col]);
        order
    }
}

impl FromStr for ColumnKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.trim())
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in &self.0 {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

/// Encrypts `text` after stripping its whitespace.
pub fn encrypt(text: &str, key: &ColumnKey) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut grid: Vec<char> = text.chars().filter(|ch| !ch.is_whitespace()).collect();
    let cols = key.columns();
    let rows = grid.len().div_ceil(cols);
    let padding = rows * cols - grid.len();
    grid.extend(PADDING.iter().cycle().take(padding));
    trace!(rows, cols, padding; "Filled transposition grid");

    key.order()
        .into_iter()
        .flat_map(|col| (0..rows).map(move |row| row * cols + col))
        .map(|index| grid[index])
        .collect()
}

/// Refills the grid column by column in key order and reads it row by row.
///
/// Padding added during encryption is kept.
pub fn decrypt(text: &str, key: &ColumnKey) -> String {
    let chars: Vec<char> = text.chars().collect();
    let cols = key.columns();
    let rows = chars.len().div_ceil(cols);

    let mut grid: Vec<Option<char>> = vec![None; rows * cols];
    let mut source = chars.into_iter();
    for col in key.order() {
        for row in 0..rows {
            grid[row * cols + col] = source.next();
        }
    }

    grid.into_iter().flatten().collect()
}

/// Shuffles the digits `1..=n` for a random `n` in `2..=6`.
pub fn generate_key<R: Rng + ?Sized>(rng: &mut R) -> ColumnKey {
    let columns: u8 = rng.random_range(2..=6);
    let mut digits: Vec<u8> = (1..=columns).collect();
    digits.shuffle(rng);
    ColumnKey(digits)
}
