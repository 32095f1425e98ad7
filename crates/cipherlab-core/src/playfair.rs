//! Playfair digraph cipher.
//!
//! Letters are enciphered in pairs using a 5×5 [`Matrix`] built from a
//! keyword. I and J share a cell, so every J is read as I.
//!
//! # Text preparation
//!
//! Before encryption, everything but letters is dropped and the rest is
//! uppercased. The letter stream is then split into digraphs left to right:
//! when both letters of a pair are equal, an `X` is inserted between them and
//! pairing continues from the second letter; a final lone letter is padded
//! with `X`.
//!
//! # Output case
//!
//! The output is lowercase when the keyword is all lowercase and uppercase
//! otherwise. The plaintext's own casing is not kept.
//!
//! # Lossiness
//!
//! Decryption returns the prepared letter stream, so a round trip only gives
//! back the original text when it is letters-only in the keyword's case, has
//! even length, no J, and no doubled letter inside a pair.
//!
//! # Example
//!
//! ```
//! use cipherlab_core::{keyword::Keyword, playfair};
//!
//! let key: Keyword = "MONARCHY".parse().unwrap();
//! assert_eq!(playfair::encrypt("instruments", &key), "GATLMZCLRQXA");
//! assert_eq!(playfair::decrypt("GATLMZCLRQXA", &key), "INSTRUMENTSX");
//! ```

use std::fmt;

use log::trace;
use rand::Rng;

use crate::{
    alphabet::LetterCase,
    keyword::Keyword,
    words::WordList,
};

const SIZE: usize = 5;
const FILLER: u8 = b'X';
const MATRIX_ALPHABET: &[u8] = b"ABCDEFGHIKLMNOPQRSTUVWXYZ";

/// The 5×5 Playfair key square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    cells: [[u8; SIZE]; SIZE],
    /// (row, col) of each alphabet letter; J shares I's cell.
    positions: [(usize, usize); 26],
}

impl Matrix {
    /// Builds the square for `keyword`.
    ///
    /// Keyword letters come first in first-seen order without repeats,
    /// followed by the rest of the alphabet, filled row by row.
    pub fn new(keyword: &Keyword) -> Self {
        let mut order: Vec<u8> = Vec::with_capacity(SIZE * SIZE);
        let keyword_letters = keyword.as_str().bytes().map(normalize);
        for letter in keyword_letters.chain(MATRIX_ALPHABET.iter().copied()) {
            if !order.contains(&letter) {
                order.push(letter);
            }
        }

        let mut cells = [[0u8; SIZE]; SIZE];
        let mut positions = [(0, 0); 26];
        for (index, &letter) in order.iter().enumerate() {
            let (row, col) = (index / SIZE, index % SIZE);
            cells[row][col] = letter;
            positions[usize::from(letter - b'A')] = (row, col);
        }
        positions[usize::from(b'J' - b'A')] = positions[usize::from(b'I' - b'A')];

        trace!(keyword = keyword.as_str(); "Built Playfair matrix");
        Self { cells, positions }
    }

    /// The letters of the square, row by row.
    pub fn rows(&self) -> impl Iterator<Item = [char; SIZE]> + '_ {
        self.cells.iter().map(|&row| row.map(char::from))
    }

    fn locate(&self, letter: u8) -> (usize, usize) {
        self.positions[usize::from(letter - b'A')]
    }

    /// Applies the Playfair rules to one digraph. `step` is 1 to encrypt and
    /// 4 (one step back, mod 5) to decrypt.
    fn transform(&self, a: u8, b: u8, step: usize) -> [u8; 2] {
        let (row_a, col_a) = self.locate(a);
        let (row_b, col_b) = self.locate(b);

        if row_a == row_b {
            [
                self.cells[row_a][(col_a + step) % SIZE],
                self.cells[row_b][(col_b + step) % SIZE],
            ]
        } else if col_a == col_b {
            [
                self.cells[(row_a + step) % SIZE][col_a],
                self.cells[(row_b + step) % SIZE][col_b],
            ]
        } else {
            [self.cells[row_a][col_b], self.cells[row_b][col_a]]
        }
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.rows().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(char::to_string).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Uppercases an ASCII letter and folds J into I.
fn normalize(letter: u8) -> u8 {
    match letter.to_ascii_uppercase() {
        b'J' => b'I',
        upper => upper,
    }
}

/// The uppercase letters of `text` with J folded into I.
fn letters(text: &str) -> Vec<u8> {
    text.bytes()
        .filter(u8::is_ascii_alphabetic)
        .map(normalize)
        .collect()
}

/// Splits prepared letters into digraphs, inserting the filler between
/// doubled letters and after a trailing lone letter.
fn digraphs(letters: &[u8]) -> Vec<[u8; 2]> {
    let mut pairs = Vec::with_capacity(letters.len() / 2 + 1);
    let mut index = 0;
    while index < letters.len() {
        let first = letters[index];
        match letters.get(index + 1) {
            Some(&second) if second != first => {
                pairs.push([first, second]);
                index += 2;
            }
            _ => {
                pairs.push([first, FILLER]);
                index += 1;
            }
        }
    }
    pairs
}

fn render(pairs: impl Iterator<Item = [u8; 2]>, case: LetterCase) -> String {
    pairs
        .flatten()
        .map(|letter| case.letter(letter - b'A'))
        .collect()
}

/// Encrypts `text` with the square built from `keyword`.
pub fn encrypt(text: &str, keyword: &Keyword) -> String {
    let matrix = Matrix::new(keyword);
    let pairs = digraphs(&letters(text));
    trace!(digraphs = pairs.len(); "Prepared Playfair digraphs");

    render(
        pairs.into_iter().map(|[a, b]| matrix.transform(a, b, 1)),
        keyword.letter_case(),
    )
}

/// Decrypts `text` with the square built from `keyword`.
///
/// The ciphertext is read as plain pairs; no fillers are inserted between
/// equal letters, but an odd-length stream is still padded with `X`.
pub fn decrypt(text: &str, keyword: &Keyword) -> String {
    let matrix = Matrix::new(keyword);
    let letters = letters(text);
    let pairs = letters
        .chunks(2)
        .map(|pair| [pair[0], pair.get(1).copied().unwrap_or(FILLER)]);

    render(
        pairs.map(|[a, b]| matrix.transform(a, b, SIZE - 1)),
        keyword.letter_case(),
    )
}

/// Picks a word from `words`, written lowercase when `text` is lowercase
/// and uppercase otherwise (see [`LetterCase::detect`]).
pub fn generate_key<R: Rng + ?Sized>(rng: &mut R, words: &WordList, text: &str) -> Keyword {
    let case = LetterCase::detect(text);
    Keyword::from_word(case.apply(words.choose(rng)))
}
