//! Cipherlab Core Ciphers
//!
//! This crate provides the classical ciphers behind Cipherlab. Each cipher
//! module is a leaf with `encrypt`, `decrypt` and `generate_key` functions:
//!
//! - **Caesar** ([`caesar`]): fixed alphabet shift
//! - **Monoalphabetic** ([`monoalphabetic`]): substitution by a permuted alphabet
//! - **Playfair** ([`playfair`]): digraph substitution over a 5×5 key square
//! - **Vigenère** ([`vigenere`]): repeating-keyword shift
//! - **Rail Fence** ([`rail_fence`]): zig-zag transposition
//! - **Row-Column** ([`row_column`]): columnar transposition
//!
//! Keys are typed values ([`rail_fence::Rails`], [`monoalphabetic::MonoKey`],
//! [`keyword::Keyword`], [`row_column::ColumnKey`], or an `i64` shift) that
//! are validated when parsed, so the transforms themselves cannot fail.
//!
//! Key generators take their random source as an argument, which keeps them
//! deterministic under a seeded RNG:
//!
//! ```
//! use cipherlab_core::{rail_fence, words::WordList, vigenere};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let rails = rail_fence::generate_key(&mut rng);
//! assert!((2..=5).contains(&rails.get()));
//!
//! let words = WordList::new(["lemon"]).unwrap();
//! let key = vigenere::generate_key(&mut rng, &words, "ATTACK");
//! assert_eq!(key.as_str(), "LEMON");
//! ```
//!
//! None of these ciphers offer real security.

pub mod alphabet;
pub mod caesar;
pub mod error;
pub mod keyword;
pub mod monoalphabetic;
pub mod playfair;
pub mod rail_fence;
pub mod row_column;
pub mod vigenere;
pub mod words;

pub use error::KeyError;

#[cfg(test)]
mod testing;
