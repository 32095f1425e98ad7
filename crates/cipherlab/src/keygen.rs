//! Random key generation for every algorithm.
//!
//! [`KeyGenerator`] owns the random source and the word list, so the cipher
//! modules stay free of global state. Seed it for reproducible keys.

use log::debug;
use rand::{SeedableRng, rngs::StdRng};

use cipherlab_core::{
    alphabet::LetterCase, caesar, monoalphabetic, playfair, rail_fence, row_column, vigenere,
    words::WordList,
};

use crate::{algorithm::Algorithm, config::KeygenConfig, error::CipherlabError};

/// Produces keys in the textual form the pipeline accepts.
///
/// # Examples
///
/// ```
/// use cipherlab::{Algorithm, keygen::KeyGenerator};
/// use cipherlab::words::WordList;
///
/// let words = WordList::new(["lemon"]).unwrap();
/// let mut keys = KeyGenerator::seeded(7, words);
/// assert_eq!(keys.generate(Algorithm::Vigenere, "attack at dawn"), "lemon");
/// ```
#[derive(Debug, Clone)]
pub struct KeyGenerator {
    rng: StdRng,
    words: WordList,
}

impl KeyGenerator {
    /// Creates a generator from an explicit random source and word list.
    pub fn new(rng: StdRng, words: WordList) -> Self {
        Self { rng, words }
    }

    /// Creates a reproducible generator.
    pub fn seeded(seed: u64, words: WordList) -> Self {
        Self::new(StdRng::seed_from_u64(seed), words)
    }

    /// Creates a generator from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CipherlabError::WordList`] if the configured words are not
    /// all non-empty, letters-only words, or if the list is empty.
    pub fn from_config(config: &KeygenConfig) -> Result<Self, CipherlabError> {
        let words = match config.words() {
            Some(words) => WordList::new(words.iter().cloned()).map_err(CipherlabError::WordList)?,
            None => WordList::builtin(),
        };
        let rng = match config.seed() {
            Some(seed) => {
                debug!(seed; "Using seeded key generator");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_os_rng(),
        };
        Ok(Self::new(rng, words))
    }

    /// Generates a key for `algorithm`.
    ///
    /// `text` only matters for letter keys: Monoalphabetic, Vigenère and
    /// Playfair keys are lowercase when `text` is lowercase and uppercase
    /// otherwise.
    pub fn generate(&mut self, algorithm: Algorithm, text: &str) -> String {
        let rng = &mut self.rng;
        match algorithm {
            Algorithm::Caesar => caesar::generate_key(rng).to_string(),
            Algorithm::Monoalphabetic => {
                monoalphabetic::generate_key(rng, LetterCase::detect(text)).to_string()
            }
            Algorithm::Playfair => playfair::generate_key(rng, &self.words, text).to_string(),
            Algorithm::Vigenere => vigenere::generate_key(rng, &self.words, text).to_string(),
            Algorithm::RailFence => rail_fence::generate_key(rng).to_string(),
            Algorithm::RowColumn => row_column::generate_key(rng).to_string(),
        }
    }
}
