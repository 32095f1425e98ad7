//! Word lists for human-readable keyword keys.
//!
//! Vigenère and Playfair keys are easier to share when they are ordinary
//! words. [`WordList`] holds the candidates a key generator picks from; the
//! built-in list can be replaced with any letters-only vocabulary.

use rand::Rng;

use crate::error::KeyError;

const BUILTIN_WORDS: &[&str] = &[
    "anchor", "badger", "beacon", "breeze", "candle", "canyon", "castle", "cipher", "comet",
    "copper", "cradle", "dragon", "ember", "falcon", "fathom", "forest", "garden", "glacier",
    "harbor", "hollow", "island", "jasper", "jungle", "kettle", "lantern", "lemon", "marble",
    "meadow", "mirror", "monarchy", "needle", "oracle", "orchid", "palace", "pepper", "puzzle",
    "quartz", "quiver", "raven", "ribbon", "saddle", "secret", "shadow", "silver", "spiral",
    "summit", "thunder", "timber", "tunnel", "velvet", "voyage", "walnut", "willow", "winter",
    "zenith", "zephyr",
];

/// A non-empty list of letters-only words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Builds a list from `words`.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::EmptyWordList`] when no words are given and
    /// [`KeyError::NonLetter`] (or [`KeyError::EmptyKeyword`] for an empty
    /// entry) when a word could not be used as a keyword.
    ///
    /// # Examples
    ///
    /// ```
    /// use cipherlab_core::words::WordList;
    ///
    /// let words = WordList::new(["alpha", "bravo"]).unwrap();
    /// assert_eq!(words.len(), 2);
    /// assert!(WordList::new(["not a word"]).is_err());
    /// ```
    pub fn new<I, S>(words: I) -> Result<Self, KeyError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words = words
            .into_iter()
            .map(|word| {
                let word = word.into();
                if word.is_empty() {
                    return Err(KeyError::EmptyKeyword);
                }
                match word.chars().find(|ch| !ch.is_ascii_alphabetic()) {
                    Some(bad) => Err(KeyError::NonLetter(bad)),
                    None => Ok(word),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        if words.is_empty() {
            return Err(KeyError::EmptyWordList);
        }
        Ok(Self { words })
    }

    /// The list shipped with the crate.
    pub fn builtin() -> Self {
        Self {
            words: BUILTIN_WORDS.iter().map(|word| word.to_string()).collect(),
        }
    }

    /// Number of words in the list.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false`; a word list is never empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates over the words in list order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Picks one word uniformly at random.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        let index = rng.random_range(0..self.words.len());
        &self.words[index]
    }
}

impl Default for WordList {
    fn default() -> Self {
        Self::builtin()
    }
}
