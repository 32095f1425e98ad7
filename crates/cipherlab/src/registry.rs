//! Name-to-cipher lookup used by the layer pipeline.
//!
//! A [`Registry`] maps algorithm names to [`LayerCipher`] implementations.
//! [`Registry::standard`] holds the six built-in ciphers under their
//! canonical names; callers may register further ciphers or replace the
//! built-in ones.

use std::fmt;

use indexmap::IndexMap;

use cipherlab_core::{
    KeyError, caesar, keyword::Keyword, monoalphabetic, monoalphabetic::MonoKey, playfair,
    rail_fence, rail_fence::Rails, row_column, row_column::ColumnKey, vigenere,
};

use crate::{
    algorithm::Algorithm,
    error::{CipherlabError, LayerError},
    layer::Mode,
};

/// An encrypt/decrypt pair that accepts its key as raw text.
///
/// Implementations parse the key themselves and report a malformed key as
/// [`LayerError::Key`]. The built-in ciphers never fail once the key parses;
/// other implementations report runtime failures as [`LayerError::Transform`].
pub trait LayerCipher: Send + Sync {
    /// Encrypts `text` with `key`.
    fn encrypt(&self, text: &str, key: &str) -> Result<String, LayerError>;

    /// Decrypts `text` with `key`.
    fn decrypt(&self, text: &str, key: &str) -> Result<String, LayerError>;

    /// Runs [`encrypt`](Self::encrypt) or [`decrypt`](Self::decrypt) for `mode`.
    fn apply(&self, text: &str, key: &str, mode: Mode) -> Result<String, LayerError> {
        match mode {
            Mode::Encrypt => self.encrypt(text, key),
            Mode::Decrypt => self.decrypt(text, key),
        }
    }
}

/// Adapts a typed-key cipher module to [`LayerCipher`].
struct KeyedCipher<K> {
    parse_key: fn(&str) -> Result<K, KeyError>,
    encrypt: fn(&str, &K) -> String,
    decrypt: fn(&str, &K) -> String,
}

impl<K> LayerCipher for KeyedCipher<K> {
    fn encrypt(&self, text: &str, key: &str) -> Result<String, LayerError> {
        let key = (self.parse_key)(key)?;
        Ok((self.encrypt)(text, &key))
    }

    fn decrypt(&self, text: &str, key: &str) -> Result<String, LayerError> {
        let key = (self.parse_key)(key)?;
        Ok((self.decrypt)(text, &key))
    }
}

fn builtin(algorithm: Algorithm) -> Box<dyn LayerCipher> {
    match algorithm {
        Algorithm::Caesar => Box::new(KeyedCipher {
            parse_key: caesar::parse_shift,
            encrypt: |text, shift: &i64| caesar::encrypt(text, *shift),
            decrypt: |text, shift: &i64| caesar::decrypt(text, *shift),
        }),
        Algorithm::Monoalphabetic => Box::new(KeyedCipher::<MonoKey> {
            parse_key: |key| key.parse(),
            encrypt: monoalphabetic::encrypt,
            decrypt: monoalphabetic::decrypt,
        }),
        Algorithm::Playfair => Box::new(KeyedCipher::<Keyword> {
            parse_key: |key| key.parse(),
            encrypt: playfair::encrypt,
            decrypt: playfair::decrypt,
        }),
        Algorithm::Vigenere => Box::new(KeyedCipher::<Keyword> {
            parse_key: |key| key.parse(),
            encrypt: vigenere::encrypt,
            decrypt: vigenere::decrypt,
        }),
        Algorithm::RailFence => Box::new(KeyedCipher::<Rails> {
            parse_key: |key| key.parse(),
            encrypt: |text, rails| rail_fence::encrypt(text, *rails),
            decrypt: |text, rails| rail_fence::decrypt(text, *rails),
        }),
        Algorithm::RowColumn => Box::new(KeyedCipher::<ColumnKey> {
            parse_key: |key| key.parse(),
            encrypt: row_column::encrypt,
            decrypt: row_column::decrypt,
        }),
    }
}

/// Algorithm name → [`LayerCipher`] table.
///
/// Names are matched case-insensitively. A name that is not registered
/// verbatim is also tried through the built-in aliases (`monoalphabetic`
/// resolves to `mono`, `rail-fence` to `railfence`, and so on).
///
/// # Examples
///
/// ```
/// use cipherlab::{Mode, Registry};
///
/// let registry = Registry::standard();
/// let caesar = registry.cipher("caesar").unwrap();
/// assert_eq!(caesar.apply("abc", "1", Mode::Encrypt).unwrap(), "bcd");
/// assert!(registry.cipher("enigma").is_err());
/// ```
#[derive(Default)]
pub struct Registry {
    ciphers: IndexMap<String, Box<dyn LayerCipher>>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the six built-in ciphers.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for algorithm in Algorithm::ALL {
            registry.ciphers.insert(algorithm.name().to_string(), builtin(algorithm));
        }
        registry
    }

    /// Registers `cipher` under `name`, replacing any previous entry.
    pub fn register(&mut self, name: &str, cipher: impl LayerCipher + 'static) {
        self.ciphers
            .insert(name.trim().to_ascii_lowercase(), Box::new(cipher));
    }

    /// Looks up the cipher registered for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`CipherlabError::UnknownAlgorithm`] when neither `name` nor
    /// its canonical alias is registered.
    pub fn cipher(&self, name: &str) -> Result<&dyn LayerCipher, CipherlabError> {
        let normalized = name.trim().to_ascii_lowercase();
        self.ciphers
            .get(&normalized)
            .or_else(|| {
                let canonical = normalized.parse::<Algorithm>().ok()?;
                self.ciphers.get(canonical.name())
            })
            .map(|cipher| &**cipher)
            .ok_or_else(|| CipherlabError::UnknownAlgorithm(name.to_string()))
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.ciphers.keys().map(String::as_str)
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("ciphers", &self.names().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Reverse;

    impl LayerCipher for Reverse {
        fn encrypt(&self, text: &str, _key: &str) -> Result<String, LayerError> {
            Ok(text.chars().rev().collect())
        }

        fn decrypt(&self, text: &str, key: &str) -> Result<String, LayerError> {
            self.encrypt(text, key)
        }
    }

    #[test]
    fn test_standard_names() {
        let registry = Registry::standard();
        let names: Vec<_> = registry.names().collect();
        assert_eq!(
            names,
            vec!["caesar", "mono", "playfair", "vigenere", "railfence", "rowcolumn"]
        );
    }

    #[test]
    fn test_aliases_resolve() {
        let registry = Registry::standard();
        assert!(registry.cipher("Monoalphabetic").is_ok());
        assert!(registry.cipher("rail-fence").is_ok());
        assert!(registry.cipher(" CAESAR ").is_ok());
    }

    #[test]
    fn test_unknown_name() {
        let registry = Registry::new();
        let err = registry.cipher("caesar").err().unwrap();
        assert!(matches!(err, CipherlabError::UnknownAlgorithm(name) if name == "caesar"));
    }

    #[test]
    fn test_builtin_key_parsing() {
        let registry = Registry::standard();
        let rail_fence = registry.cipher("railfence").unwrap();
        assert!(matches!(
            rail_fence.encrypt("abc", "1"),
            Err(LayerError::Key(KeyError::TooFewRails(1)))
        ));
        assert!(matches!(
            rail_fence.encrypt("abc", "two"),
            Err(LayerError::Key(KeyError::NotANumber(key))) if key == "two"
        ));

        let caesar = registry.cipher("caesar").unwrap();
        assert_eq!(caesar.decrypt("bcd", "27").unwrap(), "abc");

        let mono = registry.cipher("mono").unwrap();
        assert!(matches!(
            mono.encrypt("abc", "abc"),
            Err(LayerError::Key(KeyError::WrongKeyLength(3)))
        ));
    }

    #[test]
    fn test_register_custom_cipher() {
        let mut registry = Registry::standard();
        registry.register("Reverse", Reverse);

        let cipher = registry.cipher("reverse").unwrap();
        assert_eq!(cipher.apply("abc", "", Mode::Decrypt).unwrap(), "cba");
        assert_eq!(registry.names().last(), Some("reverse"));
    }

    #[test]
    fn test_register_replaces_builtin() {
        let mut registry = Registry::standard();
        registry.register("caesar", Reverse);
        let cipher = registry.cipher("caesar").unwrap();
        assert_eq!(cipher.encrypt("abc", "3").unwrap(), "cba");
        assert_eq!(registry.names().count(), 6);
    }
}
