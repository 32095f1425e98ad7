//! Cipherlab - classical ciphers and multilayer cipher pipelines.
//!
//! Six classical ciphers (Caesar, Monoalphabetic, Playfair, Vigenère, Rail
//! Fence and Row-Column) can be run on their own or chained into a pipeline
//! of up to three layers. Decryption replays the same layer list in reverse.

pub mod config;
pub mod keygen;
pub mod pipeline;

mod algorithm;
mod error;
mod layer;
mod registry;

pub use cipherlab_core::{
    alphabet, caesar, keyword, monoalphabetic, playfair, rail_fence, row_column, vigenere, words,
};

pub use algorithm::Algorithm;
pub use cipherlab_core::KeyError;
pub use error::{CipherlabError, LayerError};
pub use keygen::KeyGenerator;
pub use layer::{Layer, Mode};
pub use registry::{LayerCipher, Registry};

use log::{debug, info};

use config::AppConfig;
use keyword::Keyword;
use playfair::Matrix;

/// Builder for running ciphers and layer pipelines.
///
/// Bundles the configuration with the cipher registry, so callers only deal
/// in algorithm names, raw keys and text.
///
/// # Examples
///
/// ```
/// use cipherlab::{Algorithm, CipherBuilder, Layer, Mode};
///
/// let builder = CipherBuilder::default();
///
/// let ciphertext = builder.run(Algorithm::Caesar, "3", "HELLO", Mode::Encrypt).unwrap();
/// assert_eq!(ciphertext, "KHOOR");
///
/// let layers = [Layer::new("caesar", "3"), Layer::new("railfence", "2")];
/// let ciphertext = builder.process("HELLO", &layers, Mode::Encrypt).unwrap();
/// assert_eq!(builder.process(&ciphertext, &layers, Mode::Decrypt).unwrap(), "HELLO");
/// ```
#[derive(Debug)]
pub struct CipherBuilder {
    config: AppConfig,
    registry: Registry,
}

impl Default for CipherBuilder {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl CipherBuilder {
    /// Create a new builder with the given configuration and the built-in ciphers.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            registry: Registry::standard(),
        }
    }

    /// Replace the cipher registry.
    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.registry = registry;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The active cipher registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Run a single cipher over `text`.
    ///
    /// # Errors
    ///
    /// Returns [`CipherlabError::UnknownAlgorithm`] if the registry has no
    /// entry for `algorithm`, [`CipherlabError::InvalidKey`] if `key` does
    /// not parse, or [`CipherlabError::Transform`] if the cipher fails.
    pub fn run(
        &self,
        algorithm: Algorithm,
        key: &str,
        text: &str,
        mode: Mode,
    ) -> Result<String, CipherlabError> {
        info!(algorithm = algorithm.name(), mode:?; "Running cipher");
        let cipher = self.registry.cipher(algorithm.name())?;
        cipher
            .apply(text, key, mode)
            .map_err(|err| err.for_algorithm(algorithm.name()))
    }

    /// Run `text` through `layers`, bounded by the configured layer limit.
    ///
    /// # Errors
    ///
    /// See [`pipeline::process_bounded`].
    pub fn process(
        &self,
        text: &str,
        layers: &[Layer],
        mode: Mode,
    ) -> Result<String, CipherlabError> {
        pipeline::process_bounded(
            text,
            layers,
            mode,
            &self.registry,
            self.config.pipeline().max_layers(),
        )
    }

    /// Create a key generator from the keygen configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CipherlabError::WordList`] for an invalid configured word list.
    pub fn key_generator(&self) -> Result<KeyGenerator, CipherlabError> {
        KeyGenerator::from_config(self.config.keygen())
    }

    /// Build the Playfair key square for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`CipherlabError::InvalidKey`] if `key` is not a letters-only keyword.
    pub fn playfair_matrix(&self, key: &str) -> Result<Matrix, CipherlabError> {
        let keyword: Keyword = key.parse().map_err(|source| CipherlabError::InvalidKey {
            algorithm: Algorithm::Playfair.name().to_string(),
            source,
        })?;
        debug!(keyword = keyword.as_str(); "Building Playfair matrix");
        Ok(Matrix::new(&keyword))
    }
}
