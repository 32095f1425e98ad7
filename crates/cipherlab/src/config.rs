//! Configuration types for Cipherlab.
//!
//! This module provides configuration structures that control pipeline
//! limits and key generation. All types implement [`serde::Deserialize`] for
//! flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining pipeline and key generation settings.
//! - [`PipelineConfig`] - Limits applied to multilayer runs.
//! - [`KeygenConfig`] - Random seed and word list used when generating keys.
//!
//! # Example
//!
//! ```
//! # use cipherlab::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.pipeline().max_layers(), 3);
//! assert!(config.keygen().seed().is_none());
//! ```

use serde::Deserialize;

use crate::pipeline::MAX_LAYERS;

/// Top-level configuration combining pipeline and key generation settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Pipeline configuration section.
    #[serde(default)]
    pipeline: PipelineConfig,

    /// Key generation configuration section.
    #[serde(default)]
    keygen: KeygenConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(pipeline: PipelineConfig, keygen: KeygenConfig) -> Self {
        Self { pipeline, keygen }
    }

    /// Returns the pipeline configuration.
    pub fn pipeline(&self) -> &PipelineConfig {
        &self.pipeline
    }

    /// Returns the key generation configuration.
    pub fn keygen(&self) -> &KeygenConfig {
        &self.keygen
    }
}

/// Limits applied to multilayer runs.
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    /// Maximum number of layers accepted in one run.
    #[serde(default = "default_max_layers")]
    max_layers: usize,
}

fn default_max_layers() -> usize {
    MAX_LAYERS
}

impl PipelineConfig {
    /// Creates a new [`PipelineConfig`] with the given layer limit.
    pub fn new(max_layers: usize) -> Self {
        Self { max_layers }
    }

    /// Returns the maximum number of layers.
    pub fn max_layers(&self) -> usize {
        self.max_layers
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_layers: MAX_LAYERS,
        }
    }
}

/// Settings for random key generation.
///
/// Without a seed, keys come from an OS-seeded generator. Without words,
/// the built-in word list is used.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KeygenConfig {
    /// Seed for reproducible key generation.
    #[serde(default)]
    seed: Option<u64>,

    /// Replacement word list for keyword keys.
    #[serde(default)]
    words: Option<Vec<String>>,
}

impl KeygenConfig {
    /// Creates a new [`KeygenConfig`].
    pub fn new(seed: Option<u64>, words: Option<Vec<String>>) -> Self {
        Self { seed, words }
    }

    /// Returns the configured seed, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the configured word list, if any.
    pub fn words(&self) -> Option<&[String]> {
        self.words.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.pipeline().max_layers(), MAX_LAYERS);
        assert_eq!(config.keygen().seed(), None);
        assert_eq!(config.keygen().words(), None);
    }

    #[test]
    fn test_full_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [pipeline]
            max_layers = 5

            [keygen]
            seed = 42
            words = ["alpha", "bravo"]
            "#,
        )
        .unwrap();

        assert_eq!(config.pipeline().max_layers(), 5);
        assert_eq!(config.keygen().seed(), Some(42));
        assert_eq!(
            config.keygen().words(),
            Some(&["alpha".to_string(), "bravo".to_string()][..])
        );
    }

    #[test]
    fn test_partial_section() {
        let config: AppConfig = toml::from_str("[pipeline]\n").unwrap();
        assert_eq!(config.pipeline().max_layers(), MAX_LAYERS);
    }

    #[test]
    fn test_rejects_wrong_types() {
        assert!(toml::from_str::<AppConfig>("[pipeline]\nmax_layers = \"three\"\n").is_err());
    }
}
