//! Error types for Cipherlab operations.
//!
//! This module provides the main error type [`CipherlabError`], which wraps
//! every condition that can stop a cipher run or a layer pipeline, and
//! [`LayerError`], the failure a single [`LayerCipher`](crate::LayerCipher)
//! reports.

use std::{error::Error as StdError, io};

use thiserror::Error;

use cipherlab_core::KeyError;

/// The main error type for Cipherlab operations.
///
/// # Layer Errors
///
/// Failures inside a multilayer pipeline are wrapped in the `Layer`
/// variant, which records the 1-based position of the failing layer in the
/// list the caller supplied and its algorithm name. Use
/// [`CipherlabError::root`] to reach the underlying cause.
#[derive(Debug, Error)]
pub enum CipherlabError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("algorithm `{0}` is not supported")]
    UnknownAlgorithm(String),

    #[error("invalid key for {algorithm}: {source}")]
    InvalidKey {
        algorithm: String,
        #[source]
        source: KeyError,
    },

    #[error("{algorithm} failed: {source}")]
    Transform {
        algorithm: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("layer {layer} ({algorithm}): {source}")]
    Layer {
        layer: usize,
        algorithm: String,
        #[source]
        source: Box<CipherlabError>,
    },

    #[error("{count} layers given, at most {max} are allowed")]
    TooManyLayers { count: usize, max: usize },

    #[error("invalid layer `{0}`, expected <algorithm>:<key>")]
    LayerSyntax(String),

    #[error("input text must not be empty")]
    EmptyText,

    #[error("invalid word list: {0}")]
    WordList(#[source] KeyError),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Failure of one cipher run inside a [`LayerCipher`](crate::LayerCipher).
///
/// A key that does not parse is a [`LayerError::Key`]; anything the
/// transform itself reports is a [`LayerError::Transform`].
#[derive(Debug, Error)]
pub enum LayerError {
    #[error(transparent)]
    Key(#[from] KeyError),

    #[error(transparent)]
    Transform(Box<dyn StdError + Send + Sync>),
}

impl LayerError {
    /// Wraps any transform failure.
    pub fn transform(err: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        Self::Transform(err.into())
    }

    /// Converts to a [`CipherlabError`] naming `algorithm`.
    pub fn for_algorithm(self, algorithm: impl Into<String>) -> CipherlabError {
        let algorithm = algorithm.into();
        match self {
            Self::Key(source) => CipherlabError::InvalidKey { algorithm, source },
            Self::Transform(source) => CipherlabError::Transform { algorithm, source },
        }
    }
}

impl CipherlabError {
    /// Wraps `self` with the position and algorithm of the failing layer.
    pub fn in_layer(self, layer: usize, algorithm: impl Into<String>) -> Self {
        Self::Layer {
            layer,
            algorithm: algorithm.into(),
            source: Box::new(self),
        }
    }

    /// Returns the innermost error, looking through `Layer` wrappers.
    pub fn root(&self) -> &CipherlabError {
        match self {
            Self::Layer { source, .. } => source.root(),
            other => other,
        }
    }
}
