//! Layers and processing direction.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::error::CipherlabError;

/// Direction of a cipher run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Encrypt,
    Decrypt,
}

impl FromStr for Mode {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "encrypt" => Ok(Self::Encrypt),
            "decrypt" => Ok(Self::Decrypt),
            _ => Err("Unsupported mode"),
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encrypt => write!(f, "encrypt"),
            Self::Decrypt => write!(f, "decrypt"),
        }
    }
}

/// One `(algorithm, key)` step of a pipeline.
///
/// Both parts are kept as raw strings; the algorithm is looked up and the
/// key parsed only when the layer runs, so a bad layer is reported with its
/// position in the list.
///
/// # Examples
///
/// ```
/// use cipherlab::Layer;
///
/// let layer: Layer = "caesar:3".parse().unwrap();
/// assert_eq!(layer.algorithm(), "caesar");
/// assert_eq!(layer.key(), "3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    algorithm: String,
    key: String,
}

impl Layer {
    /// Creates a layer from an algorithm name and its key.
    pub fn new(algorithm: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            algorithm: algorithm.into(),
            key: key.into(),
        }
    }

    /// The algorithm name as given.
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// The raw key.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl FromStr for Layer {
    type Err = CipherlabError;

    /// Parses `<algorithm>:<key>`, splitting on the first colon.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((algorithm, key)) if !algorithm.trim().is_empty() => {
                Ok(Self::new(algorithm.trim(), key.trim()))
            }
            _ => Err(CipherlabError::LayerSyntax(s.to_string())),
        }
    }
}

impl Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.algorithm, self.key)
    }
}
