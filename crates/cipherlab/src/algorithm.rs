//! The fixed set of supported cipher algorithms.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::error::CipherlabError;

/// One of the six built-in ciphers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Caesar,
    Monoalphabetic,
    Playfair,
    Vigenere,
    RailFence,
    RowColumn,
}

impl Algorithm {
    /// Every algorithm, in menu order.
    pub const ALL: [Algorithm; 6] = [
        Self::Caesar,
        Self::Monoalphabetic,
        Self::Playfair,
        Self::Vigenere,
        Self::RailFence,
        Self::RowColumn,
    ];

    /// The canonical name used in layers and registries.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// A short description of the key format this algorithm expects.
    pub fn key_hint(self) -> &'static str {
        match self {
            Self::Caesar => "a whole number shift, e.g. `3` or `-5`",
            Self::Monoalphabetic => "all 26 letters, each exactly once (A-Z or a-z)",
            Self::Playfair | Self::Vigenere => "a keyword made of letters only",
            Self::RailFence => "a whole number of rails, at least 2",
            Self::RowColumn => "digits only, one per column, e.g. `312`",
        }
    }
}

impl FromStr for Algorithm {
    type Err = CipherlabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "caesar" => Ok(Self::Caesar),
            "mono" | "monoalphabetic" => Ok(Self::Monoalphabetic),
            "playfair" => Ok(Self::Playfair),
            "vigenere" => Ok(Self::Vigenere),
            "railfence" | "rail-fence" => Ok(Self::RailFence),
            "rowcolumn" | "row-column" => Ok(Self::RowColumn),
            _ => Err(CipherlabError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl From<Algorithm> for &'static str {
    fn from(val: Algorithm) -> Self {
        match val {
            Algorithm::Caesar => "caesar",
            Algorithm::Monoalphabetic => "mono",
            Algorithm::Playfair => "playfair",
            Algorithm::Vigenere => "vigenere",
            Algorithm::RailFence => "railfence",
            Algorithm::RowColumn => "rowcolumn",
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}
