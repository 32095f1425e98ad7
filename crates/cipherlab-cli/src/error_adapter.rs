//! Error adapter for converting CipherlabError to miette diagnostics.
//!
//! This module provides the bridge between the library's error type and
//! miette's rich diagnostic formatting used in the CLI. Layer errors are
//! reported with the code and help of the error that caused them.

use std::fmt;

use miette::{Diagnostic, LabeledSpan};

use cipherlab::{Algorithm, CipherlabError};

/// Adapter that gives a [`CipherlabError`] a diagnostic code and help text.
pub struct ErrorAdapter<'a>(pub &'a CipherlabError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl Diagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0.root() {
            CipherlabError::Io(_) => "cipherlab::io",
            CipherlabError::UnknownAlgorithm(_) => "cipherlab::algorithm",
            CipherlabError::InvalidKey { .. } => "cipherlab::key",
            CipherlabError::Transform { .. } => "cipherlab::transform",
            CipherlabError::TooManyLayers { .. } => "cipherlab::layers",
            CipherlabError::LayerSyntax(_) => "cipherlab::layer_syntax",
            CipherlabError::EmptyText => "cipherlab::input",
            CipherlabError::WordList(_) => "cipherlab::word_list",
            CipherlabError::Config(_) => "cipherlab::config",
            CipherlabError::Layer { .. } => return None,
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        help_for(self.0.root()).map(|help| Box::new(help) as Box<dyn fmt::Display>)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

fn help_for(err: &CipherlabError) -> Option<String> {
    match err {
        CipherlabError::UnknownAlgorithm(_) => {
            let names: Vec<&str> = Algorithm::ALL.iter().map(|algorithm| algorithm.name()).collect();
            Some(format!("supported algorithms: {}", names.join(", ")))
        }
        CipherlabError::InvalidKey { algorithm, .. } => algorithm
            .parse::<Algorithm>()
            .ok()
            .map(|algorithm| format!("expected {}", algorithm.key_hint())),
        CipherlabError::TooManyLayers { .. } => {
            Some("remove layers or raise `max_layers` in the [pipeline] config section".to_string())
        }
        CipherlabError::LayerSyntax(_) => Some("write layers like `caesar:3`".to_string()),
        CipherlabError::EmptyText => {
            Some("pass the text as an argument or pipe it on stdin".to_string())
        }
        CipherlabError::WordList(_) => {
            Some("`words` under [keygen] must be non-empty words of letters only".to_string())
        }
        CipherlabError::Config(_) => Some(
            "check the [pipeline] and [keygen] sections of the config file, or pass --config"
                .to_string(),
        ),
        CipherlabError::Io(_) | CipherlabError::Transform { .. } | CipherlabError::Layer { .. } => {
            None
        }
    }
}
