//! CLI logic for the Cipherlab tool.
//!
//! This module contains the core CLI logic: loading configuration, reading
//! input text and dispatching subcommands to [`CipherBuilder`].

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, CipherArgs, Command};

use std::{
    fs,
    io::{self, Read},
};

use log::{debug, info};

use cipherlab::{Algorithm, CipherBuilder, CipherlabError, Layer, Mode};

/// Run the Cipherlab CLI application
///
/// The result is written to `--output` when given, otherwise printed to
/// stdout.
///
/// # Errors
///
/// Returns `CipherlabError` for:
/// - File I/O and configuration errors
/// - Empty input text
/// - Unknown algorithms, malformed layers and invalid keys
/// - Layer lists longer than the configured limit
pub fn run(args: &Args) -> Result<(), CipherlabError> {
    let app_config = config::load_config(args.config.as_ref())?;
    let builder = CipherBuilder::new(app_config);

    let output = execute(&builder, &args.command)?;

    match &args.output {
        Some(path) => {
            fs::write(path, format!("{output}\n"))?;
            info!(output_file = path.as_str(); "Result written");
        }
        None => println!("{output}"),
    }

    Ok(())
}

/// Run a single subcommand and return its printable result.
///
/// # Errors
///
/// See [`run`].
pub fn execute(builder: &CipherBuilder, command: &Command) -> Result<String, CipherlabError> {
    match command {
        Command::Encrypt(cipher) => transform(builder, cipher, Mode::Encrypt),
        Command::Decrypt(cipher) => transform(builder, cipher, Mode::Decrypt),
        Command::Keygen { algorithm, text } => {
            let algorithm: Algorithm = algorithm.parse()?;
            let mut keys = builder.key_generator()?;
            Ok(keys.generate(algorithm, text.as_deref().unwrap_or_default()))
        }
        Command::Matrix { key } => Ok(builder.playfair_matrix(key)?.to_string()),
    }
}

fn transform(
    builder: &CipherBuilder,
    cipher: &CipherArgs,
    mode: Mode,
) -> Result<String, CipherlabError> {
    let text = input_text(cipher.text.as_deref())?;

    match (&cipher.algorithm, &cipher.key) {
        (Some(algorithm), Some(key)) => {
            let algorithm: Algorithm = algorithm.parse()?;
            builder.run(algorithm, key, &text, mode)
        }
        _ => {
            let layers = cipher
                .layers
                .iter()
                .map(|layer| layer.parse())
                .collect::<Result<Vec<Layer>, _>>()?;
            debug!(layers = layers.len(); "Parsed layers");
            builder.process(&text, &layers, mode)
        }
    }
}

/// Takes `text`, or stdin when absent, trimmed and required to be non-empty.
fn input_text(text: Option<&str>) -> Result<String, CipherlabError> {
    let text = match text {
        Some(text) => text.to_string(),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CipherlabError::EmptyText);
    }
    Ok(trimmed.to_string())
}
