//! Command-line argument definitions for the Cipherlab CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Global flags select the configuration file, the output
//! destination and logging verbosity; the subcommand picks the operation.

use clap::{ArgGroup, Parser, Subcommand};

/// Command-line arguments for the Cipherlab tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Write the result to this file instead of stdout
    #[arg(short, long, global = true)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encrypt text with one cipher or a stack of layers
    Encrypt(CipherArgs),

    /// Decrypt text; layers are given in the order used to encrypt
    Decrypt(CipherArgs),

    /// Print a random key for an algorithm
    Keygen {
        /// Algorithm to generate a key for
        #[arg(short, long)]
        algorithm: String,

        /// Sample text; lowercase text yields lowercase letter keys
        text: Option<String>,
    },

    /// Print the Playfair key square for a keyword
    Matrix {
        /// Playfair keyword
        #[arg(short, long)]
        key: String,
    },
}

/// Either a single `--algorithm`/`--key` pair or repeated `--layer` flags.
#[derive(clap::Args, Debug)]
#[command(group(ArgGroup::new("cipher").required(true).args(["algorithm", "layers"])))]
pub struct CipherArgs {
    /// Single algorithm to run
    #[arg(short, long, requires = "key", conflicts_with = "layers")]
    pub algorithm: Option<String>,

    /// Key for --algorithm
    #[arg(short, long, requires = "algorithm", allow_hyphen_values = true)]
    pub key: Option<String>,

    /// Layer as <algorithm>:<key>, repeatable
    #[arg(short, long = "layer", value_name = "ALGORITHM:KEY")]
    pub layers: Vec<String>,

    /// Input text; read from stdin when omitted
    pub text: Option<String>,
}
