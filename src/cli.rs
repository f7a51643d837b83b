//! Command-line interface definition.

use clap::{Parser, Subcommand};

/// Interactive Caesar cipher workbench.
///
/// Without a subcommand the terminal UI starts. The subcommands cover
/// one-shot use from scripts and pipes; when `TEXT` is omitted it is read
/// from stdin.
#[derive(Debug, Parser)]
#[command(name = "cipherscope", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Encrypt text under a Caesar substitution.
    Encrypt {
        /// Shift key. Any integer is accepted and reduced modulo 26.
        #[arg(short, long, allow_hyphen_values = true)]
        shift: i32,
        /// Text to encrypt; read from stdin when omitted.
        text: Option<String>,
    },
    /// Decrypt text encrypted with a known shift.
    Decrypt {
        /// Shift key the text was encrypted with.
        #[arg(short, long, allow_hyphen_values = true)]
        shift: i32,
        /// Text to decrypt; read from stdin when omitted.
        text: Option<String>,
    },
    /// Recover an unknown shift by frequency analysis.
    Crack {
        /// Print all 26 ranked candidates instead of just the best one.
        #[arg(short, long)]
        all: bool,
        /// Ciphertext to analyze; read from stdin when omitted.
        text: Option<String>,
    },
}
