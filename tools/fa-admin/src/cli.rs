//! Command-line definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// FA-Admin: forms-authentication ticket tool
#[derive(Parser, Debug)]
#[command(name = "fa-admin")]
#[command(about = "Provision machine keys and issue or inspect forms-authentication tickets")]
pub struct Args {
    /// Configuration document containing a machineKey element
    #[arg(short, long, global = true)]
    pub web_config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a machine key with fresh random key material
    GenerateKey {
        /// Validation (keyed-hash) algorithm
        #[arg(long, default_value = "SHA256")]
        validation: String,

        /// Decryption (cipher) algorithm
        #[arg(long, default_value = "AES")]
        decryption: String,
    },

    /// Issue and protect a ticket
    Issue {
        /// User name
        #[arg(short, long)]
        name: String,

        /// Application payload
        #[arg(short, long, default_value = "")]
        user_data: String,

        /// Cookie path (defaults to FA_COOKIE_PATH or "/")
        #[arg(short, long)]
        cookie_path: Option<String>,

        /// Mark the ticket persistent
        #[arg(short, long)]
        persistent: bool,

        /// Lifetime in minutes (defaults to FA_TICKET_TIMEOUT_MINUTES or 30)
        #[arg(short, long)]
        minutes: Option<u64>,
    },

    /// Verify and decrypt a protected ticket, printing it as JSON
    Open {
        /// Protected ticket in hex
        token: String,

        /// Fail if the ticket has expired
        #[arg(long)]
        require_valid: bool,
    },
}
