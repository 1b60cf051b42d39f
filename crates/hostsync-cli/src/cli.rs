//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use hostsync_content::AddressMode;
use hostsync_fs::Dotfile;

/// hostsync - keep inventory hosts merged into your ssh_config
#[derive(Parser, Debug)]
#[command(name = "hostsync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Preferences dotfile (defaults to $HOME/.hostsync.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub dotfile: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub fn dotfile_location(&self) -> PathBuf {
        self.dotfile
            .clone()
            .unwrap_or_else(Dotfile::default_location)
    }
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Add the managed-region markers to the target file
    ///
    /// Appends an empty managed region at the end of the file and records
    /// the target path in the dotfile. Running it again is a no-op with a
    /// notice, never an overwrite.
    Init {
        /// Target file (defaults to the dotfile's path, then ~/.ssh/config)
        #[arg(short, long, value_name = "FILE")]
        path: Option<PathBuf>,
    },

    /// Update the host list inside the managed region
    Update {
        /// Target file (defaults to the dotfile's path, then ~/.ssh/config)
        #[arg(short, long, value_name = "FILE")]
        path: Option<PathBuf>,

        /// Inventory profile to merge
        #[arg(long, default_value = "default")]
        profile: String,

        /// Use the private address for HostName entries
        #[arg(long, conflicts_with = "prefer_public_address")]
        use_private_ip: bool,

        /// Use the public address when the host has one, else the private
        #[arg(long)]
        prefer_public_address: bool,
    },

    /// Remove the managed region from the target file
    Remove {
        /// Target file (defaults to the dotfile's path, then ~/.ssh/config)
        #[arg(short, long, value_name = "FILE")]
        path: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Map the update flags onto an address-selection mode.
///
/// Default (no flag) requires a public address, matching the historical
/// behavior of skipping hosts that only have a private one.
pub fn address_mode(use_private_ip: bool, prefer_public_address: bool) -> AddressMode {
    if use_private_ip {
        AddressMode::PreferPrivate
    } else if prefer_public_address {
        AddressMode::PreferPublicIfPresent
    } else {
        AddressMode::PublicRequired
    }
}
