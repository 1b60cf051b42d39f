//! hostsync CLI
//!
//! Reconciles inventory host records into the managed region of an
//! ssh_config-style file.

mod cli;
mod commands;
mod error;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    let dotfile = cli.dotfile_location();

    match cli.command {
        Some(Commands::Init { path }) => commands::run_init(&dotfile, path.as_deref()),
        Some(Commands::Update {
            path,
            profile,
            use_private_ip,
            prefer_public_address,
        }) => commands::run_update(
            &dotfile,
            path.as_deref(),
            &profile,
            cli::address_mode(use_private_ip, prefer_public_address),
        ),
        Some(Commands::Remove { path }) => commands::run_remove(&dotfile, path.as_deref()),
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "hostsync", &mut std::io::stdout());
            Ok(())
        }
        None => {
            println!(
                "{} Merge inventory hosts into your ssh_config",
                "hostsync".green().bold()
            );
            println!();
            println!("Run {} for available commands.", "hostsync --help".cyan());
            Ok(())
        }
    }
}
