//! Init command implementation
//!
//! Adds the managed-region markers to the target file and records the
//! target path in the dotfile.

use std::path::Path;

use colored::Colorize;

use hostsync_content::{Error as ContentError, insert_empty_markers};
use hostsync_fs::{Dotfile, io};

use crate::error::Result;

/// Run the init command.
///
/// Markers already present is an expected operator mistake, reported as a
/// notice rather than an error; the dotfile is still brought up to date.
pub fn run_init(dotfile_path: &Path, path_flag: Option<&Path>) -> Result<()> {
    let dotfile = Dotfile::load_or_default(dotfile_path)?;
    let target = dotfile.resolve_target(path_flag);

    let doc = if target.exists() {
        io::read_text(&target)?
    } else {
        String::new()
    };

    match insert_empty_markers(&doc) {
        Ok(updated) => {
            io::write_text(&target, &updated)?;
            println!(
                "{} Added managed region to {}",
                "OK".green().bold(),
                target.display()
            );
        }
        Err(ContentError::MarkersAlreadyExist) => {
            println!(
                "{} Markers already exist on {}",
                "SKIP".yellow().bold(),
                target.display()
            );
        }
        Err(e) => return Err(e.into()),
    }

    Dotfile::update_or_create(dotfile_path, &target)?;
    println!(
        "Check and edit {} before running {}.",
        dotfile_path.display().to_string().cyan(),
        "hostsync update".cyan()
    );
    Ok(())
}
