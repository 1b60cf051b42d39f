//! Remove command implementation
//!
//! Deletes the managed region including both markers, reverting the file
//! to its pre-init state.

use std::path::Path;

use colored::Colorize;

use hostsync_content::{has_markers, remove_region};
use hostsync_fs::{Dotfile, io};

use crate::error::Result;

/// Run the remove command.
///
/// Absent markers are a notice, not an error.
pub fn run_remove(dotfile_path: &Path, path_flag: Option<&Path>) -> Result<()> {
    let dotfile = Dotfile::load_or_default(dotfile_path)?;
    let target = dotfile.resolve_target(path_flag);

    let doc = io::read_text(&target)?;
    if !has_markers(&doc) {
        println!(
            "{} Markers not found on {}",
            "SKIP".yellow().bold(),
            target.display()
        );
        return Ok(());
    }

    let updated = remove_region(&doc)?;
    io::write_text(&target, &updated)?;
    println!(
        "{} Removed managed region from {}",
        "OK".green().bold(),
        target.display()
    );
    Ok(())
}
