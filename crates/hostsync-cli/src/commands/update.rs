//! Update command implementation
//!
//! Fetches the profile's inventory, formats it into a section body, merges
//! it into the section model, and rewrites the managed region. The whole
//! result is computed in memory before anything touches disk.

use std::path::Path;

use colored::Colorize;

use hostsync_content::{
    AddressMode, MergeAction, extract_sections, format_entries, has_markers, merge_profile,
    replace_region,
};
use hostsync_fs::{Dotfile, io};
use hostsync_inventory::{FileInventory, InventorySource};

use crate::error::{CliError, Result};

/// Run the update command.
///
/// Missing markers are an expected operator mistake and reported as a
/// notice pointing at `init`; credential failures are terminal and point
/// at the dotfile.
pub fn run_update(
    dotfile_path: &Path,
    path_flag: Option<&Path>,
    profile: &str,
    mode: AddressMode,
) -> Result<()> {
    let dotfile = Dotfile::load_or_default(dotfile_path)?;
    let target = dotfile.resolve_target(path_flag);
    let source = FileInventory::from_dotfile(&dotfile);

    println!(
        "{} Updating hosts for profile {}...",
        "=>".blue().bold(),
        profile.cyan()
    );

    let doc = io::read_text(&target)?;
    if !has_markers(&doc) {
        println!(
            "{} Markers not found on {}",
            "SKIP".yellow().bold(),
            target.display()
        );
        println!(
            "Run {} first.",
            format!("hostsync init --path {}", target.display()).cyan()
        );
        return Ok(());
    }

    let (updated, count, action) =
        match merge_into_document(&doc, profile, mode, &dotfile.ssh_options, &source) {
            Ok(outcome) => outcome,
            Err(CliError::Inventory(e)) => {
                return Err(CliError::user(format!(
                    "{e}. Set inventory credentials at {}",
                    dotfile_path.display()
                )));
            }
            Err(e) => return Err(e),
        };

    io::write_text(&target, &updated)?;

    if let MergeAction::Migrated { from } = &action {
        println!(
            "   {} migrated legacy section {} to {}",
            "~".yellow(),
            from.cyan(),
            profile.cyan()
        );
    }
    println!(
        "{} Updated {} hosts on {}",
        "OK".green().bold(),
        count,
        target.display()
    );
    Ok(())
}

/// Compute the updated document for one profile.
///
/// Returns the new document text, the number of hosts written, and what
/// the merge policy did.
fn merge_into_document(
    doc: &str,
    profile: &str,
    mode: AddressMode,
    extra: &[String],
    source: &dyn InventorySource,
) -> Result<(String, usize, MergeAction)> {
    let mut model = extract_sections(doc)?;
    let hosts = source.fetch_hosts(profile)?;
    let (body, count) = format_entries(&hosts, mode, extra);
    let action = merge_profile(&mut model, profile, body)?;
    let updated = replace_region(doc, &model.serialize())?;
    Ok((updated, count, action))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostsync_content::{BEGIN_MARK, END_MARK, HostRecord, insert_empty_markers};
    use hostsync_inventory::StaticInventory;
    use pretty_assertions::assert_eq;

    fn inventory() -> StaticInventory {
        StaticInventory::default().with_profile(
            "prod",
            vec![
                HostRecord {
                    alias: "web-1".into(),
                    public_address: Some("198.51.100.4".into()),
                    private_address: Some("10.0.0.4".into()),
                },
                HostRecord {
                    alias: "db-1".into(),
                    public_address: None,
                    private_address: Some("10.0.0.5".into()),
                },
            ],
        )
    }

    #[test]
    fn merge_writes_section_inside_region() {
        let doc = insert_empty_markers("Host gateway\n").unwrap();
        let (updated, count, action) = merge_into_document(
            &doc,
            "prod",
            AddressMode::PreferPublicIfPresent,
            &[],
            &inventory(),
        )
        .unwrap();

        assert_eq!(count, 2);
        assert_eq!(action, MergeAction::Created);
        assert_eq!(
            updated,
            format!(
                "Host gateway\n{BEGIN_MARK}\n# section: prod\n\
                 Host web-1\n  HostName 198.51.100.4\n\
                 Host db-1\n  HostName 10.0.0.5\n{END_MARK}\n"
            )
        );
    }

    #[test]
    fn public_required_filters_private_only_hosts() {
        let doc = insert_empty_markers("").unwrap();
        let (updated, count, _) =
            merge_into_document(&doc, "prod", AddressMode::PublicRequired, &[], &inventory())
                .unwrap();

        assert_eq!(count, 1);
        assert!(updated.contains("Host web-1"));
        assert!(!updated.contains("Host db-1"));
    }

    #[test]
    fn extra_directives_are_appended_to_every_entry() {
        let doc = insert_empty_markers("").unwrap();
        let extra = vec!["User ubuntu".to_string()];
        let (updated, _, _) = merge_into_document(
            &doc,
            "prod",
            AddressMode::PreferPrivate,
            &extra,
            &inventory(),
        )
        .unwrap();

        assert_eq!(updated.matches("  User ubuntu\n").count(), 2);
    }

    #[test]
    fn unknown_profile_surfaces_credentials_error() {
        let doc = insert_empty_markers("").unwrap();
        let err = merge_into_document(
            &doc,
            "staging",
            AddressMode::PublicRequired,
            &[],
            &inventory(),
        )
        .unwrap_err();
        assert!(matches!(err, CliError::Inventory(_)));
    }

    #[test]
    fn repeated_merge_is_idempotent() {
        let doc = insert_empty_markers("").unwrap();
        let source = inventory();
        let (first, ..) = merge_into_document(
            &doc,
            "prod",
            AddressMode::PreferPublicIfPresent,
            &[],
            &source,
        )
        .unwrap();
        let (second, ..) = merge_into_document(
            &first,
            "prod",
            AddressMode::PreferPublicIfPresent,
            &[],
            &source,
        )
        .unwrap();
        assert_eq!(first, second);
    }
}
