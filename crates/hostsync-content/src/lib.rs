//! Managed-region merge engine for hostsync
//!
//! Pure text transforms for locating, parsing, and rewriting the
//! marker-delimited region hostsync owns inside a user-edited file.
//! All I/O happens in `hostsync-fs`.

pub mod entry;
pub mod error;
pub mod merge;
pub mod region;
pub mod section;

pub use entry::{AddressMode, HostRecord, format_entries, format_entry};
pub use error::{Error, Result};
pub use merge::{DEFAULT_PROFILE, MergeAction, merge_profile};
pub use region::{
    BEGIN_MARK, END_MARK, extract_sections, has_markers, insert_empty_markers, remove_region,
    replace_region,
};
pub use section::{Section, SectionBody, SectionModel};
