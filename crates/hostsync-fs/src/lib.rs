//! Filesystem boundary for hostsync
//!
//! Whole-file reads, atomic writes, and the user preferences dotfile.
//! Everything above this crate works on in-memory text.

pub mod config;
pub mod error;
pub mod io;
pub mod profile;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use profile::{Dotfile, ProfileConfig};
