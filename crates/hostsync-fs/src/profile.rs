//! User preferences dotfile
//!
//! Hand-edited by the user after `init`; read-only from the core's
//! perspective during `update`. Default location is `$HOME/.hostsync.toml`,
//! any extension the [`ConfigStore`] understands works.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{ConfigStore, Result};

/// Per-profile settings: where this profile's inventory lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Inventory file listing this profile's host records
    pub inventory: PathBuf,
}

/// The `~/.hostsync.toml` preferences file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dotfile {
    /// Target document, usually an ssh_config
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Extra directive lines appended verbatim to every host entry
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ssh_options: Vec<String>,

    /// Inventory credentials keyed by profile
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub profiles: BTreeMap<String, ProfileConfig>,
}

impl Dotfile {
    /// Default dotfile location, `$HOME/.hostsync.toml`
    pub fn default_location() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".hostsync.toml")
    }

    /// Load the dotfile, or start from defaults when it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no dotfile, using defaults");
            return Ok(Self::default());
        }
        ConfigStore::new().load(path)
    }

    /// Persist the dotfile
    pub fn save(&self, path: &Path) -> Result<()> {
        ConfigStore::new().save(path, self)
    }

    /// Record the target document path, preserving every other field.
    ///
    /// Creates the dotfile when absent. Returns the stored state.
    pub fn update_or_create(path: &Path, config_path: &Path) -> Result<Self> {
        let mut dotfile = Self::load_or_default(path)?;
        dotfile.path = Some(config_path.to_path_buf());
        dotfile.save(path)?;
        Ok(dotfile)
    }

    /// Resolve the target document path.
    ///
    /// Precedence: explicit flag, then the dotfile's `path`, then
    /// `$HOME/.ssh/config`.
    pub fn resolve_target(&self, flag: Option<&Path>) -> PathBuf {
        if let Some(p) = flag {
            return p.to_path_buf();
        }
        if let Some(p) = &self.path {
            return p.clone();
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".ssh")
            .join("config")
    }
}
