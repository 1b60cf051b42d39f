//! Inventory sources

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;

use hostsync_content::HostRecord;
use hostsync_fs::{ConfigStore, Dotfile};

use crate::error::{Error, Result};

/// A provider of host records for a profile.
///
/// One blocking call per invocation; implementations report credential
/// problems rather than retrying.
pub trait InventorySource {
    fn fetch_hosts(&self, profile: &str) -> Result<Vec<HostRecord>>;
}

/// On-disk shape of an inventory file
#[derive(Debug, Default, Deserialize)]
struct InventoryFile {
    #[serde(default)]
    hosts: Vec<HostRecord>,
}

/// Inventory backed by per-profile files named in the dotfile.
///
/// Record order in the file is the order handed to the formatter.
#[derive(Debug, Clone, Default)]
pub struct FileInventory {
    profiles: BTreeMap<String, PathBuf>,
}

impl FileInventory {
    pub fn new(profiles: BTreeMap<String, PathBuf>) -> Self {
        Self { profiles }
    }

    /// Build from the dotfile's `[profiles]` table
    pub fn from_dotfile(dotfile: &Dotfile) -> Self {
        let profiles = dotfile
            .profiles
            .iter()
            .map(|(key, profile)| (key.clone(), profile.inventory.clone()))
            .collect();
        Self { profiles }
    }
}

impl InventorySource for FileInventory {
    fn fetch_hosts(&self, profile: &str) -> Result<Vec<HostRecord>> {
        let path = self
            .profiles
            .get(profile)
            .ok_or_else(|| Error::CredentialsMissing {
                profile: profile.to_string(),
            })?;

        let inventory: InventoryFile =
            ConfigStore::new()
                .load(path)
                .map_err(|e| Error::CredentialsInvalid {
                    profile: profile.to_string(),
                    message: e.to_string(),
                })?;

        tracing::debug!(
            profile,
            hosts = inventory.hosts.len(),
            path = %path.display(),
            "fetched inventory"
        );
        Ok(inventory.hosts)
    }
}

/// In-memory inventory, used in tests and as a seam for embedding
#[derive(Debug, Clone, Default)]
pub struct StaticInventory {
    profiles: BTreeMap<String, Vec<HostRecord>>,
}

impl StaticInventory {
    pub fn new(profiles: BTreeMap<String, Vec<HostRecord>>) -> Self {
        Self { profiles }
    }

    pub fn with_profile(mut self, profile: impl Into<String>, hosts: Vec<HostRecord>) -> Self {
        self.profiles.insert(profile.into(), hosts);
        self
    }
}

impl InventorySource for StaticInventory {
    fn fetch_hosts(&self, profile: &str) -> Result<Vec<HostRecord>> {
        self.profiles
            .get(profile)
            .cloned()
            .ok_or_else(|| Error::CredentialsMissing {
                profile: profile.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn missing_profile_reports_credentials_missing() {
        let source = FileInventory::default();
        let err = source.fetch_hosts("prod").unwrap_err();
        assert!(matches!(err, Error::CredentialsMissing { profile } if profile == "prod"));
    }

    #[test]
    fn unreadable_inventory_reports_credentials_invalid() {
        let dir = TempDir::new().unwrap();
        let mut profiles = BTreeMap::new();
        profiles.insert("prod".to_string(), dir.path().join("absent.toml"));

        let err = FileInventory::new(profiles).fetch_hosts("prod").unwrap_err();
        assert!(matches!(err, Error::CredentialsInvalid { profile, .. } if profile == "prod"));
    }

    #[test]
    fn toml_inventory_preserves_record_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prod.toml");
        std::fs::write(
            &path,
            concat!(
                "[[hosts]]\n",
                "alias = \"web-1\"\n",
                "public_address = \"198.51.100.4\"\n",
                "\n",
                "[[hosts]]\n",
                "alias = \"db-1\"\n",
                "private_address = \"10.0.0.4\"\n",
            ),
        )
        .unwrap();

        let mut profiles = BTreeMap::new();
        profiles.insert("prod".to_string(), path);
        let hosts = FileInventory::new(profiles).fetch_hosts("prod").unwrap();

        assert_eq!(hosts.len(), 2);
        assert_eq!(hosts[0].alias, "web-1");
        assert_eq!(hosts[0].public_address.as_deref(), Some("198.51.100.4"));
        assert_eq!(hosts[1].alias, "db-1");
        assert_eq!(hosts[1].public_address, None);
    }

    #[test]
    fn static_inventory_serves_configured_hosts() {
        let source = StaticInventory::default().with_profile(
            "prod",
            vec![HostRecord {
                alias: "web-1".into(),
                public_address: Some("198.51.100.4".into()),
                private_address: None,
            }],
        );
        assert_eq!(source.fetch_hosts("prod").unwrap().len(), 1);
        assert!(source.fetch_hosts("staging").is_err());
    }
}
