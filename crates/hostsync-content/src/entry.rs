//! Host entry formatting
//!
//! Turns inventory records into the `Host`/`HostName` blocks written into
//! a section body. Output order follows inventory order, never sorted.

use serde::{Deserialize, Serialize};

/// One host as reported by an inventory source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostRecord {
    /// Alias written as the `Host` line
    pub alias: String,
    /// Publicly reachable address, when the host has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_address: Option<String>,
    /// Address on the private network
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_address: Option<String>,
}

/// Which address field ends up in the `HostName` line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AddressMode {
    /// Always use the private address
    PreferPrivate,
    /// Use the public address when present, otherwise the private one
    PreferPublicIfPresent,
    /// Require a public address; records without one are filtered out.
    /// That filtering is documented policy, not an error.
    #[default]
    PublicRequired,
}

impl AddressMode {
    /// Select the address for a record, or `None` when the record is
    /// excluded under this mode.
    pub fn select<'a>(&self, record: &'a HostRecord) -> Option<&'a str> {
        match self {
            Self::PreferPrivate => record.private_address.as_deref(),
            Self::PreferPublicIfPresent => record
                .public_address
                .as_deref()
                .or(record.private_address.as_deref()),
            Self::PublicRequired => record.public_address.as_deref(),
        }
    }
}

/// Format one record as an alias/address block.
///
/// Extra directive lines come from user preferences and are appended
/// verbatim, indented to match. Returns `None` when the address mode
/// excludes the record.
pub fn format_entry(record: &HostRecord, mode: AddressMode, extra: &[String]) -> Option<String> {
    let address = mode.select(record)?;
    let mut out = String::new();
    out.push_str("Host ");
    out.push_str(&record.alias);
    out.push('\n');
    out.push_str("  HostName ");
    out.push_str(address);
    out.push('\n');
    for line in extra {
        out.push_str("  ");
        out.push_str(line);
        out.push('\n');
    }
    Some(out)
}

/// Format a whole inventory into one section body.
///
/// Returns the body text and the number of hosts it contains (records
/// filtered by the address mode are not counted).
pub fn format_entries(
    records: &[HostRecord],
    mode: AddressMode,
    extra: &[String],
) -> (String, usize) {
    let mut body = String::new();
    let mut count = 0;
    for record in records {
        if let Some(entry) = format_entry(record, mode, extra) {
            body.push_str(&entry);
            count += 1;
        }
    }
    (body, count)
}
