//! Merge policy: which section a freshly formatted body lands in
//!
//! Deterministic and order-preserving for every section except the one
//! being inserted or renamed.

use crate::error::Result;
use crate::section::{SectionBody, SectionModel};

/// Reserved key for the section left behind by single-profile usage and
/// for opaque interiors recovered by the parser
pub const DEFAULT_PROFILE: &str = "default";

/// What the merge did, for status reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeAction {
    /// A new section was appended
    Created,
    /// An existing section's body was replaced in place
    Replaced,
    /// A lone pre-multi-profile section was renamed, then overwritten
    Migrated { from: String },
}

/// Merge a formatted body for `key` into the model.
///
/// A model holding exactly one section under some other key, when `key` is
/// not the reserved default, is treated as a pre-multi-profile artifact:
/// the lone section is renamed to `key` and overwritten rather than left
/// to sit beside a duplicate. In every other case the section for `key` is
/// created or replaced and unrelated sections are untouched.
pub fn merge_profile(model: &mut SectionModel, key: &str, body: String) -> Result<MergeAction> {
    if model.get(key).is_some() {
        model.upsert(key, SectionBody::Structured(body));
        return Ok(MergeAction::Replaced);
    }

    if model.len() == 1 && key != DEFAULT_PROFILE {
        let from = model
            .keys()
            .next()
            .map(str::to_string)
            .unwrap_or_default();
        model.rename(&from, key)?;
        model.upsert(key, SectionBody::Structured(body));
        return Ok(MergeAction::Migrated { from });
    }

    model.upsert(key, SectionBody::Structured(body));
    Ok(MergeAction::Created)
}
