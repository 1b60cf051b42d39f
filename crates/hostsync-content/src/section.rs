//! Section model for the managed region
//!
//! The region interior is an ordered list of named sections, one per
//! inventory profile. Ordering uses an explicit `Vec`, never map iteration
//! order, so re-serialization is deterministic across runs.

use crate::error::{Error, Result};

/// Header line emitted before each section body
pub const SECTION_HEADER_PREFIX: &str = "# section: ";

/// Body of one section.
///
/// `Structured` text was written by hostsync under a recognized header.
/// `Opaque` text was recovered from a headerless or hand-edited interior
/// and is carried verbatim rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionBody {
    Structured(String),
    Opaque(String),
}

impl SectionBody {
    /// Raw text of the body, whichever variant holds it
    pub fn as_str(&self) -> &str {
        match self {
            Self::Structured(text) | Self::Opaque(text) => text,
        }
    }

    fn text_mut(&mut self) -> &mut String {
        match self {
            Self::Structured(text) | Self::Opaque(text) => text,
        }
    }
}

/// One named sub-block of the managed region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    key: String,
    body: SectionBody,
}

impl Section {
    pub fn new(key: impl Into<String>, body: SectionBody) -> Self {
        Self {
            key: key.into(),
            body,
        }
    }

    /// Profile key identifying this section
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn body(&self) -> &SectionBody {
        &self.body
    }

    /// Body text regardless of variant
    pub fn body_text(&self) -> &str {
        self.body.as_str()
    }

    /// Render as a self-describing block: header line plus body.
    ///
    /// The output is newline-terminated so blocks concatenate cleanly.
    pub fn render(&self) -> String {
        let body = self.body.as_str();
        let mut out = String::with_capacity(SECTION_HEADER_PREFIX.len() + self.key.len() + body.len() + 2);
        out.push_str(SECTION_HEADER_PREFIX);
        out.push_str(&self.key);
        out.push('\n');
        out.push_str(body);
        if !body.is_empty() && !body.ends_with('\n') {
            out.push('\n');
        }
        out
    }
}

/// Ordered mapping from profile key to section.
///
/// Rebuilt fully on every parse and fully re-serialized on every write;
/// no partial state survives across invocations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionModel {
    sections: Vec<Section>,
}

impl SectionModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Look up a section by key. Absence is not an error.
    pub fn get(&self, key: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.key == key)
    }

    /// Section keys in model order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.key.as_str())
    }

    /// Sections in model order
    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// Insert a section at the end of the current order, or replace the
    /// body in place when the key is already present.
    pub fn upsert(&mut self, key: &str, body: SectionBody) {
        match self.sections.iter_mut().find(|s| s.key == key) {
            Some(existing) => existing.body = body,
            None => self.sections.push(Section::new(key, body)),
        }
    }

    /// Append body text to an existing section, or insert a new one.
    ///
    /// Used by the region parser when the same key appears twice in a
    /// hand-edited interior; collapsing rather than replacing means no
    /// user text is dropped.
    pub(crate) fn upsert_append(&mut self, key: &str, body: SectionBody) {
        match self.sections.iter_mut().find(|s| s.key == key) {
            Some(existing) => {
                let text = existing.body.text_mut();
                if !text.is_empty() && !text.ends_with('\n') {
                    text.push('\n');
                }
                text.push_str(body.as_str());
            }
            None => self.sections.push(Section::new(key, body)),
        }
    }

    /// Relabel a section in place, preserving its position.
    pub fn rename(&mut self, old_key: &str, new_key: &str) -> Result<()> {
        if old_key != new_key && self.get(new_key).is_some() {
            return Err(Error::DuplicateSectionKey {
                key: new_key.to_string(),
            });
        }
        if let Some(section) = self.sections.iter_mut().find(|s| s.key == old_key) {
            section.key = new_key.to_string();
        }
        Ok(())
    }

    /// Concatenate all sections in model order.
    ///
    /// Every section is emitted with its header, so parsing the output
    /// reproduces an equivalent model. An empty model serializes to an
    /// empty string.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        for section in &self.sections {
            out.push_str(&section.render());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn get_returns_none_for_absent_key() {
        let model = SectionModel::new();
        assert!(model.get("default").is_none());
    }

    #[test]
    fn upsert_inserts_at_end() {
        let mut model = SectionModel::new();
        model.upsert("a", SectionBody::Structured("X\n".into()));
        model.upsert("b", SectionBody::Structured("Y\n".into()));
        assert_eq!(model.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn upsert_replaces_in_place() {
        let mut model = SectionModel::new();
        model.upsert("a", SectionBody::Structured("X\n".into()));
        model.upsert("b", SectionBody::Structured("Y\n".into()));
        model.upsert("a", SectionBody::Structured("Z\n".into()));
        assert_eq!(model.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(model.get("a").unwrap().body_text(), "Z\n");
    }

    #[test]
    fn rename_preserves_position() {
        let mut model = SectionModel::new();
        model.upsert("a", SectionBody::Structured("X\n".into()));
        model.upsert("b", SectionBody::Structured("Y\n".into()));
        model.rename("a", "c").unwrap();
        assert_eq!(model.keys().collect::<Vec<_>>(), vec!["c", "b"]);
        assert_eq!(model.get("c").unwrap().body_text(), "X\n");
    }

    #[test]
    fn rename_to_existing_key_fails() {
        let mut model = SectionModel::new();
        model.upsert("a", SectionBody::Structured("X\n".into()));
        model.upsert("b", SectionBody::Structured("Y\n".into()));
        let err = model.rename("a", "b").unwrap_err();
        assert_eq!(err, Error::DuplicateSectionKey { key: "b".into() });
    }

    #[test]
    fn rename_to_same_key_is_noop() {
        let mut model = SectionModel::new();
        model.upsert("a", SectionBody::Structured("X\n".into()));
        model.rename("a", "a").unwrap();
        assert_eq!(model.keys().collect::<Vec<_>>(), vec!["a"]);
    }

    #[test]
    fn upsert_append_collapses_duplicate_keys() {
        let mut model = SectionModel::new();
        model.upsert_append("a", SectionBody::Opaque("first\n".into()));
        model.upsert_append("a", SectionBody::Opaque("second\n".into()));
        assert_eq!(model.len(), 1);
        assert_eq!(model.get("a").unwrap().body_text(), "first\nsecond\n");
    }

    #[test]
    fn serialize_empty_model_is_empty() {
        assert_eq!(SectionModel::new().serialize(), "");
    }

    #[test]
    fn render_terminates_body_with_newline() {
        let section = Section::new("prod", SectionBody::Structured("Host a".into()));
        assert_eq!(section.render(), "# section: prod\nHost a\n");
    }

    #[test]
    fn render_empty_body_is_header_only() {
        let section = Section::new("prod", SectionBody::Structured(String::new()));
        assert_eq!(section.render(), "# section: prod\n");
    }
}
