//! Marked-region location, extraction, and splicing
//!
//! The managed region is bounded by two sentinel lines. Everything outside
//! the pair survives every operation byte-for-byte; only the interior is
//! ever rewritten. The marker strings are a versioned grammar: changing
//! them breaks round-trip on files already under management.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::merge::DEFAULT_PROFILE;
use crate::section::{SectionBody, SectionModel};

/// Sentinel line opening the managed region
pub const BEGIN_MARK: &str = "### HOSTSYNC BEGIN ###";

/// Sentinel line closing the managed region
pub const END_MARK: &str = "### HOSTSYNC END ###";

/// Pattern recognizing a section header line, tolerant of hand-edited
/// spacing. Emission always uses the canonical `# section: <key>` form.
static SECTION_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#\s*section\s*:\s*(\S+)\s*$").unwrap());

/// Byte spans of the two marker lines, each including its trailing newline
struct MarkerSpans {
    begin: Range<usize>,
    end: Range<usize>,
}

/// Locate the marker pair.
///
/// Returns `Ok(None)` when neither marker is present, the spans when
/// exactly one well-ordered pair is present, and `MalformedMarkerOrder`
/// for every other shape (lone marker, reversed pair, duplicates).
fn scan_markers(doc: &str) -> Result<Option<MarkerSpans>> {
    let mut begins: Vec<Range<usize>> = Vec::new();
    let mut ends: Vec<Range<usize>> = Vec::new();

    let mut offset = 0;
    for line in doc.split_inclusive('\n') {
        let span = offset..offset + line.len();
        match line.trim() {
            t if t == BEGIN_MARK => begins.push(span),
            t if t == END_MARK => ends.push(span),
            _ => {}
        }
        offset += line.len();
    }

    match (begins.len(), ends.len()) {
        (0, 0) => Ok(None),
        (1, 1) if begins[0].start < ends[0].start => Ok(Some(MarkerSpans {
            begin: begins.remove(0),
            end: ends.remove(0),
        })),
        _ => Err(Error::MalformedMarkerOrder),
    }
}

/// True iff exactly one well-formed marker pair is present, begin first
pub fn has_markers(doc: &str) -> bool {
    matches!(scan_markers(doc), Ok(Some(_)))
}

/// Append an empty managed region at the end of the document.
///
/// Existing content is untouched apart from gaining a terminating newline
/// when it lacks one. Fails when any marker line is already present.
pub fn insert_empty_markers(doc: &str) -> Result<String> {
    let has_any = doc.lines().any(|line| {
        let trimmed = line.trim();
        trimmed == BEGIN_MARK || trimmed == END_MARK
    });
    if has_any {
        return Err(Error::MarkersAlreadyExist);
    }

    let mut out = String::with_capacity(doc.len() + BEGIN_MARK.len() + END_MARK.len() + 3);
    out.push_str(doc);
    if !doc.is_empty() && !doc.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(BEGIN_MARK);
    out.push('\n');
    out.push_str(END_MARK);
    out.push('\n');
    Ok(out)
}

/// Parse the text between the markers into a section model.
///
/// Fails with `MarkersNotFound` when no markers are present and
/// `MalformedMarkerOrder` when the pair is broken.
pub fn extract_sections(doc: &str) -> Result<SectionModel> {
    let spans = scan_markers(doc)?.ok_or(Error::MarkersNotFound)?;
    Ok(parse_interior(&doc[spans.begin.end..spans.end.start]))
}

/// Parse the region interior.
///
/// A section begins at a header line and runs to the next header or end of
/// region. Content before the first header, or an interior with no headers
/// at all, is kept as one opaque section under the default key. A key that
/// appears twice has its bodies concatenated so hand-edited text is never
/// dropped. This never fails: malformed interiors degrade to opaque text.
fn parse_interior(interior: &str) -> SectionModel {
    let mut model = SectionModel::new();
    let mut current: Option<(String, String)> = None;
    let mut preamble = String::new();

    for line in interior.split_inclusive('\n') {
        if let Some(caps) = SECTION_HEADER.captures(line.trim()) {
            if let Some((key, body)) = current.take() {
                model.upsert_append(&key, SectionBody::Structured(body));
            } else if !preamble.trim().is_empty() {
                model.upsert_append(
                    DEFAULT_PROFILE,
                    SectionBody::Opaque(std::mem::take(&mut preamble)),
                );
            }
            current = Some((caps[1].to_string(), String::new()));
        } else if let Some((_, body)) = current.as_mut() {
            body.push_str(line);
        } else {
            preamble.push_str(line);
        }
    }

    if let Some((key, body)) = current {
        model.upsert_append(&key, SectionBody::Structured(body));
    } else if !preamble.trim().is_empty() {
        model.upsert_append(DEFAULT_PROFILE, SectionBody::Opaque(preamble));
    }

    model
}

/// Replace the span from begin marker through end marker (inclusive) with
/// the markers wrapping `region_text`. Prefix and suffix are byte-identical.
pub fn replace_region(doc: &str, region_text: &str) -> Result<String> {
    let spans = scan_markers(doc)?.ok_or(Error::MarkersNotFound)?;

    let mut out = String::with_capacity(
        spans.begin.start + region_text.len() + (doc.len() - spans.end.end) + 64,
    );
    out.push_str(&doc[..spans.begin.start]);
    out.push_str(BEGIN_MARK);
    out.push('\n');
    out.push_str(region_text);
    if !region_text.is_empty() && !region_text.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(END_MARK);
    out.push('\n');
    out.push_str(&doc[spans.end.end..]);
    Ok(out)
}

/// Remove the whole managed region including both markers, reverting the
/// document to its pre-init unmarked state.
pub fn remove_region(doc: &str) -> Result<String> {
    let spans = scan_markers(doc)?.ok_or(Error::MarkersNotFound)?;
    let mut out = String::with_capacity(spans.begin.start + (doc.len() - spans.end.end));
    out.push_str(&doc[..spans.begin.start]);
    out.push_str(&doc[spans.end.end..]);
    Ok(out)
}
