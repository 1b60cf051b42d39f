//! Property tests for splice boundary preservation

use hostsync_content::{BEGIN_MARK, END_MARK, has_markers, remove_region, replace_region};
use proptest::prelude::*;

/// Unmarked text: anything that cannot be mistaken for a marker line
fn unmarked_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _.:#\n-]{0,120}".prop_filter("must not contain marker text", |s| {
        !s.contains("HOSTSYNC")
    })
}

/// Terminate a chunk so the following marker starts on its own line
fn as_prefix(mut s: String) -> String {
    if !s.is_empty() && !s.ends_with('\n') {
        s.push('\n');
    }
    s
}

proptest! {
    #[test]
    fn replace_preserves_unmarked_content(
        prefix in unmarked_text(),
        suffix in unmarked_text(),
        old_interior in unmarked_text(),
        new_interior in unmarked_text(),
    ) {
        let prefix = as_prefix(prefix);
        let old_interior = as_prefix(old_interior);
        let doc = format!("{prefix}{BEGIN_MARK}\n{old_interior}{END_MARK}\n{suffix}");

        let out = replace_region(&doc, &new_interior).unwrap();

        prop_assert!(out.starts_with(&prefix));
        let expected_end = format!("{END_MARK}\n{suffix}");
        prop_assert!(out.ends_with(&expected_end));
        prop_assert!(has_markers(&out));
    }

    #[test]
    fn remove_leaves_exactly_prefix_and_suffix(
        prefix in unmarked_text(),
        suffix in unmarked_text(),
        interior in unmarked_text(),
    ) {
        let prefix = as_prefix(prefix);
        let interior = as_prefix(interior);
        let doc = format!("{prefix}{BEGIN_MARK}\n{interior}{END_MARK}\n{suffix}");

        let out = remove_region(&doc).unwrap();

        prop_assert_eq!(out, format!("{}{}", prefix, suffix));
    }
}
