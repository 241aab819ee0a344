//! Autogenerate expansion.
//!
//! An autogenerate directive names a content directory and is replaced by one
//! link per page found below it. Matching is recursive: pages in nested
//! directories are included, and the empty directory covers the whole tree.
//! Pages flagged `hidden` in their front-matter are left out.

use std::cmp::Ordering;

use nav_content::{ContentEntry, ContentIndex, normalize_slug};

use crate::node::ResolvedNode;

/// Autogenerate expansion failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExpandError {
    /// No visible page lies under the directory.
    #[error("No content found in directory '{directory}'")]
    EmptyDirectory { directory: String },
}

/// Expand a directory into ordered links.
///
/// Pages with an order hint come first, by hint ascending; pages without a
/// hint follow. Ties and unhinted pages are ordered by slug.
///
/// # Errors
///
/// Returns [`ExpandError::EmptyDirectory`] when no page matches.
pub fn expand(
    directory: &str,
    index: &ContentIndex,
    base: &str,
) -> Result<Vec<ResolvedNode>, ExpandError> {
    let directory = normalize_slug(directory);
    let mut entries: Vec<&ContentEntry> = index
        .in_directory(&directory, true)
        .filter(|entry| !entry.hidden)
        .collect();

    if entries.is_empty() {
        return Err(ExpandError::EmptyDirectory { directory });
    }

    entries.sort_by(|a, b| compare_entries(a, b));
    Ok(entries
        .into_iter()
        .map(|entry| ResolvedNode::link_to(entry, None, base))
        .collect())
}

fn compare_entries(a: &ContentEntry, b: &ContentEntry) -> Ordering {
    match (a.order, b.order) {
        (Some(x), Some(y)) => x.total_cmp(&y).then_with(|| a.slug.cmp(&b.slug)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.slug.cmp(&b.slug),
    }
}
