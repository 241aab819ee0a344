//! Slug conventions.
//!
//! A slug is the page path without leading slash or extension:
//! - `index.md` -> `""`
//! - `guide.md` -> `"guide"`
//! - `intro/index.mdx` -> `"intro"`
//! - `intro/start.md` -> `"intro/start"`

use std::path::{Component, Path};

/// Content file extensions recognized by the scanner.
pub(crate) const CONTENT_EXTENSIONS: [&str; 2] = ["md", "mdx"];

/// Normalize a slug or directory reference.
///
/// Surrounding slashes are trimmed and a trailing `index` segment collapses
/// to its directory, so `"/intro/"`, `"intro"` and `"intro/index"` all name
/// the same page.
///
/// # Examples
///
/// ```
/// use nav_content::normalize_slug;
///
/// assert_eq!(normalize_slug("/intro/start/"), "intro/start");
/// assert_eq!(normalize_slug("intro/index"), "intro");
/// assert_eq!(normalize_slug("index"), "");
/// ```
#[must_use]
pub fn normalize_slug(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed == "index" {
        return String::new();
    }
    trimmed.strip_suffix("/index").unwrap_or(trimmed).to_owned()
}

/// Join the normal components of a relative path with `/`.
fn join_components(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Whether a file name has a content extension, in any letter case.
pub(crate) fn is_content_file(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| CONTENT_EXTENSIONS.iter().any(|c| ext.eq_ignore_ascii_case(c)))
}

/// Convert a content file path (relative to the content root) to its slug.
pub(crate) fn file_path_to_slug(rel_path: &Path) -> String {
    normalize_slug(&join_components(&rel_path.with_extension("")))
}

/// Directory of a content file relative to the content root (`""` for root files).
pub(crate) fn directory_of(rel_path: &Path) -> String {
    rel_path.parent().map(join_components).unwrap_or_default()
}

/// Whether `directory` is `parent` or lies below it.
///
/// The empty parent is the content root and contains everything.
pub(crate) fn is_within(directory: &str, parent: &str) -> bool {
    parent.is_empty()
        || directory == parent
        || directory
            .strip_prefix(parent)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Convert a slug (kebab-case or `snake_case`) to title case.
///
/// Replaces `-` and `_` with spaces, then capitalizes the first letter of each word.
pub(crate) fn titlecase_from_slug(slug: &str) -> String {
    let mut result = String::with_capacity(slug.len());
    for word in slug.split(['-', '_', ' ']).filter(|w| !w.is_empty()) {
        if !result.is_empty() {
            result.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.push_str(chars.as_str());
        }
    }
    result
}
