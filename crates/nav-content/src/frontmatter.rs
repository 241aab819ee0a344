//! Front-matter extraction and title detection.
//!
//! Front-matter is a YAML block at the very top of a content file:
//!
//! ```text
//! ---
//! title: Getting Started
//! sidebar:
//!   order: 1.5
//!   label: Start
//! ---
//! # Body
//! ```
//!
//! Fields are read one by one: an ill-typed field is logged and dropped
//! without affecting the others.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::de::DeserializeOwned;
use serde_yaml::Value;

/// Regex for extracting first H1 heading.
static H1_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^#[ \t]+(.+)$").unwrap());

/// Parsed front-matter fields relevant to navigation.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct FrontMatter {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub sidebar: SidebarMeta,
}

/// `sidebar` table of the front-matter.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct SidebarMeta {
    pub order: Option<f64>,
    pub label: Option<String>,
    pub hidden: bool,
}

impl FrontMatter {
    fn from_yaml(value: &Value, path: &Path) -> Self {
        if !value.is_mapping() {
            tracing::warn!(path = %path.display(), "Front-matter is not a mapping, ignoring");
            return Self::default();
        }
        Self {
            title: field(value, "title", "title", path),
            slug: field(value, "slug", "slug", path),
            sidebar: SidebarMeta::from_yaml(value.get("sidebar"), path),
        }
    }
}

impl SidebarMeta {
    fn from_yaml(value: Option<&Value>, path: &Path) -> Self {
        let Some(value) = value.filter(|v| !v.is_null()) else {
            return Self::default();
        };
        if !value.is_mapping() {
            tracing::warn!(
                path = %path.display(),
                field = "sidebar",
                "Front-matter sidebar is not a mapping, ignoring"
            );
            return Self::default();
        }

        let order = field::<f64>(value, "order", "sidebar.order", path).filter(|order| {
            let finite = order.is_finite();
            if !finite {
                tracing::warn!(
                    path = %path.display(),
                    field = "sidebar.order",
                    "Order hint is not a finite number, ignoring"
                );
            }
            finite
        });
        Self {
            order,
            label: field(value, "label", "sidebar.label", path),
            hidden: field(value, "hidden", "sidebar.hidden", path).unwrap_or(false),
        }
    }
}

/// Read `key` of a YAML mapping as `T`.
///
/// A missing or null value is `None`; a value of the wrong type is logged
/// under `name` and also `None`.
fn field<T: DeserializeOwned>(table: &Value, key: &str, name: &str, path: &Path) -> Option<T> {
    let value = table.get(key).filter(|v| !v.is_null())?;
    match serde_yaml::from_value(value.clone()) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                field = name,
                error = %e,
                "Invalid front-matter field, ignoring"
            );
            None
        }
    }
}

/// Split a document into its YAML block and the remaining body.
///
/// Returns `None` when the document does not start with `---` (optional BOM)
/// or the block is never closed by `---` or `...`.
fn split_frontmatter(input: &str) -> Option<(&str, &str)> {
    let input = input.trim_start_matches('\u{feff}');
    let mut lines = input.split_inclusive('\n');

    let first = lines.next()?;
    if first.trim_end() != "---" {
        return None;
    }

    let start = first.len();
    let mut offset = start;
    for line in lines {
        let trimmed = line.trim_end();
        if trimmed == "---" || trimmed == "..." {
            return Some((&input[start..offset], &input[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

/// Parse front-matter of a content file.
///
/// Malformed YAML is logged and treated as absent; ill-typed fields are
/// dropped one by one. Returns the parsed fields
/// and the body that follows the block.
pub(crate) fn parse_frontmatter<'a>(content: &'a str, path: &Path) -> (FrontMatter, &'a str) {
    let Some((yaml, body)) = split_frontmatter(content) else {
        return (FrontMatter::default(), content);
    };
    if yaml.trim().is_empty() {
        return (FrontMatter::default(), body);
    }

    match serde_yaml::from_str::<Value>(yaml) {
        Ok(value) => (FrontMatter::from_yaml(&value, path), body),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Malformed front-matter, ignoring");
            (FrontMatter::default(), body)
        }
    }
}

/// Extract the text of the first `# H1` heading.
pub(crate) fn first_heading(body: &str) -> Option<String> {
    let caps = H1_REGEX.captures(body)?;
    let title = caps[1].trim();
    (!title.is_empty()).then(|| title.to_owned())
}
