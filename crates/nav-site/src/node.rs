//! Resolved navigation nodes.

use nav_content::ContentEntry;
use serde::Serialize;

/// Node of the resolved navigation tree.
///
/// Mirror of [`DeclarationNode`](nav_config::DeclarationNode) with every
/// autogenerate directive replaced by a group of links.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResolvedNode {
    /// Link to an existing content page.
    Link {
        label: String,
        slug: String,
        /// URL of the page (e.g. `"/docs/intro/start/"`).
        href: String,
    },
    /// Section with ordered children. May be empty.
    Group {
        label: String,
        collapsed: bool,
        children: Vec<ResolvedNode>,
    },
}

impl ResolvedNode {
    /// Link to `entry`, labelled with `label` or the entry's navigation label.
    pub(crate) fn link_to(entry: &ContentEntry, label: Option<&str>, base: &str) -> Self {
        Self::Link {
            label: label.unwrap_or_else(|| entry.nav_label()).to_owned(),
            slug: entry.slug.clone(),
            href: page_href(base, &entry.slug),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Link { label, .. } | Self::Group { label, .. } => label,
        }
    }

    /// Slug of a link, `None` for groups.
    #[must_use]
    pub fn slug(&self) -> Option<&str> {
        match self {
            Self::Link { slug, .. } => Some(slug),
            Self::Group { .. } => None,
        }
    }
}

/// Build the URL of a page from the site base and its slug.
///
/// Page URLs carry a trailing slash; the root page is the base itself.
pub(crate) fn page_href(base: &str, slug: &str) -> String {
    if slug.is_empty() {
        format!("{base}/")
    } else {
        format!("{base}/{slug}/")
    }
}
