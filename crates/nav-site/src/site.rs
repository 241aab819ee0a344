//! Resolved site navigation.
//!
//! [`Site`] bundles the output of one build: the resolved sidebar, the pages
//! in reading order and the warnings collected along the way. It serializes
//! to the JSON document consumed by the page renderer.

use nav_config::{Logo, NavigationDeclaration, SocialLink};
use nav_content::{ContentIndex, normalize_slug};
use serde::Serialize;

use crate::node::ResolvedNode;
use crate::resolve::{ResolveError, ResolveWarning, resolve};
use crate::sequence::{SequencedPage, sequence};

/// Navigation of a whole site.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Site {
    title: String,
    base: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    logo: Option<Logo>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    social: Vec<SocialLink>,
    sidebar: Vec<ResolvedNode>,
    pages: Vec<SequencedPage>,
    warnings: Vec<ResolveWarning>,
}

impl Site {
    /// Resolve and sequence a declaration against the content index.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::UnknownSlug`] if a declared link targets a
    /// missing page.
    pub fn build(
        declaration: &NavigationDeclaration,
        index: &ContentIndex,
    ) -> Result<Self, ResolveError> {
        let resolution = resolve(declaration, index)?;
        let pages = sequence(&resolution.tree);
        tracing::info!(
            pages = pages.len(),
            warnings = resolution.warnings.len(),
            "Resolved navigation"
        );

        Ok(Self {
            title: declaration.title.clone(),
            base: declaration.base.clone(),
            logo: declaration.logo.clone(),
            social: declaration.social.clone(),
            sidebar: resolution.tree,
            pages,
            warnings: resolution.warnings,
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    #[must_use]
    pub fn logo(&self) -> Option<&Logo> {
        self.logo.as_ref()
    }

    #[must_use]
    pub fn social(&self) -> &[SocialLink] {
        &self.social
    }

    /// Resolved sidebar tree.
    #[must_use]
    pub fn tree(&self) -> &[ResolvedNode] {
        &self.sidebar
    }

    /// Linked pages in reading order.
    #[must_use]
    pub fn pages(&self) -> &[SequencedPage] {
        &self.pages
    }

    /// Sequenced page for a slug.
    ///
    /// When the slug is linked more than once, the first occurrence wins.
    #[must_use]
    pub fn page(&self, slug: &str) -> Option<&SequencedPage> {
        let slug = normalize_slug(slug);
        self.pages.iter().find(|page| page.slug == slug)
    }

    #[must_use]
    pub fn warnings(&self) -> &[ResolveWarning] {
        &self.warnings
    }

    /// Number of groups in the sidebar, nested ones included.
    #[must_use]
    pub fn group_count(&self) -> usize {
        fn count(nodes: &[ResolvedNode]) -> usize {
            nodes
                .iter()
                .map(|node| match node {
                    ResolvedNode::Link { .. } => 0,
                    ResolvedNode::Group { children, .. } => 1 + count(children),
                })
                .sum()
        }
        count(&self.sidebar)
    }
}
