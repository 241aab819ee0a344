//! Page sequencing.
//!
//! Flattens the resolved tree into reading order and records, for every link,
//! its neighbours and the labels of the groups enclosing it.

use serde::Serialize;

use crate::node::ResolvedNode;

/// Reference to a neighbouring page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageLink {
    pub slug: String,
    pub label: String,
    pub href: String,
}

/// Page in reading order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SequencedPage {
    pub slug: String,
    pub label: String,
    pub href: String,
    /// Previous page, `None` for the first page.
    pub prev: Option<PageLink>,
    /// Next page, `None` for the last page.
    pub next: Option<PageLink>,
    /// Labels of enclosing groups, outermost first.
    pub breadcrumb: Vec<String>,
}

/// Sequence all links of a resolved tree in document order.
///
/// A slug linked from several places appears once per link.
#[must_use]
pub fn sequence(tree: &[ResolvedNode]) -> Vec<SequencedPage> {
    let mut leaves = Vec::new();
    let mut trail = Vec::new();
    collect_leaves(tree, &mut trail, &mut leaves);

    let links: Vec<PageLink> = leaves.iter().map(|(link, _)| link.clone()).collect();
    leaves
        .into_iter()
        .enumerate()
        .map(|(i, (link, breadcrumb))| SequencedPage {
            prev: i.checked_sub(1).map(|p| links[p].clone()),
            next: links.get(i + 1).cloned(),
            slug: link.slug,
            label: link.label,
            href: link.href,
            breadcrumb,
        })
        .collect()
}

fn collect_leaves(
    nodes: &[ResolvedNode],
    trail: &mut Vec<String>,
    leaves: &mut Vec<(PageLink, Vec<String>)>,
) {
    for node in nodes {
        match node {
            ResolvedNode::Link { label, slug, href } => leaves.push((
                PageLink {
                    slug: slug.clone(),
                    label: label.clone(),
                    href: href.clone(),
                },
                trail.clone(),
            )),
            ResolvedNode::Group {
                label, children, ..
            } => {
                trail.push(label.clone());
                collect_leaves(children, trail, leaves);
                trail.pop();
            }
        }
    }
}
