//! Navigation tree resolution.
//!
//! Walks the declared sidebar depth-first, keeping the declared order:
//! links are checked against the content index, autogenerate directives
//! become groups of generated links and groups are resolved recursively.
//! Groups that end up empty are kept.

use nav_config::{DeclarationNode, NavigationDeclaration};
use nav_content::ContentIndex;
use serde::Serialize;

use crate::expand::{ExpandError, expand};
use crate::node::ResolvedNode;

/// Fatal resolution error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// A declared link points to a page that does not exist.
    #[error("Unknown slug '{slug}' at {field}")]
    UnknownSlug { slug: String, field: String },
}

/// Non-fatal problem found during resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResolveWarning {
    /// Autogenerate directive matched no page; its group is empty.
    EmptyDirectory {
        directory: String,
        label: String,
        field: String,
    },
}

impl std::fmt::Display for ResolveWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDirectory {
                directory,
                label,
                field,
            } => write!(
                f,
                "No content found in directory '{directory}' for group '{label}' at {field}"
            ),
        }
    }
}

/// Resolved tree with the warnings collected while building it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    pub tree: Vec<ResolvedNode>,
    pub warnings: Vec<ResolveWarning>,
}

/// Resolve a navigation declaration against the content index.
///
/// Stops at the first unknown slug; no partial tree is returned.
///
/// # Errors
///
/// Returns [`ResolveError::UnknownSlug`] if a link targets a missing page.
pub fn resolve(
    declaration: &NavigationDeclaration,
    index: &ContentIndex,
) -> Result<Resolution, ResolveError> {
    let mut resolver = Resolver {
        index,
        base: &declaration.base,
        warnings: Vec::new(),
    };
    let tree = resolver.resolve_nodes(&declaration.sidebar, "sidebar")?;
    Ok(Resolution {
        tree,
        warnings: resolver.warnings,
    })
}

struct Resolver<'a> {
    index: &'a ContentIndex,
    base: &'a str,
    warnings: Vec<ResolveWarning>,
}

impl Resolver<'_> {
    fn resolve_nodes(
        &mut self,
        nodes: &[DeclarationNode],
        path: &str,
    ) -> Result<Vec<ResolvedNode>, ResolveError> {
        nodes
            .iter()
            .enumerate()
            .map(|(i, node)| self.resolve_node(node, &format!("{path}[{i}]")))
            .collect()
    }

    fn resolve_node(
        &mut self,
        node: &DeclarationNode,
        field: &str,
    ) -> Result<ResolvedNode, ResolveError> {
        match node {
            DeclarationNode::Link { label, slug } => {
                let entry = self
                    .index
                    .get(slug)
                    .ok_or_else(|| ResolveError::UnknownSlug {
                        slug: slug.clone(),
                        field: format!("{field}.slug"),
                    })?;
                Ok(ResolvedNode::link_to(entry, label.as_deref(), self.base))
            }
            DeclarationNode::Group {
                label,
                collapsed,
                children,
            } => Ok(ResolvedNode::Group {
                label: label.clone(),
                collapsed: *collapsed,
                children: self.resolve_nodes(children, &format!("{field}.items"))?,
            }),
            DeclarationNode::Autogenerate {
                label,
                directory,
                collapsed,
            } => {
                let children = match expand(directory, self.index, self.base) {
                    Ok(links) => links,
                    Err(ExpandError::EmptyDirectory { directory }) => {
                        tracing::warn!(
                            %directory,
                            group = %label,
                            %field,
                            "Autogenerate directory has no content"
                        );
                        self.warnings.push(ResolveWarning::EmptyDirectory {
                            directory,
                            label: label.clone(),
                            field: field.to_owned(),
                        });
                        Vec::new()
                    }
                };
                Ok(ResolvedNode::Group {
                    label: label.clone(),
                    collapsed: *collapsed,
                    children,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nav_content::ContentEntry;
    use pretty_assertions::assert_eq;

    fn declaration(sidebar: Vec<DeclarationNode>) -> NavigationDeclaration {
        NavigationDeclaration {
            title: "Docs".to_owned(),
            base: String::new(),
            logo: None,
            social: Vec::new(),
            sidebar,
        }
    }

    fn link(slug: &str) -> DeclarationNode {
        DeclarationNode::Link {
            label: None,
            slug: slug.to_owned(),
        }
    }

    fn group(label: &str, children: Vec<DeclarationNode>) -> DeclarationNode {
        DeclarationNode::Group {
            label: label.to_owned(),
            collapsed: false,
            children,
        }
    }

    fn autogenerate(label: &str, directory: &str) -> DeclarationNode {
        DeclarationNode::Autogenerate {
            label: label.to_owned(),
            directory: directory.to_owned(),
            collapsed: false,
        }
    }

    fn resolved_link(label: &str, slug: &str) -> ResolvedNode {
        ResolvedNode::Link {
            label: label.to_owned(),
            slug: slug.to_owned(),
            href: format!("/{slug}/"),
        }
    }

    fn resolved_group(label: &str, children: Vec<ResolvedNode>) -> ResolvedNode {
        ResolvedNode::Group {
            label: label.to_owned(),
            collapsed: false,
            children,
        }
    }

    fn index(entries: Vec<ContentEntry>) -> ContentIndex {
        ContentIndex::from_entries(entries).unwrap()
    }

    #[test]
    fn test_resolve_mirrors_declaration_without_autogenerate() {
        let index = index(vec![
            ContentEntry::new("intro/start", "Start"),
            ContentEntry::new("intro/install", "Install"),
            ContentEntry::new("guide", "Guide"),
        ]);
        let decl = declaration(vec![
            group("Intro", vec![link("intro/start"), link("intro/install")]),
            link("guide"),
        ]);

        let resolution = resolve(&decl, &index).unwrap();

        assert_eq!(
            resolution.tree,
            vec![
                resolved_group(
                    "Intro",
                    vec![
                        resolved_link("Start", "intro/start"),
                        resolved_link("Install", "intro/install"),
                    ]
                ),
                resolved_link("Guide", "guide"),
            ]
        );
        assert!(resolution.warnings.is_empty());
    }

    #[test]
    fn test_resolve_declared_label_wins() {
        let index = index(vec![
            ContentEntry::new("intro/start", "Getting Started").with_label("Start"),
        ]);
        let decl = declaration(vec![DeclarationNode::Link {
            label: Some("Begin".to_owned()),
            slug: "intro/start".to_owned(),
        }]);

        let resolution = resolve(&decl, &index).unwrap();

        assert_eq!(resolution.tree, vec![resolved_link("Begin", "intro/start")]);
    }

    #[test]
    fn test_resolve_unknown_slug() {
        let index = index(vec![ContentEntry::new("intro/start", "Start")]);
        let decl = declaration(vec![group(
            "Intro",
            vec![link("intro/start"), link("missing/page")],
        )]);

        let err = resolve(&decl, &index).unwrap_err();

        assert_eq!(
            err,
            ResolveError::UnknownSlug {
                slug: "missing/page".to_owned(),
                field: "sidebar[0].items[1].slug".to_owned(),
            }
        );
        assert_eq!(
            err.to_string(),
            "Unknown slug 'missing/page' at sidebar[0].items[1].slug"
        );
    }

    #[test]
    fn test_resolve_autogenerate_splices_group_in_place() {
        let index = index(vec![
            ContentEntry::new("intro/start", "Start"),
            ContentEntry::new("reference/a", "A"),
            ContentEntry::new("reference/b", "B").with_order(1),
            ContentEntry::new("reference/nested/c", "C"),
            ContentEntry::new("faq", "FAQ"),
        ]);
        let decl = declaration(vec![
            link("intro/start"),
            autogenerate("Ref", "reference"),
            link("faq"),
        ]);

        let resolution = resolve(&decl, &index).unwrap();

        assert_eq!(
            resolution.tree,
            vec![
                resolved_link("Start", "intro/start"),
                resolved_group(
                    "Ref",
                    vec![
                        resolved_link("B", "reference/b"),
                        resolved_link("A", "reference/a"),
                        resolved_link("C", "reference/nested/c"),
                    ]
                ),
                resolved_link("FAQ", "faq"),
            ]
        );
    }

    #[test]
    fn test_resolve_empty_directory_warns_and_keeps_group() {
        let index = index(vec![ContentEntry::new("intro/start", "Start")]);
        let decl = declaration(vec![group(
            "Outer",
            vec![autogenerate("Reference", "reference")],
        )]);

        let resolution = resolve(&decl, &index).unwrap();

        assert_eq!(
            resolution.tree,
            vec![resolved_group(
                "Outer",
                vec![resolved_group("Reference", Vec::new())]
            )]
        );
        assert_eq!(
            resolution.warnings,
            vec![ResolveWarning::EmptyDirectory {
                directory: "reference".to_owned(),
                label: "Reference".to_owned(),
                field: "sidebar[0].items[0]".to_owned(),
            }]
        );
    }

    #[test]
    fn test_resolve_keeps_collapsed_flag_and_base() {
        let index = index(vec![ContentEntry::new("reference/a", "A")]);
        let mut decl = declaration(vec![DeclarationNode::Autogenerate {
            label: "Ref".to_owned(),
            directory: "reference".to_owned(),
            collapsed: true,
        }]);
        decl.base = "/docs".to_owned();

        let resolution = resolve(&decl, &index).unwrap();

        assert_eq!(
            resolution.tree,
            vec![ResolvedNode::Group {
                label: "Ref".to_owned(),
                collapsed: true,
                children: vec![ResolvedNode::Link {
                    label: "A".to_owned(),
                    slug: "reference/a".to_owned(),
                    href: "/docs/reference/a/".to_owned(),
                }],
            }]
        );
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let index = index(vec![
            ContentEntry::new("reference/a", "A"),
            ContentEntry::new("reference/b", "B").with_order(1),
        ]);
        let decl = declaration(vec![autogenerate("Ref", "reference")]);

        let first = resolve(&decl, &index).unwrap();
        let second = resolve(&decl, &index).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_warning_display() {
        let warning = ResolveWarning::EmptyDirectory {
            directory: "reference".to_owned(),
            label: "Ref".to_owned(),
            field: "sidebar[1]".to_owned(),
        };

        assert_eq!(
            warning.to_string(),
            "No content found in directory 'reference' for group 'Ref' at sidebar[1]"
        );
    }
}
