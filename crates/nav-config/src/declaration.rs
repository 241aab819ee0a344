//! Validated navigation declaration.
//!
//! These types are produced by [`RawNavigation::validate`](crate::RawNavigation::validate)
//! and are guaranteed to be structurally sound: the title is non-empty, social
//! platforms are unique, groups are non-empty and the logo has a complete shape.
//! Slug existence is not checked here.

use serde::Serialize;

/// Root of the validated site navigation configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavigationDeclaration {
    /// Site title.
    pub title: String,
    /// Base URL path (e.g. `"/docs"`), empty when the site is served from `/`.
    pub base: String,
    /// Site logo.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<Logo>,
    /// Social links in declaration order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub social: Vec<SocialLink>,
    /// Top-level sidebar nodes.
    pub sidebar: Vec<DeclarationNode>,
}

/// Site logo reference.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Logo {
    /// Image path(s).
    pub source: LogoSource,
    /// Alternative text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    /// Whether the logo replaces the site title in the header.
    pub replaces_title: bool,
}

/// Logo image: one path, or one path per color scheme.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LogoSource {
    Single { src: String },
    Themed { light: String, dark: String },
}

/// Link to a social platform.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    /// Platform name (e.g. `"github"`).
    pub platform: String,
    /// Absolute http(s) URL.
    pub url: String,
}

/// Sidebar declaration node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DeclarationNode {
    /// Leaf pointing to a single content page.
    ///
    /// Without a label the page's own sidebar label or title is used.
    Link {
        #[serde(skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        slug: String,
    },
    /// Nested section with ordered children.
    Group {
        label: String,
        collapsed: bool,
        children: Vec<DeclarationNode>,
    },
    /// Placeholder expanded into one link per page under `directory`.
    Autogenerate {
        label: String,
        directory: String,
        collapsed: bool,
    },
}

impl DeclarationNode {
    /// Display label as declared, if any.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Link { label, .. } => label.as_deref(),
            Self::Group { label, .. } | Self::Autogenerate { label, .. } => Some(label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_returns_declared_label() {
        let link = DeclarationNode::Link {
            label: None,
            slug: "a".to_owned(),
        };
        let group = DeclarationNode::Group {
            label: "G".to_owned(),
            collapsed: false,
            children: Vec::new(),
        };

        assert_eq!(link.label(), None);
        assert_eq!(group.label(), Some("G"));
    }

    #[test]
    fn test_declaration_node_serializes_with_type_tag() {
        let node = DeclarationNode::Autogenerate {
            label: "Reference".to_owned(),
            directory: "reference".to_owned(),
            collapsed: false,
        };

        let json = serde_json::to_value(&node).unwrap();

        assert_eq!(json["type"], "autogenerate");
        assert_eq!(json["directory"], "reference");
    }
}
