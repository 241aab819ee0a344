//! Raw navigation input and structural validation.
//!
//! [`RawNavigation`] mirrors the shape accepted in `nav.toml` (or JSON) with
//! every field optional, so that deserialization never fails on a missing
//! field. [`RawNavigation::validate`] then turns it into a
//! [`NavigationDeclaration`], reporting the first structural problem with a
//! field path like `sidebar[1].items[0].label`.

use std::collections::HashSet;
use std::fmt;

use nav_content::normalize_slug;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::declaration::{DeclarationNode, Logo, LogoSource, NavigationDeclaration, SocialLink};

/// Structural validation error.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Required field absent or empty.
    #[error("Missing required field: {field}")]
    MissingRequiredField {
        /// Field path (e.g. `title`, `sidebar[0].label`).
        field: String,
    },
    /// Two social links for the same platform.
    #[error("Duplicate social link for platform \"{key}\"")]
    DuplicateSocialKey {
        /// Normalized platform name.
        key: String,
    },
    /// Group declared without items.
    #[error("Group \"{label}\" at {field} has no items")]
    EmptyGroup {
        /// Field path of the group.
        field: String,
        /// Group label.
        label: String,
    },
    /// Logo is neither a single path nor a complete light/dark pair.
    #[error("Invalid logo: {reason}")]
    InvalidLogoShape {
        /// What is wrong with the logo.
        reason: String,
    },
    /// Sidebar item is not exactly one of link, group or autogenerate.
    #[error("Invalid sidebar item at {field}: {reason}")]
    InvalidItem {
        /// Field path of the item.
        field: String,
        /// What is wrong with the item.
        reason: String,
    },
    /// URL with an unsupported shape.
    #[error("Invalid URL in {field}: \"{url}\"")]
    InvalidUrl {
        /// Field path.
        field: String,
        /// Offending value.
        url: String,
    },
}

/// Raw navigation configuration as parsed from TOML or JSON.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawNavigation {
    pub title: Option<String>,
    pub base: Option<String>,
    pub logo: Option<RawLogo>,
    pub social: Option<RawSocial>,
    pub sidebar: Vec<RawSidebarItem>,
}

/// Raw logo: a bare path or a table.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawLogo {
    Path(String),
    Table(RawLogoTable),
}

/// Raw logo table (`src`, or `light` + `dark`).
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawLogoTable {
    pub src: Option<String>,
    pub light: Option<String>,
    pub dark: Option<String>,
    pub alt: Option<String>,
    #[serde(alias = "replacesTitle")]
    pub replaces_title: Option<bool>,
}

/// Raw social links: a `platform = url` table or a list of entries.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawSocial {
    Map(RawSocialTable),
    List(Vec<RawSocialLink>),
}

/// Table form of social links as `(platform, url)` pairs in input order.
///
/// Repeated platforms are kept (a JSON object may repeat a key) so that
/// validation can report them instead of keeping the last one.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RawSocialTable(pub Vec<(String, String)>);

impl<'de> Deserialize<'de> for RawSocialTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PairsVisitor;

        impl<'de> Visitor<'de> for PairsVisitor {
            type Value = RawSocialTable;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a table of `platform = url` pairs")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut pairs = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(pair) = access.next_entry::<String, String>()? {
                    pairs.push(pair);
                }
                Ok(RawSocialTable(pairs))
            }
        }

        deserializer.deserialize_map(PairsVisitor)
    }
}

/// One entry of the list form of social links.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawSocialLink {
    #[serde(alias = "icon")]
    pub platform: Option<String>,
    #[serde(alias = "href")]
    pub url: Option<String>,
}

/// Raw sidebar item: a bare slug or a table.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawSidebarItem {
    Slug(String),
    Entry(RawSidebarEntry),
}

/// Raw sidebar table. Exactly one of `slug`, `items`, `autogenerate` must be set.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawSidebarEntry {
    pub label: Option<String>,
    pub slug: Option<String>,
    pub items: Option<Vec<RawSidebarItem>>,
    pub autogenerate: Option<RawAutogenerate>,
    pub collapsed: Option<bool>,
}

/// Raw autogenerate directive.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawAutogenerate {
    pub directory: Option<String>,
    pub collapsed: Option<bool>,
}

impl RawNavigation {
    /// Validate into a typed [`NavigationDeclaration`].
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found, checking title, base,
    /// logo, social links and sidebar in that order.
    pub fn validate(&self) -> Result<NavigationDeclaration, ValidationError> {
        let title = required_text(self.title.as_deref(), "title")?;
        let base = normalize_base(self.base.as_deref())?;
        let logo = self.logo.as_ref().map(validate_logo).transpose()?;
        let social = self
            .social
            .as_ref()
            .map(validate_social)
            .transpose()?
            .unwrap_or_default();
        let sidebar = self
            .sidebar
            .iter()
            .enumerate()
            .map(|(i, item)| validate_item(item, &format!("sidebar[{i}]")))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(NavigationDeclaration {
            title,
            base,
            logo,
            social,
            sidebar,
        })
    }
}

/// Require a trimmed, non-empty string.
fn required_text(value: Option<&str>, field: &str) -> Result<String, ValidationError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_owned()),
        _ => Err(ValidationError::MissingRequiredField {
            field: field.to_owned(),
        }),
    }
}

/// Treat empty or whitespace-only strings as absent.
fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Normalize the base URL to `"/path"` form (empty for root).
///
/// Absolute http(s) URLs are accepted and kept without a trailing slash.
fn normalize_base(base: Option<&str>) -> Result<String, ValidationError> {
    let Some(base) = base.map(str::trim).filter(|b| !b.is_empty()) else {
        return Ok(String::new());
    };
    if is_http_url(base) {
        return Ok(base.trim_end_matches('/').to_owned());
    }
    if !base.starts_with('/') {
        return Err(ValidationError::InvalidUrl {
            field: "base".to_owned(),
            url: base.to_owned(),
        });
    }
    let trimmed = base.trim_matches('/');
    if trimmed.is_empty() {
        Ok(String::new())
    } else {
        Ok(format!("/{trimmed}"))
    }
}

fn validate_logo(raw: &RawLogo) -> Result<Logo, ValidationError> {
    let table = match raw {
        RawLogo::Path(path) => {
            let src = optional_text(Some(path.as_str())).ok_or_else(|| {
                ValidationError::InvalidLogoShape {
                    reason: "logo path is empty".to_owned(),
                }
            })?;
            return Ok(Logo {
                source: LogoSource::Single { src },
                alt: None,
                replaces_title: false,
            });
        }
        RawLogo::Table(table) => table,
    };

    let src = optional_text(table.src.as_deref());
    let light = optional_text(table.light.as_deref());
    let dark = optional_text(table.dark.as_deref());

    let source = match (src, light, dark) {
        (Some(src), None, None) => LogoSource::Single { src },
        (None, Some(light), Some(dark)) => LogoSource::Themed { light, dark },
        (Some(_), _, _) => {
            return Err(ValidationError::InvalidLogoShape {
                reason: "`src` cannot be combined with `light`/`dark`".to_owned(),
            });
        }
        (None, Some(_), None) => {
            return Err(ValidationError::InvalidLogoShape {
                reason: "`light` is set but `dark` is missing".to_owned(),
            });
        }
        (None, None, Some(_)) => {
            return Err(ValidationError::InvalidLogoShape {
                reason: "`dark` is set but `light` is missing".to_owned(),
            });
        }
        (None, None, None) => {
            return Err(ValidationError::InvalidLogoShape {
                reason: "expected `src` or a `light`/`dark` pair".to_owned(),
            });
        }
    };

    Ok(Logo {
        source,
        alt: optional_text(table.alt.as_deref()),
        replaces_title: table.replaces_title.unwrap_or(false),
    })
}

/// Validate social links.
///
/// The table form is ordered by platform; the list form keeps its order.
fn validate_social(raw: &RawSocial) -> Result<Vec<SocialLink>, ValidationError> {
    let pairs: Vec<(String, Option<&str>, String)> = match raw {
        RawSocial::Map(table) => {
            let mut sorted: Vec<&(String, String)> = table.0.iter().collect();
            sorted.sort_by(|a, b| a.0.cmp(&b.0));
            sorted
                .into_iter()
                .map(|(platform, url)| {
                    (
                        platform.clone(),
                        Some(url.as_str()),
                        format!("social.{platform}"),
                    )
                })
                .collect()
        }
        RawSocial::List(list) => list
            .iter()
            .enumerate()
            .map(|(i, link)| {
                let field = format!("social[{i}]");
                let platform =
                    required_text(link.platform.as_deref(), &format!("{field}.platform"))?;
                Ok((platform, link.url.as_deref(), format!("{field}.url")))
            })
            .collect::<Result<_, ValidationError>>()?,
    };

    let mut seen = HashSet::new();
    let mut links = Vec::with_capacity(pairs.len());
    for (platform, url, url_field) in pairs {
        let key = platform.trim().to_lowercase();
        if key.is_empty() {
            return Err(ValidationError::MissingRequiredField { field: url_field });
        }
        if !seen.insert(key.clone()) {
            return Err(ValidationError::DuplicateSocialKey { key });
        }
        let url = required_text(url, &url_field)?;
        if !is_http_url(&url) {
            return Err(ValidationError::InvalidUrl {
                field: url_field,
                url,
            });
        }
        links.push(SocialLink {
            platform: platform.trim().to_owned(),
            url,
        });
    }
    Ok(links)
}

fn validate_item(item: &RawSidebarItem, field: &str) -> Result<DeclarationNode, ValidationError> {
    let entry = match item {
        RawSidebarItem::Slug(slug) => {
            return Ok(DeclarationNode::Link {
                label: None,
                slug: validate_slug(slug, field)?,
            });
        }
        RawSidebarItem::Entry(entry) => entry,
    };

    match (&entry.slug, &entry.items, &entry.autogenerate) {
        (Some(slug), None, None) => Ok(DeclarationNode::Link {
            label: optional_text(entry.label.as_deref()),
            slug: validate_slug(slug, &format!("{field}.slug"))?,
        }),
        (None, Some(items), None) => {
            let label = required_text(entry.label.as_deref(), &format!("{field}.label"))?;
            if items.is_empty() {
                return Err(ValidationError::EmptyGroup {
                    field: field.to_owned(),
                    label,
                });
            }
            let children = items
                .iter()
                .enumerate()
                .map(|(i, child)| validate_item(child, &format!("{field}.items[{i}]")))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(DeclarationNode::Group {
                label,
                collapsed: entry.collapsed.unwrap_or(false),
                children,
            })
        }
        (None, None, Some(auto)) => {
            let label = required_text(entry.label.as_deref(), &format!("{field}.label"))?;
            let directory = auto
                .directory
                .as_deref()
                .filter(|d| !d.trim().is_empty())
                .map(normalize_slug)
                .ok_or_else(|| ValidationError::MissingRequiredField {
                    field: format!("{field}.autogenerate.directory"),
                })?;
            Ok(DeclarationNode::Autogenerate {
                label,
                directory,
                collapsed: auto.collapsed.or(entry.collapsed).unwrap_or(false),
            })
        }
        (None, None, None) => Err(ValidationError::InvalidItem {
            field: field.to_owned(),
            reason: "expected one of `slug`, `items` or `autogenerate`".to_owned(),
        }),
        _ => Err(ValidationError::InvalidItem {
            field: field.to_owned(),
            reason: "`slug`, `items` and `autogenerate` are mutually exclusive".to_owned(),
        }),
    }
}

/// Validate and normalize a link slug. The root page is written `/` or `index`.
fn validate_slug(slug: &str, field: &str) -> Result<String, ValidationError> {
    if slug.trim().is_empty() {
        return Err(ValidationError::MissingRequiredField {
            field: field.to_owned(),
        });
    }
    Ok(normalize_slug(slug))
}
