//! Configuration management for the navigation resolver.
//!
//! Parses `nav.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories. The same file
//! carries the site navigation (title, logo, social links, sidebar) and the
//! build settings (`[content]` section).
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Navigation validation
//!
//! The navigation part is kept raw ([`RawNavigation`]) until
//! [`Config::navigation`] validates it into a [`NavigationDeclaration`].
//! Validation is purely structural; slugs are checked later against the
//! content index.
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `base`
//! - `social.*` URLs
//! - `content.source_dir`

mod declaration;
mod expand;
mod validate;

use serde::Deserialize;
use std::path::{Path, PathBuf};

pub use declaration::{DeclarationNode, Logo, LogoSource, NavigationDeclaration, SocialLink};
pub use validate::{
    RawAutogenerate, RawLogo, RawLogoTable, RawNavigation, RawSidebarEntry, RawSidebarItem,
    RawSocial, RawSocialLink, RawSocialTable, ValidationError,
};

use expand::{expand_navigation, expand_optional};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override content source directory.
    pub source_dir: Option<PathBuf>,
    /// Override base URL.
    pub base: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "nav.toml";

/// Default content directory, relative to the config file.
const DEFAULT_SOURCE_DIR: &str = "src/content/docs";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site navigation as written in the file.
    #[serde(flatten)]
    pub navigation: RawNavigation,
    /// Content configuration (paths are relative strings from TOML).
    content: ContentConfigRaw,

    /// Resolved content configuration (set after loading).
    #[serde(skip)]
    pub content_resolved: ContentConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Raw content configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ContentConfigRaw {
    source_dir: Option<String>,
}

/// Resolved content configuration with absolute paths.
#[derive(Debug, Default)]
pub struct ContentConfig {
    /// Root directory of the content tree.
    pub source_dir: PathBuf,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    /// Navigation validation error.
    #[error("Configuration error: {0}")]
    Validation(#[from] ValidationError),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`social.github`").
        field: String,
        /// Error message (e.g., "${`DOCS_REPO`} not set").
        message: String,
    },
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file (`.json` files are
    /// parsed as JSON, anything else as TOML). Otherwise, searches for
    /// `nav.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails or
    /// an environment variable reference cannot be expanded.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Parse configuration from a TOML string.
    ///
    /// Paths are resolved relative to `base_dir`.
    ///
    /// # Errors
    ///
    /// Returns error if the TOML is malformed or expansion fails.
    pub fn from_toml_str(content: &str, base_dir: &Path) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;
        config.expand_env_vars()?;
        config.resolve_paths(base_dir);
        Ok(config)
    }

    /// Validate the navigation part of the configuration.
    ///
    /// # Errors
    ///
    /// Returns the first structural [`ValidationError`].
    pub fn navigation(&self) -> Result<NavigationDeclaration, ValidationError> {
        self.navigation.validate()
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.content_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(base) = &settings.base {
            self.navigation.base = Some(base.clone());
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            content_resolved: ContentConfig {
                source_dir: base.join(DEFAULT_SOURCE_DIR),
            },
            ..Self::default()
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = if path.extension().is_some_and(|e| e == "json") {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content)?
        };

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        tracing::debug!(path = %path.display(), "Loaded configuration");

        Ok(config)
    }

    /// Expand `${VAR}` references in string fields.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        expand_navigation(&mut self.navigation)?;
        expand_optional(&mut self.content.source_dir, "content.source_dir")
    }

    /// Resolve relative paths against the config file directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let source_dir = self
            .content
            .source_dir
            .as_deref()
            .unwrap_or(DEFAULT_SOURCE_DIR);
        self.content_resolved = ContentConfig {
            source_dir: config_dir.join(source_dir),
        };
    }
}

impl RawNavigation {
    /// Deserialize raw navigation from an untyped JSON value.
    ///
    /// # Errors
    ///
    /// Returns error if the value doesn't have the shape of a navigation
    /// config (e.g. `title` is a number).
    pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        Ok(serde_json::from_value(value)?)
    }
}
