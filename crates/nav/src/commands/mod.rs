//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod check;

use std::path::PathBuf;

use clap::Args;
use nav_config::{CliSettings, Config};
use nav_content::ContentIndex;
use nav_site::Site;

use crate::error::CliError;
use crate::output::Output;

pub(crate) use build::BuildArgs;
pub(crate) use check::CheckArgs;

/// Arguments shared by commands that run the resolution pipeline.
#[derive(Args, Debug, Default)]
pub(crate) struct PipelineArgs {
    /// Path to configuration file (default: auto-discover nav.toml).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Content source directory (overrides config).
    #[arg(short, long)]
    pub source_dir: Option<PathBuf>,

    /// Base URL path (overrides config).
    #[arg(long, env = "NAV_BASE")]
    pub base: Option<String>,

    /// Fail when the build produces warnings.
    #[arg(long)]
    pub strict: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl PipelineArgs {
    /// Load configuration, scan content and resolve the site navigation.
    ///
    /// Warnings are printed; with `--strict` they fail the run.
    pub(crate) fn resolve_site(&self, output: &Output) -> Result<Site, CliError> {
        let cli_settings = CliSettings {
            source_dir: self.source_dir.clone(),
            base: self.base.clone(),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            tracing::info!(path = %path.display(), "Using configuration");
        }

        let declaration = config.navigation()?;
        let source_dir = &config.content_resolved.source_dir;
        let index = ContentIndex::scan(source_dir)?;
        tracing::info!(source_dir = %source_dir.display(), pages = index.len(), "Scanned content");

        let site = Site::build(&declaration, &index)?;
        output.warnings(site.warnings());
        if self.strict && !site.warnings().is_empty() {
            return Err(CliError::Strict(site.warnings().len()));
        }
        Ok(site)
    }
}
