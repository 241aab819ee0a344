//! `nav build` command implementation.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Args;
use nav_site::Site;

use super::PipelineArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    #[command(flatten)]
    pub pipeline: PipelineArgs,

    /// Write the site JSON to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let site = self.pipeline.resolve_site(&output)?;

        if let Some(path) = &self.output {
            write_site(&site, path)?;
            output.success(&format!(
                "Navigation for {} pages written to {}",
                site.pages().len(),
                path.display()
            ));
        } else {
            let mut stdout = std::io::stdout().lock();
            serde_json::to_writer_pretty(&mut stdout, &site)?;
            stdout.write_all(b"\n")?;
        }
        Ok(())
    }
}

/// Serialize the site as pretty JSON into `path`, creating parent directories.
fn write_site(site: &Site, path: &Path) -> Result<(), CliError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let mut json = serde_json::to_string_pretty(site)?;
    json.push('\n');
    std::fs::write(path, json)?;
    Ok(())
}
