//! `nav check` command implementation.

use clap::Args;

use super::PipelineArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    pub pipeline: PipelineArgs,
}

impl CheckArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let site = self.pipeline.resolve_site(&output)?;

        output.heading(site.title());
        if !site.base().is_empty() {
            output.field("Base", site.base());
        }
        output.field("Pages", &site.pages().len().to_string());
        output.field("Groups", &site.group_count().to_string());
        output.field("Warnings", &site.warnings().len().to_string());
        output.success("Navigation is valid");
        Ok(())
    }
}
