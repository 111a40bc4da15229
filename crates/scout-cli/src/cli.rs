use std::path::PathBuf;

use clap::{Parser, Subcommand};
use scout_core::enums::{Mode, OpportunityType};
use scout_core::errors::CoreError;

/// Top-level CLI parser for the `scout` binary.
#[derive(Debug, Parser)]
#[command(name = "scout", version, about = "Scout - opportunity reports for small businesses")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate an opportunity report
    Report(ReportArgs),
    /// Print the JSON schema of an artifact type
    Schema(SchemaArgs),
    /// Print the resolved configuration
    Config,
}

#[derive(Debug, clap::Args)]
pub struct ReportArgs {
    /// Free-text search query
    #[arg(short = 'Q', long, default_value = "business opportunities")]
    pub query: String,

    /// Company identifier recorded in the report scope
    #[arg(short, long, default_value = "default")]
    pub company_id: String,

    /// Opportunity types to search (overrides profile preferences)
    #[arg(short, long, value_delimiter = ',')]
    pub types: Vec<String>,

    /// Cap on the total number of cards in the report
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Run mode: demo or live (defaults to the configured mode)
    #[arg(short, long)]
    pub mode: Option<String>,

    /// Path to a business profile JSON file
    #[arg(long)]
    pub business_profile: Option<PathBuf>,

    /// Path to an opportunity preferences JSON file
    #[arg(long)]
    pub opportunities_profile: Option<PathBuf>,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl ReportArgs {
    /// Parse the `--types` strings against the closed enum.
    pub fn parsed_types(&self) -> anyhow::Result<Option<Vec<OpportunityType>>> {
        if self.types.is_empty() {
            return Ok(None);
        }
        let mut types = Vec::with_capacity(self.types.len());
        for raw in &self.types {
            let ty = OpportunityType::parse(raw).ok_or_else(|| CoreError::UnknownVariant {
                kind: "opportunity type",
                value: raw.clone(),
            })?;
            types.push(ty);
        }
        Ok(Some(types))
    }

    pub fn parsed_mode(&self) -> anyhow::Result<Option<Mode>> {
        match self.mode.as_deref() {
            None => Ok(None),
            Some("demo") => Ok(Some(Mode::Demo)),
            Some("live") => Ok(Some(Mode::Live)),
            Some(other) => Err(CoreError::UnknownVariant {
                kind: "mode",
                value: other.to_string(),
            }
            .into()),
        }
    }
}

#[derive(Debug, clap::Args)]
pub struct SchemaArgs {
    /// Artifact type: report, card, scope
    #[arg(default_value = "report")]
    pub artifact: String,
}
