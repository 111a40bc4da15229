//! `scout schema` - print the JSON schema of an artifact type.

use anyhow::Context;
use schemars::schema_for;
use scout_core::entities::{OpportunityCard, Report, Scope};

use crate::cli::SchemaArgs;

pub fn handle(args: &SchemaArgs) -> anyhow::Result<()> {
    let schema = match args.artifact.as_str() {
        "report" => schema_for!(Report),
        "card" => schema_for!(OpportunityCard),
        "scope" => schema_for!(Scope),
        other => anyhow::bail!("unknown artifact '{other}' (expected report, card, or scope)"),
    };
    let json = serde_json::to_string_pretty(&schema).context("failed to serialize schema")?;
    println!("{json}");
    Ok(())
}
