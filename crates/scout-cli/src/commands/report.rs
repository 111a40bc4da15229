//! `scout report` - run the pipeline and emit the artifact as JSON.

use std::path::Path;

use anyhow::Context;
use scout_config::ScoutConfig;
use scout_core::entities::{BusinessProfile, OpportunitiesProfile, Report, ReportRequest};
use scout_core::enums::Mode;
use scout_providers::{DemoProvider, ProviderClient};
use scout_report::ConversionRateTable;

use crate::cli::ReportArgs;

pub async fn handle(args: ReportArgs) -> anyhow::Result<()> {
    let config = ScoutConfig::load_with_dotenv().context("failed to load configuration")?;

    let business: Option<BusinessProfile> = args
        .business_profile
        .as_deref()
        .map(load_json)
        .transpose()
        .context("failed to load business profile")?;
    let opportunities: Option<OpportunitiesProfile> = args
        .opportunities_profile
        .as_deref()
        .map(load_json)
        .transpose()
        .context("failed to load opportunities profile")?;

    let request = ReportRequest {
        query: args.query.clone(),
        opportunity_types: args.parsed_types()?,
        limit: args.limit,
        mode: args.parsed_mode()?,
    };

    // Provider selection mirrors scope resolution: an explicit request mode
    // wins, then the configured default.
    let mode = request.mode.unwrap_or(config.general.default_mode);
    let rates = ConversionRateTable::standard();

    let report = match mode {
        Mode::Demo => {
            let demo = DemoProvider::new();
            scout_report::run_report(
                &request,
                &args.company_id,
                business.as_ref(),
                opportunities.as_ref(),
                &config.general,
                rates,
                &demo,
                &demo,
            )
            .await
        }
        Mode::Live => {
            let client = ProviderClient::new(config.search.clone(), config.weather.clone());
            scout_report::run_report(
                &request,
                &args.company_id,
                business.as_ref(),
                opportunities.as_ref(),
                &config.general,
                rates,
                &client,
                &client,
            )
            .await
        }
    };

    emit(&report, args.output.as_deref())
}

fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid JSON in {}", path.display()))
}

fn emit(report: &Report, output: Option<&Path>) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report).context("failed to serialize report")?;
    match output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "report written");
        }
        None => println!("{json}"),
    }
    Ok(())
}
