//! End-to-end batch run: roster → fetch → normalize → join → write.
//!
//! Strictly sequential with no resumability. A failure at any stage aborts
//! the run before the report file is touched; a re-run starts the fetch
//! from scratch.

use crate::config::ReportConfig;
use crate::error::Result;
use crate::fetch::{self, AwardPageSource, ReporterClient};
use crate::join;
use crate::report;
use crate::roster;
use tracing::info;

/// Run the pipeline against the real agency endpoint.
pub async fn run(config: &ReportConfig) -> Result<()> {
    let client = ReporterClient::new(config.api_base_url.clone())?;
    run_with_source(config, &client).await
}

/// Pipeline body with the award source injected, so tests can run it without
/// a network.
pub async fn run_with_source<S>(config: &ReportConfig, source: &S) -> Result<()>
where
    S: AwardPageSource + Sync + ?Sized,
{
    info!("Starting award report run");

    let legislators = roster::load_roster(&config.roster_path)?;
    info!(
        "Loaded {} legislators from {}",
        legislators.len(),
        config.roster_path.display()
    );

    let query = fetch::build_query(config);
    let awards = fetch::fetch_all(source, &query, config.page_size).await?;

    let outcome = join::join_awards(
        &legislators,
        awards,
        &config.at_large_states,
        &config.excluded_legislators,
    );
    info!(
        "Joined {} rows ({} awards dropped for missing districts)",
        outcome.rows.len(),
        outcome.dropped_awards
    );

    report::write_report_file(&config.output_path, &outcome.rows)?;
    info!("Report written to {}", config.output_path.display());

    Ok(())
}
