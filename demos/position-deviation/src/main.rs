//! Position deviation example: compare the fair price of every open MEXC futures
//! position with its hold average price and print the deviation.
//!
//! Usage: position-deviation
//!
//! Credentials come from MEXC_ACCESS_KEY and MEXC_SECRET_KEY (a `.env` file is read too).
//! MEXC_FAIR_PRICE_CONCURRENCY (default 1) bounds the fair price requests in flight.

use std::sync::Arc;

use anyhow::{Context, Result};
use clients_mexc::{MexcContractClient, MexcContractClientConfig};
use deviation::{config::FAIR_PRICE_CONCURRENCY_ENV, DeviationReporter, DeviationReporterConfig};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv = utils::load_dotenv();
    utils::init_tracing();
    match dotenv {
        Ok(Some(path)) => info!(path = %path.display(), "loaded .env"),
        Ok(None) => {}
        Err(e) => warn!("{:#}", e),
    }

    let config = MexcContractClientConfig::from_env().context("failed to load MEXC config")?;
    let client = Arc::new(reqwest::Client::builder().build()?);
    let mexc = MexcContractClient::new(client, config);

    let mut reporter_config = DeviationReporterConfig::default();
    if let Some(concurrency) = utils::env_parse::<usize>(FAIR_PRICE_CONCURRENCY_ENV)? {
        reporter_config.concurrency = concurrency;
    }
    let reporter = DeviationReporter::new(reporter_config, mexc);

    let report = reporter
        .run_with(|deviation| println!("{}", deviation.to_message()))
        .await?;

    info!(
        positions = report.positions,
        deviations = report.deviations.len(),
        failures = report.failures.len(),
        "done"
    );
    Ok(())
}
