//! Position deviation reporter
//!
//! Fetches the account's open positions once, then the fair price of every
//! position's symbol, and reports how far the two prices are apart.

use std::pin::pin;

use anyhow::{Context, Result};
use futures_util::stream::{self, StreamExt};
use tracing::{debug, info, warn};

use mexc::{ClientError, MexcContractClient, Position};

use crate::config::DeviationReporterConfig;
use crate::types::{Deviation, DeviationReport, SymbolFailure};

/// The two venue calls the reporter depends on.
#[allow(async_fn_in_trait)]
pub trait ContractApi {
    async fn open_positions(&self) -> Result<Vec<Position>, ClientError>;
    async fn fair_price(&self, symbol: &str) -> Result<f64, ClientError>;
}

impl ContractApi for MexcContractClient {
    async fn open_positions(&self) -> Result<Vec<Position>, ClientError> {
        MexcContractClient::open_positions(self).await
    }

    async fn fair_price(&self, symbol: &str) -> Result<f64, ClientError> {
        MexcContractClient::fair_price(self, symbol).await
    }
}

/// Position deviation reporter
pub struct DeviationReporter<C> {
    client: C,
    config: DeviationReporterConfig,
}

impl<C: ContractApi> DeviationReporter<C> {
    pub fn new(config: DeviationReporterConfig, client: C) -> Self {
        Self { client, config }
    }

    /// Runs one pass and returns the collected report.
    pub async fn run(&self) -> Result<DeviationReport> {
        self.run_with(|_| {}).await
    }

    /// Runs one pass, calling `on_deviation` as soon as each deviation is known.
    ///
    /// A failure to fetch the open positions aborts the pass before any fair
    /// price is requested. A failed fair price request only skips its own
    /// symbol; it is logged and recorded in [`DeviationReport::failures`].
    ///
    /// Fair prices are requested `config.concurrency` at a time, and results
    /// are always handled in position order.
    pub async fn run_with<F>(&self, mut on_deviation: F) -> Result<DeviationReport>
    where
        F: FnMut(&Deviation),
    {
        let positions = self
            .client
            .open_positions()
            .await
            .context("failed to fetch open positions")?;
        info!(count = positions.len(), "fetched open positions");

        let mut report = DeviationReport {
            positions: positions.len(),
            ..Default::default()
        };

        let mut fair_prices = pin!(stream::iter(positions)
            .map(move |position| async move {
                let fair_price = self.client.fair_price(&position.symbol).await;
                (position, fair_price)
            })
            .buffered(self.config.concurrency.max(1)));

        while let Some((position, fair_price)) = fair_prices.next().await {
            let fair_price = match fair_price {
                Ok(price) => price,
                Err(e) => {
                    warn!(symbol = %position.symbol, error = %e, "failed to fetch fair price");
                    report.failures.push(SymbolFailure {
                        symbol: position.symbol,
                        error: e.to_string(),
                    });
                    continue;
                }
            };

            match Deviation::compute(&position.symbol, fair_price, position.hold_avg_price) {
                Some(deviation) => {
                    on_deviation(&deviation);
                    report.deviations.push(deviation);
                }
                None => debug!(symbol = %position.symbol, fair_price, "fair price equals hold average price"),
            }
        }

        Ok(report)
    }
}
