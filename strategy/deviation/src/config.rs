//! Configuration types for the deviation reporter.

use serde::{Deserialize, Serialize};

pub const FAIR_PRICE_CONCURRENCY_ENV: &str = "MEXC_FAIR_PRICE_CONCURRENCY";

/// Configuration for DeviationReporter (parameters only; the client is passed to `DeviationReporter::new`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviationReporterConfig {
    /// Number of fair price requests in flight at once; 1 means strictly sequential
    pub concurrency: usize,
}

impl Default for DeviationReporterConfig {
    fn default() -> Self {
        Self { concurrency: 1 }
    }
}
