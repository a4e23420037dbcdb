//! Position deviation strategy crate.
//!
//! Compares the fair price of every open futures position with the
//! position's hold average price and reports the deviation.

pub mod config;
mod reporter;
mod types;

pub use config::DeviationReporterConfig;
pub use reporter::{ContractApi, DeviationReporter};
pub use types::{Deviation, DeviationReport, GreaterPrice, SymbolFailure};
