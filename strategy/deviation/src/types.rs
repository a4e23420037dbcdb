//! Shared types for the deviation strategy.

use serde::{Deserialize, Serialize};

/// Which of the two compared prices is the larger one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GreaterPrice {
    FairPrice,
    HoldAvgPrice,
}

/// Deviation of a symbol's fair price from the position's hold average price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deviation {
    /// Futures symbol (e.g., "BTC_USDT")
    pub symbol: String,
    /// Fair (mark) price reported by the venue
    pub fair_price: f64,
    /// Average entry price of the open position
    pub hold_avg_price: f64,
    /// fair_price - hold_avg_price
    pub difference: f64,
    /// difference relative to hold_avg_price, in percent (signed)
    pub percent_difference: f64,
}

impl Deviation {
    /// Returns `None` when the two prices are exactly equal.
    ///
    /// There is no tolerance: any representable difference is reported.
    /// A zero hold average price gives an infinite percentage.
    pub fn compute(symbol: &str, fair_price: f64, hold_avg_price: f64) -> Option<Self> {
        if fair_price == hold_avg_price {
            return None;
        }
        let difference = fair_price - hold_avg_price;
        Some(Self {
            symbol: symbol.to_string(),
            fair_price,
            hold_avg_price,
            difference,
            percent_difference: difference / hold_avg_price * 100.0,
        })
    }

    pub fn greater(&self) -> GreaterPrice {
        if self.difference > 0.0 {
            GreaterPrice::FairPrice
        } else {
            GreaterPrice::HoldAvgPrice
        }
    }

    /// One report line, naming the larger price first.
    pub fn to_message(&self) -> String {
        let magnitude = self.difference.abs();
        let percent = self.percent_difference.abs();
        match self.greater() {
            GreaterPrice::FairPrice => format!(
                "For {}, FairPrice ({:.6}) is greater than HoldAvgPrice ({:.6}) by: {:.6} ({:.2}%)",
                self.symbol, self.fair_price, self.hold_avg_price, magnitude, percent
            ),
            GreaterPrice::HoldAvgPrice => format!(
                "For {}, HoldAvgPrice ({:.6}) is greater than FairPrice ({:.6}) by: {:.6} ({:.2}%)",
                self.symbol, self.hold_avg_price, self.fair_price, magnitude, percent
            ),
        }
    }
}

/// A symbol whose fair price could not be fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolFailure {
    pub symbol: String,
    pub error: String,
}

/// Outcome of one reporting pass
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeviationReport {
    /// Number of open positions returned by the venue
    pub positions: usize,
    /// Deviations in position order; symbols with equal prices are absent
    pub deviations: Vec<Deviation>,
    /// Symbols skipped because the fair price request failed
    pub failures: Vec<SymbolFailure>,
}

impl DeviationReport {
    pub fn lines(&self) -> Vec<String> {
        self.deviations.iter().map(Deviation::to_message).collect()
    }
}
