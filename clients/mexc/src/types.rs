use serde::Deserialize;

use crate::error::ClientError;

/// Envelope shared by every MEXC contract API response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    /// Absent on some endpoints; only an explicit `false` is an error
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub code: i64,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

fn default_success() -> bool {
    true
}

impl<T> ApiResponse<T> {
    /// Unwraps `data`, turning an unsuccessful envelope into [`ClientError::Api`].
    pub fn into_data(self) -> Result<T, ClientError> {
        if !self.success {
            return Err(ClientError::Api {
                code: self.code,
                message: self.message.unwrap_or_default(),
            });
        }
        self.data.ok_or(ClientError::MissingData)
    }
}

/// Open position from the MEXC contract API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub symbol: String,
    /// Average entry price of the held volume
    pub hold_avg_price: f64,
    #[serde(default)]
    pub position_id: Option<i64>,
    /// 1 = long, 2 = short
    #[serde(default)]
    pub position_type: Option<i32>,
    #[serde(default)]
    pub hold_vol: Option<f64>,
    #[serde(default)]
    pub leverage: Option<f64>,
}

impl Position {
    pub fn side(&self) -> &'static str {
        match self.position_type {
            Some(1) => "long",
            Some(2) => "short",
            _ => "unknown",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FairPrice {
    #[serde(default)]
    pub symbol: Option<String>,
    pub fair_price: f64,
    #[serde(default)]
    pub timestamp: Option<i64>,
}
