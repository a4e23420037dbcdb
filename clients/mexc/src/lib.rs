mod config;
mod contract;
mod error;
mod types;
mod utils;

pub use config::{
    ACCESS_KEY_ENV, BASE_URL_ENV, DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT, REQUEST_TIMEOUT_ENV,
    SECRET_KEY_ENV,
};
pub use contract::{MexcContractClient, MexcContractClientConfig};
pub use error::{ClientError, ConfigError};
pub use types::{ApiResponse, FairPrice, Position};
pub use utils::{canonicalize, sign, timestamp_ms};
