use thiserror::Error;

/// Failure of a single signed request against the MEXC contract API.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid request url: {0}")]
    Url(#[from] url::ParseError),

    #[error("failed to send request: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),

    #[error("unexpected http status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("api error {code}: {message}")]
    Api { code: i64, message: String },

    #[error("response has no data")]
    MissingData,
}

/// Invalid or incomplete client configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set or empty")]
    MissingCredential(&'static str),

    #[error("invalid value {value:?} for {name}")]
    InvalidSetting { name: &'static str, value: String },
}
