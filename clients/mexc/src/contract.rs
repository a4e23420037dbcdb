use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::debug;
use url::{ParseError, Url};

pub use crate::config::MexcContractClientConfig;
use crate::error::ClientError;
use crate::types::{ApiResponse, FairPrice, Position};
use crate::utils;

const OPEN_POSITIONS_PATH: &str = "/api/v1/private/position/open_positions";
const FAIR_PRICE_PATH: &str = "/api/v1/contract/fair_price";

/// Client for MEXC contract (futures) API.
pub struct MexcContractClient {
    client: Arc<reqwest::Client>,
    config: MexcContractClientConfig,
}

impl MexcContractClient {
    pub fn new(client: Arc<reqwest::Client>, config: MexcContractClientConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &MexcContractClientConfig {
        &self.config
    }

    /// All open positions of the account.
    pub async fn open_positions(&self) -> Result<Vec<Position>, ClientError> {
        self.signed_get(OPEN_POSITIONS_PATH, &[]).await
    }

    /// Current fair (mark) price of `symbol`.
    pub async fn fair_price(&self, symbol: &str) -> Result<f64, ClientError> {
        let mut url = self.endpoint(FAIR_PRICE_PATH)?;
        // escaped as one segment, so '/', '?' or '#' cannot change path or query
        url.path_segments_mut()
            .map_err(|_| ClientError::Url(ParseError::RelativeUrlWithoutBase))?
            .push(symbol);
        let data: FairPrice = self.signed_get_url(url, &[]).await?;
        Ok(data.fair_price)
    }

    /// Signed GET against `path`, returning the decoded `data` of the envelope.
    ///
    /// Every call gets its own `Request-Time` and therefore its own signature.
    /// Non-empty `params` are sent as the canonical query string, which is
    /// also the string that gets signed.
    pub async fn signed_get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, ClientError> {
        let url = self.endpoint(path)?;
        self.signed_get_url(url, params).await
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        Ok(Url::parse(&format!("{}{}", self.config.base_url, path))?)
    }

    async fn signed_get_url<T: DeserializeOwned>(
        &self,
        mut url: Url,
        params: &[(&str, String)],
    ) -> Result<T, ClientError> {
        let query = utils::canonicalize(params.iter().map(|(k, v)| (*k, v.as_str())));
        if !query.is_empty() {
            url.set_query(Some(&query));
        }

        let request_time = utils::timestamp_ms();
        let signature = utils::sign(
            &self.config.access_key,
            &self.config.secret_key,
            &request_time,
            &query,
        );

        debug!(%url, request_time = %request_time, "signed GET");
        let resp = self
            .client
            .get(url)
            .timeout(self.config.request_timeout)
            .header("ApiKey", &self.config.access_key)
            .header("Request-Time", &request_time)
            .header("Signature", &signature)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(ClientError::Transport)?;

        let status = resp.status();
        let body = resp.text().await.map_err(ClientError::Body)?;
        if !status.is_success() {
            return Err(ClientError::Status { status, body });
        }

        let envelope: ApiResponse<T> = serde_json::from_str(&body)?;
        envelope.into_data()
    }
}
