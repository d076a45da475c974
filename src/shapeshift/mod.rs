pub mod classify;
pub mod endpoints;
mod types;

pub use classify::{classify, find_error};
pub use endpoints::{ENDPOINTS, EndpointDescriptor, Normalization, Operation};
pub use types::{
    MarketInfo, SupportedCoinsList, Transaction, TransactionStatus, ValidateAddressResult,
};

use crate::common::{
    ClientConfig, CoinPair, RestTrait, ShapeShiftError, create_http_client, field_f64, field_i64,
    validate_segment,
};
use async_trait::async_trait;
use serde_json::Value;

/// Client for the ShapeShift HTTP/JSON API.
///
/// Holds no per-call state; clones share the underlying connection pool and may
/// be used concurrently.
#[derive(Debug, Clone)]
pub struct ShapeShift {
    client: reqwest::Client,
    base_url: String,
}

#[async_trait]
impl RestTrait for ShapeShift {
    fn api_base(&self) -> &str {
        &self.base_url
    }

    fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

impl ShapeShift {
    /// Client for the public origin with default settings.
    pub fn new() -> Result<Self, ShapeShiftError> {
        Self::from_config(ClientConfig::default())
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ShapeShiftError> {
        Self::from_config(ClientConfig::default().with_base_url(base_url))
    }

    pub fn from_env() -> Result<Self, ShapeShiftError> {
        Self::from_config(ClientConfig::from_env()?)
    }

    pub fn from_config(config: ClientConfig) -> Result<Self, ShapeShiftError> {
        Ok(Self {
            client: create_http_client(config.timeout)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Builds on an existing `reqwest::Client`, e.g. one with a proxy or custom TLS.
    pub fn with_http_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn supports(&self, operation: Operation) -> bool {
        operation.is_supported()
    }

    /// Resolves, fetches and classifies one catalog operation.
    async fn call(
        &self,
        operation: Operation,
        params: &[(&str, &str)],
    ) -> Result<Value, ShapeShiftError> {
        let endpoint = operation
            .descriptor()
            .ok_or(ShapeShiftError::NotSupported(operation))?;
        let path = endpoint.render(params)?;

        tracing::debug!(operation = %operation, path = %path, "GET");
        let body = self.get_json(&path).await?;

        classify(body, endpoint)
    }

    /// Exchange rate between two coins.
    pub async fn get_rate(&self, coin1: &str, coin2: &str) -> Result<f64, ShapeShiftError> {
        let pair = CoinPair::new(Some(coin1), Some(coin2))?.identifier();
        let body = self.call(Operation::Rate, &[("pair", pair.as_str())]).await?;
        field_f64(&body, "rate")
    }

    /// Maximum deposit amount for a pair.
    pub async fn get_limit(&self, coin1: &str, coin2: &str) -> Result<f64, ShapeShiftError> {
        let pair = CoinPair::new(Some(coin1), Some(coin2))?.identifier();
        let body = self.call(Operation::Limit, &[("pair", pair.as_str())]).await?;
        field_f64(&body, "limit")
    }

    /// Market info for a pair, or for every market when both coins are `None`.
    pub async fn get_market_info(
        &self,
        coin1: Option<&str>,
        coin2: Option<&str>,
    ) -> Result<MarketInfo, ShapeShiftError> {
        let pair = CoinPair::new(coin1, coin2)?.identifier();
        let body = self.call(Operation::MarketInfo, &[("pair", pair.as_str())]).await?;
        Ok(MarketInfo::new(body))
    }

    /// Seconds left before a pending deposit address expires.
    pub async fn get_time_remaining(&self, address: &str) -> Result<i64, ShapeShiftError> {
        validate_segment(address, "address")?;
        let body = self
            .call(Operation::TimeRemaining, &[("address", address)])
            .await?;
        field_i64(&body, "seconds_remaining")
    }

    pub async fn get_supported_coins(&self) -> Result<SupportedCoinsList, ShapeShiftError> {
        let body = self.call(Operation::SupportedCoins, &[]).await?;
        Ok(SupportedCoinsList::new(body))
    }

    /// Checks `address` against `coin`. An `error` in the response is returned
    /// in the result rather than raised.
    pub async fn validate_address(
        &self,
        address: &str,
        coin: &str,
    ) -> Result<ValidateAddressResult, ShapeShiftError> {
        validate_segment(address, "address")?;
        validate_segment(coin, "coin")?;
        let body = self
            .call(
                Operation::ValidateAddress,
                &[("address", address), ("coin", coin)],
            )
            .await?;
        Ok(serde_json::from_value(body)?)
    }

    pub async fn get_recent_transaction_list(
        &self,
        max: u32,
    ) -> Result<Vec<Transaction>, ShapeShiftError> {
        let _ = max;
        Err(ShapeShiftError::NotSupported(
            Operation::RecentTransactionList,
        ))
    }

    pub async fn get_status_of_deposit_to_address(
        &self,
        address: &str,
    ) -> Result<TransactionStatus, ShapeShiftError> {
        let _ = address;
        Err(ShapeShiftError::NotSupported(
            Operation::StatusOfDepositToAddress,
        ))
    }

    pub async fn get_list_of_transactions_by_api_key(
        &self,
        api_key: &str,
    ) -> Result<Vec<Transaction>, ShapeShiftError> {
        let _ = api_key;
        Err(ShapeShiftError::NotSupported(
            Operation::TransactionsByApiKey,
        ))
    }

    pub async fn get_transactions_by_output_address(
        &self,
        address: &str,
    ) -> Result<Vec<Transaction>, ShapeShiftError> {
        let _ = address;
        Err(ShapeShiftError::NotSupported(
            Operation::TransactionsByOutputAddress,
        ))
    }
}
