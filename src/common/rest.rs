use crate::common::ShapeShiftError;
use async_trait::async_trait;
use serde_json::Value;

/// GET-only JSON access to a single fixed origin.
#[async_trait]
pub trait RestTrait: Send + Sync {
    fn api_base(&self) -> &str;
    fn client(&self) -> &reqwest::Client;

    // Default implementation
    async fn get_json(&self, path: &str) -> Result<Value, ShapeShiftError> {
        let url = format!("{}/{}", self.api_base(), path);

        let response = self
            .client()
            .get(&url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| {
                tracing::warn!(url = %url, error = %e, "request failed");
                ShapeShiftError::from(e)
            })?;

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}
