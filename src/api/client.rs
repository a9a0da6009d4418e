use std::time::Duration;

use reqwest::{Client, Url};
use serde_json::Value;

use super::error::{ClientError, FetchError};
use super::query::{build_request, ProductQuery};
use super::types::PageResult;
use crate::config::ApiConfig;

/// HTTP client for the product catalog.
///
/// One call to [`ProductApi::fetch`] is exactly one GET: no retries, no
/// caching, no de-duplication of concurrent calls.
#[derive(Debug, Clone)]
pub struct ProductApi {
    client: Client,
    base_url: Url,
    page_size: u32,
}

impl ProductApi {
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        let base_url = config.parsed_base_url()?;
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url,
            page_size: config.page_size,
        })
    }

    pub async fn fetch(&self, query: &ProductQuery) -> Result<PageResult, FetchError> {
        let spec = build_request(&self.base_url, query, self.page_size);
        tracing::debug!(url = %spec.url, endpoint = ?spec.endpoint, "Fetching products");

        let response = self.client.get(spec.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let body: Value = serde_json::from_slice(&body)
            .map_err(|e| FetchError::invalid_response(format!("body is not JSON: {e}")))?;

        PageResult::from_json(body)
    }
}
