//! HTTP access to the listing service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use roster_model::CatalogItem;
use roster_model::api::ErrorBody;
use roster_model::api::routes::v1;
use tracing::{debug, info, warn};
use url::Url;

use crate::browser::CatalogSource;
use crate::error::{ClientError, Result};

/// Client for the catalog listing endpoint.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Create a client rooted at `base_url` (scheme, host and port; any path
    /// is replaced by the versioned route).
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, Self::DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        let client = Client::builder().timeout(timeout).build()?;

        info!(base_url = %base_url, "creating catalog API client");

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL of the listing endpoint.
    pub fn items_url(&self) -> Result<Url> {
        Ok(self.base_url.join(v1::catalog::ITEMS)?)
    }

    /// Fetch every catalog item, in server order.
    pub async fn list_items(&self) -> Result<Vec<CatalogItem>> {
        let url = self.items_url()?;
        debug!(%url, "fetching catalog");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let message = error_message(status, &body);
            warn!(status = status.as_u16(), %message, "catalog request rejected");
            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let items: Vec<CatalogItem> = serde_json::from_slice(&body)?;
        debug!(count = items.len(), "catalog fetched");
        Ok(items)
    }
}

fn error_message(status: StatusCode, body: &[u8]) -> String {
    serde_json::from_slice::<ErrorBody>(body)
        .map(|body| body.error)
        .unwrap_or_else(|_| {
            status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string()
        })
}

#[async_trait]
impl CatalogSource for ApiClient {
    async fn fetch_items(&self) -> Result<Vec<CatalogItem>> {
        self.list_items().await
    }

    fn endpoint(&self) -> String {
        self.base_url.as_str().trim_end_matches('/').to_string()
    }
}
