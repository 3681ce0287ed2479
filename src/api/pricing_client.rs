use std::sync::Arc;

use crate::models::{DisplayedProduct, Region};

use super::client::HttpGet;
use super::error::PricingError;
use super::{load_products, load_regions};

/// Client for the two pricing endpoints. The HTTP capability is injected so it can
/// be swapped for a fake.
#[derive(Clone)]
pub struct PricingClient {
    http: Arc<dyn HttpGet>,
    api_base_url: String,
}

impl PricingClient {
    pub fn new(http: Arc<dyn HttpGet>, api_base_url: impl Into<String>) -> Self {
        Self {
            http,
            api_base_url: api_base_url.into(),
        }
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// GET `regions/{provider}`.
    pub async fn fetch_regions(&self, provider: &str) -> Result<Vec<Region>, PricingError> {
        load_regions(self.http.as_ref(), &self.api_base_url, provider).await
    }

    /// GET `products/{provider}/{region}`, mapped to display rows.
    pub async fn fetch_products(
        &self,
        provider: &str,
        region: &str,
    ) -> Result<Vec<DisplayedProduct>, PricingError> {
        load_products(self.http.as_ref(), &self.api_base_url, provider, region).await
    }
}
