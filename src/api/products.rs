use crate::models::{DisplayedProduct, Products};
use crate::utils::api_url;

use super::client::HttpGet;
use super::error::PricingError;

/// Load the products of one provider region and map them to display rows.
pub async fn load_products(
    http: &dyn HttpGet,
    api_base_url: &str,
    provider: &str,
    region: &str,
) -> Result<Vec<DisplayedProduct>, PricingError> {
    let url = api_url(api_base_url, &["products", provider, region]);
    let payload = http.get(&url).await?;
    let envelope: Products = serde_json::from_value(payload)
        .map_err(|e| PricingError::Decode(format!("unexpected products payload: {}", e)))?;
    if !envelope.provider.is_empty() && envelope.provider != provider {
        tracing::warn!(requested = provider, returned = %envelope.provider, "Provider mismatch in products payload");
    }
    let rows: Vec<DisplayedProduct> = envelope.products.iter().map(DisplayedProduct::from).collect();
    tracing::debug!(provider, region, count = rows.len(), "Loaded products");
    Ok(rows)
}
