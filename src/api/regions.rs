use crate::models::Region;
use crate::utils::api_url;

use super::client::HttpGet;
use super::error::PricingError;

/// Load the regions a provider offers, in the order the server returns them.
pub async fn load_regions(
    http: &dyn HttpGet,
    api_base_url: &str,
    provider: &str,
) -> Result<Vec<Region>, PricingError> {
    let url = api_url(api_base_url, &["regions", provider]);
    let payload = http.get(&url).await?;
    let regions: Vec<Region> = serde_json::from_value(payload)
        .map_err(|e| PricingError::Decode(format!("unexpected regions payload: {}", e)))?;
    tracing::debug!(provider, count = regions.len(), "Loaded regions");
    Ok(regions)
}
