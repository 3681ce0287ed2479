use chrono::{DateTime, Utc};

use crate::api::{PricingClient, PricingError};
use crate::models::{DisplayedProduct, Region};
use crate::utils::{normalize_filter, row_matches};

/// Where the view is in its load cycle. Transitions only move forward; a failed
/// request leaves the stage where it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStage {
    NotLoaded,
    RegionsLoaded,
    ProductsLoaded,
    Filtered,
}

/// State behind the products table: selected provider and region, the last
/// loaded rows, and the user's filter.
pub struct ProductsView {
    client: PricingClient,
    provider: String,
    region: Option<String>,
    regions: Vec<Region>,
    rows: Vec<DisplayedProduct>,
    products_loaded: bool,
    filter_text: String,
    last_error: Option<PricingError>,
    loaded_at: Option<DateTime<Utc>>,
}

impl ProductsView {
    pub fn new(client: PricingClient, provider: impl Into<String>) -> Self {
        Self {
            client,
            provider: provider.into(),
            region: None,
            regions: Vec::new(),
            rows: Vec::new(),
            products_loaded: false,
            filter_text: String::new(),
            last_error: None,
            loaded_at: None,
        }
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// Origin of the pricing API the view loads from.
    pub fn api_base_url(&self) -> &str {
        self.client.api_base_url()
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Every row of the last successful load, ignoring the filter.
    pub fn rows(&self) -> &[DisplayedProduct] {
        &self.rows
    }

    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    pub fn last_error(&self) -> Option<&PricingError> {
        self.last_error.as_ref()
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    pub fn stage(&self) -> LoadStage {
        if self.products_loaded {
            if self.filter_text.is_empty() {
                LoadStage::ProductsLoaded
            } else {
                LoadStage::Filtered
            }
        } else if self.region.is_some() {
            LoadStage::RegionsLoaded
        } else {
            LoadStage::NotLoaded
        }
    }

    /// Load regions, select the first one and load its products.
    pub async fn initialize(&mut self) -> Result<(), PricingError> {
        self.load(None).await
    }

    /// Like [`initialize`](Self::initialize), but selects `preferred_region`. A region
    /// the provider does not offer fails without touching the view.
    pub async fn load(&mut self, preferred_region: Option<&str>) -> Result<(), PricingError> {
        let provider = self.provider.clone();
        self.load_provider(&provider, preferred_region).await
    }

    /// Switch to another provider and run the full load sequence for it. The
    /// provider only changes once its regions have loaded.
    pub async fn select_provider(&mut self, provider: &str) -> Result<(), PricingError> {
        let provider = provider.trim().to_lowercase();
        self.load_provider(&provider, None).await
    }

    /// Load products for an explicitly chosen region of the current provider.
    pub async fn select_region(&mut self, region: &str) -> Result<(), PricingError> {
        // regions must be loaded first; an empty list offers nothing to pick
        if !self.regions.iter().any(|r| r.id == region) {
            return self.fail(PricingError::UnknownRegion {
                provider: self.provider.clone(),
                region: region.to_string(),
            });
        }
        let rows = match self.client.fetch_products(&self.provider, region).await {
            Ok(rows) => rows,
            Err(e) => return self.fail(e),
        };
        self.region = Some(region.to_string());
        self.publish(rows);
        Ok(())
    }

    /// Narrow the visible rows to those containing `text`. Trimmed and case-insensitive.
    pub fn set_filter(&mut self, text: &str) {
        self.filter_text = normalize_filter(text);
    }

    /// The rows that pass the current filter, in load order.
    pub fn visible_rows(&self) -> Vec<&DisplayedProduct> {
        self.rows
            .iter()
            .filter(|row| row_matches(row, &self.filter_text))
            .collect()
    }

    async fn load_provider(
        &mut self,
        provider: &str,
        preferred_region: Option<&str>,
    ) -> Result<(), PricingError> {
        let regions = match self.client.fetch_regions(provider).await {
            Ok(regions) => regions,
            Err(e) => return self.fail(e),
        };

        let region = match preferred_region {
            Some(wanted) if regions.iter().any(|r| r.id == wanted) => wanted.to_string(),
            Some(wanted) => {
                return self.fail(PricingError::UnknownRegion {
                    provider: provider.to_string(),
                    region: wanted.to_string(),
                });
            }
            None => match regions.first() {
                Some(first) => first.id.clone(),
                None => {
                    return self.fail(PricingError::EmptyRegionList {
                        provider: provider.to_string(),
                    })
                }
            },
        };

        tracing::info!(provider, region = %region, count = regions.len(), "Regions loaded");
        self.provider = provider.to_string();
        self.regions = regions;
        self.region = Some(region.clone());

        let rows = match self.client.fetch_products(provider, &region).await {
            Ok(rows) => rows,
            Err(e) => return self.fail(e),
        };
        self.publish(rows);
        Ok(())
    }

    fn publish(&mut self, rows: Vec<DisplayedProduct>) {
        tracing::info!(
            provider = %self.provider,
            region = ?self.region,
            count = rows.len(),
            "Products loaded"
        );
        self.rows = rows;
        self.products_loaded = true;
        self.last_error = None;
        self.loaded_at = Some(Utc::now());
    }

    fn fail(&mut self, e: PricingError) -> Result<(), PricingError> {
        tracing::warn!(%e, provider = %self.provider, "Load failed");
        self.last_error = Some(e.clone());
        Err(e)
    }
}
