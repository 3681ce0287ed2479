use serde::{Deserialize, Serialize};

/// One observed spot price in one availability zone.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SpotPrice {
    pub zone: String,
    pub price: f64,
}

/// Raw pricing record for one instance type in one region.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "type")]
    pub machine_type: String,
    pub cpus_per_vm: f64,
    pub mem_per_vm: f64,
    pub on_demand_price: f64,
    // null and absent both land here as None
    #[serde(default)]
    pub spot_price: Option<Vec<SpotPrice>>,
    #[serde(default)]
    pub ntw_perf: String,
}

impl Product {
    /// Arithmetic mean of the zone spot prices, `None` when there are none.
    pub fn average_spot_price(&self) -> Option<f64> {
        let prices = self.spot_price.as_deref().filter(|p| !p.is_empty())?;
        let sum: f64 = prices.iter().map(|p| p.price).sum();
        Some(sum / prices.len() as f64)
    }
}

/// Envelope returned by `products/{provider}/{region}`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Products {
    #[serde(default)]
    pub provider: String,
    pub products: Vec<Product>,
}
