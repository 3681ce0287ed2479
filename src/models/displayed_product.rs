use serde::{Deserialize, Serialize};

use crate::models::product::Product;
use crate::utils::{format_cpus, format_memory, format_price, UNAVAILABLE};

/// Display row for one product. Every field is already formatted for rendering.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DisplayedProduct {
    #[serde(rename = "type")]
    pub machine_type: String,
    pub cpus: String,
    pub mem: String,
    pub regular_price: String,
    pub spot_price: String,
    pub ntw_perf: String,
}

impl DisplayedProduct {
    /// The displayed columns, in table order.
    pub fn fields(&self) -> [&str; 6] {
        [
            self.machine_type.as_str(),
            self.cpus.as_str(),
            self.mem.as_str(),
            self.regular_price.as_str(),
            self.spot_price.as_str(),
            self.ntw_perf.as_str(),
        ]
    }
}

impl From<&Product> for DisplayedProduct {
    fn from(p: &Product) -> Self {
        let spot_price = p
            .average_spot_price()
            .map(format_price)
            .unwrap_or_else(|| UNAVAILABLE.to_string());
        let ntw_perf = if p.ntw_perf.is_empty() {
            UNAVAILABLE.to_string()
        } else {
            p.ntw_perf.clone()
        };
        Self {
            machine_type: p.machine_type.clone(),
            cpus: format_cpus(p.cpus_per_vm),
            mem: format_memory(p.mem_per_vm),
            regular_price: format_price(p.on_demand_price),
            spot_price,
            ntw_perf,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SpotPrice;

    fn product(spot: Option<Vec<SpotPrice>>, ntw: &str) -> Product {
        Product {
            machine_type: "m5.large".into(),
            cpus_per_vm: 4.0,
            mem_per_vm: 8.0,
            on_demand_price: 0.1,
            spot_price: spot,
            ntw_perf: ntw.into(),
        }
    }

    #[test]
    fn maps_full_product() {
        let p = product(
            Some(vec![
                SpotPrice { zone: "a".into(), price: 0.05 },
                SpotPrice { zone: "b".into(), price: 0.07 },
            ]),
            "Moderate",
        );
        let row = DisplayedProduct::from(&p);
        assert_eq!(row.machine_type, "m5.large");
        assert_eq!(row.cpus, "4 vCPUs");
        assert_eq!(row.mem, "8.00 GB");
        assert_eq!(row.regular_price, "$0.10000");
        assert_eq!(row.spot_price, "$0.06000");
        assert_eq!(row.ntw_perf, "Moderate");
    }

    #[test]
    fn missing_spot_prices_are_unavailable() {
        assert_eq!(DisplayedProduct::from(&product(None, "High")).spot_price, "unavailable");
        assert_eq!(DisplayedProduct::from(&product(Some(vec![]), "High")).spot_price, "unavailable");
    }

    #[test]
    fn empty_network_performance_is_unavailable() {
        let row = DisplayedProduct::from(&product(None, ""));
        assert_eq!(row.ntw_perf, "unavailable");
    }
}
