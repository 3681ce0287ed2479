use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};
use telescopes::api::{HttpGet, PricingClient, PricingError};

pub const BASE_URL: &str = "http://pricing.test";

/// Canned responses keyed by full URL. Unknown URLs answer with an HTTP 404 network error.
#[derive(Default)]
pub struct FakeHttp {
    responses: Mutex<HashMap<String, Result<Value, PricingError>>>,
    calls: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl FakeHttp {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, path: &str, result: Result<Value, PricingError>) {
        self.responses
            .lock()
            .unwrap()
            .insert(format!("{}/api/v1/{}", BASE_URL, path), result);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpGet for FakeHttp {
    async fn get(&self, url: &str) -> Result<Value, PricingError> {
        self.calls.lock().unwrap().push(url.to_string());
        self.responses
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .unwrap_or_else(|| Err(PricingError::Network(format!("HTTP 404 Not Found from {}", url))))
    }
}

#[allow(dead_code)]
pub fn client(http: &Arc<FakeHttp>) -> PricingClient {
    PricingClient::new(http.clone(), BASE_URL)
}

#[allow(dead_code)]
pub fn m5_large() -> Value {
    json!({
        "type": "m5.large",
        "cpusPerVm": 4,
        "memPerVm": 8.0,
        "onDemandPrice": 0.1,
        "spotPrice": [{"zone": "a", "price": 0.05}, {"zone": "b", "price": 0.07}],
        "ntwPerf": "Moderate"
    })
}

#[allow(dead_code)]
pub fn c5_xlarge() -> Value {
    json!({
        "type": "c5.xlarge",
        "cpusPerVm": 4,
        "memPerVm": 8,
        "onDemandPrice": 0.17,
        "spotPrice": null,
        "ntwPerf": ""
    })
}

#[allow(dead_code)]
pub fn products(provider: &str, items: Vec<Value>) -> Value {
    json!({ "provider": provider, "products": items })
}
