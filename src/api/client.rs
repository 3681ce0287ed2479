use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use yansi::Paint;

use super::error::PricingError;

static SILENT: AtomicBool = AtomicBool::new(false);

pub fn set_silent(silent: bool) {
    SILENT.store(silent, Ordering::Relaxed);
}

fn log_output(msg: String) {
    if !SILENT.load(Ordering::Relaxed) {
        println!("{}", msg);
    }
}

/// The one capability the pricing client needs from HTTP: GET a URL and decode JSON.
#[async_trait]
pub trait HttpGet: Send + Sync {
    async fn get(&self, url: &str) -> Result<Value, PricingError>;
}

/// `HttpGet` backed by a `reqwest::Client` with a bounded per-request timeout.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, PricingError> {
        let client = reqwest::Client::builder()
            .user_agent(format!("telescopes/{}", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| PricingError::Network(format!("failed to create HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpGet for HttpTransport {
    async fn get(&self, url: &str) -> Result<Value, PricingError> {
        // --- Curl Logging ---
        let mut parts = Vec::new();
        parts.push(Paint::new("curl").fg(yansi::Color::Green).bold().to_string());
        parts.push(format!("-X {}", Paint::new("GET").fg(yansi::Color::Yellow).bold()));
        parts.push(format!("'{}'", Paint::new(url).fg(yansi::Color::Cyan)));
        parts.push(format!(
            "{} {}",
            Paint::new("-H").fg(yansi::Color::Magenta),
            Paint::new("'Accept: application/json'").fg(yansi::Color::Magenta)
        ));
        log_output(format!("Request:\n{}", parts.join(" ")));
        // --------------------

        tracing::debug!(url, "GET");
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(%e, url, "Request failed");
                PricingError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            log_output(format!(
                "Response:\n{}",
                Paint::new(format!("HTTP {}: {}", status, error_text)).fg(yansi::Color::Red)
            ));
            tracing::warn!(%status, url, "Pricing API returned an error status");
            return Err(PricingError::Network(format!("HTTP {} from {}", status, url)));
        }

        let text = response.text().await.map_err(PricingError::from)?;
        // Grayed out so the table stays the focus
        log_output(format!("Response:\n{}", Paint::new(&text).rgb(100, 100, 100)));
        tracing::debug!(url, bytes = text.len(), "Response received");

        serde_json::from_str(&text)
            .map_err(|e| PricingError::Decode(format!("response from {} is not JSON: {}", url, e)))
    }
}
