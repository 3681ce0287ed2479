/// Error types for the pricing API client
use thiserror::Error;

/// Errors that can occur while loading pricing data
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Transport failure, timeout or a non-2xx status
    #[error("Network error: {0}")]
    Network(String),

    /// Payload does not match the expected schema
    #[error("Decode error: {0}")]
    Decode(String),

    /// The regions endpoint returned no entries, so no default region can be chosen
    #[error("No regions available for provider: {provider}")]
    EmptyRegionList { provider: String },

    /// A requested region is not offered by the provider
    #[error("Region {region} is not available for provider {provider}")]
    UnknownRegion { provider: String, region: String },
}

impl PricingError {
    /// Message shown to users by the shells.
    pub fn user_message(&self) -> String {
        format!("Unable to load pricing data ({})", self)
    }
}

impl From<reqwest::Error> for PricingError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            PricingError::Decode(e.to_string())
        } else if e.is_timeout() {
            PricingError::Network(format!("request timed out: {}", e))
        } else {
            PricingError::Network(e.to_string())
        }
    }
}
