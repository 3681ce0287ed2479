// Atomic API modules
pub mod client;
pub mod error;
pub mod pricing_client;
pub mod products;
pub mod regions;

// Re-export commonly used items
pub use client::{set_silent, HttpGet, HttpTransport};
pub use error::PricingError;
pub use pricing_client::PricingClient;
pub use products::load_products;
pub use regions::load_regions;
