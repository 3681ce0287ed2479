// Formatting utilities
pub mod price_format;

// Row filtering
pub mod filter;

// URL handling utilities
pub mod url_builder;
pub mod url_parser;

pub use price_format::{format_cpus, format_memory, format_price, UNAVAILABLE};
pub use filter::{normalize_filter, row_matches};
pub use url_builder::api_url;
pub use url_parser::api_host;
