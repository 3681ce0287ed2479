//! Telescopes: browse cloud instance-type pricing from a pricing API, by provider
//! and region, in the terminal or a small web page.

pub mod api;
pub mod config;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod shell;
pub mod templates;
pub mod utils;
