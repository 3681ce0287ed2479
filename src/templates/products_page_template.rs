use askama::Template;

use crate::models::{DisplayedProduct, Region};
use crate::shell::SampleMachine;

#[derive(Template)]
#[template(path = "products.html")]
pub struct ProductsPageTemplate<'a> {
    pub title: &'a str,
    pub api_host: &'a str,
    pub providers: Vec<String>,
    pub provider: String,
    pub regions: &'a [Region],
    pub region: String,
    pub filter: String,
    pub headers: [&'a str; 6],
    pub rows: Vec<&'a DisplayedProduct>,
    pub total: usize,
    pub error: Option<String>,
    pub loaded_at: Option<String>,
    pub sample_columns: [&'a str; 3],
    pub sample_machines: &'a [SampleMachine],
}
