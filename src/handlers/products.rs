use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Response,
};
use serde::Deserialize;

use crate::api::PricingClient;
use crate::config::SUPPORTED_PROVIDERS;
use crate::models::AppState;
use crate::services::ProductsView;
use crate::shell::terminal::PRODUCT_HEADERS;
use crate::templates::ProductsPageTemplate;
use crate::utils::api_host;

use super::helpers::render_template;

#[derive(Deserialize, Default, Debug)]
pub struct ProductsQuery {
    pub provider: Option<String>,
    pub region: Option<String>,
    pub filter: Option<String>,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Products page. Every request runs a fresh load cycle against the pricing API.
pub async fn products_get(State(state): State<AppState>, Query(q): Query<ProductsQuery>) -> Response {
    let provider = non_empty(q.provider.as_deref())
        .map(str::to_lowercase)
        .unwrap_or_else(|| state.settings.provider.clone());
    let client = PricingClient::new(state.http.clone(), state.settings.api_base_url.clone());
    let mut view = ProductsView::new(client, provider);

    let result = view.load(non_empty(q.region.as_deref())).await;
    view.set_filter(q.filter.as_deref().unwrap_or_default());

    let status = match &result {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::error!(%e, provider = view.provider(), "Failed to load products page");
            StatusCode::BAD_GATEWAY
        }
    };

    let mut providers: Vec<String> = SUPPORTED_PROVIDERS.iter().map(|p| p.to_string()).collect();
    if !providers.iter().any(|p| p == view.provider()) {
        providers.push(view.provider().to_string());
    }

    let shell = &state.shell;
    render_template(
        status,
        ProductsPageTemplate {
            title: shell.title,
            api_host: api_host(&state.settings.api_base_url),
            providers,
            provider: view.provider().to_string(),
            regions: view.regions(),
            region: view.region().unwrap_or_default().to_string(),
            filter: view.filter_text().to_string(),
            headers: PRODUCT_HEADERS,
            rows: view.visible_rows(),
            total: view.rows().len(),
            error: result.err().map(|e| e.user_message()),
            loaded_at: view
                .loaded_at()
                .map(|at| at.format("%Y-%m-%d %H:%M:%S UTC").to_string()),
            sample_columns: shell.sample_columns,
            sample_machines: &shell.sample_machines,
        },
    )
}
