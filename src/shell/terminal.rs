use comfy_table::{modifiers, presets, ContentArrangement, Table};
use terminal_size::{terminal_size, Width};
use yansi::Paint;

use crate::models::{DisplayedProduct, Region};
use crate::services::ProductsView;
use crate::utils::api_host;

pub const PRODUCT_HEADERS: [&str; 6] =
    ["Machine type", "vCPUs", "Memory", "On-demand", "Spot (avg)", "Network"];

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }
    table
}

pub fn products_table(rows: &[&DisplayedProduct]) -> Table {
    let mut table = new_table();
    table.set_header(PRODUCT_HEADERS);
    for row in rows {
        table.add_row(row.fields());
    }
    table
}

pub fn regions_table(regions: &[Region], selected: Option<&str>) -> Table {
    let mut table = new_table();
    table.set_header(vec!["ID", "Name", ""]);
    for r in regions {
        let marker = if selected == Some(r.id.as_str()) { "*" } else { "" };
        table.add_row(vec![r.id.as_str(), r.name.as_str(), marker]);
    }
    table
}

/// Summary line under the products table.
pub fn footer(view: &ProductsView) -> String {
    let visible = view.visible_rows().len();
    let total = view.rows().len();
    let mut line = format!(
        "{} {} | {} of {} instance types",
        view.provider(),
        view.region().unwrap_or("-"),
        visible,
        total
    );
    if !view.filter_text().is_empty() {
        line.push_str(&format!(" matching \"{}\"", view.filter_text()));
    }
    if let Some(at) = view.loaded_at() {
        line.push_str(&format!(" | from {} at {}", api_host(view.api_base_url()), at.format("%Y-%m-%d %H:%M:%S UTC")));
    }
    line
}

/// Print the view's visible rows followed by the footer.
pub fn print_products(view: &ProductsView) {
    let rows = view.visible_rows();
    if rows.is_empty() {
        println!("{}", Paint::new("(no matching instance types)").dim());
    } else {
        println!("\n{}", products_table(&rows));
    }
    println!("{}\n", Paint::new(footer(view)).dim());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn products_table_lists_every_column() {
        let row = DisplayedProduct {
            machine_type: "c5.xlarge".into(),
            cpus: "4 vCPUs".into(),
            mem: "8.00 GB".into(),
            regular_price: "$0.17000".into(),
            spot_price: "unavailable".into(),
            ntw_perf: "Up to 10 Gigabit".into(),
        };
        let rendered = products_table(&[&row]).to_string();
        for header in PRODUCT_HEADERS {
            assert!(rendered.contains(header), "missing header {}", header);
        }
        assert!(rendered.contains("c5.xlarge"));
        assert!(rendered.contains("$0.17000"));
    }

    #[test]
    fn regions_table_marks_selection() {
        let regions = vec![
            Region { id: "eu-west-1".into(), name: "EU (Ireland)".into() },
            Region { id: "us-east-1".into(), name: "US East".into() },
        ];
        let rendered = regions_table(&regions, Some("us-east-1")).to_string();
        assert!(rendered.contains("eu-west-1"));
        assert!(rendered.contains("*"));
    }
}
