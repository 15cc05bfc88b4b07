//! Plain-text views of the catalog for the terminal.
use menu_core::{CatalogSummary, MenuItem};

pub(crate) fn render_menu(items: &[MenuItem], currency_symbol: &str) -> String {
    if items.is_empty() {
        return "No dishes on the menu yet.\n".to_string();
    }

    let mut out = String::new();
    for item in items {
        out.push_str(&format!(
            "[{}] {} - {}\n    {}\n    Course: {}\n",
            item.id,
            item.dish_name,
            item.price.format(currency_symbol),
            item.description,
            item.course
        ));
    }
    out
}

pub(crate) fn render_summary(summary: &CatalogSummary, currency_symbol: &str) -> String {
    let mut lines = summary.lines(currency_symbol);
    lines.insert(1, "Average price by course:".to_string());
    lines.join("\n") + "\n"
}
