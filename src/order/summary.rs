use serde::Serialize;

use super::OrderSelections;
use crate::menu::format_price;

/// One display line of the checkout screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryLine {
    pub label: String,
    pub amount: String,
}

/// Checkout text derived from a snapshot of the order. Unset categories are skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutSummary {
    pub items: Vec<SummaryLine>,
    pub subtotal: String,
    pub tax: String,
    pub total: String,
}

impl CheckoutSummary {
    pub fn from_selections(state: &OrderSelections, currency_symbol: &str) -> Self {
        let items = [&state.entree, &state.side_dish, &state.accompaniment]
            .into_iter()
            .flatten()
            .map(|item| SummaryLine {
                label: item.name.clone(),
                amount: format_price(item.price, currency_symbol),
            })
            .collect();

        Self {
            items,
            subtotal: format_price(state.item_total_price, currency_symbol),
            tax: format_price(state.tax_price, currency_symbol),
            total: format_price(state.order_total_price, currency_symbol),
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::from("Order Summary\n");
        for line in &self.items {
            out.push_str(&format!("  {:<28} {:>8}\n", line.label, line.amount));
        }
        out.push('\n');
        out.push_str(&format!("  {:<28} {:>8}\n", "Subtotal:", self.subtotal));
        out.push_str(&format!("  {:<28} {:>8}\n", "Tax:", self.tax));
        out.push_str(&format!("  {:<28} {:>8}\n", "Total:", self.total));
        out
    }
}
