// Menu types shared by the catalog, the order holder and the screens

pub mod catalog;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use catalog::{Catalog, CatalogError};

/// A selectable catalog entry. Never mutated once the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    /// Opaque reference to the item's picture; only the renderer interprets it
    pub image: String,
}

impl MenuItem {
    pub fn new(name: &str, description: &str, price: Decimal, image: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            price,
            image: image.to_string(),
        }
    }
}

/// The three independent selection categories of one order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MenuCategory {
    Entree,
    SideDish,
    Accompaniment,
}

impl MenuCategory {
    pub const ALL: [MenuCategory; 3] = [
        MenuCategory::Entree,
        MenuCategory::SideDish,
        MenuCategory::Accompaniment,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuCategory::Entree => "entree",
            MenuCategory::SideDish => "side dish",
            MenuCategory::Accompaniment => "accompaniment",
        }
    }
}

impl std::fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Render a price as `<symbol><amount>` with two decimal places.
///
/// Rounding only affects the text; stored prices keep their full precision.
pub fn format_price(price: Decimal, currency_symbol: &str) -> String {
    let rounded = price.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
    format!("{currency_symbol}{rounded:.2}")
}
