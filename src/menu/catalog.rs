// Static menu catalog: built in, or read once from a TOML file at startup

use std::collections::HashSet;
use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{MenuCategory, MenuItem};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Catalog has no {category} items")]
    EmptyCategory { category: MenuCategory },
    #[error("Item '{name}' has a negative price {price}")]
    NegativePrice { name: String, price: Decimal },
    #[error("Duplicate {category} item '{name}'")]
    DuplicateItem { category: MenuCategory, name: String },
}

/// Read-only menu, grouped by category in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub entrees: Vec<MenuItem>,
    pub side_dishes: Vec<MenuItem>,
    pub accompaniments: Vec<MenuItem>,
}

impl Catalog {
    /// The cafeteria's standard menu
    pub fn builtin() -> Self {
        Self {
            entrees: vec![
                MenuItem::new(
                    "Cauliflower",
                    "Whole cauliflower, brined, roasted, and deep fried",
                    Decimal::new(700, 2),
                    "cauliflower",
                ),
                MenuItem::new(
                    "Three Bean Chili",
                    "Black beans, red beans, kidney beans, slow cooked, topped with onion",
                    Decimal::new(400, 2),
                    "chili",
                ),
                MenuItem::new(
                    "Mushroom Pasta",
                    "Penne pasta, mushrooms, basil, with plum tomatoes cooked in garlic and olive oil",
                    Decimal::new(550, 2),
                    "pasta",
                ),
                MenuItem::new(
                    "Spicy Black Bean Skillet",
                    "Seasonal vegetables, black beans, house spice blend, served with avocado and quick pickled onions",
                    Decimal::new(550, 2),
                    "skillet",
                ),
            ],
            side_dishes: vec![
                MenuItem::new(
                    "Summer Salad",
                    "Heirloom tomatoes, butter lettuce, peaches, avocado, balsamic dressing",
                    Decimal::new(250, 2),
                    "summer_salad",
                ),
                MenuItem::new(
                    "Butternut Squash Soup",
                    "Roasted butternut squash, roasted peppers, chili oil",
                    Decimal::new(300, 2),
                    "squash_soup",
                ),
                MenuItem::new(
                    "Spicy Potatoes",
                    "Marble potatoes, roasted, and fried in house spice blend",
                    Decimal::new(200, 2),
                    "potatoes",
                ),
                MenuItem::new(
                    "Coconut Rice",
                    "Rice, coconut milk, lime, and sugar",
                    Decimal::new(150, 2),
                    "coconut_rice",
                ),
            ],
            accompaniments: vec![
                MenuItem::new(
                    "Lunch Roll",
                    "Fresh baked roll made in house",
                    Decimal::new(50, 2),
                    "lunch_roll",
                ),
                MenuItem::new(
                    "Mixed Berries",
                    "Strawberries, blueberries, raspberries, and huckleberries",
                    Decimal::new(100, 2),
                    "mixed_berries",
                ),
                MenuItem::new(
                    "Pickled Veggies",
                    "Pickled cucumbers and carrots, made in house",
                    Decimal::new(50, 2),
                    "pickled_veggies",
                ),
            ],
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = toml::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load and validate a catalog file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_toml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            entrees = catalog.entrees.len(),
            side_dishes = catalog.side_dishes.len(),
            accompaniments = catalog.accompaniments.len(),
            "Loaded menu catalog"
        );
        Ok(catalog)
    }

    pub fn items(&self, category: MenuCategory) -> &[MenuItem] {
        match category {
            MenuCategory::Entree => &self.entrees,
            MenuCategory::SideDish => &self.side_dishes,
            MenuCategory::Accompaniment => &self.accompaniments,
        }
    }

    /// Case-insensitive lookup by item name within one category
    pub fn find(&self, category: MenuCategory, name: &str) -> Option<&MenuItem> {
        self.items(category)
            .iter()
            .find(|item| item.name.eq_ignore_ascii_case(name.trim()))
    }

    fn validate(&self) -> Result<(), CatalogError> {
        for category in MenuCategory::ALL {
            let items = self.items(category);
            if items.is_empty() {
                return Err(CatalogError::EmptyCategory { category });
            }

            let mut seen = HashSet::new();
            for item in items {
                if item.price < Decimal::ZERO {
                    return Err(CatalogError::NegativePrice {
                        name: item.name.clone(),
                        price: item.price,
                    });
                }
                if !seen.insert(item.name.to_lowercase()) {
                    return Err(CatalogError::DuplicateItem {
                        category,
                        name: item.name.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
