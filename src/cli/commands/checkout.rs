use anyhow::{anyhow, Result};

use super::Command;
use crate::config::LunchTrayConfig;
use crate::menu::{Catalog, MenuCategory};
use crate::order::{CheckoutSummary, OrderStateHolder};

/// One-shot pricing of an order given item names
pub struct CheckoutCommand {
    config: LunchTrayConfig,
    entree: Option<String>,
    side_dish: Option<String>,
    accompaniment: Option<String>,
    json: bool,
}

impl CheckoutCommand {
    pub fn new(config: &LunchTrayConfig) -> Self {
        Self {
            config: config.clone(),
            entree: None,
            side_dish: None,
            accompaniment: None,
            json: false,
        }
    }

    pub fn with_selection(mut self, category: MenuCategory, name: Option<String>) -> Self {
        match category {
            MenuCategory::Entree => self.entree = name,
            MenuCategory::SideDish => self.side_dish = name,
            MenuCategory::Accompaniment => self.accompaniment = name,
        }
        self
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Build the order through the same holder the wizard uses
    pub fn summarize(&self, catalog: &Catalog) -> Result<CheckoutSummary> {
        let mut order = OrderStateHolder::with_tax_rate(self.config.pricing.tax_rate);
        let requested = [
            (MenuCategory::Entree, &self.entree),
            (MenuCategory::SideDish, &self.side_dish),
            (MenuCategory::Accompaniment, &self.accompaniment),
        ];

        for (category, name) in requested {
            let Some(name) = name else { continue };
            let item = catalog.find(category, name).ok_or_else(|| {
                let known: Vec<&str> = catalog.items(category).iter().map(|i| i.name.as_str()).collect();
                anyhow!("No {category} named '{name}'. Choose one of: {}", known.join(", "))
            })?;
            order.update(category, item.clone());
        }

        Ok(order.checkout_summary(&self.config.pricing.currency_symbol))
    }
}

impl Command for CheckoutCommand {
    fn execute(&self) -> Result<()> {
        let catalog = self.config.catalog()?;
        let summary = self.summarize(&catalog)?;
        if self.json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            print!("{}", summary.render());
        }
        Ok(())
    }
}
