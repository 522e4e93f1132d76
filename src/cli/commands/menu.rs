use anyhow::Result;

use super::Command;
use crate::config::LunchTrayConfig;
use crate::menu::{format_price, Catalog, MenuCategory};

pub struct MenuCommand {
    pub catalog: Catalog,
    pub currency_symbol: String,
    pub json: bool,
}

impl MenuCommand {
    pub fn new(config: &LunchTrayConfig) -> Result<Self> {
        Ok(Self {
            catalog: config.catalog()?,
            currency_symbol: config.pricing.currency_symbol.clone(),
            json: false,
        })
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    pub fn render_table(&self) -> String {
        let mut out = String::new();
        for category in MenuCategory::ALL {
            out.push_str(&format!("{}\n", heading(category)));
            for item in self.catalog.items(category) {
                out.push_str(&format!(
                    "  {:<28} {:>8}  {}\n",
                    item.name,
                    format_price(item.price, &self.currency_symbol),
                    item.description
                ));
            }
            out.push('\n');
        }
        out
    }
}

impl Command for MenuCommand {
    fn execute(&self) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(&self.catalog)?);
        } else {
            print!("{}", self.render_table());
        }
        Ok(())
    }
}

fn heading(category: MenuCategory) -> &'static str {
    match category {
        MenuCategory::Entree => "🍲 Entrees",
        MenuCategory::SideDish => "🥗 Side Dishes",
        MenuCategory::Accompaniment => "🥖 Accompaniments",
    }
}
