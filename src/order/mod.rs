// Order State Holder
//
// Owns the in-progress order. Every mutation recomputes the derived prices
// before it returns and before any observer is notified.

pub mod summary;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::menu::{MenuCategory, MenuItem};

pub use summary::CheckoutSummary;

/// Default sales tax applied to the item subtotal (8%)
pub const TAX_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 2);

/// Current picks and the prices derived from them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSelections {
    pub entree: Option<MenuItem>,
    pub side_dish: Option<MenuItem>,
    pub accompaniment: Option<MenuItem>,
    pub item_total_price: Decimal,
    pub tax_price: Decimal,
    pub order_total_price: Decimal,
}

impl OrderSelections {
    pub fn selection(&self, category: MenuCategory) -> Option<&MenuItem> {
        match category {
            MenuCategory::Entree => self.entree.as_ref(),
            MenuCategory::SideDish => self.side_dish.as_ref(),
            MenuCategory::Accompaniment => self.accompaniment.as_ref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entree.is_none() && self.side_dish.is_none() && self.accompaniment.is_none()
    }

    fn recompute_prices(&mut self, tax_rate: Decimal) {
        let item_total: Decimal = [&self.entree, &self.side_dish, &self.accompaniment]
            .into_iter()
            .flatten()
            .map(|item| item.price)
            .sum();
        let tax = item_total * tax_rate;

        self.item_total_price = item_total;
        self.tax_price = tax;
        self.order_total_price = item_total + tax;
    }
}

type Observer = Box<dyn Fn(&OrderSelections)>;

/// Single owner of the order being built.
pub struct OrderStateHolder {
    state: OrderSelections,
    tax_rate: Decimal,
    order_id: Uuid,
    observers: Vec<Observer>,
}

impl std::fmt::Debug for OrderStateHolder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderStateHolder")
            .field("state", &self.state)
            .field("tax_rate", &self.tax_rate)
            .field("order_id", &self.order_id)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Default for OrderStateHolder {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderStateHolder {
    pub fn new() -> Self {
        Self::with_tax_rate(TAX_RATE)
    }

    pub fn with_tax_rate(tax_rate: Decimal) -> Self {
        Self {
            state: OrderSelections::default(),
            tax_rate,
            order_id: Uuid::new_v4(),
            observers: Vec::new(),
        }
    }

    pub fn tax_rate(&self) -> Decimal {
        self.tax_rate
    }

    /// Correlation id of the order in progress; a new one is issued on reset
    pub fn order_id(&self) -> Uuid {
        self.order_id
    }

    pub fn current_state(&self) -> &OrderSelections {
        &self.state
    }

    /// Register a callback invoked with the recomputed state after every mutation
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: Fn(&OrderSelections) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    pub fn update_entree(&mut self, item: MenuItem) {
        self.update(MenuCategory::Entree, item);
    }

    pub fn update_side_dish(&mut self, item: MenuItem) {
        self.update(MenuCategory::SideDish, item);
    }

    pub fn update_accompaniment(&mut self, item: MenuItem) {
        self.update(MenuCategory::Accompaniment, item);
    }

    pub fn update(&mut self, category: MenuCategory, item: MenuItem) {
        tracing::info!(
            order_id = %self.order_id,
            category = %category,
            item = %item.name,
            price = %item.price,
            "Selection changed"
        );

        let slot = match category {
            MenuCategory::Entree => &mut self.state.entree,
            MenuCategory::SideDish => &mut self.state.side_dish,
            MenuCategory::Accompaniment => &mut self.state.accompaniment,
        };
        *slot = Some(item);
        self.state.recompute_prices(self.tax_rate);
        self.publish();
    }

    /// Clear every selection and zero the prices. Safe to call repeatedly.
    pub fn reset_order(&mut self) {
        self.state = OrderSelections::default();
        self.state.recompute_prices(self.tax_rate);

        let previous = std::mem::replace(&mut self.order_id, Uuid::new_v4());
        tracing::info!(
            previous_order_id = %previous,
            order_id = %self.order_id,
            "Order reset"
        );
        self.publish();
    }

    pub fn checkout_summary(&self, currency_symbol: &str) -> CheckoutSummary {
        CheckoutSummary::from_selections(&self.state, currency_symbol)
    }

    fn publish(&self) {
        for observer in &self.observers {
            observer(&self.state);
        }
    }
}
