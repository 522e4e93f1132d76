// Lunch Tray Library - cafeteria order wizard
// This exposes the core components for testing and integration

pub mod app;
pub mod cli;
pub mod config;
pub mod menu;
pub mod navigation;
pub mod order;
pub mod telemetry;

// Re-export key types for easy access
pub use app::{Action, AppError, LunchTrayApp};
pub use crate::config::{config, LunchTrayConfig};
pub use menu::{format_price, Catalog, CatalogError, MenuCategory, MenuItem};
pub use navigation::{NavigationAction, NavigationError, Screen, ScreenSequencer, TransitionRecord};
pub use order::{CheckoutSummary, OrderSelections, OrderStateHolder, TAX_RATE};
pub use telemetry::{create_order_span, init_telemetry};
