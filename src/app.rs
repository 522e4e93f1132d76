// Orchestration layer: wires the Screen Sequencer to the Order State Holder
// and renders each screen as text for the terminal front end.

use std::io::{BufRead, Write};

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::LunchTrayConfig;
use crate::menu::{format_price, Catalog, MenuCategory};
use crate::navigation::{NavigationAction, NavigationError, Screen, ScreenSequencer};
use crate::order::OrderStateHolder;
use crate::telemetry::create_order_span;

/// Everything the user can do on a screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Navigate(NavigationAction),
    /// Pick the option at this zero-based position on the current screen
    Select(usize),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Navigation(#[from] NavigationError),
    #[error("Screen {screen} has no menu to choose from")]
    NothingToSelect { screen: Screen },
    #[error("There is no {category} option {number}; choose 1 to {available}")]
    OptionOutOfRange {
        category: MenuCategory,
        number: usize,
        available: usize,
    },
}

pub struct LunchTrayApp {
    catalog: Catalog,
    order: OrderStateHolder,
    sequencer: ScreenSequencer,
    currency_symbol: String,
}

impl LunchTrayApp {
    pub fn new(catalog: Catalog, tax_rate: Decimal, currency_symbol: &str) -> Self {
        Self {
            catalog,
            order: OrderStateHolder::with_tax_rate(tax_rate),
            sequencer: ScreenSequencer::new(),
            currency_symbol: currency_symbol.to_string(),
        }
    }

    pub fn from_config(config: &LunchTrayConfig) -> anyhow::Result<Self> {
        let catalog = config.catalog()?;
        Ok(Self::new(
            catalog,
            config.pricing.tax_rate,
            &config.pricing.currency_symbol,
        ))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn order(&self) -> &OrderStateHolder {
        &self.order
    }

    /// Lets a renderer subscribe to order changes
    pub fn order_mut(&mut self) -> &mut OrderStateHolder {
        &mut self.order
    }

    pub fn sequencer(&self) -> &ScreenSequencer {
        &self.sequencer
    }

    pub fn current_screen(&self) -> Screen {
        self.sequencer.current()
    }

    pub fn dispatch(&mut self, action: Action) -> Result<(), AppError> {
        match action {
            Action::Select(index) => self.select(index),
            Action::Navigate(navigation) => self.navigate(navigation),
        }
    }

    fn select(&mut self, index: usize) -> Result<(), AppError> {
        let screen = self.current_screen();
        let category = screen
            .category()
            .ok_or(AppError::NothingToSelect { screen })?;
        let options = self.catalog.items(category);
        let item = options.get(index).ok_or(AppError::OptionOutOfRange {
            category,
            number: index.saturating_add(1),
            available: options.len(),
        })?;

        self.order.update(category, item.clone());
        Ok(())
    }

    fn navigate(&mut self, action: NavigationAction) -> Result<(), AppError> {
        let span = create_order_span("navigate", self.order.order_id());
        let _guard = span.enter();

        let resets_order = self.sequencer.handle(action)?.resets_order;
        if resets_order {
            if action == NavigationAction::Confirm {
                let state = self.order.current_state();
                info!(
                    entree = state.entree.as_ref().map(|i| i.name.as_str()),
                    side_dish = state.side_dish.as_ref().map(|i| i.name.as_str()),
                    accompaniment = state.accompaniment.as_ref().map(|i| i.name.as_str()),
                    order_total = %state.order_total_price,
                    "Order submitted"
                );
            }
            self.order.reset_order();
        }
        Ok(())
    }

    /// Text for the current screen, including the keys that are accepted
    pub fn render(&self) -> String {
        let screen = self.current_screen();
        let mut out = format!("== {} ==\n", screen.title());

        match screen {
            Screen::Start => out.push_str("Welcome to the Lunch Tray cafeteria.\n"),
            Screen::Checkout => {
                out.push_str(&self.order.checkout_summary(&self.currency_symbol).render());
            }
            Screen::Entree | Screen::SideDish | Screen::Accompaniment => {
                if let Some(category) = screen.category() {
                    self.render_options(category, &mut out);
                }
            }
        }

        out.push('\n');
        let keys: Vec<String> = self
            .sequencer
            .available_actions()
            .into_iter()
            .map(|action| {
                let (key, label) = action_key(action);
                format!("[{key}] {label}")
            })
            .collect();
        out.push_str(&keys.join("  "));
        out.push_str("  [q] Quit\n");
        out
    }

    fn render_options(&self, category: MenuCategory, out: &mut String) {
        let selected = self.order.current_state().selection(category);
        for (number, item) in self.catalog.items(category).iter().enumerate() {
            let marker = if selected.map(|s| s.name == item.name).unwrap_or(false) {
                "(*)"
            } else {
                "( )"
            };
            out.push_str(&format!(
                "{marker} {}) {:<28} {:>8}\n      {}\n",
                number + 1,
                item.name,
                format_price(item.price, &self.currency_symbol),
                item.description
            ));
        }
        out.push_str(&format!(
            "\nSubtotal: {}\n",
            format_price(self.order.current_state().item_total_price, &self.currency_symbol)
        ));
    }

    /// Interactive session: one command per input line until `q` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> anyhow::Result<()> {
        write!(output, "{}> ", self.render())?;
        output.flush()?;

        for line in input.lines() {
            let line = line?;
            let command = line.trim();
            if command.eq_ignore_ascii_case("q") || command.eq_ignore_ascii_case("quit") {
                break;
            }

            match self.parse_command(command) {
                Some(Action::Select(index)) => {
                    if let Err(e) = self.dispatch(Action::Select(index)) {
                        writeln!(output, "{e}")?;
                    }
                }
                Some(Action::Navigate(action)) => {
                    if self.sequencer.available_actions().contains(&action) {
                        self.dispatch(Action::Navigate(action))?;
                    } else {
                        writeln!(output, "That is not available on this screen.")?;
                    }
                }
                None => {
                    warn!(input = %command, "Unrecognized command");
                    writeln!(output, "Unrecognized input '{command}'. Use the keys in brackets.")?;
                }
            }

            write!(output, "\n{}> ", self.render())?;
            output.flush()?;
        }

        writeln!(output)?;
        Ok(())
    }

    fn parse_command(&self, command: &str) -> Option<Action> {
        if let Ok(number) = command.parse::<usize>() {
            // Options are shown starting at 1
            return number.checked_sub(1).map(Action::Select);
        }

        let action = match command.to_ascii_lowercase().as_str() {
            "n" | "next" => NavigationAction::Next,
            "b" | "back" => NavigationAction::Back,
            "c" | "cancel" => NavigationAction::Cancel,
            "s" | "start" | "submit" => match self.current_screen() {
                Screen::Checkout => NavigationAction::Confirm,
                _ => NavigationAction::StartOrder,
            },
            _ => return None,
        };
        Some(Action::Navigate(action))
    }
}

fn action_key(action: NavigationAction) -> (&'static str, &'static str) {
    match action {
        NavigationAction::StartOrder => ("s", "Start Order"),
        NavigationAction::Next => ("n", "Next"),
        NavigationAction::Back => ("b", "Back"),
        NavigationAction::Cancel => ("c", "Cancel"),
        NavigationAction::Confirm => ("s", "Submit"),
    }
}
