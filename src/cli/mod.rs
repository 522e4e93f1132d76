use clap::{Parser, Subcommand};

use crate::navigation::Screen;

pub mod commands;

#[derive(Parser)]
#[command(name = "lunch-tray")]
#[command(about = "Cafeteria lunch ordering in your terminal")]
#[command(long_about = "Lunch Tray walks you through choosing an entree, a side dish and an \
                       accompaniment, then shows the checkout summary with tax. Get started with \
                       'lunch-tray order'.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive order (primary command)
    Order,
    /// Show the menu with prices
    Menu {
        /// Print the catalog as JSON
        #[arg(long, help = "Print the catalog as JSON instead of a table")]
        json: bool,
    },
    /// Price an order without the interactive wizard
    Checkout {
        /// Entree name, e.g. "Mushroom Pasta"
        #[arg(long, help = "Entree to include (by name, case-insensitive)")]
        entree: Option<String>,
        /// Side dish name
        #[arg(long, help = "Side dish to include (by name, case-insensitive)")]
        side_dish: Option<String>,
        /// Accompaniment name
        #[arg(long, help = "Accompaniment to include (by name, case-insensitive)")]
        accompaniment: Option<String>,
        /// Print the summary as JSON
        #[arg(long, help = "Print the order summary as JSON")]
        json: bool,
    },
    /// List the wizard screens and the actions each one accepts
    Screens {
        /// Only describe this screen (route name such as SIDE_DISH)
        screen: Option<Screen>,
    },
    /// Write a default lunch-tray.toml in the current directory
    Init {
        /// Overwrite an existing configuration file
        #[arg(long, help = "Overwrite an existing lunch-tray.toml")]
        force: bool,
        /// Show what would be written without creating the file
        #[arg(long, help = "Show what would be written without making changes")]
        dry_run: bool,
    },
}
