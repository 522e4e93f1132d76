use anyhow::Result;
use clap::Parser;

use lunch_tray::cli::commands::{
    checkout::CheckoutCommand, init::InitCommand, menu::MenuCommand, order::OrderCommand,
    screens::ScreensCommand, show_how_to_order, Command,
};
use lunch_tray::cli::{Cli, Commands};
use lunch_tray::{config, init_telemetry, MenuCategory};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config()?;
    init_telemetry(&config.observability)?;

    match cli.command {
        // Default behavior: no subcommand - explain how to order
        None => show_how_to_order(),
        Some(Commands::Order) => OrderCommand::new(config).execute(),
        Some(Commands::Menu { json }) => MenuCommand::new(config)?.with_json(json).execute(),
        Some(Commands::Checkout {
            entree,
            side_dish,
            accompaniment,
            json,
        }) => CheckoutCommand::new(config)
            .with_selection(MenuCategory::Entree, entree)
            .with_selection(MenuCategory::SideDish, side_dish)
            .with_selection(MenuCategory::Accompaniment, accompaniment)
            .with_json(json)
            .execute(),
        Some(Commands::Screens { screen }) => ScreensCommand::new(screen).execute(),
        Some(Commands::Init { force, dry_run }) => InitCommand::new(force, dry_run).execute(),
    }
}
