use anyhow::Result;

pub mod checkout;
pub mod init;
pub mod menu;
pub mod order;
pub mod screens;

pub trait Command {
    fn execute(&self) -> Result<()>;
}

pub fn show_how_to_order() -> Result<()> {
    println!("🍱 Lunch Tray - Cafeteria Ordering");
    println!();
    println!("To get started:");
    println!("  🛒 lunch-tray order      # Build your lunch step by step");
    println!("  📋 lunch-tray menu       # See what is on the menu");
    println!("  🧾 lunch-tray checkout   # Price an order in one go");
    println!();
    println!("More:");
    println!("  🧭 lunch-tray screens    # How the order wizard flows");
    println!("  ⚙️  lunch-tray init       # Write a lunch-tray.toml to customize tax and menu");
    println!();
    println!("💡 Start with 'lunch-tray order'!");
    Ok(())
}
