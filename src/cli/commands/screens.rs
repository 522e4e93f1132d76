use anyhow::Result;

use super::Command;
use crate::navigation::Screen;

pub struct ScreensCommand {
    pub screen: Option<Screen>,
}

impl ScreensCommand {
    pub fn new(screen: Option<Screen>) -> Self {
        Self { screen }
    }

    pub fn describe(screen: Screen) -> String {
        let actions = match screen {
            Screen::Start => "start order -> ENTREE",
            Screen::Entree => "next -> SIDE_DISH, cancel -> START, back",
            Screen::SideDish => "next -> ACCOMPANIMENT, cancel -> START, back",
            Screen::Accompaniment => "next -> CHECKOUT, cancel -> START, back",
            Screen::Checkout => "submit -> START, cancel -> START, back",
        };
        format!("{:<14} {:<22} {actions}", screen.route(), screen.title())
    }
}

impl Command for ScreensCommand {
    fn execute(&self) -> Result<()> {
        match self.screen {
            Some(screen) => println!("{}", Self::describe(screen)),
            None => {
                println!("🧭 Order wizard screens (cancel and submit clear the order)");
                println!();
                for screen in Screen::ALL {
                    println!("  {}", Self::describe(screen));
                }
            }
        }
        Ok(())
    }
}
