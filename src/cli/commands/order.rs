use anyhow::Result;

use super::Command;
use crate::app::LunchTrayApp;
use crate::config::LunchTrayConfig;

/// Interactive wizard over stdin/stdout
pub struct OrderCommand {
    config: LunchTrayConfig,
}

impl OrderCommand {
    pub fn new(config: &LunchTrayConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }
}

impl Command for OrderCommand {
    fn execute(&self) -> Result<()> {
        let mut app = LunchTrayApp::from_config(&self.config)?;
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        app.run(stdin.lock(), stdout.lock())?;
        println!("👋 Thanks for visiting Lunch Tray!");
        Ok(())
    }
}
