use anyhow::{bail, Result};
use std::path::PathBuf;

use super::Command;
use crate::config::{LunchTrayConfig, CONFIG_FILE};

/// Writes the default configuration, refusing to overwrite without `--force`
pub struct InitCommand {
    pub path: PathBuf,
    pub force: bool,
    pub dry_run: bool,
}

impl InitCommand {
    pub fn new(force: bool, dry_run: bool) -> Self {
        Self {
            path: PathBuf::from(CONFIG_FILE),
            force,
            dry_run,
        }
    }

    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.path = path;
        self
    }
}

impl Command for InitCommand {
    fn execute(&self) -> Result<()> {
        let config = LunchTrayConfig::default();

        if self.dry_run {
            println!("📝 Would write {}:", self.path.display());
            println!();
            print!("{}", toml::to_string_pretty(&config)?);
            return Ok(());
        }

        if self.path.exists() && !self.force {
            bail!(
                "{} already exists. Use --force to overwrite it.",
                self.path.display()
            );
        }

        config.save_to_file(&self.path)?;
        tracing::info!(path = %self.path.display(), "Wrote default configuration");
        println!("✅ Wrote {}", self.path.display());
        Ok(())
    }
}
