use anyhow::Result;
use config::{Config, Environment, File};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::menu::Catalog;
use crate::order::TAX_RATE;

/// Default configuration file name, looked up in the working directory
pub const CONFIG_FILE: &str = "lunch-tray.toml";

/// Main configuration structure for Lunch Tray
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LunchTrayConfig {
    /// Price computation and display
    pub pricing: PricingConfig,
    /// Where the menu comes from
    pub catalog: CatalogConfig,
    /// Logging settings
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PricingConfig {
    /// Tax applied to the item subtotal
    pub tax_rate: Decimal,
    /// Prefix used when rendering prices
    pub currency_symbol: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// TOML menu file; the built-in menu is used when unset
    pub path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    /// Log level used when RUST_LOG is not set
    pub log_level: String,
    /// Emit JSON log lines instead of human readable ones
    pub json_logs: bool,
}

impl Default for LunchTrayConfig {
    fn default() -> Self {
        Self {
            pricing: PricingConfig {
                tax_rate: TAX_RATE,
                currency_symbol: "$".to_string(),
            },
            catalog: CatalogConfig::default(),
            observability: ObservabilityConfig {
                log_level: "warn".to_string(),
                json_logs: false,
            },
        }
    }
}

impl LunchTrayConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Default values
    /// 2. Configuration file (lunch-tray.toml)
    /// 3. Environment variables (prefixed with LUNCH_TRAY__)
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        if path.exists() {
            builder = builder.add_source(File::from(path));
        }

        // LUNCH_TRAY__PRICING__TAX_RATE=0.1
        builder = builder.add_source(
            Environment::with_prefix("LUNCH_TRAY")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config: LunchTrayConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.pricing.tax_rate < Decimal::ZERO {
            anyhow::bail!("pricing.tax_rate must not be negative, got {}", self.pricing.tax_rate);
        }
        Ok(())
    }

    /// The menu named by `catalog.path`, or the built-in one
    pub fn catalog(&self) -> Result<Catalog> {
        match &self.catalog.path {
            Some(path) => Ok(Catalog::load(path)?),
            None => Ok(Catalog::builtin()),
        }
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_content = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_content)?;
        Ok(())
    }

    /// Load .env file if it exists
    pub fn load_env_file() -> Result<()> {
        if Path::new(".env").exists() {
            dotenvy::dotenv()?;
            tracing::info!("Loaded environment variables from .env file");
        }
        Ok(())
    }
}

/// Global configuration instance
static CONFIG: std::sync::LazyLock<Result<LunchTrayConfig, anyhow::Error>> =
    std::sync::LazyLock::new(|| {
        // Load .env file first
        let _ = LunchTrayConfig::load_env_file();
        LunchTrayConfig::load()
    });

/// Get the global configuration
pub fn config() -> Result<&'static LunchTrayConfig> {
    CONFIG
        .as_ref()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))
}
