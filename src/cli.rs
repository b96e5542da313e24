use std::path::PathBuf;

use clap::Parser;

use crate::config::Defaults;

/// Pick a country, currency and language from a terminal dialog.
#[derive(Debug, Clone, Parser)]
#[command(name = "region-selector", version, about)]
pub struct Cli {
    /// Path to the config file (default: <config dir>/region-selector/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the default country (ISO 3166-1 alpha-2 code, e.g. DE)
    #[arg(long, value_name = "CODE")]
    pub country: Option<String>,

    /// Override the default currency (ISO 4217 code, e.g. EUR)
    #[arg(long, value_name = "CODE")]
    pub currency: Option<String>,

    /// Override the default language (ISO 639-1 code, e.g. fr)
    #[arg(long, value_name = "CODE")]
    pub language: Option<String>,

    /// Print the final committed settings as JSON on exit
    #[arg(long)]
    pub print: bool,

    /// Write logs to this file (also settable via REGION_SELECTOR_LOG)
    #[arg(long, value_name = "PATH")]
    pub log: Option<PathBuf>,
}

impl Cli {
    /// Apply command-line overrides on top of the configured defaults.
    pub fn apply_overrides(&self, defaults: &mut Defaults) {
        if let Some(country) = &self.country {
            defaults.country = country.clone();
        }
        if let Some(currency) = &self.currency {
            defaults.currency = currency.clone();
        }
        if let Some(language) = &self.language {
            defaults.language = language.clone();
        }
    }
}
