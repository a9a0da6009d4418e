//! Command-line flags.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, StartRoute};

#[derive(Debug, Parser)]
#[command(name = "product-dashboard", version, about = "Terminal dashboard for a product catalog")]
pub struct Cli {
    /// Path to config file (default: platform config dir)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the catalog API base URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Override the number of records per page
    #[arg(long, value_name = "N")]
    pub page_size: Option<u32>,

    /// Route to open on startup
    #[arg(long, value_enum)]
    pub route: Option<StartRoute>,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Apply flag overrides on top of the loaded config.
    ///
    /// The caller re-validates afterwards.
    pub fn apply(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        if let Some(page_size) = self.page_size {
            config.api.page_size = page_size;
        }
        if let Some(route) = self.route {
            config.ui.start_route = route;
        }
    }
}
