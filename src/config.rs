//! Configuration and CLI argument handling

use clap::Parser;

use crate::state::Item;

/// CLI argument parsing structure
#[derive(Parser, Debug, Clone)]
#[command(name = "shopping-cart")]
#[command(about = "A state-managed shopping cart served over HTTP")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Items offered on the shelf, comma separated
    #[arg(
        short,
        long,
        value_delimiter = ',',
        default_value = "apple,banana,bread,milk,eggs"
    )]
    pub shelf: Vec<String>,

    /// How many cart updates a slow subscriber may fall behind
    #[arg(long, default_value = "64")]
    pub event_buffer: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Shelf entries with blanks dropped
    pub fn shelf_items(&self) -> Vec<Item> {
        self.shelf
            .iter()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .map(Item::from)
            .collect()
    }
}
