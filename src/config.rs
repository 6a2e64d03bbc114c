use clap::Parser;
use tracing::Level;
use crate::core::domain::Configuration;

#[derive(Parser, Debug, Clone)]
#[command(name = "inventory")]
#[command(about = "HTTP service tracking the available copies of a book catalog")]
pub struct ServerConfig {
    /// Host address to bind to
    #[arg(short = 'H', long, default_value = "127.0.0.1", env = "INVENTORY_HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "8080", env = "INVENTORY_PORT")]
    pub port: u16,

    /// Library branch served by this instance
    #[arg(short, long, default_value = "main", env = "INVENTORY_BRANCH")]
    pub branch: String,

    /// Accept new books whose id is already in the catalog; lookups resolve to the first one
    #[arg(long, default_value = "false", env = "INVENTORY_ALLOW_DUPLICATE_IDS")]
    pub allow_duplicate_ids: bool,

    /// Maximum number of copies a single book may reach through returns
    #[arg(long, env = "INVENTORY_MAX_QUANTITY")]
    pub max_quantity: Option<i64>,

    /// Start without the sample books
    #[arg(long, default_value = "false", env = "INVENTORY_EMPTY_CATALOG")]
    pub empty_catalog: bool,

    /// Log level (trace, debug, info, warn, error), overridden by RUST_LOG
    #[arg(long, default_value = "info", env = "INVENTORY_LOG_LEVEL")]
    pub log_level: Level,

    /// Human readable logs instead of JSON lines
    #[arg(long, default_value = "false", env = "INVENTORY_PRETTY_LOGS")]
    pub pretty_logs: bool,

    /// Serve requests through the AWS Lambda runtime instead of binding a socket
    #[arg(long, default_value = "false", env = "INVENTORY_LAMBDA")]
    pub lambda: bool,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn configuration(&self) -> Configuration {
        Configuration::new(self.branch.as_str())
            .with_unique_ids(!self.allow_duplicate_ids)
            .with_max_quantity(self.max_quantity)
            .with_seed_catalog(!self.empty_catalog)
    }
}
