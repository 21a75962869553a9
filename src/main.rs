//! Address Book - Main entry point
//!
//! Reads commands from stdin and prints replies to stdout. Logs go to stderr.

use address_book::cli::{self, Session};
use address_book::Config;
use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();

    let default_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Initialize logging (stderr only to keep stdout for replies)
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!(
                page_size = cfg.page_size,
                empty_input = ?cfg.empty_input_policy,
                "Configuration loaded successfully"
            );
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let mut session = Session::new(config);
    cli::run_stdio(&mut session).await?;

    Ok(())
}
