// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::indexing_slicing
    )
)]

mod app;

use app::Args;
use clap::Parser;
use color_eyre::eyre::Result;
use site_cms::config::load_config;
use site_cms::logging::{init_logging, LogConfig, LOG_FILENAME};
use tracing::debug;

#[tokio::main]
async fn main() -> Result<()> {
    // Install color-eyre error hooks for colored error output
    color_eyre::install()?;

    // Parse CLI arguments first (before logging, so we can use log config)
    let args = Args::parse();

    let mut config = load_config(args.config.as_deref())?;
    args.apply_to(&mut config);

    let log_config = LogConfig::from(&config.logging);
    let log_file = log_config.log_dir.join(LOG_FILENAME);
    if let Err(e) = init_logging(log_config) {
        eprintln!();
        eprintln!("Error: Failed to initialize logging: {e}");
        eprintln!("Logs: {}", log_file.display());
        eprintln!();
        return Err(e);
    }
    debug!(
        "Using data dir {} and public dir {}",
        config.data_dir.display(),
        config.public_dir.display()
    );

    let output = app::run(args.command, &config).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
