mod config;
mod error;
mod line_logger;
mod log_record;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info, LevelFilter};
use simple_logger::SimpleLogger;

#[tokio::main]
async fn main() -> Result<()> {
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .env()
        .init()?;

    let cli = config::Cli::parse();

    if let Some(timeout) = cli.timeout {
        debug!("--timeout={} parsed; line reads block indefinitely", timeout);
    }

    info!("Starting gridmeter-logger");

    line_logger::run(&cli.port)
        .await
        .with_context(|| format!("Logging from {} failed", cli.port))?;

    Ok(())
}
