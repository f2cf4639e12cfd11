//! Entry point for hoststats. Parses flags, builds the config and runs the
//! sampler once or in a timed loop.

use anyhow::Result;
use hoststats::cli::{parse_args, usage};
use hoststats::config::Config;
use hoststats::metrics::HostMetrics;
use hoststats::sampler::{run_loop, run_once};
use std::env;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout carries sample lines only.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let parsed = match parse_args(env::args()) {
        Ok(v) => v,
        Err(msg) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
    };
    if parsed.help {
        println!("{}", usage(&parsed.prog));
        return Ok(());
    }

    if !(parsed.cpu || parsed.ram || parsed.pid) {
        info!("no metric flags given, sampling cpu, ram and pid");
    }
    let config = Config::from_args(&parsed);

    info!("gathering statistics from the host");
    if let Some(path) = &config.file_name {
        info!("appending samples to {}", path.display());
    }

    let mut metrics = HostMetrics::new();
    match config.delay {
        Some(delay) => {
            info!("sampling in a loop with {delay} second delay");
            run_loop(&mut metrics, &config, delay).await
        }
        None => run_once(&mut metrics, &config),
    }
}
