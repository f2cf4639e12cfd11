//! Sampling passes and emission. One pass reads every selected metric in a
//! fixed order (CPU, RAM, PID) and emits one line per metric.

use crate::config::Config;
use crate::metrics::HostMetrics;
use crate::types::{format_line, MetricKind, MetricValue};
use anyhow::{Context, Result};
use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use tokio::time::{sleep, Duration};
use tracing::info;

fn read(metrics: &mut HostMetrics, kind: MetricKind) -> MetricValue {
    match kind {
        MetricKind::Cpu => MetricValue::Percent(metrics.cpu_usage()),
        MetricKind::Ram => MetricValue::Bytes(metrics.memory_used_bytes()),
        MetricKind::Pid => MetricValue::Count(metrics.process_count()),
    }
}

/// Write one line to the configured destinations. The log file is opened in
/// append mode per call and the handle dropped before returning; nothing
/// stays open between emissions. A file error is fatal, never a silent
/// fallback to stdout-only.
pub fn emit(line: &str, config: &Config) -> Result<()> {
    if let Some(path) = &config.file_name {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening {} for append", path.display()))?;
        writeln!(file, "{line}").with_context(|| format!("appending to {}", path.display()))?;
    }
    println!("{line}");
    Ok(())
}

/// One sampling pass over the selected metric kinds. Each line carries its
/// own timestamp, taken at read time.
pub fn run_once(metrics: &mut HostMetrics, config: &Config) -> Result<()> {
    for kind in config.selected() {
        let now = Local::now().format("%H:%M:%S").to_string();
        let line = format_line(kind, read(metrics, kind), &now);
        emit(&line, config)?;
    }
    Ok(())
}

/// Sample forever with `delay` seconds between passes. Ctrl-C ends the loop
/// with a clean shutdown; a pass in progress completes before shutdown.
pub async fn run_loop(metrics: &mut HostMetrics, config: &Config, delay: u64) -> Result<()> {
    let interrupt = tokio::signal::ctrl_c();
    tokio::pin!(interrupt);
    loop {
        run_once(metrics, config)?;
        tokio::select! {
            _ = sleep(Duration::from_secs(delay)) => {}
            _ = &mut interrupt => {
                info!("interrupted by user, shutting down");
                return Ok(());
            }
        }
    }
}
