//! Host stats sampler: reads CPU, RAM and process-count metrics from the
//! local machine and writes timestamped lines to stdout and/or an
//! append-only log file.

pub mod cli;
pub mod config;
pub mod metrics;
pub mod sampler;
pub mod types;
