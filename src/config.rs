//! Immutable runtime configuration, built once at startup from the parsed
//! flags and handed to the sampler by reference.

use crate::cli::ParsedArgs;
use crate::types::MetricKind;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub cpu: bool,
    pub ram: bool,
    pub pid: bool,
    /// Append formatted lines to this file in addition to stdout.
    pub file_name: Option<PathBuf>,
    /// Seconds between sampling passes; `None` means sample exactly once.
    pub delay: Option<u64>,
}

impl Config {
    /// Build the runtime config. When no metric flag was given, all three
    /// kinds are sampled.
    pub fn from_args(parsed: &ParsedArgs) -> Self {
        let none_selected = !(parsed.cpu || parsed.ram || parsed.pid);
        Self {
            cpu: parsed.cpu || none_selected,
            ram: parsed.ram || none_selected,
            pid: parsed.pid || none_selected,
            file_name: parsed.file_name.as_ref().map(PathBuf::from),
            delay: parsed.delay,
        }
    }

    /// Metric kinds selected for this run, in sampling order (CPU, RAM, PID).
    pub fn selected(&self) -> Vec<MetricKind> {
        let mut kinds = Vec::with_capacity(3);
        if self.cpu {
            kinds.push(MetricKind::Cpu);
        }
        if self.ram {
            kinds.push(MetricKind::Ram);
        }
        if self.pid {
            kinds.push(MetricKind::Pid);
        }
        kinds
    }
}
