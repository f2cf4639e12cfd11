//! Metric kinds, readings and line formatting.
//! Keep this module minimal and stable — it defines the output line format.

use std::fmt;

/// The three metric kinds the sampler knows how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Cpu,
    Ram,
    Pid,
}

impl MetricKind {
    /// Fixed display label, trailing colon included.
    pub fn label(self) -> &'static str {
        match self {
            MetricKind::Cpu => "CPU usage:",
            MetricKind::Ram => "RAM usage:",
            MetricKind::Pid => "Total PIDs:",
        }
    }
}

/// A single reading: CPU is a percentage, RAM is bytes, PID is a count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    Percent(f32),
    Bytes(u64),
    Count(usize),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Percent(v) => write!(f, "{v:.1}"),
            MetricValue::Bytes(v) => write!(f, "{v}"),
            MetricValue::Count(v) => write!(f, "{v}"),
        }
    }
}

/// Render one output line: `<HH:MM:SS> <label> <value>`, fields joined by a
/// single space, no trailing punctuation.
pub fn format_line(kind: MetricKind, value: MetricValue, timestamp: &str) -> String {
    format!("{timestamp} {} {value}", kind.label())
}
