//! Host metrics provider over sysinfo.

use sysinfo::{
    CpuRefreshKind, MemoryRefreshKind, ProcessRefreshKind, ProcessesToUpdate, RefreshKind, System,
};

/// Persistent [`System`] handle. Kept alive across passes so CPU utilization
/// has a previous refresh to diff against.
pub struct HostMetrics {
    sys: System,
}

impl HostMetrics {
    /// Build the handle and take the baseline reading. CPU utilization is
    /// computed between refreshes, so a sample taken immediately after
    /// startup may still read 0.0 (no earlier refresh window to diff
    /// against). Expected first-sample behavior, not an error.
    pub fn new() -> Self {
        let refresh_kind = RefreshKind::nothing()
            .with_cpu(CpuRefreshKind::everything())
            .with_memory(MemoryRefreshKind::everything());
        let sys = System::new_with_specifics(refresh_kind);
        Self { sys }
    }

    /// Global CPU utilization across all cores, in `[0, 100]`.
    pub fn cpu_usage(&mut self) -> f32 {
        self.sys.refresh_cpu_usage();
        self.sys.global_cpu_usage()
    }

    /// Host-wide used physical memory in bytes (total minus available).
    pub fn memory_used_bytes(&mut self) -> u64 {
        self.sys.refresh_memory();
        self.sys
            .total_memory()
            .saturating_sub(self.sys.available_memory())
    }

    /// Count of processes currently visible. Snapshot of the process table;
    /// the count may be stale by the time it is reported.
    pub fn process_count(&mut self) -> usize {
        self.sys.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing(),
        );
        self.sys.processes().len()
    }
}

impl Default for HostMetrics {
    fn default() -> Self {
        Self::new()
    }
}
