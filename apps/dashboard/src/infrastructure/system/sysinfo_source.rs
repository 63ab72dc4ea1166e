use crate::domain::metrics::{MetricsError, MetricsSource, Utilization};
use std::sync::Mutex;
use sysinfo::{CpuRefreshKind, MemoryRefreshKind, RefreshKind, System};

/// Reads host utilization through `sysinfo`.
///
/// CPU usage is a delta against the previous refresh, so the handle is kept
/// between calls and primed once at construction.
pub struct SysinfoMetricsSource {
    sys: Mutex<System>,
}

impl SysinfoMetricsSource {
    pub fn new() -> Self {
        let mut sys = System::new_with_specifics(
            RefreshKind::nothing()
                .with_cpu(CpuRefreshKind::nothing().with_cpu_usage())
                .with_memory(MemoryRefreshKind::nothing().with_ram()),
        );
        sys.refresh_cpu_usage();
        sys.refresh_memory();

        tracing::debug!(cpus = sys.cpus().len(), "system metrics source primed");
        Self {
            sys: Mutex::new(sys),
        }
    }
}

impl Default for SysinfoMetricsSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsSource for SysinfoMetricsSource {
    fn sample(&self) -> Result<Utilization, MetricsError> {
        let mut sys = self.sys.lock().map_err(|_| {
            MetricsError::MetricsUnavailable("system handle poisoned by a previous panic".into())
        })?;

        sys.refresh_cpu_usage();
        sys.refresh_memory();

        if sys.cpus().is_empty() {
            return Err(MetricsError::MetricsUnavailable(
                "no CPUs reported by the operating system".into(),
            ));
        }

        let total = sys.total_memory();
        if total == 0 {
            return Err(MetricsError::MetricsUnavailable(
                "total memory reported as zero".into(),
            ));
        }

        let used = total.saturating_sub(sys.available_memory());
        let mem_percent = round_tenth((used as f64 / total as f64 * 100.0) as f32);
        let cpu_percent = round_tenth(sys.global_cpu_usage());

        Ok(Utilization::new(cpu_percent, mem_percent))
    }
}

fn round_tenth(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}
