use super::sample::Utilization;

/// Utilization above this value (exclusive) triggers the advisory.
pub const ADVISORY_THRESHOLD_PERCENT: f32 = 80.0;

pub const HIGH_USAGE_MESSAGE: &str = "High CPU or Memory Detected, scale up!!!";

/// Inline warning shown when the current reading crosses the threshold.
///
/// Derived from a single reading and never stored alongside the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdAdvisory {
    message: &'static str,
}

impl ThresholdAdvisory {
    pub fn evaluate(utilization: &Utilization) -> Option<Self> {
        let exceeded = utilization.cpu_percent > ADVISORY_THRESHOLD_PERCENT
            || utilization.mem_percent > ADVISORY_THRESHOLD_PERCENT;

        exceeded.then_some(Self {
            message: HIGH_USAGE_MESSAGE,
        })
    }

    pub fn message(&self) -> &'static str {
        self.message
    }
}
