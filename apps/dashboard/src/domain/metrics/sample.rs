use chrono::{DateTime, Local};

/// Wall-clock format used for history labels.
pub const TIMESTAMP_FORMAT: &str = "%H:%M:%S";

/// Instantaneous CPU and memory utilization, both in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Utilization {
    pub cpu_percent: f32,
    pub mem_percent: f32,
}

impl Utilization {
    /// Readings outside `[0, 100]` are clamped; a NaN reading becomes `0`.
    pub fn new(cpu_percent: f32, mem_percent: f32) -> Self {
        Self {
            cpu_percent: clamp_percent(cpu_percent),
            mem_percent: clamp_percent(mem_percent),
        }
    }
}

fn clamp_percent(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// One reading as stored in the rolling history.
///
/// Fields are private so a recorded sample cannot change after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    cpu_percent: f32,
    mem_percent: f32,
    timestamp: String,
}

impl Sample {
    pub fn new(utilization: Utilization, timestamp: impl Into<String>) -> Self {
        Self {
            cpu_percent: utilization.cpu_percent,
            mem_percent: utilization.mem_percent,
            timestamp: timestamp.into(),
        }
    }

    /// Stamp a reading with the given local time, formatted as `HH:MM:SS`.
    pub fn at(utilization: Utilization, time: DateTime<Local>) -> Self {
        Self::new(utilization, time.format(TIMESTAMP_FORMAT).to_string())
    }

    /// Stamp a reading with the current local time.
    pub fn now(utilization: Utilization) -> Self {
        Self::at(utilization, Local::now())
    }

    pub fn cpu_percent(&self) -> f32 {
        self.cpu_percent
    }

    pub fn mem_percent(&self) -> f32 {
        self.mem_percent
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn utilization(&self) -> Utilization {
        Utilization {
            cpu_percent: self.cpu_percent,
            mem_percent: self.mem_percent,
        }
    }
}
