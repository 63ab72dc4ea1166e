//! Host utilization readings and the values derived from them.

pub mod advisory;
pub mod errors;
pub mod sample;
pub mod source;

pub use advisory::ThresholdAdvisory;
pub use errors::MetricsError;
pub use sample::{Sample, Utilization};
pub use source::MetricsSource;
