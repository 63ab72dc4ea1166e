use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsError {
    /// The operating system metrics interface produced no usable reading.
    #[error("Metrics unavailable: {0}")]
    MetricsUnavailable(String),
}
