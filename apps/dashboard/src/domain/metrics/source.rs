use super::{errors::MetricsError, sample::Utilization};

/// A live source of host utilization.
///
/// Every call must reflect a fresh reading; implementations do not cache.
pub trait MetricsSource: Send + Sync {
    fn sample(&self) -> Result<Utilization, MetricsError>;
}
