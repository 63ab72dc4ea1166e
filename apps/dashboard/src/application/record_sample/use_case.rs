use super::dto::{DashboardView, MetricsResponse};
use crate::domain::{
    history::HistoryStore,
    metrics::{MetricsError, MetricsSource, Sample, ThresholdAdvisory},
};
use std::sync::Arc;

/// Take a fresh reading and append it to the shared history.
///
/// Each execution samples independently; two requests never share a reading.
pub struct RecordSampleUseCase {
    source: Arc<dyn MetricsSource>,
    history: Arc<HistoryStore>,
}

impl RecordSampleUseCase {
    pub fn new(source: Arc<dyn MetricsSource>, history: Arc<HistoryStore>) -> Self {
        Self { source, history }
    }

    /// Sample, derive the advisory from that reading alone, then record it.
    pub async fn dashboard(&self) -> Result<DashboardView, MetricsError> {
        let utilization = self.source.sample()?;
        let advisory = ThresholdAdvisory::evaluate(&utilization);
        if advisory.is_some() {
            tracing::warn!(
                cpu = utilization.cpu_percent,
                mem = utilization.mem_percent,
                "utilization above advisory threshold"
            );
        }

        self.history.record(Sample::now(utilization)).await;

        Ok(DashboardView {
            cpu_metric: utilization.cpu_percent,
            mem_metric: utilization.mem_percent,
            message: advisory.map(|a| a.message()),
        })
    }

    /// Sample, record, and return the reading with the full history.
    pub async fn metrics(&self) -> Result<MetricsResponse, MetricsError> {
        let utilization = self.source.sample()?;
        let history = self
            .history
            .record_and_snapshot(Sample::now(utilization))
            .await;

        Ok(MetricsResponse::new(
            utilization.cpu_percent,
            utilization.mem_percent,
            history,
        ))
    }
}
