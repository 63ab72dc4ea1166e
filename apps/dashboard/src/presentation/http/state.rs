use crate::{
    application::record_sample::use_case::RecordSampleUseCase,
    domain::{history::HistoryStore, metrics::MetricsSource},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub metrics_source: Arc<dyn MetricsSource>,
    pub history: Arc<HistoryStore>,
}

impl AppState {
    pub fn new(metrics_source: Arc<dyn MetricsSource>, history: Arc<HistoryStore>) -> Self {
        Self {
            metrics_source,
            history,
        }
    }

    pub fn record_sample(&self) -> RecordSampleUseCase {
        RecordSampleUseCase::new(self.metrics_source.clone(), self.history.clone())
    }
}
