use crate::domain::history::HistorySnapshot;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Payload of `GET /metrics`.
///
/// Exported as a TypeScript binding for clients of the endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MetricsResponse {
    pub cpu_metric: f32,
    pub mem_metric: f32,
    pub cpu_history: Vec<f32>,
    pub mem_history: Vec<f32>,
    pub time_history: Vec<String>,
}

impl MetricsResponse {
    pub fn new(cpu_metric: f32, mem_metric: f32, history: HistorySnapshot) -> Self {
        Self {
            cpu_metric,
            mem_metric,
            cpu_history: history.cpu,
            mem_history: history.mem,
            time_history: history.time,
        }
    }
}

/// Values embedded in the dashboard page.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub cpu_metric: f32,
    pub mem_metric: f32,
    pub message: Option<&'static str>,
}
