use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use dashboard::{
    domain::{
        history::HistoryStore,
        metrics::{MetricsError, MetricsSource, Utilization},
    },
    presentation::http::{routes::create_router, state::AppState},
};
use serde::de::DeserializeOwned;
use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};
use tower::ServiceExt;

/// Replays queued readings, then repeats the fallback forever.
pub struct FakeMetricsSource {
    queued: Mutex<VecDeque<Utilization>>,
    fallback: Utilization,
}

impl FakeMetricsSource {
    pub fn steady(cpu: f32, mem: f32) -> Self {
        Self::sequence(Vec::new(), Utilization::new(cpu, mem))
    }

    pub fn sequence(readings: Vec<Utilization>, fallback: Utilization) -> Self {
        Self {
            queued: Mutex::new(readings.into()),
            fallback,
        }
    }
}

impl MetricsSource for FakeMetricsSource {
    fn sample(&self) -> Result<Utilization, MetricsError> {
        let mut queued = self.queued.lock().expect("fake source lock");
        Ok(queued.pop_front().unwrap_or(self.fallback))
    }
}

pub struct FailingMetricsSource;

impl MetricsSource for FailingMetricsSource {
    fn sample(&self) -> Result<Utilization, MetricsError> {
        Err(MetricsError::MetricsUnavailable(
            "metrics interface offline".into(),
        ))
    }
}

pub struct TestApp {
    pub app: Router,
    pub history: Arc<HistoryStore>,
}

pub fn spawn_app_with(source: impl MetricsSource + 'static) -> TestApp {
    let history = Arc::new(HistoryStore::new());
    let state = AppState::new(Arc::new(source), history.clone());

    TestApp {
        app: create_router(state),
        history,
    }
}

pub fn spawn_app() -> TestApp {
    spawn_app_with(FakeMetricsSource::steady(25.0, 50.0))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request")
}

pub async fn send(app: &Router, req: Request<Body>) -> axum::response::Response {
    app.clone().oneshot(req).await.expect("request failed")
}

pub async fn read_json<T: DeserializeOwned>(res: axum::response::Response) -> T {
    let bytes = to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    serde_json::from_slice(&bytes).expect("failed to parse json")
}

pub async fn read_text(res: axum::response::Response) -> String {
    let bytes = to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    String::from_utf8(bytes.to_vec()).expect("invalid utf8")
}

pub async fn expect_status(
    res: axum::response::Response,
    expected: StatusCode,
) -> axum::response::Response {
    let actual = res.status();

    if actual == expected {
        return res;
    }

    let body = read_text(res).await;
    panic!(
        "HTTP status mismatch. Expected {}, got {}. Response body: {}",
        expected, actual, body
    );
}
