use super::helpers::{
    FailingMetricsSource, FakeMetricsSource, expect_status, get, read_text, send, spawn_app_with,
};
use axum::http::{Request, StatusCode, header};
use dashboard::domain::metrics::{Utilization, advisory::HIGH_USAGE_MESSAGE};

#[tokio::test]
async fn dashboard_renders_current_values_and_records_sample() {
    let app = spawn_app_with(FakeMetricsSource::steady(33.3, 44.4));

    let res = expect_status(send(&app.app, get("/")).await, StatusCode::OK).await;
    let content_type = res
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let html = read_text(res).await;

    assert!(content_type.starts_with("text/html"));
    assert!(html.contains("33.3%"));
    assert!(html.contains("44.4%"));
    assert!(!html.contains(HIGH_USAGE_MESSAGE));

    let snapshot = app.history.snapshot().await;
    assert_eq!(snapshot.cpu, vec![33.3]);
    assert_eq!(snapshot.mem, vec![44.4]);
}

#[tokio::test]
async fn dashboard_shows_advisory_above_threshold() {
    let app = spawn_app_with(FakeMetricsSource::steady(85.0, 10.0));

    let res = expect_status(send(&app.app, get("/")).await, StatusCode::OK).await;
    let html = read_text(res).await;

    assert!(html.contains(HIGH_USAGE_MESSAGE));
}

#[tokio::test]
async fn dashboard_omits_advisory_at_threshold() {
    let app = spawn_app_with(FakeMetricsSource::steady(80.0, 80.0));

    let res = expect_status(send(&app.app, get("/")).await, StatusCode::OK).await;
    let html = read_text(res).await;

    assert!(!html.contains(HIGH_USAGE_MESSAGE));
}

#[tokio::test]
async fn dashboard_and_metrics_append_in_arrival_order() {
    let app = spawn_app_with(FakeMetricsSource::sequence(
        vec![Utilization::new(1.0, 2.0), Utilization::new(3.0, 4.0)],
        Utilization::new(0.0, 0.0),
    ));

    expect_status(send(&app.app, get("/")).await, StatusCode::OK).await;
    expect_status(send(&app.app, get("/metrics")).await, StatusCode::OK).await;

    let snapshot = app.history.snapshot().await;
    assert_eq!(snapshot.cpu, vec![1.0, 3.0]);
    assert_eq!(snapshot.mem, vec![2.0, 4.0]);
}

#[tokio::test]
async fn dashboard_fails_with_500_when_metrics_unavailable() {
    let app = spawn_app_with(FailingMetricsSource);

    expect_status(
        send(&app.app, get("/")).await,
        StatusCode::INTERNAL_SERVER_ERROR,
    )
    .await;
    assert!(app.history.is_empty().await);
}

#[tokio::test]
async fn inbound_request_id_is_echoed() {
    let app = spawn_app_with(FakeMetricsSource::steady(1.0, 1.0));

    let req = Request::builder()
        .method("GET")
        .uri("/")
        .header("x-request-id", "trace-abc-123")
        .body(axum::body::Body::empty())
        .expect("failed to build request");
    let res = expect_status(send(&app.app, req).await, StatusCode::OK).await;

    assert_eq!(
        res.headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok()),
        Some("trace-abc-123")
    );
}
