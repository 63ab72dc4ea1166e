use crate::{
    application::record_sample::dto::DashboardView,
    presentation::http::{errors::AppError, state::AppState},
};
use axum::{extract::State, response::Html};

const DASHBOARD_TEMPLATE: &str = include_str!("../templates/dashboard.html");

/// `GET /`: sample, record, and render the current reading.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let view = state.record_sample().dashboard().await?;
    Ok(Html(render(&view)))
}

fn render(view: &DashboardView) -> String {
    let message = view
        .message
        .map(|msg| format!(r#"<div class="advisory">{}</div>"#, escape_html(msg)))
        .unwrap_or_default();

    DASHBOARD_TEMPLATE
        .replace("{{cpu_metric}}", &format!("{:.1}", view.cpu_metric))
        .replace("{{mem_metric}}", &format!("{:.1}", view.mem_metric))
        .replace("{{message}}", &message)
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
