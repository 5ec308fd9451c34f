//! HTTP API handlers.

use std::time::Instant;

use axum::extract::State;
use axum::http::{header, StatusCode, Uri};
use axum::response::{Html, IntoResponse};
use axum::Json;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use tracing::info;

use crate::classifier::{ClassifierClient, Sms};
use crate::error::ClassifyError;
use crate::metrics;

/// Application state shared with handlers.
#[derive(Clone)]
pub struct AppState {
    /// Configured model host, shown on the index page.
    pub model_host: String,
    /// Upstream prediction client.
    pub classifier: ClassifierClient,
    /// Prometheus exposition handle for the /metrics route.
    pub metrics: PrometheusHandle,
}

impl AppState {
    /// Create new app state.
    pub fn new(model_host: String, classifier: ClassifierClient, metrics: PrometheusHandle) -> Self {
        Self {
            model_host,
            classifier,
            metrics,
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: &'static str,
}

const INDEX_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>SMS Classifier</title>
</head>
<body>
  <h1>SMS Classifier</h1>
  <p>Model host: <code>{model_host}</code></p>
  <form id="sms-form">
    <textarea id="sms-text" rows="4" cols="60" placeholder="Type an SMS..."></textarea>
    <br>
    <button type="submit">Classify</button>
  </form>
  <p id="sms-result"></p>
  <script>
    document.getElementById("sms-form").addEventListener("submit", async (e) => {
      e.preventDefault();
      // Relative URL: requires the trailing-slash path, hence the /sms redirect.
      const response = await fetch("", {
        method: "POST",
        headers: { "Content-Type": "application/json" },
        body: JSON.stringify({ sms: document.getElementById("sms-text").value }),
      });
      const out = document.getElementById("sms-result");
      if (response.ok) {
        const sms = await response.json();
        out.textContent = "Prediction: " + sms.result;
      } else {
        out.textContent = "Classification failed (" + response.status + ")";
      }
    });
  </script>
</body>
</html>
"#;

/// Redirect `/sms` to `/sms/` so relative requests from the page resolve
/// under the base path.
pub async fn redirect_to_slash(uri: Uri) -> impl IntoResponse {
    let path = uri.path();
    let target = if path.ends_with('/') {
        path.to_string()
    } else {
        format!("{}/", path)
    };

    (StatusCode::FOUND, [(header::LOCATION, target)])
}

/// Render the index page with the configured model host.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(INDEX_TEMPLATE.replace("{model_host}", &state.model_host))
}

/// Classify one SMS via the upstream model service.
pub async fn predict(
    State(state): State<AppState>,
    Json(mut sms): Json<Sms>,
) -> Result<Json<Sms>, ClassifyError> {
    info!("Requesting prediction for \"{}\" ...", sms.sms);

    metrics::inc_sms_requests();
    // Gauge is decremented on every exit path, including errors.
    let _in_flight = metrics::InFlightGuard::enter();

    let start = Instant::now();
    let outcome = state.classifier.predict(&sms).await;
    metrics::record_classification_duration(start);

    let label = outcome?;
    info!("Prediction: {}", label);

    sms.result = Some(label);
    Ok(Json(sms))
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

/// Prometheus exposition handler.
pub async fn export_metrics(State(state): State<AppState>) -> String {
    state.metrics.render()
}
