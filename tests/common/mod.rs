//! Shared helpers for integration tests.

use axum::Router;
use metrics_exporter_prometheus::PrometheusHandle;
use sms_frontend::api::{create_router, AppState};
use sms_frontend::classifier::ClassifierClient;
use sms_frontend::config::Config;

/// Serve a stub model service on an ephemeral port, returning its base URL.
pub async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind stub listener");
    let addr = listener.local_addr().expect("stub has no local addr");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("stub server died");
    });

    format!("http://{}", addr)
}

/// Build a front end config pointed at the given model host.
pub fn test_config(model_host: &str) -> Config {
    Config {
        model_host: model_host.to_string(),
        port: 8080,
        rust_log: "info".to_string(),
        http_timeout_ms: 5000,
        http_pool_size: 10,
    }
}

/// Build the front end router against the given model host.
pub fn frontend(model_host: &str, metrics: PrometheusHandle) -> Router {
    let config = test_config(model_host);
    let classifier = ClassifierClient::new(&config);

    create_router(AppState::new(config.model_host.clone(), classifier, metrics))
}
