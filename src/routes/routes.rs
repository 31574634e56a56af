use crate::configuration::Settings;
use crate::formatter::{AlertPayload, format_payload};
use crate::traits::NotificationSender;
use axum::body::Bytes;
use axum::extract::State;
use axum::{Router, routing};
use axum_prometheus::PrometheusMetricLayer;
use std::sync::Arc;
use tracing::{debug, error};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub chat_id: String,
    pub notifier: Arc<dyn NotificationSender>,
}

impl AppState {
    pub fn new(settings: &Settings, notifier: Arc<dyn NotificationSender>) -> Self {
        Self {
            chat_id: settings.chat_id.clone(),
            notifier,
        }
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", routing::get(probe).post(glitchtip_webhook))
        .route("/health", routing::get(|| async { "up" }))
        .with_state(state)
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

/// The full router served by the binary, with the Prometheus exporter on
/// top of the relay routes. Installs the global metrics recorder, so it
/// must be built at most once per process.
pub fn app_with_metrics(state: AppState) -> Router {
    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

    app(state)
        .route(
            "/metrics",
            routing::get(|| async move { metric_handle.render() }),
        )
        .layer(prometheus_layer)
}

// GET probes carry no payload and are only acknowledged
async fn probe() -> &'static str {
    debug!("Received GET request at root '/'");
    "OK"
}

// - POST /
//
// Top-level fail-safe boundary: whatever goes wrong while parsing or
// formatting is logged and swallowed, the webhook sender always gets a 200.
#[tracing::instrument(
    name = "glitchtip_webhook",
    skip(state, body),
    fields(
        request_id = %Uuid::new_v4(),
    )
)]
async fn glitchtip_webhook(State(state): State<AppState>, body: Bytes) -> &'static str {
    debug!("Received POST request at root '/'");

    let payload: AlertPayload = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(e) => {
            error!("Error processing GlitchTip payload: {:?}", e);
            return "OK";
        }
    };

    if let Some(message) = format_payload(&payload) {
        if let Err(e) = state.notifier.send(&state.chat_id, &message).await {
            error!("Failed to deliver the Telegram message: {:?}", e);
        }
    }

    "OK"
}
