use glitchtip_relay::configuration::Settings;
use glitchtip_relay::notifications::TelegramNotifier;
use glitchtip_relay::routes::{AppState, app_with_metrics};
use glitchtip_relay::telemetry::{get_subscriber, init_subscriber};
use glitchtip_relay::traits::NotificationSender;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("glitchtip-relay".into(), "info".into());
    init_subscriber(subscriber);

    info!("Starting glitchtip-relay");

    let settings = Settings::from_env()?;
    let notifier: Arc<dyn NotificationSender> =
        Arc::new(TelegramNotifier::from_settings(&settings)?);

    let router = app_with_metrics(AppState::new(&settings, notifier));

    let addr = format!("0.0.0.0:{}", settings.port);
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router.into_make_service()).await?;

    Ok(())
}
