use tracing_subscriber::EnvFilter;

use cardiorisk_lambda::config::AppConfig;
use cardiorisk_lambda::router;
use cardiorisk_lambda::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!(
        high_risk_threshold = config.high_risk_threshold,
        "starting cardiorisk api"
    );

    let app = router(AppState::new(config));

    lambda_http::run(app).await.map_err(|e| eyre::eyre!(e))
}
