//! cardiorisk-lambda
//!
//! HTTP boundary of the risk calculators, served on AWS Lambda through
//! `lambda_http`.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/calculators", get(routes::calculators::list_calculators))
        .route(
            "/calculators/{id}",
            post(routes::calculators::run_calculator),
        )
        .route("/calculate-score", post(routes::scores::calculate_score))
        .route("/calculate-score/legacy", post(routes::legacy::legacy_score))
        .route(
            "/calculate-score/lifetime",
            post(routes::lifetime::lifetime_risk),
        )
        .route("/widget-risk-data", post(routes::summary::risk_summary))
        .layer(
            ServiceBuilder::new()
                .layer(cors)
                .layer(axum_mw::from_fn(middleware::audit::audit_log)),
        )
        .with_state(state)
}
