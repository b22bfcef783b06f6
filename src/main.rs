use std::env::{self, set_var};
use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{Method, StatusCode};
use axum::{routing::get, Router};
use lambda_http::{run, Error};
use tower_http::cors::CorsLayer;

pub mod config;
pub mod daily;
pub mod error;
pub mod export;
pub mod oura;
pub mod page;
pub mod passthrough;
pub mod utils;

pub use error::AResult;

use config::Config;
use oura::OuraClient;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub oura: OuraClient,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let oura = OuraClient::new(config.base_url.clone(), &config.api_key)?;
        Ok(Self {
            config: Arc::new(config),
            oura,
        })
    }
}

pub fn app(state: AppState) -> Router {
    let cors_origin = state.config.cors_origin.clone();
    let router = Router::new()
        .route("/health", get(health_check))
        .merge(page::router())
        .nest(
            "/api",
            passthrough::router()
                .merge(daily::router())
                .merge(export::router()),
        )
        .with_state(state);

    // Only needed when the page is hosted on another origin.
    match cors_origin {
        Some(origin) => router.layer(
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([Method::GET]),
        ),
        None => router,
    }
}

#[tokio::main]
async fn main() -> std::result::Result<(), Error> {
    // required to enable CloudWatch error logging by the runtime
    lambda_http::tracing::init_default_subscriber();

    if let Ok(path) = dotenvy::dotenv() {
        tracing::info!(path = %path.display(), "loaded environment file");
    }
    let config = Config::from_env()?;
    let port = config.port;
    let app = app(AppState::new(config)?);

    if env::var("AWS_LAMBDA_RUNTIME_API").is_ok() {
        // If you use API Gateway stages, the Rust Runtime will include the stage name
        // as part of the path that your application receives.
        // i.e with: `GET /test-stage/api/all-data` without: `GET /api/all-data`
        set_var("AWS_LAMBDA_HTTP_IGNORE_STAGE_IN_PATH", "true");
        return run(app).await;
    }

    let listener = tokio::net::TcpListener::bind(SocketAddr::from(([0, 0, 0, 0], port))).await?;
    tracing::info!("Server is running on http://localhost:{port}");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn health_check() -> StatusCode {
    StatusCode::OK
}
