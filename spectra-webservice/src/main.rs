use axum::{routing::get, Router};
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// Module declarations for our application structure
mod error;
mod handler;
mod model;
mod openapi;

use crate::openapi::ApiDoc;

#[tokio::main]
async fn main() {
    // Initialize tracing to capture logs from `log` crate and `tracing` calls.
    // Fallback to "info" level if RUST_LOG is not set.
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,spectra_webservice=debug,spectra_core=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer()) // Standard formatting layer
        .init();

    tracing::info!("Tracing initialized. Starting spectrum webservice...");

    // Define CORS layer
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build our application router
    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/", get(health_check))
        .route(
            "/spectrum",
            axum::routing::post(handler::compute_spectrum_handler),
        )
        .layer(TraceLayer::new_for_http()) // Layer for HTTP tracing
        .layer(cors); // Apply CORS middleware

    // Run the server
    let addr = SocketAddr::from(([0, 0, 0, 0], 3000));
    tracing::info!("Listening on {}", addr);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind to address {}: {}", addr, e);
            return;
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
    }
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is healthy", body = String)
    )
)]
pub async fn health_check() -> &'static str {
    tracing::info!("Health check endpoint hit");
    "Spectrum webservice is running!"
}
