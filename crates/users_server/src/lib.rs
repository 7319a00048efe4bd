//! Users API server library
//!
//! HTTP adapter around [`users_core::UserStore`]: routing, request/response
//! types, error mapping, and server startup.

pub mod config;
pub mod error;
pub mod handlers;
pub mod requests;
pub mod responses;
pub mod state;

pub use config::ServerConfig;
pub use error::{ApiError, ServerError, ServerResult};
pub use state::AppState;

/// API version reported by the root endpoint
pub const API_VERSION: &str = "1.0";

/// Build the application router with CORS and trace layers applied.
///
/// Split out from [`start_server`] so tests can drive the router without a
/// live socket.
pub fn app(state: AppState) -> axum::Router {
    use tower_http::trace::TraceLayer;

    let cors = cors_layer(&state.config.cors);

    handlers::routes()
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the users API server
pub async fn start_server(config: ServerConfig) -> ServerResult<()> {
    use std::net::SocketAddr;

    tracing::info!("Starting Users API server on {}", config.bind_address);

    // Parse address
    let addr: SocketAddr = config.bind_address.parse()?;

    // Seed the store and build the router
    let state = AppState::new(config);
    let app = app(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the CORS layer from config.
///
/// With credentials allowed, wildcard values must be mirrored back rather
/// than sent as a literal `*`, so `"*"` entries translate to
/// `mirror_request` instead of `Any`.
fn cors_layer(cors: &config::CorsConfig) -> tower_http::cors::CorsLayer {
    use axum::http::{HeaderValue, Method};
    use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

    let origin = if cors.allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::mirror_request()
    } else {
        AllowOrigin::list(
            cors.allowed_origins
                .iter()
                .filter_map(|o| o.parse::<HeaderValue>().ok()),
        )
    };

    let methods = if cors.allowed_methods.iter().any(|m| m == "*") {
        AllowMethods::mirror_request()
    } else {
        AllowMethods::list(
            cors.allowed_methods
                .iter()
                .filter_map(|m| m.parse::<Method>().ok()),
        )
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(methods)
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(cors.allow_credentials)
}
