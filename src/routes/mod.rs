// src/routes/mod.rs
pub mod chat;

use crate::state::SharedState;
use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post},
};
use chat::{chat_handler, health_handler};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/", get(health_handler))
        .route("/chat", post(chat_handler))
        .layer(TraceLayer::new_for_http())
}

/// Router with state and the cross-origin policy applied.
pub fn create_app(state: SharedState) -> Router {
    let cors = cors_layer(&state.config.allowed_origins);
    create_router().with_state(state).layer(cors)
}

/// Allow-listed origins only, with credentials. Credentials rule out `*`,
/// so "any method / any header" is expressed by mirroring the preflight.
pub fn cors_layer(origins: &[HeaderValue]) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins.iter().cloned()))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
