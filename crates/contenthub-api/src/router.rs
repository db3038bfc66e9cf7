//! Route definitions for the ContentHub HTTP API.
//!
//! Routes are grouped by the role they require. Each protected group carries
//! its own `protect` route layer; groups are merged so that one path can mix
//! public reads with protected writes.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, patch, post},
};
use tower_http::trace::TraceLayer;

use contenthub_entity::user::UserRole;

use crate::handlers;
use crate::middleware;
use crate::middleware::ProtectState;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .merge(public_routes())
        .merge(admin_routes(&state))
        .merge(user_routes(&state))
        .layer(middleware::compression::build_compression_layer())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Reads, open to anyone.
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/parents", get(handlers::parents::list_parents))
        .route("/contenttags", get(handlers::tag::list_tags))
        .route(
            "/contentelements",
            get(handlers::element::list_elements),
        )
        .route(
            "/contentelements/{id}",
            get(handlers::element::get_element),
        )
        .route(
            "/contentelements/{id}/comments",
            get(handlers::comment::list_comments),
        )
}

/// Element writes, `admin` only.
fn admin_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/contentelements",
            post(handlers::element::create_element),
        )
        .route(
            "/contentelements/{id}",
            patch(handlers::element::update_element).delete(handlers::element::delete_element),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            ProtectState::new(state.jwt_decoder.clone(), UserRole::Admin),
            middleware::protect,
        ))
}

/// Comment writes, any authenticated user.
fn user_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/contentelements/{id}/comments",
            post(handlers::comment::add_comment),
        )
        .route(
            "/contentelements/{id}/comments/{cid}",
            patch(handlers::comment::update_comment).delete(handlers::comment::delete_comment),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            ProtectState::new(state.jwt_decoder.clone(), UserRole::User),
            middleware::protect,
        ))
}
