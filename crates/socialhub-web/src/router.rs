//! Web router using Axum

use crate::api;
use crate::gate::require_session;
use crate::state::AppState;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

/// Create the web router
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let dashboard = Router::new()
        .route("/dashboard", get(api::dashboard))
        .route("/dashboard/posts", get(api::posts))
        .route("/dashboard/schedule", get(api::schedule))
        .route("/dashboard/analytics", get(api::analytics))
        .route("/dashboard/accounts", get(api::accounts))
        .route("/dashboard/settings", get(api::settings_page))
        .route("/dashboard/settings/profile", post(api::save_profile))
        .route(
            "/dashboard/settings/notifications",
            post(api::save_notifications),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_session,
        ));

    Router::new()
        .route("/", get(api::index))
        .route("/auth/login", get(api::login_form).post(api::login))
        .route("/auth/register", get(api::register_form).post(api::register))
        .route("/auth/logout", post(api::logout))
        .route("/auth/session", get(api::session_info))
        .route("/api/navigation", get(api::navigation))
        .route("/api/health", get(api::health))
        .route("/api/events", get(api::events))
        .merge(dashboard)
        .layer(cors)
        .with_state(state)
}
