//! Session gate middleware for `/dashboard` routes

use crate::state::AppState;
use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use socialhub_core::{guard, Access};
use tracing::debug;

/// Let the request through, or send it to the login page
pub async fn require_session(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();

    match guard(&path, &state.session) {
        Access::Granted => next.run(request).await,
        Access::Pending => (
            StatusCode::SERVICE_UNAVAILABLE,
            [(header::RETRY_AFTER, "1")],
            "Chargement...",
        )
            .into_response(),
        Access::Redirect(route) => {
            debug!(path = %path, to = route.path(), "Redirecting unauthenticated request");
            Redirect::to(route.path()).into_response()
        }
    }
}
