//! JSON handlers

use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use chrono::Local;
use serde::{Deserialize, Serialize};
use socialhub_core::models::{NotificationSettings, ProfileSettings, SettingsForm, User};
use socialhub_core::views::accounts::AccountsView;
use socialhub_core::views::analytics::{AnalyticsPeriod, AnalyticsView};
use socialhub_core::views::dashboard::DashboardView;
use socialhub_core::views::landing::LandingView;
use socialhub_core::views::posts::{PostFilter, PostsView, StatusFilter};
use socialhub_core::views::schedule::ScheduleView;
use socialhub_core::views::settings::{self, SaveReceipt};
use socialhub_core::{Route, NAVIGATION};
use tracing::{debug, info};

/// Shown for any rejected login or registration
pub const EMPTY_FIELDS_ERROR: &str = "Veuillez remplir tous les champs";

/// Handler error rendered as `{"error": "..."}`
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(serde_json::json!({ "error": self.message })),
        )
            .into_response()
    }
}

/// Landing page with links to login and register
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let view = LandingView::load(&state.session);

    let links: String = view
        .links
        .iter()
        .map(|link| {
            format!(
                r#"<a class="cta" href="{}">{}</a>"#,
                escape_html(link.href),
                escape_html(link.label)
            )
        })
        .collect();
    let features: String = view
        .features
        .iter()
        .map(|f| {
            format!(
                r#"<div class="feature"><div class="icon">{}</div><h3>{}</h3><p>{}</p></div>"#,
                escape_html(f.icon),
                escape_html(f.title),
                escape_html(f.description)
            )
        })
        .collect();

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="fr">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
        * {{ margin: 0; padding: 0; box-sizing: border-box; }}
        body {{ font-family: system-ui, -apple-system, sans-serif; background: #eef2ff; padding: 4rem 1rem; }}
        .hero {{ text-align: center; max-width: 720px; margin: 0 auto; }}
        h1 {{ font-size: 3.5rem; color: #111827; margin-bottom: 1.5rem; }}
        .hero p {{ font-size: 1.25rem; color: #4b5563; margin-bottom: 2rem; }}
        .cta {{ display: inline-block; margin: 0 0.5rem; padding: 0.75rem 2rem; border-radius: 8px;
                border: 2px solid #2563eb; color: #2563eb; font-weight: bold; text-decoration: none; }}
        .cta:first-child {{ background: #2563eb; color: white; }}
        .features {{ display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; max-width: 960px; margin: 5rem auto 0; }}
        .feature {{ background: white; padding: 2rem; border-radius: 8px; box-shadow: 0 2px 8px rgba(0,0,0,0.1); }}
        .icon {{ font-size: 2.5rem; margin-bottom: 1rem; }}
    </style>
</head>
<body>
    <div class="hero">
        <h1>{title}</h1>
        <p>{pitch}</p>
        <div>{links}</div>
    </div>
    <div class="features">{features}</div>
</body>
</html>"#,
        title = escape_html(view.title),
        pitch = escape_html(view.pitch),
        links = links,
        features = features,
    ))
}

/// Escape text for HTML element content and double-quoted attributes
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

pub async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "initialized": state.session.is_initialized(),
        "authenticated": state.session.is_authenticated(),
    }))
}

// ===================
// Session
// ===================

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SessionInfo {
    pub authenticated: bool,
    pub loading: bool,
    pub user: Option<User>,
}

#[derive(Debug, Serialize)]
pub struct AuthForm {
    pub route: &'static str,
    pub title: &'static str,
    pub fields: &'static [&'static str],
}

pub async fn session_info(State(state): State<AppState>) -> Json<SessionInfo> {
    Json(SessionInfo {
        authenticated: state.session.is_authenticated(),
        loading: state.session.is_loading(),
        user: state.session.user(),
    })
}

pub async fn login_form() -> Json<AuthForm> {
    Json(AuthForm {
        route: Route::Login.path(),
        title: "Se connecter",
        fields: &["email", "password"],
    })
}

pub async fn register_form() -> Json<AuthForm> {
    Json(AuthForm {
        route: Route::Register.path(),
        title: "S'inscrire",
        fields: &["name", "email", "password"],
    })
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<User>, ApiError> {
    if state.session.login(&body.email, &body.password).await {
        signed_in_user(&state)
    } else {
        debug!("Login rejected");
        Err(ApiError::bad_request(EMPTY_FIELDS_ERROR))
    }
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<Json<User>, ApiError> {
    if state
        .session
        .register(&body.name, &body.email, &body.password)
        .await
    {
        signed_in_user(&state)
    } else {
        debug!("Registration rejected");
        Err(ApiError::bad_request(EMPTY_FIELDS_ERROR))
    }
}

// A concurrent logout can clear the user between sign-in and this read
fn signed_in_user(state: &AppState) -> Result<Json<User>, ApiError> {
    state
        .session
        .user()
        .map(Json)
        .ok_or_else(|| ApiError::bad_request("Session fermée pendant la connexion"))
}

pub async fn logout(State(state): State<AppState>) -> StatusCode {
    state.session.logout();
    info!("Signed out over HTTP");
    StatusCode::NO_CONTENT
}

// ===================
// Dashboard pages
// ===================

#[derive(Debug, Serialize)]
pub struct NavEntry {
    pub path: &'static str,
    pub label: &'static str,
}

pub async fn navigation() -> Json<Vec<NavEntry>> {
    Json(
        NAVIGATION
            .iter()
            .map(|route| NavEntry {
                path: route.path(),
                label: route.label(),
            })
            .collect(),
    )
}

pub async fn dashboard() -> Json<DashboardView> {
    Json(DashboardView::load())
}

#[derive(Debug, Default, Deserialize)]
pub struct PostsQuery {
    pub search: Option<String>,
    pub status: Option<String>,
}

pub async fn posts(Query(query): Query<PostsQuery>) -> Result<Json<PostsView>, ApiError> {
    let status = match query.status.as_deref() {
        Some(raw) => raw
            .parse::<StatusFilter>()
            .map_err(|e| ApiError::bad_request(e.to_string()))?,
        None => StatusFilter::All,
    };
    let filter = PostFilter::new(query.search.unwrap_or_default(), status);
    Ok(Json(PostsView::load(filter)))
}

pub async fn schedule() -> Json<ScheduleView> {
    Json(ScheduleView::load(&Local::now()))
}

#[derive(Debug, Default, Deserialize)]
pub struct AnalyticsQuery {
    pub period: Option<String>,
}

pub async fn analytics(
    Query(query): Query<AnalyticsQuery>,
) -> Result<Json<AnalyticsView>, ApiError> {
    let period = match query.period.as_deref() {
        Some(raw) => raw
            .parse::<AnalyticsPeriod>()
            .map_err(|e| ApiError::bad_request(e.to_string()))?,
        None => AnalyticsPeriod::default(),
    };
    Ok(Json(AnalyticsView::load(period)))
}

pub async fn accounts() -> Json<AccountsView> {
    Json(AccountsView::load())
}

pub async fn settings_page(State(state): State<AppState>) -> Json<SettingsForm> {
    Json(state.settings())
}

pub async fn save_profile(
    State(state): State<AppState>,
    Json(profile): Json<ProfileSettings>,
) -> Json<SaveReceipt> {
    let receipt = settings::save_profile(&profile, state.latency).await;
    state.update_settings(|form| form.profile = profile);
    Json(receipt)
}

pub async fn save_notifications(
    State(state): State<AppState>,
    Json(notifications): Json<NotificationSettings>,
) -> Json<SaveReceipt> {
    let receipt = settings::save_notifications(&notifications, state.latency).await;
    state.update_settings(|form| form.notifications = notifications);
    Json(receipt)
}

pub async fn events(State(state): State<AppState>) -> impl IntoResponse {
    crate::sse::create_sse_stream(state.session.event_bus().clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<script>alert("x")</script> & co"#),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt; &amp; co"
        );
        assert_eq!(escape_html("S'inscrire"), "S'inscrire");
    }
}
