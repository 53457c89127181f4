//! One-shot CLI commands: errors and output formatting
//!
//! Every formatter returns a `String` so commands stay testable; `--json`
//! switches to pretty-printed view models.

use chrono::{DateTime, Local};
use comfy_table::{Cell, Color, ContentArrangement, Row, Table};
use serde::Serialize;
use socialhub_core::format::{format_number, truncate};
use socialhub_core::models::{SocialPlatform, User};
use socialhub_core::views::accounts::{action_label, followers_label, last_sync_label, AccountsView};
use socialhub_core::views::analytics::AnalyticsView;
use socialhub_core::views::dashboard::{upcoming_post_date, DashboardView};
use socialhub_core::views::posts::{date_line, PostsView};
use socialhub_core::views::schedule::{scheduled_label, ScheduleView, EMPTY_MESSAGE};
use socialhub_core::views::StatCard;
use socialhub_core::CoreError;
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Not signed in")]
    NotSignedIn,

    #[error("Veuillez remplir tous les champs")]
    Rejected,

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Actionable hint printed under the error
    pub fn suggestion(&self) -> Option<String> {
        match self {
            CliError::NotSignedIn => {
                Some("Run `socialhub login <email> --password <password>` first".to_string())
            }
            CliError::Rejected => Some("Email and password must not be empty".to_string()),
            CliError::Core(e) => e.suggestion(),
            CliError::Other(_) => None,
        }
    }
}

/// Dashboard commands run only with a signed-in user
pub fn require_user(user: Option<User>) -> Result<User, CliError> {
    user.ok_or(CliError::NotSignedIn)
}

// ============================================================================
// Formatters
// ============================================================================

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

fn new_table(headers: &[&str], no_color: bool) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if no_color {
        table.set_header(headers.to_vec());
    } else {
        table.set_header(
            headers
                .iter()
                .map(|h| Cell::new(h).fg(Color::Cyan))
                .collect::<Vec<_>>(),
        );
    }
    table
}

fn platforms(list: &[SocialPlatform]) -> String {
    list.iter().map(|p| p.name()).collect::<Vec<_>>().join(", ")
}

fn cards(cards: &[StatCard]) -> String {
    cards
        .iter()
        .map(|c| format!("{:<26} {:>10}  {}", c.title, c.value, c.caption))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_user(user: &User, json: bool) -> String {
    if json {
        return to_json(user);
    }

    let mut lines = vec![];
    lines.push(format!("Name:     {}", user.name));
    lines.push(format!("Email:    {}", user.email));
    lines.push(format!("ID:       {}", user.id));
    lines.push(format!(
        "Since:    {}",
        user.created_at.with_timezone(&Local).format("%d/%m/%Y %H:%M")
    ));
    lines.join("\n")
}

pub fn format_posts(view: &PostsView, json: bool, no_color: bool) -> String {
    if json {
        return to_json(view);
    }

    if let Some(message) = view.empty_message {
        return format!("Aucune publication trouvée\n{}", message);
    }

    let mut table = new_table(
        &["Statut", "Contenu", "Plateformes", "Date", "Portée", "Engagements"],
        no_color,
    );
    for post in &view.posts {
        let (reach, engagements) = if post.shows_analytics() {
            (format_number(post.reach), format_number(post.engagements))
        } else {
            ("-".to_string(), "-".to_string())
        };
        table.add_row(Row::from(vec![
            post.status.label().to_string(),
            truncate(&post.content, 50),
            platforms(&post.platforms),
            date_line(post, &Local).unwrap_or_else(|| "-".to_string()),
            reach,
            engagements,
        ]));
    }

    format!(
        "{}\n{} sur {} publications ({})",
        table,
        view.posts.len(),
        view.total,
        view.filter.status
    )
}

pub fn format_schedule(
    view: &ScheduleView,
    now: &DateTime<Local>,
    json: bool,
    no_color: bool,
) -> String {
    if json {
        return to_json(view);
    }

    let mut out = cards(&view.cards);
    out.push_str("\n\n");

    if view.posts.is_empty() {
        out.push_str(EMPTY_MESSAGE);
        return out;
    }

    let mut table = new_table(&["Quand", "Contenu", "Plateformes", "Médias"], no_color);
    for post in &view.posts {
        table.add_row(Row::from(vec![
            scheduled_label(post, now),
            truncate(&post.content, 50),
            platforms(&post.platforms),
            post.media_label().unwrap_or_default(),
        ]));
    }
    out.push_str(&table.to_string());
    out
}

pub fn format_accounts(view: &AccountsView, json: bool, no_color: bool) -> String {
    if json {
        return to_json(view);
    }

    let mut table = new_table(
        &["Plateforme", "Compte", "Statut", "Followers", "Sync", "Action"],
        no_color,
    );
    for account in &view.accounts {
        let status = if no_color {
            Cell::new(account.status.label())
        } else {
            let color = if account.is_connected {
                Color::Green
            } else {
                Color::DarkGrey
            };
            Cell::new(account.status.label()).fg(color)
        };
        table.add_row(Row::from(vec![
            Cell::new(account.platform.name()),
            Cell::new(format!("{} ({})", account.display_name, account.username)),
            status,
            Cell::new(followers_label(account).unwrap_or_else(|| "-".to_string())),
            Cell::new(last_sync_label(account, &Local).unwrap_or_else(|| "-".to_string())),
            Cell::new(action_label(account)),
        ]));
    }

    format!("{}\n\n{}", cards(&view.cards), table)
}

pub fn format_analytics(view: &AnalyticsView, json: bool, no_color: bool) -> String {
    if json {
        return to_json(view);
    }

    let mut out = format!("Période: {}\n\n", view.period_label);
    for card in &view.metrics {
        let arrow = if card.metric.is_up() { "▲" } else { "▼" };
        out.push_str(&format!(
            "{:<16} {:>10}  {} {} vs période précédente\n",
            card.title,
            format_number(card.metric.value),
            arrow,
            card.metric.change_label()
        ));
    }

    let mut platforms = new_table(&["Plateforme", "Followers", "Portée", "Engagements"], no_color);
    for stats in &view.platforms {
        platforms.add_row(Row::from(vec![
            stats.platform.name().to_string(),
            format_number(stats.followers),
            format_number(stats.reach),
            format_number(stats.engagements),
        ]));
    }

    let mut top = new_table(&["Contenu", "Plateforme", "Date", "Portée", "Engagements"], no_color);
    for post in &view.top_posts {
        top.add_row(Row::from(vec![
            truncate(&post.content, 50),
            post.platform.name().to_string(),
            post.date.format("%d/%m/%Y").to_string(),
            format_number(post.reach),
            format_number(post.engagements),
        ]));
    }

    out.push_str(&format!(
        "\n{}\n\nPublications les Plus Performantes\n{}",
        platforms, top
    ));
    out
}

pub fn format_stats(view: &DashboardView, json: bool) -> String {
    if json {
        return to_json(view);
    }

    let mut lines = vec![
        "SocialHub - Vue d'ensemble".to_string(),
        "==========================".to_string(),
        String::new(),
        cards(&view.cards),
        String::new(),
        "Publications à venir:".to_string(),
    ];
    for post in &view.upcoming_posts {
        lines.push(format!(
            "  {}  {}",
            upcoming_post_date(post, &Local),
            truncate(&post.content, 50)
        ));
    }
    lines.join("\n")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use socialhub_core::models::PostStatus;
    use socialhub_core::views::analytics::AnalyticsPeriod;
    use socialhub_core::views::posts::{PostFilter, StatusFilter};

    #[test]
    fn test_require_user() {
        let err = require_user(None).unwrap_err();
        assert!(matches!(err, CliError::NotSignedIn));
        assert!(err.suggestion().unwrap().contains("socialhub login"));
    }

    #[test]
    fn test_posts_table_lists_matches() {
        let view = PostsView::load(PostFilter::new("", StatusFilter::Only(PostStatus::Draft)));
        let out = format_posts(&view, false, true);
        assert!(out.contains("Brouillon"));
        assert!(out.contains("1 sur"));
    }

    #[test]
    fn test_posts_empty_message() {
        let view = PostsView::load(PostFilter::new("zzzz", StatusFilter::All));
        let out = format_posts(&view, false, true);
        assert!(out.starts_with("Aucune publication trouvée"));
    }

    #[test]
    fn test_posts_json() {
        let view = PostsView::load(PostFilter::default());
        let out = format_posts(&view, true, false);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["total"], view.total);
    }

    #[test]
    fn test_accounts_table() {
        let out = format_accounts(&AccountsView::load(), false, true);
        assert!(out.contains("Comptes Connectés"));
        assert!(out.contains("Synchroniser"));
        assert!(out.contains("Connecter"));
    }

    #[test]
    fn test_analytics_period_label() {
        let view = AnalyticsView::load(AnalyticsPeriod::Quarter);
        let out = format_analytics(&view, false, true);
        assert!(out.contains(AnalyticsPeriod::Quarter.label()));
        assert!(out.contains("Publications les Plus Performantes"));
    }

    #[test]
    fn test_stats_summary() {
        let out = format_stats(&DashboardView::load(), false);
        assert!(out.contains("Publications Total"));
        assert!(out.contains("Publications à venir"));
    }
}
