//! Dashboard overview page

use super::StatCard;
use crate::fixtures;
use crate::format::{format_date, format_long_datetime, format_number};
use crate::models::{DashboardStats, RecentPost, UpcomingPost};
use chrono::TimeZone;
use serde::Serialize;

/// Quick action buttons (inert)
pub const QUICK_ACTIONS: [&str; 3] = [
    "Nouvelle Publication",
    "Voir les Commentaires",
    "Voir les Analytics",
];

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub stats: DashboardStats,
    pub cards: Vec<StatCard>,
    pub recent_posts: Vec<RecentPost>,
    pub upcoming_posts: Vec<UpcomingPost>,
}

impl DashboardView {
    pub fn load() -> Self {
        let stats = fixtures::DASHBOARD_STATS;
        Self {
            cards: stat_cards(&stats),
            stats,
            recent_posts: fixtures::recent_posts(),
            upcoming_posts: fixtures::upcoming_posts(),
        }
    }
}

/// The four headline cards
pub fn stat_cards(stats: &DashboardStats) -> Vec<StatCard> {
    vec![
        StatCard::new(
            "Publications Total",
            format_number(stats.total_posts),
            "+12 ce mois",
        ),
        StatCard::new(
            "Followers Total",
            format_number(stats.total_followers),
            format!("+{}% ce mois", stats.growth_rate),
        ),
        StatCard::new(
            "Portée",
            format_number(stats.total_reach),
            "30 derniers jours",
        ),
        StatCard::new(
            "Engagements",
            format_number(stats.total_engagements),
            "30 derniers jours",
        ),
    ]
}

/// "15/01/2024" in the viewer's timezone
pub fn recent_post_date<Tz: TimeZone>(post: &RecentPost, tz: &Tz) -> String {
    format_date(&post.scheduled_at.with_timezone(tz))
}

/// "mardi 16 janvier à 09:00" in the viewer's timezone
pub fn upcoming_post_date<Tz: TimeZone>(post: &UpcomingPost, tz: &Tz) -> String {
    format_long_datetime(&post.scheduled_at.with_timezone(tz))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_stat_cards() {
        let view = DashboardView::load();
        assert_eq!(view.cards.len(), 4);
        assert_eq!(view.cards[0].value, "156");
        assert_eq!(view.cards[1].value, "12\u{202f}847");
        assert_eq!(view.cards[1].caption, "+12.5% ce mois");
        assert_eq!(view.cards[3].caption, "30 derniers jours");
    }

    #[test]
    fn test_dates_render_in_given_timezone() {
        let view = DashboardView::load();
        let first_recent = &view.recent_posts[0];
        assert_eq!(
            recent_post_date(first_recent, &Utc),
            format_date(&first_recent.scheduled_at)
        );

        let upcoming = &view.upcoming_posts[0];
        assert!(upcoming_post_date(upcoming, &Utc).contains(" à "));
    }
}
