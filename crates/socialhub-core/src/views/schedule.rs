//! Schedule page: scheduled posts and their relative dates

use super::StatCard;
use crate::fixtures;
use crate::format::format_scheduled;
use crate::models::{PostStatus, ScheduledPost};
use chrono::{DateTime, TimeZone};
use serde::Serialize;

pub const EMPTY_TITLE: &str = "Aucune publication programmée";
pub const EMPTY_MESSAGE: &str = "Commencez par planifier votre première publication";

/// Quick action buttons (inert)
pub const QUICK_ACTIONS: [&str; 4] = [
    "Nouvelle Publication",
    "Calendrier",
    "Planification en Masse",
    "Modifier Planning",
];

/// Posts still waiting to go out
pub fn upcoming(posts: &[ScheduledPost]) -> Vec<&ScheduledPost> {
    posts
        .iter()
        .filter(|p| p.status == PostStatus::Scheduled)
        .collect()
}

/// Upcoming posts falling on the calendar day of `now`
pub fn today<'a, Tz: TimeZone>(
    posts: &'a [ScheduledPost],
    now: &DateTime<Tz>,
) -> Vec<&'a ScheduledPost> {
    let day = now.date_naive();
    upcoming(posts)
        .into_iter()
        .filter(|p| p.scheduled_at.with_timezone(&now.timezone()).date_naive() == day)
        .collect()
}

/// "Aujourd'hui à 09:00", "Demain à 14:30", "jeudi 18 janvier à 10:00"
pub fn scheduled_label<Tz: TimeZone>(post: &ScheduledPost, now: &DateTime<Tz>) -> String {
    format_scheduled(&post.scheduled_at.with_timezone(&now.timezone()), now)
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleView {
    pub cards: Vec<StatCard>,
    pub posts: Vec<ScheduledPost>,
}

impl ScheduleView {
    pub fn load<Tz: TimeZone>(now: &DateTime<Tz>) -> Self {
        let all = fixtures::scheduled_posts();
        let today_count = today(&all, now).len();
        let upcoming: Vec<ScheduledPost> = upcoming(&all).into_iter().cloned().collect();

        // "Cette semaine" repeats the upcoming count
        let cards = vec![
            StatCard::new(
                "Publications Aujourd'hui",
                today_count.to_string(),
                "Programmé pour aujourd'hui",
            ),
            StatCard::new(
                "Publications à Venir",
                upcoming.len().to_string(),
                "Total programmé",
            ),
            StatCard::new(
                "Cette Semaine",
                upcoming.len().to_string(),
                "Publications planifiées",
            ),
        ];

        Self {
            cards,
            posts: upcoming,
        }
    }
}
