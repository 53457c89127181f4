//! Posts page: search and status filter

use crate::error::CoreError;
use crate::fixtures;
use crate::format::format_day_month_time;
use crate::models::{Post, PostStatus};
use chrono::TimeZone;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub const SEARCH_PLACEHOLDER: &str = "Rechercher dans vos publications...";
pub const EMPTY_TITLE: &str = "Aucune publication trouvée";
const EMPTY_FILTERED: &str = "Aucune publication ne correspond à vos critères de recherche.";
const EMPTY_UNFILTERED: &str = "Commencez par créer votre première publication.";

/// Status dropdown value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(PostStatus),
}

impl StatusFilter {
    /// Dropdown entries in display order
    pub const OPTIONS: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Only(PostStatus::Published),
        StatusFilter::Only(PostStatus::Scheduled),
        StatusFilter::Only(PostStatus::Draft),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "Tous les statuts",
            StatusFilter::Only(status) => status.plural_label(),
        }
    }

    pub fn matches(&self, status: PostStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str("all"),
            StatusFilter::Only(status) => status.fmt(f),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(StatusFilter::All)
        } else {
            s.parse().map(StatusFilter::Only)
        }
    }
}

impl Serialize for StatusFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Search term AND status
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PostFilter {
    pub search: String,
    pub status: StatusFilter,
}

impl PostFilter {
    pub fn new(search: impl Into<String>, status: StatusFilter) -> Self {
        Self {
            search: search.into(),
            status,
        }
    }

    /// Whether the user narrowed the list at all
    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || self.status != StatusFilter::All
    }

    /// Case-insensitive substring match on content, combined with the status
    pub fn matches(&self, post: &Post) -> bool {
        let needle = self.search.to_lowercase();
        post.content.to_lowercase().contains(&needle) && self.status.matches(post.status)
    }
}

pub fn filter_posts(posts: &[Post], filter: &PostFilter) -> Vec<Post> {
    posts.iter().filter(|p| filter.matches(p)).cloned().collect()
}

/// Message under [`EMPTY_TITLE`] when nothing matches
pub fn empty_message(filter: &PostFilter) -> &'static str {
    if filter.is_active() {
        EMPTY_FILTERED
    } else {
        EMPTY_UNFILTERED
    }
}

/// Inert buttons at the bottom of a post card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostAction {
    Edit,
    Publish,
    PublishNow,
}

impl PostAction {
    pub fn label(&self) -> &'static str {
        match self {
            PostAction::Edit => "Modifier",
            PostAction::Publish => "Publier",
            PostAction::PublishNow => "Publier Maintenant",
        }
    }
}

pub fn actions(post: &Post) -> Vec<PostAction> {
    let mut actions = vec![PostAction::Edit];
    match post.status {
        PostStatus::Draft => actions.push(PostAction::Publish),
        PostStatus::Scheduled => actions.push(PostAction::PublishNow),
        PostStatus::Published | PostStatus::Failed => {}
    }
    actions
}

/// "Programmé pour 16 janv., 09:00" / "Publié le 15 janv., 10:30"
pub fn date_line<Tz: TimeZone>(post: &Post, tz: &Tz) -> Option<String> {
    if let Some(at) = post.scheduled_at {
        Some(format!(
            "Programmé pour {}",
            format_day_month_time(&at.with_timezone(tz))
        ))
    } else {
        post.published_at.map(|at| {
            format!(
                "Publié le {}",
                format_day_month_time(&at.with_timezone(tz))
            )
        })
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostsView {
    pub filter: PostFilter,
    pub total: usize,
    pub posts: Vec<Post>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<&'static str>,
}

impl PostsView {
    pub fn load(filter: PostFilter) -> Self {
        let all = fixtures::posts();
        let posts = filter_posts(&all, &filter);
        let empty_message = posts.is_empty().then(|| empty_message(&filter));
        Self {
            filter,
            total: all.len(),
            posts,
            empty_message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_no_match_with_all_is_empty() {
        let view = PostsView::load(PostFilter::new("zzz-nothing", StatusFilter::All));
        assert!(view.posts.is_empty());
        assert_eq!(view.empty_message, Some(EMPTY_FILTERED));
    }

    #[test]
    fn test_draft_filter_returns_the_draft() {
        let view = PostsView::load(PostFilter::new("", StatusFilter::Only(PostStatus::Draft)));
        assert_eq!(view.posts.len(), 1);
        assert_eq!(view.posts[0].id, "3");
    }

    #[test]
    fn test_search_is_case_insensitive_and_anded() {
        let posts = fixtures::posts();
        let hits = filter_posts(&posts, &PostFilter::new("MERCI", StatusFilter::All));
        assert_eq!(hits.len(), 1);

        let none = filter_posts(
            &posts,
            &PostFilter::new("merci", StatusFilter::Only(PostStatus::Scheduled)),
        );
        assert!(none.is_empty());
    }

    #[test]
    fn test_empty_message_depends_on_filter() {
        assert_eq!(empty_message(&PostFilter::default()), EMPTY_UNFILTERED);
        assert_eq!(
            empty_message(&PostFilter::new("", StatusFilter::Only(PostStatus::Draft))),
            EMPTY_FILTERED
        );
    }

    #[test]
    fn test_status_filter_parse() {
        assert_eq!("all".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!(
            " Draft ".parse::<StatusFilter>().unwrap(),
            StatusFilter::Only(PostStatus::Draft)
        );
        assert!("archived".parse::<StatusFilter>().is_err());
        assert_eq!(StatusFilter::OPTIONS[3].label(), "Brouillons");
    }

    #[test]
    fn test_actions_and_date_line() {
        let posts = fixtures::posts();
        assert_eq!(actions(&posts[0]), vec![PostAction::Edit]);
        assert_eq!(
            actions(&posts[1]),
            vec![PostAction::Edit, PostAction::PublishNow]
        );
        assert_eq!(actions(&posts[2]), vec![PostAction::Edit, PostAction::Publish]);

        assert_eq!(
            date_line(&posts[0], &Utc).as_deref(),
            Some("Publié le 15 janv., 10:30")
        );
        assert_eq!(
            date_line(&posts[1], &Utc).as_deref(),
            Some("Programmé pour 16 janv., 09:00")
        );
        assert_eq!(date_line(&posts[2], &Utc), None);
    }
}
