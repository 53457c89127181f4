//! Sample data embedded in the binary
//!
//! Every page renders from these records. Nothing mutates them; pages clone
//! what they need into their own state.

use crate::models::{
    AccountStatus, DashboardStats, MetricTrend, PlatformStats, Post, PostStatus, RecentPost,
    ScheduledPost, SocialAccount, SocialPlatform, TopPost, Trend, UpcomingPost,
};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use once_cell::sync::Lazy;

use crate::models::SocialPlatform::{Facebook, Instagram, LinkedIn, Twitter, YouTube};

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub static DASHBOARD_STATS: DashboardStats = DashboardStats {
    total_posts: 156,
    total_followers: 12847,
    total_reach: 89432,
    total_engagements: 3421,
    recent_posts: 8,
    growth_rate: 12.5,
};

static RECENT_POSTS: Lazy<Vec<RecentPost>> = Lazy::new(|| {
    vec![
        RecentPost {
            id: 1,
            content: "Découvrez nos nouvelles fonctionnalités ! 🚀 #Innovation".to_string(),
            platform: Facebook,
            reach: 2340,
            engagements: 156,
            scheduled_at: at(2024, 1, 15, 10, 30),
        },
        RecentPost {
            id: 2,
            content: "Partage d'un article sur les tendances 2024 📈".to_string(),
            platform: LinkedIn,
            reach: 1890,
            engagements: 92,
            scheduled_at: at(2024, 1, 14, 15, 20),
        },
        RecentPost {
            id: 3,
            content: "Behind the scenes de notre équipe 🎬".to_string(),
            platform: Instagram,
            reach: 3156,
            engagements: 284,
            scheduled_at: at(2024, 1, 14, 12, 0),
        },
    ]
});

static UPCOMING_POSTS: Lazy<Vec<UpcomingPost>> = Lazy::new(|| {
    vec![
        UpcomingPost {
            id: 4,
            content: "Annonce importante demain ! Stay tuned 👀".to_string(),
            scheduled_at: at(2024, 1, 16, 9, 0),
            platforms: vec![Facebook, LinkedIn],
        },
        UpcomingPost {
            id: 5,
            content: "Flashback Friday - nos meilleurs moments !".to_string(),
            scheduled_at: at(2024, 1, 17, 8, 0),
            platforms: vec![Instagram, Twitter],
        },
    ]
});

static POSTS: Lazy<Vec<Post>> = Lazy::new(|| {
    vec![
        Post {
            id: "1".to_string(),
            content: "Découvrez nos nouvelles fonctionnalités révolutionnaire ! 🚀 #Innovation #Tech"
                .to_string(),
            status: PostStatus::Published,
            scheduled_at: None,
            published_at: Some(at(2024, 1, 15, 10, 30)),
            platforms: vec![Facebook, LinkedIn, Twitter],
            media_count: 2,
            reach: 3456,
            engagements: 234,
            likes: 189,
            comments: 32,
            shares: 13,
        },
        Post {
            id: "2".to_string(),
            content: "Flashback Friday - nos meilleurs moments de cette année ! 📸".to_string(),
            status: PostStatus::Scheduled,
            scheduled_at: Some(at(2024, 1, 16, 9, 0)),
            published_at: None,
            platforms: vec![Instagram, Facebook],
            media_count: 4,
            reach: 0,
            engagements: 0,
            likes: 0,
            comments: 0,
            shares: 0,
        },
        Post {
            id: "3".to_string(),
            content: "Guide complet pour optimiser votre présence sur les réseaux sociaux..."
                .to_string(),
            status: PostStatus::Draft,
            scheduled_at: None,
            published_at: None,
            platforms: vec![LinkedIn],
            media_count: 1,
            reach: 0,
            engagements: 0,
            likes: 0,
            comments: 0,
            shares: 0,
        },
        Post {
            id: "4".to_string(),
            content: "Merci à tous nos followers pour votre soutien ! 🙏 #Community".to_string(),
            status: PostStatus::Published,
            scheduled_at: None,
            published_at: Some(at(2024, 1, 14, 15, 20)),
            platforms: vec![Twitter, Instagram],
            media_count: 0,
            reach: 2134,
            engagements: 156,
            likes: 134,
            comments: 18,
            shares: 4,
        },
    ]
});

static SCHEDULED_POSTS: Lazy<Vec<ScheduledPost>> = Lazy::new(|| {
    vec![
        ScheduledPost {
            id: "1".to_string(),
            content: "Bonne année 2024 ! 🎉".to_string(),
            scheduled_at: at(2024, 1, 16, 9, 0),
            platforms: vec![Facebook, Instagram, Twitter],
            status: PostStatus::Scheduled,
            media_count: 1,
        },
        ScheduledPost {
            id: "2".to_string(),
            content: "Découvrez notre nouveau blog post sur les tendances du marketing digital 📊"
                .to_string(),
            scheduled_at: at(2024, 1, 17, 14, 30),
            platforms: vec![LinkedIn],
            status: PostStatus::Scheduled,
            media_count: 0,
        },
        ScheduledPost {
            id: "3".to_string(),
            content: "Behind the scenes de notre équipe 💻".to_string(),
            scheduled_at: at(2024, 1, 18, 10, 0),
            platforms: vec![Instagram, Facebook],
            status: PostStatus::Scheduled,
            media_count: 3,
        },
        ScheduledPost {
            id: "4".to_string(),
            content: "Webinaire gratuit : Stratégies de croissance sur les réseaux sociaux"
                .to_string(),
            scheduled_at: at(2024, 1, 19, 16, 0),
            platforms: vec![LinkedIn, Facebook],
            status: PostStatus::Scheduled,
            media_count: 2,
        },
    ]
});

static ACCOUNTS: Lazy<Vec<SocialAccount>> = Lazy::new(|| {
    let avatar = |id: &str| {
        Some(format!(
            "https://images.unsplash.com/photo-{}?w=150&h=150&fit=crop&crop=face",
            id
        ))
    };
    vec![
        SocialAccount {
            id: "1".to_string(),
            platform: Facebook,
            display_name: "Mon Entreprise".to_string(),
            username: "monentreprise".to_string(),
            followers: 8432,
            is_connected: true,
            status: AccountStatus::Connected,
            last_sync: Some(at(2024, 1, 15, 10, 30)),
            avatar: avatar("1560472354-b33ff0c44a43"),
        },
        SocialAccount {
            id: "2".to_string(),
            platform: Instagram,
            display_name: "@monentreprise".to_string(),
            username: "monentreprise".to_string(),
            followers: 5621,
            is_connected: true,
            status: AccountStatus::Connected,
            last_sync: Some(at(2024, 1, 15, 10, 25)),
            avatar: avatar("1517841905240-472988babdf9"),
        },
        SocialAccount {
            id: "3".to_string(),
            platform: Twitter,
            display_name: "Mon Entreprise".to_string(),
            username: "@monentreprise".to_string(),
            followers: 1876,
            is_connected: false,
            status: AccountStatus::Disconnected,
            last_sync: None,
            avatar: avatar("1472099645785-5658abf4ff4e"),
        },
        SocialAccount {
            id: "4".to_string(),
            platform: LinkedIn,
            display_name: "Mon Entreprise".to_string(),
            username: "mon-entreprise".to_string(),
            followers: 3247,
            is_connected: true,
            status: AccountStatus::Connected,
            last_sync: Some(at(2024, 1, 15, 10, 20)),
            avatar: avatar("1507003211169-0a1dd7228f2d"),
        },
        SocialAccount {
            id: "5".to_string(),
            platform: YouTube,
            display_name: "Mon Entreprise".to_string(),
            username: "monentreprise".to_string(),
            followers: 987,
            is_connected: false,
            status: AccountStatus::Disconnected,
            last_sync: None,
            avatar: avatar("1500648767791-00dcc994a43e"),
        },
    ]
});

/// Analytics overview cards: reach, engagements, new followers, impressions
pub static ANALYTICS_OVERVIEW: [(&str, MetricTrend); 4] = [
    (
        "Portée Totale",
        MetricTrend {
            value: 45678,
            change: 12.5,
            trend: Trend::Up,
        },
    ),
    (
        "Engagements",
        MetricTrend {
            value: 3241,
            change: 8.3,
            trend: Trend::Up,
        },
    ),
    (
        "Nouveaux Followers",
        MetricTrend {
            value: 12847,
            change: 15.2,
            trend: Trend::Up,
        },
    ),
    (
        "Impressions",
        MetricTrend {
            value: 89234,
            change: -2.1,
            trend: Trend::Down,
        },
    ),
];

static TOP_POSTS: Lazy<Vec<TopPost>> = Lazy::new(|| {
    vec![
        TopPost {
            id: 1,
            content: "Découvrez nos nouvelles fonctionnalités ! 🚀".to_string(),
            reach: 12340,
            engagements: 567,
            platform: Facebook,
            date: day(2024, 1, 15),
        },
        TopPost {
            id: 2,
            content: "Partage d'un article sur les tendances 2024 📈".to_string(),
            reach: 8920,
            engagements: 423,
            platform: LinkedIn,
            date: day(2024, 1, 14),
        },
        TopPost {
            id: 3,
            content: "Behind the scenes de notre équipe 🎬".to_string(),
            reach: 15420,
            engagements: 689,
            platform: Instagram,
            date: day(2024, 1, 14),
        },
    ]
});

pub static PLATFORM_STATS: [PlatformStats; 4] = [
    PlatformStats {
        platform: Facebook,
        followers: 8432,
        reach: 23450,
        engagements: 1456,
    },
    PlatformStats {
        platform: Instagram,
        followers: 5621,
        reach: 18920,
        engagements: 2134,
    },
    PlatformStats {
        platform: LinkedIn,
        followers: 3247,
        reach: 8930,
        engagements: 567,
    },
    PlatformStats {
        platform: Twitter,
        followers: 1876,
        reach: 12450,
        engagements: 342,
    },
];

/// Connection indicators in the navigation shell
pub static SIDEBAR_PLATFORMS: [(SocialPlatform, bool); 5] = [
    (Facebook, true),
    (Instagram, true),
    (Twitter, false),
    (LinkedIn, true),
    (YouTube, false),
];

pub fn recent_posts() -> Vec<RecentPost> {
    RECENT_POSTS.clone()
}

pub fn upcoming_posts() -> Vec<UpcomingPost> {
    UPCOMING_POSTS.clone()
}

pub fn posts() -> Vec<Post> {
    POSTS.clone()
}

pub fn scheduled_posts() -> Vec<ScheduledPost> {
    SCHEDULED_POSTS.clone()
}

pub fn accounts() -> Vec<SocialAccount> {
    ACCOUNTS.clone()
}

pub fn top_posts() -> Vec<TopPost> {
    TOP_POSTS.clone()
}
