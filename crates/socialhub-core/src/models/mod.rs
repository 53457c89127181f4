//! Data models for socialhub

pub mod account;
pub mod analytics;
pub mod campaign;
pub mod post;
pub mod settings;
pub mod user;

pub use account::{AccountStatus, SocialAccount, SocialPlatform};
pub use analytics::{
    AnalyticsMetrics, AnalyticsSnapshot, DashboardStats, MetricTrend, PlatformStats, TopPost,
    Trend,
};
pub use campaign::{Campaign, CampaignAnalytics, CampaignStatus};
pub use post::{
    MediaDimensions, MediaFile, MediaKind, Post, PostAnalytics, PostStatus, RecentPost,
    ScheduledPost, UpcomingPost,
};
pub use settings::{
    cycle, Language, NotificationSettings, NotificationToggle, Preferences, ProfileSettings,
    SettingsForm, Theme, Timezone,
};
pub use user::User;
