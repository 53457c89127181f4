//! Color language for the socialhub TUI
//!
//! - Green: published, connected, success
//! - Blue/Cyan: scheduled, focus, interactive
//! - Gray: drafts, disconnected, neutral
//! - Red: failed, error

use ratatui::style::Color;
use socialhub_core::models::{AccountStatus, PostStatus, SocialPlatform, Trend};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusColor {
    Success,
    Error,
    Warning,
    Neutral,
    Focus,
}

impl StatusColor {
    pub fn to_color(self) -> Color {
        match self {
            StatusColor::Success => Color::Green,
            StatusColor::Error => Color::Red,
            StatusColor::Warning => Color::Yellow,
            StatusColor::Neutral => Color::DarkGray,
            StatusColor::Focus => Color::Cyan,
        }
    }
}

/// Post badge color
pub fn post_status_color(status: PostStatus) -> Color {
    match status {
        PostStatus::Published => StatusColor::Success.to_color(),
        PostStatus::Scheduled => Color::Blue,
        PostStatus::Draft => StatusColor::Neutral.to_color(),
        PostStatus::Failed => StatusColor::Error.to_color(),
    }
}

pub fn account_status_color(status: AccountStatus) -> Color {
    match status {
        AccountStatus::Connected => StatusColor::Success.to_color(),
        AccountStatus::Disconnected => StatusColor::Neutral.to_color(),
        AccountStatus::Error => StatusColor::Error.to_color(),
    }
}

/// Trend arrow and color for analytics cards
pub fn trend_style(trend: Trend) -> (&'static str, Color) {
    match trend {
        Trend::Up => ("▲", StatusColor::Success.to_color()),
        Trend::Down => ("▼", StatusColor::Error.to_color()),
    }
}

/// Brand-ish accent per platform
pub fn platform_color(platform: SocialPlatform) -> Color {
    match platform {
        SocialPlatform::Facebook => Color::Blue,
        SocialPlatform::Instagram => Color::Magenta,
        SocialPlatform::Twitter => Color::LightBlue,
        SocialPlatform::LinkedIn => Color::Rgb(10, 102, 194),
        SocialPlatform::YouTube => Color::Red,
        SocialPlatform::TikTok => Color::White,
    }
}

/// Dot shown next to a platform in the sidebar
pub fn connection_dot(connected: bool) -> (&'static str, Color) {
    if connected {
        ("●", StatusColor::Success.to_color())
    } else {
        ("○", StatusColor::Neutral.to_color())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_status_colors_distinct() {
        assert_ne!(
            post_status_color(PostStatus::Published),
            post_status_color(PostStatus::Draft)
        );
        assert_eq!(post_status_color(PostStatus::Failed), Color::Red);
    }

    #[test]
    fn test_trend_arrows() {
        assert_eq!(trend_style(Trend::Up).0, "▲");
        assert_eq!(trend_style(Trend::Down).1, Color::Red);
    }
}
