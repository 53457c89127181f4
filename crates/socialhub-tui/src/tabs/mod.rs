//! TUI tab implementations, one per dashboard page

pub mod accounts;
pub mod analytics;
pub mod dashboard;
pub mod posts;
pub mod schedule;
pub mod settings;

pub use accounts::AccountsTab;
pub use analytics::AnalyticsTab;
pub use dashboard::DashboardTab;
pub use posts::PostsTab;
pub use schedule::ScheduleTab;
pub use settings::{SettingsAction, SettingsTab};

use ratatui::{
    style::{Color, Style},
    text::Span,
};
use socialhub_core::models::SocialPlatform;

/// Colored platform tags, space separated
pub(crate) fn platform_tags(platforms: &[SocialPlatform]) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(platforms.len() * 2);
    for (i, platform) in platforms.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!("[{}]", platform.name()),
            Style::default().fg(crate::theme::platform_color(*platform)),
        ));
    }
    spans
}

pub(crate) fn muted(text: impl Into<String>) -> Span<'static> {
    Span::styled(text.into(), Style::default().fg(Color::DarkGray))
}
