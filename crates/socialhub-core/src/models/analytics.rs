//! Aggregate figures shown on the dashboard and analytics pages

use super::account::SocialPlatform;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Headline numbers of the dashboard page
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_posts: u64,
    pub total_followers: u64,
    pub total_reach: u64,
    pub total_engagements: u64,
    pub recent_posts: u64,
    pub growth_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

/// A metric with its change against the previous period
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricTrend {
    pub value: u64,
    /// Percent change, signed
    pub change: f64,
    pub trend: Trend,
}

impl MetricTrend {
    /// "+12.5%" / "-2.1%"
    pub fn change_label(&self) -> String {
        let sign = if self.change > 0.0 { "+" } else { "" };
        format!("{}{}%", sign, self.change)
    }

    pub fn is_up(&self) -> bool {
        self.trend == Trend::Up
    }
}

/// Per-platform row of the analytics page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformStats {
    pub platform: SocialPlatform,
    pub followers: u64,
    pub reach: u64,
    pub engagements: u64,
}

/// Best performing posts on the analytics page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopPost {
    pub id: u32,
    pub content: String,
    pub reach: u64,
    pub engagements: u64,
    pub platform: SocialPlatform,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsMetrics {
    pub posts: u64,
    pub reach: u64,
    pub impressions: u64,
    pub engagements: u64,
    pub followers: u64,
}

/// Daily snapshot (declared, not rendered)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsSnapshot {
    pub date: DateTime<Utc>,
    pub metrics: AnalyticsMetrics,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_label_signs() {
        let up = MetricTrend {
            value: 45678,
            change: 12.5,
            trend: Trend::Up,
        };
        let down = MetricTrend {
            value: 89234,
            change: -2.1,
            trend: Trend::Down,
        };
        let flat = MetricTrend {
            value: 1,
            change: 0.0,
            trend: Trend::Up,
        };
        assert_eq!(up.change_label(), "+12.5%");
        assert_eq!(down.change_label(), "-2.1%");
        assert_eq!(flat.change_label(), "0%");
        assert!(up.is_up());
        assert!(!down.is_up());
    }
}
