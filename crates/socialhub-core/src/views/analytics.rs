//! Analytics page

use crate::error::CoreError;
use crate::fixtures;
use crate::models::{MetricTrend, PlatformStats, TopPost};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Period selector. Changing it only changes the label; figures are fixed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalyticsPeriod {
    #[default]
    #[serde(rename = "7d")]
    Week,
    #[serde(rename = "30d")]
    Month,
    #[serde(rename = "90d")]
    Quarter,
    #[serde(rename = "1y")]
    Year,
}

impl AnalyticsPeriod {
    pub const ALL: [AnalyticsPeriod; 4] = [
        AnalyticsPeriod::Week,
        AnalyticsPeriod::Month,
        AnalyticsPeriod::Quarter,
        AnalyticsPeriod::Year,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnalyticsPeriod::Week => "7d",
            AnalyticsPeriod::Month => "30d",
            AnalyticsPeriod::Quarter => "90d",
            AnalyticsPeriod::Year => "1y",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AnalyticsPeriod::Week => "7 derniers jours",
            AnalyticsPeriod::Month => "30 derniers jours",
            AnalyticsPeriod::Quarter => "90 derniers jours",
            AnalyticsPeriod::Year => "1 an",
        }
    }
}

impl fmt::Display for AnalyticsPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalyticsPeriod {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == wanted)
            .ok_or_else(|| CoreError::UnknownPeriod {
                value: s.to_string(),
            })
    }
}

/// One overview card
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricCard {
    pub title: &'static str,
    #[serde(flatten)]
    pub metric: MetricTrend,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsView {
    pub period: AnalyticsPeriod,
    pub period_label: &'static str,
    pub metrics: Vec<MetricCard>,
    pub platforms: Vec<PlatformStats>,
    pub top_posts: Vec<TopPost>,
}

impl AnalyticsView {
    pub fn load(period: AnalyticsPeriod) -> Self {
        Self {
            period,
            period_label: period.label(),
            metrics: fixtures::ANALYTICS_OVERVIEW
                .iter()
                .map(|(title, metric)| MetricCard {
                    title,
                    metric: *metric,
                })
                .collect(),
            platforms: fixtures::PLATFORM_STATS.to_vec(),
            top_posts: fixtures::top_posts(),
        }
    }
}
