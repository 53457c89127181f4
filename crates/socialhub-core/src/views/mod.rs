//! Page view models
//!
//! Each page loads its fixture list, applies a pure predicate and exposes
//! what the frontends render. Buttons other than the settings saves are inert
//! and only appear here as labels.

pub mod accounts;
pub mod analytics;
pub mod dashboard;
pub mod landing;
pub mod posts;
pub mod schedule;
pub mod settings;

use serde::Serialize;

/// Headline card: title, big value, caption underneath
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    pub caption: String,
}

impl StatCard {
    pub fn new(title: &'static str, value: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            title,
            value: value.into(),
            caption: caption.into(),
        }
    }
}
