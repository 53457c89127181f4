//! Settings page form state
//!
//! Held in memory only: saving a section simulates a round-trip and returns a
//! confirmation, it never writes to disk.

use super::user::User;
use serde::{Deserialize, Serialize};

/// Public profile fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSettings {
    pub name: String,
    pub email: String,
    pub bio: String,
    pub website: String,
    pub location: String,
}

impl ProfileSettings {
    /// Pre-fill from the signed-in user, empty name/email when there is none
    pub fn for_user(user: Option<&User>) -> Self {
        Self {
            name: user.map(|u| u.name.clone()).unwrap_or_default(),
            email: user.map(|u| u.email.clone()).unwrap_or_default(),
            bio: "Gestionnaire de réseaux sociaux passionné".to_string(),
            website: "https://monentreprise.com".to_string(),
            location: "Paris, France".to_string(),
        }
    }
}

/// Notification toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub weekly_report: bool,
    pub mentions: bool,
    pub new_followers: bool,
    pub post_scheduled: bool,
    pub post_published: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email_notifications: true,
            push_notifications: true,
            weekly_report: true,
            mentions: true,
            new_followers: true,
            post_scheduled: true,
            post_published: true,
        }
    }
}

/// Toggles rendered on the settings page, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationToggle {
    Email,
    Push,
    WeeklyReport,
    Mentions,
    NewFollowers,
}

impl NotificationToggle {
    pub const ALL: [NotificationToggle; 5] = [
        NotificationToggle::Email,
        NotificationToggle::Push,
        NotificationToggle::WeeklyReport,
        NotificationToggle::Mentions,
        NotificationToggle::NewFollowers,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NotificationToggle::Email => "Notifications par email",
            NotificationToggle::Push => "Notifications push",
            NotificationToggle::WeeklyReport => "Rapport hebdomadaire",
            NotificationToggle::Mentions => "Mentions",
            NotificationToggle::NewFollowers => "Nouveaux followers",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            NotificationToggle::Email => "Recevoir les notifications importantes par email",
            NotificationToggle::Push => "Recevoir des notifications push dans le navigateur",
            NotificationToggle::WeeklyReport => {
                "Recevoir un résumé de vos performances chaque semaine"
            }
            NotificationToggle::Mentions => "Être notifié quand quelqu'un vous mentionne",
            NotificationToggle::NewFollowers => "Être notifié de nouveaux followers",
        }
    }
}

impl NotificationSettings {
    pub fn get(&self, toggle: NotificationToggle) -> bool {
        match toggle {
            NotificationToggle::Email => self.email_notifications,
            NotificationToggle::Push => self.push_notifications,
            NotificationToggle::WeeklyReport => self.weekly_report,
            NotificationToggle::Mentions => self.mentions,
            NotificationToggle::NewFollowers => self.new_followers,
        }
    }

    pub fn toggle(&mut self, toggle: NotificationToggle) {
        let slot = match toggle {
            NotificationToggle::Email => &mut self.email_notifications,
            NotificationToggle::Push => &mut self.push_notifications,
            NotificationToggle::WeeklyReport => &mut self.weekly_report,
            NotificationToggle::Mentions => &mut self.mentions,
            NotificationToggle::NewFollowers => &mut self.new_followers,
        };
        *slot = !*slot;
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::System];

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "Clair",
            Theme::Dark => "Sombre",
            Theme::System => "Système",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Fr,
    En,
    Es,
    De,
}

impl Language {
    pub const ALL: [Language; 4] = [Language::Fr, Language::En, Language::Es, Language::De];

    pub fn label(&self) -> &'static str {
        match self {
            Language::Fr => "Français",
            Language::En => "English",
            Language::Es => "Español",
            Language::De => "Deutsch",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Timezone {
    #[default]
    #[serde(rename = "Europe/Paris")]
    EuropeParis,
    #[serde(rename = "Europe/London")]
    EuropeLondon,
    #[serde(rename = "America/New_York")]
    AmericaNewYork,
    #[serde(rename = "Asia/Tokyo")]
    AsiaTokyo,
}

impl Timezone {
    pub const ALL: [Timezone; 4] = [
        Timezone::EuropeParis,
        Timezone::EuropeLondon,
        Timezone::AmericaNewYork,
        Timezone::AsiaTokyo,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Timezone::EuropeParis => "Europe/Paris",
            Timezone::EuropeLondon => "Europe/London",
            Timezone::AmericaNewYork => "America/New_York",
            Timezone::AsiaTokyo => "Asia/Tokyo",
        }
    }
}

/// Appearance and regional preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub theme: Theme,
    pub language: Language,
    pub timezone: Timezone,
    pub date_format: String,
    pub currency: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: Theme::System,
            language: Language::Fr,
            timezone: Timezone::EuropeParis,
            date_format: "dd/mm/yyyy".to_string(),
            currency: "EUR".to_string(),
        }
    }
}

/// Everything the settings page edits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsForm {
    pub profile: ProfileSettings,
    pub notifications: NotificationSettings,
    pub preferences: Preferences,
}

impl SettingsForm {
    pub fn for_user(user: Option<&User>) -> Self {
        Self {
            profile: ProfileSettings::for_user(user),
            notifications: NotificationSettings::default(),
            preferences: Preferences::default(),
        }
    }
}

/// Step to the next value of a closed set, wrapping around
pub fn cycle<T: Copy + PartialEq>(all: &[T], current: T, forward: bool) -> T {
    let len = all.len();
    let idx = all.iter().position(|v| *v == current).unwrap_or(0);
    let next = if forward {
        (idx + 1) % len
    } else {
        (idx + len - 1) % len
    };
    all[next]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_without_user_is_blank() {
        let profile = ProfileSettings::for_user(None);
        assert!(profile.name.is_empty());
        assert!(profile.email.is_empty());
        assert_eq!(profile.location, "Paris, France");
    }

    #[test]
    fn test_notification_toggle_roundtrip() {
        let mut n = NotificationSettings::default();
        n.toggle(NotificationToggle::Mentions);
        assert!(!n.get(NotificationToggle::Mentions));
        assert!(n.get(NotificationToggle::Email));
        n.toggle(NotificationToggle::Mentions);
        assert!(n.mentions);
    }

    #[test]
    fn test_cycle_wraps_both_ways() {
        assert_eq!(cycle(&Theme::ALL, Theme::System, true), Theme::Light);
        assert_eq!(cycle(&Theme::ALL, Theme::Light, false), Theme::System);
        assert_eq!(
            cycle(&Timezone::ALL, Timezone::EuropeParis, true),
            Timezone::EuropeLondon
        );
    }

    #[test]
    fn test_timezone_serde_uses_iana_names() {
        let json = serde_json::to_string(&Timezone::AmericaNewYork).unwrap();
        assert_eq!(json, "\"America/New_York\"");
    }
}
