//! Settings page saves
//!
//! Both saves wait for the configured latency and hand back a confirmation;
//! nothing is written anywhere.

use crate::models::{NotificationSettings, ProfileSettings};
use serde::Serialize;
use std::time::Duration;
use tracing::info;

/// Inert data and privacy actions
pub const DATA_ACTIONS: [&str; 2] = ["Télécharger mes données", "Supprimer mon compte"];

pub const SAVE_LABEL: &str = "Sauvegarder";
pub const SAVING_LABEL: &str = "Sauvegarde...";

/// Toast shown after a save
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaveReceipt {
    pub title: &'static str,
    pub description: &'static str,
}

pub async fn save_profile(profile: &ProfileSettings, latency: Duration) -> SaveReceipt {
    tokio::time::sleep(latency).await;
    info!(name = %profile.name, email = %profile.email, "Profile saved");
    SaveReceipt {
        title: "Profil mis à jour",
        description: "Vos informations ont été sauvegardées avec succès.",
    }
}

pub async fn save_notifications(
    notifications: &NotificationSettings,
    latency: Duration,
) -> SaveReceipt {
    tokio::time::sleep(latency).await;
    info!(?notifications, "Notification preferences saved");
    SaveReceipt {
        title: "Préférences de notification mises à jour",
        description: "Vos paramètres de notification ont été sauvegardés.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NotificationToggle;

    #[tokio::test(start_paused = true)]
    async fn test_save_profile_waits_then_confirms() {
        let profile = ProfileSettings::for_user(None);
        let start = tokio::time::Instant::now();
        let receipt = save_profile(&profile, Duration::from_millis(1000)).await;
        assert!(start.elapsed() >= Duration::from_millis(1000));
        assert_eq!(receipt.title, "Profil mis à jour");
    }

    #[tokio::test(start_paused = true)]
    async fn test_save_notifications_does_not_touch_input() {
        let mut notifications = NotificationSettings::default();
        notifications.toggle(NotificationToggle::Push);
        let before = notifications;

        let receipt = save_notifications(&notifications, Duration::from_millis(10)).await;
        assert_eq!(notifications, before);
        assert!(receipt.title.starts_with("Préférences"));
    }
}
