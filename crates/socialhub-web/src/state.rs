//! Shared handler state

use parking_lot::RwLock;
use socialhub_core::models::{SettingsForm, User};
use socialhub_core::Session;
use std::sync::Arc;
use std::time::Duration;

/// State handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Session>,

    /// Latency applied to settings saves
    pub latency: Duration,

    /// Settings page values, keyed to the email they were seeded from
    settings: Arc<RwLock<Option<(String, SettingsForm)>>>,
}

impl AppState {
    pub fn new(session: Arc<Session>, latency: Duration) -> Self {
        Self {
            session,
            latency,
            settings: Arc::new(RwLock::new(None)),
        }
    }

    /// Current settings form, reseeded when a different user signs in
    pub fn settings(&self) -> SettingsForm {
        let user = self.session.user();
        let owner = owner_of(user.as_ref());

        if let Some((seeded_for, form)) = self.settings.read().as_ref() {
            if *seeded_for == owner {
                return form.clone();
            }
        }

        let form = SettingsForm::for_user(user.as_ref());
        *self.settings.write() = Some((owner, form.clone()));
        form
    }

    /// Apply a change to the settings form
    pub fn update_settings(&self, apply: impl FnOnce(&mut SettingsForm)) {
        let mut form = self.settings();
        apply(&mut form);
        let owner = owner_of(self.session.user().as_ref());
        *self.settings.write() = Some((owner, form));
    }
}

fn owner_of(user: Option<&User>) -> String {
    user.map(|u| u.email.clone()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use socialhub_core::{MemoryKeyValueStore, SessionConfig};

    fn state() -> AppState {
        let config = SessionConfig {
            latency: Duration::ZERO,
            ..SessionConfig::default()
        };
        let session = Session::open(Arc::new(MemoryKeyValueStore::new()), config);
        AppState::new(Arc::new(session), Duration::ZERO)
    }

    #[tokio::test]
    async fn test_settings_reseed_on_user_change() {
        let state = state();
        assert!(state.session.login("ana@example.com", "pw").await);
        assert_eq!(state.settings().profile.name, "ana");

        state.update_settings(|form| form.profile.bio = "Hello".to_string());
        assert_eq!(state.settings().profile.bio, "Hello");

        assert!(state.session.login("bob@example.com", "pw").await);
        let form = state.settings();
        assert_eq!(form.profile.name, "bob");
        assert_ne!(form.profile.bio, "Hello");
    }
}
