//! Mock authentication over the session slot

use super::slot::KeyValueStore;
use crate::event::{EventBus, SessionEvent};
use crate::models::User;
use chrono::Utc;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Default slot key
pub const DEFAULT_STORAGE_KEY: &str = "socialhub_user";

/// Default artificial latency of login/register/save
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1000);

/// Configuration for the session gate
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Key under which the user record is stored
    pub storage_key: String,

    /// Simulated network latency for login and register
    pub latency: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            latency: DEFAULT_LATENCY,
        }
    }
}

/// What the startup read of the slot found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// A valid record was loaded
    Restored,
    /// The slot was empty (or unreadable)
    Empty,
    /// The slot held something that is not a user record; it was removed
    Discarded,
}

/// The signed-in user, if any, and the slot it is mirrored to
///
/// Constructed once per process and shared as `Arc<Session>`. Login and
/// register are not a security boundary: any non-empty input succeeds.
pub struct Session {
    store: Arc<dyn KeyValueStore>,
    config: SessionConfig,
    user: RwLock<Option<User>>,
    initialized: AtomicBool,
    in_flight: AtomicUsize,
    event_bus: EventBus,
}

impl Session {
    /// Create a session that has not read its slot yet
    ///
    /// `is_loading()` stays true until [`Session::restore`] runs.
    pub fn new(store: Arc<dyn KeyValueStore>, config: SessionConfig) -> Self {
        Self {
            store,
            config,
            user: RwLock::new(None),
            initialized: AtomicBool::new(false),
            in_flight: AtomicUsize::new(0),
            event_bus: EventBus::default_capacity(),
        }
    }

    /// Create and immediately restore from the slot
    pub fn open(store: Arc<dyn KeyValueStore>, config: SessionConfig) -> Self {
        let session = Self::new(store, config);
        session.restore();
        session
    }

    /// Read the saved record, discarding it if malformed
    pub fn restore(&self) -> RestoreOutcome {
        let key = self.config.storage_key.as_str();

        let outcome = match self.store.get(key) {
            Ok(Some(raw)) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => {
                    info!(email = %user.email, "Session restored");
                    let email = user.email.clone();
                    *self.user.write() = Some(user);
                    self.event_bus.publish(SessionEvent::Restored(email));
                    RestoreOutcome::Restored
                }
                Err(e) => {
                    warn!(key, error = %e, "Discarding malformed saved session");
                    if let Err(e) = self.store.remove(key) {
                        warn!(key, error = %e, "Failed to remove malformed session");
                    }
                    self.event_bus.publish(SessionEvent::Discarded);
                    RestoreOutcome::Discarded
                }
            },
            Ok(None) => {
                debug!(key, "No saved session");
                RestoreOutcome::Empty
            }
            Err(e) => {
                warn!(key, error = %e, "Failed to read saved session");
                RestoreOutcome::Empty
            }
        };

        self.initialized.store(true, Ordering::SeqCst);
        outcome
    }

    /// Mock sign-in: succeeds for any non-empty email and password
    pub async fn login(&self, email: &str, password: &str) -> bool {
        let _pending = InFlight::enter(&self.in_flight);
        tokio::time::sleep(self.config.latency).await;

        let ok = !email.is_empty() && !password.is_empty();
        if ok {
            let now = Utc::now();
            let user = User {
                id: "1".to_string(),
                email: email.to_string(),
                name: email.split('@').next().unwrap_or_default().to_string(),
                avatar: Some(User::avatar_for(email)),
                created_at: now,
                updated_at: now,
            };
            self.sign_in(user);
        } else {
            debug!("Login rejected: empty field");
        }

        ok
    }

    /// Mock sign-up: succeeds for any non-empty name, email and password
    pub async fn register(&self, name: &str, email: &str, password: &str) -> bool {
        let _pending = InFlight::enter(&self.in_flight);
        tokio::time::sleep(self.config.latency).await;

        let ok = !name.is_empty() && !email.is_empty() && !password.is_empty();
        if ok {
            let now = Utc::now();
            let user = User {
                id: now.timestamp_millis().to_string(),
                email: email.to_string(),
                name: name.to_string(),
                avatar: Some(User::avatar_for(email)),
                created_at: now,
                updated_at: now,
            };
            self.sign_in(user);
        } else {
            debug!("Registration rejected: empty field");
        }

        ok
    }

    /// Clear the session and its slot
    pub fn logout(&self) {
        let previous = self.user.write().take();
        if let Err(e) = self.store.remove(&self.config.storage_key) {
            warn!(error = %e, "Failed to clear saved session");
        }
        if let Some(user) = previous {
            info!(email = %user.email, "Signed out");
        }
        self.event_bus.publish(SessionEvent::SignedOut);
    }

    fn sign_in(&self, user: User) {
        match serde_json::to_string(&user) {
            Ok(json) => {
                if let Err(e) = self.store.set(&self.config.storage_key, &json) {
                    warn!(error = %e, "Failed to save session, keeping it in memory");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize session"),
        }
        info!(email = %user.email, "Signed in");
        let email = user.email.clone();
        *self.user.write() = Some(user);
        self.event_bus.publish(SessionEvent::SignedIn(email));
    }

    /// Current user (cloned)
    pub fn user(&self) -> Option<User> {
        self.user.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.read().is_some()
    }

    /// True before the initial restore and during a login/register delay
    pub fn is_loading(&self) -> bool {
        !self.is_initialized() || self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// True once the slot has been read at startup
    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::SeqCst)
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Get the event bus for subscribing to session changes
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}

/// Counts a login/register call for as long as it is alive, including when
/// its future is dropped mid-delay
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryKeyValueStore;

    fn session_with(store: MemoryKeyValueStore) -> (Session, Arc<MemoryKeyValueStore>) {
        let store = Arc::new(store);
        let session = Session::new(store.clone(), SessionConfig::default());
        (session, store)
    }

    #[test]
    fn test_new_session_is_loading_until_restored() {
        let (session, _) = session_with(MemoryKeyValueStore::new());
        assert!(session.is_loading());
        assert!(!session.is_initialized());

        assert_eq!(session.restore(), RestoreOutcome::Empty);
        assert!(!session.is_loading());
        assert!(session.is_initialized());
        assert!(session.user().is_none());
    }

    #[test]
    fn test_restore_malformed_discards_slot() {
        let (session, store) =
            session_with(MemoryKeyValueStore::new().with_entry(DEFAULT_STORAGE_KEY, "{not json"));

        assert_eq!(session.restore(), RestoreOutcome::Discarded);
        assert!(session.user().is_none());
        assert_eq!(store.get(DEFAULT_STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_restore_wrong_shape_discards_slot() {
        let (session, _) =
            session_with(MemoryKeyValueStore::new().with_entry(DEFAULT_STORAGE_KEY, "42"));
        assert_eq!(session.restore(), RestoreOutcome::Discarded);
        assert!(!session.is_authenticated());
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_waits_for_latency() {
        let (session, _) = session_with(MemoryKeyValueStore::new());
        session.restore();

        let start = tokio::time::Instant::now();
        assert!(session.login("jeanne@example.com", "pw").await);
        assert!(start.elapsed() >= DEFAULT_LATENCY);
        assert!(!session.is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_persists_record() {
        let (session, store) = session_with(MemoryKeyValueStore::new());
        session.restore();

        assert!(session.login("jeanne@example.com", "pw").await);

        let raw = store.get(DEFAULT_STORAGE_KEY).unwrap().unwrap();
        let saved: User = serde_json::from_str(&raw).unwrap();
        assert_eq!(saved.id, "1");
        assert_eq!(saved.name, "jeanne");
        assert_eq!(
            saved.avatar.as_deref(),
            Some("https://api.dicebear.com/7.x/avataaars/svg?seed=jeanne@example.com")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_register_uses_given_name() {
        let (session, _) = session_with(MemoryKeyValueStore::new());
        session.restore();

        assert!(session.register("Jeanne D.", "jeanne@example.com", "pw").await);
        let user = session.user().unwrap();
        assert_eq!(user.name, "Jeanne D.");
        assert_ne!(user.id, "1");
        assert!(user.id.parse::<i64>().is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_register_requires_all_fields() {
        let (session, _) = session_with(MemoryKeyValueStore::new());
        session.restore();

        assert!(!session.register("", "a@b.fr", "pw").await);
        assert!(!session.register("A", "", "pw").await);
        assert!(!session.register("A", "a@b.fr", "").await);
        assert!(session.user().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_events_published() {
        let (session, _) = session_with(MemoryKeyValueStore::new());
        let mut rx = session.event_bus().subscribe();
        session.restore();

        session.login("a@b.fr", "pw").await;
        session.logout();

        assert_eq!(
            rx.recv().await.unwrap(),
            SessionEvent::SignedIn("a@b.fr".to_string())
        );
        assert_eq!(rx.recv().await.unwrap(), SessionEvent::SignedOut);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_user_visible_when_signed_in_arrives() {
        for _ in 0..200 {
            let store = Arc::new(MemoryKeyValueStore::new());
            let session = Arc::new(Session::open(
                store,
                SessionConfig {
                    latency: Duration::ZERO,
                    ..SessionConfig::default()
                },
            ));
            let mut rx = session.event_bus().subscribe();

            let task = {
                let session = session.clone();
                tokio::spawn(async move { session.login("a@b.fr", "pw").await })
            };

            assert_eq!(
                rx.recv().await.unwrap(),
                SessionEvent::SignedIn("a@b.fr".to_string())
            );
            assert!(session.user().is_some());
            assert!(task.await.unwrap());
        }
    }

    #[test]
    fn test_user_visible_when_restored_arrives() {
        let record = r#"{"id":"1","email":"a@b.fr","name":"a","createdAt":"2024-01-01T00:00:00Z","updatedAt":"2024-01-01T00:00:00Z"}"#;
        let (session, _) =
            session_with(MemoryKeyValueStore::new().with_entry(DEFAULT_STORAGE_KEY, record));
        let mut rx = session.event_bus().subscribe();

        assert_eq!(session.restore(), RestoreOutcome::Restored);
        assert_eq!(
            rx.try_recv().unwrap(),
            SessionEvent::Restored("a@b.fr".to_string())
        );
        assert_eq!(session.user().unwrap().email, "a@b.fr");
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_login_stops_loading() {
        let (session, _) = session_with(MemoryKeyValueStore::new());
        session.restore();

        let timed_out =
            tokio::time::timeout(Duration::from_millis(10), session.login("a@b.fr", "pw")).await;
        assert!(timed_out.is_err());
        assert!(!session.is_loading());
        assert!(session.user().is_none());
    }
}
