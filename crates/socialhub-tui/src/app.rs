//! TUI application state

use crate::auth::{AuthForm, AuthMode, AuthSubmit, EMPTY_FIELDS_ERROR};
use crate::components::{Spinner, Toast, ToastManager};
use crossterm::event::{KeyCode, KeyModifiers};
use socialhub_core::models::{NotificationSettings, ProfileSettings};
use socialhub_core::routes::guard;
use socialhub_core::views::settings::{self, SaveReceipt};
use socialhub_core::{Access, Route, Session, SessionEvent};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, oneshot};
use tracing::debug;

/// Dashboard pages, in sidebar order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Dashboard,
    Posts,
    Schedule,
    Analytics,
    Accounts,
    Settings,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[
            Tab::Dashboard,
            Tab::Posts,
            Tab::Schedule,
            Tab::Analytics,
            Tab::Accounts,
            Tab::Settings,
        ]
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Dashboard => 0,
            Tab::Posts => 1,
            Tab::Schedule => 2,
            Tab::Analytics => 3,
            Tab::Accounts => 4,
            Tab::Settings => 5,
        }
    }

    pub fn from_index(idx: usize) -> Self {
        match idx {
            1 => Tab::Posts,
            2 => Tab::Schedule,
            3 => Tab::Analytics,
            4 => Tab::Accounts,
            5 => Tab::Settings,
            _ => Tab::Dashboard,
        }
    }

    pub fn route(&self) -> Route {
        match self {
            Tab::Dashboard => Route::Dashboard,
            Tab::Posts => Route::Posts,
            Tab::Schedule => Route::Schedule,
            Tab::Analytics => Route::Analytics,
            Tab::Accounts => Route::Accounts,
            Tab::Settings => Route::Settings,
        }
    }

    pub fn name(&self) -> &'static str {
        self.route().label()
    }

    pub fn shortcut(&self) -> char {
        match self {
            Tab::Dashboard => '1',
            Tab::Posts => '2',
            Tab::Schedule => '3',
            Tab::Analytics => '4',
            Tab::Accounts => '5',
            Tab::Settings => '6',
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tab::Dashboard => "⌂",
            Tab::Posts => "✎",
            Tab::Schedule => "◷",
            Tab::Analytics => "▤",
            Tab::Accounts => "⚭",
            Tab::Settings => "⚙",
        }
    }
}

/// Result of a task spawned from the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Auth { mode: AuthMode, ok: bool },
    Saved(SaveReceipt),
}

/// TUI application state
pub struct App {
    pub session: Arc<Session>,

    /// Session changes (sign-out from another frontend included)
    event_rx: broadcast::Receiver<SessionEvent>,

    /// Latency applied to settings saves
    pub latency: Duration,

    pub active_tab: Tab,

    /// Sidebar shows icons only
    pub sidebar_collapsed: bool,

    pub should_quit: bool,

    pub auth: AuthForm,

    pub toasts: ToastManager,

    pub spinner: Spinner,

    /// In-flight submissions; overlapping ones are not deduplicated
    pending: Vec<oneshot::Receiver<Outcome>>,
}

impl App {
    pub fn new(session: Arc<Session>, latency: Duration) -> Self {
        let event_rx = session.event_bus().subscribe();

        Self {
            session,
            event_rx,
            latency,
            active_tab: Tab::Dashboard,
            sidebar_collapsed: false,
            should_quit: false,
            auth: AuthForm::new(),
            toasts: ToastManager::new(),
            spinner: Spinner::new(),
            pending: Vec::new(),
        }
    }

    /// Guard result for the active page
    pub fn access(&self) -> Access {
        guard(self.active_tab.route().path(), &self.session)
    }

    /// Path of what is on screen
    pub fn current_path(&self) -> &'static str {
        match self.access() {
            Access::Redirect(_) => self.auth.mode.route().path(),
            _ => self.active_tab.route().path(),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.session.is_loading() || !self.pending.is_empty()
    }

    /// Handle keys that apply everywhere in the shell
    ///
    /// `text_input` is true while a text field has focus, in which case only
    /// Ctrl+C is treated as global. Returns true if the key was consumed.
    pub fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers, text_input: bool) -> bool {
        if key == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return true;
        }
        if text_input {
            return false;
        }

        match key {
            KeyCode::Char('q') => {
                self.should_quit = true;
                true
            }
            KeyCode::Tab => {
                self.next_tab();
                true
            }
            KeyCode::BackTab => {
                self.prev_tab();
                true
            }
            KeyCode::Char('b') => {
                self.sidebar_collapsed = !self.sidebar_collapsed;
                true
            }
            KeyCode::Char('L') => {
                self.logout();
                true
            }
            KeyCode::Char(c) if ('1'..='6').contains(&c) => {
                let idx = (c as usize) - ('1' as usize);
                self.active_tab = Tab::from_index(idx);
                true
            }
            _ => false,
        }
    }

    fn next_tab(&mut self) {
        let idx = self.active_tab.index();
        self.active_tab = Tab::from_index((idx + 1) % Tab::all().len());
    }

    fn prev_tab(&mut self) {
        let idx = self.active_tab.index();
        self.active_tab = Tab::from_index((idx + Tab::all().len() - 1) % Tab::all().len());
    }

    /// Keys on the login/register screen
    pub fn handle_auth_key(&mut self, key: KeyCode) {
        if let Some(submit) = self.auth.handle_key(key) {
            self.submit_auth(submit);
        }
    }

    /// Run login or register in the background
    pub fn submit_auth(&mut self, submit: AuthSubmit) {
        let session = self.session.clone();
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let ok = match submit.mode {
                AuthMode::Login => session.login(&submit.email, &submit.password).await,
                AuthMode::Register => {
                    session
                        .register(&submit.name, &submit.email, &submit.password)
                        .await
                }
            };
            let _ = tx.send(Outcome::Auth {
                mode: submit.mode,
                ok,
            });
        });
        self.pending.push(rx);
    }

    pub fn save_profile(&mut self, profile: ProfileSettings) {
        let latency = self.latency;
        self.spawn_save(async move { settings::save_profile(&profile, latency).await });
    }

    pub fn save_notifications(&mut self, notifications: NotificationSettings) {
        let latency = self.latency;
        self.spawn_save(async move { settings::save_notifications(&notifications, latency).await });
    }

    fn spawn_save<F>(&mut self, save: F)
    where
        F: std::future::Future<Output = SaveReceipt> + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let _ = tx.send(Outcome::Saved(save.await));
        });
        self.pending.push(rx);
    }

    pub fn logout(&mut self) {
        self.session.logout();
    }

    /// Collect finished background tasks (non-blocking)
    pub fn poll_pending(&mut self) {
        let mut finished = Vec::new();
        self.pending.retain_mut(|rx| match rx.try_recv() {
            Ok(outcome) => {
                finished.push(outcome);
                false
            }
            Err(oneshot::error::TryRecvError::Empty) => true,
            Err(oneshot::error::TryRecvError::Closed) => false,
        });

        for outcome in finished {
            self.apply(outcome);
        }
    }

    fn apply(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Auth { ok: true, .. } => {
                self.auth.reset();
                self.active_tab = Tab::Dashboard;
            }
            Outcome::Auth { ok: false, mode } => {
                debug!(?mode, "Auth submission rejected");
                self.auth.error = Some(EMPTY_FIELDS_ERROR.to_string());
                self.toasts.push(Toast::error(EMPTY_FIELDS_ERROR));
            }
            Outcome::Saved(receipt) => {
                self.toasts
                    .push(Toast::success(receipt.title).with_description(receipt.description));
            }
        }
    }

    /// Check for session events (non-blocking)
    pub fn poll_events(&mut self) {
        loop {
            match self.event_rx.try_recv() {
                Ok(SessionEvent::SignedOut) => {
                    self.active_tab = Tab::Dashboard;
                    self.auth.reset();
                }
                Ok(SessionEvent::Discarded) => {
                    self.toasts
                        .push(Toast::info("Session enregistrée invalide, reconnectez-vous"));
                }
                Ok(SessionEvent::SignedIn(_)) | Ok(SessionEvent::Restored(_)) => {}
                Err(broadcast::error::TryRecvError::Lagged(n)) => {
                    debug!(skipped = n, "Session events lagged");
                }
                Err(_) => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use socialhub_core::{MemoryKeyValueStore, SessionConfig};

    fn app() -> App {
        let session = Arc::new(Session::open(
            Arc::new(MemoryKeyValueStore::new()),
            SessionConfig::default(),
        ));
        App::new(session, Duration::from_millis(1000))
    }

    #[test]
    fn test_tab_round_trip() {
        for tab in Tab::all() {
            assert_eq!(Tab::from_index(tab.index()), *tab);
        }
        assert_eq!(Tab::Accounts.name(), "Réseaux Sociaux");
    }

    #[test]
    fn test_global_keys() {
        let mut app = app();
        assert!(app.handle_key(KeyCode::Char('3'), KeyModifiers::NONE, false));
        assert_eq!(app.active_tab, Tab::Schedule);

        assert!(app.handle_key(KeyCode::BackTab, KeyModifiers::NONE, false));
        assert_eq!(app.active_tab, Tab::Posts);

        assert!(app.handle_key(KeyCode::Char('b'), KeyModifiers::NONE, false));
        assert!(app.sidebar_collapsed);
    }

    #[test]
    fn test_text_input_blocks_shortcuts() {
        let mut app = app();
        assert!(!app.handle_key(KeyCode::Char('q'), KeyModifiers::NONE, true));
        assert!(!app.should_quit);
        assert!(app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL, true));
        assert!(app.should_quit);
    }

    #[test]
    fn test_unauthenticated_shows_login() {
        let app = app();
        assert_eq!(app.access(), Access::Redirect(Route::Login));
        assert_eq!(app.current_path(), "/auth/login");
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_flow_reaches_dashboard() {
        let mut app = app();
        app.submit_auth(AuthSubmit {
            mode: AuthMode::Login,
            name: String::new(),
            email: "ana@example.com".to_string(),
            password: "pw".to_string(),
        });
        assert!(app.is_busy());

        tokio::time::sleep(Duration::from_millis(1100)).await;
        app.poll_pending();

        assert!(!app.is_busy());
        assert_eq!(app.access(), Access::Granted);
        assert_eq!(app.current_path(), "/dashboard");
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_login_sets_error() {
        let mut app = app();
        app.submit_auth(AuthSubmit {
            mode: AuthMode::Login,
            name: String::new(),
            email: String::new(),
            password: "pw".to_string(),
        });

        tokio::time::sleep(Duration::from_millis(1100)).await;
        app.poll_pending();

        assert_eq!(app.auth.error.as_deref(), Some(EMPTY_FIELDS_ERROR));
        assert_eq!(app.access(), Access::Redirect(Route::Login));
    }

    #[tokio::test(start_paused = true)]
    async fn test_sign_out_event_returns_to_login() {
        let mut app = app();
        app.session.login("ana@example.com", "pw").await;
        app.active_tab = Tab::Settings;

        app.logout();
        app.poll_events();

        assert_eq!(app.active_tab, Tab::Dashboard);
        assert_eq!(app.access(), Access::Redirect(Route::Login));
    }

    #[tokio::test(start_paused = true)]
    async fn test_save_shows_toast() {
        let mut app = app();
        app.save_notifications(NotificationSettings::default());

        tokio::time::sleep(Duration::from_millis(1100)).await;
        app.poll_pending();

        assert_eq!(
            app.toasts.latest().unwrap().title,
            "Préférences de notification mises à jour"
        );
    }
}
