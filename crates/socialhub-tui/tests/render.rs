//! Full-frame rendering against ratatui's TestBackend

use ratatui::{backend::TestBackend, Terminal};
use socialhub_core::{MemoryKeyValueStore, Session, SessionConfig};
use socialhub_tui::{ui::Ui, App, Tab};
use std::sync::Arc;
use std::time::Duration;

fn session() -> Arc<Session> {
    let config = SessionConfig {
        latency: Duration::ZERO,
        ..SessionConfig::default()
    };
    Arc::new(Session::open(Arc::new(MemoryKeyValueStore::new()), config))
}

fn draw(app: &mut App, ui: &mut Ui) -> String {
    let mut terminal = Terminal::new(TestBackend::new(160, 48)).unwrap();
    terminal.draw(|f| ui.render(f, app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

async fn signed_in_app() -> App {
    let session = session();
    assert!(session.login("ana@example.com", "secret").await);
    App::new(session, Duration::ZERO)
}

#[test]
fn login_screen_when_signed_out() {
    let mut app = App::new(session(), Duration::ZERO);
    let screen = draw(&mut app, &mut Ui::new());

    assert!(screen.contains("Se connecter"));
    assert!(!screen.contains("Publications Total"));
}

#[tokio::test]
async fn dashboard_after_login() {
    let mut app = signed_in_app().await;
    let screen = draw(&mut app, &mut Ui::new());

    assert!(screen.contains("SocialHub"));
    assert!(screen.contains("Publications Total"));
    assert!(screen.contains("COMPTES CONNECTÉS"));
    assert!(screen.contains("ana"));
}

#[tokio::test]
async fn collapsed_sidebar_hides_account_list() {
    let mut app = signed_in_app().await;
    app.sidebar_collapsed = true;
    let screen = draw(&mut app, &mut Ui::new());

    assert!(!screen.contains("COMPTES CONNECTÉS"));
    assert!(screen.contains("Publications Total"));
}

#[tokio::test]
async fn every_tab_renders_its_heading() {
    let mut app = signed_in_app().await;
    let mut ui = Ui::new();

    let headings = [
        (Tab::Dashboard, "Vue d'ensemble"),
        (Tab::Posts, "Gérez toutes vos publications"),
        (Tab::Schedule, "Gérez vos publications programmées"),
        (Tab::Analytics, "Suivez les performances"),
        (Tab::Accounts, "Comptes Réseaux Sociaux"),
        (Tab::Settings, "Gérez votre compte"),
    ];
    for (tab, heading) in headings {
        app.active_tab = tab;
        let screen = draw(&mut app, &mut ui);
        assert!(screen.contains(heading), "{:?} missing {:?}", tab, heading);
    }
}

#[tokio::test]
async fn logout_returns_to_login_screen() {
    let mut app = signed_in_app().await;
    let mut ui = Ui::new();
    app.active_tab = Tab::Analytics;

    app.logout();
    app.poll_events();

    assert_eq!(app.active_tab, Tab::Dashboard);
    assert!(draw(&mut app, &mut ui).contains("Se connecter"));
}
