//! Session gate behavior against a file-backed slot
//!
//! Run with:
//! ```bash
//! cargo test --test session_properties
//! ```

use socialhub_core::fixtures;
use socialhub_core::models::PostStatus;
use socialhub_core::routes::{guard, Access, Route};
use socialhub_core::views::accounts::total_followers;
use socialhub_core::views::posts::{filter_posts, PostFilter, StatusFilter};
use socialhub_core::{FileKeyValueStore, KeyValueStore, RestoreOutcome, Session, SessionConfig};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

fn file_session(dir: &TempDir) -> (Session, Arc<FileKeyValueStore>) {
    let store = Arc::new(FileKeyValueStore::new(dir.path()));
    let session = Session::open(store.clone(), SessionConfig::default());
    (session, store)
}

mod login {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_non_empty_pairs_succeed_with_local_part_name() {
        let dir = TempDir::new().unwrap();
        let (session, _) = file_session(&dir);

        let cases = [
            ("alice@example.com", "secret", "alice"),
            ("bob", "x", "bob"),
            ("@leading.at", "pw", ""),
            ("first@second@third", "pw", "first"),
        ];

        for (email, password, expected_name) in cases {
            assert!(session.login(email, password).await, "login({email})");
            let user = session.user().unwrap();
            assert_eq!(user.name, expected_name);
            assert_eq!(user.email, email);
            assert_eq!(user.id, "1");
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_field_fails_and_leaves_session_unset() {
        let dir = TempDir::new().unwrap();
        let (session, store) = file_session(&dir);

        for (email, password) in [("", "pw"), ("a@b.fr", ""), ("", "")] {
            assert!(!session.login(email, password).await);
            assert!(session.user().is_none());
        }
        assert_eq!(store.get("socialhub_user").unwrap(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_is_loading_during_delay() {
        let dir = TempDir::new().unwrap();
        let (session, _) = file_session(&dir);
        let session = Arc::new(session);
        assert!(!session.is_loading());

        let task = {
            let session = session.clone();
            tokio::spawn(async move { session.login("a@b.fr", "pw").await })
        };
        tokio::task::yield_now().await;
        assert!(session.is_loading());

        assert!(task.await.unwrap());
        assert!(!session.is_loading());
        assert!(session.is_authenticated());
    }

    #[tokio::test(start_paused = true)]
    async fn test_is_loading_while_any_overlapping_login_waits() {
        let dir = TempDir::new().unwrap();
        let (session, _) = file_session(&dir);
        let session = Arc::new(session);

        let spawn_login = |email: &'static str| {
            let session = session.clone();
            tokio::spawn(async move { session.login(email, "pw").await })
        };

        let first = spawn_login("a@b.fr");
        tokio::time::sleep(Duration::from_millis(500)).await;
        let second = spawn_login("c@d.fr");
        tokio::time::sleep(Duration::from_millis(600)).await;

        assert!(first.is_finished());
        assert!(!second.is_finished());
        assert!(session.is_loading());

        assert!(second.await.unwrap());
        assert!(!session.is_loading());
        assert_eq!(session.user().unwrap().email, "c@d.fr");
    }
}

mod persistence {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_record_survives_restart() {
        let dir = TempDir::new().unwrap();
        {
            let (session, _) = file_session(&dir);
            assert!(session.register("Alice", "alice@example.com", "pw").await);
        }

        let store = Arc::new(FileKeyValueStore::new(dir.path()));
        let session = Session::new(store, SessionConfig::default());
        assert_eq!(session.restore(), RestoreOutcome::Restored);
        assert_eq!(session.user().unwrap().name, "Alice");
    }

    #[tokio::test(start_paused = true)]
    async fn test_logout_always_clears() {
        let dir = TempDir::new().unwrap();
        let (session, store) = file_session(&dir);

        // Logging out with nobody signed in is fine
        session.logout();
        assert!(session.user().is_none());

        session.login("a@b.fr", "pw").await;
        session.logout();
        assert!(session.user().is_none());
        assert_eq!(store.get("socialhub_user").unwrap(), None);
    }

    #[test]
    fn test_malformed_slot_never_fails_startup() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("socialhub_user.json"), "{\"id\": 1").unwrap();

        let (session, store) = file_session(&dir);
        assert!(session.user().is_none());
        assert!(session.is_initialized());
        assert_eq!(store.get("socialhub_user").unwrap(), None);
        assert_eq!(
            guard("/dashboard", &session),
            Access::Redirect(Route::Login)
        );
    }
}

mod pages {
    use super::*;

    #[test]
    fn test_unmatched_search_with_all_is_empty() {
        let posts = fixtures::posts();
        let hits = filter_posts(&posts, &PostFilter::new("no such words", StatusFilter::All));
        assert!(hits.is_empty());
    }

    #[test]
    fn test_draft_status_returns_exactly_the_draft() {
        let posts = fixtures::posts();
        let drafts = filter_posts(
            &posts,
            &PostFilter::new("", StatusFilter::Only(PostStatus::Draft)),
        );
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].status, PostStatus::Draft);
    }

    #[test]
    fn test_connected_followers_total() {
        assert_eq!(total_followers(&fixtures::accounts()), 17_300);
    }
}
