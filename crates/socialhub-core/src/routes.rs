//! Application routes, navigation entries and the dashboard guard

use crate::session::Session;
use serde::Serialize;
use std::fmt;

/// Every addressable view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Home,
    Login,
    Register,
    Dashboard,
    Posts,
    Schedule,
    Analytics,
    Accounts,
    Settings,
}

impl Route {
    pub const ALL: [Route; 9] = [
        Route::Home,
        Route::Login,
        Route::Register,
        Route::Dashboard,
        Route::Posts,
        Route::Schedule,
        Route::Analytics,
        Route::Accounts,
        Route::Settings,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/auth/login",
            Route::Register => "/auth/register",
            Route::Dashboard => "/dashboard",
            Route::Posts => "/dashboard/posts",
            Route::Schedule => "/dashboard/schedule",
            Route::Analytics => "/dashboard/analytics",
            Route::Accounts => "/dashboard/accounts",
            Route::Settings => "/dashboard/settings",
        }
    }

    /// Exact match; a trailing slash is ignored except on "/"
    pub fn from_path(path: &str) -> Option<Self> {
        let path = match path.strip_suffix('/') {
            Some(stripped) if !stripped.is_empty() => stripped,
            _ => path,
        };
        Self::ALL.iter().copied().find(|r| r.path() == path)
    }

    pub fn is_protected(&self) -> bool {
        is_protected_path(self.path())
    }

    /// Navigation label (French, as shown in the sidebar)
    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Accueil",
            Route::Login => "Connexion",
            Route::Register => "Inscription",
            Route::Dashboard => "Dashboard",
            Route::Posts => "Publications",
            Route::Schedule => "Planification",
            Route::Analytics => "Analytics",
            Route::Accounts => "Réseaux Sociaux",
            Route::Settings => "Paramètres",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Sidebar entries, in display order
pub const NAVIGATION: [Route; 6] = [
    Route::Dashboard,
    Route::Posts,
    Route::Schedule,
    Route::Analytics,
    Route::Accounts,
    Route::Settings,
];

/// `/dashboard` and anything under `/dashboard/`
pub fn is_protected_path(path: &str) -> bool {
    path == "/dashboard" || path.starts_with("/dashboard/")
}

/// Result of checking a path against the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted,
    /// The initial restore has not run; render a loading indicator
    Pending,
    Redirect(Route),
}

/// Decide whether `path` may be shown for the current session
pub fn guard(path: &str, session: &Session) -> Access {
    if !is_protected_path(path) {
        return Access::Granted;
    }
    if !session.is_initialized() {
        return Access::Pending;
    }
    if session.is_authenticated() {
        Access::Granted
    } else {
        Access::Redirect(Route::Login)
    }
}

/// Where "/" sends the visitor
pub fn landing(session: &Session) -> Route {
    if session.is_authenticated() {
        Route::Dashboard
    } else {
        Route::Login
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{MemoryKeyValueStore, SessionConfig};
    use std::sync::Arc;

    fn empty_session() -> Session {
        Session::new(Arc::new(MemoryKeyValueStore::new()), SessionConfig::default())
    }

    #[test]
    fn test_path_round_trip_all_routes() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
        assert_eq!(Route::from_path("/dashboard/posts/"), Some(Route::Posts));
        assert_eq!(Route::from_path("/dashboard/unknown"), None);
    }

    #[test]
    fn test_protected_prefix() {
        assert!(is_protected_path("/dashboard"));
        assert!(is_protected_path("/dashboard/anything/deep"));
        assert!(!is_protected_path("/dashboards"));
        assert!(!is_protected_path("/auth/login"));
        assert!(!Route::Home.is_protected());
        assert!(Route::Settings.is_protected());
    }

    #[test]
    fn test_navigation_order() {
        let labels: Vec<_> = NAVIGATION.iter().map(|r| r.label()).collect();
        assert_eq!(
            labels,
            [
                "Dashboard",
                "Publications",
                "Planification",
                "Analytics",
                "Réseaux Sociaux",
                "Paramètres"
            ]
        );
    }

    #[test]
    fn test_guard_pending_then_redirect() {
        let session = empty_session();
        assert_eq!(guard("/dashboard", &session), Access::Pending);
        assert_eq!(guard("/auth/login", &session), Access::Granted);

        session.restore();
        assert_eq!(
            guard("/dashboard/posts", &session),
            Access::Redirect(Route::Login)
        );
        assert_eq!(landing(&session), Route::Login);
    }
}
