//! Landing page: product pitch with links to login and register

use crate::routes::{landing, Route};
use crate::session::Session;
use serde::Serialize;

pub const TITLE: &str = "SocialHub";
pub const PITCH: &str =
    "Gérez tous vos réseaux sociaux en un seul endroit. Planifiez, publiez et analysez vos contenus.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 3] = [
    Feature {
        icon: "📊",
        title: "Analytics Avancés",
        description: "Suivez les performances de vos publications sur tous vos réseaux sociaux.",
    },
    Feature {
        icon: "⏰",
        title: "Planification",
        description: "Planifiez vos publications à l'avance pour maintenir une présence constante.",
    },
    Feature {
        icon: "🔗",
        title: "Multi-Plateformes",
        description: "Gérez Facebook, Instagram, Twitter, LinkedIn et bien plus encore.",
    },
];

/// A call-to-action link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct LandingView {
    pub title: &'static str,
    pub pitch: &'static str,
    pub links: Vec<Link>,
    pub features: [Feature; 3],
}

impl LandingView {
    /// Signed-in visitors get a shortcut to the dashboard instead of the forms
    pub fn load(session: &Session) -> Self {
        let links = match landing(session) {
            Route::Dashboard => vec![Link {
                label: "Ouvrir le tableau de bord",
                href: Route::Dashboard.path(),
            }],
            _ => vec![
                Link {
                    label: "Se connecter",
                    href: Route::Login.path(),
                },
                Link {
                    label: "S'inscrire",
                    href: Route::Register.path(),
                },
            ],
        };

        Self {
            title: TITLE,
            pitch: PITCH,
            links,
            features: FEATURES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{MemoryKeyValueStore, SessionConfig};
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn test_links_follow_session() {
        let config = SessionConfig {
            latency: Duration::ZERO,
            ..SessionConfig::default()
        };
        let session = Session::open(Arc::new(MemoryKeyValueStore::new()), config);

        let hrefs: Vec<_> = LandingView::load(&session).links.iter().map(|l| l.href).collect();
        assert_eq!(hrefs, vec!["/auth/login", "/auth/register"]);

        assert!(session.login("ana@example.com", "pw").await);
        let view = LandingView::load(&session);
        assert_eq!(view.links.len(), 1);
        assert_eq!(view.links[0].href, "/dashboard");
    }
}
