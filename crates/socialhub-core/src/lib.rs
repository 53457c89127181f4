//! socialhub-core - Core library for socialhub
//!
//! Provides models, sample data, fr-FR formatting, the session gate,
//! routes and the page view models shared by the TUI, web and CLI frontends.

pub mod config;
pub mod error;
pub mod event;
pub mod fixtures;
pub mod format;
pub mod models;
pub mod routes;
pub mod session;
pub mod views;

pub use config::{AppConfig, WebConfig};
pub use error::CoreError;
pub use event::{EventBus, SessionEvent};
pub use routes::{guard, Access, Route, NAVIGATION};
pub use session::{
    FileKeyValueStore, KeyValueStore, MemoryKeyValueStore, RestoreOutcome, Session, SessionConfig,
};
