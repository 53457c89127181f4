//! Session gate: a single user record in a key-value slot
//!
//! - [`KeyValueStore`]: where the record lives (file-backed or in-memory)
//! - [`Session`]: mock login/register/logout over that slot

mod gate;
mod slot;

pub use gate::{RestoreOutcome, Session, SessionConfig, DEFAULT_LATENCY, DEFAULT_STORAGE_KEY};
pub(crate) use slot::validate_key;
pub use slot::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
