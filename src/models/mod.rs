//! Data models: section snapshots and their history.

pub mod content_history;
pub mod snapshot;

pub use content_history::HistoryLog;
pub use snapshot::{Section, Snapshot, PROFILE_SECTION};
