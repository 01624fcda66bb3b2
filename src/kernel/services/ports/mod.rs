//! Service ports: traits + data contracts.

pub mod auth;
pub mod settings;
pub mod store;

pub use auth::AuthGate;
pub use settings::{Credentials, Settings};
pub use store::{Result as StoreResult, SnapshotStore, StoreError};
