//! Service adapters: file system and credential implementations.

pub mod auth;
pub mod paths;
pub mod settings;
pub mod store;

pub use auth::FixedCredentialGate;
pub use paths::{ensure_log_dir, get_content_path, get_log_dir};
pub use settings::{ensure_settings_file, get_settings_path, load_settings, load_settings_from};
pub use store::{JsonFileStore, MemoryStore};
