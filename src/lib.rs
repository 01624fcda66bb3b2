//! folio - sectioned page content editor library
//!
//! Modules:
//! - models: data model (Snapshot, HistoryLog)
//! - kernel: section operations, edit session, service ports/adapters
//! - app: line-oriented front end (command parsing, rendering)

pub mod app;
pub mod kernel;
pub mod models;
