//! Services layer (ports + adapters).
//!
//! - `ports`: contracts the session depends on (auth gate, snapshot store, settings).
//! - `adapters`: file system backed implementations.

pub mod adapters;
pub mod ports;
