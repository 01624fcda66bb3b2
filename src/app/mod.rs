//! Line-oriented front end over the edit session.

pub mod command;
pub mod render;
pub mod workbench;

pub use command::{Command, ParseError};
pub use workbench::{EventResult, Workbench};
