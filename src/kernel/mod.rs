//! Headless application core (session/action/effect).

pub mod action;
pub mod content;
pub mod effect;
pub mod error;
pub mod services;
pub mod session;

pub use action::Action;
pub use effect::Effect;
pub use error::{ContentError, SessionError};
pub use session::{DispatchResult, EditSession};
