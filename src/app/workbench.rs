//! Workbench: routes input lines to the edit session and prints the result.

use std::io::{self, Write};

use super::command::{Command, HELP};
use super::render;
use crate::kernel::services::ports::{AuthGate, SnapshotStore};
use crate::kernel::EditSession;
use crate::models::PROFILE_SECTION;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Consumed,
    Ignored,
    Quit,
}

pub struct Workbench<S, A> {
    session: EditSession<S, A>,
}

impl<S: SnapshotStore, A: AuthGate> Workbench<S, A> {
    pub fn new(session: EditSession<S, A>) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &EditSession<S, A> {
        &self.session
    }

    pub fn render_view(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}", render::view(&self.session))
    }

    /// Handles one input line. `confirm` is asked before destructive
    /// commands and receives the question to show.
    pub fn handle_line(
        &mut self,
        line: &str,
        out: &mut impl Write,
        confirm: &mut dyn FnMut(&str) -> bool,
    ) -> io::Result<EventResult> {
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(super::command::ParseError::Empty) => return Ok(EventResult::Ignored),
            Err(e) => {
                writeln!(out, "! {}", e)?;
                return Ok(EventResult::Ignored);
            }
        };
        tracing::trace!(command = command.name(), "input");

        match command {
            Command::Quit => return Ok(EventResult::Quit),
            Command::Help => {
                writeln!(out, "{}", HELP)?;
                return Ok(EventResult::Consumed);
            }
            Command::Tabs => {
                writeln!(
                    out,
                    "{}",
                    render::tab_bar(
                        self.session.tabs(),
                        self.session.active_tab(),
                        self.session.is_editing()
                    )
                )?;
                return Ok(EventResult::Consumed);
            }
            Command::Show => {
                self.render_view(out)?;
                return Ok(EventResult::Consumed);
            }
            _ => {}
        }

        // The profile refusal comes from the session; only real deletions ask.
        if command.needs_confirmation() && self.session.active_tab() != PROFILE_SECTION {
            let question = format!(
                "Are you sure you want to delete the \"{}\" section?",
                self.session.active_tab()
            );
            if !confirm(&question) {
                return Ok(EventResult::Ignored);
            }
        }

        let Some(action) = command.to_action() else {
            return Ok(EventResult::Ignored);
        };
        let result = self.session.dispatch(action);
        for effect in &result.effects {
            if let Some(line) = render::effect(effect) {
                writeln!(out, "{}", line)?;
            }
        }
        if result.state_changed {
            self.render_view(out)?;
        }

        Ok(EventResult::Consumed)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/workbench.rs"]
mod tests;
