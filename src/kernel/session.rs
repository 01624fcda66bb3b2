//! Edit session: the single owner of content history and editor state.
//!
//! Actions come in through `dispatch`; accepted mutations push a new
//! snapshot onto the history and write it to the store.

use compact_str::CompactString;

use super::content;
use super::error::SessionError;
use super::{Action, Effect};
use crate::kernel::services::ports::{AuthGate, SnapshotStore};
use crate::models::{HistoryLog, Snapshot, PROFILE_SECTION};

const SAVED_NOTICE: &str = "Changes saved successfully";

#[derive(Debug, Default, PartialEq, Eq)]
pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn unchanged() -> Self {
        Self::default()
    }

    fn changed(effects: Vec<Effect>) -> Self {
        Self {
            effects,
            state_changed: true,
        }
    }
}

pub struct EditSession<S, A> {
    history: HistoryLog,
    active_tab: CompactString,
    edit_mode: bool,
    store: S,
    auth: A,
}

impl<S: SnapshotStore, A: AuthGate> EditSession<S, A> {
    /// Starts from the stored snapshot, or the built-in content when the
    /// store is empty or unreadable. Stored content always gets `profile`
    /// as its first section.
    pub fn open(store: S, auth: A) -> Self {
        let initial = match store.load() {
            Ok(Some(mut snapshot)) if !snapshot.is_empty() => {
                if snapshot.first_name() != Some(PROFILE_SECTION) {
                    tracing::warn!("stored content has no leading profile section, repairing");
                    snapshot.pin_first(PROFILE_SECTION, "");
                }
                snapshot
            }
            Ok(_) => Snapshot::builtin(),
            Err(e) => {
                tracing::warn!(error = %e, "stored content unreadable, using built-in content");
                Snapshot::builtin()
            }
        };
        let active_tab = initial
            .first_name()
            .map(CompactString::from)
            .unwrap_or_else(|| CompactString::new(PROFILE_SECTION));

        Self {
            history: HistoryLog::new(initial),
            active_tab,
            edit_mode: false,
            store,
            auth,
        }
    }

    pub fn current(&self) -> &Snapshot {
        self.history.current()
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn active_tab(&self) -> &str {
        &self.active_tab
    }

    /// Body of the active tab; empty when it has no section.
    pub fn active_text(&self) -> &str {
        self.current().get(&self.active_tab).unwrap_or("")
    }

    pub fn tabs(&self) -> impl Iterator<Item = &str> {
        self.current().names()
    }

    pub fn is_logged_in(&self) -> bool {
        self.auth.is_logged_in()
    }

    pub fn is_editing(&self) -> bool {
        self.edit_mode
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn auth(&self) -> &A {
        &self.auth
    }

    /// Runs `action`; a refusal becomes an `Effect::Rejected` and leaves
    /// state untouched.
    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match self.apply(action) {
            Ok(result) => result,
            Err(e) => {
                tracing::debug!(error = %e, "action rejected");
                DispatchResult {
                    effects: vec![Effect::Rejected(e)],
                    state_changed: false,
                }
            }
        }
    }

    pub fn apply(&mut self, action: Action) -> Result<DispatchResult, SessionError> {
        if action.is_mutation() {
            self.ensure_editing()?;
        }

        match action {
            Action::SelectTab { name } => Ok(self.select_tab(&name)),
            Action::Login { username, password } => {
                if !self.auth.login(&username, &password) {
                    return Err(SessionError::InvalidCredentials);
                }
                Ok(DispatchResult::changed(Vec::new()))
            }
            Action::Logout => {
                self.auth.logout();
                self.edit_mode = false;
                tracing::info!("logged out");
                Ok(DispatchResult::changed(Vec::new()))
            }
            Action::EnterEditMode => {
                if !self.auth.is_logged_in() {
                    return Err(SessionError::NotLoggedIn);
                }
                let state_changed = !self.edit_mode;
                self.edit_mode = true;
                Ok(DispatchResult {
                    effects: Vec::new(),
                    state_changed,
                })
            }
            Action::Save => {
                if !self.auth.is_logged_in() {
                    return Err(SessionError::NotLoggedIn);
                }
                self.edit_mode = false;
                let mut effects = Vec::new();
                effects.extend(self.persist());
                effects.push(Effect::Notice(SAVED_NOTICE.to_string()));
                tracing::info!(sections = self.current().len(), "content saved");
                Ok(DispatchResult::changed(effects))
            }
            Action::EditActive { text } => {
                if self.current().get(&self.active_tab) == Some(text.as_str()) {
                    return Ok(DispatchResult::unchanged());
                }
                let next = content::edit_section(self.current(), &self.active_tab, &text)?;
                Ok(self.commit(next))
            }
            Action::AddSection { name, text } => {
                let next = content::add_section(self.current(), &name, &text)?;
                self.active_tab = content::normalize_name(&name);
                tracing::debug!(section = %self.active_tab, "section added");
                Ok(self.commit(next))
            }
            Action::DeleteActive => {
                let deleted_index = self.current().position(&self.active_tab);
                let next = content::delete_section(self.current(), &self.active_tab)?;
                let fallback = deleted_index
                    .and_then(|idx| content::fallback_tab(&next, idx))
                    .map(CompactString::from);
                tracing::debug!(section = %self.active_tab, "section deleted");
                if let Some(tab) = fallback {
                    self.active_tab = tab;
                }
                Ok(self.commit(next))
            }
            Action::Undo => {
                if !self.history.can_undo() {
                    return Ok(DispatchResult::unchanged());
                }
                self.history.undo();
                Ok(self.after_travel())
            }
            Action::Redo => {
                if !self.history.can_redo() {
                    return Ok(DispatchResult::unchanged());
                }
                self.history.redo();
                Ok(self.after_travel())
            }
        }
    }

    fn ensure_editing(&self) -> Result<(), SessionError> {
        if !self.auth.is_logged_in() {
            return Err(SessionError::NotLoggedIn);
        }
        if !self.edit_mode {
            return Err(SessionError::NotEditing);
        }
        Ok(())
    }

    fn select_tab(&mut self, name: &str) -> DispatchResult {
        if !self.current().contains(name) || self.active_tab == name {
            return DispatchResult::unchanged();
        }
        self.active_tab = CompactString::from(name);
        DispatchResult::changed(Vec::new())
    }

    fn commit(&mut self, next: Snapshot) -> DispatchResult {
        self.history.push(next);
        tracing::debug!(
            cursor = self.history.cursor(),
            entries = self.history.len(),
            "history push"
        );
        DispatchResult::changed(self.persist().into_iter().collect())
    }

    fn after_travel(&mut self) -> DispatchResult {
        if !self.current().contains(&self.active_tab) {
            if let Some(first) = self.history.current().first_name() {
                self.active_tab = CompactString::from(first);
            }
        }
        tracing::debug!(cursor = self.history.cursor(), "history moved");
        DispatchResult::changed(self.persist().into_iter().collect())
    }

    fn persist(&mut self) -> Option<Effect> {
        match self.store.save(self.history.current()) {
            Ok(()) => Some(Effect::Persisted),
            Err(e) => {
                tracing::warn!(error = %e, "failed to persist content");
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/session.rs"]
mod tests;
