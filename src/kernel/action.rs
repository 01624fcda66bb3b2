/// UI events the renderer sends to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectTab { name: String },
    Login { username: String, password: String },
    Logout,
    EnterEditMode,
    /// Persists the live snapshot and leaves edit mode.
    Save,
    EditActive { text: String },
    AddSection { name: String, text: String },
    /// Deletes the active section. Confirmation happens before dispatch.
    DeleteActive,
    Undo,
    Redo,
}

impl Action {
    /// Actions that only run while logged in and in edit mode.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Action::EditActive { .. }
                | Action::AddSection { .. }
                | Action::DeleteActive
                | Action::Undo
                | Action::Redo
        )
    }
}
