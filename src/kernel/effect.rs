use super::error::SessionError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// The live snapshot was written to the store.
    Persisted,
    /// Message for the user, e.g. save confirmation.
    Notice(String),
    /// The action was refused; state is unchanged.
    Rejected(SessionError),
}
