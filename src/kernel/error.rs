use compact_str::CompactString;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// Section name or body is blank.
    EmptyName,
    /// Attempt to delete the profile section.
    ProtectedSection,
    UnknownSection(CompactString),
}

impl std::fmt::Display for ContentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentError::EmptyName => write!(f, "Section name and content must not be empty"),
            ContentError::ProtectedSection => write!(f, "The profile section cannot be deleted."),
            ContentError::UnknownSection(name) => write!(f, "No such section: {}", name),
        }
    }
}

impl std::error::Error for ContentError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    InvalidCredentials,
    NotLoggedIn,
    NotEditing,
    Content(ContentError),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::InvalidCredentials => write!(f, "Invalid credentials"),
            SessionError::NotLoggedIn => write!(f, "Log in to edit content"),
            SessionError::NotEditing => write!(f, "Enter edit mode to change content"),
            SessionError::Content(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Content(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ContentError> for SessionError {
    fn from(e: ContentError) -> Self {
        SessionError::Content(e)
    }
}
