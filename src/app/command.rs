//! Front-end commands: one per input line.
//!
//! A `Command` is what the user typed; most map directly onto a kernel
//! `Action`, the rest (`tabs`, `show`, `help`, `quit`) only affect output.

use crate::kernel::Action;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // ==================== view ====================
    Tabs,
    Show,
    Select(String),
    Help,
    Quit,

    // ==================== auth ====================
    Login { username: String, password: String },
    Logout,

    // ==================== editing ====================
    Edit,
    Save,
    Set(String),
    Add { name: String, text: String },
    Delete,
    Undo,
    Redo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Empty,
    Unknown(String),
    MissingArgument(&'static str),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Empty => write!(f, "empty command"),
            ParseError::Unknown(word) => write!(f, "unknown command: {} (try `help`)", word),
            ParseError::MissingArgument(usage) => write!(f, "usage: {}", usage),
        }
    }
}

impl std::error::Error for ParseError {}

pub const HELP: &str = "\
commands:
  tabs                     list sections
  show                     print the active section
  select <name>            switch to a section
  login <user> <password>  log in
  logout                   log out
  edit                     enter edit mode
  save                     save and leave edit mode
  set <text>               replace the active section's text
  add <name> | <text>      add a section
  delete                   delete the active section
  undo | redo              step through history
  help | quit
text arguments accept \\n for a line break";

impl Command {
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "" => return Err(ParseError::Empty),
            "tabs" => Command::Tabs,
            "show" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            "logout" => Command::Logout,
            "edit" => Command::Edit,
            "save" => Command::Save,
            "delete" => Command::Delete,
            "undo" => Command::Undo,
            "redo" => Command::Redo,
            "select" => {
                if rest.is_empty() {
                    return Err(ParseError::MissingArgument("select <name>"));
                }
                Command::Select(rest.to_string())
            }
            "login" => {
                let mut parts = rest.split_whitespace();
                match (parts.next(), parts.next()) {
                    (Some(username), Some(password)) => Command::Login {
                        username: username.to_string(),
                        password: password.to_string(),
                    },
                    _ => return Err(ParseError::MissingArgument("login <user> <password>")),
                }
            }
            "set" => Command::Set(unescape_text(rest)),
            "add" => {
                let (name, text) = rest
                    .split_once('|')
                    .ok_or(ParseError::MissingArgument("add <name> | <text>"))?;
                Command::Add {
                    name: name.trim().to_string(),
                    text: unescape_text(text.trim()),
                }
            }
            other => return Err(ParseError::Unknown(other.to_string())),
        };

        Ok(command)
    }

    pub fn name(&self) -> &str {
        match self {
            Command::Tabs => "tabs",
            Command::Show => "show",
            Command::Select(_) => "select",
            Command::Help => "help",
            Command::Quit => "quit",
            Command::Login { .. } => "login",
            Command::Logout => "logout",
            Command::Edit => "edit",
            Command::Save => "save",
            Command::Set(_) => "set",
            Command::Add { .. } => "add",
            Command::Delete => "delete",
            Command::Undo => "undo",
            Command::Redo => "redo",
        }
    }

    /// Whether the command needs a yes/no confirmation before dispatch.
    pub fn needs_confirmation(&self) -> bool {
        matches!(self, Command::Delete)
    }

    /// The kernel action for this command, if it has one.
    pub fn to_action(&self) -> Option<Action> {
        let action = match self {
            Command::Tabs | Command::Show | Command::Help | Command::Quit => return None,
            Command::Select(name) => Action::SelectTab { name: name.clone() },
            Command::Login { username, password } => Action::Login {
                username: username.clone(),
                password: password.clone(),
            },
            Command::Logout => Action::Logout,
            Command::Edit => Action::EnterEditMode,
            Command::Save => Action::Save,
            Command::Set(text) => Action::EditActive { text: text.clone() },
            Command::Add { name, text } => Action::AddSection {
                name: name.clone(),
                text: text.clone(),
            },
            Command::Delete => Action::DeleteActive,
            Command::Undo => Action::Undo,
            Command::Redo => Action::Redo,
        };
        Some(action)
    }
}

/// Turns `\n` into a line break and `\\` into a backslash.
pub fn unescape_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/app/command.rs"]
mod tests;
