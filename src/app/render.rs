//! Plain-text rendering of the session for the line front end.

use crate::kernel::services::ports::{AuthGate, SnapshotStore};
use crate::kernel::{EditSession, Effect};

/// Section names are shown with a leading capital, the rest untouched.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn tab_bar<'a>(tabs: impl Iterator<Item = &'a str>, active: &str, editing: bool) -> String {
    let mut parts: Vec<String> = tabs
        .map(|tab| {
            if tab == active {
                format!("[{}]", capitalize(tab))
            } else {
                capitalize(tab)
            }
        })
        .collect();
    if editing {
        parts.push("+ Add Section".to_string());
    }
    parts.join(" | ")
}

pub fn section(name: &str, text: &str) -> String {
    let mut out = capitalize(name);
    for line in text.split('\n') {
        out.push('\n');
        out.push_str("  ");
        out.push_str(line);
    }
    out
}

pub fn status<S: SnapshotStore, A: AuthGate>(session: &EditSession<S, A>) -> String {
    let mode = match (session.is_logged_in(), session.is_editing()) {
        (_, true) => "editing",
        (true, false) => "logged in",
        (false, false) => "viewing",
    };
    if !session.is_editing() {
        return mode.to_string();
    }
    let history = session.history();
    format!(
        "{} | history {}/{} | undo {} | redo {}",
        mode,
        history.cursor() + 1,
        history.len(),
        on_off(session.can_undo()),
        on_off(session.can_redo()),
    )
}

pub fn view<S: SnapshotStore, A: AuthGate>(session: &EditSession<S, A>) -> String {
    format!(
        "{}\n\n{}\n\n({})",
        tab_bar(session.tabs(), session.active_tab(), session.is_editing()),
        section(session.active_tab(), session.active_text()),
        status(session),
    )
}

/// User-facing line for an effect; `Persisted` is silent.
pub fn effect(effect: &Effect) -> Option<String> {
    match effect {
        Effect::Persisted => None,
        Effect::Notice(message) => Some(message.clone()),
        Effect::Rejected(e) => Some(format!("! {}", e)),
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/render.rs"]
mod tests;
