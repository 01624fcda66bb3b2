//! Section operations over snapshots.
//!
//! Every operation takes the current snapshot by reference and returns a new
//! one; the input is never modified.

use compact_str::CompactString;

use super::error::ContentError;
use crate::models::{Snapshot, PROFILE_SECTION};

pub fn edit_section(snapshot: &Snapshot, name: &str, text: &str) -> Result<Snapshot, ContentError> {
    if !snapshot.contains(name) {
        return Err(ContentError::UnknownSection(CompactString::from(name)));
    }
    let mut next = snapshot.clone();
    next.upsert(name, text);
    Ok(next)
}

/// Lowercases `raw_name`; an existing section with that name is overwritten.
pub fn add_section(
    snapshot: &Snapshot,
    raw_name: &str,
    text: &str,
) -> Result<Snapshot, ContentError> {
    if raw_name.trim().is_empty() || text.trim().is_empty() {
        return Err(ContentError::EmptyName);
    }
    let mut next = snapshot.clone();
    next.upsert(normalize_name(raw_name), text);
    Ok(next)
}

pub fn delete_section(snapshot: &Snapshot, name: &str) -> Result<Snapshot, ContentError> {
    if name == PROFILE_SECTION {
        return Err(ContentError::ProtectedSection);
    }
    let mut next = snapshot.clone();
    next.remove(name)
        .ok_or_else(|| ContentError::UnknownSection(CompactString::from(name)))?;
    Ok(next)
}

pub fn normalize_name(raw_name: &str) -> CompactString {
    CompactString::from(raw_name.to_lowercase())
}

/// Tab to activate once the tab at `deleted_index` is gone from `after`:
/// the one before it, or the first remaining tab.
pub fn fallback_tab(after: &Snapshot, deleted_index: usize) -> Option<&str> {
    deleted_index
        .checked_sub(1)
        .and_then(|prev| after.names().nth(prev))
        .or_else(|| after.first_name())
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/content.rs"]
mod tests;
