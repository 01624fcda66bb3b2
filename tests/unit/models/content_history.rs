use super::*;

fn snap(tag: &str) -> Snapshot {
    let mut snapshot = Snapshot::new();
    snapshot.upsert("profile", tag);
    snapshot
}

#[test]
fn test_new_history_has_single_entry() {
    let history = HistoryLog::new(snap("a"));
    assert_eq!(history.len(), 1);
    assert_eq!(history.cursor(), 0);
    assert_eq!(history.current(), &snap("a"));
    assert!(!history.can_undo());
    assert!(!history.can_redo());
}

#[test]
fn test_undo_redo() {
    let mut history = HistoryLog::new(snap("a"));
    history.push(snap("b"));
    history.push(snap("c"));

    assert!(history.can_undo());
    assert!(!history.can_redo());

    assert_eq!(history.undo(), &snap("b"));
    assert_eq!(history.undo(), &snap("a"));
    assert!(history.can_redo());

    assert_eq!(history.redo(), &snap("b"));
    assert_eq!(history.redo(), &snap("c"));
    assert_eq!(history.len(), 3);
}

#[test]
fn test_undo_at_start_is_noop() {
    let mut history = HistoryLog::new(snap("a"));
    history.push(snap("b"));
    history.undo();

    assert_eq!(history.undo(), &snap("a"));
    assert_eq!(history.cursor(), 0);
    assert_eq!(history.len(), 2);
}

#[test]
fn test_redo_at_tail_is_noop() {
    let mut history = HistoryLog::new(snap("a"));
    history.push(snap("b"));

    assert_eq!(history.redo(), &snap("b"));
    assert_eq!(history.cursor(), 1);
    assert_eq!(history.len(), 2);
}

#[test]
fn test_push_after_undo_discards_redo_branch() {
    let mut history = HistoryLog::new(snap("a"));
    history.push(snap("b"));
    history.push(snap("c"));

    history.undo();
    history.undo();
    history.push(snap("d"));

    assert_eq!(history.entries(), &[snap("a"), snap("d")]);
    assert_eq!(history.cursor(), 1);
    assert!(!history.can_redo());
    assert_eq!(history.redo(), &snap("d"));
}

#[test]
fn test_current_matches_replay_of_kept_pushes() {
    // Model: the kept pushes are exactly entries[..=cursor] of a plain Vec.
    let mut history = HistoryLog::new(snap("0"));
    let mut model: Vec<Snapshot> = vec![snap("0")];
    let mut model_cursor = 0usize;

    let script = "ppupuurpppuuurrrpuruu";
    for (step, op) in script.chars().enumerate() {
        match op {
            'p' => {
                let next = snap(&format!("s{}", step));
                model.truncate(model_cursor + 1);
                model.push(next.clone());
                model_cursor = model.len() - 1;
                history.push(next);
            }
            'u' => {
                model_cursor = model_cursor.saturating_sub(1);
                history.undo();
            }
            'r' => {
                if model_cursor + 1 < model.len() {
                    model_cursor += 1;
                }
                history.redo();
            }
            _ => unreachable!(),
        }
        assert_eq!(history.current(), &model[model_cursor], "step {}", step);
        assert_eq!(history.entries(), model.as_slice(), "step {}", step);
    }
}
