use super::*;
use crate::kernel::services::adapters::{FixedCredentialGate, MemoryStore};
use crate::models::Snapshot;

type TestWorkbench = Workbench<MemoryStore, FixedCredentialGate>;

fn new_workbench() -> TestWorkbench {
    let mut snapshot = Snapshot::new();
    snapshot.upsert("profile", "p");
    snapshot.upsert("research", "r");
    Workbench::new(EditSession::open(
        MemoryStore::with_snapshot(snapshot),
        FixedCredentialGate::default(),
    ))
}

fn run(workbench: &mut TestWorkbench, line: &str) -> (EventResult, String) {
    run_with(workbench, line, true)
}

fn run_with(workbench: &mut TestWorkbench, line: &str, answer: bool) -> (EventResult, String) {
    let mut out = Vec::new();
    let mut confirm = |_: &str| answer;
    let result = workbench.handle_line(line, &mut out, &mut confirm).unwrap();
    (result, String::from_utf8(out).unwrap())
}

fn start_editing(workbench: &mut TestWorkbench) {
    run(workbench, "login bhagban bhagban");
    run(workbench, "edit");
    assert!(workbench.session().is_editing());
}

#[test]
fn test_quit_and_blank_lines() {
    let mut workbench = new_workbench();
    assert_eq!(run(&mut workbench, "quit").0, EventResult::Quit);
    assert_eq!(run(&mut workbench, "   ").0, EventResult::Ignored);
}

#[test]
fn test_parse_error_is_printed() {
    let mut workbench = new_workbench();
    let (result, out) = run(&mut workbench, "frobnicate");
    assert_eq!(result, EventResult::Ignored);
    assert!(out.starts_with("! unknown command: frobnicate"));
}

#[test]
fn test_rejection_is_printed() {
    let mut workbench = new_workbench();
    let (_, out) = run(&mut workbench, "set hello");
    assert_eq!(out, "! Log in to edit content\n");
    assert_eq!(workbench.session().active_text(), "p");
}

#[test]
fn test_edit_flow_renders_view() {
    let mut workbench = new_workbench();
    start_editing(&mut workbench);

    let (result, out) = run(&mut workbench, "set first\\nsecond");
    assert_eq!(result, EventResult::Consumed);
    assert!(out.contains("Profile\n  first\n  second"));
    assert!(out.contains("history 2/2"));

    let (_, out) = run(&mut workbench, "save");
    assert!(out.starts_with("Changes saved successfully\n"));
    assert!(!workbench.session().is_editing());
}

#[test]
fn test_delete_asks_for_confirmation() {
    let mut workbench = new_workbench();
    start_editing(&mut workbench);
    run(&mut workbench, "select research");

    let (result, _) = run_with(&mut workbench, "delete", false);
    assert_eq!(result, EventResult::Ignored);
    assert!(workbench.session().current().contains("research"));

    run_with(&mut workbench, "delete", true);
    assert!(!workbench.session().current().contains("research"));
    assert_eq!(workbench.session().active_tab(), "profile");
}

#[test]
fn test_delete_profile_skips_confirmation() {
    let mut workbench = new_workbench();
    start_editing(&mut workbench);

    let mut out = Vec::new();
    let mut asked = false;
    let mut confirm = |_: &str| {
        asked = true;
        true
    };
    workbench
        .handle_line("delete", &mut out, &mut confirm)
        .unwrap();

    assert!(!asked);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "! The profile section cannot be deleted.\n"
    );
}

#[test]
fn test_tabs_lists_sections() {
    let mut workbench = new_workbench();
    let (_, out) = run(&mut workbench, "tabs");
    assert_eq!(out, "[Profile] | Research\n");
}
