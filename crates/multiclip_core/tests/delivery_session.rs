mod common;

use common::{FakeAutomation, FakeClipboard};
use multiclip_core::{
    DeliveryController, DeliveryError, DeliveryOptions, DeliveryOutcome, FocusIdentity,
    SessionState,
};
use pretty_assertions::assert_eq;

fn items(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[test]
fn completes_and_restores_clipboard() {
    let mut clipboard = FakeClipboard::with_content("original");
    let mut automation = FakeAutomation::focused_on("com.apple.Notes");

    let mut controller =
        DeliveryController::new(&mut clipboard, &mut automation, DeliveryOptions::immediate());
    let report = controller.deliver(&items(&["one", "two", "three"])).unwrap();
    assert_eq!(controller.state(), SessionState::Completed);

    assert_eq!(report.outcome, DeliveryOutcome::Completed);
    assert_eq!(report.delivered, 3);
    assert_eq!(report.total, 3);
    assert!(report.clipboard_restored);

    assert_eq!(automation.pastes, 3);
    assert_eq!(automation.confirms, 3);
    assert_eq!(clipboard.writes, vec!["one", "two", "three", "original"]);
    assert_eq!(clipboard.content, "original");
}

#[test]
fn focus_change_before_third_item_delivers_two() {
    let mut clipboard = FakeClipboard::with_content("keep me");
    // init, item 1, item 2, item 3
    let mut automation =
        FakeAutomation::with_script(&["com.slack", "com.slack", "com.slack", "com.apple.Safari"]);

    let mut controller =
        DeliveryController::new(&mut clipboard, &mut automation, DeliveryOptions::immediate());
    let report = controller
        .deliver(&items(&["a", "b", "c", "d"]))
        .unwrap();
    assert_eq!(controller.state(), SessionState::Aborted { at: 2 });

    assert_eq!(
        report.outcome,
        DeliveryOutcome::Aborted {
            observed_focus: FocusIdentity::new("com.apple.Safari")
        }
    );
    assert_eq!(report.delivered, 2);
    assert_eq!(automation.pastes, 2);
    assert_eq!(automation.confirms, 2);
    assert_eq!(clipboard.writes, vec!["a", "b", "keep me"]);
    assert_eq!(clipboard.content, "keep me");
}

#[test]
fn focus_change_before_first_item_delivers_nothing() {
    let mut clipboard = FakeClipboard::with_content("before");
    let mut automation = FakeAutomation::with_script(&["com.term", "com.other"]);

    let report = DeliveryController::new(&mut clipboard, &mut automation, DeliveryOptions::immediate())
        .deliver(&items(&["x"]))
        .unwrap();

    assert_eq!(report.delivered, 0);
    assert_eq!(automation.pastes, 0);
    assert_eq!(clipboard.writes, vec!["before"]);
}

#[test]
fn automation_failure_still_restores_clipboard() {
    let mut clipboard = FakeClipboard::with_content("precious");
    let mut automation = FakeAutomation::focused_on("com.app");
    automation.fail_paste_at = Some(1);

    let mut controller =
        DeliveryController::new(&mut clipboard, &mut automation, DeliveryOptions::immediate());
    let err = controller.deliver(&items(&["first", "second", "third"])).unwrap_err();
    assert_eq!(controller.state(), SessionState::Failed { at: 1 });

    assert!(matches!(err, DeliveryError::Automation { delivered: 1, .. }));
    assert_eq!(err.delivered(), 1);
    assert_eq!(clipboard.content, "precious");
    assert_eq!(clipboard.writes.last().map(String::as_str), Some("precious"));
}

#[test]
fn clipboard_write_failure_still_restores_clipboard() {
    let mut clipboard = FakeClipboard::with_content("snapshot");
    clipboard.fail_write_at = Some(1);
    let mut automation = FakeAutomation::focused_on("com.app");

    let err = DeliveryController::new(&mut clipboard, &mut automation, DeliveryOptions::immediate())
        .deliver(&items(&["ok", "boom"]))
        .unwrap_err();

    assert!(matches!(err, DeliveryError::Clipboard { delivered: 1, .. }));
    assert_eq!(automation.pastes, 1);
    assert_eq!(clipboard.content, "snapshot");
}

#[test]
fn unreadable_clipboard_skips_restoration() {
    let mut clipboard = FakeClipboard::with_content("unseen");
    clipboard.fail_reads = true;
    let mut automation = FakeAutomation::focused_on("com.app");

    let report = DeliveryController::new(&mut clipboard, &mut automation, DeliveryOptions::immediate())
        .deliver(&items(&["one", "two"]))
        .unwrap();

    assert_eq!(report.delivered, 2);
    assert!(!report.clipboard_restored);
    assert_eq!(clipboard.writes, vec!["one", "two"]);
    assert_eq!(clipboard.content, "two");
}

#[test]
fn empty_snapshot_is_not_written_back() {
    let mut clipboard = FakeClipboard::default();
    let mut automation = FakeAutomation::focused_on("com.app");

    let report = DeliveryController::new(&mut clipboard, &mut automation, DeliveryOptions::immediate())
        .deliver(&items(&["only"]))
        .unwrap();

    assert!(!report.clipboard_restored);
    assert_eq!(clipboard.writes, vec!["only"]);
}

#[test]
fn initial_focus_failure_touches_nothing() {
    let mut clipboard = FakeClipboard::with_content("untouched");
    let mut automation = FakeAutomation::focused_on("com.app");
    automation.fail_focus = true;

    let err = DeliveryController::new(&mut clipboard, &mut automation, DeliveryOptions::immediate())
        .deliver(&items(&["a"]))
        .unwrap_err();

    assert!(matches!(err, DeliveryError::Automation { delivered: 0, .. }));
    assert!(clipboard.writes.is_empty());
    assert_eq!(automation.pastes, 0);
}

#[test]
fn empty_items_are_skipped_without_focus_checks() {
    let mut clipboard = FakeClipboard::with_content("orig");
    let mut automation = FakeAutomation::focused_on("com.app");

    let report = DeliveryController::new(&mut clipboard, &mut automation, DeliveryOptions::immediate())
        .deliver(&items(&["a", "", "b"]))
        .unwrap();

    assert_eq!(report.delivered, 2);
    assert_eq!(report.total, 3);
    // one init query plus one per non-empty item
    assert_eq!(automation.focus_queries, 3);
}

#[test]
fn empty_session_completes_immediately() {
    let mut clipboard = FakeClipboard::with_content("orig");
    let mut automation = FakeAutomation::focused_on("com.app");

    let report = DeliveryController::new(&mut clipboard, &mut automation, DeliveryOptions::immediate())
        .deliver(&[])
        .unwrap();

    assert_eq!(report.outcome, DeliveryOutcome::Completed);
    assert_eq!(report.delivered, 0);
    assert_eq!(clipboard.content, "orig");
}

#[test]
fn controller_starts_a_fresh_session_after_completion() {
    let mut clipboard = FakeClipboard::with_content("original");
    let mut automation = FakeAutomation::focused_on("com.app");

    let mut controller =
        DeliveryController::new(&mut clipboard, &mut automation, DeliveryOptions::immediate());
    assert_eq!(controller.state(), SessionState::Init);
    controller.deliver(&items(&["a"])).unwrap();
    assert_eq!(controller.state(), SessionState::Completed);

    let report = controller.deliver(&items(&["b", "c"])).unwrap();
    assert_eq!(report.state, SessionState::Completed);
    assert_eq!(report.delivered, 2);
    assert_eq!(controller.state(), SessionState::Completed);

    assert_eq!(clipboard.writes, vec!["a", "original", "b", "c", "original"]);
}
