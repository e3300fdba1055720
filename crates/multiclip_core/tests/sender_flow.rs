mod common;

use common::{FakeAutomation, FakeClipboard};
use multiclip_core::{
    read_items, send_clipboard, DeliveryOptions, DeliveryOutcome, SendError, Style,
};
use pretty_assertions::assert_eq;

#[test]
fn sends_each_list_item_with_style_marker() {
    let mut clipboard = FakeClipboard::with_content("- buy milk\n- call Sam\n  re: dinner\n- done");
    let mut automation = FakeAutomation::focused_on("com.tinyspeck.slackmacgap");

    let report = send_clipboard(
        &mut clipboard,
        &mut automation,
        Style::Dash,
        DeliveryOptions::immediate(),
    )
    .unwrap();

    assert_eq!(report.outcome, DeliveryOutcome::Completed);
    assert_eq!(report.delivered, 3);
    assert_eq!(
        clipboard.writes,
        vec![
            "- buy milk",
            "- call Sam\nre: dinner",
            "- done",
            "- buy milk\n- call Sam\n  re: dinner\n- done",
        ]
    );
}

#[test]
fn plain_style_sends_paragraph_lines_verbatim() {
    let mut clipboard = FakeClipboard::with_content("Remember to call Sam\nIt's about dinner");
    let mut automation = FakeAutomation::focused_on("com.app");

    send_clipboard(
        &mut clipboard,
        &mut automation,
        Style::Plain,
        DeliveryOptions::immediate(),
    )
    .unwrap();

    assert_eq!(
        &clipboard.writes[..2],
        &["Remember to call Sam".to_string(), "It's about dinner".to_string()]
    );
}

#[test]
fn blank_clipboard_is_empty_input() {
    let mut clipboard = FakeClipboard::with_content(" \n\t ");
    let mut automation = FakeAutomation::focused_on("com.app");

    let err = send_clipboard(
        &mut clipboard,
        &mut automation,
        Style::Plain,
        DeliveryOptions::immediate(),
    )
    .unwrap_err();

    assert!(matches!(err, SendError::EmptyInput));
    assert_eq!(err.exit_code(), 0);
    assert_eq!(automation.focus_queries, 0);
    assert!(clipboard.writes.is_empty());
}

#[test]
fn unreadable_clipboard_fails_before_delivery() {
    let mut clipboard = FakeClipboard::default();
    clipboard.fail_reads = true;

    let err = read_items(&mut clipboard, Style::Dash).unwrap_err();
    assert!(matches!(err, SendError::Clipboard(_)));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn focus_loss_aborts_send_and_restores() {
    let mut clipboard = FakeClipboard::with_content("1. a\n2. b\n3. c");
    let mut automation = FakeAutomation::with_script(&["com.app", "com.app", "com.elsewhere"]);

    let report = send_clipboard(
        &mut clipboard,
        &mut automation,
        Style::Numbered,
        DeliveryOptions::immediate(),
    )
    .unwrap();

    assert!(matches!(report.outcome, DeliveryOutcome::Aborted { .. }));
    assert_eq!(report.delivered, 1);
    assert_eq!(clipboard.content, "1. a\n2. b\n3. c");
}
