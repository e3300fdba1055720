mod common;

use common::{NoStyle, ScriptedSelector, StoreFixture};
use multiclip_core::{
    FixedStyle, PickError, PickerConfig, PickerService, SqliteRecordSource, Style, EXIT_CANCELLED,
};
use pretty_assertions::assert_eq;

fn store_with_entries() -> StoreFixture {
    let store = StoreFixture::new();
    store.insert_text(3, "third entry", 30);
    store.insert_text(5, "\n\nfifth entry\n  detail\n", 50);
    store.insert_text(7, "seventh entry", 70);
    store
}

fn service(store: &StoreFixture) -> PickerService<SqliteRecordSource> {
    let config = PickerConfig::default().with_db_path(store.path());
    PickerService::new(SqliteRecordSource::new(store.path()), &config)
}

#[test]
fn selection_order_wins_over_recency() {
    let store = store_with_entries();
    let picker = service(&store);
    let mut selector = ScriptedSelector::picking(&[3, 7]);

    let result = picker
        .pick(&mut selector, &mut FixedStyle(Style::Numbered))
        .unwrap();
    assert_eq!(result.text, "1. third entry\n2. seventh entry");
    assert_eq!(result.item_count, 2);
    assert_eq!(result.style, Style::Numbered);

    let shown = selector.shown.iter().map(|label| label.id).collect::<Vec<_>>();
    assert_eq!(shown, vec![7, 5, 3]);
}

#[test]
fn reversed_selection_renders_in_selector_order() {
    let store = store_with_entries();
    let picker = service(&store);

    let result = picker.format_selection(&[7, 3], Style::Dash).unwrap();
    assert_eq!(result.text, "- seventh entry\n- third entry");
}

#[test]
fn multi_line_record_keeps_inner_lines() {
    let store = store_with_entries();
    let picker = service(&store);

    let result = picker.format_selection(&[5, 3], Style::Bullet).unwrap();
    assert_eq!(result.text, "\u{2022} fifth entry\n  detail\n\u{2022} third entry");
}

#[test]
fn repeated_ids_are_rendered_once() {
    let store = store_with_entries();
    let picker = service(&store);
    let mut selector = ScriptedSelector::picking(&[7, 7, 3]);

    let result = picker
        .pick(&mut selector, &mut FixedStyle(Style::Comma))
        .unwrap();
    assert_eq!(result.text, "seventh entry, third entry");
}

#[test]
fn vanished_ids_are_dropped_silently() {
    let store = store_with_entries();
    let picker = service(&store);

    let result = picker.format_selection(&[99, 3], Style::Plain).unwrap();
    assert_eq!(result.text, "third entry");
    assert_eq!(result.item_count, 1);

    let err = picker.format_selection(&[98, 99], Style::Plain).unwrap_err();
    assert!(matches!(err, PickError::NoSelection));
}

#[test]
fn declined_selection_is_a_cancellation() {
    let store = store_with_entries();
    let picker = service(&store);

    let err = picker
        .pick(&mut ScriptedSelector::declining(), &mut FixedStyle(Style::Dash))
        .unwrap_err();
    assert!(err.is_cancellation());
    assert_eq!(err.exit_code(), EXIT_CANCELLED);

    let err = picker
        .pick(&mut ScriptedSelector::picking(&[]), &mut FixedStyle(Style::Dash))
        .unwrap_err();
    assert!(matches!(err, PickError::NoSelection));
}

#[test]
fn declined_style_is_a_cancellation() {
    let store = store_with_entries();
    let picker = service(&store);

    let err = picker
        .pick(&mut ScriptedSelector::picking(&[3]), &mut NoStyle)
        .unwrap_err();
    assert!(matches!(err, PickError::NoSelection));
}

#[test]
fn empty_store_reports_empty_input() {
    let store = StoreFixture::new();
    let picker = service(&store);

    let err = picker
        .pick(&mut ScriptedSelector::picking(&[1]), &mut FixedStyle(Style::Dash))
        .unwrap_err();
    assert!(matches!(err, PickError::EmptyInput));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn limit_bounds_offered_candidates() {
    let store = store_with_entries();
    let config = PickerConfig::default().with_limit(2);
    let picker = PickerService::new(SqliteRecordSource::new(store.path()), &config);

    let labels = picker.candidates().unwrap();
    assert_eq!(labels.len(), 2);
    assert_eq!(labels[1].to_string(), "  [+3 lines]");
}

#[test]
fn preview_returns_full_content() {
    let store = store_with_entries();
    let picker = service(&store);

    assert_eq!(
        picker.preview(5).unwrap().as_deref(),
        Some("\n\nfifth entry\n  detail")
    );
    assert_eq!(picker.preview(404).unwrap(), None);
}
