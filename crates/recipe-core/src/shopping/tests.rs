//! Shopping List Engine scenario tests
//!
//! Runs the engine against an in-memory slot.

use super::*;
use crate::storage::{ListStorage, MemoryStorage};
use crate::ShoppingError;

fn setup(raw: Option<&str>) -> ShoppingListEngine<MemoryStorage> {
    let storage = match raw {
        Some(raw) => MemoryStorage::with_contents(raw),
        None => MemoryStorage::new(),
    };
    ShoppingListEngine::new(storage)
}

fn names(engine: &ShoppingListEngine<MemoryStorage>) -> Vec<String> {
    engine.displayed().into_iter().map(|i| i.name).collect()
}

#[test]
fn test_first_access_is_empty() {
    let engine = setup(None);
    assert!(engine.load().is_empty());
    assert!(engine.storage().contents().is_none());
}

#[test]
fn test_adds_keep_one_entry_per_name_with_summed_quantity() {
    let engine = setup(None);
    engine.add_manual("Tomato").unwrap();
    engine.add_from_selection(["tomato ", "Basil", "TOMATO"]).unwrap();
    engine.add_manual("basil").unwrap();
    engine.add_manual("garlic").unwrap();

    let list = engine.load();
    assert_eq!(list.len(), 3);
    assert_eq!(list.get("tomato").unwrap().quantity, 3);
    assert_eq!(list.get("basil").unwrap().quantity, 2);
    assert_eq!(list.get("garlic").unwrap().quantity, 1);
    assert_eq!(names(&engine), vec!["tomato", "basil", "garlic"]);
}

#[test]
fn test_tomato_case_boundary() {
    let stored = r#"[{"name":"tomato","qty":2,"done":false}]"#;

    let engine = setup(Some(stored));
    engine.add_from_selection(["Tomato"]).unwrap();
    assert_eq!(engine.load().get("tomato").unwrap().quantity, 3);

    // Typed names use the same normalized key
    let engine = setup(Some(stored));
    assert_eq!(engine.add_manual("Tomato").unwrap(), AddOutcome::Incremented(3));
    assert_eq!(engine.load().len(), 1);
}

#[test]
fn test_blank_manual_add_does_not_write() {
    let engine = setup(None);
    assert_eq!(engine.add_manual("   ").unwrap(), AddOutcome::Ignored);
    assert!(engine.storage().contents().is_none());
}

#[test]
fn test_selection_is_one_write_in_selection_order() {
    let engine = setup(Some(r#"[{"name":"salt","qty":1,"done":true}]"#));
    let merged = engine.add_from_selection(vec!["Pepper", "", "Salt", "Eggs"]).unwrap();
    assert_eq!(merged, 3);

    let list = engine.load();
    let stored: Vec<&str> = list.items().iter().map(|i| i.name.as_str()).collect();
    assert_eq!(stored, vec!["salt", "pepper", "eggs"]);
    assert_eq!(list.get("salt").unwrap().quantity, 2);
    assert!(list.get("salt").unwrap().done);
}

#[test]
fn test_empty_selection_does_not_write() {
    let engine = setup(None);
    assert_eq!(engine.add_from_selection(Vec::<String>::new()).unwrap(), 0);
    assert!(engine.storage().contents().is_none());
}

#[test]
fn test_increase_uses_display_index() {
    let engine = setup(Some(
        r#"[{"name":"milk","qty":1,"done":true},{"name":"bread","qty":1,"done":false}]"#,
    ));
    // bread renders first
    assert_eq!(engine.increase_qty(0).unwrap(), 2);
    assert_eq!(engine.load().get("bread").unwrap().quantity, 2);
    assert_eq!(engine.load().get("milk").unwrap().quantity, 1);
}

#[test]
fn test_out_of_range_index_is_an_error() {
    let engine = setup(None);
    engine.add_manual("milk").unwrap();
    let err = engine.increase_qty(5).unwrap_err();
    assert!(matches!(err, ShoppingError::IndexOutOfRange { index: 5, len: 1 }));
    assert!(engine.toggle_done(1).is_err());
}

#[test]
fn test_decrease_above_one_just_decrements() {
    let engine = setup(Some(r#"[{"name":"eggs","qty":3,"done":false}]"#));
    let mut session = ShoppingSession::new(2000);
    assert_eq!(engine.decrease_qty(&mut session, 0, 0).unwrap(), DecreaseOutcome::Decremented(2));
    assert_eq!(session.removal.pending_index(), None);
}

#[test]
fn test_decrease_at_one_needs_second_tap() {
    let engine = setup(Some(r#"[{"name":"eggs","qty":1,"done":false}]"#));
    let mut session = ShoppingSession::new(2000);

    let first = engine.decrease_qty(&mut session, 0, 10_000).unwrap();
    assert!(matches!(first, DecreaseOutcome::ConfirmRemoval(_)));
    assert_eq!(engine.load().len(), 1);

    let second = engine.decrease_qty(&mut session, 0, 11_000).unwrap();
    assert_eq!(second, DecreaseOutcome::Removed("eggs".to_string()));
    assert!(engine.load().is_empty());
    assert_eq!(session.removal.pending_index(), None);
}

#[test]
fn test_decrease_after_window_rearms() {
    let engine = setup(Some(r#"[{"name":"eggs","qty":1,"done":false}]"#));
    let mut session = ShoppingSession::new(2000);

    engine.decrease_qty(&mut session, 0, 0).unwrap();
    let late = engine.decrease_qty(&mut session, 0, 2_000).unwrap();
    assert!(matches!(late, DecreaseOutcome::ConfirmRemoval(_)));
    assert_eq!(engine.load().len(), 1);

    // The re-arm starts a fresh window
    let confirm = engine.decrease_qty(&mut session, 0, 3_000).unwrap();
    assert!(matches!(confirm, DecreaseOutcome::Removed(_)));
}

#[test]
fn test_decrease_after_timer_expiry_rearms() {
    let engine = setup(Some(r#"[{"name":"eggs","qty":1,"done":false}]"#));
    let mut session = ShoppingSession::new(2000);

    let DecreaseOutcome::ConfirmRemoval(ticket) = engine.decrease_qty(&mut session, 0, 0).unwrap() else {
        panic!("expected pending removal");
    };
    assert!(session.removal.expire(ticket));
    let again = engine.decrease_qty(&mut session, 0, 500).unwrap();
    assert!(matches!(again, DecreaseOutcome::ConfirmRemoval(_)));
    assert_eq!(engine.load().len(), 1);
}

#[test]
fn test_arming_another_index_cancels_pending() {
    let engine = setup(Some(
        r#"[{"name":"eggs","qty":1,"done":false},{"name":"milk","qty":1,"done":false}]"#,
    ));
    let mut session = ShoppingSession::new(2000);

    engine.decrease_qty(&mut session, 0, 0).unwrap();
    engine.decrease_qty(&mut session, 1, 100).unwrap();
    let back = engine.decrease_qty(&mut session, 0, 200).unwrap();
    assert!(matches!(back, DecreaseOutcome::ConfirmRemoval(_)));
    assert_eq!(engine.load().len(), 2);
}

#[test]
fn test_reorder_under_pending_index_does_not_remove_other_item() {
    let engine = setup(Some(
        r#"[{"name":"apple","qty":1,"done":false},{"name":"bread","qty":1,"done":false}]"#,
    ));
    let mut session = ShoppingSession::new(2000);

    let first = engine.decrease_qty(&mut session, 0, 0).unwrap();
    assert!(matches!(first, DecreaseOutcome::ConfirmRemoval(_)));

    engine.toggle_done(0).unwrap();
    assert_eq!(names(&engine), vec!["bread", "apple"]);

    // "bread" now sits at the armed index; its first tap only arms
    let tap = engine.decrease_qty(&mut session, 0, 100).unwrap();
    assert!(matches!(tap, DecreaseOutcome::ConfirmRemoval(_)));
    assert_eq!(names(&engine), vec!["bread", "apple"]);

    let confirm = engine.decrease_qty(&mut session, 0, 200).unwrap();
    assert_eq!(confirm, DecreaseOutcome::Removed("bread".to_string()));
    assert_eq!(names(&engine), vec!["apple"]);
}

#[test]
fn test_add_in_front_of_pending_index_does_not_remove_other_item() {
    let engine = setup(Some(
        r#"[{"name":"apple","qty":1,"done":true},{"name":"bread","qty":1,"done":false}]"#,
    ));
    let mut session = ShoppingSession::new(2000);

    // Display: bread, apple. Arm "apple" at index 1.
    engine.decrease_qty(&mut session, 1, 0).unwrap();
    engine.add_manual("cheese").unwrap();
    assert_eq!(names(&engine), vec!["bread", "cheese", "apple"]);

    let tap = engine.decrease_qty(&mut session, 1, 100).unwrap();
    assert!(matches!(tap, DecreaseOutcome::ConfirmRemoval(_)));
    assert_eq!(engine.load().len(), 3);
}

#[test]
fn test_quantity_saturates_instead_of_overflowing() {
    let engine = setup(Some(&format!(r#"[{{"name":"salt","qty":{},"done":false}}]"#, u32::MAX)));
    assert_eq!(engine.increase_qty(0).unwrap(), u32::MAX);
    assert_eq!(engine.add_manual("salt").unwrap(), AddOutcome::Incremented(u32::MAX));
}

#[test]
fn test_toggle_done_reorders_storage_and_display() {
    let engine = setup(None);
    engine.add_from_selection(["a", "b", "c"]).unwrap();

    assert!(engine.toggle_done(0).unwrap());
    assert_eq!(names(&engine), vec!["b", "c", "a"]);

    assert!(engine.toggle_done(1).unwrap());
    assert_eq!(names(&engine), vec!["b", "a", "c"]);

    // Undo "c" (display index 2): it floats to the top
    assert!(!engine.toggle_done(2).unwrap());
    assert_eq!(names(&engine), vec!["c", "b", "a"]);
    let stored: Vec<String> = engine.load().items().iter().map(|i| i.name.clone()).collect();
    assert_eq!(stored, vec!["c", "b", "a"]);
}

#[test]
fn test_display_never_puts_done_before_open() {
    let engine = setup(Some(
        r#"[{"name":"x","qty":1,"done":true},{"name":"y","qty":1,"done":false},{"name":"z","qty":1,"done":true}]"#,
    ));
    engine.add_manual("w").unwrap();
    let shown = engine.displayed();
    let first_done = shown.iter().position(|i| i.done).unwrap();
    assert!(shown[first_done..].iter().all(|i| i.done));
    assert_eq!(names(&engine), vec!["y", "w", "x", "z"]);
}

#[test]
fn test_clear_requires_confirmation() {
    let engine = setup(None);
    engine.add_manual("milk").unwrap();

    let confirmation = engine.request_clear();
    assert_eq!(engine.load().len(), 1);

    engine.confirm_clear(confirmation).unwrap();
    assert!(engine.load().is_empty());
    assert_eq!(engine.storage().contents().as_deref(), Some("[]"));
}

#[test]
fn test_corrupt_slot_reads_empty_and_is_discarded() {
    let engine = setup(Some("definitely not json"));
    assert!(engine.load().is_empty());
    assert!(engine.storage().read().is_none());

    engine.add_manual("milk").unwrap();
    assert_eq!(engine.load().len(), 1);
}

#[test]
fn test_round_trip_through_storage() {
    let engine = setup(None);
    engine.add_from_selection(["bread", "milk", "eggs"]).unwrap();
    engine.increase_qty(1).unwrap();
    engine.toggle_done(0).unwrap();

    let before = engine.load();
    let raw = engine.storage().contents().unwrap();
    let reloaded = setup(Some(&raw)).load();
    assert_eq!(before, reloaded);
}
