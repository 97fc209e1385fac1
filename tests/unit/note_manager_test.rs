//! Unit tests for the Note Manager.

use glassdesk::database::Database;
use glassdesk::managers::note_manager::{NoteManager, NoteManagerTrait};
use glassdesk::types::errors::NoteError;

#[test]
fn test_add_and_list_note() {
    let db = Database::open_in_memory().unwrap();
    let mut mgr = NoteManager::new(db.connection());

    let note = mgr.add_note("buy milk").unwrap();
    assert!(note.id > 0);
    assert_eq!(note.content, "buy milk");

    let notes = mgr.list_notes().unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0], note);
}

#[test]
fn test_list_is_in_insertion_order() {
    let db = Database::open_in_memory().unwrap();
    let mut mgr = NoteManager::new(db.connection());
    for text in ["first", "second", "third"] {
        mgr.add_note(text).unwrap();
    }
    let contents: Vec<String> = mgr.list_notes().unwrap().into_iter().map(|n| n.content).collect();
    assert_eq!(contents, vec!["first", "second", "third"]);
}

#[test]
fn test_blank_note_is_rejected() {
    let db = Database::open_in_memory().unwrap();
    let mut mgr = NoteManager::new(db.connection());
    assert!(matches!(mgr.add_note(""), Err(NoteError::Validation(_))));
    assert!(matches!(mgr.add_note("   \n"), Err(NoteError::Validation(_))));
    assert_eq!(mgr.count().unwrap(), 0);
}

#[test]
fn test_remove_note() {
    let db = Database::open_in_memory().unwrap();
    let mut mgr = NoteManager::new(db.connection());
    let keep = mgr.add_note("keep").unwrap();
    let gone = mgr.add_note("gone").unwrap();

    mgr.remove_note(gone.id).unwrap();

    let notes = mgr.list_notes().unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].id, keep.id);
    assert!(mgr.get_note(gone.id).unwrap().is_none());
}

#[test]
fn test_remove_missing_note_is_not_found() {
    let db = Database::open_in_memory().unwrap();
    let mut mgr = NoteManager::new(db.connection());
    assert!(matches!(mgr.remove_note(404), Err(NoteError::NotFound(404))));
}

#[test]
fn test_ids_are_not_reused_after_delete() {
    let db = Database::open_in_memory().unwrap();
    let mut mgr = NoteManager::new(db.connection());
    let a = mgr.add_note("a").unwrap();
    mgr.remove_note(a.id).unwrap();
    let b = mgr.add_note("b").unwrap();
    assert!(b.id > a.id);
}
