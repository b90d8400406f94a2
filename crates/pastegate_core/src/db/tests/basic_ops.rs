//! Basic database CRUD tests.

use super::*;

#[test]
fn paste_create_get_delete_roundtrip() {
    let (db, _temp) = setup_temp_db();

    let paste = paste_at_t0("Test content", Some(60), Some(3));
    db.pastes.create(&paste).expect("create");

    let retrieved = db
        .pastes
        .get(&paste.id)
        .expect("get")
        .expect("paste should exist");
    assert_eq!(retrieved, paste);
    assert_eq!(retrieved.current_views, 0);

    assert!(db.pastes.delete(&paste.id).expect("delete"));
    assert!(db.pastes.get(&paste.id).expect("get").is_none());
    assert!(!db.pastes.delete(&paste.id).expect("second delete"));
}

#[test]
fn paste_create_rejects_duplicate_id_without_overwrite() {
    let (db, _temp) = setup_temp_db();

    let original = paste_at_t0("original", None, None);
    db.pastes.create(&original).expect("create original");

    let mut conflicting = paste_at_t0("conflicting", None, Some(1));
    conflicting.id = original.id.clone();
    let err = db
        .pastes
        .create(&conflicting)
        .expect_err("duplicate id create must fail");
    assert!(
        matches!(err, AppError::StorageMessage(ref message) if message.contains("already exists")),
        "unexpected duplicate-create error: {}",
        err
    );

    let stored = db.pastes.get(&original.id).unwrap().unwrap();
    assert_eq!(stored.content, "original");
}

#[test]
fn increment_views_stops_at_limit_and_reports_missing() {
    let (db, _temp) = setup_temp_db();
    let paste = paste_at_t0("limited", None, Some(2));
    db.pastes.create(&paste).unwrap();

    for expected in 1..=2 {
        match db.pastes.increment_views(&paste.id).unwrap() {
            ViewIncrement::Incremented(updated) => assert_eq!(updated.current_views, expected),
            other => panic!("increment {} should succeed: {:?}", expected, other),
        }
    }
    assert_eq!(
        db.pastes.increment_views(&paste.id).unwrap(),
        ViewIncrement::LimitReached
    );
    assert_eq!(db.pastes.get(&paste.id).unwrap().unwrap().current_views, 2);

    assert_eq!(
        db.pastes.increment_views("00000000-0000-4000-8000-000000000000").unwrap(),
        ViewIncrement::Missing
    );
}

#[test]
fn increment_views_without_limit_never_refuses() {
    let (db, _temp) = setup_temp_db();
    let paste = paste_at_t0("open", None, None);
    db.pastes.create(&paste).unwrap();

    for _ in 0..25 {
        assert!(matches!(
            db.pastes.increment_views(&paste.id).unwrap(),
            ViewIncrement::Incremented(_)
        ));
    }
    assert_eq!(db.pastes.get(&paste.id).unwrap().unwrap().current_views, 25);
}

#[test]
fn delete_ignores_expiry_and_view_state() {
    let (db, _temp) = setup_temp_db();
    let mut exhausted = paste_at_t0("spent", Some(1), Some(1));
    exhausted.current_views = 1;
    db.pastes.create(&exhausted).unwrap();

    assert!(db.pastes.delete(&exhausted.id).unwrap());
    assert_eq!(db.pastes.count().unwrap(), 0);
}

#[test]
fn rows_persist_across_reopen() {
    let (db, temp) = setup_temp_db();
    let paste = paste_at_t0("durable", Some(30), Some(4));
    db.pastes.create(&paste).unwrap();
    db.pastes.increment_views(&paste.id).unwrap();
    drop(db);

    let reopened = Database::new(temp.path().join("test.db").to_str().unwrap()).expect("reopen");
    let stored = reopened.pastes.get(&paste.id).unwrap().unwrap();
    assert_eq!(stored.current_views, 1);
    assert_eq!(stored.expires_at, paste.expires_at);
    assert_eq!(reopened.count().unwrap(), 1);
}

#[test]
fn memory_store_matches_redb_semantics() {
    let store = MemoryPasteStore::default();
    let paste = paste_at_t0("mem", None, Some(1));
    store.create(&paste).unwrap();
    assert!(store.create(&paste).is_err());

    assert!(matches!(
        store.increment_views(&paste.id).unwrap(),
        ViewIncrement::Incremented(ref updated) if updated.remaining_views() == Some(0)
    ));
    assert_eq!(store.increment_views(&paste.id).unwrap(), ViewIncrement::LimitReached);
    assert!(store.delete(&paste.id).unwrap());
    assert_eq!(store.increment_views(&paste.id).unwrap(), ViewIncrement::Missing);
    assert_eq!(store.count().unwrap(), 0);
}
