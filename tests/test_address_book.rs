//! Address book collection semantics.

use address_book::{
    AddOutcome, AddressBook, BookError, Phone, PhoneOperation, PhoneUpdate, Record,
    ValidatedField,
};

fn phones(book: &AddressBook, name: &str) -> Vec<String> {
    book.get(name)
        .unwrap()
        .phones()
        .iter()
        .map(|p| p.as_str().to_string())
        .collect()
}

/// Adding the same name twice keeps the first record's data.
#[test]
fn test_add_record_twice() {
    let mut book = AddressBook::new();
    let mut first = Record::new("alice").unwrap();
    first.add_phone("0501234567").unwrap();
    first.add_birthday("1990.01.01").unwrap();

    assert_eq!(book.add_record(first.clone()), AddOutcome::Added);
    assert_eq!(
        book.add_record(Record::new("alice").unwrap()),
        AddOutcome::AlreadyExists
    );
    assert_eq!(book.get("alice"), Some(&first));
}

/// Deleting a phone twice reports NotFound the second time.
#[test]
fn test_update_delete_scenario() {
    let mut book = AddressBook::new();
    book.add_record(Record::new("Alice").unwrap());
    book.update_record("Alice", PhoneOperation::Add("+15551234567".to_string()))
        .unwrap();

    let update = book
        .update_record("Alice", PhoneOperation::Delete("+15551234567".to_string()))
        .unwrap();
    assert_eq!(
        update,
        PhoneUpdate::Deleted(Phone::parse("+15551234567").unwrap())
    );
    assert!(phones(&book, "Alice").is_empty());

    let again = book.update_record("Alice", PhoneOperation::Delete("+15551234567".to_string()));
    assert!(matches!(again, Err(BookError::PhoneNotFound { .. })));
}

/// Operations on absent names fail with NotFound.
#[test]
fn test_absent_names() {
    let mut book = AddressBook::new();
    let not_found = BookError::NotFound("bob".to_string());

    assert_eq!(
        book.update_record("bob", PhoneOperation::Add("0501234567".to_string())),
        Err(not_found.clone())
    );
    assert_eq!(book.delete_record("bob"), Err(not_found.clone()));
    assert_eq!(book.show_phones("bob").err(), Some(not_found));
}

/// Pagination starts at zero, covers every record once, and stops at the end.
#[test]
fn test_iterate_covers_all_records_once() {
    let mut book = AddressBook::new();
    let names: Vec<String> = (0..7).map(|i| format!("contact{}", i)).collect();
    for name in &names {
        book.add_record(Record::new(name.as_str()).unwrap());
    }

    let pages: Vec<_> = book.iterate(3).collect();
    assert_eq!(pages.iter().map(Vec::len).collect::<Vec<_>>(), vec![3, 3, 1]);

    let seen: Vec<String> = pages
        .iter()
        .flatten()
        .map(|(name, record)| {
            assert_eq!(*name, record.name());
            name.to_string()
        })
        .collect();
    assert_eq!(seen, names);
    assert!(book.page(3, 3).is_none());
}

/// A change on a missing phone leaves the stored record untouched.
#[test]
fn test_failed_change_leaves_book_unchanged() {
    let mut book = AddressBook::new();
    book.add_record(Record::with_phones("alice", ["0501234567"]).unwrap());
    let before = book.clone();

    let result = book.update_record(
        "alice",
        PhoneOperation::Change {
            old: "0670000000".to_string(),
            new: "0931112233".to_string(),
        },
    );

    assert!(result.is_err());
    assert_eq!(book, before);
}
