use std::fs;
use phonebook::{
    repository,
    ContactBuilder,
    ContactStore,
    Error,
    PhoneType,
};
use crate::{
    working_path,
    remove_working_path,
};

/**
# ContactStore
 - new
 - path
 - exists
 - load
 - load_or_empty
 - save
 */
#[test]
fn test_store_round_trip() {
    let path = working_path("apitests-store");
    let store = ContactStore::new(format!("{}/phonebook.json", path));

    let mut contacts = Vec::new();
    repository::add_samples(&mut contacts).unwrap();
    let extra = ContactBuilder::new(repository::next_id(&contacts).unwrap())
        .with_name("Elena")
        .with_phone(PhoneType::Work, "55555#12")
        .with_comment("")
        .build()
        .unwrap();
    repository::add(&mut contacts, extra).unwrap();

    store.save(&contacts).unwrap();
    let loaded = store.load().unwrap();
    assert_eq!(loaded, contacts);
    assert_eq!(loaded.iter().map(|v| v.id()).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    assert_eq!(loaded[1].comment(), None);
    assert_eq!(loaded[3].comment(), Some(""));

    let text = fs::read_to_string(store.path()).unwrap();
    assert_eq!(text.contains("\"name\": \"Анна Симакова\""), true);
    assert_eq!(text.contains("\"comment\": null"), true);
    remove_working_path(&path);
}

#[test]
fn test_store_recovery() {
    let path = working_path("apitests-recovery");
    let file = format!("{}/phonebook.json", path);
    let store = ContactStore::new(&file);

    assert_eq!(store.load().unwrap().is_empty(), true);

    fs::write(&file, "[{\"id\": 1, \"name\": ").unwrap();
    assert!(matches!(store.load(), Err(Error::MalformedStorage(_))));
    assert_eq!(store.load_or_empty().is_empty(), true);

    store.save(&repository::sample_contacts(1).unwrap()).unwrap();
    assert_eq!(store.load().unwrap().len(), 3);
    remove_working_path(&path);
}
