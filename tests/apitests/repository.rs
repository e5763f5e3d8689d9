use phonebook::{
    repository,
    Contact,
    ContactBuilder,
    Error,
    PhoneType,
};

/**
# repository
 - next_id
 - find
 - find_by_id
 - add
 - update
 - remove
 - is_possible_duplicate
 - add_phone
 - update_phone
 - delete_phone
 - sample_contacts
 - add_samples
 */
fn book() -> Vec<Contact> {
    let mut contacts = Vec::new();
    repository::add_samples(&mut contacts).unwrap();
    contacts
}

#[test]
fn test_next_id() {
    assert_eq!(repository::next_id(&[]).unwrap(), 1);

    let contacts = vec![
        ContactBuilder::new(3).with_name("A").with_phone(PhoneType::Home, "12345").build().unwrap(),
        ContactBuilder::new(7).with_name("B").with_phone(PhoneType::Home, "12345").build().unwrap(),
    ];
    assert_eq!(repository::next_id(&contacts).unwrap(), 8);
}

#[test]
fn test_find() {
    let contacts = book();
    let found = repository::find(&contacts, "анна");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name(), "Анна Симакова");

    let found = repository::find(&contacts, "АнНа СИМ");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id(), 1);

    assert_eq!(repository::find(&contacts, "7916").len(), 1);
    assert_eq!(repository::find(&contacts, "коллега").len(), 1);
    assert_eq!(repository::find(&contacts, "").len(), 3);
}

#[test]
fn test_create_edit_delete() {
    let mut contacts = book();

    let number = "+37494111222";
    assert_eq!(repository::is_possible_duplicate(&contacts, "анна симакова", number), true);

    let id = repository::next_id(&contacts).unwrap();
    let contact = ContactBuilder::new(id)
        .with_name("Олег")
        .with_phone(PhoneType::Mobile, "+70000000001")
        .build()
        .unwrap();
    repository::add(&mut contacts, contact).unwrap();
    assert_eq!(contacts.len(), 4);

    let mut copy = repository::find_by_id(&contacts, id).cloned().unwrap();
    repository::add_phone(&mut copy, PhoneType::Work, "12345#1", 5).unwrap();
    repository::update_phone(&mut copy, 0, Some(PhoneType::Home), None, 5).unwrap();
    let rc = repository::update_phone(&mut copy, 5, None, Some("55555"), 5);
    assert!(matches!(rc, Err(Error::OutOfRange(_))));
    repository::delete_phone(&mut copy, 1).unwrap();
    copy.set_comment(Some("Сосед"));

    assert_eq!(repository::find_by_id(&contacts, id).unwrap().comment(), None);
    repository::update(&mut contacts, copy).unwrap();
    let stored = repository::find_by_id(&contacts, id).unwrap();
    assert_eq!(stored.comment(), Some("Сосед"));
    assert_eq!(stored.phones().len(), 1);
    assert_eq!(stored.phones()[0].phone_type(), PhoneType::Home);

    repository::remove(&mut contacts, 2).unwrap();
    assert_eq!(contacts.iter().map(|v| v.id()).collect::<Vec<_>>(), vec![1, 3, 4]);
    assert_eq!(repository::find(&contacts, "иван").is_empty(), true);
    assert!(matches!(repository::remove(&mut contacts, 2), Err(Error::NotFound(_))));
    assert_eq!(repository::next_id(&contacts).unwrap(), 5);
}
