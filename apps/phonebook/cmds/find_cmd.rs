use phonebook::{
    repository,
    Contact,
};

use crate::{
    show_contacts,
    Session,
};

/// Prompts for a query, prints what matches and returns the matching ids.
pub(crate) fn find(session: &mut Session, contacts: &[Contact]) -> Vec<u64> {
    let Some(query) = session.console.ask("Name, number or comment to search for (0 for menu)") else {
        return Vec::new();
    };

    let found = repository::find(contacts, &query);
    if found.is_empty() {
        println!("Contact not found.");
    } else {
        show_contacts(&found);
    }
    found.iter().map(|v| v.id()).collect()
}

/// Searches and narrows the result down to a single contact.
pub(crate) fn pick(session: &mut Session, contacts: &[Contact], action: &str) -> Option<u64> {
    let ids = find(session, contacts);
    match ids.len() {
        0 => None,
        1 => {
            println!("Found one contact.");
            Some(ids[0])
        }
        n => session.console.choose(
            &format!("Number of the contact to {} (0 for menu)", action),
            n
        ).map(|i| ids[i]),
    }
}
