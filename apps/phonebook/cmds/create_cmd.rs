use phonebook::{
    repository,
    Contact,
    ContactBuilder,
    PhoneEntry,
};

use crate::Session;

pub(crate) fn create(session: &mut Session, contacts: &mut Vec<Contact>) {
    println!("\n--- New contact ---");

    let name = loop {
        let Some(name) = session.console.ask("Contact name (0 for menu)") else {
            return;
        };
        if name.is_empty() {
            println!("Name must not be empty.");
            continue;
        }
        break name;
    };

    let mut phones: Vec<PhoneEntry> = Vec::new();
    loop {
        let label = match phones.is_empty() {
            true  => "Phone number (0 for menu)",
            false => "Phone number (0 to finish)",
        };
        let Some(number) = session.console.phone_number(label, session.min_digits) else {
            if phones.is_empty() {
                return;
            }
            break;
        };

        let Some(phone_type) = session.console.phone_type() else {
            if !phones.is_empty() && session.console.confirm("Save the contact before leaving?") == Some(true) {
                let comment = session.console.read("Comment (Enter to skip)")
                    .filter(|v| !v.is_empty());
                commit(session, contacts, &name, &phones, comment);
            }
            return;
        };

        if repository::is_possible_duplicate(contacts, &name, &number) {
            match session.console.confirm("Such a contact already exists. Create another one?") {
                None => return,
                Some(false) => continue,
                Some(true) => {}
            }
        }

        match PhoneEntry::new(phone_type, &number, session.min_digits) {
            Ok(entry) => phones.push(entry),
            Err(e) => {
                println!("{e}");
                continue;
            }
        }

        if session.console.confirm("Add another number?") != Some(true) {
            break;
        }
    }

    let comment = session.console.ask("Comment (Enter to skip, 0 for none)")
        .filter(|v| !v.is_empty());
    commit(session, contacts, &name, &phones, comment);
}

fn commit(session: &Session, contacts: &mut Vec<Contact>, name: &str, phones: &[PhoneEntry], comment: Option<String>) {
    let id = match repository::next_id(contacts) {
        Ok(v) => v,
        Err(e) => {
            println!("Creating contact failed: {e}");
            return;
        }
    };

    let mut builder = ContactBuilder::new(id);
    builder.with_name(name)
        .with_phones(phones)
        .with_min_digits(session.min_digits);
    if let Some(comment) = comment.as_deref() {
        builder.with_comment(comment);
    }

    let contact = match builder.build() {
        Ok(v) => v,
        Err(e) => {
            println!("Creating contact failed: {e}");
            return;
        }
    };

    if let Err(e) = repository::add(contacts, contact) {
        println!("Creating contact failed: {e}");
        return;
    }

    if session.save(contacts) {
        println!("Contact created!");
    }
}
