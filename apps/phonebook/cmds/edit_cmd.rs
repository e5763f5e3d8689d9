use phonebook::{
    repository,
    Contact,
};

use crate::{
    cmds::find_cmd,
    console::CANCEL,
    show_phones,
    Session,
};

fn print_edit_menu() {
    println!("\nWhat do you want to change?");
    println!("1 - Name");
    println!("2 - Add phone");
    println!("3 - Change phone");
    println!("4 - Delete phone");
    println!("5 - Comment");
    println!("6 - Save and leave");
}

/// Edits a working copy of the chosen contact; the stored one only changes
/// when the user saves.
pub(crate) fn edit(session: &mut Session, contacts: &mut Vec<Contact>) {
    println!("\n--- Edit contact ---");
    let Some(id) = find_cmd::pick(session, contacts, "edit") else {
        return;
    };
    let Some(mut contact) = repository::find_by_id(contacts, id).cloned() else {
        return;
    };

    loop {
        print_edit_menu();
        let choice = session.console.read("Select an item (0 for menu)")
            .unwrap_or_else(|| CANCEL.to_string());

        match choice.as_str() {
            CANCEL => {
                if session.console.confirm("Save changes before leaving?") == Some(true) {
                    commit(session, contacts, contact);
                }
                return;
            }
            "1" => {
                let Some(name) = session.console.ask(&format!("Name ({})", contact.name())) else {
                    continue;
                };
                if name.is_empty() {
                    continue;
                }
                if let Err(e) = contact.set_name(&name) {
                    println!("{e}");
                }
            }
            "2" => {
                let Some(number) = session.console.phone_number("New phone number (0 for menu)", session.min_digits) else {
                    continue;
                };
                let Some(phone_type) = session.console.phone_type() else {
                    continue;
                };
                match repository::add_phone(&mut contact, phone_type, &number, session.min_digits) {
                    Ok(_) => println!("Phone added."),
                    Err(e) => println!("{e}"),
                }
            }
            "3" => {
                if contact.phones().is_empty() {
                    println!("No phones.");
                    continue;
                }
                show_phones(&contact);
                let Some(index) = session.console.choose("Number of the phone to change (0 for menu)", contact.phones().len()) else {
                    continue;
                };

                let current = contact.phones()[index].clone();
                let label = format!("New number ({}, Enter to keep)", current.number());
                let Some(number) = session.console.phone_number_or_keep(&label, session.min_digits) else {
                    continue;
                };
                let Some(phone_type) = session.console.phone_type_or_keep(current.phone_type()) else {
                    continue;
                };
                match repository::update_phone(&mut contact, index, Some(phone_type), number.as_deref(), session.min_digits) {
                    Ok(_) => println!("Phone updated."),
                    Err(e) => println!("{e}"),
                }
            }
            "4" => {
                if contact.phones().is_empty() {
                    println!("No phones.");
                    continue;
                }
                show_phones(&contact);
                let Some(index) = session.console.choose("Number of the phone to delete (0 for menu)", contact.phones().len()) else {
                    continue;
                };
                match repository::delete_phone(&mut contact, index) {
                    Ok(_) => println!("Phone deleted."),
                    Err(e) => println!("{e}"),
                }
            }
            "5" => {
                let current = contact.comment().unwrap_or("none").to_string();
                let Some(comment) = session.console.ask(&format!("Comment ({}, '-' to remove)", current)) else {
                    continue;
                };
                match comment.as_str() {
                    "" => {}
                    "-" => contact.set_comment(None),
                    text => contact.set_comment(Some(text)),
                }
            }
            "6" => {
                commit(session, contacts, contact);
                return;
            }
            _ => println!("Choose 1-6, or 0 to leave."),
        }
    }
}

fn commit(session: &Session, contacts: &mut Vec<Contact>, contact: Contact) {
    if let Err(e) = repository::update(contacts, contact) {
        println!("{e}");
        return;
    }
    if session.save(contacts) {
        println!("Changes saved.");
    }
}
