use phonebook::{
    repository,
    Contact,
};

use crate::{
    cmds::find_cmd,
    Session,
};

pub(crate) fn delete(session: &mut Session, contacts: &mut Vec<Contact>) {
    println!("\n--- Delete contact ---");
    let Some(id) = find_cmd::pick(session, contacts, "delete") else {
        return;
    };

    if session.console.confirm("Are you sure you want to delete this contact?") != Some(true) {
        println!("Deletion cancelled.");
        return;
    }

    match repository::remove(contacts, id) {
        Ok(contact) => {
            if session.save(contacts) {
                println!("Contact {} deleted!", contact.name());
            }
        }
        Err(e) => println!("{e}"),
    }
}
