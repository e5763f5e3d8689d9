use clap::Parser;
use log::info;

mod prompt;
mod console;
use console::Console;

mod cmds {
    pub(crate) mod create_cmd;
    pub(crate) mod delete_cmd;
    pub(crate) mod edit_cmd;
    pub(crate) mod find_cmd;
}

use phonebook::{
    configuration as cfg,
    logger,
    repository,
    Contact,
    ContactStore,
    Error,
};

#[derive(Parser, Debug)]
#[command(name = "phonebook")]
#[command(version = "1.0")]
#[command(about = "Interactive personal phonebook", long_about = None)]
struct Options {
    /// The configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// The contacts data file, overriding the configured one
    #[arg(short, long, value_name = "FILE")]
    data: Option<String>,
}

pub(crate) struct Session {
    pub(crate) store: ContactStore,
    pub(crate) console: Console,
    pub(crate) min_digits: usize,
}

impl Session {
    /// Writes the whole collection out, telling the user when it fails.
    pub(crate) fn save(&self, contacts: &[Contact]) -> bool {
        match self.store.save(contacts) {
            Ok(_) => true,
            Err(e) => {
                println!("Saving contacts failed: {e}");
                false
            }
        }
    }
}

pub(crate) fn show_contacts(contacts: &[&Contact]) {
    println!("\n--- Phonebook ---");
    if contacts.is_empty() {
        println!("The contact list is empty.");
        return;
    }
    for (i, contact) in contacts.iter().enumerate() {
        println!("{}. {}", i + 1, contact);
    }
}

pub(crate) fn show_phones(contact: &Contact) {
    println!("{}:", contact.name());
    for (i, phone) in contact.phones().iter().enumerate() {
        println!("  {}. {}", i + 1, phone);
    }
}

fn print_menu() {
    println!("\n--- Menu ---");
    println!("1. Show all contacts");
    println!("2. Create contact");
    println!("3. Find contact");
    println!("4. Edit contact");
    println!("5. Delete contact");
    println!("6. Fill with test data");
    println!("7. Clear phonebook");
    println!("8. Save");
    println!("9. Exit");
}

fn load_contacts(store: &ContactStore) -> Vec<Contact> {
    match store.load() {
        Ok(v) => v,
        Err(Error::MalformedStorage(e)) => {
            println!("The data file is empty or corrupted, starting with an empty phonebook.");
            info!("{e}");
            Vec::new()
        }
        Err(e) => {
            println!("Loading contacts failed: {e}");
            Vec::new()
        }
    }
}

fn clear(session: &mut Session, contacts: &mut Vec<Contact>) {
    if contacts.is_empty() {
        println!("The phonebook is already empty.");
        return;
    }
    if session.console.confirm("Do you really want to clear the whole phonebook?") != Some(true) {
        println!("Clearing cancelled.");
        return;
    }
    contacts.clear();
    if session.save(contacts) {
        println!("Phonebook cleared!");
    }
}

fn main() {
    let opts = Options::parse();
    let mut builder = cfg::Builder::new();
    if let Some(path) = opts.config.as_deref() {
        if let Err(e) = builder.load(path) {
            eprintln!("Loading config file {path} error: {e}");
            return;
        }
    }
    if let Some(data) = opts.data.as_deref() {
        builder.with_data_file(data);
    }

    let cfg = match builder.build() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            return;
        }
    };

    #[cfg(feature = "inspect")] {
        cfg.dump();
    }

    if let Err(e) = logger::setup(cfg.log_level(), cfg.log_file()) {
        eprintln!("Setting up logger error: {e}");
    }

    let store = ContactStore::new(cfg.data_file());
    let mut contacts = load_contacts(&store);
    let mut session = Session {
        store,
        console: Console::new(cfg.data_file(), cfg.yes_token(), cfg.no_token()),
        min_digits: cfg.min_digits(),
    };

    print_menu();
    loop {
        println!();
        let Some(choice) = session.console.read("Select a menu item, or 0 to show the menu") else {
            println!("Goodbye!");
            break;
        };

        match choice.as_str() {
            "1" => show_contacts(&contacts.iter().collect::<Vec<_>>()),
            "2" => cmds::create_cmd::create(&mut session, &mut contacts),
            "3" => {
                _ = cmds::find_cmd::find(&mut session, &contacts);
            }
            "4" => cmds::edit_cmd::edit(&mut session, &mut contacts),
            "5" => cmds::delete_cmd::delete(&mut session, &mut contacts),
            "6" => match repository::add_samples(&mut contacts) {
                Ok(_) => {
                    if session.save(&contacts) {
                        println!("Phonebook filled with test data.");
                    }
                }
                Err(e) => println!("Adding test data failed: {e}"),
            },
            "7" => clear(&mut session, &mut contacts),
            "8" => {
                if session.save(&contacts) {
                    println!("Saved {} contacts.", contacts.len());
                }
            }
            "9" | "exit" | "quit" => {
                println!("Goodbye!");
                break;
            }
            "0" => print_menu(),
            "" => continue,
            _ => println!("Invalid choice."),
        }
    }

    logger::teardown();
}
