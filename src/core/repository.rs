use log::{debug, info, warn};
use unicode_normalization::UnicodeNormalization;

use crate::{
    Error,
    error::Result,
    core::{
        contact::{Contact, ContactBuilder},
        phone::{self, PhoneEntry, PhoneType},
    },
};

fn fold(text: &str) -> String {
    text.nfc().collect::<String>().to_lowercase()
}

// A single leading '+' does not make two numbers different.
fn bare_number(number: &str) -> &str {
    let number = number.trim();
    number.strip_prefix('+').unwrap_or(number)
}

fn out_of_range(contact: &Contact, index: usize) -> Error {
    Error::OutOfRange(format!(
        "Phone index {} is out of range, contact {} has {} phone(s)",
        index,
        contact.name(),
        contact.phones().len()
    ))
}

fn id_after(id: u64, step: u64) -> Result<u64> {
    id.checked_add(step).ok_or_else(|| {
        Error::OutOfRange(format!("No contact ids left after {}", id))
    })
}

/// Returns the id a new contact should take: one past the highest id in use.
/// Fails with `Error::OutOfRange` once the highest id is `u64::MAX`.
pub fn next_id(contacts: &[Contact]) -> Result<u64> {
    match contacts.iter().map(|v| v.id()).max() {
        Some(max) => id_after(max, 1),
        None => Ok(1),
    }
}

/// Case-insensitive substring search over names, phone numbers and comments,
/// keeping collection order. An empty query matches everything.
pub fn find<'a>(contacts: &'a [Contact], query: &str) -> Vec<&'a Contact> {
    let query = fold(query);
    let found = contacts.iter()
        .filter(|v| matches(v, &query))
        .collect::<Vec<_>>();

    debug!("Query {:?} matched {} of {} contacts", query, found.len(), contacts.len());
    found
}

fn matches(contact: &Contact, query: &str) -> bool {
    fold(contact.name()).contains(query) ||
        contact.phones().iter().any(|v| v.number().contains(query)) ||
        contact.comment().map_or(false, |v| fold(v).contains(query))
}

pub fn find_by_id(contacts: &[Contact], id: u64) -> Option<&Contact> {
    contacts.iter().find(|v| v.id() == id)
}

pub fn find_by_id_mut(contacts: &mut [Contact], id: u64) -> Option<&mut Contact> {
    contacts.iter_mut().find(|v| v.id() == id)
}

/// True when some contact already carries this name (ignoring case) together
/// with this number (ignoring a leading '+').
pub fn is_possible_duplicate(contacts: &[Contact], name: &str, number: &str) -> bool {
    let name = fold(name.trim());
    let number = bare_number(number);

    contacts.iter().any(|c|
        fold(c.name()) == name &&
            c.phones().iter().any(|p| bare_number(p.number()) == number)
    )
}

pub fn add(contacts: &mut Vec<Contact>, contact: Contact) -> Result<()> {
    if !contact.is_valid() {
        return Err(Error::Argument(format!(
            "Contact {} with id {} is invalid", contact.name(), contact.id()
        )));
    }
    if find_by_id(contacts, contact.id()).is_some() {
        return Err(Error::Argument(format!("Contact id {} is already used", contact.id())));
    }

    if contact.phones().iter().any(|v| is_possible_duplicate(contacts, contact.name(), v.number())) {
        warn!("Contact {} looks like a duplicate of an existing one", contact.name());
    }

    info!("Adding contact {} with id {}", contact.name(), contact.id());
    contacts.push(contact);
    Ok(())
}

/// Replaces the stored contact that has the same id as `contact`.
pub fn update(contacts: &mut [Contact], contact: Contact) -> Result<()> {
    if !contact.is_valid() {
        return Err(Error::Argument(format!(
            "Contact {} with id {} is invalid", contact.name(), contact.id()
        )));
    }

    let Some(slot) = find_by_id_mut(contacts, contact.id()) else {
        return Err(Error::NotFound(format!("No contact with id {}", contact.id())));
    };

    info!("Updating contact {} with id {}", contact.name(), contact.id());
    *slot = contact;
    Ok(())
}

pub fn remove(contacts: &mut Vec<Contact>, id: u64) -> Result<Contact> {
    let Some(pos) = contacts.iter().position(|v| v.id() == id) else {
        return Err(Error::NotFound(format!("No contact with id {}", id)));
    };

    let removed = contacts.remove(pos);
    info!("Removed contact {} with id {}", removed.name(), id);
    Ok(removed)
}

pub fn add_phone(contact: &mut Contact, phone_type: PhoneType, number: &str, min_digits: usize) -> Result<()> {
    let entry = PhoneEntry::new(phone_type, number, min_digits)?;
    contact.phones_mut().push(entry);
    Ok(())
}

/// Changes the type and/or number of the phone at `index`. Nothing changes
/// unless both the index and the new number are acceptable.
pub fn update_phone(
    contact: &mut Contact,
    index: usize,
    new_type: Option<PhoneType>,
    new_number: Option<&str>,
    min_digits: usize
) -> Result<()> {
    if index >= contact.phones().len() {
        return Err(out_of_range(contact, index));
    }
    if let Some(number) = new_number {
        phone::check(number, min_digits)?;
    }

    let entry = &mut contact.phones_mut()[index];
    if let Some(phone_type) = new_type {
        entry.set_phone_type(phone_type);
    }
    if let Some(number) = new_number {
        entry.set_number(number);
    }
    Ok(())
}

pub fn delete_phone(contact: &mut Contact, index: usize) -> Result<PhoneEntry> {
    if index >= contact.phones().len() {
        return Err(out_of_range(contact, index));
    }
    Ok(contact.phones_mut().remove(index))
}

/// Demonstration contacts numbered from `first_id`.
pub fn sample_contacts(first_id: u64) -> Result<Vec<Contact>> {
    let second_id = id_after(first_id, 1)?;
    let third_id = id_after(first_id, 2)?;
    Ok(vec![
        ContactBuilder::new(first_id)
            .with_name("Анна Симакова")
            .with_phone(PhoneType::Mobile, "+37494111222")
            .with_comment("Коллега")
            .build()?,
        ContactBuilder::new(second_id)
            .with_name("Иван Иванов")
            .with_phone(PhoneType::Home, "+37410555444")
            .build()?,
        ContactBuilder::new(third_id)
            .with_name("Мария Петрова")
            .with_phone(PhoneType::Mobile, "+79161234567")
            .with_comment("Старший менеджер")
            .build()?,
    ])
}

/// Appends the demonstration contacts after the current highest id and
/// returns how many were added.
pub fn add_samples(contacts: &mut Vec<Contact>) -> Result<usize> {
    let samples = sample_contacts(next_id(contacts)?)?;
    let count = samples.len();
    contacts.extend(samples);
    info!("Added {} sample contacts", count);
    Ok(count)
}
