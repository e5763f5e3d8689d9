use std::fmt;
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    error::Result,
    core::phone::{
        PhoneEntry,
        PhoneType,
        DEFAULT_MIN_DIGITS,
    },
};

pub struct ContactBuilder {
    id          : u64,
    name        : Option<String>,
    phones      : Vec<(PhoneType, String)>,
    comment     : Option<String>,
    min_digits  : usize,
}

impl ContactBuilder {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            name        : None,
            phones      : Vec::new(),
            comment     : None,
            min_digits  : DEFAULT_MIN_DIGITS,
        }
    }

    pub fn with_name(&mut self, name: &str) -> &mut Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_phone(&mut self, phone_type: PhoneType, number: &str) -> &mut Self {
        self.phones.push((phone_type, number.to_string()));
        self
    }

    pub fn with_phones(&mut self, phones: &[PhoneEntry]) -> &mut Self {
        self.phones.extend(phones.iter().map(|v|
            (v.phone_type(), v.number().to_string())
        ));
        self
    }

    pub fn with_comment(&mut self, comment: &str) -> &mut Self {
        self.comment = Some(comment.to_string());
        self
    }

    pub fn with_min_digits(&mut self, min_digits: usize) -> &mut Self {
        self.min_digits = min_digits;
        self
    }

    pub fn build(&mut self) -> Result<Contact> {
        if self.id == 0 {
            return Err(Error::Argument("Contact id must be positive".into()));
        }

        let name = self.name.as_deref().map(str::trim).unwrap_or_default().to_string();
        if name.is_empty() {
            return Err(Error::Argument("Contact name must not be empty".into()));
        }

        if self.phones.is_empty() {
            return Err(Error::Argument(format!("Contact {} needs at least one phone number", name)));
        }

        let phones = self.phones.iter().map(|(t, n)|
            PhoneEntry::new(*t, n, self.min_digits)
        ).collect::<Result<Vec<_>>>()?;

        Ok(Contact {
            id      : self.id,
            name,
            phones,
            comment : self.comment.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(rename = "id")]
    id      : u64,

    #[serde(rename = "name", alias = "contact_name")]
    name    : String,

    #[serde(rename = "phones", default)]
    phones  : Vec<PhoneEntry>,

    #[serde(rename = "comment", default)]
    comment : Option<String>,
}

impl Contact {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the contact; a blank name is rejected and leaves the old one.
    pub fn set_name(&mut self, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::Argument("Contact name must not be empty".into()));
        }
        self.name = name.to_string();
        Ok(())
    }

    pub fn phones(&self) -> &[PhoneEntry] {
        &self.phones
    }

    pub(crate) fn phones_mut(&mut self) -> &mut Vec<PhoneEntry> {
        &mut self.phones
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// `None` removes the comment; `Some("")` keeps an empty one.
    pub fn set_comment(&mut self, comment: Option<&str>) {
        self.comment = comment.map(|v| v.to_string());
    }

    pub(crate) fn is_valid(&self) -> bool {
        self.id > 0 && !self.name.trim().is_empty()
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | ", self.name)?;
        for (i, phone) in self.phones.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", phone)?;
        }
        match self.comment.as_deref() {
            Some(comment) if !comment.is_empty() => write!(f, " | {}", comment),
            _ => Ok(()),
        }
    }
}
