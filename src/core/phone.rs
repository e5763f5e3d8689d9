use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    error::Result,
};

pub const DEFAULT_MIN_DIGITS: usize = 5;

/// Checks `number` against the phone format rules: an optional leading `+`,
/// then only digits and `#`, at least `min_digits` digits, and no `#` before
/// position `min_digits` of the body.
pub fn validate(number: &str, min_digits: usize) -> bool {
    if number.is_empty() {
        return false;
    }

    let body = number.strip_prefix('+').unwrap_or(number);
    if let Some(pos) = body.chars().position(|c| c == '#') {
        if pos < min_digits {
            return false;
        }
    }

    if body.chars().any(|c| !(c.is_ascii_digit() || c == '#')) {
        return false;
    }

    body.chars().filter(|c| c.is_ascii_digit()).count() >= min_digits
}

pub fn is_valid(number: &str) -> bool {
    validate(number, DEFAULT_MIN_DIGITS)
}

pub(crate) fn check(number: &str, min_digits: usize) -> Result<()> {
    match validate(number, min_digits) {
        true => Ok(()),
        false => Err(Error::InvalidPhoneFormat(format!(
            "Invalid phone number {:?}: expected an optional leading '+', digits, and '#' only after at least {} digits",
            number, min_digits
        ))),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhoneType {
    Mobile,
    Home,
    Work,
}

impl PhoneType {
    pub const ALL: [PhoneType; 3] = [
        PhoneType::Mobile,
        PhoneType::Home,
        PhoneType::Work,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PhoneType::Mobile => "mobile",
            PhoneType::Home   => "home",
            PhoneType::Work   => "work",
        }
    }
}

impl fmt::Display for PhoneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PhoneType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "mobile" => Ok(PhoneType::Mobile),
            "home"   => Ok(PhoneType::Home),
            "work"   => Ok(PhoneType::Work),
            _ => Err(Error::Argument(format!("Unknown phone type: {}", s))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneEntry {
    #[serde(rename = "type")]
    phone_type  : PhoneType,
    #[serde(rename = "number")]
    number      : String,
}

impl PhoneEntry {
    /// Creates an entry after checking `number` with the given minimum digit count.
    pub fn new(phone_type: PhoneType, number: &str, min_digits: usize) -> Result<Self> {
        check(number, min_digits)?;
        Ok(Self {
            phone_type,
            number: number.to_string(),
        })
    }

    pub fn phone_type(&self) -> PhoneType {
        self.phone_type
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub(crate) fn set_phone_type(&mut self, phone_type: PhoneType) {
        self.phone_type = phone_type;
    }

    pub(crate) fn set_number(&mut self, number: &str) {
        self.number = number.to_string();
    }
}

impl fmt::Display for PhoneEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.phone_type, self.number)
    }
}
