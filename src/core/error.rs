use std::fmt;
use std::io;
use std::result;

#[derive(Debug)]
pub enum Error {
    Argument(String),
    Io(String),
    MalformedStorage(String),
    InvalidPhoneFormat(String),
    NotFound(String),
    OutOfRange(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Argument(msg)            => write!(f, "{}", msg),
            Error::Io(msg)                  => write!(f, "{}", msg),
            Error::MalformedStorage(msg)    => write!(f, "{}", msg),
            Error::InvalidPhoneFormat(msg)  => write!(f, "{}", msg),
            Error::NotFound(msg)            => write!(f, "{}", msg),
            Error::OutOfRange(msg)          => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(format!("IO error: {}", err))
    }
}

pub type Result<T> = result::Result<T, Error>;
