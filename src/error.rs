use std::fmt;
use std::io;

use crate::SpendReference;

#[derive(Debug)]
pub enum Error {
    TruncatedInput(String),
    MalformedHash(String),
    InvalidHexEncoding(String),
    MalformedJson(String),
    DuplicateSpend(SpendReference),
    IOError(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::TruncatedInput(msg) => write!(f, "Truncated input: {}", msg),
            Error::MalformedHash(msg) => write!(f, "Malformed hash: {}", msg),
            Error::InvalidHexEncoding(msg) => write!(f, "Invalid hex encoding: {}", msg),
            Error::MalformedJson(msg) => write!(f, "Malformed json: {}", msg),
            Error::DuplicateSpend(reference) => {
                write!(f, "Output {} is already claimed", reference)
            }
            Error::IOError(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IOError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<hex::FromHexError> for Error {
    fn from(e: hex::FromHexError) -> Self {
        Error::InvalidHexEncoding(e.to_string())
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::MalformedJson(e.to_string())
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::UnexpectedEof => Error::TruncatedInput(e.to_string()),
            _ => Error::IOError(e),
        }
    }
}
