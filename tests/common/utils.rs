use std::{fs::File, io::Read};

use serde_json::from_str;
use spendref::Error;

use super::structs::{ExpectedError, TestData};

pub fn read_file() -> TestData {
    let mut file = File::open("tests/resources/spend_reference_vectors.json").unwrap();
    let mut contents = String::new();
    file.read_to_string(&mut contents).unwrap();
    from_str(&contents).unwrap()
}

pub fn error_kind(error: &Error) -> Option<ExpectedError> {
    match error {
        Error::TruncatedInput(_) => Some(ExpectedError::TruncatedInput),
        Error::MalformedHash(_) => Some(ExpectedError::MalformedHash),
        Error::InvalidHexEncoding(_) => Some(ExpectedError::InvalidHexEncoding),
        Error::MalformedJson(_) => Some(ExpectedError::MalformedJson),
        _ => None,
    }
}
