use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct TestData {
    pub encoding: Vec<EncodingData>,
    pub parsing: Vec<ParsingData>,
    pub rejected_binary: Vec<RejectedBinaryData>,
    pub rejected_json: Vec<RejectedJsonData>,
}

#[derive(Debug, Deserialize)]
pub struct EncodingData {
    pub comment: String,
    pub binary: String,
    pub json: Value,
    pub debug: String,
}

#[derive(Debug, Deserialize)]
pub struct ParsingData {
    pub comment: String,
    pub json: Value,
    pub binary: String,
}

#[derive(Debug, Deserialize)]
pub struct RejectedBinaryData {
    pub comment: String,
    pub binary: String,
    pub error: ExpectedError,
}

#[derive(Debug, Deserialize)]
pub struct RejectedJsonData {
    pub comment: String,
    pub json: Value,
    pub error: ExpectedError,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedError {
    TruncatedInput,
    MalformedHash,
    InvalidHexEncoding,
    MalformedJson,
}
