//! JSON form of a spend reference.
//!
//! ```json
//! { "ReferTxID": "<64 hex chars, display order>", "ReferTxOutputIndex": 1 }
//! ```
//!
//! The transaction id is written in display order, which is the reverse of
//! the byte order used by the binary encoding.
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::hash::Uint256;
use crate::{Result, SpendReference};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
struct SpendReferenceInfo {
    #[serde(rename = "ReferTxID")]
    refer_tx_id: String,
    #[serde(rename = "ReferTxOutputIndex")]
    refer_tx_output_index: u16,
}

impl SpendReferenceInfo {
    fn new(reference: &SpendReference) -> Self {
        SpendReferenceInfo {
            refer_tx_id: reference.get_referenced_tx_id().to_reversed_hex(),
            refer_tx_output_index: reference.get_referenced_output_index(),
        }
    }

    fn into_reference(self) -> Result<SpendReference> {
        let tx_id = Uint256::from_reversed_hex(&self.refer_tx_id).map_err(|e| {
            log::debug!("rejecting ReferTxID {:?}: {}", self.refer_tx_id, e);
            e
        })?;

        Ok(SpendReference::new(tx_id, self.refer_tx_output_index))
    }
}

impl SpendReference {
    pub fn to_json(&self) -> Value {
        let info = SpendReferenceInfo::new(self);
        serde_json::json!({
            "ReferTxID": info.refer_tx_id,
            "ReferTxOutputIndex": info.refer_tx_output_index,
        })
    }

    /// # Errors
    ///
    /// * `Error::MalformedJson` if `value` is not an object with both fields,
    ///   or the index does not fit in a `u16`.
    /// * `Error::InvalidHexEncoding` if `ReferTxID` is not 64 hex characters.
    pub fn from_json(value: &Value) -> Result<Self> {
        if !value.is_object() {
            log::debug!("rejecting spend reference json: not an object");
            return Err(crate::Error::MalformedJson(
                "expected a JSON object".to_owned(),
            ));
        }

        let info = SpendReferenceInfo::deserialize(value).map_err(|e| {
            log::debug!("rejecting spend reference json: {}", e);
            crate::Error::from(e)
        })?;

        info.into_reference()
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(&SpendReferenceInfo::new(self))?)
    }

    /// Parse the textual JSON form. See [`SpendReference::from_json`] for the errors.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(s).map_err(|e| {
            log::debug!("rejecting spend reference json: {}", e);
            crate::Error::from(e)
        })?;

        SpendReference::from_json(&value)
    }
}

impl Serialize for SpendReference {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        SpendReferenceInfo::new(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SpendReference {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;

        SpendReference::from_json(&value).map_err(serde::de::Error::custom)
    }
}
