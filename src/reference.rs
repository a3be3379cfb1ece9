use std::fmt;
use std::io::{Read, Write};

use crate::hash::{Uint256, UINT256_SIZE};
use crate::serialization::{read_u16, write_u16, Serializable};
use crate::{Error, Result};

/// A claim on a single output of a previous transaction.
///
/// The binary form is 34 bytes: the referenced transaction id in internal
/// byte order followed by the output index as a little-endian `u16`.
///
/// Two references are equal iff both the transaction id and the output index
/// are equal, which makes this type suitable as a key for double-spend detection.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpendReference {
    referenced_tx_id: Uint256,
    referenced_output_index: u16,
}

impl SpendReference {
    pub const ENCODED_LEN: usize = UINT256_SIZE + 2;

    pub fn new(referenced_tx_id: Uint256, referenced_output_index: u16) -> Self {
        SpendReference {
            referenced_tx_id,
            referenced_output_index,
        }
    }

    /// Get the id of the transaction that created the output.
    pub fn get_referenced_tx_id(&self) -> Uint256 {
        self.referenced_tx_id
    }

    /// Get the position of the output in the referenced transaction.
    pub fn get_referenced_output_index(&self) -> u16 {
        self.referenced_output_index
    }

    /// Encode into the canonical 34-byte form.
    pub fn to_bytes(&self) -> [u8; Self::ENCODED_LEN] {
        let mut bytes = [0u8; Self::ENCODED_LEN];
        bytes[..UINT256_SIZE].copy_from_slice(self.referenced_tx_id.as_bytes());
        bytes[UINT256_SIZE..].copy_from_slice(&self.referenced_output_index.to_le_bytes());
        bytes
    }

    /// Decode from the front of `bytes`. Anything past the first 34 bytes is ignored.
    ///
    /// # Errors
    ///
    /// Returns `Error::TruncatedInput` if `bytes` holds fewer than 34 bytes.
    pub fn from_bytes(mut bytes: &[u8]) -> Result<Self> {
        Self::deserialize(&mut bytes)
    }

    /// Null-safe comparison. An absent comparand is never equal.
    pub fn equals(&self, other: Option<&SpendReference>) -> bool {
        other.map_or(false, |other| self == other)
    }

    /// Diagnostic rendering: the transaction id followed by the index in hex.
    ///
    /// Not parseable, and not meant to be used as a key.
    pub fn to_debug_string(&self) -> String {
        format!(
            "{}{:x}",
            self.referenced_tx_id, self.referenced_output_index
        )
    }
}

impl Serializable for SpendReference {
    fn serialize<W: Write>(&self, w: &mut W) -> Result<()> {
        self.referenced_tx_id.serialize(w)?;
        write_u16(w, self.referenced_output_index)
    }

    fn deserialize<R: Read>(r: &mut R) -> Result<Self> {
        let referenced_tx_id = Uint256::deserialize(r).map_err(|e| {
            log::debug!("rejecting spend reference: {}", e);
            e
        })?;

        let referenced_output_index = read_u16(r).map_err(|e| {
            let e = match e {
                Error::TruncatedInput(msg) => {
                    Error::TruncatedInput(format!("reading output index: {}", msg))
                }
                other => other,
            };
            log::debug!("rejecting spend reference for {}: {}", referenced_tx_id, e);
            e
        })?;

        let reference = SpendReference::new(referenced_tx_id, referenced_output_index);
        log::trace!("decoded spend reference {}", reference);

        Ok(reference)
    }
}

impl fmt::Display for SpendReference {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}:{}",
            self.referenced_tx_id, self.referenced_output_index
        )
    }
}

impl fmt::Debug for SpendReference {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "SpendReference({})", self.to_debug_string())
    }
}

impl From<(Uint256, u16)> for SpendReference {
    fn from((referenced_tx_id, referenced_output_index): (Uint256, u16)) -> Self {
        SpendReference::new(referenced_tx_id, referenced_output_index)
    }
}
