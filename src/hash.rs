//! The 256-bit hash used to identify transactions.
//!
//! `Uint256` stores its bytes in internal (wire) order. Human-facing strings use
//! the reversed order, the same convention `bitcoin_hashes::sha256d` follows.
use std::cmp::Ordering;
use std::fmt;
use std::io::{Read, Write};

use bitcoin_hashes::{sha256d, Hash as _};

use crate::serialization::{read_bytes, write_bytes, Serializable};
use crate::{Error, Result};

pub const UINT256_SIZE: usize = 32;

#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Uint256([u8; UINT256_SIZE]);

impl Uint256 {
    pub const ZERO: Uint256 = Uint256([0u8; UINT256_SIZE]);

    pub fn from_byte_array(bytes: [u8; UINT256_SIZE]) -> Self {
        Uint256(bytes)
    }

    /// Build a hash from a slice in internal byte order.
    ///
    /// # Errors
    ///
    /// Returns `Error::MalformedHash` if the slice is not exactly 32 bytes long.
    pub fn parse_from_bytes(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; UINT256_SIZE] = bytes.try_into().map_err(|_| {
            Error::MalformedHash(format!(
                "expected {} bytes, got {}",
                UINT256_SIZE,
                bytes.len()
            ))
        })?;
        Ok(Uint256(bytes))
    }

    /// Hash `data` with double SHA256, the way transaction ids are derived.
    pub fn sha256d(data: &[u8]) -> Self {
        sha256d::Hash::hash(data).into()
    }

    pub fn to_bytes(&self) -> [u8; UINT256_SIZE] {
        self.0
    }

    pub fn as_bytes(&self) -> &[u8; UINT256_SIZE] {
        &self.0
    }

    /// The bytes in display order, suitable for printing out byte by byte.
    pub fn to_bytes_reversed(&self) -> [u8; UINT256_SIZE] {
        let mut reversed = self.0;
        reversed.reverse();
        reversed
    }

    pub fn to_reversed_hex(&self) -> String {
        hex::encode(self.to_bytes_reversed())
    }

    /// Parse a display-order hex string, as found in JSON and block explorers.
    ///
    /// Both upper and lowercase digits are accepted.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidHexEncoding` if `s` is not valid hex or is not
    /// exactly 64 characters long.
    pub fn from_reversed_hex(s: &str) -> Result<Self> {
        if s.len() != UINT256_SIZE * 2 {
            return Err(Error::InvalidHexEncoding(format!(
                "expected {} hex characters, got {}",
                UINT256_SIZE * 2,
                s.len()
            )));
        }

        let mut bytes = hex::decode(s)?;
        // display order is big endian, internal order is little endian
        bytes.reverse();

        Uint256::parse_from_bytes(&bytes)
    }

    pub fn compare(&self, other: &Uint256) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl fmt::Display for Uint256 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.to_reversed_hex())
    }
}

impl fmt::Debug for Uint256 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Uint256({})", self.to_reversed_hex())
    }
}

impl From<[u8; UINT256_SIZE]> for Uint256 {
    fn from(bytes: [u8; UINT256_SIZE]) -> Self {
        Uint256(bytes)
    }
}

impl From<Uint256> for [u8; UINT256_SIZE] {
    fn from(hash: Uint256) -> Self {
        hash.0
    }
}

impl From<sha256d::Hash> for Uint256 {
    fn from(hash: sha256d::Hash) -> Self {
        Uint256(hash.to_byte_array())
    }
}

impl From<Uint256> for sha256d::Hash {
    fn from(hash: Uint256) -> Self {
        sha256d::Hash::from_byte_array(hash.0)
    }
}

impl Serializable for Uint256 {
    fn serialize<W: Write>(&self, w: &mut W) -> Result<()> {
        write_bytes(w, &self.0)
    }

    fn deserialize<R: Read>(r: &mut R) -> Result<Self> {
        let bytes = read_bytes::<_, UINT256_SIZE>(r)
            .map_err(|e| match e {
                Error::TruncatedInput(msg) => {
                    Error::TruncatedInput(format!("reading 32-byte hash: {}", msg))
                }
                other => other,
            })?;
        Uint256::parse_from_bytes(&bytes)
    }
}
