//! Canonical encodings for UTXO spend references.
//!
//! A [`SpendReference`] names one output of a previous transaction. It has a
//! fixed 34-byte binary form, used for hashing, signing and the wire, and a
//! JSON form in which the transaction id is written in display order.
mod error;
pub mod hash;
mod reference;
pub mod serialization;

#[cfg(feature = "claims")]
pub mod claims;
#[cfg(feature = "json")]
mod json;

pub use bitcoin_hashes;

pub use crate::error::Error;
pub use crate::hash::Uint256;
pub use crate::reference::SpendReference;
pub use crate::serialization::Serializable;

pub type Result<T> = std::result::Result<T, Error>;
