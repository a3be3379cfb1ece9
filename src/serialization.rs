//! Little-endian stream primitives shared by the binary codecs.
use std::io::{Read, Write};

use crate::Result;

/// A value with a canonical, deterministic byte encoding.
pub trait Serializable: Sized {
    fn serialize<W: Write>(&self, w: &mut W) -> Result<()>;

    fn deserialize<R: Read>(r: &mut R) -> Result<Self>;
}

pub fn write_bytes<W: Write>(w: &mut W, bytes: &[u8]) -> Result<()> {
    w.write_all(bytes)?;
    Ok(())
}

pub fn write_u16<W: Write>(w: &mut W, value: u16) -> Result<()> {
    write_bytes(w, &value.to_le_bytes())
}

/// Read exactly `N` bytes. A short read is reported as `Error::TruncatedInput`.
pub fn read_bytes<R: Read, const N: usize>(r: &mut R) -> Result<[u8; N]> {
    let mut buf = [0u8; N];
    r.read_exact(&mut buf)?;
    Ok(buf)
}

pub fn read_u16<R: Read>(r: &mut R) -> Result<u16> {
    Ok(u16::from_le_bytes(read_bytes::<_, 2>(r)?))
}
