// Length-prefix codec — one routine for every variable-length field

use crate::SrupError;

/// Width of the length prefix in bytes.
pub const LENGTH_PREFIX: usize = 2;

/// Largest value the 2-byte prefix can carry.  Oversized fields are a caller
/// error and are rejected before any bytes are written, never truncated.
pub const MAX_FIELD_LEN: usize = u16::MAX as usize;

/// Check that `len` fits the length prefix.
///
/// Setters call this at assignment time, so a caller handing us a 70 000-byte
/// token hears about it immediately rather than at sign time.
pub fn check_len(field: &'static str, len: usize) -> Result<(), SrupError> {
    if len > MAX_FIELD_LEN {
        return Err(SrupError::FieldTooLong {
            field,
            len,
            max: MAX_FIELD_LEN,
        });
    }
    Ok(())
}

/// Append `bytes` to `out` as a length-prefixed field.
///
/// A zero-length field is the wire encoding for "absent".
pub fn put_field(out: &mut Vec<u8>, field: &'static str, bytes: &[u8]) -> Result<(), SrupError> {
    check_len(field, bytes.len())?;
    out.extend_from_slice(&(bytes.len() as u16).to_be_bytes());
    out.extend_from_slice(bytes);
    Ok(())
}

/// Read a length prefix from the front of `buf` without consuming the field
/// bytes.  Transport layers use this to size reads; message decoding goes
/// through [`Cursor`](super::Cursor) instead.
pub fn decode_len(buf: &[u8]) -> Result<usize, SrupError> {
    if buf.len() < LENGTH_PREFIX {
        return Err(SrupError::Truncated {
            needed: LENGTH_PREFIX - buf.len(),
        });
    }
    Ok(u16::from_be_bytes([buf[0], buf[1]]) as usize)
}
