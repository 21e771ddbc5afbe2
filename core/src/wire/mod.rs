// Wire module — length-prefixed field codec and bounded buffer reads
//
// Every variable-length field in a SRUP message (token, target, URL, byte
// payloads, signature) goes on the wire as a 2-byte big-endian length prefix
// followed by the bytes.  This module is the single source of truth for that
// encoding.

pub mod cursor;
pub mod length;

pub use cursor::Cursor;
pub use length::{check_len, decode_len, put_field, LENGTH_PREFIX, MAX_FIELD_LEN};
