// SRUP Core — signed device-management messages
//
// The message object model for SRUP: a C2 controller and a fleet of remote
// devices exchange versioned, typed, individually signed binary messages
// (software update initiation/activation, named actions, typed telemetry,
// and responses) over an untrusted transport.
//
// This crate is the protocol layer only.  Transport framing, key
// distribution, and delivery/retry policy live in the layers consuming it.

pub mod crypto;
pub mod message;
pub mod wire;

use thiserror::Error;

pub use crypto::KeyPair;
pub use message::{
    peek_type, DataValue, MessageType, SrupAction, SrupActivate, SrupData, SrupGeneric,
    SrupInitiate, SrupMessage, SrupResponse, StatusCode, StatusFamily,
};

/// Protocol version carried in byte 0 of every message.
pub const SRUP_VERSION: u8 = 0x01;

/// Library-level version getter, for host/binding layers that cannot read
/// the constant directly.
pub fn protocol_version() -> u8 {
    SRUP_VERSION
}

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Everything that can go wrong while building, signing, or decoding a
/// message.
///
/// Structural decode failures (`Truncated`, `TrailingBytes`, `TypeMismatch`,
/// `UnsupportedVersion`, `InvalidFlag`, `UnknownDataType`, `NotUtf8`) are
/// data-driven: they come from the buffer being rejected and never leave a
/// half-populated message behind.  `MissingField` is a completeness failure
/// at sign/serialize time.  `FieldTooLong` and `InvalidDigest` are caller
/// errors, raised at set time before anything touches the wire.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SrupError {
    #[error("message truncated: {needed} more byte(s) required")]
    Truncated { needed: usize },
    #[error("{0} trailing byte(s) after end of message")]
    TrailingBytes(usize),
    #[error("message type mismatch: expected {expected:#04x}, found {found:#04x}")]
    TypeMismatch { expected: u8, found: u8 },
    #[error("unknown message type {0:#04x}")]
    UnknownType(u8),
    #[error("unsupported protocol version {0:#04x}")]
    UnsupportedVersion(u8),
    #[error("invalid presence flag {0:#04x}")]
    InvalidFlag(u8),
    #[error("unknown data payload type {0:#04x}")]
    UnknownDataType(u8),
    #[error("field `{0}` is not valid UTF-8")]
    NotUtf8(&'static str),
    #[error("digest must be 32 bytes, got {0}")]
    InvalidDigest(usize),
    #[error("required field `{0}` is not set")]
    MissingField(&'static str),
    #[error("field `{field}` is {len} bytes, exceeding the {max}-byte wire limit")]
    FieldTooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },
    #[error("invalid key material")]
    InvalidKey,
}
