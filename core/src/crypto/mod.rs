// Cryptography module — message signing and key material
//
// Stateless Ed25519 sign/verify over the canonical unsigned image of a
// message, plus the key handling a host application needs to drive it.

pub mod keys;

pub use keys::{sign, verify, verifying_key_from_bytes, verifying_key_from_hex, KeyPair};
