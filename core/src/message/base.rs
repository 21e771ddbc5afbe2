// Message base contract — common header, canonical encoding, sign/verify
//
// An instance is either mutable-and-unsigned or signed-and-serialized.  Any
// setter drops the signature and the cached wire buffer, so stale bytes can
// never leak out after a mutation.
//
// Canonical field order, applied uniformly to every variant:
//
//   unsigned image := version | msgtype | seq flag [+ 8B] | sender flag
//                     [+ 8B] | variant payload | token field
//   wire buffer    := unsigned image | signature field
//
// All multi-byte values are big-endian.  The signature covers exactly the
// unsigned image.

use super::MessageType;
use crate::wire::{self, Cursor};
use crate::{crypto, SrupError, SRUP_VERSION};
use ed25519_dalek::{SigningKey, VerifyingKey};
use tracing::debug;

/// Header state shared by every message kind.
///
/// Owned exclusively by one message instance; there is no `Clone`, so a
/// signature or cached buffer can never be aliased.
#[derive(Debug)]
pub struct MessageCore {
    pub(crate) version: u8,
    pub(crate) msgtype: MessageType,
    pub(crate) token: Option<Vec<u8>>,
    pub(crate) sequence_id: Option<u64>,
    pub(crate) sender_id: Option<u64>,
    pub(crate) signature: Option<Vec<u8>>,
    pub(crate) wire: Option<Vec<u8>>,
}

impl MessageCore {
    pub(crate) fn new(msgtype: MessageType) -> Self {
        Self {
            version: SRUP_VERSION,
            msgtype,
            token: None,
            sequence_id: None,
            sender_id: None,
            signature: None,
            wire: None,
        }
    }

    /// Invalidate derived state after a field mutation.
    pub(crate) fn touch(&mut self) {
        self.signature = None;
        self.wire = None;
    }

    /// Completeness check for the header: a signable message must say who
    /// sent it (key selection) and where it sits in the sender's sequence
    /// (replay detection).  The token stays optional.
    pub(crate) fn check_ids(&self) -> Result<(), SrupError> {
        self.sequence_id
            .ok_or(SrupError::MissingField("sequence_id"))?;
        self.sender_id.ok_or(SrupError::MissingField("sender_id"))?;
        Ok(())
    }
}

fn put_optional_u64(out: &mut Vec<u8>, value: Option<u64>) {
    match value {
        Some(v) => {
            out.push(0x01);
            out.extend_from_slice(&v.to_be_bytes());
        }
        None => out.push(0x00),
    }
}

fn read_optional_u64(cur: &mut Cursor<'_>) -> Result<Option<u64>, SrupError> {
    match cur.read_u8()? {
        0x00 => Ok(None),
        0x01 => Ok(Some(cur.read_u64()?)),
        other => Err(SrupError::InvalidFlag(other)),
    }
}

/// The contract every message kind implements.
///
/// Variants supply the three hooks (`data_check`, `encode_payload`,
/// `decode_payload`); the sign/verify/serialize lifecycle is written once
/// here against those hooks.
pub trait SrupMessage: Sized {
    /// The fixed wire tag of this message kind.
    const MSG_TYPE: MessageType;

    fn core(&self) -> &MessageCore;
    fn core_mut(&mut self) -> &mut MessageCore;

    /// Are all fields this kind requires present?  Gates `sign`.
    fn data_check(&self) -> Result<(), SrupError>;

    /// Append this kind's payload bytes in canonical position.
    fn encode_payload(&self, out: &mut Vec<u8>) -> Result<(), SrupError>;

    /// Read this kind's payload bytes back.  Only ever called on a fresh
    /// instance inside `from_wire`, so a failure cannot leave a previously
    /// valid message half-overwritten.
    fn decode_payload(&mut self, cur: &mut Cursor<'_>) -> Result<(), SrupError>;

    // ---- common header accessors -------------------------------------

    fn msg_type(&self) -> MessageType {
        Self::MSG_TYPE
    }

    fn version(&self) -> u8 {
        self.core().version
    }

    /// The request/response correlator.  `None` until set; a zero-length
    /// token on the wire decodes back to `None`, never to an empty token.
    fn token(&self) -> Option<&[u8]> {
        self.core().token.as_deref()
    }

    fn set_token(&mut self, token: &[u8]) -> Result<(), SrupError> {
        wire::check_len("token", token.len())?;
        let core = self.core_mut();
        core.token = if token.is_empty() {
            None
        } else {
            Some(token.to_vec())
        };
        core.touch();
        Ok(())
    }

    fn sequence_id(&self) -> Option<u64> {
        self.core().sequence_id
    }

    fn set_sequence_id(&mut self, sequence_id: u64) {
        let core = self.core_mut();
        core.sequence_id = Some(sequence_id);
        core.touch();
    }

    fn sender_id(&self) -> Option<u64> {
        self.core().sender_id
    }

    fn set_sender_id(&mut self, sender_id: u64) {
        let core = self.core_mut();
        core.sender_id = Some(sender_id);
        core.touch();
    }

    /// The stored signature, if this message has been signed or was decoded
    /// from a signed buffer.
    fn signature(&self) -> Option<&[u8]> {
        self.core().signature.as_deref()
    }

    // ---- lifecycle ---------------------------------------------------

    /// Build the canonical unsigned image from the current field values.
    ///
    /// `with_ids = false` drops the sequence/sender IDs (flag bytes 0x00),
    /// for lightweight partial comparisons; signing and verification always
    /// use the full image.
    fn unsigned_image(&self, with_ids: bool) -> Result<Vec<u8>, SrupError> {
        let core = self.core();
        let mut out = Vec::with_capacity(96);
        out.push(core.version);
        out.push(Self::MSG_TYPE.tag());
        put_optional_u64(&mut out, if with_ids { core.sequence_id } else { None });
        put_optional_u64(&mut out, if with_ids { core.sender_id } else { None });
        self.encode_payload(&mut out)?;
        wire::put_field(&mut out, "token", core.token.as_deref().unwrap_or(&[]))?;
        Ok(out)
    }

    /// Sign the message with the sender's private key.
    ///
    /// Fails without storing anything if required fields are missing, so a
    /// failed sign leaves no signature behind.
    fn sign(&mut self, key: &SigningKey) -> Result<(), SrupError> {
        self.data_check()?;
        let image = self.unsigned_image(true)?;
        let signature = crypto::sign(key, &image);
        let core = self.core_mut();
        core.signature = Some(signature);
        core.wire = None;
        Ok(())
    }

    /// Check the stored signature against the claimed sender's public key.
    ///
    /// The image is recomputed from the current field values, not read from
    /// a cached buffer, so any post-signing mutation fails verification.
    /// An unsigned message and a tampered one are both plain `false`.
    fn verify(&self, key: &VerifyingKey) -> bool {
        let Some(signature) = self.core().signature.as_deref() else {
            debug!(msgtype = ?Self::MSG_TYPE, "verify on unsigned message");
            return false;
        };
        match self.unsigned_image(true) {
            Ok(image) => crypto::verify(key, &image, signature),
            Err(err) => {
                debug!(msgtype = ?Self::MSG_TYPE, %err, "verify could not rebuild image");
                false
            }
        }
    }

    /// The transmittable wire buffer: unsigned image plus signature field.
    ///
    /// `None` until the message has been successfully signed.  Rebuilt
    /// lazily and cached; any setter invalidates the cache.
    fn serialized(&mut self) -> Option<&[u8]> {
        self.core().signature.as_ref()?;
        if self.core().wire.is_none() {
            let mut buf = self.unsigned_image(true).ok()?;
            let signature = self.core().signature.as_deref()?;
            wire::put_field(&mut buf, "signature", signature).ok()?;
            self.core_mut().wire = Some(buf);
        }
        self.core().wire.as_deref()
    }

    /// Decode a raw buffer into a new message of this kind.
    ///
    /// All-or-nothing: a tag mismatch, truncation, or inconsistent length
    /// prefix rejects the whole buffer and reveals none of its fields.
    fn from_wire(buf: &[u8]) -> Result<Self, SrupError>
    where
        Self: Default,
    {
        let mut cur = Cursor::new(buf);
        let version = cur.read_u8()?;
        if version != SRUP_VERSION {
            return Err(SrupError::UnsupportedVersion(version));
        }
        let tag = cur.read_u8()?;
        if tag != Self::MSG_TYPE.tag() {
            debug!(
                expected = Self::MSG_TYPE.tag(),
                found = tag,
                "rejecting buffer with wrong message type"
            );
            return Err(SrupError::TypeMismatch {
                expected: Self::MSG_TYPE.tag(),
                found: tag,
            });
        }
        let sequence_id = read_optional_u64(&mut cur)?;
        let sender_id = read_optional_u64(&mut cur)?;

        let mut msg = Self::default();
        msg.decode_payload(&mut cur)?;
        let token = cur.read_field()?;
        let signature = cur.read_field()?;
        cur.finish()?;

        let core = msg.core_mut();
        core.version = version;
        core.sequence_id = sequence_id;
        core.sender_id = sender_id;
        core.token = if token.is_empty() {
            None
        } else {
            Some(token.to_vec())
        };
        if signature.is_empty() {
            core.signature = None;
            core.wire = None;
        } else {
            core.signature = Some(signature.to_vec());
            // The received buffer is already the canonical wire form.
            core.wire = Some(buf.to_vec());
        }
        Ok(msg)
    }

    /// Replace this instance with the decode of `buf`.  On failure the
    /// instance keeps its prior state.
    fn deserialize(&mut self, buf: &[u8]) -> Result<(), SrupError>
    where
        Self: Default,
    {
        *self = Self::from_wire(buf)?;
        Ok(())
    }
}
