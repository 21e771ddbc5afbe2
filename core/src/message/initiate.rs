// Initiate message — announce a software update for a device to fetch

use super::base::{MessageCore, SrupMessage};
use super::MessageType;
use crate::wire::{self, Cursor};
use crate::SrupError;
use sha2::{Digest, Sha256};

/// Length of the update-image digest (SHA-256).
pub const DIGEST_LEN: usize = 32;

/// Tells a device where to fetch an update image and what it must hash to.
///
/// All three payload fields are mandatory before signing: the target being
/// updated, the URL to fetch, and the expected digest of the fetched image.
#[derive(Debug)]
pub struct SrupInitiate {
    core: MessageCore,
    target: Option<Vec<u8>>,
    url: Option<String>,
    digest: Option<[u8; DIGEST_LEN]>,
}

impl SrupInitiate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opaque identifier of the device/component the update applies to.
    pub fn target(&self) -> Option<&[u8]> {
        self.target.as_deref()
    }

    /// Zero-length input clears the field.
    pub fn set_target(&mut self, target: &[u8]) -> Result<(), SrupError> {
        wire::check_len("target", target.len())?;
        self.target = if target.is_empty() {
            None
        } else {
            Some(target.to_vec())
        };
        self.core.touch();
        Ok(())
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn set_url(&mut self, url: &str) -> Result<(), SrupError> {
        wire::check_len("url", url.len())?;
        self.url = if url.is_empty() {
            None
        } else {
            Some(url.to_owned())
        };
        self.core.touch();
        Ok(())
    }

    pub fn digest(&self) -> Option<&[u8; DIGEST_LEN]> {
        self.digest.as_ref()
    }

    pub fn set_digest(&mut self, digest: &[u8]) -> Result<(), SrupError> {
        let raw: [u8; DIGEST_LEN] = digest
            .try_into()
            .map_err(|_| SrupError::InvalidDigest(digest.len()))?;
        self.digest = Some(raw);
        self.core.touch();
        Ok(())
    }

    /// Compute the digest of an update image, for the C2 side preparing an
    /// Initiate and for the device side checking what it fetched.
    pub fn digest_for(image: &[u8]) -> [u8; DIGEST_LEN] {
        Sha256::digest(image).into()
    }
}

impl Default for SrupInitiate {
    fn default() -> Self {
        Self {
            core: MessageCore::new(MessageType::Initiate),
            target: None,
            url: None,
            digest: None,
        }
    }
}

impl SrupMessage for SrupInitiate {
    const MSG_TYPE: MessageType = MessageType::Initiate;

    fn core(&self) -> &MessageCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut MessageCore {
        &mut self.core
    }

    fn data_check(&self) -> Result<(), SrupError> {
        self.core.check_ids()?;
        if self.target.is_none() {
            return Err(SrupError::MissingField("target"));
        }
        if self.url.is_none() {
            return Err(SrupError::MissingField("url"));
        }
        if self.digest.is_none() {
            return Err(SrupError::MissingField("digest"));
        }
        Ok(())
    }

    fn encode_payload(&self, out: &mut Vec<u8>) -> Result<(), SrupError> {
        let target = self.target.as_deref().ok_or(SrupError::MissingField("target"))?;
        let url = self.url.as_deref().ok_or(SrupError::MissingField("url"))?;
        let digest = self.digest.ok_or(SrupError::MissingField("digest"))?;

        wire::put_field(out, "target", target)?;
        wire::put_field(out, "url", url.as_bytes())?;
        out.extend_from_slice(&digest);
        Ok(())
    }

    fn decode_payload(&mut self, cur: &mut Cursor<'_>) -> Result<(), SrupError> {
        let target = cur.read_field()?;
        let url = cur.read_field()?;
        let url = std::str::from_utf8(url).map_err(|_| SrupError::NotUtf8("url"))?;
        let digest = cur.take(DIGEST_LEN)?;

        self.target = if target.is_empty() {
            None
        } else {
            Some(target.to_vec())
        };
        self.url = if url.is_empty() {
            None
        } else {
            Some(url.to_owned())
        };
        let mut raw = [0u8; DIGEST_LEN];
        raw.copy_from_slice(digest);
        self.digest = Some(raw);
        Ok(())
    }
}
