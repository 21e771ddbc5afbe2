// Cryptographic key management and the sign/verify engine

use crate::SrupError;
use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use zeroize::{Zeroize, Zeroizing};

/// Sign a canonical unsigned message image.
///
/// The caller is the message base contract — `message_bytes` is always the
/// serialized unsigned image, never raw user payload.
pub fn sign(key: &SigningKey, message_bytes: &[u8]) -> Vec<u8> {
    key.sign(message_bytes).to_bytes().to_vec()
}

/// Verify a signature over a canonical unsigned message image.
///
/// Malformed signature bytes and backend verification errors both report
/// `false`; verification failure is an expected outcome here, not an
/// exceptional one.
pub fn verify(key: &VerifyingKey, message_bytes: &[u8], signature: &[u8]) -> bool {
    let raw: [u8; 64] = match signature.try_into() {
        Ok(raw) => raw,
        Err(_) => return false,
    };
    let signature = Signature::from_bytes(&raw);
    key.verify(message_bytes, &signature).is_ok()
}

/// Ed25519 key pair identifying one party (a C2 server or a device).
#[derive(Clone)]
pub struct KeyPair {
    pub signing_key: SigningKey,
}

impl KeyPair {
    /// Generate a new random key pair
    pub fn generate() -> Self {
        use rand::RngCore;
        let mut secret_key_bytes = [0u8; 32];
        rand::rngs::OsRng.fill_bytes(&mut secret_key_bytes);
        let signing_key = SigningKey::from_bytes(&secret_key_bytes);
        secret_key_bytes.zeroize();
        Self { signing_key }
    }

    /// Get verifying key
    pub fn verifying_key(&self) -> VerifyingKey {
        self.signing_key.verifying_key()
    }

    /// Get public key as hex
    pub fn public_key_hex(&self) -> String {
        hex::encode(self.signing_key.verifying_key().to_bytes())
    }

    /// Serialize the secret key to bytes.
    /// Returns a `Zeroizing<Vec<u8>>` that wipes the key material on drop.
    pub fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.signing_key.to_bytes().to_vec())
    }

    /// Deserialize a key pair from stored secret key bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SrupError> {
        let raw: [u8; 32] = bytes.try_into().map_err(|_| SrupError::InvalidKey)?;
        Ok(Self {
            signing_key: SigningKey::from_bytes(&raw),
        })
    }
}

/// Parse a verifying key from its 32 raw bytes.
pub fn verifying_key_from_bytes(bytes: &[u8]) -> Result<VerifyingKey, SrupError> {
    let raw: [u8; 32] = bytes.try_into().map_err(|_| SrupError::InvalidKey)?;
    VerifyingKey::from_bytes(&raw).map_err(|_| SrupError::InvalidKey)
}

/// Parse a verifying key from its hex form, the shape key registries
/// typically store against a sender ID.
pub fn verifying_key_from_hex(hex_key: &str) -> Result<VerifyingKey, SrupError> {
    let bytes = hex::decode(hex_key).map_err(|_| SrupError::InvalidKey)?;
    verifying_key_from_bytes(&bytes)
}
