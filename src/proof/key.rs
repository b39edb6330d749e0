//! Secret Key
//!
//! Key material for one round. The printable form is standard base64
//! with padding.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use rand::{CryptoRng, RngCore};

use super::commitment::CommitmentError;

/// Generated key width in bytes.
pub const KEY_LEN: usize = 32;

/// Secret key with its printable encoding.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey {
    bytes: Vec<u8>,
    encoded: String,
}

impl SecretKey {
    /// Generate a fresh `KEY_LEN`-byte key.
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut bytes = vec![0u8; KEY_LEN];
        rng.fill_bytes(&mut bytes);
        Self::from_bytes(bytes)
    }

    /// Import a base64 key. The text is kept verbatim as the printable form.
    pub fn from_base64(encoded: &str) -> Result<Self, CommitmentError> {
        let bytes = STANDARD.decode(encoded)?;
        Ok(Self {
            bytes,
            encoded: encoded.to_string(),
        })
    }

    /// Import raw key bytes.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        let bytes = bytes.into();
        let encoded = STANDARD.encode(&bytes);
        Self { bytes, encoded }
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Printable (base64) form.
    pub fn to_base64(&self) -> &str {
        &self.encoded
    }
}

// Key material stays out of logs
impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretKey")
            .field("len", &self.bytes.len())
            .finish_non_exhaustive()
    }
}
