//! Keyed Tag Computation
//!
//! `Tag = MAC(key, utf8(text))`. The MAC is any RustCrypto `Mac`;
//! HMAC-SHA256 is the default.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use serde::{Serialize, Deserialize};
use sha2::Sha256;

use super::commitment::CommitmentError;
use super::key::SecretKey;

/// Default MAC: HMAC with SHA-256 (32-byte tags).
pub type HmacSha256 = Hmac<Sha256>;

/// MAC output.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Tag(Vec<u8>);

impl Tag {
    /// Wrap raw tag bytes.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Parse a base64 tag.
    pub fn from_base64(encoded: &str) -> Result<Self, CommitmentError> {
        STANDARD
            .decode(encoded)
            .map(Self)
            .map_err(CommitmentError::InvalidTagEncoding)
    }

    /// Raw tag bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Printable (base64) form.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.0)
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_base64())
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.to_base64()
    }
}

impl TryFrom<String> for Tag {
    type Error = CommitmentError;

    fn try_from(encoded: String) -> Result<Self, Self::Error> {
        Self::from_base64(&encoded)
    }
}

/// Computes tags under one secret key.
///
/// Holds a MAC instance keyed once at construction; every tag starts from
/// a clone of it.
pub struct Signer<M = HmacSha256> {
    key: SecretKey,
    keyed: M,
}

impl Signer<HmacSha256> {
    /// HMAC-SHA256 signer.
    pub fn new(key: SecretKey) -> Result<Self, CommitmentError> {
        Self::with_mac(key)
    }
}

impl<M> Signer<M>
where
    M: Mac + KeyInit + Clone,
{
    /// Signer for an arbitrary MAC algorithm.
    pub fn with_mac(key: SecretKey) -> Result<Self, CommitmentError> {
        let keyed = <M as KeyInit>::new_from_slice(key.as_bytes())
            .map_err(|_| CommitmentError::InvalidKeyLength(key.as_bytes().len()))?;

        Ok(Self { key, keyed })
    }

    /// Tag for `text`, encoded as UTF-8. Deterministic for a given key.
    pub fn sign(&self, text: &str) -> Tag {
        let mut mac = self.keyed.clone();
        Mac::update(&mut mac, text.as_bytes());
        Tag(Mac::finalize(mac).into_bytes().to_vec())
    }

    /// Constant-time check that `tag` is the tag for `text`.
    pub fn verify(&self, text: &str, tag: &Tag) -> bool {
        let mut mac = self.keyed.clone();
        Mac::update(&mut mac, text.as_bytes());
        Mac::verify_slice(mac, tag.as_bytes()).is_ok()
    }

    /// The signing key.
    pub fn key(&self) -> &SecretKey {
        &self.key
    }

    /// Give up the signer, keeping the key for disclosure.
    pub fn into_key(self) -> SecretKey {
        self.key
    }
}

impl<M> std::fmt::Debug for Signer<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signer")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}
