//! Move Commitment Protocol
//!
//! Commit to the computer's move before the player chooses.
//! Reveal the key after the round so the commitment can be verified.

use hmac::digest::KeyInit;
use hmac::Mac;
use rand::seq::SliceRandom;
use rand::{CryptoRng, RngCore};
use serde::{Serialize, Deserialize};
use thiserror::Error;

use super::key::SecretKey;
use super::signer::{HmacSha256, Signer, Tag};

/// Published half of a commitment.
///
/// Shown to the player before they move. Reveals nothing about the move
/// without the key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commitment {
    /// `MAC(key, move)`.
    pub tag: Tag,
}

/// Hidden half of a commitment: the move and the key that bound it.
pub struct CommittedMove<M = HmacSha256> {
    move_name: String,
    signer: Signer<M>,
    commitment: Commitment,
}

impl CommittedMove<HmacSha256> {
    /// Commit to `move_name` under `key` with HMAC-SHA256.
    pub fn commit(move_name: impl Into<String>, key: SecretKey) -> Result<Self, CommitmentError> {
        Self::commit_with_mac(move_name, key)
    }

    /// Pick a move uniformly and commit to it under a fresh key.
    pub fn random<R>(moves: &[String], rng: &mut R) -> Result<Self, CommitmentError>
    where
        R: RngCore + CryptoRng,
    {
        let move_name = moves.choose(rng).ok_or(CommitmentError::NoMoves)?.clone();
        let key = SecretKey::generate(rng);
        Self::commit(move_name, key)
    }

    /// Pick a move uniformly and commit to it under a caller-supplied key.
    pub fn random_with_key<R>(
        moves: &[String],
        key: SecretKey,
        rng: &mut R,
    ) -> Result<Self, CommitmentError>
    where
        R: RngCore,
    {
        let move_name = moves.choose(rng).ok_or(CommitmentError::NoMoves)?.clone();
        Self::commit(move_name, key)
    }
}

impl<M> CommittedMove<M>
where
    M: Mac + KeyInit + Clone,
{
    /// Commit to `move_name` under `key` with an arbitrary MAC.
    pub fn commit_with_mac(
        move_name: impl Into<String>,
        key: SecretKey,
    ) -> Result<Self, CommitmentError> {
        let move_name = move_name.into();
        let signer = Signer::<M>::with_mac(key)?;
        let commitment = Commitment {
            tag: signer.sign(&move_name),
        };

        Ok(Self {
            move_name,
            signer,
            commitment,
        })
    }

    /// The value to publish now.
    pub fn commitment(&self) -> &Commitment {
        &self.commitment
    }

    /// The committed move. Known only to the committing side.
    pub fn move_name(&self) -> &str {
        &self.move_name
    }

    /// Disclose the move and key. Consumes the commitment.
    pub fn reveal(self) -> Reveal {
        Reveal {
            move_name: self.move_name,
            key: self.signer.into_key().to_base64().to_string(),
        }
    }
}

impl<M> std::fmt::Debug for CommittedMove<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommittedMove")
            .field("commitment", &self.commitment)
            .finish_non_exhaustive()
    }
}

/// Reveal structure (published after the round ends).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reveal {
    /// The committed move.
    pub move_name: String,

    /// Base64 key the tag was computed with.
    pub key: String,
}

impl Reveal {
    /// Verify this reveal against a published HMAC-SHA256 commitment.
    pub fn verify(&self, commitment: &Commitment) -> Result<(), CommitmentError> {
        self.verify_with_mac::<HmacSha256>(commitment)
    }

    /// Verify with an arbitrary MAC.
    pub fn verify_with_mac<M>(&self, commitment: &Commitment) -> Result<(), CommitmentError>
    where
        M: Mac + KeyInit + Clone,
    {
        let key = SecretKey::from_base64(&self.key)?;
        let signer = Signer::<M>::with_mac(key)?;

        if signer.verify(&self.move_name, &commitment.tag) {
            Ok(())
        } else {
            Err(CommitmentError::TagMismatch)
        }
    }
}

/// Errors that can occur while committing or verifying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommitmentError {
    /// Key text is not valid base64.
    #[error("invalid key encoding: {0}")]
    InvalidKeyEncoding(#[from] base64::DecodeError),

    /// Tag text is not valid base64.
    #[error("invalid tag encoding: {0}")]
    InvalidTagEncoding(base64::DecodeError),

    /// The MAC rejected the key length.
    #[error("key of {0} bytes is not accepted by this MAC")]
    InvalidKeyLength(usize),

    /// Revealed move and key do not reproduce the published tag.
    #[error("revealed move does not match the published tag")]
    TagMismatch,

    /// Nothing to commit to.
    #[error("no moves to choose from")]
    NoMoves,
}
