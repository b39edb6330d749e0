//! Commit-Reveal Protocol
//!
//! Binds the computer's move before the player chooses, and discloses the
//! key afterwards so the binding can be checked:
//! - Secret key generation and import
//! - Keyed tag computation (HMAC-SHA256 by default)
//! - Commitment, reveal and verification
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  COMMIT-REVEAL                               │
//! ├─────────────────────────────────────────────────────────────┤
//! │  key.rs          - 32-byte secret key, base64 printable      │
//! │  signer.rs       - Tag = MAC(key, utf8(move))                │
//! │  commitment.rs   - Published tag, hidden move, reveal        │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod key;
pub mod signer;
pub mod commitment;

// Re-export key types
pub use key::{SecretKey, KEY_LEN};
pub use signer::{Signer, Tag, HmacSha256};
pub use commitment::{Commitment, CommittedMove, Reveal, CommitmentError};
