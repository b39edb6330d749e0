//! # HMAC Rock-Paper-Scissors
//!
//! Generalized N-move rock-paper-scissors against the computer, with the
//! computer's move committed in advance through an HMAC tag.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       HMAC RPS                               │
//! ├─────────────────────────────────────────────────────────────┤
//! │  rules/          - Rule engine (pure, immutable)             │
//! │  ├── outcome.rs  - Win / Lose / Draw                         │
//! │  └── table.rs    - Cyclic half-cycle relation                │
//! │                                                              │
//! │  proof/          - Commit-reveal protocol                    │
//! │  ├── key.rs      - Secret key generation and import          │
//! │  ├── signer.rs   - Keyed tag computation (HMAC-SHA256)       │
//! │  └── commitment.rs - Commit, reveal, verify                  │
//! │                                                              │
//! │  game/           - Interactive round (stdin / stdout)        │
//! │  ├── menu.rs     - Menu text and input parsing               │
//! │  └── round.rs    - Single round loop                         │
//! │                                                              │
//! │  display/        - Text table rendering                      │
//! │  config.rs       - Command line configuration                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Fairness Guarantee
//!
//! The computer's move is chosen and its tag published before the player
//! picks. The key is disclosed only after the round resolves, so anyone can
//! recompute `HMAC(key, move)` and compare it with the published tag.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod config;
pub mod display;
pub mod game;
pub mod proof;
pub mod rules;

// Re-export commonly used types
pub use config::{GameConfig, Setup, SetupError};
pub use display::{TablePrinter, TableError};
pub use game::{Round, RoundResult, Menu, Choice};
pub use proof::{SecretKey, Signer, Tag, Commitment, CommittedMove, Reveal, CommitmentError};
pub use rules::{GameRules, Outcome, RulesError, ConfigurationError};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
