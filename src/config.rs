//! Game Configuration
//!
//! Every command line argument is a move name, dashes included. The
//! optional key override comes from the environment; `RUST_LOG` sets the
//! log filter.

use clap::Parser;
use thiserror::Error;

use crate::proof::{CommitmentError, SecretKey};
use crate::rules::{GameRules, RulesError};

/// Environment variable holding a base64 HMAC key to use instead of a
/// fresh random one.
pub const KEY_ENV: &str = "HMAC_RPS_KEY";

/// Game configuration.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    about = "Rock-paper-scissors with any odd number of moves and an HMAC-committed computer move",
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct GameConfig {
    /// Moves in cyclic order. Each move loses to the next half of the
    /// list and beats the previous half.
    #[arg(value_name = "MOVES", trailing_var_arg = true, allow_hyphen_values = true)]
    pub moves: Vec<String>,

    /// Base64 key override, read from `HMAC_RPS_KEY`.
    #[arg(skip)]
    pub key: Option<String>,
}

/// Startup errors, reported to the player as plain messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    /// The move list was rejected.
    #[error(transparent)]
    Rules(#[from] RulesError),

    /// The key override is not valid base64.
    #[error("Invalid HMAC key: {0}")]
    Key(#[from] CommitmentError),
}

/// Validated inputs for a round.
#[derive(Debug)]
pub struct Setup {
    /// Rule engine for the configured moves.
    pub rules: GameRules,
    /// Caller-supplied key, if any.
    pub key: Option<SecretKey>,
}

impl GameConfig {
    /// Parse the process arguments and read the key override.
    pub fn from_env() -> Self {
        Self {
            key: std::env::var(KEY_ENV).ok(),
            ..Self::parse()
        }
    }

    /// Validate the moves and build the rule engine.
    pub fn build_rules(&self) -> Result<GameRules, RulesError> {
        GameRules::new(self.moves.iter().cloned())
    }

    /// Decode the supplied key, if any.
    pub fn secret_key(&self) -> Result<Option<SecretKey>, CommitmentError> {
        self.key.as_deref().map(SecretKey::from_base64).transpose()
    }

    /// Validate everything a round needs.
    pub fn setup(&self) -> Result<Setup, SetupError> {
        let rules = self.build_rules()?;
        let key = self.secret_key()?;
        Ok(Setup { rules, key })
    }
}
