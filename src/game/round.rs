//! Single Round
//!
//! ```text
//! commit ──► print tag + menu ──► read line ─┬─ move  ──► resolve ──► reveal key
//!                  ▲                         ├─ ?     ──► rules table ─┐
//!                  └─────────────────────────┴─ other ◄────────────────┘
//! ```
//!
//! `0` exits without revealing. End of input abandons the round.

use std::io::{self, BufRead, Write};

use hmac::digest::KeyInit;
use hmac::Mac;
use rand::{CryptoRng, RngCore};
use thiserror::Error;
use tracing::{debug, info};

use super::menu::{Choice, Menu};
use crate::display::table::TableError;
use crate::proof::{Commitment, CommitmentError, CommittedMove, HmacSha256, Reveal, SecretKey};
use crate::rules::{GameRules, Outcome, RulesError};

/// How a round ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundResult {
    /// The player picked a move; the key was disclosed.
    Resolved {
        /// Player's move.
        player_move: String,
        /// Computer's committed move.
        computer_move: String,
        /// Player's result.
        outcome: Outcome,
        /// Disclosed move and key.
        reveal: Reveal,
    },

    /// The player chose `0`.
    Exited,

    /// Input ended before a choice was made.
    Abandoned,
}

/// Round errors.
#[derive(Debug, Error)]
pub enum RoundError {
    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Rules lookup failed.
    #[error(transparent)]
    Rules(#[from] RulesError),

    /// Rules table could not be rendered.
    #[error(transparent)]
    Table(#[from] TableError),

    /// Commitment could not be created.
    #[error(transparent)]
    Commitment(#[from] CommitmentError),
}

/// One round against the computer.
pub struct Round<'a, M = HmacSha256> {
    rules: &'a GameRules,
    menu: Menu,
    committed: CommittedMove<M>,
}

impl<'a> Round<'a, HmacSha256> {
    /// Commit to a random computer move under a fresh key.
    pub fn new<R>(rules: &'a GameRules, rng: &mut R) -> Result<Self, RoundError>
    where
        R: RngCore + CryptoRng,
    {
        let committed = CommittedMove::random(rules.moves(), rng)?;
        Self::with_commitment(rules, committed)
    }

    /// Commit to a random computer move under a caller-supplied key.
    pub fn with_key<R>(rules: &'a GameRules, key: SecretKey, rng: &mut R) -> Result<Self, RoundError>
    where
        R: RngCore,
    {
        let committed = CommittedMove::random_with_key(rules.moves(), key, rng)?;
        Self::with_commitment(rules, committed)
    }
}

impl<'a, M> Round<'a, M>
where
    M: Mac + KeyInit + Clone,
{
    /// Round for an existing commitment. The committed move must be one of
    /// the configured moves.
    pub fn with_commitment(
        rules: &'a GameRules,
        committed: CommittedMove<M>,
    ) -> Result<Self, RoundError> {
        if rules.index_of(committed.move_name()).is_none() {
            return Err(RulesError::UnknownMove(committed.move_name().to_string()).into());
        }

        Ok(Self {
            rules,
            menu: Menu::new(rules.moves()),
            committed,
        })
    }

    /// Tag published before the player moves.
    pub fn commitment(&self) -> &Commitment {
        self.committed.commitment()
    }

    /// Run the round until the player moves, exits, or input ends.
    pub fn play<R, W>(self, mut input: R, mut output: W) -> Result<RoundResult, RoundError>
    where
        R: BufRead,
        W: Write,
    {
        let tag = self.commitment().tag.to_base64();
        debug!(%tag, "Round committed");

        loop {
            writeln!(output)?;
            writeln!(output, "HMAC: {}", tag)?;
            write!(output, "{}", self.menu.text())?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                info!("Input closed before a move was chosen");
                return Ok(RoundResult::Abandoned);
            }

            match self.menu.parse(&line) {
                Choice::Move(index) => return self.resolve(index, &mut output),
                Choice::Exit => {
                    info!("Player exited");
                    return Ok(RoundResult::Exited);
                }
                Choice::Help => {
                    writeln!(output, "{}", self.rules.render_table()?)?;
                }
                Choice::Invalid => {
                    debug!(input = ?line, "Ignoring input");
                }
            }
        }
    }

    fn resolve<W: Write>(self, index: usize, output: &mut W) -> Result<RoundResult, RoundError> {
        let player_move = self.rules.moves()[index].clone();
        let computer_move = self.committed.move_name().to_string();
        let outcome = self.rules.outcome(&player_move, &computer_move)?;
        let reveal = self.committed.reveal();

        writeln!(output, "Your move: {}", player_move)?;
        writeln!(output, "Computer's move: {}", computer_move)?;
        writeln!(output, "{}", outcome.announcement())?;
        writeln!(output, "HMAC key: {}", reveal.key)?;
        output.flush()?;

        info!(player = %player_move, computer = %computer_move, ?outcome, "Round resolved");
        match serde_json::to_string(&reveal) {
            Ok(json) => debug!(reveal = %json, "Round revealed"),
            Err(e) => debug!("Failed to serialize reveal: {}", e),
        }

        Ok(RoundResult::Resolved {
            player_move,
            computer_move,
            outcome,
            reveal,
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
