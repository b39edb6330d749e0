//! Cyclic Rules Table
//!
//! Moves are placed on a cycle in input order. For the move at index `i`
//! the next `(n - 1) / 2` moves beat it and the previous `(n - 1) / 2`
//! moves lose to it. With `[Rock, Paper, Scissors]` this is the classic
//! game: Paper follows Rock, so Rock loses to Paper.

use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;
use tracing::debug;

use super::outcome::Outcome;
use crate::display::table::{TablePrinter, TableError};

/// Top-left header cell of the rendered rules table.
pub const TABLE_CORNER: &str = "1st Player \\ 2nd Player";

/// Rejected move lists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// Move count is even (zero included).
    #[error("The number of moves in the game must be odd.")]
    EvenMoveCount(usize),

    /// A move name appears more than once.
    #[error("All moves should be unique.")]
    DuplicateMove(String),
}

/// Rule engine errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesError {
    /// The move list cannot form a fair cycle.
    #[error(transparent)]
    InvalidConfiguration(#[from] ConfigurationError),

    /// A lookup used a name outside the configured move set.
    #[error("Unknown move: {0}")]
    UnknownMove(String),
}

/// Complete outcome relation for an ordered set of moves.
///
/// Built once by [`GameRules::new`] and never mutated.
#[derive(Clone, Debug)]
pub struct GameRules {
    moves: Vec<String>,
    /// `relation[first][second]` is the first move's result.
    relation: BTreeMap<String, BTreeMap<String, Outcome>>,
}

impl GameRules {
    /// Validate the move list and derive the relation.
    pub fn new<I, S>(moves: I) -> Result<Self, RulesError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let moves: Vec<String> = moves.into_iter().map(Into::into).collect();
        let n = moves.len();

        if n % 2 != 1 {
            return Err(ConfigurationError::EvenMoveCount(n).into());
        }

        let mut seen = BTreeSet::new();
        for name in &moves {
            if !seen.insert(name.as_str()) {
                return Err(ConfigurationError::DuplicateMove(name.clone()).into());
            }
        }

        let half = (n / 2) as isize;
        let mut relation = BTreeMap::new();

        for (i, name) in moves.iter().enumerate() {
            let mut row = BTreeMap::new();
            row.insert(name.clone(), Outcome::Draw);

            for offset in 1..=half {
                row.insert(moves[cyclic_index(i, offset, n)].clone(), Outcome::Lose);
                row.insert(moves[cyclic_index(i, -offset, n)].clone(), Outcome::Win);
            }

            relation.insert(name.clone(), row);
        }

        debug!("Built rules for {} moves", n);

        Ok(Self { moves, relation })
    }

    /// Moves in presentation order.
    pub fn moves(&self) -> &[String] {
        &self.moves
    }

    /// Number of moves.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Always false: a valid move set has at least one move.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Position of a move in presentation order.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.moves.iter().position(|m| m == name)
    }

    /// Move at a zero-based position.
    pub fn move_at(&self, index: usize) -> Option<&str> {
        self.moves.get(index).map(String::as_str)
    }

    /// Result of `first` against `second`, from `first`'s perspective.
    pub fn outcome(&self, first: &str, second: &str) -> Result<Outcome, RulesError> {
        let row = self.row(first)?;
        row.get(second)
            .copied()
            .ok_or_else(|| RulesError::UnknownMove(second.to_string()))
    }

    /// Does the first player's move lose to the second player's move?
    pub fn does_lose(&self, first: &str, second: &str) -> Result<bool, RulesError> {
        Ok(self.outcome(first, second)? == Outcome::Lose)
    }

    /// Does the first player's move win against the second player's move?
    pub fn does_win(&self, first: &str, second: &str) -> Result<bool, RulesError> {
        Ok(self.outcome(first, second)? == Outcome::Win)
    }

    /// Is there a draw between the first player's move and the second player's move?
    pub fn is_draw(&self, first: &str, second: &str) -> Result<bool, RulesError> {
        Ok(self.outcome(first, second)? == Outcome::Draw)
    }

    /// Moves that `name` beats, in presentation order.
    pub fn beats(&self, name: &str) -> Result<Vec<&str>, RulesError> {
        self.filter_row(name, Outcome::Win)
    }

    /// Moves that beat `name`, in presentation order.
    pub fn beaten_by(&self, name: &str) -> Result<Vec<&str>, RulesError> {
        self.filter_row(name, Outcome::Lose)
    }

    /// Render the full relation as a bordered text grid.
    ///
    /// Rows are the first player's move, columns the second player's.
    pub fn render_table(&self) -> Result<String, TableError> {
        let title = std::iter::once(TABLE_CORNER.to_string())
            .chain(self.moves.iter().cloned());

        let rows = self.moves.iter().map(|first| {
            let row = &self.relation[first];
            std::iter::once(first.clone())
                .chain(self.moves.iter().map(|second| row[second].to_string()))
                .collect::<Vec<_>>()
        });

        Ok(TablePrinter::with_rows(title, rows)?.render())
    }

    fn row(&self, name: &str) -> Result<&BTreeMap<String, Outcome>, RulesError> {
        self.relation
            .get(name)
            .ok_or_else(|| RulesError::UnknownMove(name.to_string()))
    }

    fn filter_row(&self, name: &str, wanted: Outcome) -> Result<Vec<&str>, RulesError> {
        let row = self.row(name)?;
        Ok(self.moves
            .iter()
            .filter(|m| row[m.as_str()] == wanted)
            .map(String::as_str)
            .collect())
    }
}

impl std::fmt::Display for GameRules {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let table = self.render_table().map_err(|_| std::fmt::Error)?;
        f.write_str(&table)
    }
}

/// Index `offset` steps from `i` on a cycle of length `n`.
#[inline]
fn cyclic_index(i: usize, offset: isize, n: usize) -> usize {
    let n = n as isize;
    (((i as isize + offset) % n + n) % n) as usize
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn classic() -> GameRules {
        GameRules::new(["Rock", "Paper", "Scissors"]).unwrap()
    }

    #[test]
    fn test_classic_table() {
        let rules = classic();

        assert!(rules.does_win("Rock", "Scissors").unwrap());
        assert!(rules.does_lose("Rock", "Paper").unwrap());
        assert!(rules.does_win("Paper", "Rock").unwrap());
        assert!(rules.does_lose("Paper", "Scissors").unwrap());
        assert!(rules.does_win("Scissors", "Paper").unwrap());
        assert!(rules.does_lose("Scissors", "Rock").unwrap());

        for m in ["Rock", "Paper", "Scissors"] {
            assert!(rules.is_draw(m, m).unwrap());
        }
    }

    #[test]
    fn test_five_moves_split() {
        let rules = GameRules::new(["Rock", "Paper", "Scissors", "Lizard", "Spock"]).unwrap();

        for m in rules.moves() {
            let beats = rules.beats(m).unwrap();
            let beaten_by = rules.beaten_by(m).unwrap();

            assert_eq!(beats.len(), 2, "{} should beat exactly 2", m);
            assert_eq!(beaten_by.len(), 2, "{} should lose to exactly 2", m);
            assert!(beats.iter().all(|b| !beaten_by.contains(b)));
            assert!(!beats.contains(&m.as_str()));
        }

        // Rock loses to the two moves after it, beats the two before it
        assert_eq!(rules.beaten_by("Rock").unwrap(), vec!["Paper", "Scissors"]);
        assert_eq!(rules.beats("Rock").unwrap(), vec!["Lizard", "Spock"]);
    }

    #[test]
    fn test_single_move() {
        let rules = GameRules::new(["Only"]).unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules.outcome("Only", "Only").unwrap(), Outcome::Draw);
        assert!(rules.beats("Only").unwrap().is_empty());
    }

    #[test]
    fn test_even_count_rejected() {
        let empty: [&str; 0] = [];
        for moves in [&empty[..], &["a", "b"][..], &["a", "b", "c", "d"][..]] {
            let err = GameRules::new(moves.iter().copied()).unwrap_err();
            assert_eq!(
                err,
                RulesError::InvalidConfiguration(ConfigurationError::EvenMoveCount(moves.len()))
            );
        }
    }

    #[test]
    fn test_duplicate_rejected() {
        let err = GameRules::new(["Rock", "Rock", "Paper"]).unwrap_err();
        assert!(matches!(
            err,
            RulesError::InvalidConfiguration(ConfigurationError::DuplicateMove(ref m)) if m == "Rock"
        ));
    }

    #[test]
    fn test_error_messages() {
        let even = GameRules::new(["a", "b"]).unwrap_err();
        assert_eq!(even.to_string(), "The number of moves in the game must be odd.");

        let dup = GameRules::new(["a", "a", "b"]).unwrap_err();
        assert_eq!(dup.to_string(), "All moves should be unique.");
    }

    #[test]
    fn test_unknown_move() {
        let rules = classic();

        assert_eq!(
            rules.does_win("Lizard", "Rock"),
            Err(RulesError::UnknownMove("Lizard".to_string()))
        );
        assert_eq!(
            rules.is_draw("Rock", "Spock"),
            Err(RulesError::UnknownMove("Spock".to_string()))
        );
        assert!(rules.beats("Spock").is_err());
    }

    #[test]
    fn test_index_lookup() {
        let rules = classic();
        assert_eq!(rules.index_of("Paper"), Some(1));
        assert_eq!(rules.index_of("Spock"), None);
        assert_eq!(rules.move_at(2), Some("Scissors"));
        assert_eq!(rules.move_at(3), None);
    }

    #[test]
    fn test_cyclic_index() {
        assert_eq!(cyclic_index(0, -1, 5), 4);
        assert_eq!(cyclic_index(4, 1, 5), 0);
        assert_eq!(cyclic_index(1, -2, 5), 4);
        assert_eq!(cyclic_index(2, 2, 5), 4);
    }

    #[test]
    fn test_render_table() {
        let table = classic().render_table().unwrap();
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 7);
        assert_eq!(
            lines[1],
            "| 1st Player \\ 2nd Player | Rock | Paper | Scissors |"
        );
        assert_eq!(
            lines[3],
            "| Rock                    | Draw | Lose  | Win      |"
        );
        assert_eq!(
            lines[5],
            "| Scissors                | Lose | Win   | Draw     |"
        );
        assert_eq!(table, classic().to_string());
    }

    fn unique_names() -> impl Strategy<Value = Vec<String>> {
        (0usize..8)
            .prop_flat_map(|k| prop::collection::btree_set("[a-zA-Z]{1,8}", 2 * k + 1))
            .prop_map(|set| set.into_iter().collect::<Vec<_>>())
            .prop_shuffle()
    }

    proptest! {
        #[test]
        fn prop_relation_invariants(moves in unique_names()) {
            let rules = GameRules::new(moves.clone()).unwrap();
            let half = (moves.len() - 1) / 2;

            for a in &moves {
                prop_assert_eq!(rules.outcome(a, a).unwrap(), Outcome::Draw);
                prop_assert_eq!(rules.beats(a).unwrap().len(), half);
                prop_assert_eq!(rules.beaten_by(a).unwrap().len(), half);

                for b in &moves {
                    let ab = rules.outcome(a, b).unwrap();
                    let ba = rules.outcome(b, a).unwrap();
                    prop_assert_eq!(ab, ba.flip());
                }
            }
        }

        #[test]
        fn prop_even_counts_rejected(k in 0usize..6) {
            let moves: Vec<String> = (0..2 * k).map(|i| format!("m{}", i)).collect();
            prop_assert!(matches!(
                GameRules::new(moves),
                Err(RulesError::InvalidConfiguration(ConfigurationError::EvenMoveCount(_)))
            ));
        }
    }
}
