//! Rule Engine
//!
//! Derives the complete win/lose/draw relation from a cyclic ordering of
//! an odd number of unique moves. Pure and immutable once built.
//!
//! ## Module Structure
//!
//! - `outcome`: Result of one move against another
//! - `table`: Relation construction, queries and rendering

pub mod outcome;
pub mod table;

// Re-export key types
pub use outcome::Outcome;
pub use table::{GameRules, RulesError, ConfigurationError, TABLE_CORNER};
