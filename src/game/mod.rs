//! Interactive Round
//!
//! One round over text streams. Non-deterministic only through the
//! injected RNG; all I/O goes through `BufRead` / `Write`.
//!
//! ## Module Structure
//!
//! - `menu`: Menu text and input line parsing
//! - `round`: Commit, read, resolve, reveal

pub mod menu;
pub mod round;

// Re-export key types
pub use menu::{Menu, Choice};
pub use round::{Round, RoundResult, RoundError};
