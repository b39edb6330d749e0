//! Text Rendering
//!
//! Fixed-width bordered tables for terminal output.

pub mod table;

pub use table::{TablePrinter, TableError};
