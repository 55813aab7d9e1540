//! Input handling: command-line arguments and the tabular report reader
//!
//! - `blast_args` - `rbh` command-line arguments
//! - `tabular` - row parser and streaming reader for `std qlen slen` reports

pub mod blast_args;
pub mod tabular;

pub use blast_args::RbhArgs;
pub use tabular::{ParseError, TabularReader};
