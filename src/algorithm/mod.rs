pub mod common;
pub mod rbh;

pub use rbh::{run, RunSummary};
