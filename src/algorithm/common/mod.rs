//! Shared support for the reduction pipeline
//!
//! - Diagnostic counters for tracking where rows are dropped

pub mod diagnostics;
