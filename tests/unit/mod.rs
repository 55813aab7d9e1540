//! Unit test infrastructure for rbh
//!
//! Tests are organized by module:
//! - `common/` - Hit model, coverage rounding, diagnostics
//! - `blastinput/` - Command-line arguments and tabular parsing
//! - `post/` - Reciprocal best hit reduction and reporting cutoffs
//! - `report/` - Output formatting
//! - `algorithm/` - End-to-end driver runs
