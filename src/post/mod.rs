pub mod filter;
pub mod reciprocal;

pub use reciprocal::{ReciprocalBestHits, UpdateOutcome};
