//! Rank-range filtering for players, teams and scrim slots
//!
//! Callers supply an optional minimum and maximum rank; absent bounds are
//! open. Bounds are inclusive.

pub mod eligibility;
pub mod range;

// Re-export commonly used types
pub use eligibility::{filter_by_rank, partition_by_rank, Ranked};
pub use range::{RankRange, RankRangeInput};
