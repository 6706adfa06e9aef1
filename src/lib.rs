//! Scrim Rank - competitive rank domain model for scrim matchmaking
//!
//! This crate provides the ordered tier/division/LP rank scale with
//! validation, a linear scale for team averages, rank-range filters for
//! players, teams and scrim slots, and presentation helpers.

pub mod config;
pub mod error;
pub mod filter;
pub mod metrics;
pub mod rank;
pub mod riot;
pub mod roster;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{RankError, Result};
pub use rank::{Division, Rank, RankInput, Tier};
pub use types::*;

// Re-export key components
pub use filter::{filter_by_rank, RankRange, Ranked};
pub use roster::{average_rank, Roster, RosterUpdate};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
