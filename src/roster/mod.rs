//! Team roster aggregation
//!
//! A team's average rank is derived from the ranks of its rostered players
//! and recomputed on every membership change.

pub mod average;
pub mod team_roster;

// Re-export commonly used types
pub use average::average_rank;
pub use team_roster::{Roster, RosterEntry, RosterUpdate};
