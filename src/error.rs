//! Error types for the rank domain
//!
//! Core constructors return [`RankError`] directly so callers can match on the
//! kind; application paths use the anyhow-based [`Result`] alias.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for rank validation and the services built on it
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RankError {
    #[error("Malformed rank {rank}: {reason}")]
    MalformedRank { rank: String, reason: String },

    #[error("Unknown tier: {value}")]
    UnknownTier { value: String },

    #[error("Unknown division: {value}")]
    UnknownDivision { value: String },

    #[error("Invalid rank range: minimum {min} is above maximum {max}")]
    InvalidRankRange { min: String, max: String },

    #[error("Player already rostered: {player_id}")]
    PlayerAlreadyRostered { player_id: String },

    #[error("Player not rostered: {player_id}")]
    PlayerNotRostered { player_id: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}

impl RankError {
    /// Shorthand for a [`RankError::MalformedRank`]
    pub fn malformed(rank: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedRank {
            rank: rank.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error reports an ill-formed rank value
    pub fn is_malformed_rank(&self) -> bool {
        matches!(self, Self::MalformedRank { .. })
    }
}
