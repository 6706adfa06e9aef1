//! Entities that carry ranks: players, teams and scrim slots

use crate::rank::Rank;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for players
pub type PlayerId = Uuid;

/// Unique identifier for teams
pub type TeamId = Uuid;

/// Unique identifier for scrim slots
pub type ScrimSlotId = Uuid;

/// Lane a player prefers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Lane {
    Top,
    Jungle,
    Mid,
    Adc,
    Support,
}

/// Whether a player is looking for a team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AvailabilityStatus {
    LookingForTeam,
    InTeam,
    Unavailable,
}

/// Player profile as seen by the rank services.
///
/// `current_rank` is absent for players without a ranked solo queue entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub game_name: String,
    pub tag_line: String,
    pub primary_lane: Lane,
    pub secondary_lane: Option<Lane>,
    pub availability_status: AvailabilityStatus,
    #[serde(rename = "currentElo")]
    pub current_rank: Option<Rank>,
    #[serde(rename = "peakElo")]
    pub peak_rank: Option<Rank>,
}

impl Player {
    /// Riot ID in `name#tag` form
    pub fn riot_id(&self) -> String {
        format!("{}#{}", self.game_name, self.tag_line)
    }

    /// Whether the player plays the given lane
    pub fn plays(&self, lane: Lane) -> bool {
        self.primary_lane == lane || self.secondary_lane == Some(lane)
    }
}

/// Team with its derived average rank
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub tag: String,
    pub average_rank: Option<Rank>,
    pub updated_at: DateTime<Utc>,
}

/// Open scrim offered by a host team, restricted to a rank window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrimSlot {
    pub id: ScrimSlotId,
    pub host_team_id: TeamId,
    /// Average rank of the host team when the slot was listed
    pub host_rank: Option<Rank>,
    pub starts_at: DateTime<Utc>,
    pub min_rank_required: Rank,
    pub max_rank_required: Rank,
}
