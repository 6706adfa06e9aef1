//! In-memory team roster that keeps the team's average rank current

use crate::error::{RankError, Result};
use crate::rank::Rank;
use crate::roster::average::average_rank;
use crate::types::{Player, PlayerId, TeamId};
use crate::utils::current_timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A rostered player and the rank used for the team average
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    pub player_id: PlayerId,
    pub rank: Option<Rank>,
    pub join_date: DateTime<Utc>,
}

/// Outcome of a membership change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterUpdate {
    pub team_id: TeamId,
    pub member_count: usize,
    /// Recomputed average, `None` when no rostered player has a rank
    pub average_rank: Option<Rank>,
    pub updated_at: DateTime<Utc>,
}

/// Roster of a single team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roster {
    team_id: TeamId,
    entries: Vec<RosterEntry>,
}

impl Roster {
    /// Create an empty roster
    pub fn new(team_id: TeamId) -> Self {
        Self {
            team_id,
            entries: Vec::new(),
        }
    }

    pub fn team_id(&self) -> TeamId {
        self.team_id
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, player_id: &PlayerId) -> bool {
        self.entries.iter().any(|entry| entry.player_id == *player_id)
    }

    /// Add a player with their current rank
    pub fn add_player(&mut self, player: &Player) -> Result<RosterUpdate> {
        if self.contains(&player.id) {
            return Err(RankError::PlayerAlreadyRostered {
                player_id: player.id.to_string(),
            }
            .into());
        }

        self.entries.push(RosterEntry {
            player_id: player.id,
            rank: player.current_rank,
            join_date: current_timestamp(),
        });

        debug!("Player {} joined roster of team {}", player.id, self.team_id);
        Ok(self.recalculate())
    }

    /// Remove a player from the roster
    pub fn remove_player(&mut self, player_id: &PlayerId) -> Result<RosterUpdate> {
        let position = self
            .entries
            .iter()
            .position(|entry| entry.player_id == *player_id)
            .ok_or_else(|| RankError::PlayerNotRostered {
                player_id: player_id.to_string(),
            })?;

        self.entries.remove(position);

        debug!("Player {} left roster of team {}", player_id, self.team_id);
        Ok(self.recalculate())
    }

    /// Replace a rostered player's rank, e.g. after a ladder refresh
    pub fn update_player_rank(
        &mut self,
        player_id: &PlayerId,
        rank: Option<Rank>,
    ) -> Result<RosterUpdate> {
        let entry = self
            .entries
            .iter_mut()
            .find(|entry| entry.player_id == *player_id)
            .ok_or_else(|| RankError::PlayerNotRostered {
                player_id: player_id.to_string(),
            })?;

        entry.rank = rank;
        Ok(self.recalculate())
    }

    /// Average rank of the ranked players on the roster
    pub fn average_rank(&self) -> Option<Rank> {
        average_rank(self.entries.iter().filter_map(|entry| entry.rank.as_ref()))
    }

    fn recalculate(&self) -> RosterUpdate {
        let average_rank = self.average_rank();

        match &average_rank {
            Some(rank) => debug!(
                "Team {} average rank is now {} over {} players",
                self.team_id,
                rank,
                self.entries.len()
            ),
            None => debug!("Team {} has no average rank", self.team_id),
        }

        RosterUpdate {
            team_id: self.team_id,
            member_count: self.entries.len(),
            average_rank,
            updated_at: current_timestamp(),
        }
    }
}
