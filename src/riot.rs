//! Rank ingestion from Riot `league/v4` entries
//!
//! Account verification reads a summoner's league entries and turns the solo
//! queue entry into a [`Rank`]. The payload is untrusted, so everything goes
//! through validation.

use crate::error::RankError;
use crate::rank::{Division, Rank, RankInput, Tier};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Queue type of ranked solo/duo
pub const SOLO_QUEUE: &str = "RANKED_SOLO_5x5";

/// One league entry as returned by the Riot API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueEntry {
    pub queue_type: String,
    pub tier: String,
    pub rank: String,
    pub league_points: i64,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
}

impl LeagueEntry {
    /// Convert this entry into a validated rank.
    ///
    /// Riot reports division `I` for MESTRE and above; it is dropped there.
    pub fn to_rank(&self) -> Result<Rank, RankError> {
        let tier: Tier = self.tier.parse()?;

        let division = if tier.has_divisions() {
            Some(self.rank.parse::<Division>()?)
        } else {
            None
        };

        RankInput {
            tier,
            division,
            lp: self.league_points,
        }
        .validate()
    }
}

/// Rank of the solo queue entry, `None` when the player is unranked there
pub fn solo_queue_rank(entries: &[LeagueEntry]) -> Result<Option<Rank>, RankError> {
    let Some(entry) = entries.iter().find(|entry| entry.queue_type == SOLO_QUEUE) else {
        debug!("No solo queue entry among {} league entries", entries.len());
        return Ok(None);
    };

    match entry.to_rank() {
        Ok(rank) => Ok(Some(rank)),
        Err(e) => {
            warn!("Rejected solo queue entry {:?}: {}", entry, e);
            Err(e)
        }
    }
}
