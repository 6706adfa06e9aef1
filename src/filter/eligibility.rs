//! Filtering ranked entities against a rank range

use crate::error::RankError;
use crate::filter::range::RankRange;
use crate::rank::Rank;
use crate::types::{Player, ScrimSlot, Team};

/// Anything that may carry a rank
pub trait Ranked {
    /// Rank used for filtering, `None` when unranked
    fn rank(&self) -> Option<&Rank>;

    /// Whether this entity passes the range.
    ///
    /// Unranked entities only pass a fully open range.
    fn within(&self, range: &RankRange) -> bool {
        match self.rank() {
            Some(rank) => range.contains(rank),
            None => range.is_unbounded(),
        }
    }
}

impl Ranked for Rank {
    fn rank(&self) -> Option<&Rank> {
        Some(self)
    }
}

impl Ranked for Player {
    fn rank(&self) -> Option<&Rank> {
        self.current_rank.as_ref()
    }
}

impl Ranked for Team {
    fn rank(&self) -> Option<&Rank> {
        self.average_rank.as_ref()
    }
}

impl Ranked for ScrimSlot {
    fn rank(&self) -> Option<&Rank> {
        self.host_rank.as_ref()
    }
}

impl<T: Ranked> Ranked for &T {
    fn rank(&self) -> Option<&Rank> {
        (**self).rank()
    }
}

/// Keep the items whose rank lies inside `range`
pub fn filter_by_rank<T: Ranked>(items: impl IntoIterator<Item = T>, range: &RankRange) -> Vec<T> {
    items.into_iter().filter(|item| item.within(range)).collect()
}

/// Split items into those inside `range` and the rest
pub fn partition_by_rank<T: Ranked>(
    items: impl IntoIterator<Item = T>,
    range: &RankRange,
) -> (Vec<T>, Vec<T>) {
    items.into_iter().partition(|item| item.within(range))
}

impl ScrimSlot {
    /// Rank window a challenger must fall into
    pub fn required_range(&self) -> Result<RankRange, RankError> {
        RankRange::new(Some(self.min_rank_required), Some(self.max_rank_required))
    }

    /// Whether a challenger with `rank` may book this slot.
    ///
    /// An inverted window admits nobody.
    pub fn accepts(&self, rank: &Rank) -> bool {
        self.min_rank_required <= *rank && *rank <= self.max_rank_required
    }

    /// Whether a team may book this slot; unranked teams may not
    pub fn accepts_team(&self, team: &Team) -> bool {
        team.average_rank
            .as_ref()
            .is_some_and(|rank| self.accepts(rank))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rank::Tier;
    use crate::types::{AvailabilityStatus, Lane};
    use crate::utils::{current_timestamp, generate_id};

    fn player(rank: Option<&str>) -> Player {
        Player {
            id: generate_id(),
            game_name: "tester".to_string(),
            tag_line: "BR1".to_string(),
            primary_lane: Lane::Top,
            secondary_lane: Some(Lane::Jungle),
            availability_status: AvailabilityStatus::LookingForTeam,
            current_rank: rank.map(|r| r.parse().unwrap()),
            peak_rank: None,
        }
    }

    fn slot(min: &str, max: &str) -> ScrimSlot {
        ScrimSlot {
            id: generate_id(),
            host_team_id: generate_id(),
            host_rank: Some("PLATINA II 0".parse().unwrap()),
            starts_at: current_timestamp(),
            min_rank_required: min.parse().unwrap(),
            max_rank_required: max.parse().unwrap(),
        }
    }

    #[test]
    fn test_filter_players() {
        let players = vec![
            player(Some("FERRO II 10")),
            player(Some("OURO I 0")),
            player(Some("MESTRE 300")),
            player(None),
        ];

        let range = RankRange::from_tiers(Some(Tier::Bronze), Some(Tier::Diamante)).unwrap();
        let kept = filter_by_rank(&players, &range);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, players[1].id);

        let (inside, outside) = partition_by_rank(players.clone(), &RankRange::unbounded());
        assert_eq!(inside.len(), 4);
        assert!(outside.is_empty());
    }

    #[test]
    fn test_unranked_only_pass_open_range() {
        let unranked = player(None);
        assert!(unranked.within(&RankRange::unbounded()));

        let bounded = RankRange::from_tiers(None, Some(Tier::Desafiante)).unwrap();
        assert!(!unranked.within(&bounded));
    }

    #[test]
    fn test_slot_accepts() {
        let s = slot("OURO IV 0", "PLATINA I 99");
        assert!(s.accepts(&"OURO IV 0".parse().unwrap()));
        assert!(s.accepts(&"PLATINA I 99".parse().unwrap()));
        assert!(!s.accepts(&"ESMERALDA IV 0".parse().unwrap()));
        assert!(s
            .required_range()
            .unwrap()
            .contains(&"PLATINA III 40".parse().unwrap()));
    }

    #[test]
    fn test_slot_accepts_team() {
        let s = slot("DIAMANTE IV 0", "DESAFIANTE 5000");
        let mut team = Team {
            id: generate_id(),
            name: "Scrim Kings".to_string(),
            tag: "SK".to_string(),
            average_rank: Some("MESTRE 20".parse().unwrap()),
            updated_at: current_timestamp(),
        };
        assert!(s.accepts_team(&team));

        team.average_rank = None;
        assert!(!s.accepts_team(&team));
    }

    #[test]
    fn test_inverted_slot_admits_nobody() {
        let s = slot("MESTRE 0", "OURO IV 0");
        assert!(matches!(
            s.required_range(),
            Err(RankError::InvalidRankRange { .. })
        ));
        assert!(!s.accepts(&"PLATINA IV 0".parse().unwrap()));
    }

    #[test]
    fn test_filter_slots_by_host_rank() {
        let slots = vec![slot("FERRO IV 0", "DESAFIANTE 100")];
        let range = RankRange::from_tiers(Some(Tier::Platina), Some(Tier::Platina)).unwrap();
        assert_eq!(filter_by_rank(&slots, &range).len(), 1);

        let range = RankRange::from_tiers(Some(Tier::Mestre), None).unwrap();
        assert!(filter_by_rank(&slots, &range).is_empty());
    }
}
