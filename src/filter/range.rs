//! Inclusive rank ranges

use crate::error::RankError;
use crate::rank::{Rank, Tier};
use serde::{Deserialize, Serialize};

/// Inclusive range of ranks, open on a side whose bound is absent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RankRangeInput")]
pub struct RankRange {
    min: Option<Rank>,
    max: Option<Rank>,
}

/// Unvalidated range payload
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct RankRangeInput {
    #[serde(default)]
    pub min: Option<Rank>,
    #[serde(default)]
    pub max: Option<Rank>,
}

impl TryFrom<RankRangeInput> for RankRange {
    type Error = RankError;

    fn try_from(raw: RankRangeInput) -> Result<Self, Self::Error> {
        RankRange::new(raw.min, raw.max)
    }
}

impl RankRange {
    /// Build a range, rejecting a minimum above the maximum
    pub fn new(min: Option<Rank>, max: Option<Rank>) -> Result<Self, RankError> {
        if let (Some(low), Some(high)) = (&min, &max) {
            if low > high {
                return Err(RankError::InvalidRankRange {
                    min: low.to_string(),
                    max: high.to_string(),
                });
            }
        }

        Ok(Self { min, max })
    }

    /// Range accepting every rank
    pub const fn unbounded() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    /// Range covering whole tiers, from the bottom of `min` to the top of `max`
    pub fn from_tiers(min: Option<Tier>, max: Option<Tier>) -> Result<Self, RankError> {
        Self::new(min.map(Rank::floor), max.map(Rank::ceiling))
    }

    pub fn min(&self) -> Option<&Rank> {
        self.min.as_ref()
    }

    pub fn max(&self) -> Option<&Rank> {
        self.max.as_ref()
    }

    /// Whether neither side is bounded
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Whether `rank` lies inside the range
    pub fn contains(&self, rank: &Rank) -> bool {
        self.min.as_ref().map_or(true, |min| rank >= min)
            && self.max.as_ref().map_or(true, |max| rank <= max)
    }

    /// Whether the two ranges share at least one rank
    pub fn overlaps(&self, other: &RankRange) -> bool {
        let lower = match (self.min, other.min) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };
        let upper = match (self.max, other.max) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };

        match (lower, upper) {
            (Some(low), Some(high)) => low <= high,
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rank::Division;

    fn rank(s: &str) -> Rank {
        s.parse().unwrap()
    }

    #[test]
    fn test_inclusive_bounds() {
        let range = RankRange::new(Some(rank("OURO IV 0")), Some(rank("PLATINA I 99"))).unwrap();

        assert!(range.contains(&rank("OURO IV 0")));
        assert!(range.contains(&rank("PLATINA I 99")));
        assert!(range.contains(&rank("PLATINA II 10")));
        assert!(!range.contains(&rank("PRATA I 99")));
        assert!(!range.contains(&rank("ESMERALDA IV 0")));
    }

    #[test]
    fn test_open_sides() {
        let at_least_mestre = RankRange::new(Some(rank("MESTRE 0")), None).unwrap();
        assert!(at_least_mestre.contains(&rank("DESAFIANTE 2000")));
        assert!(!at_least_mestre.contains(&rank("DIAMANTE I 99")));

        let at_most_ferro = RankRange::new(None, Some(rank("FERRO I 99"))).unwrap();
        assert!(at_most_ferro.contains(&Rank::lowest()));
        assert!(!at_most_ferro.contains(&rank("BRONZE IV 0")));

        let everything = RankRange::unbounded();
        assert!(everything.is_unbounded());
        assert!(everything.contains(&rank("DESAFIANTE 9999")));
    }

    #[test]
    fn test_rejects_inverted_range() {
        let err = RankRange::new(Some(rank("DIAMANTE IV 0")), Some(rank("OURO I 0"))).unwrap_err();
        assert!(matches!(err, RankError::InvalidRankRange { .. }));
    }

    #[test]
    fn test_from_tiers() {
        let range = RankRange::from_tiers(Some(Tier::Ouro), Some(Tier::Ouro)).unwrap();
        assert_eq!(range.min(), Some(&Rank::floor(Tier::Ouro)));
        assert!(range.contains(&Rank::divided(Tier::Ouro, Division::One, 99).unwrap()));
        assert!(!range.contains(&Rank::floor(Tier::Platina)));

        let apex = RankRange::from_tiers(Some(Tier::Mestre), Some(Tier::GraoMestre)).unwrap();
        assert!(apex.contains(&Rank::undivided(Tier::GraoMestre, 4000).unwrap()));
        assert!(!apex.contains(&Rank::floor(Tier::Desafiante)));

        assert!(RankRange::from_tiers(Some(Tier::Prata), Some(Tier::Ferro)).is_err());
    }

    #[test]
    fn test_overlaps() {
        let low = RankRange::from_tiers(Some(Tier::Ferro), Some(Tier::Prata)).unwrap();
        let mid = RankRange::from_tiers(Some(Tier::Prata), Some(Tier::Platina)).unwrap();
        let high = RankRange::from_tiers(Some(Tier::Diamante), None).unwrap();

        assert!(low.overlaps(&mid));
        assert!(!low.overlaps(&high));
        assert!(high.overlaps(&RankRange::unbounded()));
    }

    #[test]
    fn test_deserialize_validates() {
        let json = r#"{"min":{"tier":"OURO","division":"IV","lp":0},"max":null}"#;
        let range: RankRange = serde_json::from_str(json).unwrap();
        assert_eq!(range.min(), Some(&Rank::floor(Tier::Ouro)));
        assert_eq!(range.max(), None);

        let inverted = r#"{
            "min":{"tier":"MESTRE","division":null,"lp":0},
            "max":{"tier":"OURO","division":"IV","lp":0}
        }"#;
        assert!(serde_json::from_str::<RankRange>(inverted).is_err());
    }
}
