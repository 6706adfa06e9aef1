//! The rank value type, its validation and its total ordering

use crate::error::RankError;
use crate::rank::tier::{Division, Tier};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Exclusive upper bound on LP within a divided tier
pub const DIVIDED_LP_LIMIT: u32 = 100;

/// A well-formed competitive rank.
///
/// `division` is present exactly when the tier is divided, and divided tiers
/// keep `lp` below [`DIVIDED_LP_LIMIT`]. Instances can only be obtained through
/// validating constructors, so every `Rank` upholds this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RankInput", into = "RankInput")]
pub struct Rank {
    tier: Tier,
    division: Option<Division>,
    lp: u32,
}

/// Unvalidated rank payload as received from callers.
///
/// `lp` is signed so that negative points are reported as a malformed rank
/// rather than a decoding failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RankInput {
    pub tier: Tier,
    pub division: Option<Division>,
    pub lp: i64,
}

impl Rank {
    /// Build a rank, rejecting combinations that break the rank invariant
    pub fn new(tier: Tier, division: Option<Division>, lp: u32) -> Result<Self, RankError> {
        RankInput {
            tier,
            division,
            lp: i64::from(lp),
        }
        .validate()
    }

    /// Rank inside a divided tier
    pub fn divided(tier: Tier, division: Division, lp: u32) -> Result<Self, RankError> {
        Self::new(tier, Some(division), lp)
    }

    /// Rank inside an undivided (MESTRE and above) tier
    pub fn undivided(tier: Tier, lp: u32) -> Result<Self, RankError> {
        Self::new(tier, None, lp)
    }

    /// Lowest rank of a tier
    pub const fn floor(tier: Tier) -> Self {
        let division = if tier.has_divisions() {
            Some(Division::WEAKEST)
        } else {
            None
        };
        Self {
            tier,
            division,
            lp: 0,
        }
    }

    /// Highest rank of a tier
    pub const fn ceiling(tier: Tier) -> Self {
        if tier.has_divisions() {
            Self {
                tier,
                division: Some(Division::STRONGEST),
                lp: DIVIDED_LP_LIMIT - 1,
            }
        } else {
            Self {
                tier,
                division: None,
                lp: u32::MAX,
            }
        }
    }

    /// Lowest rank of the whole ladder
    pub const fn lowest() -> Self {
        Self::floor(Tier::LOWEST)
    }

    pub const fn tier(&self) -> Tier {
        self.tier
    }

    pub const fn division(&self) -> Option<Division> {
        self.division
    }

    /// League points
    pub const fn lp(&self) -> u32 {
        self.lp
    }

    /// Unvalidated view of this rank
    pub const fn to_input(&self) -> RankInput {
        RankInput {
            tier: self.tier,
            division: self.division,
            lp: self.lp as i64,
        }
    }

    /// Construct without validation; callers must uphold the invariant
    pub(crate) const fn from_parts_unchecked(tier: Tier, division: Option<Division>, lp: u32) -> Self {
        Self { tier, division, lp }
    }
}

impl RankInput {
    /// Whether this payload is a well-formed rank
    pub fn is_valid(&self) -> bool {
        self.check().is_ok()
    }

    /// Turn the payload into a [`Rank`], reporting why it is malformed otherwise
    pub fn validate(self) -> Result<Rank, RankError> {
        self.check()?;
        Ok(Rank {
            tier: self.tier,
            division: self.division,
            lp: self.lp as u32,
        })
    }

    fn check(&self) -> Result<(), RankError> {
        let reason = match (self.tier.has_divisions(), self.division) {
            (true, None) => Some("divided tier requires a division".to_string()),
            (false, Some(_)) => Some("undivided tier must not carry a division".to_string()),
            _ if self.lp < 0 => Some(format!("points must be non-negative, got {}", self.lp)),
            (true, Some(_)) if self.lp >= i64::from(DIVIDED_LP_LIMIT) => Some(format!(
                "points must be below {} in a divided tier, got {}",
                DIVIDED_LP_LIMIT, self.lp
            )),
            (false, None) if self.lp > i64::from(u32::MAX) => {
                Some(format!("points out of range, got {}", self.lp))
            }
            _ => None,
        };

        match reason {
            Some(reason) => Err(RankError::malformed(self.describe(), reason)),
            None => Ok(()),
        }
    }

    fn describe(&self) -> String {
        match self.division {
            Some(division) => format!("{} {} - {} LP", self.tier, division, self.lp),
            None => format!("{} - {} LP", self.tier, self.lp),
        }
    }
}

impl TryFrom<RankInput> for Rank {
    type Error = RankError;

    fn try_from(input: RankInput) -> Result<Self, Self::Error> {
        input.validate()
    }
}

impl From<Rank> for RankInput {
    fn from(rank: Rank) -> Self {
        rank.to_input()
    }
}

/// Position of a tier in the ascending sequence
pub fn tier_rank(tier: Tier) -> u8 {
    tier.rank()
}

/// Position of a division from weakest (IV = 0) to strongest (I = 3)
pub fn division_rank(division: Division) -> u8 {
    division.rank()
}

/// Whether a tier is split into divisions
pub fn has_divisions(tier: Tier) -> bool {
    tier.has_divisions()
}

/// Check a rank payload against the rank invariant
pub fn is_valid_rank(rank: &RankInput) -> bool {
    rank.is_valid()
}

/// Three-way comparison of two ranks: tier, then division, then points
pub fn compare_ranks(a: &Rank, b: &Rank) -> Ordering {
    a.tier
        .rank()
        .cmp(&b.tier.rank())
        .then_with(|| match (a.division, b.division) {
            (Some(left), Some(right)) => left.rank().cmp(&right.rank()),
            _ => Ordering::Equal,
        })
        .then_with(|| a.lp.cmp(&b.lp))
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_ranks(self, other)
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.division {
            Some(division) => write!(f, "{} {} - {} LP", self.tier, division, self.lp),
            None => write!(f, "{} - {} LP", self.tier, self.lp),
        }
    }
}

impl FromStr for RankInput {
    type Err = RankError;

    /// Parse `"OURO II 50"`, `"OURO II - 50 LP"`, `"MESTRE 120"` or `"GRAO MESTRE - 120 PDL"`.
    ///
    /// The result is not validated, so `"DESAFIANTE I 50"` parses.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s
            .split_whitespace()
            .filter(|token| *token != "-")
            .filter(|token| !token.eq_ignore_ascii_case("LP") && !token.eq_ignore_ascii_case("PDL"))
            .collect();

        let malformed = |reason: &str| RankError::malformed(s.trim(), reason);

        let (tier, rest) = match tokens.as_slice() {
            [] => return Err(malformed("empty rank")),
            [first, rest @ ..] => match first.parse::<Tier>() {
                Ok(tier) => (tier, rest),
                // two-word tier names such as "GRAO MESTRE"
                Err(err) => match rest.split_first() {
                    Some((second, tail)) => match format!("{} {}", first, second).parse::<Tier>() {
                        Ok(tier) => (tier, tail),
                        Err(_) => return Err(err),
                    },
                    None => return Err(err),
                },
            },
        };

        let (division, lp_token) = match rest {
            [] => (None, None),
            [single] => match single.parse::<i64>() {
                Ok(_) => (None, Some(*single)),
                Err(_) => (Some(single.parse::<Division>()?), None),
            },
            [division, lp] => (Some(division.parse::<Division>()?), Some(*lp)),
            _ => return Err(malformed("too many parts")),
        };

        let lp = match lp_token {
            Some(token) => token
                .parse::<i64>()
                .map_err(|_| malformed("points must be an integer"))?,
            None => 0,
        };

        Ok(RankInput { tier, division, lp })
    }
}

impl FromStr for Rank {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<RankInput>()?.validate()
    }
}
