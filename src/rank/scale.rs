//! Linear integer scale for rank arithmetic
//!
//! Each divided tier occupies `TIER_WIDTH` consecutive values. Inside it the
//! divisions take `DIVISION_WIDTH` values each, weakest first, so division I
//! of one tier sits right below division IV of the next. MESTRE and
//! GRÃO-MESTRE have unbounded points, so each gets `APEX_TIER_WIDTH` values,
//! enough for every `u32` point total. DESAFIANTE starts after them and is
//! open-ended. The scale exists for averaging; `Rank` stays the canonical
//! representation.

use crate::rank::tier::{Division, Tier};
use crate::rank::value::Rank;

/// Scale values per divided tier
pub const TIER_WIDTH: i64 = 400;

/// Scale values per division
pub const DIVISION_WIDTH: i64 = 100;

/// Scale values per undivided tier below the top, one per possible point total
pub const APEX_TIER_WIDTH: i64 = u32::MAX as i64 + 1;

/// First scale value of the undivided tiers
const APEX_BASE: i64 = Tier::Mestre.rank() as i64 * TIER_WIDTH;

/// First scale value of the highest tier; everything above it belongs there too
const TOP_TIER_BASE: i64 = tier_base(Tier::HIGHEST);

/// First scale value of `tier`
const fn tier_base(tier: Tier) -> i64 {
    if tier.has_divisions() {
        tier.rank() as i64 * TIER_WIDTH
    } else {
        APEX_BASE + (tier.rank() - Tier::Mestre.rank()) as i64 * APEX_TIER_WIDTH
    }
}

/// Map a rank onto the linear scale
pub fn rank_to_scalar(rank: &Rank) -> i64 {
    let base = tier_base(rank.tier());
    let lp = i64::from(rank.lp());

    match rank.division() {
        Some(division) => base + i64::from(division.rank()) * DIVISION_WIDTH + lp,
        None => base + lp,
    }
}

/// Map a scale value back to a rank, clamping values outside the scale
pub fn scalar_to_rank(value: i64) -> Rank {
    if value < 0 {
        return Rank::lowest();
    }

    if value >= TOP_TIER_BASE {
        let lp = u32::try_from(value - TOP_TIER_BASE).unwrap_or(u32::MAX);
        return Rank::from_parts_unchecked(Tier::HIGHEST, None, lp);
    }

    if value >= APEX_BASE {
        let offset = value - APEX_BASE;
        // offset < 2 * APEX_TIER_WIDTH keeps both casts in range
        let index = Tier::Mestre.rank() + (offset / APEX_TIER_WIDTH) as u8;
        let tier = Tier::from_rank(index).unwrap_or(Tier::GraoMestre);
        return Rank::from_parts_unchecked(tier, None, (offset % APEX_TIER_WIDTH) as u32);
    }

    // value < APEX_BASE keeps the index inside the divided tiers
    let tier = Tier::from_rank((value / TIER_WIDTH) as u8).unwrap_or(Tier::Diamante);
    let remainder = value % TIER_WIDTH;
    let index = (remainder / DIVISION_WIDTH).min(Division::STRONGEST.rank() as i64);
    let division = Division::from_rank(index as u8).unwrap_or(Division::STRONGEST);
    let lp = remainder - index * DIVISION_WIDTH;
    Rank::from_parts_unchecked(tier, Some(division), lp as u32)
}

impl Rank {
    /// Position of this rank on the linear scale
    pub fn to_scalar(&self) -> i64 {
        rank_to_scalar(self)
    }

    /// Rank at a position of the linear scale
    pub fn from_scalar(value: i64) -> Self {
        scalar_to_rank(value)
    }
}
