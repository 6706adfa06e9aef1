//! Competitive rank domain model
//!
//! This module owns the rank value type, its ordering, validation, the linear
//! scale used for averaging and the presentation helpers. Everything here is
//! pure and synchronous.

pub mod format;
pub mod scale;
pub mod tier;
pub mod value;

// Re-export commonly used types
pub use format::{emblem_url, format_rank, format_rank_short, tier_color_class};
pub use scale::{rank_to_scalar, scalar_to_rank, APEX_TIER_WIDTH, DIVISION_WIDTH, TIER_WIDTH};
pub use tier::{Division, Tier};
pub use value::{
    compare_ranks, division_rank, has_divisions, is_valid_rank, tier_rank, Rank, RankInput,
    DIVIDED_LP_LIMIT,
};
