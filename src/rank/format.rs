//! Presentation helpers for ranks

use crate::rank::tier::Tier;
use crate::rank::value::Rank;

/// Base URL of the ranked emblem images
pub const EMBLEM_BASE_URL: &str =
    "https://raw.communitydragon.org/latest/plugins/rcp-fe-lol-shared-components/global/default";

/// Full form: `"OURO II - 50 LP"` or `"MESTRE - 120 LP"`
pub fn format_rank(rank: &Rank) -> String {
    rank.to_string()
}

/// Short form without points: `"OURO II"` or `"MESTRE"`
pub fn format_rank_short(rank: &Rank) -> String {
    match rank.division() {
        Some(division) => format!("{} {}", rank.tier(), division),
        None => rank.tier().to_string(),
    }
}

/// Presentation token for a tier
pub fn tier_color_class(tier: Tier) -> &'static str {
    tier.color_class()
}

/// Emblem image for a tier
pub fn emblem_url(tier: Tier) -> String {
    format!("{}/ranked-emblem-{}.png", EMBLEM_BASE_URL, tier.emblem_slug())
}

impl Rank {
    /// See [`format_rank_short`]
    pub fn short_label(&self) -> String {
        format_rank_short(self)
    }
}
