//! Test fixtures shared by the integration tests

#![allow(dead_code)]

use proptest::prelude::*;
use scrim_rank::rank::{Division, Rank, RankInput, Tier, DIVIDED_LP_LIMIT};
use scrim_rank::types::{AvailabilityStatus, Lane, Player, ScrimSlot, Team};
use scrim_rank::utils::{current_timestamp, generate_id};

/// Parse a rank written as `"OURO II 50"` or `"MESTRE 120"`
pub fn rank(text: &str) -> Rank {
    text.parse()
        .unwrap_or_else(|e| panic!("bad fixture rank {}: {}", text, e))
}

/// Player with the given current rank
pub fn create_test_player(name: &str, current_rank: Option<&str>) -> Player {
    let current_rank = current_rank.map(rank);
    Player {
        id: generate_id(),
        game_name: name.to_string(),
        tag_line: "BR1".to_string(),
        primary_lane: Lane::Mid,
        secondary_lane: Some(Lane::Support),
        availability_status: AvailabilityStatus::LookingForTeam,
        current_rank,
        peak_rank: current_rank,
    }
}

/// Team with the given average rank
pub fn create_test_team(name: &str, average_rank: Option<Rank>) -> Team {
    Team {
        id: generate_id(),
        name: name.to_string(),
        tag: name.chars().take(3).collect::<String>().to_uppercase(),
        average_rank,
        updated_at: current_timestamp(),
    }
}

/// Scrim slot hosted by `host` accepting challengers in `[min, max]`
pub fn create_test_slot(host: &Team, min: &str, max: &str) -> ScrimSlot {
    ScrimSlot {
        id: generate_id(),
        host_team_id: host.id,
        host_rank: host.average_rank,
        starts_at: current_timestamp(),
        min_rank_required: rank(min),
        max_rank_required: rank(max),
    }
}

pub fn any_tier() -> impl Strategy<Value = Tier> {
    prop::sample::select(Tier::ALL.to_vec())
}

pub fn any_division() -> impl Strategy<Value = Division> {
    prop::sample::select(Division::ALL.to_vec())
}

pub fn divided_tier() -> impl Strategy<Value = Tier> {
    prop::sample::select(
        Tier::ALL
            .into_iter()
            .filter(|tier| tier.has_divisions())
            .collect::<Vec<_>>(),
    )
}

pub fn undivided_tier() -> impl Strategy<Value = Tier> {
    prop::sample::select(vec![Tier::Mestre, Tier::GraoMestre, Tier::Desafiante])
}

/// Any well-formed rank, including apex ranks with very high LP
pub fn any_rank() -> impl Strategy<Value = Rank> {
    prop_oneof![
        divided_rank(),
        (undivided_tier(), 0u32..2_000).prop_map(|(tier, lp)| Rank::undivided(tier, lp).unwrap()),
        (undivided_tier(), any::<u32>()).prop_map(|(tier, lp)| Rank::undivided(tier, lp).unwrap()),
    ]
}

/// Any well-formed rank of a divided tier
pub fn divided_rank() -> impl Strategy<Value = Rank> {
    (divided_tier(), any_division(), 0..DIVIDED_LP_LIMIT)
        .prop_map(|(tier, division, lp)| Rank::divided(tier, division, lp).unwrap())
}

/// Arbitrary payload, well-formed or not
pub fn any_rank_input() -> impl Strategy<Value = RankInput> {
    (
        any_tier(),
        prop::option::of(any_division()),
        -200i64..5_000,
    )
        .prop_map(|(tier, division, lp)| RankInput { tier, division, lp })
}
