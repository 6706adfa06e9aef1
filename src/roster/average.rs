//! Average rank over a set of ranks

use crate::rank::{rank_to_scalar, scalar_to_rank, Rank};
use crate::utils::rounded_mean;

/// Average of the given ranks on the linear scale, rounded half up.
///
/// Returns `None` when there is nothing to average.
pub fn average_rank<'a>(ranks: impl IntoIterator<Item = &'a Rank>) -> Option<Rank> {
    rounded_mean(ranks.into_iter().map(rank_to_scalar)).map(scalar_to_rank)
}
