//! Performance benchmarks for rank comparison, scale conversion and averaging

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scrim_rank::filter::{filter_by_rank, RankRange};
use scrim_rank::rank::{compare_ranks, rank_to_scalar, scalar_to_rank, Division, Rank, Tier};
use scrim_rank::roster::average_rank;

fn ladder() -> Vec<Rank> {
    let mut ranks = Vec::new();
    for tier in Tier::ALL {
        if tier.has_divisions() {
            for division in Division::ALL {
                for lp in (0..100).step_by(7) {
                    ranks.push(Rank::divided(tier, division, lp).unwrap());
                }
            }
        } else {
            for lp in (0..1_000).step_by(37) {
                ranks.push(Rank::undivided(tier, lp).unwrap());
            }
        }
    }
    ranks
}

fn bench_comparisons(c: &mut Criterion) {
    let ranks = ladder();

    c.bench_function("compare_ranks_pairwise", |b| {
        b.iter(|| {
            let mut greater = 0usize;
            for pair in ranks.windows(2) {
                if compare_ranks(black_box(&pair[0]), black_box(&pair[1])).is_gt() {
                    greater += 1;
                }
            }
            greater
        })
    });

    c.bench_function("sort_ladder", |b| {
        b.iter(|| {
            let mut shuffled: Vec<Rank> = ranks.iter().rev().copied().collect();
            shuffled.sort();
            shuffled
        })
    });
}

fn bench_scale(c: &mut Criterion) {
    let ranks = ladder();

    c.bench_function("scale_round_trip", |b| {
        b.iter(|| {
            for rank in &ranks {
                black_box(scalar_to_rank(rank_to_scalar(black_box(rank))));
            }
        })
    });
}

fn bench_aggregation(c: &mut Criterion) {
    let ranks = ladder();
    let team: Vec<Rank> = ranks.iter().step_by(ranks.len() / 5).copied().collect();

    c.bench_function("average_rank_team", |b| {
        b.iter(|| average_rank(black_box(&team)))
    });

    c.bench_function("average_rank_ladder", |b| {
        b.iter(|| average_rank(black_box(&ranks)))
    });

    let range = RankRange::from_tiers(Some(Tier::Ouro), Some(Tier::Diamante)).unwrap();
    c.bench_function("filter_ladder", |b| {
        b.iter(|| filter_by_rank(black_box(&ranks), &range).len())
    });
}

criterion_group!(benches, bench_comparisons, bench_scale, bench_aggregation);
criterion_main!(benches);
