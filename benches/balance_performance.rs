//! Performance benchmarks for scoring and balancing

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use team_balancer::balance::{Combinations, ExhaustiveBalancer, TeamBalancer, TieBreak};
use team_balancer::rank::{rank_options, score};
use team_balancer::{Player, Rank};

fn bench_roster() -> Vec<Player> {
    [
        "CHALLENGER",
        "GOLD II",
        "SILVER IV",
        "EMERALD I",
        "PLATINUM III",
        "UNRANKED",
        "DIAMOND II",
        "MASTER",
        "BRONZE I",
        "IRON III",
    ]
    .iter()
    .enumerate()
    .map(|(i, label)| {
        let rank: Rank = label.parse().unwrap();
        Player::new(format!("player{}#JP1", i), rank)
    })
    .collect()
}

fn bench_scoring(c: &mut Criterion) {
    let options = rank_options();

    c.bench_function("score_all_rank_options", |b| {
        b.iter(|| {
            options
                .iter()
                .map(|rank| score(black_box(rank)))
                .sum::<u32>()
        })
    });

    c.bench_function("parse_rank_label", |b| {
        b.iter(|| black_box("PLATINUM III").parse::<Rank>().unwrap())
    });
}

fn bench_balancing(c: &mut Criterion) {
    let roster = bench_roster();

    c.bench_function("enumerate_10_choose_5", |b| {
        b.iter(|| Combinations::new(black_box(10), black_box(5)).count())
    });

    let first_found = ExhaustiveBalancer::new(TieBreak::FirstFound);
    c.bench_function("balance_first_found", |b| {
        b.iter(|| first_found.balance(black_box(&roster)).unwrap())
    });

    let last_found = ExhaustiveBalancer::new(TieBreak::LastFound);
    c.bench_function("balance_last_found", |b| {
        b.iter(|| last_found.balance(black_box(&roster)).unwrap())
    });
}

criterion_group!(benches, bench_scoring, bench_balancing);
criterion_main!(benches);
