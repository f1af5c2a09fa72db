use criterion::{criterion_group, criterion_main, Criterion};
use orderchr::config::SearchParams;
use orderchr::links::{Endpoint, LinkIndexBuilder, LinkRecord};
use orderchr::optimizer::{mutation, Annealer, NoProgress};
use orderchr::order::Order;
use orderchr::scorer::CrossingScorer;
use std::hint::black_box;
use std::sync::Arc;

// 24 chromosomes with a few thousand links, roughly a human segdup set
fn setup() -> (Arc<CrossingScorer>, Order) {
    let names: Vec<String> = (1..=24).map(|i| format!("hs{}", i)).collect();
    let mut rng = fastrand::Rng::with_seed(1234);
    let mut builder = LinkIndexBuilder::new();

    for _ in 0..4000 {
        let a = rng.usize(0..names.len());
        let b = rng.usize(0..names.len());
        builder.add_record(&LinkRecord::new(
            Endpoint {
                chrom: names[a].clone(),
                pos: rng.f64() * 2.5e8,
            },
            Endpoint {
                chrom: names[b].clone(),
                pos: rng.f64() * 2.5e8,
            },
        ));
    }
    for n in &names {
        builder.register(n);
    }

    let index = Arc::new(builder.build());
    let order = Order::from_names(&names, &index).unwrap();
    (Arc::new(CrossingScorer::new(index)), order)
}

fn bench_scoring(c: &mut Criterion) {
    let (scorer, order) = setup();
    let flippable: Vec<usize> = (0..order.len()).collect();
    let mut rng = fastrand::Rng::with_seed(42);

    c.bench_function("score_full_24", |b| {
        b.iter(|| black_box(scorer.score(black_box(&order))))
    });

    c.bench_function("mutate_and_score", |b| {
        b.iter(|| {
            let candidate = mutation::mutate(&order, &flippable, 3, &mut rng).unwrap();
            black_box(scorer.score(&candidate))
        })
    });
}

fn bench_anneal(c: &mut Criterion) {
    let (scorer, order) = setup();
    let flippable: Vec<usize> = (0..order.len()).collect();
    let params = SearchParams {
        iterations: 100,
        seed: Some(7),
        ..Default::default()
    };
    let annealer = Annealer::new(scorer, params, order, flippable).unwrap();

    c.bench_function("anneal_100", |b| {
        b.iter(|| black_box(annealer.run(&mut NoProgress).unwrap().best_score))
    });
}

criterion_group!(benches, bench_scoring, bench_anneal);
criterion_main!(benches);
