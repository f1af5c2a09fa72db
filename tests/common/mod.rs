#![allow(dead_code)]

use orderchr::links::{Endpoint, LinkIndex, LinkIndexBuilder, LinkRecord};
use orderchr::order::Order;
use orderchr::scorer::CrossingScorer;
use std::sync::Arc;

pub fn link(a: &str, pa: f64, b: &str, pb: f64) -> LinkRecord {
    LinkRecord::new(
        Endpoint {
            chrom: a.to_string(),
            pos: pa,
        },
        Endpoint {
            chrom: b.to_string(),
            pos: pb,
        },
    )
}

/// Index over `records`, with `anchors` registered even when they carry no links.
pub fn build_index(records: &[LinkRecord], anchors: &[&str]) -> Arc<LinkIndex> {
    let mut builder = LinkIndexBuilder::new();
    builder.add_records(records);
    for a in anchors {
        builder.register(a);
    }
    Arc::new(builder.build())
}

pub fn order(index: &LinkIndex, names: &[&str]) -> Order {
    Order::from_names(names, index).unwrap()
}

pub fn scorer(index: &Arc<LinkIndex>) -> CrossingScorer {
    CrossingScorer::new(index.clone())
}

/// Two crossing chords: A-C and B-D on a circle of four.
pub fn crossing_pair() -> Vec<LinkRecord> {
    vec![link("A", 10.0, "C", 10.0), link("B", 10.0, "D", 10.0)]
}

/// A denser synthetic data set: `n` chromosomes, deterministic pseudo-random links.
pub fn synthetic_links(n: usize, links: usize, seed: u64) -> (Vec<LinkRecord>, Vec<String>) {
    let names: Vec<String> = (1..=n).map(|i| format!("hs{}", i)).collect();
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut records = Vec::with_capacity(links);
    for _ in 0..links {
        let a = rng.usize(0..n);
        let mut b = rng.usize(0..n);
        while b == a {
            b = rng.usize(0..n);
        }
        records.push(link(
            &names[a],
            rng.f64() * 1.0e6,
            &names[b],
            rng.f64() * 1.0e6,
        ));
    }
    (records, names)
}

/// Index over `synthetic_links`, with every name registered.
pub fn synthetic_index(n: usize, links: usize, seed: u64) -> (Arc<LinkIndex>, Vec<String>) {
    let (records, names) = synthetic_links(n, links, seed);
    let anchors: Vec<&str> = names.iter().map(String::as_str).collect();
    (build_index(&records, &anchors), names)
}
