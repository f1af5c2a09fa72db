use super::local::{count_local_crossings, RankedEnd};
use super::types::{ScoreDetails, Side, Split, Sweep};
use crate::links::{ChromId, LinkIndex};

/// Slot of every chromosome in `order`, `usize::MAX` for unplaced ones.
pub fn build_position_map(index: &LinkIndex, order: &[ChromId]) -> Vec<usize> {
    let mut positions = vec![usize::MAX; index.len()];
    for (slot, &c) in order.iter().enumerate() {
        positions[c.index()] = slot;
    }
    positions
}

/// Full recomputation of the crossing score for `order`.
pub fn score_full(index: &LinkIndex, order: &[ChromId]) -> ScoreDetails {
    let n = order.len();
    let mut details = ScoreDetails::default();
    if n < 3 {
        return details;
    }

    let positions = build_position_map(index, order);
    let mut scratch: Vec<RankedEnd> = Vec::new();

    for i in 0..n {
        for j in (i + 2)..n {
            let ci = order[i];
            let cj = order[j];
            let nlinks = index.pair_count(ci, cj) as u64;
            if nlinks == 0 {
                continue;
            }

            let split = Split { i, j, n };
            details.pairs_scored += 1;

            // 1. Links spanning the two groups cross the (ci, cj) chord
            let xlinks = count_split_links(index, order, &positions, &split);
            details.between += nlinks * xlinks;

            // 2. Links of the chord ends crossing each other on one side
            let sweeps = [
                (ci, Sweep::Forward, Side::Outer),
                (ci, Sweep::Backward, Side::Inner),
                (cj, Sweep::Forward, Side::Inner),
                (cj, Sweep::Backward, Side::Outer),
            ];
            for (chrom, sweep, side) in sweeps {
                details.local += count_local_crossings(
                    index,
                    &positions,
                    &split,
                    chrom,
                    sweep,
                    side,
                    &mut scratch,
                );
            }
        }
    }

    details.total = details.between + details.local;
    details
}

/// Sum of pair counts between inner-group and outer-group chromosomes.
fn count_split_links(
    index: &LinkIndex,
    order: &[ChromId],
    positions: &[usize],
    split: &Split,
) -> u64 {
    let mut xlinks = 0u64;
    for &a in &order[split.i + 1..split.j] {
        for &b in index.partners(a) {
            let p = positions[b.index()];
            if p == usize::MAX {
                continue;
            }
            if let Some((Side::Outer, _)) = split.locate(p) {
                xlinks += index.pair_count(a, b) as u64;
            }
        }
    }
    xlinks
}
