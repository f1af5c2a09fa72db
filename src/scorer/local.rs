use super::types::{Side, Split, Sweep};
use crate::links::{ChromId, LinkIndex};
use std::cmp::Ordering;

/// A link end gathered for one sweep, tagged with its partner's group rank.
#[derive(Debug, Clone, Copy)]
pub struct RankedEnd {
    pub p1: f64,
    pub p2: f64,
    pub rank: usize,
}

/// Counts how many links of `chrom` toward the `side` group cross each other.
///
/// `positions` maps a chromosome to its slot in the order (`usize::MAX` when it
/// is not placed). `scratch` is reused between calls.
pub fn count_local_crossings(
    index: &LinkIndex,
    positions: &[usize],
    split: &Split,
    chrom: ChromId,
    sweep: Sweep,
    side: Side,
    scratch: &mut Vec<RankedEnd>,
) -> u64 {
    scratch.clear();

    for &partner in index.partners(chrom) {
        let p = positions[partner.index()];
        if p == usize::MAX {
            continue;
        }
        let rank = match split.locate(p) {
            Some((s, rank)) if s == side => rank,
            _ => continue,
        };
        scratch.extend(index.positions(chrom, partner).iter().map(|e| RankedEnd {
            p1: e.p1,
            p2: e.p2,
            rank,
        }));
    }

    if scratch.len() < 2 {
        return 0;
    }

    match sweep {
        Sweep::Forward => scratch.sort_by(|a, b| {
            b.p1.total_cmp(&a.p1)
                .then(a.rank.cmp(&b.rank))
                .then(b.p2.total_cmp(&a.p2))
        }),
        Sweep::Backward => scratch.sort_by(|a, b| {
            a.p1.total_cmp(&b.p1)
                .then(a.rank.cmp(&b.rank))
                .then(a.p2.total_cmp(&b.p2))
        }),
    }

    count_inversions(scratch, sweep)
}

/// Pairs `(li, lj)`, `li` first, where `lj`'s partner comes earlier in the
/// group. For the same partner, `lj`'s far end is compared with `li`'s own
/// position.
pub fn count_inversions(ends: &[RankedEnd], sweep: Sweep) -> u64 {
    let mut count = 0u64;
    for (a, li) in ends.iter().enumerate() {
        for lj in &ends[a + 1..] {
            let crosses = match lj.rank.cmp(&li.rank) {
                Ordering::Less => true,
                Ordering::Greater => false,
                Ordering::Equal => match sweep {
                    Sweep::Forward => lj.p2 < li.p1,
                    Sweep::Backward => lj.p2 > li.p1,
                },
            };
            if crosses {
                count += 1;
            }
        }
    }
    count
}
