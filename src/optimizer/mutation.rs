use crate::error::{OrResult, OrderError};
use crate::links::LinkIndex;
use crate::order::Order;
use crate::selection::Selector;
use fastrand::Rng;

/// Positions whose chromosome is not pinned by the static selector.
pub fn flippable_positions(order: &Order, statics: &Selector, index: &LinkIndex) -> Vec<usize> {
    order
        .as_slice()
        .iter()
        .enumerate()
        .filter(|&(_, &c)| !statics.matches(index.name(c)))
        .map(|(slot, _)| slot)
        .collect()
}

/// Applies `nflips` random swaps between flippable positions of `order`.
///
/// Each swap draws two distinct entries of `flippable`; swaps compose on the
/// evolving candidate.
pub fn mutate(order: &Order, flippable: &[usize], nflips: usize, rng: &mut Rng) -> OrResult<Order> {
    if nflips > 0 && flippable.len() < 2 {
        return Err(OrderError::Config(format!(
            "Cannot swap with {} flippable position(s)",
            flippable.len()
        )));
    }

    let mut candidate = order.clone();
    for _ in 0..nflips {
        let a = rng.usize(0..flippable.len());
        let mut b = rng.usize(0..flippable.len());
        while b == a {
            b = rng.usize(0..flippable.len());
        }
        candidate.swap(flippable[a], flippable[b]);
    }
    Ok(candidate)
}
