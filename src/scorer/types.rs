use serde::Serialize;

/// Crossing count of one order, split by term.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreDetails {
    pub total: u64,
    /// Links crossing the chord of a linked (i, j) pair.
    pub between: u64,
    /// Links of a single chromosome crossing each other.
    pub local: u64,
    /// Number of (i, j) position pairs that carried links.
    pub pairs_scored: usize,
}

/// Which side of the (i, j) chord a position falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Strictly between `i` and `j`.
    Inner,
    /// After `j`, wrapping round to before `i`.
    Outer,
}

/// Direction in which a chromosome's own link ends are swept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sweep {
    Forward,
    Backward,
}

/// The two position groups induced by a chord between slots `i` and `j`.
#[derive(Debug, Clone, Copy)]
pub struct Split {
    pub i: usize,
    pub j: usize,
    pub n: usize,
}

impl Split {
    /// Side and group-local rank of position `p`, or `None` for the chord ends.
    ///
    /// Ranks follow each group's index sequence: `i+1..j-1` for the inner
    /// group, `j+1..n-1` then `0..i-1` for the outer one.
    #[inline(always)]
    pub fn locate(&self, p: usize) -> Option<(Side, usize)> {
        if p > self.i && p < self.j {
            Some((Side::Inner, p - self.i - 1))
        } else if p > self.j {
            Some((Side::Outer, p - self.j - 1))
        } else if p < self.i {
            Some((Side::Outer, self.n - 1 - self.j + p))
        } else {
            None
        }
    }
}
