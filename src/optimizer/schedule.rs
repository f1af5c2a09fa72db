/// Iteration-dependent annealing parameters.
///
/// Flip counts follow a staircase from `max_flips` down to a single swap; the
/// temperature falls linearly from `temp0` to `temp0 / iterations`.
#[derive(Debug, Clone, Copy)]
pub struct Schedule {
    pub iterations: usize,
    pub max_flips: usize,
    pub temp0: f64,
}

impl Schedule {
    pub fn new(iterations: usize, max_flips: usize, temp0: f64) -> Self {
        Self {
            iterations,
            max_flips,
            temp0,
        }
    }

    /// Number of swaps for iteration `t` (1-based).
    #[inline(always)]
    pub fn flips(&self, t: usize) -> usize {
        let n = self.iterations as f64;
        let step = n / self.max_flips as f64;
        1 + ((n - t as f64) / step).floor() as usize
    }

    /// Temperature for iteration `t` (1-based).
    #[inline(always)]
    pub fn temperature(&self, t: usize) -> f64 {
        let n = self.iterations as f64;
        self.temp0 * (n - t as f64 + 1.0) / n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staircase_bounds() {
        let s = Schedule::new(100, 5, 1.0);
        assert_eq!(s.flips(1), 5);
        assert_eq!(s.flips(100), 1);
        for t in 1..=100 {
            let f = s.flips(t);
            assert!((1..=5).contains(&f), "t={} flips={}", t, f);
        }
    }

    #[test]
    fn test_staircase_is_non_increasing() {
        let s = Schedule::new(37, 4, 1.0);
        let flips: Vec<usize> = (1..=37).map(|t| s.flips(t)).collect();
        for w in flips.windows(2) {
            assert!(w[1] <= w[0]);
        }
    }

    #[test]
    fn test_staircase_steps() {
        // N=10, M=2: step of 5 iterations per stair
        let s = Schedule::new(10, 2, 1.0);
        let flips: Vec<usize> = (1..=10).map(|t| s.flips(t)).collect();
        assert_eq!(flips, vec![2, 2, 2, 2, 2, 1, 1, 1, 1, 1]);
    }

    #[test]
    fn test_linear_temperature() {
        let s = Schedule::new(4, 1, 2.0);
        assert!((s.temperature(1) - 2.0).abs() < 1e-12);
        assert!((s.temperature(2) - 1.5).abs() < 1e-12);
        assert!((s.temperature(4) - 0.5).abs() < 1e-12);
    }
}
