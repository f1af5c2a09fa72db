use crate::config::Optimize;
use crate::order::Order;

/// Current and best-so-far solutions of a run.
#[derive(Debug, Clone)]
pub struct ResultTracker {
    pub optimize: Optimize,
    pub current: Order,
    pub current_score: u64,
    pub best: Order,
    pub best_score: u64,
}

impl ResultTracker {
    pub fn new(optimize: Optimize, initial: Order, score: u64) -> Self {
        Self {
            optimize,
            best: initial.clone(),
            best_score: score,
            current: initial,
            current_score: score,
        }
    }

    /// Makes `candidate` the current solution. Returns true if it also became
    /// the new best.
    pub fn accept(&mut self, candidate: Order, score: u64) -> bool {
        let is_best = self.optimize.is_better(score, self.best_score);
        if is_best {
            self.best = candidate.clone();
            self.best_score = score;
        }
        self.current = candidate;
        self.current_score = score;
        is_best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::links::ChromId;

    fn order(ids: &[u32]) -> Order {
        Order::new(ids.iter().copied().map(ChromId).collect())
    }

    #[test]
    fn test_minimize_keeps_lowest() {
        let mut t = ResultTracker::new(Optimize::Minimize, order(&[0, 1, 2]), 10);
        assert!(t.accept(order(&[1, 0, 2]), 4));
        assert!(!t.accept(order(&[2, 0, 1]), 8));
        assert_eq!(t.current_score, 8);
        assert_eq!(t.best_score, 4);
        assert_eq!(t.best, order(&[1, 0, 2]));
    }

    #[test]
    fn test_maximize_keeps_highest() {
        let mut t = ResultTracker::new(Optimize::Maximize, order(&[0, 1]), 3);
        assert!(!t.accept(order(&[1, 0]), 2));
        assert!(t.accept(order(&[0, 1]), 9));
        assert_eq!(t.best_score, 9);
    }

    #[test]
    fn test_equal_score_does_not_replace_best() {
        let mut t = ResultTracker::new(Optimize::Minimize, order(&[0, 1, 2]), 5);
        assert!(!t.accept(order(&[2, 1, 0]), 5));
        assert_eq!(t.best, order(&[0, 1, 2]));
    }
}
