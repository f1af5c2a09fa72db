use super::mutation;
use super::schedule::Schedule;
use super::tracker::ResultTracker;
use crate::config::SearchParams;
use crate::error::{OrResult, OrderError};
use crate::order::Order;
use crate::scorer::CrossingScorer;
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// What happened during one iteration of the search.
#[derive(Debug, Clone, Serialize)]
pub struct IterationReport {
    pub iteration: usize,
    pub nflips: usize,
    pub temperature: f64,
    pub candidate_score: u64,
    pub current_score: u64,
    pub best_score: u64,
    pub accepted: bool,
    pub improving: bool,
    pub new_best: bool,
    /// Change of the best score relative to the initial one, in percent.
    pub improvement_pct: f64,
    pub elapsed_ms: f64,
}

/// Receives a report after every iteration. The run always completes; there is
/// no way to stop it from here.
pub trait ProgressCallback {
    fn on_iteration(&mut self, report: &IterationReport);
}

impl<F: FnMut(&IterationReport)> ProgressCallback for F {
    fn on_iteration(&mut self, report: &IterationReport) {
        self(report)
    }
}

pub struct NoProgress;

impl ProgressCallback for NoProgress {
    fn on_iteration(&mut self, _report: &IterationReport) {}
}

#[derive(Debug, Clone)]
pub struct AnnealResult {
    pub initial: Order,
    pub initial_score: u64,
    pub best: Order,
    pub best_score: u64,
    pub final_score: u64,
    pub iterations: usize,
    pub accepted_moves: usize,
    pub improving_moves: usize,
    pub elapsed: Duration,
}

impl AnnealResult {
    /// `None` when the initial score is zero.
    pub fn improvement_pct(&self) -> Option<f64> {
        percent_change(self.initial_score, self.best_score)
    }
}

fn percent_change(from: u64, to: u64) -> Option<f64> {
    if from == 0 {
        None
    } else {
        Some(100.0 * (to as f64 - from as f64) / from as f64)
    }
}

pub struct Annealer {
    scorer: Arc<CrossingScorer>,
    params: SearchParams,
    schedule: Schedule,
    initial: Order,
    flippable: Vec<usize>,
}

impl Annealer {
    /// Checks the parameters against the order up front so the loop itself
    /// cannot fail on configuration.
    pub fn new(
        scorer: Arc<CrossingScorer>,
        params: SearchParams,
        initial: Order,
        flippable: Vec<usize>,
    ) -> OrResult<Self> {
        params.validate()?;

        if let Some(&bad) = flippable.iter().find(|&&p| p >= initial.len()) {
            return Err(OrderError::Config(format!(
                "Flippable position {} is outside an order of {} chromosomes",
                bad,
                initial.len()
            )));
        }

        if initial.len() >= 2 {
            if flippable.len() < 2 {
                return Err(OrderError::Config(format!(
                    "Need at least 2 movable chromosomes, found {}",
                    flippable.len()
                )));
            }
            if params.max_flips > flippable.len() {
                return Err(OrderError::Config(format!(
                    "max_flips ({}) exceeds the number of movable chromosomes ({})",
                    params.max_flips,
                    flippable.len()
                )));
            }
        }

        let schedule = Schedule::new(params.iterations, params.max_flips, params.temp0);

        Ok(Self {
            scorer,
            params,
            schedule,
            initial,
            flippable,
        })
    }

    pub fn initial(&self) -> &Order {
        &self.initial
    }

    pub fn flippable(&self) -> &[usize] {
        &self.flippable
    }

    /// Runs with an RNG seeded from the parameters (or from entropy).
    pub fn run<CB: ProgressCallback>(&self, callback: &mut CB) -> OrResult<AnnealResult> {
        let mut rng = if let Some(s) = self.params.seed {
            fastrand::Rng::with_seed(s)
        } else {
            fastrand::Rng::new()
        };
        self.run_with_rng(&mut rng, callback)
    }

    pub fn run_with_rng<CB: ProgressCallback>(
        &self,
        rng: &mut fastrand::Rng,
        callback: &mut CB,
    ) -> OrResult<AnnealResult> {
        let start = Instant::now();
        let optimize = self.params.optimize;
        let initial_score = self.scorer.score(&self.initial);
        let mut tracker = ResultTracker::new(optimize, self.initial.clone(), initial_score);

        if self.initial.len() < 2 {
            warn!(
                "⚠️  Only {} chromosome(s) to arrange. Nothing to optimize.",
                self.initial.len()
            );
            return Ok(AnnealResult {
                initial: self.initial.clone(),
                initial_score,
                best: tracker.best,
                best_score: tracker.best_score,
                final_score: tracker.current_score,
                iterations: 0,
                accepted_moves: 0,
                improving_moves: 0,
                elapsed: start.elapsed(),
            });
        }

        debug!(
            "   Annealing {} chromosomes ({} movable), initial score {}",
            self.initial.len(),
            self.flippable.len(),
            initial_score
        );

        let total = self.params.iterations;
        let mut accepted_moves = 0;
        let mut improving_moves = 0;

        for t in 1..=total {
            let iter_start = Instant::now();
            let nflips = self.schedule.flips(t);
            let temperature = self.schedule.temperature(t);

            let candidate = mutation::mutate(&tracker.current, &self.flippable, nflips, rng)?;
            let candidate_score = self.scorer.score(&candidate);

            // Deltas are relative to the starting score. A zero start has no
            // scale and counts as a fixed +1: never improving when minimizing,
            // always improving when maximizing.
            let delta = if initial_score == 0 {
                1.0
            } else {
                (candidate_score as f64 - tracker.current_score as f64) / initial_score as f64
            };

            let improving = optimize.is_improving_delta(delta);
            let accepted = improving || rng.f64() < (-delta.abs() / temperature).exp();

            let mut new_best = false;
            if accepted {
                accepted_moves += 1;
                new_best = tracker.accept(candidate, candidate_score);
            }
            if improving {
                improving_moves += 1;
            }

            callback.on_iteration(&IterationReport {
                iteration: t,
                nflips,
                temperature,
                candidate_score,
                current_score: tracker.current_score,
                best_score: tracker.best_score,
                accepted,
                improving,
                new_best,
                improvement_pct: percent_change(initial_score, tracker.best_score)
                    .unwrap_or(0.0),
                elapsed_ms: iter_start.elapsed().as_secs_f64() * 1000.0,
            });
        }

        Ok(AnnealResult {
            initial: self.initial.clone(),
            initial_score,
            best: tracker.best,
            best_score: tracker.best_score,
            final_score: tracker.current_score,
            iterations: total,
            accepted_moves,
            improving_moves,
            elapsed: start.elapsed(),
        })
    }
}
