use crate::reports;
use crate::reports::trace::TraceWriter;
use clap::{ArgAction, Args};
use orderchr::api::Problem;
use orderchr::config::Config;
use orderchr::optimizer::{IterationReport, ProgressCallback};
use orderchr::OrResult;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct OptimizeArgs {
    #[command(flatten)]
    pub config: Config,

    /// Log accepted moves (-v) or every iteration (-vv).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Write one CSV row per iteration to this file.
    #[arg(long)]
    pub trace: Option<PathBuf>,
}

struct CliLogger {
    verbosity: u8,
    trace: Option<TraceWriter>,
}

impl ProgressCallback for CliLogger {
    fn on_iteration(&mut self, r: &IterationReport) {
        if self.verbosity >= 2 || (self.verbosity == 1 && r.accepted) {
            info!(
                "It {:6} | flips {} | T {:.5} | cand {:6} | cur {:6} | best {:6} ({:+.1}%){}",
                r.iteration,
                r.nflips,
                r.temperature,
                r.candidate_score,
                r.current_score,
                r.best_score,
                r.improvement_pct,
                if r.new_best {
                    " *"
                } else if r.accepted {
                    " +"
                } else {
                    ""
                }
            );
        }
        if let Some(trace) = self.trace.as_mut() {
            trace.record(r);
        }
    }
}

pub fn run(args: &OptimizeArgs, config: &Config, problem: &Problem) -> OrResult<()> {
    let search = &config.search;
    info!(
        "🔥 Annealing {} chromosomes ({} movable): {} iterations, max {} flips, temp0 {}, {}",
        problem.initial.len(),
        problem.flippable.len(),
        search.iterations,
        search.max_flips,
        search.temp0,
        search.optimize
    );

    let annealer = problem.annealer(search.clone())?;

    let trace = match &args.trace {
        Some(path) => Some(TraceWriter::create(path)?),
        None => None,
    };
    let mut logger = CliLogger {
        verbosity: args.verbose,
        trace,
    };

    let result = annealer.run(&mut logger)?;

    if let (Some(trace), Some(path)) = (logger.trace.take(), &args.trace) {
        let rows = trace.finish()?;
        info!("📝 Wrote {} trace rows to {}", rows, path.display());
    }

    reports::print_run_summary(&result, &problem.index);
    reports::print_orders(&result, &problem.index);
    Ok(())
}
