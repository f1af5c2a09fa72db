use crate::reports;
use clap::Args;
use orderchr::api::Problem;
use orderchr::config::Config;
use orderchr::OrResult;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub config: Config,

    /// Comma-separated order to score next to the initial one.
    #[arg(short, long)]
    pub order: Option<String>,
}

pub fn run(args: &ScoreArgs, problem: &Problem) -> OrResult<()> {
    let scorer = problem.scorer();
    let mut results = vec![("initial".to_string(), scorer.score_debug(&problem.initial))];

    if let Some(text) = &args.order {
        let order = problem.parse_order(text)?;
        if order.len() != problem.initial.len() {
            info!(
                "Scoring {} chromosomes; the initial order has {}",
                order.len(),
                problem.initial.len()
            );
        }
        results.push(("given".to_string(), scorer.score_debug(&order)));
    }

    reports::print_score_report(&results);
    Ok(())
}
