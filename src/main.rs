use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use orderchr::api::{self, InputPaths};
use orderchr::config::Config;
use orderchr::{OrResult, OrderError};
use std::path::PathBuf;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Reorders circos chromosomes to reduce link crossings", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Link file: two endpoint lines per link.
    #[arg(global = true, short, long)]
    links: Option<PathBuf>,

    #[arg(global = true, short, long)]
    karyotype: Option<PathBuf>,

    /// Initial order, names separated by commas or whitespace.
    #[arg(global = true, long)]
    init_order: Option<PathBuf>,

    /// JSON file with `search` and `selection` settings. Flags given on the
    /// command line take precedence.
    #[arg(global = true, long)]
    config: Option<PathBuf>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Optimize(cmd::optimize::OptimizeArgs),
    Score(cmd::score::ScoreArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cli, &matches) {
        error!("❌ {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli, matches: &ArgMatches) -> OrResult<()> {
    info!("🚀 Initializing orderchr...");

    let links = cli
        .links
        .clone()
        .ok_or_else(|| OrderError::Config("--links <FILE> is required".into()))?;

    // Flattened flags live in the subcommand's matches, not the root's.
    let sub_matches = matches.subcommand().map(|(_, m)| m).unwrap_or(matches);
    let cli_config = match &cli.command {
        Commands::Optimize(args) => &args.config,
        Commands::Score(args) => &args.config,
    };

    let config = match &cli.config {
        Some(path) => {
            info!("⚙️  Loading Config: {}", path.display());
            let mut file_config = Config::load_from_file(path)?;
            file_config.merge_from_cli(cli_config, sub_matches);
            file_config
        }
        None => cli_config.clone(),
    };
    config.validate()?;

    let paths = InputPaths {
        links,
        karyotype: cli.karyotype.clone(),
        init_order: cli.init_order.clone(),
    };
    let problem = api::load_problem(&paths, &config.selection)?;

    match &cli.command {
        Commands::Optimize(args) => cmd::optimize::run(args, &config, &problem),
        Commands::Score(args) => cmd::score::run(args, &problem),
    }
}
