//! Leaderboard CLI
//!
//! Score every model's predictions and keep the rankings store current.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use leaderboard::{
    build_rankings, leaderboard_table, logging, model_detail, render_report, rules_table, Config,
    LeaderboardError, ModelCatalog, ReportFormat, Snapshot, StoredRankings, DEFAULT_CONFIG_FILE,
};
use scoring_core::standings;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "leaderboard", version, about = "AI prediction battle - score calculator")]
struct Cli {
    /// Config file (defaults apply when it does not exist)
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Use the standard data layout under this directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Recompute rankings from the snapshot and print the leaderboard
    Score {
        /// Show a single model
        #[arg(short, long)]
        model: Option<String>,

        /// Include breakdown and stats for --model
        #[arg(short, long)]
        verbose: bool,

        /// Do not write the rankings store
        #[arg(long)]
        no_save: bool,
    },
    /// Render the stored rankings
    Report {
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Markdown)]
        output: ReportFormat,
    },
    /// Print the active scoring table
    Rules,
}

fn load_config(cli: &Cli) -> Result<Config> {
    let config = Config::load_or_default(&cli.config)
        .with_context(|| format!("loading config {}", cli.config.display()))?;
    Ok(match &cli.data_dir {
        Some(root) => config.with_data_root(root),
        None => config,
    })
}

fn run_score(config: &Config, model: Option<&str>, detail: bool, save: bool) -> Result<()> {
    println!("🏆 AI Prediction Battle - Score Calculator\n");

    let snapshot = Snapshot::load(&config.data).context("loading snapshot")?;
    let rankings = build_rankings(&snapshot, &config.scoring_rules());
    let stored = StoredRankings::new(rankings);

    if save {
        stored
            .save(&config.output.rankings_file)
            .context("saving rankings")?;
    }

    match model {
        Some(model_id) => {
            let ranking = stored
                .find(model_id)
                .ok_or_else(|| LeaderboardError::UnknownModel(model_id.to_string()))?;
            print!("{}", model_detail(ranking, &snapshot.catalog, detail));
        }
        None => {
            let board = standings(stored.rankings);
            print!("{}", leaderboard_table(&board, &snapshot.catalog));
        }
    }
    Ok(())
}

fn run_report(config: &Config, format: ReportFormat) -> Result<()> {
    let stored = StoredRankings::load(&config.output.rankings_file)?;
    let catalog = ModelCatalog::load(&config.data.models_file).context("loading model catalogue")?;
    print!("{}", render_report(format, &stored, &catalog)?);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logger(cli.debug);

    let config = load_config(&cli)?;

    match &cli.command {
        Command::Score {
            model,
            verbose,
            no_save,
        } => run_score(&config, model.as_deref(), *verbose, !no_save),
        Command::Report { output } => run_report(&config, *output),
        Command::Rules => {
            print!("{}", rules_table(&config.scoring_rules()));
            Ok(())
        }
    }
}
