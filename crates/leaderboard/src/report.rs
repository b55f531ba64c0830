//! Text leaderboards and report exports

use clap::ValueEnum;
use scoring_core::{standings, ModelRanking, Phase, ScoringRules, Standing};
use serde::Serialize;
use std::fmt::Write as _;

use crate::error::Result;
use crate::snapshot::ModelCatalog;
use crate::store::StoredRankings;

/// Export format for `report`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    #[value(name = "md")]
    Markdown,
    Csv,
    Json,
}

/// Console leaderboard with medals, points and accuracy
pub fn leaderboard_table(board: &[Standing], catalog: &ModelCatalog) -> String {
    let mut out = String::new();
    out.push_str("Current Leaderboard:\n\n");
    writeln!(out, "Rank  {:<23}  {:>6}  {:>8}", "Model", "Points", "Accuracy").ok();
    writeln!(
        out,
        "{}  {}  {}  {}",
        "─".repeat(4),
        "─".repeat(23),
        "─".repeat(6),
        "─".repeat(8)
    )
    .ok();

    for standing in board {
        let ranking = &standing.ranking;
        let medal = standing.medal.map_or("  ", |m| m.emoji());
        writeln!(
            out,
            "{} {:>2}  {:<23}  {:>6}  {:>8}",
            medal,
            standing.position,
            catalog.display_name(&ranking.model_id),
            ranking.total_points,
            format!("{}%", ranking.stats.accuracy),
        )
        .ok();
    }
    out
}

/// One model's totals; `verbose` adds the breakdown and stats
pub fn model_detail(ranking: &ModelRanking, catalog: &ModelCatalog, verbose: bool) -> String {
    let mut out = String::new();
    match catalog.get(&ranking.model_id) {
        Some(info) => {
            writeln!(out, "Model: {} ({})\n", info.name, info.provider).ok();
        }
        None => {
            writeln!(out, "Model: {}\n", ranking.model_id).ok();
        }
    }
    writeln!(out, "Total Points: {}", ranking.total_points).ok();
    writeln!(out, "Accuracy: {}%", ranking.stats.accuracy).ok();

    if verbose {
        let b = &ranking.breakdown;
        out.push_str("\nBreakdown:\n");
        writeln!(out, "  Group Stage: {}", b.group_stage).ok();
        writeln!(out, "  Round of 32: {}", b.round_of_32).ok();
        writeln!(out, "  Round of 16: {}", b.round_of_16).ok();
        writeln!(out, "  Quarter Finals: {}", b.quarter_finals).ok();
        writeln!(out, "  Semi Finals: {}", b.semi_finals).ok();
        writeln!(out, "  Final: {}", b.final_).ok();
        writeln!(out, "  Bonuses: {}", b.bonuses).ok();

        let s = &ranking.stats;
        out.push_str("\nStats:\n");
        writeln!(out, "  Total Predictions: {}", s.total_predictions).ok();
        writeln!(out, "  Exact Scores: {}", s.exact_scores).ok();
        writeln!(out, "  Correct Winners: {}", s.correct_winners).ok();
        writeln!(out, "  Goal Difference: {}", s.correct_goal_difference).ok();
    }
    out
}

/// Active points table and bonus schedule
pub fn rules_table(rules: &ScoringRules) -> String {
    let mut out = String::new();
    writeln!(out, "{:<16} {:>6} {:>7} {:>9}", "Phase", "Exact", "Winner", "GoalDiff").ok();
    out.push_str(&"-".repeat(41));
    out.push('\n');
    for phase in Phase::ALL {
        let p = rules.scoring_for(phase);
        writeln!(
            out,
            "{:<16} {:>6} {:>7} {:>9}",
            phase.as_str(),
            p.exact_score,
            p.correct_winner,
            p.goal_difference
        )
        .ok();
    }

    let bonuses = rules.bonuses();
    out.push_str("\nBonuses:\n");
    writeln!(out, "  Champion: {}", bonuses.champion).ok();
    writeln!(out, "  Finalist: {}", bonuses.finalist).ok();
    writeln!(out, "  Group winner (per group): {}", bonuses.group_winner).ok();
    out
}

/// Flat report row, one per model
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportRow<'a> {
    position: usize,
    model_id: &'a str,
    model: &'a str,
    total_points: u32,
    accuracy: u32,
    total_predictions: u32,
    exact_scores: u32,
    correct_winners: u32,
    correct_goal_difference: u32,
    group_stage: u32,
    round_of_32: u32,
    round_of_16: u32,
    quarter_finals: u32,
    semi_finals: u32,
    #[serde(rename = "final")]
    final_: u32,
    bonuses: u32,
}

impl<'a> ReportRow<'a> {
    fn new(standing: &'a Standing, catalog: &'a ModelCatalog) -> Self {
        let r = &standing.ranking;
        Self {
            position: standing.position,
            model_id: &r.model_id,
            model: catalog.display_name(&r.model_id),
            total_points: r.total_points,
            accuracy: r.stats.accuracy,
            total_predictions: r.stats.total_predictions,
            exact_scores: r.stats.exact_scores,
            correct_winners: r.stats.correct_winners,
            correct_goal_difference: r.stats.correct_goal_difference,
            group_stage: r.breakdown.group_stage,
            round_of_32: r.breakdown.round_of_32,
            round_of_16: r.breakdown.round_of_16,
            quarter_finals: r.breakdown.quarter_finals,
            semi_finals: r.breakdown.semi_finals,
            final_: r.breakdown.final_,
            bonuses: r.breakdown.bonuses,
        }
    }
}

/// Render the stored rankings in `format`
pub fn render_report(
    format: ReportFormat,
    stored: &StoredRankings,
    catalog: &ModelCatalog,
) -> Result<String> {
    let board = standings(stored.rankings.clone());
    match format {
        ReportFormat::Markdown => Ok(markdown_report(&board, catalog, &stored.last_updated)),
        ReportFormat::Csv => csv_report(&board, catalog),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(&board)?),
    }
}

fn markdown_report(board: &[Standing], catalog: &ModelCatalog, last_updated: &str) -> String {
    let mut out = String::new();
    out.push_str("# AI Prediction Leaderboard\n\n");
    writeln!(out, "_Last updated: {last_updated}_\n").ok();
    out.push_str("| # | Model | Points | Accuracy | Exact | Winners | Groups | R32 | R16 | QF | SF | Final | Bonus |\n");
    out.push_str("|---|-------|-------:|---------:|------:|--------:|-------:|----:|----:|---:|---:|------:|------:|\n");

    for standing in board {
        let r = &standing.ranking;
        let b = &r.breakdown;
        let place = match standing.medal {
            Some(medal) => format!("{} {}", medal.emoji(), standing.position),
            None => standing.position.to_string(),
        };
        writeln!(
            out,
            "| {} | {} | {} | {}% | {} | {} | {} | {} | {} | {} | {} | {} | {} |",
            place,
            catalog.display_name(&r.model_id),
            r.total_points,
            r.stats.accuracy,
            r.stats.exact_scores,
            r.stats.correct_winners,
            b.group_stage,
            b.round_of_32,
            b.round_of_16,
            b.quarter_finals,
            b.semi_finals,
            b.final_,
            b.bonuses,
        )
        .ok();
    }
    out
}

fn csv_report(board: &[Standing], catalog: &ModelCatalog) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for standing in board {
        writer.serialize(ReportRow::new(standing, catalog))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;
