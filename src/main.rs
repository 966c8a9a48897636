use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use league_engine::audit::roster_report;
use league_engine::config::AppConfig;
use league_engine::reconcile::reconcile;
use league_engine::scorers::top_scorers;
use league_engine::standings::{compute_standings, union_matches};
use league_engine::storage::{read_aggregate, write_aggregate};

#[derive(Parser)]
#[command(name = "league-engine")]
#[command(about = "League standings and player-statistics reconciliation")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: String,

    /// Aggregate snapshot path (overrides the config file)
    #[arg(long)]
    snapshot: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the ranked league table
    Standings,

    /// Print the top-scorer leaderboard
    Scorers {
        /// Max entries to print
        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// Reconcile rosters and standings, then write the aggregate back
    Recompute {
        /// Compute but don't write
        #[arg(long)]
        dry_run: bool,
    },

    /// Report ghost names and duplicate identities after reconciliation
    Audit,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    if cli.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Starting league-engine v{}", env!("CARGO_PKG_VERSION"));

    let config_path = PathBuf::from(&cli.config);
    let config = if config_path.exists() {
        AppConfig::from_file(&config_path)?
    } else {
        AppConfig::default()
    };

    let snapshot_path = cli
        .snapshot
        .map(PathBuf::from)
        .unwrap_or_else(|| config.snapshot_path());

    let aggregate = read_aggregate(&snapshot_path)?;
    tracing::info!(
        "Loaded aggregate: {} teams, {} fixtures, {} results",
        aggregate.teams.len(),
        aggregate.fixtures.len(),
        aggregate.results.len()
    );

    match cli.command {
        Commands::Standings => {
            let table = compute_standings(&aggregate.teams, &aggregate.results, &aggregate.fixtures);

            println!("\n=== League Table ===\n");
            println!(
                "{:>3}  {:<26} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>4} {:>4}  {}",
                "#", "Team", "P", "W", "D", "L", "GF", "GA", "GD", "Pts", "Form"
            );
            for (rank, team) in table.iter().enumerate() {
                let row = &team.stats;
                println!(
                    "{:>3}  {:<26} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>4} {:>4}  {}",
                    rank + 1,
                    team.name,
                    row.played,
                    row.won,
                    row.drawn,
                    row.lost,
                    row.goals_scored,
                    row.goals_conceded,
                    row.goal_difference,
                    row.points,
                    row.form
                );
            }
        }
        Commands::Scorers { limit } => {
            let records = top_scorers(&aggregate.teams, &aggregate.fixtures, &aggregate.results);

            println!("\n=== Top Scorers ===\n");
            println!(
                "{:>3}  {:<24} {:<26} {:>5} {:>5} {:>6}",
                "#", "Player", "Team", "Goals", "POTM", "Score"
            );
            for (rank, record) in records.iter().take(limit).enumerate() {
                println!(
                    "{:>3}  {:<24} {:<26} {:>5} {:>5} {:>6}",
                    rank + 1,
                    record.name,
                    record.team,
                    record.goals,
                    record.potm_wins,
                    record.composite_score
                );
            }
            if records.len() > limit {
                println!("\n({} more not shown)", records.len() - limit);
            }
        }
        Commands::Recompute { dry_run } => {
            let before: usize = aggregate.teams.iter().map(|t| t.players.len()).sum();
            let teams =
                compute_standings(&aggregate.teams, &aggregate.results, &aggregate.fixtures);
            let after: usize = teams.iter().map(|t| t.players.len()).sum();

            let mut updated = aggregate;
            updated.teams = teams;

            if !dry_run {
                write_aggregate(&snapshot_path, &updated)?;
            }

            println!("\n=== Recompute Results ===");
            println!("Teams:              {}", updated.teams.len());
            println!("Players:            {}", after);
            println!("Players synthesized: {}", after.saturating_sub(before));
            if dry_run {
                println!("\n(dry run - no data written to disk)");
            } else {
                println!("Written to:         {:?}", snapshot_path);
            }
        }
        Commands::Audit => {
            let combined = union_matches(&aggregate.results, &aggregate.fixtures);
            let teams = reconcile(&aggregate.teams, &combined);
            let report = roster_report(&teams);

            println!("\n=== Roster Audit ===\n");
            if report.is_clean() {
                println!("No ghost names or identity collisions found.");
            } else {
                if !report.ghosts.is_empty() {
                    println!("Ghost players (synthesized from event data):");
                    for ghost in &report.ghosts {
                        println!(
                            "  {} [{}] — {} goals, {} appearances (id {})",
                            ghost.name, ghost.team, ghost.goals, ghost.appearances, ghost.id
                        );
                    }
                }
                if !report.collisions.is_empty() {
                    println!("\nName collisions (merged by the reconciler):");
                    for collision in &report.collisions {
                        println!(
                            "  {} [{}]: {}",
                            collision.key,
                            collision.team,
                            collision.names.join(", ")
                        );
                    }
                }
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
