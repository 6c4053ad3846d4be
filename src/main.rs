//! Main entry point for the team-balancer CLI
//!
//! Balances a roster file, or builds the roster from a pasted lobby chat log
//! and a rank table, then prints the two teams.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use team_balancer::config::{AppConfig, OutputFormat};
use team_balancer::intake::{parse_lobby_log, resolve_participants, StaticRankResolver};
use team_balancer::rank::{rank_options, score, Rank};
use team_balancer::report::{render_table, BalanceReport};
use team_balancer::utils::strengths_within_tolerance;
use team_balancer::{ExhaustiveBalancer, Player, TeamBalancer, TeamPartition, ROSTER_SIZE};
use tracing::{error, info, warn};

/// Team Balancer - split ten ranked players into two fair teams
#[derive(Parser)]
#[command(
    name = "team-balancer",
    version,
    about = "Split ten ranked players into two balanced five-player teams",
    long_about = "Team Balancer scores each player's competitive rank (tier and division) and \
                 searches every 5-of-10 split for the one with the smallest strength difference."
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        global = true,
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        global = true,
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Output format override
    #[arg(long, value_enum, global = true, help = "Output format for results")]
    format: Option<OutputFormat>,

    /// Enable debug mode
    #[arg(short, long, global = true, help = "Enable debug mode with verbose logging")]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Balance a roster file of exactly ten players
    Balance {
        /// TOML or JSON roster with `[[players]]` entries of `name` and `rank`
        #[arg(short, long, value_name = "FILE")]
        roster: PathBuf,
    },

    /// Build the roster from a lobby chat log and a rank table, then balance it
    Lobby {
        /// Pasted lobby chat text
        #[arg(long, value_name = "FILE")]
        log: PathBuf,

        /// TOML table of `"name#tag" = "RANK"`
        #[arg(long, value_name = "FILE")]
        ranks: PathBuf,

        /// Deselect a participant (repeatable)
        #[arg(long, value_name = "NAME#TAG")]
        exclude: Vec<String>,

        /// Override a participant's rank as NAME#TAG=RANK (repeatable)
        #[arg(long = "rank", value_name = "NAME#TAG=RANK")]
        rank_overrides: Vec<String>,
    },

    /// List every selectable rank with its strength
    Ranks,
}

/// Roster file layout
#[derive(serde::Deserialize)]
struct RosterFile {
    players: Vec<Player>,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load and merge configuration from file/environment and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = match &args.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::from_env()?,
    };

    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }
    if args.debug {
        config.service.log_level = "debug".to_string();
    }
    if let Some(format) = args.format {
        config.output.format = format;
    }

    team_balancer::config::validate_config(&config)?;
    Ok(config)
}

fn load_roster(path: &Path) -> Result<Vec<Player>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read roster {}", path.display()))?;
    let roster: RosterFile = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&contents)?,
        _ => toml::from_str(&contents)?,
    };
    info!("Loaded {} players from {}", roster.players.len(), path.display());
    Ok(roster.players)
}

/// Parse a `NAME#TAG=RANK` override
fn parse_override(raw: &str) -> Result<(&str, Rank)> {
    let (name, label) = raw
        .rsplit_once('=')
        .ok_or_else(|| anyhow!("Rank override must look like NAME#TAG=RANK: {}", raw))?;
    Ok((name.trim(), label.parse()?))
}

fn print_partition(partition: TeamPartition, config: &AppConfig) -> Result<()> {
    if !strengths_within_tolerance(
        partition.blue.strength,
        partition.red.strength,
        config.balancer.max_acceptable_difference,
    ) {
        warn!(
            "Best split still differs by {} (limit {})",
            partition.difference(),
            config.balancer.max_acceptable_difference
        );
    }

    match config.output.format {
        OutputFormat::Table => print!("{}", render_table(&partition)),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&BalanceReport::new(partition))?
        ),
    }
    Ok(())
}

async fn run(args: Args, config: AppConfig) -> Result<()> {
    let balancer = ExhaustiveBalancer::new(config.balancer.tie_break);

    match args.command {
        Command::Balance { roster } => {
            let players = load_roster(&roster)?;
            if players.len() != ROSTER_SIZE {
                warn!("Select exactly {} players to form teams", ROSTER_SIZE);
            }
            let partition = balancer.balance(&players)?;
            print_partition(partition, &config)
        }
        Command::Lobby {
            log,
            ranks,
            exclude,
            rank_overrides,
        } => {
            let text = std::fs::read_to_string(&log)
                .with_context(|| format!("Failed to read chat log {}", log.display()))?;
            let handles = parse_lobby_log(&text, &config.intake.join_suffixes);
            info!("Found {} participants in {}", handles.len(), log.display());

            let resolver = Arc::new(StaticRankResolver::from_file(&ranks)?);
            let mut participants = resolve_participants(resolver, &handles).await?;

            for name in &exclude {
                participants.set_selected(name, false)?;
            }
            for raw in &rank_overrides {
                let (name, rank) = parse_override(raw)?;
                participants.override_rank(name, rank)?;
            }

            info!(
                "{} / {} participants selected",
                participants.selected_count(),
                participants.len()
            );
            if participants.selected_count() != ROSTER_SIZE {
                warn!("Select exactly {} players to form teams", ROSTER_SIZE);
            }
            let partition = participants.balance_selected(&balancer)?;
            print_partition(partition, &config)
        }
        Command::Ranks => {
            for rank in rank_options() {
                println!("{:<12} {:>5}", rank.to_string(), score(&rank));
            }
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!(
        "{} v{} (tie-break: {})",
        config.service.name,
        team_balancer::VERSION,
        config.balancer.tie_break
    );

    if let Err(e) = run(args, config).await {
        error!("{:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
