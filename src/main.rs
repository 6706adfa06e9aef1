//! Command line entry point for the scrim-rank tool
//!
//! Exposes the rank domain (formatting, comparison, validation, scale
//! conversion, team averages and rank filters) to scripts and operators.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use scrim_rank::config::{AppConfig, OutputFormat};
use scrim_rank::filter::{partition_by_rank, RankRange};
use scrim_rank::metrics::MetricsCollector;
use scrim_rank::rank::{
    compare_ranks, format_rank, format_rank_short, rank_to_scalar, scalar_to_rank, Rank,
    RankInput,
};
use scrim_rank::roster::average_rank;
use scrim_rank::types::Player;
use serde_json::json;
use std::cmp::Ordering;
use std::path::PathBuf;
use tracing::{debug, info};

/// Scrim Rank - competitive rank toolkit
#[derive(Parser)]
#[command(
    name = "scrim-rank",
    version,
    about = "Compare, validate, average and filter competitive ranks",
    long_about = "Scrim Rank works on the tier/division/LP ladder used for scrim matchmaking. \
                 Ranks are written as \"OURO II 50\", \"OURO II - 50 LP\" or \"MESTRE 120\"."
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Output format override
    #[arg(short, long, value_name = "FORMAT", help = "Output format (text, json)")]
    output: Option<OutputFormat>,

    /// Print Prometheus metrics after the command
    #[arg(long, help = "Print collected metrics in Prometheus text format")]
    metrics: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a rank for display
    Format {
        rank: String,
        /// Omit the LP suffix
        #[arg(long)]
        short: bool,
    },
    /// Compare two ranks
    Compare { a: String, b: String },
    /// Check whether a rank is well-formed
    Validate { rank: String },
    /// Position of a rank on the linear scale
    Scalar { rank: String },
    /// Rank at a position of the linear scale
    Decode {
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },
    /// Average rank of a team
    Average {
        #[arg(required = true)]
        ranks: Vec<String>,
    },
    /// Filter players from a JSON file by rank
    Filter {
        /// JSON array of players
        #[arg(long, value_name = "FILE")]
        players: PathBuf,
        /// Lowest accepted rank
        #[arg(long)]
        min: Option<String>,
        /// Highest accepted rank
        #[arg(long)]
        max: Option<String>,
    },
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
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load and merge configuration from environment and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    // Apply CLI overrides
    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if let Some(output) = args.output {
        config.output.format = output;
    }

    Ok(config)
}

/// Parse and validate a rank given on the command line
fn parse_rank(text: &str, metrics: &MetricsCollector) -> Result<Rank> {
    let input: RankInput = text.parse()?;
    let result = input.validate();
    metrics.record_validation(result.is_ok());

    result.with_context(|| format!("Rejected rank \"{}\"", text))
}

fn print_rank(rank: &Rank, config: &AppConfig) -> Result<()> {
    match config.output.format {
        OutputFormat::Json => println!("{}", serde_json::to_string(rank)?),
        OutputFormat::Text if config.output.show_color_class => {
            println!("{} [{}]", format_rank(rank), rank.tier().color_class())
        }
        OutputFormat::Text => println!("{}", format_rank(rank)),
    }
    Ok(())
}

/// Run a subcommand; `Ok(false)` signals a negative answer (e.g. invalid rank)
fn run(command: Command, config: &AppConfig, metrics: &MetricsCollector) -> Result<bool> {
    match command {
        Command::Format { rank, short } => {
            let rank = parse_rank(&rank, metrics)?;
            if short {
                match config.output.format {
                    OutputFormat::Json => println!("{}", json!(format_rank_short(&rank))),
                    OutputFormat::Text => println!("{}", format_rank_short(&rank)),
                }
            } else {
                print_rank(&rank, config)?;
            }
        }
        Command::Compare { a, b } => {
            let left = parse_rank(&a, metrics)?;
            let right = parse_rank(&b, metrics)?;
            let ordering = compare_ranks(&left, &right);
            let value = match ordering {
                Ordering::Less => -1,
                Ordering::Equal => 0,
                Ordering::Greater => 1,
            };

            match config.output.format {
                OutputFormat::Json => println!("{}", json!({ "result": value })),
                OutputFormat::Text => {
                    let symbol = match ordering {
                        Ordering::Less => "<",
                        Ordering::Equal => "=",
                        Ordering::Greater => ">",
                    };
                    println!("{} {} {}", left, symbol, right);
                }
            }
        }
        Command::Validate { rank } => {
            let input: RankInput = rank.parse()?;
            let result = input.validate();
            metrics.record_validation(result.is_ok());

            match config.output.format {
                OutputFormat::Json => println!(
                    "{}",
                    json!({
                        "valid": result.is_ok(),
                        "error": result.as_ref().err().map(|e| e.to_string()),
                    })
                ),
                OutputFormat::Text => match &result {
                    Ok(rank) => println!("valid: {}", rank),
                    Err(e) => println!("invalid: {}", e),
                },
            }

            return Ok(result.is_ok());
        }
        Command::Scalar { rank } => {
            let rank = parse_rank(&rank, metrics)?;
            let value = rank_to_scalar(&rank);
            match config.output.format {
                OutputFormat::Json => println!("{}", json!({ "scalar": value })),
                OutputFormat::Text => println!("{}", value),
            }
        }
        Command::Decode { value } => {
            print_rank(&scalar_to_rank(value), config)?;
        }
        Command::Average { ranks } => {
            let ranks = ranks
                .iter()
                .map(|text| parse_rank(text, metrics))
                .collect::<Result<Vec<_>>>()?;

            let timer = metrics.start_timer();
            let average = average_rank(&ranks);
            metrics.record_aggregation(average.as_ref(), timer.stop());

            match average {
                Some(rank) => print_rank(&rank, config)?,
                None => println!("unranked"),
            }
        }
        Command::Filter { players, min, max } => {
            let contents = std::fs::read_to_string(&players)
                .with_context(|| format!("Failed to read {}", players.display()))?;
            let players: Vec<Player> = serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse players from {}", players.display()))?;

            let min = match min {
                Some(text) => Some(parse_rank(&text, metrics)?),
                None => config.filter.default_min_rank,
            };
            let max = match max {
                Some(text) => Some(parse_rank(&text, metrics)?),
                None => config.filter.default_max_rank,
            };
            let range = RankRange::new(min, max)?;

            let total = players.len();
            let (kept, dropped) = partition_by_rank(players, &range);
            metrics.record_filter(kept.len(), dropped.len());
            debug!("Kept {} of {} players", kept.len(), total);

            match config.output.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&kept)?),
                OutputFormat::Text => {
                    for player in &kept {
                        let rank = player
                            .current_rank
                            .as_ref()
                            .map(format_rank)
                            .unwrap_or_else(|| "unranked".to_string());
                        println!("{}\t{}", player.riot_id(), rank);
                    }
                }
            }
        }
    }

    Ok(true)
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration (CLI args can override environment/config file)
    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {:#}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    debug!(
        "{} v{} starting with {} output",
        config.service.name,
        scrim_rank::VERSION,
        config.output.format
    );

    let metrics = MetricsCollector::new()?;
    let print_metrics = args.metrics;
    let succeeded = run(args.command, &config, &metrics)?;

    if print_metrics {
        print!("{}", metrics.render()?);
    }

    if !succeeded {
        info!("Command finished with a negative result");
        std::process::exit(1);
    }

    Ok(())
}
