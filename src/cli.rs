use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use memexpr::operator::arithmetic_ops;
use memexpr::{Expression, ExpressionPool, PoolConfig};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Memexpr - render every integer in a range as a compact expression
#[derive(Parser, Debug)]
#[command(name = "memexpr")]
#[command(
    about = "Render every integer in a target range as a compact symbolic expression built from base values"
)]
#[command(version)]
pub struct CliArgs {
    /// First value of the target range (inclusive)
    #[arg(allow_negative_numbers = true)]
    pub first: i64,

    /// Last value of the target range (inclusive)
    #[arg(allow_negative_numbers = true)]
    pub last: i64,

    /// Comma-separated base values, each rendered as a decimal literal
    #[arg(short, long, default_value = "1,2,5")]
    pub items: String,

    /// Maximum number of candidate expressions kept per value
    #[arg(long, default_value_t = 5)]
    pub max_cache: usize,

    /// Fraction of the range forward search must cover before backward
    /// inference takes over, in [0, 1]
    #[arg(short, long, default_value_t = 1.0)]
    pub quality: f64,

    /// Seed for reproducible generation
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Parse a comma-separated list of base values into decimal base items.
pub fn parse_items(items: &str) -> Result<Vec<Expression>> {
    items
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let value: i64 = entry
                .parse()
                .with_context(|| format!("Invalid base value '{}'", entry))?;
            Ok(Expression::new(value, value.to_string()))
        })
        .collect()
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();

    init_logging(&args.log_level)?;

    let items = parse_items(&args.items)?;
    let config = PoolConfig {
        max_cache_num: args.max_cache,
        quality: args.quality,
        ..PoolConfig::default()
    };

    info!(
        "Generating expressions for [{}, {}] from base values {}",
        args.first, args.last, args.items
    );

    let pool = match args.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            ExpressionPool::with_rng(
                items,
                arithmetic_ops(),
                args.first..=args.last,
                config,
                &mut rng,
            )
        }
        None => ExpressionPool::new(items, arithmetic_ops(), args.first..=args.last, config),
    }
    .context("Failed to build the expression pool")?;

    for value in args.first..=args.last {
        println!("{} -> {}", value, pool.get(value)?);
    }

    Ok(())
}
