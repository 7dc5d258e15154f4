use std::io::{self, Write};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use combinatorix::{
    Combinations, MultiComb, MultiSet, Multisets, Permutations, Stepper, choose, factorial, gcd,
    lcm, par_rows_limited,
};
use log::{debug, info};

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

/// Combinatorix - Enumerate permutations, combinations and multisets
#[derive(Parser, Debug)]
#[command(name = "combinatorix")]
#[command(about = "Count and enumerate permutations, combinations and multisets")]
#[command(version)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Stop printing an enumeration after this many rows
    #[arg(long, global = true)]
    pub limit: Option<usize>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Binomial coefficient C(n, k)
    Choose { n: u64, k: u64 },
    /// Every k-combination of 0..n
    Combinations { n: usize, k: usize },
    /// Every k-combination of 0..n, using the fast stepper
    #[command(name = "fast_combinations", alias = "fast-combinations")]
    FastCombinations { n: usize, k: usize },
    /// Nested disjoint combinations of sizes k1, k2, ... out of 0..n
    Multicombs {
        n: usize,
        #[arg(required = true)]
        ks: Vec<usize>,
        /// Collect rows on all cores before printing
        #[arg(long)]
        parallel: bool,
    },
    /// Every multiset of size k over n categories
    Multisets { n: usize, k: usize },
    /// Every permutation of 0..n
    Permutations { n: usize },
    /// Show the multiset with the given multiplicities and its bars
    Multiset {
        #[arg(required = true)]
        multiplicity: Vec<usize>,
    },
    /// Show the multiset of size k encoded by the given bar positions
    MultisetBars { k: usize, bars: Vec<usize> },
    /// Greatest common divisor
    Gcd { m: u128, n: u128 },
    /// Least common multiple
    Lcm { m: u128, n: u128 },
    /// n!
    Factorial { n: u32 },
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub command: Command,
    pub log_level: LogLevel,
    pub limit: Option<usize>,
}

/// Parse command line arguments; `None` when help or version was printed.
pub fn parse_args() -> Result<Option<CliConfig>> {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(err) if !err.use_stderr() => {
            err.print()?;
            return Ok(None);
        }
        Err(err) => {
            err.print()?;
            bail!("Invalid command line");
        }
    };

    Ok(Some(CliConfig {
        command: args.command,
        log_level: args.log_level,
        limit: args.limit,
    }))
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
    let Some(config) = parse_args()? else {
        return Ok(());
    };

    init_logging(&config.log_level)?;
    info!("Running {:?}", config.command);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&config.command, config.limit, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Write the output of `command` to `out`, printing at most `limit` rows of
/// any enumeration.
pub fn execute<W: Write>(command: &Command, limit: Option<usize>, out: &mut W) -> Result<()> {
    let limit = limit.unwrap_or(usize::MAX);

    match command {
        Command::Choose { n, k } => {
            let value = choose(*n, *k).context("Cannot compute binomial coefficient")?;
            writeln!(out, "choose({}, {}) = {}", n, k, value)?;
        }
        Command::Combinations { n, k } => {
            write_combinations(out, *n, *k, Stepper::Standard, limit)?;
        }
        Command::FastCombinations { n, k } => {
            write_combinations(out, *n, *k, Stepper::Fast, limit)?;
        }
        Command::Multicombs { n, ks, parallel } => {
            write_multicombs(out, *n, ks, *parallel, limit)?;
        }
        Command::Multisets { n, k } => {
            writeln!(out, "multisets: n={}, k={}", n, k)?;
            let multisets = Multisets::new(*n, *k).context("Invalid multiset size")?;
            for (index, multiset) in multisets.take(limit).enumerate() {
                writeln!(out, "C[{:3}] = {}", index, multiset)?;
            }
        }
        Command::Permutations { n } => {
            writeln!(out, "permutations: n={}", n)?;
            for (index, permutation) in Permutations::of_range(*n).take(limit).enumerate() {
                writeln!(out, "P[{:3}] = {:?}", index, permutation)?;
            }
        }
        Command::Multiset { multiplicity } => {
            let multiset = MultiSet::from_multiplicity(multiplicity.clone());
            writeln!(out, "multiset: {}", multiset)?;
            writeln!(out, "bars: {:?}", multiset.bars())?;
        }
        Command::MultisetBars { k, bars } => {
            let multiset = MultiSet::from_bars(*k, bars).context("Invalid bars")?;
            writeln!(out, "multiset: {}", multiset)?;
            writeln!(out, "multiplicity: {:?}", multiset.multiplicity())?;
        }
        Command::Gcd { m, n } => {
            writeln!(out, "gcd({}, {}) = {}", m, n, gcd(*m, *n))?;
        }
        Command::Lcm { m, n } => {
            let value = lcm(*m, *n).context("Cannot compute least common multiple")?;
            writeln!(out, "lcm({}, {}) = {}", m, n, value)?;
        }
        Command::Factorial { n } => {
            writeln!(out, "{}! = {}", n, factorial(*n))?;
        }
    }
    Ok(())
}

fn write_combinations<W: Write>(
    out: &mut W,
    n: usize,
    k: usize,
    stepper: Stepper,
    limit: usize,
) -> Result<()> {
    writeln!(out, "combinations: n={}, k={}", n, k)?;
    let combinations =
        Combinations::with_stepper(n, k, stepper).context("Invalid combination size")?;
    for (index, combination) in combinations.take(limit).enumerate() {
        writeln!(out, "C[{:3}] = {:?}", index, combination)?;
    }
    Ok(())
}

fn write_multicombs<W: Write>(
    out: &mut W,
    n: usize,
    ks: &[usize],
    parallel: bool,
    limit: usize,
) -> Result<()> {
    if parallel {
        let rows = par_rows_limited(n, ks, limit).context("Invalid multi-combination sizes")?;
        debug!("Printing {} rows", rows.len());
        for (index, row) in rows.iter().enumerate() {
            writeln!(out, "mc[{}]: {:?}", index, row)?;
        }
    } else {
        let driver = MultiComb::new(n, ks).context("Invalid multi-combination sizes")?;
        for (index, row) in driver.into_iter().take(limit).enumerate() {
            writeln!(out, "mc[{}]: {:?}", index, row)?;
        }
    }
    Ok(())
}
