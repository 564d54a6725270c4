use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use shortre::search::parallel::{synthesize_batch, ParallelConfig};
use shortre::search::result::SynthesisStatistics;
use shortre::semantics::syntax::anchored;
use shortre::validation::{verify_pattern, NearMissConfig};
use shortre::{CostMetric, GroupStyle, SynthConfig, Synthesizer};

// --- Command Line Arguments ---

#[derive(Parser)]
#[command(name = "shortre")]
#[command(about = "shortre - short regexes for exact string sets")]
#[command(version)]
#[command(subcommand_required = true)]
#[command(arg_required_else_help = true)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// CLI cost metric selection
#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliCostMetric {
    /// Pattern length in UTF-8 bytes
    Bytes,
    /// Pattern length in characters
    Chars,
}

impl From<CliCostMetric> for CostMetric {
    fn from(cli: CliCostMetric) -> Self {
        match cli {
            CliCostMetric::Bytes => CostMetric::Bytes,
            CliCostMetric::Chars => CostMetric::Chars,
        }
    }
}

/// CLI grouping syntax selection
#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliGroupStyle {
    /// (?:...)
    NonCapturing,
    /// (...)
    Capturing,
}

impl From<CliGroupStyle> for GroupStyle {
    fn from(cli: CliGroupStyle) -> Self {
        match cli {
            CliGroupStyle::NonCapturing => GroupStyle::NonCapturing,
            CliGroupStyle::Capturing => GroupStyle::Capturing,
        }
    }
}

/// Options shared by every command that synthesizes
#[derive(clap::Args, Clone, Debug)]
struct SynthOptions {
    /// Cost metric to minimize
    #[arg(long, value_enum, default_value = "bytes")]
    cost_metric: CliCostMetric,
    /// Grouping syntax for factored alternatives
    #[arg(long, value_enum, default_value = "non-capturing")]
    group: CliGroupStyle,
    /// Shortest shared prefix/suffix (bytes) worth factoring out
    #[arg(long, default_value = "2")]
    min_affix_len: usize,
    /// Print synthesis statistics
    #[arg(long)]
    stats: bool,
    /// Enable verbose output
    #[arg(long, short)]
    verbose: bool,
}

impl SynthOptions {
    fn to_config(&self) -> SynthConfig {
        SynthConfig::default()
            .with_cost_metric(self.cost_metric.into())
            .with_group_style(self.group.into())
            .with_min_affix_len(self.min_affix_len)
            .with_verbose(self.verbose)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Synthesize a pattern matching exactly the given values
    Synth {
        /// Values to match
        values: Vec<String>,
        /// Read additional values from a file, one per line ("-" for stdin)
        #[arg(long, short)]
        file: Option<PathBuf>,
        /// Wrap the pattern as ^(?:...)$
        #[arg(long)]
        anchored: bool,
        /// Check the pattern against the values and generated near misses
        #[arg(long)]
        verify: bool,
        /// Number of random near misses generated by --verify
        #[arg(long, default_value = "256")]
        probes: usize,
        /// Random seed for near-miss generation
        #[arg(long)]
        seed: Option<u64>,
        #[command(flatten)]
        options: SynthOptions,
    },
    /// Check that a pattern matches exactly the given values
    Verify {
        /// Pattern to check (unanchored)
        pattern: String,
        /// Values the pattern must match
        values: Vec<String>,
        /// Read additional values from a file, one per line ("-" for stdin)
        #[arg(long, short)]
        file: Option<PathBuf>,
        /// Number of random near misses to try
        #[arg(long, default_value = "256")]
        probes: usize,
        /// Random seed for near-miss generation
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Synthesize one pattern per set; sets are separated by empty lines, so
    /// a set cannot contain the empty string (whitespace-only values are kept)
    Batch {
        /// Input file ("-" for stdin)
        file: PathBuf,
        /// Number of worker threads
        #[arg(long, short = 'j')]
        cores: Option<usize>,
        #[command(flatten)]
        options: SynthOptions,
    },
}

// --- Input ---

fn read_input(path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e).into())
    }
}

/// Collect values from the command line and, if given, a file
fn collect_values(
    mut values: Vec<String>,
    file: Option<&Path>,
) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    if let Some(path) = file {
        let text = read_input(path)?;
        values.extend(text.lines().map(String::from));
    }
    Ok(values)
}

/// Split text into sets of lines, separated by one or more empty lines.
///
/// Lines holding only whitespace are values, not separators.
fn parse_sets(text: &str) -> Vec<Vec<String>> {
    let mut sets = Vec::new();
    let mut current: Vec<String> = Vec::new();
    for line in text.lines() {
        if line.is_empty() {
            if !current.is_empty() {
                sets.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line.to_string());
        }
    }
    if !current.is_empty() {
        sets.push(current);
    }
    sets
}

// --- Commands ---

fn run_synth(
    values: Vec<String>,
    file: Option<PathBuf>,
    anchor: bool,
    verify: bool,
    near_miss: NearMissConfig,
    options: &SynthOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let values = collect_values(values, file.as_deref())?;
    let config = options.to_config();

    if config.verbose {
        eprintln!("Synthesizing pattern for {} values", values.len());
        eprintln!("  Cost metric: {}", config.cost_metric);
        eprintln!("  Group style: {}", config.group_style);
        eprintln!("  Min affix length: {}", config.min_affix_len);
    }

    let mut synthesizer = Synthesizer::new(config);
    let result = synthesizer.run(&values);

    if anchor {
        println!("{}", anchored(&result.pattern));
    } else {
        println!("{}", result.pattern);
    }

    if options.stats {
        println!(
            "\nCost: {} (naive {}, saved {})",
            result.cost,
            result.naive_cost,
            result.cost_savings()
        );
        print_statistics(&result.statistics);
    }

    if verify {
        let report = verify_pattern(&result.pattern, &values, &near_miss)?;
        println!(
            "Verified: {} values matched, {} near misses rejected",
            report.members_checked, report.probes_checked
        );
    }

    Ok(())
}

fn run_verify(
    pattern: &str,
    values: Vec<String>,
    file: Option<PathBuf>,
    near_miss: NearMissConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let values = collect_values(values, file.as_deref())?;
    let report = verify_pattern(pattern, &values, &near_miss)?;
    println!(
        "Verified: {} values matched, {} near misses rejected",
        report.members_checked, report.probes_checked
    );
    Ok(())
}

fn run_batch(
    file: &Path,
    cores: Option<usize>,
    options: &SynthOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let sets = parse_sets(&read_input(file)?);
    let config = options.to_config();
    let parallel_config = ParallelConfig::default().with_workers_option(cores);

    if config.verbose {
        eprintln!("Running batch of {} sets", sets.len());
        eprintln!("  Workers: {}", parallel_config.num_workers);
    }

    let batch = synthesize_batch(&sets, &config, &parallel_config);
    for result in &batch.results {
        println!("{}", result.pattern);
    }

    if options.stats {
        print_statistics(&batch.total_statistics);
        println!("  Sets per worker: {:?}", batch.sets_per_worker);
    }

    Ok(())
}

/// Print synthesis statistics
fn print_statistics(stats: &SynthesisStatistics) {
    println!("\nSynthesis Statistics:");
    for line in stats.format_summary().lines() {
        println!("  {}", line);
    }
}

fn main() {
    let args = Args::parse();

    let outcome = match args.command {
        Commands::Synth {
            values,
            file,
            anchored: anchor,
            verify,
            probes,
            seed,
            options,
        } => {
            let near_miss = NearMissConfig::default()
                .with_random_count(probes)
                .with_seed_option(seed);
            run_synth(values, file, anchor, verify, near_miss, &options)
        }
        Commands::Verify {
            pattern,
            values,
            file,
            probes,
            seed,
        } => {
            let near_miss = NearMissConfig::default()
                .with_random_count(probes)
                .with_seed_option(seed);
            run_verify(&pattern, values, file, near_miss)
        }
        Commands::Batch {
            file,
            cores,
            options,
        } => run_batch(&file, cores, &options),
    };

    if let Err(e) = outcome {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
