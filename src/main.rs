use anyhow::Context;
use bst_collections::harness::{self, HarnessConfig, Measurement, Operation, ReportFormat, Structure};
use clap::Parser;
use log::info;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

/// Times insert, search and erase over seeded random keys for each ordered set and writes the
/// results as a report.
#[derive(Parser, Debug)]
#[command(name = "bst-bench", version)]
struct Cli {
    /// Input sizes to benchmark, comma separated.
    #[arg(long, value_delimiter = ',', default_values_t = [1_000, 10_000, 100_000, 1_000_000])]
    sizes: Vec<usize>,
    /// Seed of the key generator.
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Smallest key that may be generated.
    #[arg(long, default_value_t = 1, allow_hyphen_values = true)]
    min_key: i32,
    /// Largest key that may be generated.
    #[arg(long, default_value_t = 10_000_000, allow_hyphen_values = true)]
    max_key: i32,
    /// Number of repetitions averaged into each measurement.
    #[arg(long, default_value_t = 1)]
    iterations: u32,
    /// Structures to benchmark, comma separated. All structures are run when omitted.
    #[arg(long, value_enum, value_delimiter = ',')]
    structures: Vec<Structure>,
    #[arg(long, value_enum, default_value = "csv")]
    format: ReportFormat,
    /// Where the report is written. Defaults to `benchmark_results` with the extension of the
    /// report format.
    #[arg(short, long, env = "BST_BENCH_OUTPUT")]
    output: Option<PathBuf>,
}

impl From<Cli> for HarnessConfig {
    fn from(cli: Cli) -> Self {
        let structures = if cli.structures.is_empty() {
            Structure::ALL.to_vec()
        } else {
            cli.structures
        };

        HarnessConfig {
            sizes: cli.sizes,
            seed: cli.seed,
            min_key: cli.min_key,
            max_key: cli.max_key,
            iterations: cli.iterations,
            structures,
            format: cli.format,
            output: cli.output.unwrap_or_else(|| cli.format.default_output()),
        }
    }
}

fn print_summary(config: &HarnessConfig, measurements: &[Measurement]) {
    for &size in &config.sizes {
        println!("\n===== Benchmark N = {} =====", size);
        for &structure in &config.structures {
            let micros = |operation: Operation| {
                measurements
                    .iter()
                    .find(|m| m.size == size && m.structure == structure && m.operation == operation)
                    .map_or(0.0, |m| m.micros)
            };
            println!(
                "{} -> insert: {:.1} search: {:.1} erase: {:.1} us",
                structure,
                micros(Operation::Insert),
                micros(Operation::Search),
                micros(Operation::Erase),
            );
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = HarnessConfig::from(Cli::parse());
    info!(
        "Running with configuration {}.",
        serde_json::to_string(&config).context("Failed to serialize the configuration")?,
    );

    let measurements = harness::run(&config).context("Benchmark run failed")?;

    let file = File::create(&config.output)
        .with_context(|| format!("Failed to create {}", config.output.display()))?;
    harness::write_report(BufWriter::new(file), &measurements, config.format)
        .with_context(|| format!("Failed to write report to {}", config.output.display()))?;

    print_summary(&config, &measurements);
    info!("Results saved to {}.", config.output.display());
    Ok(())
}
