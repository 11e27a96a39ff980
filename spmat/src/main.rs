use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use log::info;

use spmat::{
    load_pair, preview, read_matrix, render, write_text, LogProgress, MatrixSummary,
    MultiplyConfig, MultiplyStrategy, Operation, WriteOptions, DEFAULT_CHUNK_SIZE,
    DEFAULT_OUTPUT, DEFAULT_PREVIEW_LINES,
};

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "spmat - add, subtract and multiply sparse integer matrices stored as text")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add two matrices of equal shape
    Add(RunArgs),
    /// Subtract the second matrix from the first
    Subtract(RunArgs),
    /// Multiply the first matrix by the second
    Multiply(RunArgs),
    /// Show dimensions, non-zero count and density of a matrix file
    Info {
        /// Path to the matrix file
        file: PathBuf,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct RunArgs {
    /// Path to the first matrix file
    first: PathBuf,

    /// Path to the second matrix file
    second: PathBuf,

    /// Output file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Write entries in row-major order
    #[arg(long)]
    sorted: bool,

    /// Examined entry pairs between progress reports
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    chunk_size: u64,

    /// Compare every entry pair instead of bucketing the second matrix by row
    #[arg(long)]
    naive: bool,

    /// Number of result lines to show
    #[arg(long, default_value_t = DEFAULT_PREVIEW_LINES)]
    preview: usize,
}

impl RunArgs {
    fn multiply_config(&self) -> MultiplyConfig {
        let strategy = if self.naive {
            MultiplyStrategy::Naive
        } else {
            MultiplyStrategy::RowIndexed
        };
        MultiplyConfig::default()
            .with_chunk_size(self.chunk_size)
            .with_strategy(strategy)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let start_time = Instant::now();

    match &cli.command {
        Commands::Add(args) => run(Operation::Add, args)?,
        Commands::Subtract(args) => run(Operation::Subtract, args)?,
        Commands::Multiply(args) => run(Operation::Multiply, args)?,
        Commands::Info { file, json } => info_command(file, *json)?,
    }

    info!("Completed in {:.2?}", start_time.elapsed());
    Ok(())
}

fn run(operation: Operation, args: &RunArgs) -> anyhow::Result<()> {
    let options = WriteOptions::default().with_sorted(args.sorted);
    let config = args.multiply_config();

    let (a, b) = load_pair(&args.first, &args.second).context("Error loading matrices")?;

    let mut progress = LogProgress::new();
    let result = operation
        .apply(&a, &b, &config, Some(&mut progress))
        .with_context(|| format!("Failed to {operation} matrices"))?;

    info!("Non-zero elements in result: {}", result.nnz());
    let text = render(&result, options);
    println!("Preview of result file:");
    println!("{}", preview(&text, args.preview));

    write_text(&args.output, &text)
        .with_context(|| format!("Failed to save results to {}", args.output.display()))?;
    Ok(())
}

fn info_command(file: &Path, json: bool) -> anyhow::Result<()> {
    let matrix = read_matrix(file)?;
    let summary = MatrixSummary::of(&matrix);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", file.display());
        println!("{summary}");
    }
    Ok(())
}
