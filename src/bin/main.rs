//! Kernel Perceptron Command Line Interface
//!
//! A command-line interface for running online training passes over CSV
//! datasets and reporting running mistake rates.

use clap::{Args, Parser, Subcommand, ValueEnum};
use env_logger::Env;
use kperceptron::api::{Perceptron, TrainingRun};
use kperceptron::core::Result;
use kperceptron::kernel::{DotProductKernel, ExponentialKernel, Kernel, PolynomialKernel};
use kperceptron::CSVDataset;
use log::{error, info};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "kperceptron")]
#[command(about = "A Rust implementation of the kernel perceptron")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "kperceptron contributors")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one online training pass with a single kernel
    Run(RunArgs),
    /// Train polynomial and exponential perceptrons side by side
    Compare(CompareArgs),
}

#[derive(Args)]
struct RunArgs {
    /// Training data file (CSV, last column is the label)
    #[arg(long)]
    data: PathBuf,

    /// Kernel function
    #[arg(short, long, default_value = "dot")]
    kernel: CliKernel,

    /// Polynomial kernel degree
    #[arg(long, default_value = "5")]
    degree: u32,

    /// Exponential kernel scale
    #[arg(long, default_value = "10.0")]
    scale: f64,

    /// Examples between running-rate reports (0 disables them)
    #[arg(short, long, default_value = "100")]
    interval: usize,
}

#[derive(Args)]
struct CompareArgs {
    /// Training data file (CSV, last column is the label)
    #[arg(long)]
    data: PathBuf,

    /// Polynomial kernel degree
    #[arg(long, default_value = "5")]
    degree: u32,

    /// Exponential kernel scale
    #[arg(long, default_value = "10.0")]
    scale: f64,

    /// Examples between running-rate reports (0 disables them)
    #[arg(short, long, default_value = "100")]
    interval: usize,
}

#[derive(ValueEnum, Clone, Debug)]
enum CliKernel {
    /// Dot product plus one: x·y + 1
    #[value(name = "dot")]
    Dot,
    /// Polynomial: (x·y + 1)^degree
    #[value(name = "polynomial")]
    Polynomial,
    /// Exponential: exp(-||x - y|| / (2·scale²))
    #[value(name = "exponential")]
    Exponential,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else {
        "warn"
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let result = match cli.command {
        Commands::Run(args) => run_command(args),
        Commands::Compare(args) => compare_command(args),
    };

    if let Err(e) = result {
        error!("Error: {e}");
        process::exit(1);
    }
}

fn run_command(args: RunArgs) -> Result<()> {
    info!("Data file: {:?}", args.data);

    let dataset = CSVDataset::from_file(&args.data)?;

    match args.kernel {
        CliKernel::Dot => run_pass(DotProductKernel::new(), &dataset, args.interval),
        CliKernel::Polynomial => {
            info!("Polynomial kernel, degree {}", args.degree);
            run_pass(PolynomialKernel::new(args.degree), &dataset, args.interval)
        }
        CliKernel::Exponential => {
            info!("Exponential kernel, scale {}", args.scale);
            run_pass(ExponentialKernel::new(args.scale), &dataset, args.interval)
        }
    }
}

fn run_pass<K: Kernel>(kernel: K, dataset: &CSVDataset, interval: usize) -> Result<()> {
    let run = Perceptron::with_kernel(kernel)
        .with_report_interval(interval)
        .train(dataset)?;

    print_checkpoints(&run);

    println!("=== Online Training Results ===");
    println!("Examples: {}", run.examples_seen());
    println!("Mistakes: {}", run.mistake_count());
    println!("Mistake rate: {:.4}", run.mistake_rate());

    Ok(())
}

fn print_checkpoints<K: Kernel>(run: &TrainingRun<K>) {
    for checkpoint in run.checkpoints() {
        println!(
            "{}: {:.4}",
            checkpoint.examples_seen,
            checkpoint.mistake_rate()
        );
    }
}

fn compare_command(args: CompareArgs) -> Result<()> {
    info!("Data file: {:?}", args.data);
    info!(
        "Comparing polynomial (degree {}) vs exponential (scale {})",
        args.degree, args.scale
    );

    let dataset = CSVDataset::from_file(&args.data)?;

    let poly_run = Perceptron::with_kernel(PolynomialKernel::new(args.degree))
        .with_report_interval(args.interval)
        .train(&dataset)?;
    let exp_run = Perceptron::with_kernel(ExponentialKernel::new(args.scale))
        .with_report_interval(args.interval)
        .train(&dataset)?;

    // Both passes see the same examples, so the checkpoints line up
    for (poly, exp) in poly_run.checkpoints().iter().zip(exp_run.checkpoints()) {
        println!(
            "{}: polynomial {:.4}  exponential {:.4}",
            poly.examples_seen,
            poly.mistake_rate(),
            exp.mistake_rate()
        );
    }

    println!("=== Comparison Results ===");
    println!("Examples: {}", poly_run.examples_seen());
    println!(
        "Polynomial (degree {}): {} mistakes, rate {:.4}",
        args.degree,
        poly_run.mistake_count(),
        poly_run.mistake_rate()
    );
    println!(
        "Exponential (scale {}): {} mistakes, rate {:.4}",
        args.scale,
        exp_run.mistake_count(),
        exp_run.mistake_rate()
    );

    Ok(())
}
