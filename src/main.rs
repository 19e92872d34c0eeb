//! Command-line harness for the backpropagation network.
//!
//! Run with:
//!   cargo run -- cases --network networkInfo.txt --cases testCases.txt --mode train
//!   cargo run -- autoencode --image test1.bmp --out whatever.bmp --grayscale
//!   cargo run -- classify --network networkInfo2.txt --images One.bmp Two.bmp --targets 0.0 0.2
//!
//! Set `RUST_LOG=debug` to see the per-epoch sweep error.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::info;

use ferrite_backprop::codec::{read_bmp, write_bmp};
use ferrite_backprop::network::export::save_records;
use ferrite_backprop::runner::{run_autoencoder, run_cases, run_classifier, RunOutcome};
use ferrite_backprop::{NetworkConfig, RunMode, TestCases};

#[derive(Parser)]
#[command(name = "ferrite-backprop")]
#[command(about = "Feed-forward backpropagation network trainer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train on or evaluate a table of test cases
    Cases {
        #[command(flatten)]
        common: CommonArgs,

        /// Test case file: count, input rows, expected rows
        #[arg(short, long, default_value = "testCases.txt")]
        cases: PathBuf,
    },

    /// Train a network to reproduce one bitmap
    Autoencode {
        #[command(flatten)]
        common: CommonArgs,

        /// Source bitmap
        #[arg(short, long, default_value = "test1.bmp")]
        image: PathBuf,

        /// Where to write the reconstructed bitmap
        #[arg(short, long, default_value = "whatever.bmp")]
        out: PathBuf,

        /// Convert to grayscale before training and after decoding
        #[arg(long)]
        grayscale: bool,
    },

    /// Map several bitmaps to scalar targets
    Classify {
        #[command(flatten)]
        common: CommonArgs,

        /// Input bitmaps, all the same size
        #[arg(long, num_args = 1.., required = true)]
        images: Vec<PathBuf>,

        /// One target per image
        #[arg(long, num_args = 1.., required = true, allow_negative_numbers = true)]
        targets: Vec<f64>,

        #[arg(long)]
        grayscale: bool,
    },
}

#[derive(Args)]
struct CommonArgs {
    /// Network info file: topology, hyperparameters, optional weights
    #[arg(short, long, default_value = "networkInfo.txt")]
    network: PathBuf,

    /// Train from random weights or evaluate the file's weights
    #[arg(short, long, value_enum, default_value = "train")]
    mode: Mode,

    /// Seed for weight initialization
    #[arg(long)]
    seed: Option<u64>,

    /// Where to write the `wNJI = value` weight dump
    #[arg(long, default_value = "weights.txt")]
    weights_out: PathBuf,

    /// Also write the network info file with the final weights appended
    #[arg(long)]
    save_config: Option<PathBuf>,

    /// Print the run summary as JSON
    #[arg(long)]
    report_json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    Train,
    Infer,
}

impl From<Mode> for RunMode {
    fn from(mode: Mode) -> RunMode {
        match mode {
            Mode::Train => RunMode::Train,
            Mode::Infer => RunMode::InferenceOnly,
        }
    }
}

fn load_config(path: &Path) -> Result<NetworkConfig> {
    NetworkConfig::load(path).with_context(|| format!("reading network info {}", path.display()))
}

fn print_outcome(outcome: &RunOutcome) {
    println!("Layers: {:?}", outcome.topology.layers());

    if !outcome.outputs_before.is_empty() {
        println!();
        println!("Original outputs:");
        for output in &outcome.outputs_before {
            for value in output {
                println!("{value}");
            }
        }
    }

    println!();
    println!("Outputs and expected outputs:");
    for (idx, (output, expected)) in outcome.outputs.iter().zip(outcome.expected.iter()).enumerate() {
        println!("Test Case: {idx}");
        for (value, target) in output.iter().zip(expected.iter()) {
            println!("Output: {value}  |  Expected: {target}");
        }
    }

    if let Some(report) = &outcome.report {
        println!();
        println!(
            "Stopped after {} epoch(s) ({:?}); first error {}, final error {}",
            report.epochs_run, report.stop_reason, report.first_error, report.final_error
        );
    }
}

fn finish(outcome: &RunOutcome, config: &NetworkConfig, common: &CommonArgs) -> Result<()> {
    if common.report_json {
        println!("{}", outcome.to_json()?);
    } else {
        print_outcome(outcome);
    }

    save_records(&outcome.weights, &common.weights_out)
        .with_context(|| format!("writing weights to {}", common.weights_out.display()))?;
    info!("weights written to {}", common.weights_out.display());

    if let Some(path) = &common.save_config {
        config
            .with_sizes(outcome.topology.input_width(), outcome.topology.output_width())
            .with_weights(&outcome.weights)
            .save(path)
            .with_context(|| format!("writing network info {}", path.display()))?;
        info!("network info with trained weights written to {}", path.display());
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Cases { common, cases } => {
            let config = load_config(&common.network)?;
            let cases = TestCases::load(&cases)
                .with_context(|| format!("reading test cases {}", cases.display()))?;
            let outcome = run_cases(&config, &cases, common.mode.into(), common.seed)?;
            finish(&outcome, &config, &common)?;
        }

        Commands::Autoencode { common, image, out, grayscale } => {
            let config = load_config(&common.network)?;
            let source = read_bmp(&image).with_context(|| format!("reading bitmap {}", image.display()))?;
            let outcome = run_autoencoder(&config, &source, grayscale, common.mode.into(), common.seed)?;
            write_bmp(&outcome.image, &out).with_context(|| format!("writing bitmap {}", out.display()))?;
            info!("reconstructed image written to {}", out.display());
            finish(&outcome.run, &config, &common)?;
        }

        Commands::Classify { common, images, targets, grayscale } => {
            if images.len() != targets.len() {
                anyhow::bail!("{} image(s) but {} target(s)", images.len(), targets.len());
            }
            let config = load_config(&common.network)?;
            let grids = images
                .iter()
                .map(|path| read_bmp(path).with_context(|| format!("reading bitmap {}", path.display())))
                .collect::<Result<Vec<_>>>()?;
            let targets: Vec<Vec<f64>> = targets.into_iter().map(|t| vec![t]).collect();
            let outcome = run_classifier(&config, &grids, &targets, grayscale, common.mode.into(), common.seed)?;
            finish(&outcome, &config, &common)?;
        }
    }

    Ok(())
}
