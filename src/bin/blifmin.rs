//! blifmin - Command Line Interface
//!
//! Reads a BLIF file, minimizes every gate's cover, and writes the
//! updated model to stdout.

use blifmin::{BlifReader, BlifWriter, Minimizable, Model};
use clap::{Parser, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

#[derive(Debug, Clone, ValueEnum)]
enum Command {
    /// Minimize every gate's cover (default)
    Minimize,
    /// Echo the parsed model without modification
    Echo,
    /// Print per-gate statistics about the model
    Stats,
}

#[derive(Parser, Debug)]
#[command(name = "blifmin")]
#[command(about = "Two-level BLIF logic minimizer", long_about = None)]
#[command(version)]
struct Args {
    /// Input BLIF file (required)
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Subcommand to execute
    #[arg(short = 'D', long = "do", value_enum, default_value = "minimize")]
    command: Command,

    /// Provide execution summary
    #[arg(short = 's', long = "summary")]
    summary: bool,

    /// Suppress printing of the resulting model
    #[arg(short = 'x', long = "no-output")]
    no_output: bool,

    /// Output file (writes to stdout if not specified)
    #[arg(short = 'O', long = "out-file")]
    output_file: Option<PathBuf>,

    /// Verbosity level
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn model_summary(model: &Model) -> String {
    let cubes: usize = model.gates().iter().map(|g| g.cover().len()).sum();
    format!(
        "{}: {} gates, {} cubes",
        model.name(),
        model.gates().len(),
        cubes
    )
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let model = match Model::from_blif_file(&args.input) {
        Ok(model) => model,
        Err(e) => {
            eprintln!("Error reading BLIF file '{}': {}", args.input.display(), e);
            process::exit(1);
        }
    };

    if args.summary {
        eprintln!("Input  {}", model_summary(&model));
    }

    let result = match args.command {
        Command::Minimize => model.minimize(),
        Command::Echo => model,
        Command::Stats => {
            println!("Model statistics for '{}':", model.name());
            for gate in model.gates() {
                println!(
                    "  {:<16} {} inputs, {} cubes, cost {}",
                    gate.output(),
                    gate.inputs().len(),
                    gate.cover().len(),
                    gate.cover().cost()
                );
            }
            if args.no_output {
                process::exit(0);
            }
            model
        }
    };

    if args.summary {
        eprintln!("Output {}", model_summary(&result));
    }

    if !args.no_output {
        if let Some(ref output_path) = args.output_file {
            if let Err(e) = result.to_blif_file(output_path) {
                eprintln!("Error writing output file: {}", e);
                process::exit(1);
            }
        } else {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            if let Err(e) = result.write_blif(&mut handle) {
                eprintln!("Error writing to stdout: {}", e);
                process::exit(1);
            }
            let _ = handle.flush();
        }
    }
}
