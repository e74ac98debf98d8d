//! # qrsmith CLI
//!
//! Command-line interface for QR code jobs. Every subcommand reads a JSON
//! job file and writes one output file.
//!
//! ## Usage
//!
//! ```bash
//! # Flat QR code (PNG, JPG, SVG, ... per the "format" option)
//! qrsmith generate --input job.json --output code.png
//!
//! # Rounded dots with a color gradient
//! qrsmith advanced --input job.json --output code.png
//!
//! # Rounded corners / logo / radial shading, on a payload or an existing image
//! qrsmith beautify --input job.json --output pretty.png
//!
//! # Decode an image into a JSON result envelope
//! qrsmith decode --input job.json --output result.json
//! ```
//!
//! Diagnostics go to stderr; set `RUST_LOG=debug` for details.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use qrsmith::{JobRequest, QrsmithError, tools};

/// qrsmith - QR code generator, beautifier and decoder
#[derive(Parser, Debug)]
#[command(name = "qrsmith")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a flat QR code, optionally with a logo
    Generate(JobArgs),

    /// Generate a QR code with gradient-colored rounded dots
    Advanced(JobArgs),

    /// Beautify an existing QR image or a freshly generated one
    Beautify(JobArgs),

    /// Decode QR codes from an image into a JSON envelope
    Decode(JobArgs),
}

#[derive(Args, Debug)]
struct JobArgs {
    /// Path to the input JSON job file
    #[arg(long, value_name = "FILE")]
    input: PathBuf,

    /// Path to the output file
    #[arg(long, value_name = "FILE")]
    output: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), QrsmithError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => {
            let job = JobRequest::from_file(&args.input)?;
            tools::generate::run(&job, &args.output)?;
            println!("QR code generated successfully: {}", args.output.display());
        }
        Commands::Advanced(args) => {
            let job = JobRequest::from_file(&args.input)?;
            tools::advanced::run(&job, &args.output)?;
            println!(
                "Advanced QR code generated successfully: {}",
                args.output.display()
            );
        }
        Commands::Beautify(args) => {
            let job = JobRequest::from_file(&args.input)?;
            tools::beautify::run(&job, &args.output)?;
            println!(
                "Beautiful QR code created successfully: {}",
                args.output.display()
            );
        }
        Commands::Decode(args) => {
            let job = JobRequest::from_file(&args.input)?;
            let count = tools::decode::run(&job, &args.output)?;
            println!("QR code decoded successfully: {} codes found", count);
        }
    }

    Ok(())
}
