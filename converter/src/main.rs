//! kicad2neoden CLI - Convert a KiCad position file to NeoDen4 CSV
//!
//! ```bash
//! kicad2neoden board-all-pos.csv neoden.csv          # convert
//! kicad2neoden -v board-all-pos.csv neoden.csv       # with progress logs
//! kicad2neoden --json board-all-pos.csv neoden.csv   # print summary as JSON
//! ```

use clap::Parser;
use kicad2neoden::{convert_file, logging};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kicad2neoden")]
#[command(about = "Convert a KiCad position file (CSV) to NeoDen4 CSV format", long_about = None)]
struct Cli {
    /// Input file (KiCad CSV position file)
    input: PathBuf,

    /// Output filename
    output: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Print the conversion summary as JSON on stdout
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    logging::init_logging(logging::level_for(cli.verbose, cli.quiet));

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let summary = convert_file(&cli.input, &cli.output)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else if !cli.quiet {
        eprintln!(
            "Converted {} components: {} -> {}",
            summary.rows,
            cli.input.display(),
            cli.output.display()
        );
        if !summary.unmatched_packages.is_empty() {
            eprintln!(
                "Footprints passed through unchanged: {}",
                summary.unmatched_packages.join(", ")
            );
        }
    }

    Ok(())
}
