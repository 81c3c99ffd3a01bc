//! Parquet concatenation and export CLI
//!
//! Usage: dataprep_export [options] [files...]
//!
//! Options:
//!   --output <PATH>  Output file path (default: output_file.json)
//!   --help, -h       Show help
//!
//! Example: dataprep_export part1.parquet part2.parquet --output combined.json
//!
//! Without file arguments the default input list is used.

use dataprep_core::app::export::load_concatenated_with_progress;
use dataprep_core::constants::{DEFAULT_INPUT_FILES, DEFAULT_OUTPUT_PATH};
use dataprep_core::infra::jsonl_io::write_rows;
use std::env;
use std::path::PathBuf;
use std::time::Instant;

struct Args {
    inputs: Vec<PathBuf>,
    output: PathBuf,
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [options] [files...]", program);
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [files...]       Parquet input files, concatenated in the given order");
    eprintln!("                   (default: {:?})", DEFAULT_INPUT_FILES);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --output <PATH>  Output file path (default: {})", DEFAULT_OUTPUT_PATH);
    eprintln!("  --help, -h       Show this help message");
}

fn parse_args() -> Result<Args, String> {
    let args: Vec<String> = env::args().collect();

    let mut inputs: Vec<PathBuf> = Vec::new();
    let mut output: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--output" => {
                i += 1;
                if i >= args.len() {
                    return Err("--output requires a value".to_string());
                }
                output = Some(PathBuf::from(&args[i]));
            }
            "--help" | "-h" => {
                print_usage(&args[0]);
                std::process::exit(0);
            }
            arg if !arg.starts_with('-') => inputs.push(PathBuf::from(arg)),
            _ => return Err(format!("Unknown option: {}", args[i])),
        }
        i += 1;
    }

    if inputs.is_empty() {
        inputs = DEFAULT_INPUT_FILES.iter().map(PathBuf::from).collect();
    }

    Ok(Args {
        inputs,
        output: output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH)),
    })
}

fn main() {
    let args = match parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage(&env::args().next().unwrap_or_default());
            std::process::exit(1);
        }
    };

    println!("Reading {} input file(s)...", args.inputs.len());
    let start = Instant::now();

    let rows = match load_concatenated_with_progress(&args.inputs, |path, count| {
        println!("  {} ({} rows)", path.display(), count);
    }) {
        Ok(rows) => rows,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    println!("Combined {} rows.", rows.len());
    println!("Writing {}...", args.output.display());

    if let Err(e) = write_rows(&args.output, &rows) {
        eprintln!("Error writing {}: {}", args.output.display(), e);
        std::process::exit(1);
    }

    let elapsed = start.elapsed();
    println!("Conversion to JSON completed successfully!");
    println!(
        "Wrote {} rows from {} file(s) in {:.2} seconds.",
        rows.len(),
        args.inputs.len(),
        elapsed.as_secs_f64()
    );
}
