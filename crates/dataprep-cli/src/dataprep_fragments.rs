//! Fragment combination enumerator CLI
//!
//! Usage: dataprep_fragments [options]
//!
//! Options:
//!   --group <F,F,...>  Add a fragment group (comma-separated fragments);
//!                      repeatable, replaces the default groups
//!   --count-only       Print only the number of combinations
//!   --help, -h         Show help
//!
//! Example: dataprep_fragments --group lord,"ord ","rd o" --group puti,utin
//!
//! Each combination is printed on its own line, in generation order.

use dataprep_core::app::enumerator::{emit_combinations, expected_combination_count};
use dataprep_core::constants::DEFAULT_FRAGMENT_GROUPS;
use std::env;
use std::io::{self, Write};

struct Args {
    groups: Vec<Vec<String>>,
    count_only: bool,
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [options]", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --group <F,F,...>  Add a fragment group (comma-separated fragments);");
    eprintln!("                     repeatable, replaces the default groups");
    eprintln!("  --count-only       Print only the number of combinations");
    eprintln!("  --help, -h         Show this help message");
    eprintln!();
    eprintln!("Default groups: {:?}", DEFAULT_FRAGMENT_GROUPS);
}

fn parse_group(value: &str) -> Vec<String> {
    value
        .split(',')
        .filter(|fragment| !fragment.is_empty())
        .map(|fragment| fragment.to_string())
        .collect()
}

fn parse_args() -> Result<Args, String> {
    let args: Vec<String> = env::args().collect();

    let mut groups: Vec<Vec<String>> = Vec::new();
    let mut count_only = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--group" => {
                i += 1;
                if i >= args.len() {
                    return Err("--group requires a value".to_string());
                }
                groups.push(parse_group(&args[i]));
            }
            "--count-only" => count_only = true,
            "--help" | "-h" => {
                print_usage(&args[0]);
                std::process::exit(0);
            }
            other => return Err(format!("Unknown option: {}", other)),
        }
        i += 1;
    }

    if groups.is_empty() {
        groups = DEFAULT_FRAGMENT_GROUPS
            .iter()
            .map(|group| group.iter().map(|s| s.to_string()).collect())
            .collect();
    }

    Ok(Args { groups, count_only })
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

    if args.count_only {
        println!("{}", expected_combination_count(&args.groups));
        return;
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if let Err(e) = emit_combinations(&args.groups, &mut out).and_then(|_| out.flush()) {
        eprintln!("Error writing output: {}", e);
        std::process::exit(1);
    }
}
