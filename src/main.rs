mod catalog;
mod report;
mod writer;

use std::path::PathBuf;

use clap::Parser;
use clap::error::ErrorKind;
use colored::*;

/// Extract unique host:port pairs with SSL/TLS findings from a .nessus report
#[derive(Debug, Parser)]
#[command(name = "nessus-tls-targets", version)]
struct Args {
    /// Path of the .nessus scan export to read
    input: PathBuf,

    /// Path of the target list to write
    output: PathBuf,
}

/// Exit code for an argument-parsing failure: 1 for bad usage (clap's own
/// convention is 2), 0 when the "failure" is --help or --version.
fn usage_exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            std::process::exit(usage_exit_code(e.kind()));
        }
    };

    // Extract before touching the output path, so a bad report never
    // clobbers an existing target list.
    let endpoints = match report::extract_file(&args.input) {
        Ok(endpoints) => endpoints,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = writer::write_targets(&endpoints, &args.output) {
        eprintln!("Error: failed to write {}: {}", args.output.display(), e);
        std::process::exit(1);
    }

    let output = args.output.display();
    println!(
        "Found {} unique vulnerable endpoints. Results written to {}",
        endpoints.len(),
        output
    );
    println!();
    println!(
        "{}",
        "Run testssl.sh against the identified hosts using the following command:".green()
    );
    println!(
        "{}",
        format!("testssl.sh -iL {output} --parallel --csv --html").green()
    );
}
