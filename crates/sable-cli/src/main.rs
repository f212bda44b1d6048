//! sable CLI - runs the export pass over the built-in showcase module.
//!
//! The real producer is a host compiler pipeline driving the pass once
//! per module; this binary exists to exercise the exporter end to end
//! (`--test`) and to produce reference documents for consumers.

use std::env;
use std::path::PathBuf;
use std::process;

use sable_export::{ExportOptions, ExportPass, Logger};

mod sample;

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut output: Option<PathBuf> = None;
    let mut verbose = false;
    let mut test = false;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--output" | "-o" => match iter.next() {
                Some(path) => output = Some(PathBuf::from(path)),
                None => {
                    eprintln!("--output requires a path");
                    process::exit(2);
                }
            },
            "--verbose" | "-v" => verbose = true,
            "--test" => test = true,
            "--help" | "-h" => {
                print_usage();
                return;
            }
            "--version" | "-V" => {
                println!("sable 0.1.0");
                return;
            }
            other => {
                eprintln!("Unknown option: {}", other);
                print_usage();
                process::exit(2);
            }
        }
    }

    if Logger::install(verbose, true).is_err() {
        eprintln!("logger installed twice");
        process::exit(2);
    }

    let output = match output {
        Some(path) => path,
        // self-test mode never writes; any placeholder path will do
        None if test => PathBuf::from("sable.json"),
        None => {
            eprintln!("an --output path is required unless --test is given");
            print_usage();
            process::exit(2);
        }
    };

    let module = sample::showcase_module();
    let pass = ExportPass::new(ExportOptions {
        output,
        verbose,
        test,
    });
    if let Err(err) = pass.run(&module) {
        log::error!("{err}");
        process::exit(1);
    }
}

fn print_usage() {
    println!("sable 0.1.0 - IR module exporter");
    println!();
    println!("Usage: sable [options]");
    println!();
    println!("Options:");
    println!("  -o, --output <path>   where to create the JSON document");
    println!("  -v, --verbose         raise the log level to debug");
    println!("      --test            self-test: log the document, write nothing");
    println!("  -h, --help            show this help");
    println!("  -V, --version         show the version");
}
