//! Funge CLI — load, run, and inspect Funge programs.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Input/load error
//! - 3: Tick budget exhausted

mod commands;

use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "run" => commands::run(&args[2..]),
        "show" => commands::show(&args[2..]),
        "--help" | "-h" | "help" => {
            print_usage();
            process::exit(0);
        }
        other => {
            eprintln!("error: unknown command '{other}'");
            eprintln!();
            print_usage();
            process::exit(1);
        }
    };

    if let Err(code) = result {
        process::exit(code);
    }
}

fn print_usage() {
    eprintln!("Usage: funge <command> [args]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  run <program.b98> [--limit N]   Load and execute a program");
    eprintln!("  show <program.b98>              Print the loaded grid and its bounds");
}
