//! CLI command implementations.

use std::fs;
use std::io::{self, Write};

use funge_common::Vector;
use funge_vm::{InstructionTable, OutputSink, Scheduler};

/// Writes program output straight to stdout.
struct StdoutSink {
    out: io::Stdout,
}

impl OutputSink for StdoutSink {
    fn emit(&mut self, ch: char) {
        // stdout may be a closed pipe; output is best-effort.
        let _ = write!(self.out, "{ch}");
    }
}

/// Load and execute a program.
pub fn run(args: &[String]) -> Result<(), i32> {
    if args.is_empty() {
        eprintln!("error: run requires an input file");
        eprintln!("Usage: funge run <program.b98> [--limit N]");
        return Err(1);
    }

    let input = &args[0];

    // Parse --limit flag
    let limit: Option<u64> = if args.len() >= 3 && args[1] == "--limit" {
        match args[2].parse() {
            Ok(n) => Some(n),
            Err(_) => {
                eprintln!("error: --limit expects a number, got '{}'", args[2]);
                return Err(1);
            }
        }
    } else {
        None
    };

    let space = load_file(input)?;

    let table = InstructionTable::standard();
    let mut sink = StdoutSink { out: io::stdout() };
    let mut scheduler = Scheduler::new(space, &table, &mut sink);

    let outcome = match limit {
        Some(max_ticks) => scheduler.run_bounded(max_ticks),
        None => Ok(scheduler.run()),
    };

    match outcome {
        Ok(ticks) => {
            eprintln!("halted after {ticks} tick(s)");
            Ok(())
        }
        Err(e) => {
            eprintln!("runtime error: {e}");
            Err(3)
        }
    }
}

/// Print the loaded grid between its bounds.
pub fn show(args: &[String]) -> Result<(), i32> {
    if args.is_empty() {
        eprintln!("error: show requires an input file");
        eprintln!("Usage: funge show <program.b98>");
        return Err(1);
    }

    let space = load_file(&args[0])?;

    // The loader guarantees a non-empty space.
    if let Some(bounds) = space.bounds() {
        println!(
            "bounds: ({}, {}) to ({}, {})",
            bounds.min().x,
            bounds.min().y,
            bounds.max().x,
            bounds.max().y
        );
        for y in bounds.min().y..=bounds.max().y {
            let mut row = String::new();
            for x in bounds.min().x..=bounds.max().x {
                let cell = space.read(Vector::new(x, y));
                row.push(cell.to_char().unwrap_or(char::REPLACEMENT_CHARACTER));
            }
            println!("{}", row.trim_end());
        }
    }

    Ok(())
}

fn load_file(input: &str) -> Result<funge_space::ProgramSpace, i32> {
    let text = fs::read_to_string(input).map_err(|e| {
        eprintln!("error: cannot read '{input}': {e}");
        1
    })?;

    funge_loader::load(&text).map_err(|e| {
        eprintln!("error: {e}");
        1
    })
}
