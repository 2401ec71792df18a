use std::{fs, process};

use arrowlang::{Interpreter, diagnostic::render, error::Error, parse};
use clap::Parser;

/// arrowlang runs programs written in a small language where data flows left
/// to right through `=>` assignments and `->` calls.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat `contents` as the path of a file to run instead of program text.
    #[arg(short, long)]
    file: bool,

    /// Do not print lexical warnings.
    #[arg(short, long)]
    quiet: bool,

    /// The program text, or a path when `--file` is given.
    contents: String,
}

/// Installs a subscriber writing to standard error, only when `RUST_LOG` is
/// set.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)
                                                        .with_target(true)
                                                        .with_level(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn report(error: &Error, source: &str) {
    match error.position() {
        Some(position) => eprintln!("{}", render(&error.to_string(), position, Some(source))),
        None => eprintln!("{error}"),
    }
}

fn main() {
    init_tracing();
    let args = Args::parse();

    let source = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", &args.contents);
                process::exit(1);
            },
        }
    } else {
        args.contents
    };

    let parsed = match parse(&source) {
        Ok(parsed) => parsed,
        Err(e) => {
            report(&e, &source);
            process::exit(1);
        },
    };

    if !args.quiet {
        for warning in &parsed.warnings {
            eprintln!("{}", render(&warning.to_string(), warning.position(), Some(&source)));
        }
    }

    match Interpreter::new().run(&parsed.program) {
        Ok(code) => {
            let clamped = i32::try_from(code).unwrap_or(if code < 0 { i32::MIN } else { i32::MAX });
            process::exit(clamped);
        },
        Err(e) => {
            report(&Error::from(e), &source);
            process::exit(1);
        },
    }
}
