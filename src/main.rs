//! `human-duration` binary entry point.
//!
//! Prints one formatted line per interval on stdout. All logs go to stderr
//! so the output can be piped.
//!
//! Coverage is excluded because the main function only wires configuration,
//! argument parsing and rendering, each of which is tested in the library.

// Enable the coverage attribute when running with nightly for llvm-cov exclusions
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use human_duration::cli::{help_text, Command};
use human_duration::config::Config;

#[cfg_attr(coverage_nightly, coverage(off))]
fn main() {
    // Initialize logging to stderr only (stdout is for formatted output)
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("LOG_LEVEL")
                .unwrap_or_else(|_| "info".to_string())
                .parse()
                .unwrap_or_else(|_| tracing_subscriber::filter::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    tracing::debug!(
        precision = %config.precision,
        ceiling = ?config.ceiling,
        style = %config.style,
        "Configuration loaded"
    );

    let args: Vec<String> = std::env::args().skip(1).collect();
    let request = match Command::parse(&args) {
        Ok(Command::Help) => {
            print!("{}", help_text());
            return;
        }
        Ok(Command::Format(request)) => request,
        Err(e) => {
            eprintln!("{e}");
            eprint!("{}", help_text());
            std::process::exit(2);
        }
    };

    let lines = match request.render(&config) {
        Ok(lines) => lines,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };
    for line in lines {
        println!("{line}");
    }
}
