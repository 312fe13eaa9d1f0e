//! Cache index-bit selection and simulation CLI.
//!
//! This binary runs one analysis per invocation. It performs:
//! 1. **Load:** Reads the parameter file (text or `.json`) and the trace file.
//! 2. **Select and simulate:** Picks the index bits from the trace and replays it through
//!    the LRU cache.
//! 3. **Report:** Writes the report as text or JSON to a file or stdout, and optionally a
//!    statistics block to stderr.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use idxsim_core::sim::loader;
use idxsim_core::{Error, Report, Result};

#[derive(Parser, Debug)]
#[command(
    name = "idxsim",
    author,
    version,
    about = "Select cache index bits for a trace and simulate an LRU cache",
    long_about = "Reads cache parameters and a memory reference trace, chooses the address bits \
                  used as the set index, then replays the trace through a set-associative LRU \
                  cache and reports a hit/miss verdict per reference.\n\nExamples:\n  \
                  idxsim cache.org trace.lst\n  \
                  idxsim cache.org trace.lst report.rpt\n  \
                  idxsim params.json trace.lst --format json --stats"
)]
struct Cli {
    /// Parameter file (`Key: value` pairs, or JSON when the name ends in `.json`).
    params: PathBuf,

    /// Trace file (`.benchmark <name>`, addresses, `.end`).
    trace: PathBuf,

    /// Report destination; stdout when omitted.
    output: Option<PathBuf>,

    /// Report format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Print run statistics to stderr.
    #[arg(long)]
    stats: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Plain text report.
    Text,
    /// Pretty-printed JSON report.
    Json,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = cmd_run(&cli) {
        eprintln!("[!] FATAL: {e}");
        process::exit(1);
    }
}

/// Installs a stderr `fmt` subscriber; `RUST_LOG` overrides the `-v` level.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Loads inputs, runs the analysis and emits the report.
fn cmd_run(cli: &Cli) -> Result<()> {
    let params = loader::load_params(&cli.params)?;
    let geometry = params.validate()?;
    let trace = loader::load_trace(&cli.trace, geometry.address_bits)?;

    let report = idxsim_core::run(&params, &trace)?;
    let rendered = render(&report, cli.format)?;

    match &cli.output {
        Some(path) => {
            write_file(path, &rendered)?;
            debug!(path = %path.display(), "report written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|source| Error::Io {
                    path: PathBuf::from("<stdout>"),
                    source,
                })?;
        }
    }

    if cli.stats {
        eprint!("{}", report.stats);
    }
    Ok(())
}

fn render(report: &Report, format: Format) -> Result<String> {
    match format {
        Format::Text => Ok(report.to_string()),
        Format::Json => report.to_json().map(|mut json| {
            json.push('\n');
            json
        }),
    }
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
