//! DLW-1 emulator CLI.
//!
//! This binary runs a pre-assembled DLW-1 program image. It performs:
//! 1. **Logging setup:** Console output plus an optional plain-text log file, each with its own level.
//! 2. **Configuration:** Built-in defaults, optionally a JSON file, then command-line overrides.
//! 3. **Execution:** Loads the program into bank 0 onward and runs until the CPU halts.
//!
//! Exits with status 0 when the program halts and 1 on any error.

use std::error::Error;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use dlw1_core::common::constants::{MAX_BANKS, MIN_BANKS};
use dlw1_core::config::{Config, validate_program_file};
use dlw1_core::sim::TracingObserver;
use dlw1_core::sim::loader;
use dlw1_core::sim::render::{render_cpu, render_memory};
use dlw1_core::Simulator;

#[derive(Parser, Debug)]
#[command(
    name = "dlw1",
    author,
    version,
    about = "DLW-1 CPU microarchitecture emulator",
    long_about = "Run a pre-assembled DLW-1 program image.\n\nThe image is loaded at bank 0, address 0; bytes beyond 256 continue into bank 1, and so on.\n\nExamples:\n  dlw1 -f program.bin\n  dlw1 -f program.bin -b 4 --strict -c debug\n  dlw1 -f program.bin --log-file run.log -l trace --dump-memory"
)]
struct Cli {
    /// Program image to execute.
    #[arg(short, long)]
    file: PathBuf,

    /// Number of 256-byte memory banks (default: 1, range: 1-255).
    #[arg(
        short,
        long,
        value_parser = clap::value_parser!(u8).range(i64::from(MIN_BANKS)..=i64::from(MAX_BANKS))
    )]
    banks: Option<u8>,

    /// JSON configuration file. Command-line flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Console log level [trace, debug, info, warn, error, off].
    #[arg(short = 'c', long, default_value = "info")]
    console_level: LevelFilter,

    /// Log file level [trace, debug, info, warn, error, off].
    #[arg(short = 'l', long, default_value = "debug")]
    file_level: LevelFilter,

    /// Also write logs to this file (no colour).
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Abort after this many cycles without a halt.
    #[arg(long)]
    max_cycles: Option<u64>,

    /// Reject bank switches to banks that do not exist.
    #[arg(long)]
    strict: bool,

    /// Print every memory bank after the run.
    #[arg(long)]
    dump_memory: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.console_level, cli.log_file.as_deref(), cli.file_level) {
        eprintln!("Error: failed to initialise logging: {e}");
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Installs the console layer and, if requested, the file layer.
///
/// `RUST_LOG` takes precedence over `console_level` for the console.
fn init_logging(
    console_level: LevelFilter,
    log_file: Option<&Path>,
    file_level: LevelFilter,
) -> Result<(), Box<dyn Error>> {
    let console_filter = EnvFilter::builder()
        .with_default_directive(console_level.into())
        .from_env_lossy();
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(console_filter);

    let file = match log_file {
        Some(path) => {
            let file = File::create(path)?;
            Some(
                fmt::layer()
                    .with_writer(Arc::new(file))
                    .with_ansi(false)
                    .with_filter(file_level),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(console)
        .with(file)
        .try_init()?;
    Ok(())
}

/// Applies command-line overrides on top of the JSON or default configuration.
fn build_config(cli: &Cli) -> dlw1_core::common::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_json_file(path)?,
        None => Config::default(),
    };

    if let Some(banks) = cli.banks {
        config.memory.num_banks = banks;
    }
    if cli.max_cycles.is_some() {
        config.general.max_cycles = cli.max_cycles;
    }
    if cli.strict {
        config.general.strict = true;
    }
    let file_trace = cli.log_file.is_some() && cli.file_level >= LevelFilter::TRACE;
    if cli.console_level >= LevelFilter::TRACE || file_trace {
        config.general.trace_instructions = true;
    }

    config.validate()?;
    Ok(config)
}

/// Loads and runs the program, then prints the final state and statistics.
fn run(cli: &Cli) -> dlw1_core::common::Result<()> {
    let config = build_config(cli)?;
    validate_program_file(&cli.file)?;

    info!("DLW-1 CPU emulator starting");
    info!("Program file: {}", cli.file.display());
    info!("Memory banks: {}", config.memory.num_banks);
    info!(
        "Console log level: {}, file log level: {}",
        cli.console_level, cli.file_level
    );

    let program = loader::load_binary(&cli.file)?;
    let mut sim = Simulator::new(&config);
    let _ = sim.load_program(&program)?;

    let mut observer = TracingObserver::new(config.general.trace_instructions);
    let summary = sim.run(&mut observer)?;
    info!("Stopped after {} cycles: {}", summary.cycles, summary.reason);

    println!("{}", render_cpu(sim.cpu()));
    println!("{}", sim.stats().summary());
    if cli.dump_memory {
        println!();
        print!("{}", render_memory(sim.memory()));
    }

    Ok(())
}
