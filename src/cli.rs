//! Command-line surface.
//!
//! Every invocation records its own run first (unless `--no-record` is given
//! or the command records on someone else's behalf), then executes the
//! requested command. A failed recording is reported and otherwise ignored.

use anyhow::Context;
use clap::{Parser, Subcommand};
use runlog_core::config::Config;
use runlog_core::report::{self, ViewOptions};
use runlog_core::{source, LogStore, SourceInfo};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "runlog",
    about = "runlog — numbered execution log across current and legacy files"
)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/runlog/config.toml.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Resolve relative log locations against this directory.
    #[arg(long, global = true)]
    pub base_dir: Option<PathBuf>,

    /// Do not record this invocation.
    #[arg(long, global = true)]
    pub no_record: bool,

    /// Log debug events to stderr (RUST_LOG overrides).
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Record a run on behalf of another program.
    Record {
        /// Path of the program that ran. Defaults to this executable.
        #[arg(long)]
        source: Option<PathBuf>,
    },
    /// Show the merged log, newest first (default).
    Log {
        #[arg(long)]
        json: bool,
        /// Add the full source path column.
        #[arg(long)]
        paths: bool,
        /// Show at most N rows.
        #[arg(long, value_name = "N")]
        limit: Option<usize>,
    },
    /// Show run count, newest/oldest run and most frequent sources.
    Stats {
        #[arg(long)]
        json: bool,
    },
    /// Show what each known log location contains.
    Locations {
        #[arg(long)]
        json: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Log {
            json: false,
            paths: false,
            limit: None,
        }
    }
}

/// Install the stderr subscriber. Defaults to `warn`, `--debug` raises it.
pub fn init_tracing(debug: bool) {
    let default = if debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default)),
        )
        .init();
}

/// Resolve configuration for `cli`: explicit file, else the user config
/// (falling back to built-in defaults), then the `--base-dir` override.
pub fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "using built-in config");
            Config::defaults()
        }),
    };
    if let Some(dir) = &cli.base_dir {
        config.store.base_dir = Some(dir.clone());
    }
    Ok(config)
}

/// Entry point used by `main`.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;
    let stdout = io::stdout();
    let stderr = io::stderr();
    execute(&cli, &config, &mut stdout.lock(), &mut stderr.lock())
}

/// Run `cli` against `config`, writing reports to `out` and status lines to
/// `err`.
pub fn execute(
    cli: &Cli,
    config: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> anyhow::Result<()> {
    let store = LogStore::from_config(config)?;
    let command = cli.command.clone().unwrap_or_default();

    if !cli.no_record && !matches!(command, Command::Record { .. }) {
        record(&store, &source::identify(None), err)?;
    }

    match command {
        Command::Record { source: program } => {
            record(&store, &source::identify(program.as_deref()), err)?;
        }
        Command::Log { json, paths, limit } => {
            let view = store.merged_view();
            if json {
                report::render_json(out, &view)?;
            } else {
                let opts = ViewOptions {
                    show_paths: paths || config.report.show_paths,
                    limit,
                };
                report::render_view(out, &view, opts)?;
            }
        }
        Command::Stats { json } => {
            let stats = store.statistics();
            if json {
                report::render_json(out, &stats)?;
            } else {
                report::render_statistics(out, stats.as_ref())?;
            }
        }
        Command::Locations { json } => {
            let reports = store.inspect_locations();
            if json {
                report::render_json(out, &reports)?;
            } else {
                report::render_locations(out, &reports)?;
            }
        }
    }
    Ok(())
}

/// Record one run; a store failure is printed, not returned.
fn record(store: &LogStore, source: &SourceInfo, err: &mut dyn Write) -> io::Result<()> {
    match store.record_run(source) {
        Ok(entry) => writeln!(
            err,
            "✓ logged run #{} for {}",
            entry.sequence, entry.source_name
        ),
        Err(e) => {
            tracing::warn!(error = %e, "run not logged");
            writeln!(err, "✗ could not write run log: {e}")
        }
    }
}
