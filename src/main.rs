use clap::Parser;
use runlog::cli::{self, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli::init_tracing(cli.debug);
    tracing::debug!(command = ?cli.command, "runlog started");
    cli::run(cli)
}
