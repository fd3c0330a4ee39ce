// Entrypoint for the console application.
// - Keeps `main` small: parse the command line, set up logging, and hand a
//   terminal console to the navigator.
// - Returns `anyhow::Result` so file-system failures end the process with a
//   diagnostic and a non-zero exit status.

use anyhow::{Context, Result};
use clap::Parser;
use console_app::cli::{Cli, VERSION};
use console_app::console::TerminalConsole;
use console_app::ui::Navigator;
use std::fs::OpenOptions;
use std::time::Instant;

fn main() -> Result<()> {
    let started = Instant::now();
    let cli = Cli::parse();

    // Nothing else is touched when only the version is asked for.
    if cli.version {
        println!("{}", VERSION);
        return Ok(());
    }

    init_logging(&cli)?;

    let cwd = std::env::current_dir().context("Failed to resolve the current directory")?;
    log::info!("starting in {} at {:?}", cwd.display(), cli.start_screen());

    // Blocks until the user picks Exit.
    let mut navigator = Navigator::new(TerminalConsole::new(), cwd, started);
    navigator.run(cli.start_screen())?;
    Ok(())
}

/// Logs go to stderr by default, or to `--log-file` so they stay out of
/// the menus. `RUST_LOG` refines the level given on the command line.
fn init_logging(cli: &Cli) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(cli.log_level).parse_default_env();

    if let Some(path) = &cli.log_file {
        let log_file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(log_file)));
    }

    builder.init();
    Ok(())
}
