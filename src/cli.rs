// Command-line surface. Parsing only; `main.rs` decides what to do with it.

use crate::ui::Screen;
use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

/// Version printed by `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[clap(
    name = "console-app",
    about = "A interactive console application with multiple options",
    disable_version_flag = true
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Option<Commands>,

    /// Print the version and exit
    #[clap(short = 'V', long, action = ArgAction::SetTrue)]
    pub version: bool,

    #[clap(
        long,
        default_value = "warn",
        help = "Log level: off, error, warn, info, debug or trace"
    )]
    pub log_level: LevelFilter,

    #[clap(long, help = "Append log records to this file instead of stderr")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// File operations menu
    Files,
    /// Calculator operations
    Calc,
    /// System information
    System,
}

impl Cli {
    /// Screen the navigator starts on.
    pub fn start_screen(&self) -> Screen {
        match self.command {
            None => Screen::Main,
            Some(Commands::Files) => Screen::Files,
            Some(Commands::Calc) => Screen::Calculator,
            Some(Commands::System) => Screen::SystemInfo,
        }
    }
}
