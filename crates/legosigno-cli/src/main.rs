use std::path::PathBuf;

use clap::{Parser, Subcommand};
use legosigno::Config;
use legosigno_cli::commands::{
    BookmarkCommand, CdCommand, ConfigCommand, InstallCommand, ListCommand, RemoveCommand,
    VisitCommand,
};
use legosigno_cli::error::CliResult;
use legosigno_cli::logging::init_logging;
use legosigno_cli::output::OutputFormat;

#[derive(Parser)]
#[command(name = "legosigno")]
#[command(about = "Folder bookmarks and often-visited folders for your shell")]
#[command(
    long_about = "Legosigno keeps two lists of folders: folders you bookmark by hand and \
folders you visit often, recorded from the shell prompt. Both are numbered in one list \
so you can jump back by index. Run `legosigno install` to add the prompt hook and the \
cdb/cdl/cdr shortcuts to ~/.bashrc."
)]
#[command(version)]
pub struct Cli {
    #[clap(long, short, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[clap(
        long,
        short = 'd',
        global = true,
        help = "Path to data directory (overrides LEGOSIGNO_CONF)"
    )]
    pub data_dir: Option<PathBuf>,

    #[clap(
        long,
        short = 'v',
        global = true,
        default_value = "0",
        value_parser = clap::value_parser!(u8).range(0..=3),
        help = "Verbosity from 0 (errors only) to 3 (trace); logs go to stderr"
    )]
    pub verbose: u8,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[clap(about = "Record the current folder as visited (used by the prompt hook)")]
    Visit(VisitCommand),

    #[clap(about = "Bookmark the current folder")]
    Bookmark(BookmarkCommand),

    #[clap(about = "Show bookmarks and the most recently visited folders")]
    List(ListCommand),

    #[clap(about = "Print the folder for an index so the shell can cd to it")]
    Cd(CdCommand),

    #[clap(about = "Remove a bookmarked or visited folder")]
    Remove(RemoveCommand),

    #[clap(about = "Add the prompt hook and shortcuts to your shell profile")]
    Install(InstallCommand),

    #[clap(about = "Show the resolved configuration")]
    Config(ConfigCommand),
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Table
    };

    let load_config = || -> CliResult<Config> {
        let config = Config::load(cli.data_dir.clone())?;
        tracing::debug!("Using storage directory {}", config.data_dir().display());
        Ok(config)
    };

    match &cli.command {
        Command::Visit(cmd) => cmd.execute(&load_config()?),
        Command::Bookmark(cmd) => cmd.execute(&load_config()?, format),
        Command::List(cmd) => cmd.execute(&load_config()?, format),
        Command::Cd(cmd) => cmd.execute(&load_config()?, format),
        Command::Remove(cmd) => cmd.execute(&load_config()?, format),
        Command::Install(cmd) => cmd.execute(format),
        Command::Config(cmd) => cmd.execute(&load_config()?, format),
    }
}
