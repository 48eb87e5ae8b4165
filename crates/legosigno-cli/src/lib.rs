pub mod commands;
pub mod error;
pub mod logging;
pub mod output;

pub use commands::{
    BookmarkCommand, CdCommand, ConfigCommand, InstallCommand, ListCommand, RemoveCommand,
    VisitCommand,
};
pub use error::{CliError, CliResult};
pub use output::{OutputFormat, format_bytes, format_timestamp, format_timestamp_ns};
