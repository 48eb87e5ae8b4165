pub mod bookmark;
pub mod cd;
pub mod config;
pub mod install;
pub mod list;
pub mod remove;
pub mod visit;

pub use bookmark::BookmarkCommand;
pub use cd::CdCommand;
pub use config::ConfigCommand;
pub use install::InstallCommand;
pub use list::ListCommand;
pub use remove::RemoveCommand;
pub use visit::VisitCommand;
