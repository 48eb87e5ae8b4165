use clap::Parser;
use legosigno::{Config, session};

use crate::error::CliResult;

#[derive(Parser)]
pub struct VisitCommand {
    #[clap(long, help = "Folder to record instead of the current directory")]
    pub folder: Option<String>,
}

impl VisitCommand {
    /// Runs from the shell prompt, so it prints nothing on success.
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let folder = match &self.folder {
            Some(folder) => folder.clone(),
            None => session::current_dir()?,
        };

        session::record_visit(config, &folder)?;
        Ok(())
    }
}
