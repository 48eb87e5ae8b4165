use clap::Parser;
use legosigno::{Config, Session};

use crate::error::CliResult;
use crate::output::OutputFormat;

#[derive(Parser)]
pub struct CdCommand {
    #[clap(
        allow_hyphen_values = true,
        help = "Folder index, -N for the Nth visited folder, or ? to pick from the list"
    )]
    pub target: String,
}

impl CdCommand {
    /// Prints only the resolved folder on stdout so the shell can `cd` to it.
    /// The interactive list goes to stderr.
    pub fn execute(&self, config: &Config, format: OutputFormat) -> CliResult<()> {
        let mut session = Session::open(config.clone())?;
        session.save()?;

        let stdin = std::io::stdin();
        let folder =
            session.resolve_target(&self.target, &mut stdin.lock(), &mut std::io::stderr())?;

        match format {
            OutputFormat::Json => {
                let output = serde_json::json!({ "folder": folder });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Table => println!("{folder}"),
        }

        Ok(())
    }
}
