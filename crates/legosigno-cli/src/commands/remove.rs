use clap::Parser;
use legosigno::{Config, Session};

use crate::error::CliResult;
use crate::output::OutputFormat;

#[derive(Parser)]
pub struct RemoveCommand {
    #[clap(
        allow_hyphen_values = true,
        help = "Folder index, -N for the Nth visited folder, an exact folder path, or ? to pick from the list"
    )]
    pub target: String,
}

impl RemoveCommand {
    pub fn execute(&self, config: &Config, format: OutputFormat) -> CliResult<()> {
        let mut session = Session::open(config.clone())?;

        let stdin = std::io::stdin();
        let removed = match format {
            OutputFormat::Json => {
                session.remove(&self.target, &mut stdin.lock(), &mut std::io::stderr())?
            }
            OutputFormat::Table => {
                session.remove(&self.target, &mut stdin.lock(), &mut std::io::stdout())?
            }
        };
        session.save()?;

        match format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "target": self.target,
                    "removed": removed.as_ref().map(|entry| entry.path.as_str()),
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Table => match removed {
                Some(entry) => println!("Removed {}", entry.path),
                None => println!("Cancelled."),
            },
        }

        Ok(())
    }
}
