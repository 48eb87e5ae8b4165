use clap::Parser;
use legosigno::folder::BookmarkOutcome;
use legosigno::{Config, Session, session};

use crate::error::CliResult;
use crate::output::OutputFormat;

#[derive(Parser)]
pub struct BookmarkCommand {
    #[clap(long, help = "Folder to bookmark instead of the current directory")]
    pub folder: Option<String>,
}

impl BookmarkCommand {
    pub fn execute(&self, config: &Config, format: OutputFormat) -> CliResult<()> {
        let folder = match &self.folder {
            Some(folder) => folder.clone(),
            None => session::current_dir()?,
        };

        let mut session = Session::open(config.clone())?;
        let outcome = session.bookmark(&folder);
        session.save()?;

        let score = match outcome {
            BookmarkOutcome::Added => 1,
            BookmarkOutcome::Bumped(score) => score,
        };

        match format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "folder": folder,
                    "score": score,
                    "new": outcome == BookmarkOutcome::Added,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Table => match outcome {
                BookmarkOutcome::Added => println!("Bookmarked {folder}"),
                BookmarkOutcome::Bumped(score) => {
                    println!("{folder} is already bookmarked (bookmarked {score} times)")
                }
            },
        }

        Ok(())
    }
}
