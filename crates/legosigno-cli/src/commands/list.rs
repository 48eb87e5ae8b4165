use clap::Parser;
use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};
use legosigno::folder::{ListedEntry, Section};
use legosigno::{Config, Session};

use crate::error::CliResult;
use crate::output::{OutputFormat, format_timestamp_ns};

#[derive(Parser)]
pub struct ListCommand {}

impl ListCommand {
    pub fn execute(&self, config: &Config, format: OutputFormat) -> CliResult<()> {
        let mut session = Session::open(config.clone())?;

        let list = session.list();
        let (bookmarks, visits): (Vec<ListedEntry<'_>>, Vec<ListedEntry<'_>>) = list
            .iter()
            .partition(|listed| listed.section == Section::Bookmark);

        match format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "bookmarks": bookmarks.iter().map(|listed| {
                        serde_json::json!({
                            "index": listed.index,
                            "folder": &listed.entry.path,
                            "score": listed.entry.score,
                        })
                    }).collect::<Vec<_>>(),
                    "visits": visits.iter().map(|listed| {
                        serde_json::json!({
                            "index": listed.index,
                            "folder": &listed.entry.path,
                            "last_visit": listed.entry.score,
                        })
                    }).collect::<Vec<_>>(),
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Table => {
                println!("Bookmarks");
                if bookmarks.is_empty() {
                    println!("No bookmarks yet. Run `legosigno bookmark` in a folder to add one.\n");
                } else {
                    let mut table = Table::new();
                    table
                        .load_preset(UTF8_FULL_CONDENSED)
                        .set_content_arrangement(ContentArrangement::Dynamic)
                        .set_header(["#", "Folder", "Bookmarked"]);

                    for listed in &bookmarks {
                        table.add_row([
                            listed.index.to_string(),
                            listed.entry.path.clone(),
                            format!("{}x", listed.entry.score),
                        ]);
                    }
                    println!("{table}\n");
                }

                println!("Visited often");
                if visits.is_empty() {
                    println!("No visited folders recorded.");
                } else {
                    let mut table = Table::new();
                    table
                        .load_preset(UTF8_FULL_CONDENSED)
                        .set_content_arrangement(ContentArrangement::Dynamic)
                        .set_header(["#", "Folder", "Last visit"]);

                    for listed in &visits {
                        table.add_row([
                            listed.index.to_string(),
                            listed.entry.path.clone(),
                            format_timestamp_ns(listed.entry.score),
                        ]);
                    }
                    println!("{table}");
                }
            }
        }

        session.save()?;
        Ok(())
    }
}
