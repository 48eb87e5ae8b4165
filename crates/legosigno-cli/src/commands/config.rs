use clap::Parser;
use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};
use legosigno::Config;
use legosigno::config::CONFIG_FILENAME;
use legosigno::storage::{AppendLog, JsonStore};

use crate::error::CliResult;
use crate::output::{OutputFormat, format_bytes};

#[derive(Parser)]
pub struct ConfigCommand {}

impl ConfigCommand {
    pub fn execute(&self, config: &Config, format: OutputFormat) -> CliResult<()> {
        let storage = &config.storage;
        let store_path = JsonStore::new(config.data_dir()).path().to_path_buf();
        let log = AppendLog::new(config.data_dir());
        let log_size = log.size()?;
        let config_file = config.data_dir().join(CONFIG_FILENAME);

        match format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "data_dir": config.data_dir().display().to_string(),
                    "config_file": config_file.exists().then(|| config_file.display().to_string()),
                    "store_file": store_path.display().to_string(),
                    "visited_log": log.path().display().to_string(),
                    "visited_log_bytes": log_size,
                    "max_visited_folders": storage.max_visited_folders,
                    "listed_visits": storage.listed_visits,
                    "log_threshold_bytes": storage.log_threshold_bytes,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Table => {
                if config_file.exists() {
                    println!("Configuration from: {}", config_file.display());
                } else {
                    println!("Configuration: (using defaults)");
                }
                println!("==============================\n");

                let mut table = Table::new();
                table
                    .load_preset(UTF8_FULL_CONDENSED)
                    .set_content_arrangement(ContentArrangement::Dynamic)
                    .set_header(["Setting", "Value"]);

                table.add_row(["data_dir", &config.data_dir().display().to_string()]);
                table.add_row(["store_file", &store_path.display().to_string()]);
                table.add_row(["visited_log", &log.path().display().to_string()]);
                table.add_row(["visited_log_size", &format_bytes(log_size)]);
                table.add_row([
                    "max_visited_folders",
                    &storage.max_visited_folders.to_string(),
                ]);
                table.add_row(["listed_visits", &storage.listed_visits.to_string()]);
                table.add_row([
                    "log_threshold_bytes",
                    &format_bytes(storage.log_threshold_bytes),
                ]);

                println!("{table}");
            }
        }

        Ok(())
    }
}
