use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::error::CliResult;
use crate::output::OutputFormat;

pub const PROMPT_COMMAND: &str = "PROMPT_COMMAND";
pub const VISIT_HOOK: &str = "legosigno visit";
pub const BLOCK_HEADER: &str = "################### Legosigno Start ###################";
pub const BLOCK_FOOTER: &str = "###################  Legosigno End  ###################";

const CDB_FUNCTION: &str = r#"cdb() { if [ $# -eq 0 ]; then legosigno bookmark; else OUTPUT="$(legosigno cd "$1")"; if [ $? -eq 0 ]; then cd "$OUTPUT"; else echo "legosigno failed. Could not cd to folder $1"; fi; fi }"#;
const CDL_ALIAS: &str = "alias cdl='legosigno list'";
const CDR_ALIAS: &str = "alias cdr='legosigno remove'";

#[derive(Parser)]
pub struct InstallCommand {
    #[clap(long, help = "Shell profile to modify (defaults to ~/.bashrc)")]
    pub profile: Option<PathBuf>,
}

/// What the installer decided to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallPlan {
    /// Append this block to the profile
    Append(String),
    /// PROMPT_COMMAND or the profile already calls the hook
    AlreadyInstalled,
}

/// Shell integration block: the prompt hook plus `cdb`, `cdl` and `cdr`.
/// An existing PROMPT_COMMAND is kept in front of the hook.
pub fn shell_block(existing_prompt_command: Option<&str>) -> String {
    let prompt = match existing_prompt_command.filter(|c| !c.trim().is_empty()) {
        Some(existing) => format!("{existing};{VISIT_HOOK}"),
        None => VISIT_HOOK.to_string(),
    };

    format!(
        "\n{BLOCK_HEADER}\nexport {PROMPT_COMMAND}=\"{prompt}\"\n{CDB_FUNCTION}\n{CDR_ALIAS}\n{CDL_ALIAS}\n{BLOCK_FOOTER}\n"
    )
}

pub fn plan_install(existing_prompt_command: Option<&str>, profile_content: &str) -> InstallPlan {
    let hooked = existing_prompt_command.is_some_and(|c| c.contains(VISIT_HOOK));
    if hooked || profile_content.contains(BLOCK_HEADER) {
        InstallPlan::AlreadyInstalled
    } else {
        InstallPlan::Append(shell_block(existing_prompt_command))
    }
}

impl InstallCommand {
    pub fn execute(&self, format: OutputFormat) -> CliResult<()> {
        let profile = match &self.profile {
            Some(path) => path.clone(),
            None => dirs::home_dir()
                .map(|h| h.join(".bashrc"))
                .ok_or("Unable to determine home directory")?,
        };

        let prompt_command = std::env::var(PROMPT_COMMAND).ok();
        let installed = install(&profile, prompt_command.as_deref())?;

        match format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "profile": profile.display().to_string(),
                    "installed": installed,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Table => {
                if installed {
                    println!("legosigno installed in {}", profile.display());
                    println!("Do \"source {}\" to reload it", profile.display());
                } else {
                    println!("Nothing to do. Seems like PROMPT_COMMAND already calls legosigno");
                }
            }
        }

        Ok(())
    }
}

/// Append the shell block to `profile` unless it is already there.
/// Returns whether the profile was modified.
pub fn install(profile: &Path, prompt_command: Option<&str>) -> CliResult<bool> {
    let content = match std::fs::read_to_string(profile) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(format!("Failed to read {}: {e}", profile.display()).into()),
    };

    match plan_install(prompt_command, &content) {
        InstallPlan::AlreadyInstalled => {
            tracing::info!("Shell hook already present for {}", profile.display());
            Ok(false)
        }
        InstallPlan::Append(block) => {
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(profile)
                .map_err(|e| format!("Failed to open {}: {e}", profile.display()))?;
            file.write_all(block.as_bytes())?;
            tracing::info!("Appended shell hook to {}", profile.display());
            Ok(true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn block_wraps_hook_and_aliases() {
        let block = shell_block(None);

        assert!(block.starts_with(&format!("\n{BLOCK_HEADER}\n")));
        assert!(block.ends_with(&format!("{BLOCK_FOOTER}\n")));
        assert!(block.contains("export PROMPT_COMMAND=\"legosigno visit\""));
        assert!(block.contains("cdb()"));
        assert!(block.contains("alias cdl='legosigno list'"));
        assert!(block.contains("alias cdr='legosigno remove'"));
    }

    #[test]
    fn block_keeps_existing_prompt_command() {
        let block = shell_block(Some("history -a"));
        assert!(block.contains("export PROMPT_COMMAND=\"history -a;legosigno visit\""));
    }

    #[test]
    fn plan_skips_when_hook_already_active() {
        assert_eq!(
            plan_install(Some("history -a;legosigno visit"), ""),
            InstallPlan::AlreadyInstalled
        );
        assert_eq!(
            plan_install(None, &shell_block(None)),
            InstallPlan::AlreadyInstalled
        );
        assert!(matches!(plan_install(None, "# empty\n"), InstallPlan::Append(_)));
    }

    #[test]
    fn install_is_idempotent() {
        let dir = tempdir().unwrap();
        let profile = dir.path().join(".bashrc");
        std::fs::write(&profile, "export EDITOR=vi\n").unwrap();

        assert!(install(&profile, None).unwrap());
        assert!(!install(&profile, None).unwrap());

        let content = std::fs::read_to_string(&profile).unwrap();
        assert!(content.starts_with("export EDITOR=vi\n"));
        assert_eq!(content.matches(BLOCK_HEADER).count(), 1);
    }

    #[test]
    fn install_creates_missing_profile() {
        let dir = tempdir().unwrap();
        let profile = dir.path().join(".bashrc");

        assert!(install(&profile, Some("")).unwrap());
        assert!(
            std::fs::read_to_string(&profile)
                .unwrap()
                .contains("export PROMPT_COMMAND=\"legosigno visit\"")
        );
    }
}
