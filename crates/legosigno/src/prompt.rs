//! Interactive questions asked on the terminal
//!
//! Generic over the reader and writer so the CLI can pass stdin/stderr and
//! tests can script the answers.

use std::io::{BufRead, Write};

use crate::error::{LegosignoError, Result};
use crate::folder::{Section, Selection, UnifiedList};

/// Ask a yes/no question until the answer is one of `y`, `yes`, `n`, `no`.
/// End of input counts as no.
pub fn confirm<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> Result<bool> {
    loop {
        writeln!(output, "{question} (y/n)")?;
        output.flush()?;

        let mut answer = String::new();
        if input.read_line(&mut answer)? == 0 {
            return Ok(false);
        }

        match answer.trim().to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => continue,
        }
    }
}

/// Numbered plain-text listing, bookmarks first.
pub fn write_listing<W: Write>(output: &mut W, list: UnifiedList<'_>) -> Result<()> {
    writeln!(output)?;
    writeln!(output, "Bookmarks:")?;
    writeln!(output, "----------")?;
    for listed in list.iter().filter(|l| l.section == Section::Bookmark) {
        writeln!(output, " {}) {}", listed.index, listed.entry.path)?;
    }

    writeln!(output)?;
    writeln!(output, "Visited often:")?;
    writeln!(output, "--------------")?;
    for listed in list.iter().filter(|l| l.section == Section::Visited) {
        writeln!(output, " {}) {}", listed.index, listed.entry.path)?;
    }
    writeln!(output)?;
    Ok(())
}

/// Show the list and read the index of the folder to act on.
pub fn read_selection<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    list: UnifiedList<'_>,
    action: &str,
) -> Result<Selection> {
    write_listing(output, list)?;
    writeln!(output, "which folder do you want to {action}?")?;
    output.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        return Err(LegosignoError::InvalidSelection(
            "no folder index entered".to_string(),
        ));
    }

    let answer = answer.trim();
    let number = answer.parse::<i64>().map_err(|_| {
        LegosignoError::InvalidSelection(format!("expected a folder index, got {answer:?}"))
    })?;

    if number < 0 {
        return Ok(Selection::Visited(number.unsigned_abs() as usize));
    }

    let index = number as usize;
    if index >= list.len() {
        return Err(LegosignoError::InvalidSelection(format!(
            "Invalid bookmark index {index}"
        )));
    }
    Ok(Selection::Index(index))
}
