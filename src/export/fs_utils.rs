// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Guard before writing `path`: a missing file, or `force`, goes through;
/// an existing one needs an explicit "y" from the operator.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if force || !path.exists() {
        return Ok(());
    }

    warning(format!("{} already exists", path.display()));
    if confirm("Overwrite? [y/N]: ", io::stdin().lock())? {
        log::info!("overwriting {}", path.display());
        return Ok(());
    }

    Err(AppError::Export(format!(
        "Not overwritten: {} (use --force)",
        path.display()
    )))
}

fn confirm(prompt: &str, mut input: impl BufRead) -> AppResult<bool> {
    print!("{prompt}");
    io::stdout().flush().ok();

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
