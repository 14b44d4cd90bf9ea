use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Make sure `path` may be (re)written: a new file or `--force` pass straight
/// through, an existing export needs a yes on stdin.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("Export file '{}' already exists.", path.display()));
    print!("Replace it with the current log? [y/N]: ");
    io::stdout().flush()?;

    confirm_overwrite(io::stdin().lock())
}

/// Read one answer line; only `y`/`yes` (any case) allows the overwrite.
/// Anything else, including end of input, keeps the existing file.
pub fn confirm_overwrite(mut input: impl BufRead) -> AppResult<()> {
    let mut answer = String::new();
    input.read_line(&mut answer)?;

    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => {
            info("Replacing existing export file.");
            Ok(())
        }
        _ => Err(AppError::Export(
            "existing file kept, rerun with --force to replace it".into(),
        )),
    }
}
