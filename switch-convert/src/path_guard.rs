use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

/// Refuse to write the translation over the config it was read from.
pub fn ensure_output_not_input(output: &Path, input: &Path) -> Result<()> {
    let out_norm = normalize_for_compare(output)
        .with_context(|| format!("failed to normalize output path {}", output.display()))?;
    let in_norm = normalize_for_compare(input)
        .with_context(|| format!("failed to normalize input path {}", input.display()))?;

    if out_norm == in_norm {
        bail!(
            "refusing to overwrite source config: output {} matches input {}",
            output.display(),
            input.display()
        );
    }
    Ok(())
}

fn normalize_for_compare(path: &Path) -> Result<PathBuf> {
    if path.exists() {
        return path
            .canonicalize()
            .with_context(|| format!("canonicalize {}", path.display()));
    }

    // Not on disk yet, so `..` segments stay unresolved.
    let base = if path.is_absolute() {
        PathBuf::new()
    } else {
        std::env::current_dir().context("current_dir")?
    };

    Ok(base.join(path))
}
