//! Pre-initialization validation.
//!
//! Validates target directory state before site creation.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Initialization mode determines validation rules.
#[derive(Debug, Clone, Copy)]
pub enum InitMode {
    /// `folio init` - initialize in current directory (must be empty)
    CurrentDir,
    /// `folio init <name>` - create new subdirectory (must be empty or not exist)
    NewDir,
}

/// Validate target directory for initialization.
///
/// Both modes need an empty or missing directory; the mode picks the hint.
pub fn validate_target(root: &Path, mode: InitMode) -> Result<()> {
    if is_empty(root)? {
        return Ok(());
    }
    match mode {
        InitMode::CurrentDir => bail!(
            "current directory is not empty, \
             use `folio init <name>` to create a site in a new subdirectory"
        ),
        InitMode::NewDir => bail!(
            "directory '{}' is not empty, \
             choose a different name or remove its contents",
            root.display()
        ),
    }
}

/// Check if directory is empty or doesn't exist.
fn is_empty(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    let is_empty = fs::read_dir(path)
        .with_context(|| format!("failed to read directory '{}'", path.display()))?
        .next()
        .is_none();
    Ok(is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_dir_current_mode() {
        let temp = TempDir::new().unwrap();
        assert!(validate_target(temp.path(), InitMode::CurrentDir).is_ok());
    }

    #[test]
    fn test_non_empty_dir_current_mode() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("file.txt"), "content").unwrap();
        assert!(validate_target(temp.path(), InitMode::CurrentDir).is_err());
    }

    #[test]
    fn test_existing_empty_dir_new_mode() {
        let temp = TempDir::new().unwrap();
        assert!(validate_target(temp.path(), InitMode::NewDir).is_ok());
    }

    #[test]
    fn test_non_empty_dir_new_mode() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("folio.toml"), "").unwrap();
        let err = validate_target(temp.path(), InitMode::NewDir).unwrap_err();
        assert!(err.to_string().contains("is not empty"));
    }

    #[test]
    fn test_non_existing_dir_new_mode() {
        let temp = TempDir::new().unwrap();
        let new_path = temp.path().join("new_site");
        assert!(validate_target(&new_path, InitMode::NewDir).is_ok());
    }
}
