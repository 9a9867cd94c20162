use std::fs;
use std::os::unix::fs::symlink;
use std::path::{Path, PathBuf};

use crate::config::{expand_tilde, Config};
use crate::error::{Result, ThemeError};
use crate::output::{display_path, Printer};
use crate::render::ARTIFACT_FILES;

pub fn run(printer: &Printer) -> Result<()> {
    let config = Config::load()?;
    let cache_path = PathBuf::from(expand_tilde(&config.cache_path)?);
    let wal_cache = PathBuf::from(expand_tilde("~/.cache/wal")?);

    link_artifacts(&cache_path, &wal_cache, printer)
}

/// Points pywal's cache at our artifacts so tools that read `~/.cache/wal`
/// pick up the generated theme. Refuses to touch an existing directory.
fn link_artifacts(cache_path: &Path, wal_cache: &Path, printer: &Printer) -> Result<()> {
    if wal_cache.exists() {
        return Err(ThemeError::Config {
            message: format!(
                "pywal cache directory {} already exists",
                display_path(wal_cache)
            ),
            help: Some("Remove it to let theming manage the pywal cache".to_string()),
        });
    }

    fs::create_dir_all(wal_cache).map_err(|e| ThemeError::Io {
        path: wal_cache.to_path_buf(),
        message: format!("Failed to create directory: {}", e),
    })?;

    for name in ARTIFACT_FILES {
        symlink(cache_path.join(name), wal_cache.join(name)).map_err(|e| ThemeError::Io {
            path: wal_cache.join(name),
            message: format!("Failed to create symlink: {}", e),
        })?;
    }

    printer.success("Linked", &display_path(wal_cache));
    Ok(())
}
