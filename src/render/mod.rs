//! Artifact rendering.
//!
//! Each renderer turns a composed palette into the exact text a family of
//! downstream consumers parses. The writers here put those texts on disk;
//! the renderers themselves never touch the filesystem.

mod json;
mod oomox;
mod plain;
mod xresources;

pub use json::render_json;
pub use oomox::render_oomox;
pub use plain::render_plain;
pub use xresources::render_xresources;

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, ThemeError};
use crate::palette::Palette;

/// Artifact file names in the cache directory.
pub const ARTIFACT_FILES: [&str; 4] = [
    "colors",
    "colors.json",
    "colors-oomox",
    "colors.Xresources",
];

/// Render all four artifacts into `cache_dir`.
///
/// `wallpaper` is the source image path recorded in the JSON artifact.
pub fn write_artifacts(cache_dir: &Path, palette: &Palette, wallpaper: &str) -> Result<()> {
    let [plain, json, oomox, xresources] = ARTIFACT_FILES;

    write_text(&cache_dir.join(plain), &render_plain(palette))?;
    write_text(&cache_dir.join(json), &render_json(palette, wallpaper)?)?;
    write_text(&cache_dir.join(oomox), &render_oomox(palette))?;
    write_text(&cache_dir.join(xresources), &render_xresources(palette))?;

    Ok(())
}

/// Write `content` to `path`, replacing any previous artifact.
///
/// The bytes land in a sibling temp file first and are renamed into place,
/// so a concurrent reader never observes a half-written artifact.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    let tmp = temp_sibling(path);

    fs::write(&tmp, content).map_err(|e| ThemeError::Io {
        path: tmp.clone(),
        message: format!("Failed to write artifact: {}", e),
    })?;
    fs::rename(&tmp, path).map_err(|e| ThemeError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to finalize artifact: {}", e),
    })?;

    Ok(())
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("artifact"));
    name.push(".tmp");
    path.with_file_name(name)
}
