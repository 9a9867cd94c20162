//! JSON color file.
//!
//! Mirrors the layout wal writes to `colors.json`, so tools that read
//! wal's cache can consume ours: wallpaper path, alpha, the special
//! background/foreground/cursor block, then color0-color15 in slot order.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::ser::PrettyFormatter;

use crate::error::{Result, ThemeError};
use crate::palette::Palette;

/// Render the `colors.json` artifact.
///
/// `wallpaper` is the source image path, recorded JSON-escaped.
pub fn render_json(palette: &Palette, wallpaper: &str) -> Result<String> {
    let doc = ColorFile { wallpaper, palette };

    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    doc.serialize(&mut ser).map_err(|e| ThemeError::Parse {
        message: format!("Failed to serialize colors: {}", e),
        help: None,
    })?;

    Ok(String::from_utf8(buf).expect("serde_json writes valid UTF-8"))
}

struct ColorFile<'a> {
    wallpaper: &'a str,
    palette: &'a Palette,
}

// Serialized by hand so "color10" stays after "color9"; a derived map
// would be re-sorted lexicographically.
impl Serialize for ColorFile<'_> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry("wallpaper", self.wallpaper)?;
        map.serialize_entry("alpha", &100)?;
        map.serialize_entry("special", &Special(self.palette))?;
        map.serialize_entry("colors", &Colors(self.palette))?;
        map.end()
    }
}

struct Special<'a>(&'a Palette);

impl Serialize for Special<'_> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let bg = self.0.background().to_string();
        let fg = self.0.foreground().to_string();

        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("background", &bg)?;
        map.serialize_entry("foreground", &fg)?;
        map.serialize_entry("cursor", &fg)?;
        map.end()
    }
}

struct Colors<'a>(&'a Palette);

impl Serialize for Colors<'_> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(Palette::LEN))?;
        for (i, color) in self.0.iter().enumerate() {
            map.serialize_entry(&format!("color{i}"), &color.to_string())?;
        }
        map.end()
    }
}
