//! Plain color list, one `#rrggbb` per line.

use crate::palette::Palette;

/// Render the `colors` artifact: slots 0-15 in order, newline-terminated.
pub fn render_plain(palette: &Palette) -> String {
    let mut out = String::new();
    for color in palette.iter() {
        out.push_str(&color.to_string());
        out.push('\n');
    }
    out
}
