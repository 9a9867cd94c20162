//! Color extraction from quantizer text output.
//!
//! The quantizer (ImageMagick's `txt:` writer) emits one line per unique
//! color with coordinates, channel values, and a hex token. Only the hex
//! tokens matter here: every `#` followed by exactly six hex digits, in
//! order of appearance.

use std::sync::LazyLock;

use regex::Regex;

use crate::color::Rgb;

static HEX_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[0-9A-Fa-f]{6}").expect("valid regex"));

/// Scan `text` for `#rrggbb` tokens and return one [`Rgb`] per
/// non-overlapping match, in order.
///
/// Zero matches is an empty vector, not an error; palette composition is
/// what validates the count.
pub fn extract_colors(text: &str) -> Vec<Rgb> {
    HEX_TOKEN
        .find_iter(text)
        .filter_map(|m| Rgb::from_hex(m.as_str()).ok())
        .collect()
}
