//! Oomox theme file output.
//!
//! Key-value lines consumed by oomox/themix theme and icon generators.
//! Values are bare hex with no leading `#`.

use crate::color::Rgb;
use crate::palette::Palette;

/// Render the `colors-oomox` artifact.
pub fn render_oomox(palette: &Palette) -> String {
    let bg = bare_hex(palette.background());
    let fg = bare_hex(palette.foreground());
    let sel_bg = bare_hex(palette[1]);
    let btn_bg = bare_hex(palette[4]);
    let wm_border_focus = bare_hex(palette[1]);
    let icons_light_folder = bare_hex(palette[2]);
    let icons_light = bare_hex(palette[3]);
    let icons_medium = bare_hex(palette[4]);
    let icons_dark = bare_hex(palette[5]);

    let mut out = String::new();
    out.push_str("NAME=\"Theme\"\n");
    out.push_str("NOGUI=True\n");
    out.push_str(&format!("BG={bg}\n"));
    out.push_str(&format!("FG={fg}\n"));
    out.push_str(&format!("TXT_BG={bg}\n"));
    out.push_str(&format!("TXT_FG={fg}\n"));
    out.push_str(&format!("SEL_BG={sel_bg}\n"));
    out.push_str(&format!("SEL_FG={bg}\n"));
    out.push_str(&format!("HDR_BG={bg}\n"));
    out.push_str(&format!("HDR_FG={fg}\n"));
    out.push_str(&format!("BTN_BG={btn_bg}\n"));
    out.push_str(&format!("BTN_FG={bg}\n"));
    out.push_str(&format!("WM_BORDER_FOCUS={wm_border_focus}\n"));
    out.push_str(&format!("ICONS_LIGHT_FOLDER={icons_light_folder}\n"));
    out.push_str(&format!("ICONS_LIGHT={icons_light}\n"));
    out.push_str(&format!("ICONS_MEDIUM={icons_medium}\n"));
    // No trailing newline; oomox sources the file as-is.
    out.push_str(&format!("ICONS_DARK={icons_dark}"));
    out
}

fn bare_hex(color: Rgb) -> String {
    format!("{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}
