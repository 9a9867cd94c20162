//! Palette composition: slot remapping and tone adjustment.
//!
//! The quantizer hands back colors ordered by its own ranking; remapping
//! rearranges them into ANSI slot positions, then the tone pass shapes
//! the result for a dark or light terminal.

use crate::color::Rgb;
use crate::error::{Result, ThemeError};
use crate::palette::{Palette, ThemeMode};

/// Near-white blended into foreground slots in dark mode.
const NEAR_WHITE: Rgb = Rgb::new(0xEE, 0xEE, 0xEE);

/// Compose a 16-slot palette from raw quantizer colors.
///
/// Fewer than 16 raw colors is fatal; extras beyond 16 are ignored.
pub fn compose(raw: &[Rgb], mode: ThemeMode) -> Result<Palette> {
    let remapped = remap(raw)?;
    let adjusted = match mode {
        ThemeMode::Dark => adjust_dark(remapped),
        ThemeMode::Light => adjust_light(remapped),
    };
    Ok(Palette::new(adjusted))
}

/// Rearrange raw colors into slot order.
///
/// Slot 0 keeps the first raw color, slots 1-8 take raw colors 8-15,
/// and slots 9-15 repeat raw colors 1-7. All reads go against the raw
/// input, so the swap halves never see each other's writes.
fn remap(raw: &[Rgb]) -> Result<[Rgb; Palette::LEN]> {
    if raw.len() < Palette::LEN {
        return Err(ThemeError::NotEnoughColors {
            found: raw.len(),
            need: Palette::LEN,
        });
    }

    let mut slots = [Rgb::default(); Palette::LEN];
    slots[0] = raw[0];
    for (i, slot) in slots.iter_mut().enumerate().take(9).skip(1) {
        *slot = raw[i + 7];
    }
    for (i, slot) in slots.iter_mut().enumerate().skip(9) {
        *slot = raw[i - 8];
    }
    Ok(slots)
}

/// Deepen the background and soften the foregrounds for dark terminals.
fn adjust_dark(mut slots: [Rgb; Palette::LEN]) -> [Rgb; Palette::LEN] {
    slots[0] = slots[0].darken(0.4);
    slots[7] = slots[7].blend(NEAR_WHITE);
    slots[8] = slots[8].darken(0.3);
    slots[15] = slots[15].blend(NEAR_WHITE);
    slots
}

/// Invert the tonal roles for light terminals.
///
/// Every slot is lightened, but the background/foreground overrides are
/// taken from a snapshot of the slots before that pass, so the dark
/// foreground comes out of the original background color.
fn adjust_light(slots: [Rgb; Palette::LEN]) -> [Rgb; Palette::LEN] {
    let base = slots;
    let mut out = slots.map(|c| c.lighten(0.5));
    out[0] = base[15].lighten(0.85);
    out[7] = base[0];
    out[8] = base[15].darken(0.4);
    out[15] = base[0];
    out
}
