//! The canonical 16-slot palette.

use std::ops::Index;

use crate::color::Rgb;

/// An ordered set of exactly 16 colors, indices 0-15.
///
/// Slot 0 is conventionally the background, slot 7 the foreground; the
/// remaining slots follow ANSI terminal color positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette([Rgb; Palette::LEN]);

impl Palette {
    /// Slot count; composition fails fast below this many raw colors.
    pub const LEN: usize = 16;

    pub fn new(slots: [Rgb; Palette::LEN]) -> Self {
        Self(slots)
    }

    /// Slot 0, the background color.
    pub fn background(&self) -> Rgb {
        self.0[0]
    }

    /// Slot 7, the foreground color.
    pub fn foreground(&self) -> Rgb {
        self.0[7]
    }

    pub fn iter(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.0.iter().copied()
    }
}

impl Index<usize> for Palette {
    type Output = Rgb;

    fn index(&self, slot: usize) -> &Rgb {
        &self.0[slot]
    }
}

/// Which rendition of the palette to compose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Palette {
        let mut slots = [Rgb::default(); Palette::LEN];
        for (i, slot) in slots.iter_mut().enumerate() {
            *slot = Rgb::new(i as u8, 0, 0);
        }
        Palette::new(slots)
    }

    #[test]
    fn test_background_is_slot_zero() {
        assert_eq!(sample().background(), Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_foreground_is_slot_seven() {
        assert_eq!(sample().foreground(), Rgb::new(7, 0, 0));
    }

    #[test]
    fn test_indexing() {
        let p = sample();
        assert_eq!(p[15], Rgb::new(15, 0, 0));
    }

    #[test]
    fn test_iter_order() {
        let reds: Vec<u8> = sample().iter().map(|c| c.r).collect();
        assert_eq!(reds, (0..16).collect::<Vec<u8>>());
    }
}
