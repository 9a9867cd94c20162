//! Xresources output.
//!
//! Resource lines for xrdb covering generic X applications, URxvt,
//! XTerm, emacs, and XClock. Column spacing matches what the historic
//! consumers were written against, so it is preserved byte for byte.

use crate::color::Rgb;
use crate::palette::Palette;

/// Render the `colors.Xresources` artifact.
pub fn render_xresources(palette: &Palette) -> String {
    let fg = palette.foreground();
    let bg = palette.background();
    let clock = rgba(fg);

    let mut out = String::new();
    out.push_str("! X colors.\n");
    out.push_str(&format!("*foreground:        {fg}\n"));
    out.push_str(&format!("*background:        {bg}\n"));
    out.push_str(&format!("*.foreground:       {fg}\n"));
    out.push_str(&format!("*.background:       {bg}\n"));
    out.push_str(&format!("emacs*foreground:   {fg}\n"));
    out.push_str(&format!("emacs*background:   {bg}\n"));
    out.push_str(&format!("URxvt*foreground:   {fg}\n"));
    out.push_str(&format!("XTerm*foreground:   {fg}\n"));
    out.push_str(&format!("UXTerm*foreground:  {fg}\n"));
    out.push_str(&format!("URxvt*background:   [100]{bg}\n"));
    out.push_str(&format!("XTerm*background:   {bg}\n"));
    out.push_str(&format!("UXTerm*background:  {bg}\n"));
    out.push_str(&format!("URxvt*cursorColor:  {fg}\n"));
    out.push_str(&format!("XTerm*cursorColor:  {fg}\n"));
    out.push_str(&format!("UXTerm*cursorColor: {fg}\n"));
    out.push_str(&format!("URxvt*borderColor:  [100]{bg}\n"));
    out.push('\n');

    out.push_str("! Colors 0-15.\n");
    for n in 0..Palette::LEN {
        // Resources 9-15 repeat slots 1-7.
        let slot = if n <= 8 { n } else { n - 8 };
        let color = palette[slot];
        out.push_str(&format!("*.color{n}: {color}\n"));
        out.push_str(&format!("*color{n}:  {color}\n"));
    }
    out.push('\n');

    out.push_str("! Black color that will not be affected by bold highlighting.\n");
    out.push_str(&format!("*.color66: {bg}\n"));
    out.push_str(&format!("*color66:  {bg}\n"));
    out.push('\n');

    out.push_str("! Xclock colors.\n");
    out.push_str(&format!("XClock*foreground: {fg}\n"));
    out.push_str(&format!("XClock*background: {bg}\n"));
    out.push_str(&format!("XClock*majorColor:  {clock}\n"));
    out.push_str(&format!("XClock*minorColor:  {clock}\n"));
    out.push_str(&format!("XClock*hourColor:   {clock}\n"));
    out.push_str(&format!("XClock*minuteColor: {clock}\n"));
    out.push_str(&format!("XClock*secondColor: {clock}\n"));
    out.push('\n');

    out.push_str("! Set depth to make transparency work.\n");
    out.push_str("URxvt*depth: 32");
    out
}

/// The `rgba:rr/gg/bb/ff` spelling XClock resources use.
fn rgba(color: Rgb) -> String {
    format!("rgba:{:02x}/{:02x}/{:02x}/ff", color.r, color.g, color.b)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample() -> Palette {
        let mut slots = [Rgb::default(); Palette::LEN];
        for (i, slot) in slots.iter_mut().enumerate() {
            let i = i as u8;
            *slot = Rgb::new(0x10 + i, 0x20 + i, 0x30 + i);
        }
        Palette::new(slots)
    }

    #[test]
    fn test_xresources_layout() {
        let expected = "\
! X colors.
*foreground:        #172737
*background:        #102030
*.foreground:       #172737
*.background:       #102030
emacs*foreground:   #172737
emacs*background:   #102030
URxvt*foreground:   #172737
XTerm*foreground:   #172737
UXTerm*foreground:  #172737
URxvt*background:   [100]#102030
XTerm*background:   #102030
UXTerm*background:  #102030
URxvt*cursorColor:  #172737
XTerm*cursorColor:  #172737
UXTerm*cursorColor: #172737
URxvt*borderColor:  [100]#102030

! Colors 0-15.
*.color0: #102030
*color0:  #102030
*.color1: #112131
*color1:  #112131
*.color2: #122232
*color2:  #122232
*.color3: #132333
*color3:  #132333
*.color4: #142434
*color4:  #142434
*.color5: #152535
*color5:  #152535
*.color6: #162636
*color6:  #162636
*.color7: #172737
*color7:  #172737
*.color8: #182838
*color8:  #182838
*.color9: #112131
*color9:  #112131
*.color10: #122232
*color10:  #122232
*.color11: #132333
*color11:  #132333
*.color12: #142434
*color12:  #142434
*.color13: #152535
*color13:  #152535
*.color14: #162636
*color14:  #162636
*.color15: #172737
*color15:  #172737

! Black color that will not be affected by bold highlighting.
*.color66: #102030
*color66:  #102030

! Xclock colors.
XClock*foreground: #172737
XClock*background: #102030
XClock*majorColor:  rgba:17/27/37/ff
XClock*minorColor:  rgba:17/27/37/ff
XClock*hourColor:   rgba:17/27/37/ff
XClock*minuteColor: rgba:17/27/37/ff
XClock*secondColor: rgba:17/27/37/ff

! Set depth to make transparency work.
URxvt*depth: 32";

        assert_eq!(render_xresources(&sample()), expected);
    }

    #[test]
    fn test_color_resources_beyond_eight_repeat_low_slots() {
        let text = render_xresources(&sample());

        // color9 repeats slot 1, color15 repeats slot 7.
        assert!(text.contains("*.color9: #112131\n"));
        assert!(text.contains("*.color15: #172737\n"));
    }

    #[test]
    fn test_no_trailing_newline() {
        assert!(render_xresources(&sample()).ends_with("URxvt*depth: 32"));
    }
}
