// Copyright (C) 2024-2025 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `SGR`: select graphic rendition (§4.6 "SGR"). Applies a stream of
//! already-decoded integer parameters to the cursor's style in order, so
//! later parameters in the same call can override earlier ones.

use freminal_common::colors::Color;
use freminal_grid::cell::DecorationStyle;

use super::Screen;
use crate::callbacks::Callbacks;

impl<C: Callbacks> Screen<C> {
    /// Apply an `SGR` parameter stream to the cursor's style.
    pub fn select_graphic_rendition(&mut self, params: &[i64]) {
        let mut i = 0;
        while i < params.len() {
            let code = params[i];
            match code {
                0 => self.cursor.reset_display_attrs(),
                1 => self.cursor.bold = true,
                22 => self.cursor.bold = false,
                3 => self.cursor.italic = true,
                23 => self.cursor.italic = false,
                4 => {
                    let style = params.get(i + 1).copied();
                    self.cursor.decoration = match style {
                        Some(0) => {
                            i += 1;
                            DecorationStyle::None
                        }
                        Some(1 | 2) => {
                            i += 1;
                            DecorationStyle::Underline
                        }
                        Some(3) => {
                            i += 1;
                            DecorationStyle::Undercurl
                        }
                        _ => DecorationStyle::Underline,
                    };
                }
                24 => self.cursor.decoration = DecorationStyle::None,
                7 => self.cursor.reverse = true,
                27 => self.cursor.reverse = false,
                9 => self.cursor.strikethrough = true,
                29 => self.cursor.strikethrough = false,
                30..=37 => self.cursor.fg = Color::Indexed((code - 30) as u8),
                90..=97 => self.cursor.fg = Color::Indexed((code - 90 + 8) as u8),
                40..=47 => self.cursor.bg = Color::Indexed((code - 40) as u8),
                100..=107 => self.cursor.bg = Color::Indexed((code - 100 + 8) as u8),
                39 => self.cursor.fg = Color::Default,
                49 => self.cursor.bg = Color::Default,
                38 => {
                    if let Some((color, consumed)) = parse_extended_color(&params[i + 1..]) {
                        self.cursor.fg = color;
                        i += consumed;
                    }
                }
                48 => {
                    if let Some((color, consumed)) = parse_extended_color(&params[i + 1..]) {
                        self.cursor.bg = color;
                        i += consumed;
                    }
                }
                58 => {
                    if let Some((color, consumed)) = parse_extended_color(&params[i + 1..]) {
                        self.cursor.decoration_fg = color;
                        i += consumed;
                    }
                }
                59 => self.cursor.decoration_fg = Color::Default,
                other => warn!(code = other, "unsupported SGR parameter"),
            }
            i += 1;
        }
        self.mark_dirty();
        self.mark_cursor_changed();
    }
}

/// Parse the `5;n` (indexed) or `2;r;g;b` (direct RGB) sub-parameter
/// grammar that follows `38`/`48`/`58`. Returns the color and how many
/// trailing parameters (beyond the `38`/`48`/`58` itself) it consumed.
fn parse_extended_color(rest: &[i64]) -> Option<(Color, usize)> {
    match rest.first().copied()? {
        5 => {
            let idx = u8::try_from(*rest.get(1)?).ok()?;
            Some((Color::Indexed(idx), 2))
        }
        2 => {
            let r = u8::try_from(*rest.get(1)?).ok()?;
            let g = u8::try_from(*rest.get(2)?).ok()?;
            let b = u8::try_from(*rest.get(3)?).ok()?;
            Some((Color::Rgb(r, g, b), 4))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> Screen {
        Screen::new(3, 5, 0).unwrap()
    }

    #[test]
    fn sgr_zero_resets_style() {
        let mut s = screen();
        s.select_graphic_rendition(&[1, 3, 7]);
        s.select_graphic_rendition(&[0]);
        assert!(!s.cursor().bold);
        assert!(!s.cursor().italic);
        assert!(!s.cursor().reverse);
        assert_eq!(s.cursor().fg, Color::Default);
    }

    #[test]
    fn bold_toggle_applies_to_next_draw_only_at_call_time() {
        let mut s = screen();
        s.select_graphic_rendition(&[1]);
        s.draw('a');
        s.select_graphic_rendition(&[22]);
        s.draw('b');
        assert!(s.line_at(0).unwrap().cell(0).unwrap().bold());
        assert!(!s.line_at(0).unwrap().cell(1).unwrap().bold());
    }

    #[test]
    fn indexed_foreground_from_30_range() {
        let mut s = screen();
        s.select_graphic_rendition(&[32]);
        assert_eq!(s.cursor().fg, Color::Indexed(2));
    }

    #[test]
    fn bright_foreground_from_90_range_offsets_by_eight() {
        let mut s = screen();
        s.select_graphic_rendition(&[91]);
        assert_eq!(s.cursor().fg, Color::Indexed(9));
    }

    #[test]
    fn extended_indexed_color_sub_parameter() {
        let mut s = screen();
        s.select_graphic_rendition(&[38, 5, 200]);
        assert_eq!(s.cursor().fg, Color::Indexed(200));
    }

    #[test]
    fn extended_rgb_color_sub_parameter() {
        let mut s = screen();
        s.select_graphic_rendition(&[48, 2, 10, 20, 30]);
        assert_eq!(s.cursor().bg, Color::Rgb(10, 20, 30));
    }

    #[test]
    fn decoration_color_reserved_pair() {
        let mut s = screen();
        s.select_graphic_rendition(&[58, 5, 9]);
        assert_eq!(s.cursor().decoration_fg, Color::Indexed(9));
        s.select_graphic_rendition(&[59]);
        assert_eq!(s.cursor().decoration_fg, Color::Default);
    }

    #[test]
    fn unknown_sgr_code_is_ignored_not_fatal() {
        let mut s = screen();
        s.select_graphic_rendition(&[1, 9999, 3]);
        assert!(s.cursor().bold);
        assert!(s.cursor().italic);
    }
}
