// Copyright (C) 2024-2025 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::fmt;

/// The tag byte occupying the low 8 bits of a color's 32-bit word encoding.
const TAG_DEFAULT: u32 = 0;
const TAG_INDEXED: u32 = 1;
const TAG_RGB: u32 = 2;

/// A cell foreground/background/decoration color.
///
/// Encoded as a 32-bit word whose low byte is the tag: 0 = default, 1 =
/// indexed, 2 = rgb. Indexed and rgb pack their payload into the remaining
/// bytes (indexed: `(idx << 8) | tag`; rgb: `r << 24 | g << 16 | b << 8 |
/// tag`), matching the bit layout used throughout this codebase's terminal
/// state.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
pub enum Color {
    #[default]
    Default,
    Indexed(u8),
    Rgb(u8, u8, u8),
}

impl Color {
    #[must_use]
    pub const fn to_word(self) -> u32 {
        match self {
            Self::Default => TAG_DEFAULT,
            Self::Indexed(idx) => ((idx as u32) << 8) | TAG_INDEXED,
            Self::Rgb(r, g, b) => {
                ((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | TAG_RGB
            }
        }
    }

    #[must_use]
    pub const fn from_word(word: u32) -> Self {
        match word & 0xff {
            TAG_INDEXED => Self::Indexed(((word >> 8) & 0xff) as u8),
            TAG_RGB => Self::Rgb(
                ((word >> 24) & 0xff) as u8,
                ((word >> 16) & 0xff) as u8,
                ((word >> 8) & 0xff) as u8,
            ),
            _ => Self::Default,
        }
    }

    /// Resolve this color to an RGB triple against a 256-color palette.
    /// `Default` resolves to `default_rgb`, since the screen itself carries
    /// no opinion about what "default" paints to; that belongs to the
    /// renderer's color profile.
    #[must_use]
    pub const fn resolve_rgb(self, default_rgb: (u8, u8, u8)) -> (u8, u8, u8) {
        match self {
            Self::Default => default_rgb,
            Self::Rgb(r, g, b) => (r, g, b),
            Self::Indexed(idx) => {
                let (r, g, b) = lookup_256_color_by_index(idx as usize);
                (r as u8, g as u8, b as u8)
            }
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("default"),
            Self::Indexed(idx) => write!(f, "indexed({idx})"),
            Self::Rgb(r, g, b) => write!(f, "rgb({r}, {g}, {b})"),
        }
    }
}

#[must_use]
pub const fn lookup_256_color_by_index(index: usize) -> (usize, usize, usize) {
    // https://stackoverflow.com/questions/69138165/how-to-get-the-rgb-values-of-a-256-color-palette-terminal-color
    match index {
        // standard colors 0-15, as well as their bright counterparts 8-15
        // and the other values that map to them further up the color table
        1 => (128, 0, 0),
        2 => (0, 128, 0),
        3 => (128, 128, 0),
        4 => (0, 0, 128),
        5 => (128, 0, 128),
        6 => (0, 128, 128),
        7 => (192, 192, 192),
        8 | 244 => (128, 128, 128),
        9 | 196 => (255, 0, 0),
        10 | 46 => (0, 255, 0),
        11 | 226 => (255, 255, 0),
        12 | 21 => (0, 0, 255),
        13 | 201 => (255, 0, 255),
        14 | 51 => (0, 255, 255),
        15 | 231 => (255, 255, 255),
        // gray scale
        232..=255 => {
            let value = (2056 + 2570 * (index - 232)) / 256;
            (value, value, value)
        }
        // the blacks
        0 | 16 | 256.. => (0, 0, 0),
        // programmatic colors: 6x6x6 cube
        _ => {
            let r = cube_component(index, 36);
            let g = cube_component(index, 6);
            let b = cube_component(index, 1);
            (r, g, b)
        }
    }
}

#[must_use]
pub const fn cube_component(value: usize, modifier: usize) -> usize {
    let i = ((value - 16) / modifier) % 6;

    if i == 0 {
        0
    } else {
        (14135 + 10280 * i) / 256
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips() {
        assert_eq!(Color::from_word(Color::Default.to_word()), Color::Default);
    }

    #[test]
    fn indexed_round_trips() {
        for idx in [0u8, 1, 42, 255] {
            let c = Color::Indexed(idx);
            assert_eq!(Color::from_word(c.to_word()), c);
        }
    }

    #[test]
    fn rgb_round_trips() {
        let c = Color::Rgb(10, 20, 30);
        assert_eq!(Color::from_word(c.to_word()), c);
    }

    #[test]
    fn tag_is_low_byte() {
        assert_eq!(Color::Default.to_word() & 0xff, 0);
        assert_eq!(Color::Indexed(5).to_word() & 0xff, 1);
        assert_eq!(Color::Rgb(1, 2, 3).to_word() & 0xff, 2);
    }

    #[test]
    fn resolve_rgb_uses_caller_default() {
        assert_eq!(Color::Default.resolve_rgb((9, 9, 9)), (9, 9, 9));
        assert_eq!(Color::Rgb(1, 2, 3).resolve_rgb((9, 9, 9)), (1, 2, 3));
    }

    #[test]
    fn standard_palette_matches_ansi() {
        assert_eq!(lookup_256_color_by_index(1), (128, 0, 0));
        assert_eq!(lookup_256_color_by_index(9), (255, 0, 0));
        assert_eq!(lookup_256_color_by_index(15), (255, 255, 255));
    }

    #[test]
    fn grayscale_ramp_is_monotonic() {
        let a = lookup_256_color_by_index(232);
        let b = lookup_256_color_by_index(255);
        assert!(a.0 < b.0);
    }
}
