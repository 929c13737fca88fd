// Copyright (C) 2024-2025 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use freminal_common::colors::Color;

use crate::cell::DecorationStyle;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
pub enum CursorShape {
    #[default]
    Block,
    Underline,
    Beam,
}

/// Cursor position plus the style newly drawn cells inherit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cursor {
    pub x: usize,
    pub y: usize,
    pub shape: CursorShape,
    pub blink: bool,
    pub visible: bool,
    pub fg: Color,
    pub bg: Color,
    pub decoration_fg: Color,
    pub decoration: DecorationStyle,
    pub bold: bool,
    pub italic: bool,
    pub reverse: bool,
    pub strikethrough: bool,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            shape: CursorShape::default(),
            blink: false,
            visible: true,
            fg: Color::Default,
            bg: Color::Default,
            decoration_fg: Color::Default,
            decoration: DecorationStyle::None,
            bold: false,
            italic: false,
            reverse: false,
            strikethrough: false,
        }
    }
}

impl Cursor {
    /// Reset everything but position: shape, blink, visibility, and style
    /// attributes revert to their defaults.
    pub fn reset(&mut self) {
        let (x, y) = (self.x, self.y);
        *self = Self::default();
        self.x = x;
        self.y = y;
    }

    /// Reset only the style attributes a drawn cell would inherit (the
    /// equivalent of `SGR 0`), leaving position, shape, blink, and
    /// visibility untouched.
    pub fn reset_display_attrs(&mut self) {
        self.fg = Color::Default;
        self.bg = Color::Default;
        self.decoration_fg = Color::Default;
        self.decoration = DecorationStyle::None;
        self.bold = false;
        self.italic = false;
        self.reverse = false;
        self.strikethrough = false;
    }

    /// Copy every field of `src` onto `self` except position, used when
    /// inheriting style without moving the cursor.
    pub fn copy_style_from(&mut self, src: &Self) {
        self.shape = src.shape;
        self.blink = src.blink;
        self.visible = src.visible;
        self.fg = src.fg;
        self.bg = src.bg;
        self.decoration_fg = src.decoration_fg;
        self.decoration = src.decoration;
        self.bold = src.bold;
        self.italic = src.italic;
        self.reverse = src.reverse;
        self.strikethrough = src.strikethrough;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_preserves_position() {
        let mut c = Cursor {
            x: 3,
            y: 7,
            bold: true,
            ..Cursor::default()
        };
        c.reset();
        assert_eq!((c.x, c.y), (3, 7));
        assert!(!c.bold);
    }

    #[test]
    fn reset_display_attrs_leaves_position_and_shape() {
        let mut c = Cursor {
            x: 1,
            y: 1,
            shape: CursorShape::Beam,
            bold: true,
            fg: Color::Indexed(1),
            ..Cursor::default()
        };
        c.reset_display_attrs();
        assert_eq!((c.x, c.y), (1, 1));
        assert_eq!(c.shape, CursorShape::Beam);
        assert!(!c.bold);
        assert_eq!(c.fg, Color::Default);
    }
}
