// Copyright (C) 2024-2025 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row and whole-screen erase, plus the row-local character insert/delete/
//! erase operations that share their private-clears-text-only-vs-stamps-
//! style distinction (§4.6 "Erase in line / display").

use super::Screen;
use crate::callbacks::Callbacks;

impl<C: Callbacks> Screen<C> {
    /// `EL`: erase part of the cursor's row. `how`: `0` cursor..end, `1`
    /// start..=cursor, `2` whole row. `private` (`DECSEL`) preserves style;
    /// otherwise erased cells take the cursor's current style.
    pub fn erase_in_line(&mut self, how: u8, private: bool) {
        let columns = self.columns;
        let x = self.cursor.x;
        let (start, len) = match how {
            0 => (x, columns.saturating_sub(x)),
            1 => (0, x + 1),
            _ => (0, columns),
        };
        self.erase_row_range(self.cursor.y, start, len, private);
        self.mark_dirty();
    }

    /// `ED`: erase part of the screen. `how`: `0` cursor..end-of-screen, `1`
    /// start-of-screen..=cursor, `2` whole screen.
    pub fn erase_in_display(&mut self, how: u8, private: bool) {
        let (cx, cy) = (self.cursor.x, self.cursor.y);
        let lines = self.lines;
        let columns = self.columns;
        match how {
            0 => {
                self.erase_row_range(cy, cx, columns.saturating_sub(cx), private);
                for y in cy + 1..lines {
                    self.erase_row_range(y, 0, columns, private);
                }
            }
            1 => {
                for y in 0..cy {
                    self.erase_row_range(y, 0, columns, private);
                }
                self.erase_row_range(cy, 0, cx + 1, private);
            }
            _ => {
                for y in 0..lines {
                    self.erase_row_range(y, 0, columns, private);
                }
            }
        }
        self.mark_dirty();
    }

    fn erase_row_range(&mut self, y: usize, x: usize, n: usize, private: bool) {
        let cursor = self.cursor;
        let Some(line) = self.active_buf_mut().line_mut(y) else {
            return;
        };
        if private {
            line.clear_text(x, n, ' ');
        } else {
            line.apply_cursor(&cursor, x, n, ' ');
        }
    }

    /// `ICH`: right-shift the cursor's row at `cursor.x` by `n`, dropping
    /// the rightmost `n` cells.
    pub fn insert_characters(&mut self, n: u32) {
        let (x, y) = (self.cursor.x, self.cursor.y);
        let cursor = self.cursor;
        if let Some(line) = self.active_buf_mut().line_mut(y) {
            line.right_shift(x, n as usize, &cursor);
        }
        self.mark_dirty();
    }

    /// `DCH`: left-shift the cursor's row at `cursor.x` by `n`, blanking
    /// the trailing `n` cells.
    pub fn delete_characters(&mut self, n: u32) {
        let (x, y) = (self.cursor.x, self.cursor.y);
        if let Some(line) = self.active_buf_mut().line_mut(y) {
            line.left_shift(x, n as usize);
        }
        self.mark_dirty();
    }

    /// `ECH`: overwrite `n` cells starting at the cursor with blanks
    /// carrying the cursor's style, without shifting anything.
    pub fn erase_characters(&mut self, n: u32) {
        let (x, y) = (self.cursor.x, self.cursor.y);
        let cursor = self.cursor;
        if let Some(line) = self.active_buf_mut().line_mut(y) {
            line.apply_cursor(&cursor, x, n as usize, ' ');
        }
        self.mark_dirty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen(lines: u32, columns: u32) -> Screen {
        Screen::new(lines, columns, 0).unwrap()
    }

    #[test]
    fn erase_in_line_private_preserves_style() {
        let mut s = screen(3, 5);
        s.select_graphic_rendition(&[1]);
        s.draw('a');
        s.cursor.x = 0;
        s.erase_in_line(0, true);
        let cell = s.line_at(0).unwrap().cell(0).unwrap();
        assert_eq!(cell.codepoint(), ' ');
        assert!(cell.bold());
    }

    #[test]
    fn erase_in_line_non_private_stamps_cursor_style() {
        let mut s = screen(3, 5);
        s.draw('a');
        s.cursor.x = 0;
        s.select_graphic_rendition(&[1]);
        s.erase_in_line(0, false);
        let cell = s.line_at(0).unwrap().cell(0).unwrap();
        assert!(cell.bold());
    }

    #[test]
    fn erase_in_display_whole_screen_clears_every_row() {
        let mut s = screen(2, 3);
        for ch in "abc".chars() {
            s.draw(ch);
        }
        s.erase_in_display(2, true);
        assert!(s.line_at(0).unwrap().cells().iter().all(|c| c.codepoint() == ' '));
        assert!(s.line_at(1).unwrap().cells().iter().all(|c| c.codepoint() == ' '));
    }

    #[test]
    fn insert_characters_shifts_row_right() {
        let mut s = screen(1, 5);
        for ch in "abc".chars() {
            s.draw(ch);
        }
        s.cursor.x = 0;
        s.insert_characters(2);
        assert_eq!(s.line_at(0).unwrap().cell(2).unwrap().codepoint(), 'a');
    }

    #[test]
    fn delete_characters_shifts_row_left() {
        let mut s = screen(1, 5);
        for ch in "abc".chars() {
            s.draw(ch);
        }
        s.cursor.x = 0;
        s.delete_characters(1);
        assert_eq!(s.line_at(0).unwrap().cell(0).unwrap().codepoint(), 'b');
    }
}
