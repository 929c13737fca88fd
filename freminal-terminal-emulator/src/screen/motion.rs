// Copyright (C) 2024-2025 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Cursor motion. Every operation here clamps to screen bounds after
//! moving; when DECOM is set, vertical motion is clamped to the scroll
//! margins rather than the full screen (§4.6 "Cursor motion").

use super::Screen;
use crate::callbacks::Callbacks;

impl<C: Callbacks> Screen<C> {
    fn y_bounds(&self) -> (usize, usize) {
        if self.modes.decom.is_set() {
            self.margins()
        } else {
            (0, self.lines.saturating_sub(1))
        }
    }

    fn clamp_cursor(&mut self) {
        self.wrap_pending = false;
        let (top, bottom) = self.y_bounds();
        self.cursor.x = self.cursor.x.min(self.columns.saturating_sub(1));
        self.cursor.y = self.cursor.y.clamp(top, bottom);
    }

    /// `CUP`/`HVP`: move to 1-based `(line, col)`. When DECOM is set, `line`
    /// is relative to `margin_top`.
    pub fn cursor_position(&mut self, line: u32, col: u32) {
        let line = line.max(1) as usize - 1;
        let col = col.max(1) as usize - 1;
        let bias = if self.modes.decom.is_set() { self.margin_top } else { 0 };
        self.cursor.y = bias + line;
        self.cursor.x = col;
        self.clamp_cursor();
        self.mark_cursor_changed();
    }

    pub fn cursor_up(&mut self, n: u32) {
        self.cursor.y = self.cursor.y.saturating_sub(n as usize);
        self.clamp_cursor();
        self.mark_cursor_changed();
    }

    pub fn cursor_down(&mut self, n: u32) {
        self.cursor.y = self.cursor.y.saturating_add(n as usize);
        self.clamp_cursor();
        self.mark_cursor_changed();
    }

    pub fn cursor_forward(&mut self, n: u32) {
        self.cursor.x = self.cursor.x.saturating_add(n as usize);
        self.clamp_cursor();
        self.mark_cursor_changed();
    }

    pub fn cursor_back(&mut self, n: u32) {
        self.cursor.x = self.cursor.x.saturating_sub(n as usize);
        self.clamp_cursor();
        self.mark_cursor_changed();
    }

    /// `CNL`: cursor down `n` rows, then to column 0.
    pub fn cursor_down1(&mut self, n: u32) {
        self.cursor_down(n);
        self.carriage_return();
    }

    /// `CPL`: cursor up `n` rows, then to column 0.
    pub fn cursor_up1(&mut self, n: u32) {
        self.cursor_up(n);
        self.carriage_return();
    }

    /// `VPA`: move to 1-based line `v` on the current column.
    pub fn cursor_to_line(&mut self, v: u32) {
        let bias = if self.modes.decom.is_set() { self.margin_top } else { 0 };
        self.cursor.y = bias + v.max(1) as usize - 1;
        self.clamp_cursor();
        self.mark_cursor_changed();
    }

    /// `HPA`: move to 1-based column `v` on the current line.
    pub fn cursor_to_column(&mut self, v: u32) {
        self.cursor.x = v.max(1) as usize - 1;
        self.clamp_cursor();
        self.mark_cursor_changed();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen(lines: u32, columns: u32) -> Screen {
        Screen::new(lines, columns, 0).unwrap()
    }

    #[test]
    fn cursor_position_is_one_based() {
        let mut s = screen(5, 10);
        s.cursor_position(2, 3);
        assert_eq!((s.cursor().x, s.cursor().y), (2, 1));
    }

    #[test]
    fn decom_biases_cursor_position_by_margin_top() {
        let mut s = screen(5, 10);
        s.set_mode(6, true); // DECOM
        s.set_margins(2, 4);
        s.cursor_position(1, 1);
        assert_eq!(s.cursor().y, 1); // margin_top (0-based) == 1
    }

    #[test]
    fn cursor_motion_clamps_to_screen_bounds() {
        let mut s = screen(3, 5);
        s.cursor_up(100);
        assert_eq!(s.cursor().y, 0);
        s.cursor_down(100);
        assert_eq!(s.cursor().y, 2);
        s.cursor_forward(100);
        assert_eq!(s.cursor().x, 4);
        s.cursor_back(100);
        assert_eq!(s.cursor().x, 0);
    }

    #[test]
    fn cursor_down1_also_returns_to_column_zero() {
        let mut s = screen(5, 10);
        s.cursor.x = 5;
        s.cursor_down1(1);
        assert_eq!(s.cursor().x, 0);
        assert_eq!(s.cursor().y, 1);
    }
}
