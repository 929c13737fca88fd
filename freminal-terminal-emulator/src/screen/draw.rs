// Copyright (C) 2024-2025 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Draw, the per-character hot path, plus the cursor-adjacent operations
//! (carriage return, line feed, backspace, tabs) that draw's wrap behavior
//! composes with.

use super::Screen;
use crate::callbacks::Callbacks;

impl<C: Callbacks> Screen<C> {
    /// Draw a single decoded codepoint at the cursor (§4.6 "Draw").
    pub fn draw(&mut self, c: char) {
        if c.is_control() {
            warn!(codepoint = c as u32, "draw() called with a control character, ignoring");
            return;
        }

        let translated = if (c as u32) < 256 { self.charset.translate(c) } else { c };
        let w = self.wcwidth().width(translated);

        if w == 0 {
            self.attach_combining(translated);
            return;
        }

        let remaining = self.columns.saturating_sub(self.cursor.x);
        let decawm = self.modes.decawm.is_set();
        if (self.wrap_pending && decawm) || remaining < usize::from(w) {
            if decawm {
                self.carriage_return();
                self.index();
                let y = self.cursor.y;
                if let Some(line) = self.active_buf_mut().line_mut(y) {
                    line.continued = true;
                }
            } else {
                self.cursor.x = self.columns.saturating_sub(usize::from(w));
            }
            self.wrap_pending = false;
        }

        let (x, y) = (self.cursor.x, self.cursor.y);
        let cursor = self.cursor;
        if self.modes.irm.is_insert() {
            if let Some(line) = self.active_buf_mut().line_mut(y) {
                line.right_shift(x, usize::from(w), &cursor);
            }
        }
        if let Some(line) = self.active_buf_mut().line_mut(y) {
            line.set_char(x, translated, w, &cursor);
        }

        let advanced = x + usize::from(w);
        if advanced >= self.columns {
            self.cursor.x = self.columns.saturating_sub(1);
            self.wrap_pending = decawm;
        } else {
            self.cursor.x = advanced;
            self.wrap_pending = false;
        }
        self.mark_dirty();
        self.mark_cursor_changed();
    }

    fn attach_combining(&mut self, c: char) {
        let (x, y) = (self.cursor.x, self.cursor.y);
        if x == 0 {
            if let Some(prev_y) = y.checked_sub(1) {
                let last = self.columns.saturating_sub(1);
                if let Some(line) = self.active_buf_mut().line_mut(prev_y) {
                    line.add_combining_char(c, last);
                }
            }
        } else if let Some(line) = self.active_buf_mut().line_mut(y) {
            line.add_combining_char(c, x - 1);
        }
        self.mark_dirty();
    }

    /// `CR`: move the cursor to column 0 of the current row.
    pub fn carriage_return(&mut self) {
        self.cursor.x = 0;
        self.mark_cursor_changed();
    }

    /// `LF`: scroll the cursor down one row via [`Self::index`]. When LNM
    /// (new-line mode) is set, a bare line feed also returns the cursor to
    /// column 0, matching terminal-compatibility practice.
    pub fn linefeed(&mut self) {
        self.index();
        if self.modes.lnm.is_newline_mode() {
            self.carriage_return();
        }
    }

    /// `BS`: move the cursor left one column, stopping at column 0.
    pub fn backspace(&mut self) {
        self.cursor.x = self.cursor.x.saturating_sub(1);
        self.mark_cursor_changed();
    }

    /// `HT`: advance to the next set tab stop with index greater than the
    /// cursor's column, or the last column if none remain.
    pub fn tab(&mut self) {
        let stops = self.active_tabstops();
        let next = stops
            .iter()
            .enumerate()
            .skip(self.cursor.x + 1)
            .find_map(|(i, &set)| set.then_some(i));
        self.cursor.x = next.unwrap_or_else(|| self.columns.saturating_sub(1));
        self.mark_cursor_changed();
    }

    /// Backward tab `n` stops, floored at column 0.
    pub fn backtab(&mut self, n: u32) {
        let stops = self.active_tabstops().to_vec();
        let mut x = self.cursor.x;
        for _ in 0..n {
            let Some(prev) = stops[..x].iter().enumerate().rev().find_map(|(i, &set)| set.then_some(i)) else {
                x = 0;
                break;
            };
            x = prev;
        }
        self.cursor.x = x;
        self.mark_cursor_changed();
    }

    /// `HTS`: set a tab stop at the cursor's current column.
    pub fn set_tab_stop(&mut self) {
        let x = self.cursor.x;
        if let Some(slot) = self.active_tabstops_mut().get_mut(x) {
            *slot = true;
        }
    }

    /// `TBC`: `mode == 0` clears the stop at the cursor, `mode == 3` clears
    /// every stop.
    pub fn clear_tab_stop(&mut self, mode: u8) {
        match mode {
            3 => {
                for slot in self.active_tabstops_mut() {
                    *slot = false;
                }
            }
            _ => {
                let x = self.cursor.x;
                if let Some(slot) = self.active_tabstops_mut().get_mut(x) {
                    *slot = false;
                }
            }
        }
    }
}
