// Copyright (C) 2024-2025 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Scroll-region-aware indexing, explicit scrolling, and row insertion and
//! deletion (§4.6 "Indexing").

use super::Screen;
use crate::callbacks::Callbacks;

impl<C: Callbacks> Screen<C> {
    /// `IND`: if the cursor sits on `margin_bottom`, scroll the region up
    /// by one (rotating `[margin_top..=margin_bottom]`); otherwise move the
    /// cursor down by one row. A full-screen scroll of the main buffer
    /// pushes the expelled line into history and counts it.
    pub fn index(&mut self) {
        let (top, bottom) = self.margins();
        if self.cursor.y == bottom {
            let full_screen = top == 0 && bottom == self.lines.saturating_sub(1);
            let is_main = !self.is_alt_screen();
            let expelled = self.active_buf_mut().index(top, bottom);
            if full_screen && is_main {
                if let Some(line) = expelled {
                    self.history.add_line(line);
                    self.history_line_added_count += 1;
                }
            }
        } else {
            self.cursor.y = (self.cursor.y + 1).min(bottom);
        }
        self.mark_dirty();
        self.mark_cursor_changed();
    }

    /// `RI`: symmetric to [`Self::index`], never writes history.
    pub fn reverse_index(&mut self) {
        let (top, bottom) = self.margins();
        if self.cursor.y == top {
            self.active_buf_mut().reverse_index(top, bottom);
        } else {
            self.cursor.y = self.cursor.y.saturating_sub(1).max(top);
        }
        self.mark_dirty();
        self.mark_cursor_changed();
    }

    /// Scroll the region up `n` times (capped at `lines`) without moving
    /// the cursor.
    pub fn scroll(&mut self, n: u32) {
        let (top, bottom) = self.margins();
        let full_screen = top == 0 && bottom == self.lines.saturating_sub(1);
        let is_main = !self.is_alt_screen();
        for _ in 0..n.min(self.lines as u32) {
            let expelled = self.active_buf_mut().index(top, bottom);
            if full_screen && is_main {
                if let Some(line) = expelled {
                    self.history.add_line(line);
                    self.history_line_added_count += 1;
                }
            }
        }
        self.mark_dirty();
    }

    /// Scroll the region down `n` times (capped at `lines`) without moving
    /// the cursor.
    pub fn reverse_scroll(&mut self, n: u32) {
        let (top, bottom) = self.margins();
        for _ in 0..n.min(self.lines as u32) {
            self.active_buf_mut().reverse_index(top, bottom);
        }
        self.mark_dirty();
    }

    /// `IL`: insert `n` blank rows at the cursor, within `[cursor.y,
    /// margin_bottom]`.
    pub fn insert_lines(&mut self, n: u32) {
        let (_, bottom) = self.margins();
        let y = self.cursor.y;
        self.active_buf_mut().insert_lines(n as usize, y, bottom);
        self.mark_dirty();
    }

    /// `DL`: delete `n` rows at the cursor, within `[cursor.y,
    /// margin_bottom]`.
    pub fn delete_lines(&mut self, n: u32) {
        let (_, bottom) = self.margins();
        let y = self.cursor.y;
        self.active_buf_mut().delete_lines(n as usize, y, bottom);
        self.mark_dirty();
    }

    /// `DECSTBM`: set the scroll margins. `1`-based; `0` for either means
    /// "default" (`top=1`, `bottom=lines`). Homes the cursor per VT510.
    pub fn set_margins(&mut self, top: u32, bottom: u32) {
        let top = if top == 0 { 1 } else { top } as usize - 1;
        let bottom = if bottom == 0 {
            self.lines
        } else {
            bottom as usize
        }
        .saturating_sub(1);
        if top >= bottom || bottom >= self.lines {
            warn!(top, bottom, "ignoring invalid scroll margins");
            return;
        }
        self.margin_top = top;
        self.margin_bottom = bottom;
        self.cursor.x = 0;
        self.cursor.y = if self.modes.decom.is_set() { top } else { 0 };
        self.mark_cursor_changed();
    }
}
