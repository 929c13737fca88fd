// Copyright (C) 2024-2025 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Resize: reflow both grids and history to a new geometry without losing
//! scrollback content (§4.6 "Resize").

use super::{default_tabstops, Screen};
use crate::callbacks::Callbacks;
use crate::error::ScreenError;

impl<C: Callbacks> Screen<C> {
    /// Reflow the main buffer, alternate buffer, and history to
    /// `(lines, columns)`. Main-buffer overflow from a shrinking width is
    /// pushed into history (oldest first); the alternate buffer reflows
    /// independently and never touches history, matching the main/alt
    /// isolation invariant. Tab stops reset to the default comb for the new
    /// width; the cursor's row is preserved proportionally and then clamped
    /// into the new bounds. If the main buffer shrinks horizontally and the
    /// cursor's pre-resize row was soft-wrapped (`continued`) or longer than
    /// the new width, one [`Self::index`] runs after reflow so the cursor
    /// doesn't stay parked on a row that still needs redrawing.
    pub fn resize(&mut self, lines: u32, columns: u32) -> Result<(), ScreenError> {
        let new_lines = usize::try_from(lines).map_err(|e| ScreenError::ResizeAllocation {
            lines,
            columns,
            source: e.into(),
        })?;
        let new_columns = usize::try_from(columns).map_err(|e| ScreenError::ResizeAllocation {
            lines,
            columns,
            source: e.into(),
        })?;
        if new_lines == 0 || new_columns == 0 {
            return Err(ScreenError::ResizeAllocation {
                lines,
                columns,
                source: anyhow::anyhow!("resize target must be non-zero in both dimensions"),
            });
        }

        self.history.rewrap(new_columns);

        let old_cursor_y = self.cursor.y;
        let needs_index_after_resize = new_columns < self.columns
            && matches!(self.active, super::ActiveBuffer::Main)
            && self
                .main
                .line(old_cursor_y)
                .is_some_and(|l| l.continued || l.columns() > new_columns);

        let (new_main, new_cursor_y) = self.main.rewrap(new_lines, new_columns, old_cursor_y, Some(&mut self.history));
        let (new_alt, _) = self.alt.rewrap(new_lines, new_columns, self.cursor.y, None);

        self.main = new_main;
        self.alt = new_alt;
        self.lines = new_lines;
        self.columns = new_columns;
        self.margin_top = 0;
        self.margin_bottom = new_lines.saturating_sub(1);
        self.main_tabstops = default_tabstops(new_columns);
        self.alt_tabstops = default_tabstops(new_columns);

        if matches!(self.active, super::ActiveBuffer::Main) {
            self.cursor.y = new_cursor_y.min(self.margin_bottom);
        } else {
            self.cursor.y = self.cursor.y.min(self.margin_bottom);
        }
        self.cursor.x = self.cursor.x.min(new_columns.saturating_sub(1));
        self.wrap_pending = false;

        self.mark_dirty();
        self.mark_cursor_changed();

        if needs_index_after_resize {
            self.index();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen(lines: u32, columns: u32, scrollback: u32) -> Screen {
        Screen::new(lines, columns, scrollback).unwrap()
    }

    #[test]
    fn resize_updates_reported_geometry() {
        let mut s = screen(3, 5, 10);
        s.resize(6, 10).unwrap();
        assert_eq!(s.lines(), 6);
        assert_eq!(s.columns(), 10);
        assert_eq!(s.margins(), (0, 5));
    }

    #[test]
    fn shrinking_width_pushes_overflow_into_history() {
        let mut s = screen(3, 10, 20);
        for ch in "abcdefghij".chars() {
            s.draw(ch);
        }
        assert!(matches!(s.history_line_at(0), Err(ScreenError::HistoryOutOfRange(0))));
        s.resize(3, 5).unwrap();
        assert!(s.history_line_at(0).is_ok());
    }

    #[test]
    fn resize_clamps_cursor_into_new_bounds() {
        let mut s = screen(5, 5, 0);
        s.cursor.x = 4;
        s.cursor.y = 4;
        s.resize(2, 3).unwrap();
        assert!(s.cursor().x < 3);
        assert!(s.cursor().y < 2);
    }

    #[test]
    fn zero_dimension_resize_is_rejected() {
        let mut s = screen(5, 5, 0);
        assert!(s.resize(0, 5).is_err());
    }

    #[test]
    fn shrinking_width_indexes_once_after_reflow() {
        // A single-line screen keeps the margins pinned at (0, 0) regardless
        // of how rewrap repositions the cursor, so the post-resize index()
        // deterministically scrolls its only row into history.
        let mut s = screen(1, 10, 20);
        let added_before = s.history_line_added_count();

        s.resize(1, 5).unwrap();

        assert_eq!(
            s.history_line_added_count(),
            added_before + 1,
            "shrinking the main buffer's width should index() once after reflow"
        );
    }

    #[test]
    fn unchanged_width_does_not_index() {
        let mut s = screen(1, 10, 20);
        let added_before = s.history_line_added_count();

        s.resize(1, 10).unwrap();

        assert_eq!(
            s.history_line_added_count(),
            added_before,
            "a resize that does not shrink the width must not trigger an extra index()"
        );
    }

    #[test]
    fn resize_resets_tab_stops_for_new_width() {
        let mut s = screen(3, 5, 0);
        s.resize(3, 20).unwrap();
        let stops: Vec<usize> = s
            .active_tabstops()
            .iter()
            .enumerate()
            .filter_map(|(i, &set)| set.then_some(i))
            .collect();
        assert_eq!(stops, vec![8, 16]);
    }
}
