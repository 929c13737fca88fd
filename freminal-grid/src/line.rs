// Copyright (C) 2024-2025 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::cell::Cell;
use crate::cursor::Cursor;

/// A single row of `columns` cells plus the soft-wrap continuation flag.
///
/// `continued == true` means this row is the logical tail of the previous
/// row after an auto-wrap. On the alt screen this flag is maintained the
/// same way as on the main screen, but a resize never reflows the alt screen
/// through history, so a continued row can legitimately lose its logical
/// predecessor after a shrink; renderers must treat it as an advisory hint,
/// never a hard link.
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    cells: Vec<Cell>,
    pub continued: bool,
}

impl Line {
    #[must_use]
    pub fn blank(columns: usize) -> Self {
        Self {
            cells: vec![Cell::blank(); columns],
            continued: false,
        }
    }

    #[must_use]
    pub fn from_cells(cells: Vec<Cell>, continued: bool) -> Self {
        Self { cells, continued }
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[must_use]
    pub fn cell(&self, x: usize) -> Option<&Cell> {
        self.cells.get(x)
    }

    /// Every cell becomes `(fill_char, width 1, default style)`, continued
    /// cleared.
    pub fn clear(&mut self, fill_char: char) {
        for cell in &mut self.cells {
            *cell = Cell::blank();
            if fill_char != ' ' {
                cell.clear_text_preserve_style(fill_char, 1);
            }
        }
        self.continued = false;
    }

    /// Write `(ch, w, cursor style)` at `x`. If `w == 2`, also writes a
    /// continuation marker at `x + 1` (caller must ensure `x + 1 < columns`).
    pub fn set_char(&mut self, x: usize, ch: char, w: u8, cursor: &Cursor) {
        if let Some(cell) = self.cells.get_mut(x) {
            *cell = Cell::drawn(
                ch,
                w,
                cursor.fg,
                cursor.bg,
                cursor.decoration_fg,
                cursor.decoration,
                cursor.bold,
                cursor.italic,
                cursor.reverse,
                cursor.strikethrough,
            );
        }
        if w == 2 {
            if let Some(cont) = self.cells.get_mut(x + 1) {
                *cont = Cell::continuation();
            }
        }
    }

    /// Append `ch` to the combining list of the cell at `x`. If that cell is
    /// the right half of a width-2 pair, attach to the left half instead.
    pub fn add_combining_char(&mut self, ch: char, x: usize) {
        let target = if self.cells.get(x).is_some_and(Cell::is_continuation) && x > 0 {
            x - 1
        } else {
            x
        };
        if let Some(cell) = self.cells.get_mut(target) {
            cell.push_combining(ch);
        }
    }

    /// Shift cells `[x..columns-n)` to `[x+n..columns)`; positions
    /// `[x..x+n)` are cleared with the cursor's style.
    pub fn right_shift(&mut self, x: usize, n: usize, cursor: &Cursor) {
        let columns = self.columns();
        if x >= columns || n == 0 {
            return;
        }
        let n = n.min(columns - x);
        self.cells.copy_within(x..columns - n, x + n);
        self.apply_cursor(cursor, x, n, ' ');
    }

    /// Shift cells `[x+n..columns)` to `[x..columns-n)`; the last `n`
    /// positions become blank.
    pub fn left_shift(&mut self, x: usize, n: usize) {
        let columns = self.columns();
        if x >= columns || n == 0 {
            return;
        }
        let n = n.min(columns - x);
        self.cells.copy_within(x + n..columns, x);
        for cell in &mut self.cells[columns - n..] {
            *cell = Cell::blank();
        }
    }

    /// Overwrite `n` cells starting at `x` with blank content carrying the
    /// cursor's style.
    pub fn apply_cursor(&mut self, cursor: &Cursor, x: usize, n: usize, clear_char: char) {
        let end = (x + n).min(self.columns());
        for cell in &mut self.cells[x.min(end)..end] {
            cell.clear_with_style(
                clear_char,
                1,
                cursor.fg,
                cursor.bg,
                cursor.decoration_fg,
                cursor.decoration,
                cursor.bold,
                cursor.italic,
                cursor.reverse,
                cursor.strikethrough,
            );
        }
    }

    /// Overwrite `n` cells with `fill`, preserving each cell's existing
    /// style.
    pub fn clear_text(&mut self, x: usize, n: usize, fill: char) {
        let end = (x + n).min(self.columns());
        for cell in &mut self.cells[x.min(end)..end] {
            cell.clear_text_preserve_style(fill, 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_line_is_all_spaces() {
        let line = Line::blank(5);
        assert_eq!(line.columns(), 5);
        assert!(line.cells().iter().all(|c| c.codepoint() == ' '));
    }

    #[test]
    fn set_char_writes_continuation_for_wide() {
        let mut line = Line::blank(5);
        let cursor = Cursor::default();
        line.set_char(2, '\u{4e2d}', 2, &cursor);
        assert_eq!(line.cell(2).unwrap().codepoint(), '\u{4e2d}');
        assert!(line.cell(3).unwrap().is_continuation());
    }

    #[test]
    fn right_shift_preserves_tail_and_clears_head() {
        let mut line = Line::blank(5);
        let cursor = Cursor::default();
        line.set_char(0, 'a', 1, &cursor);
        line.set_char(1, 'b', 1, &cursor);
        line.right_shift(0, 2, &cursor);
        assert_eq!(line.cell(2).unwrap().codepoint(), 'a');
        assert_eq!(line.cell(3).unwrap().codepoint(), 'b');
        assert_eq!(line.cell(0).unwrap().codepoint(), ' ');
    }

    #[test]
    fn left_shift_pulls_tail_left_and_blanks_end() {
        let mut line = Line::blank(5);
        let cursor = Cursor::default();
        line.set_char(2, 'a', 1, &cursor);
        line.left_shift(0, 2);
        assert_eq!(line.cell(0).unwrap().codepoint(), 'a');
        assert_eq!(line.cell(4).unwrap().codepoint(), ' ');
    }

    #[test]
    fn add_combining_attaches_to_wide_head() {
        let mut line = Line::blank(5);
        let cursor = Cursor::default();
        line.set_char(0, '\u{4e2d}', 2, &cursor);
        line.add_combining_char('\u{0301}', 1);
        assert_eq!(line.cell(0).unwrap().combining(), ['\u{0301}']);
    }
}
