// Copyright (C) 2024-2025 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::cell::Cell;
use crate::cursor::Cursor;
use crate::history::HistoryBuf;
use crate::line::Line;

/// A fixed `lines x columns` grid of [`Line`]s.
///
/// Every row index in `[0, lines)` is addressable; continuation flags are
/// the only inter-row linkage (§3 invariant: "no other implicit linkage").
#[derive(Clone, Debug)]
pub struct LineBuf {
    lines: Vec<Line>,
    columns: usize,
}

impl LineBuf {
    #[must_use]
    pub fn new(lines: usize, columns: usize) -> Self {
        Self {
            lines: (0..lines).map(|_| Line::blank(columns)).collect(),
            columns,
        }
    }

    #[must_use]
    pub fn lines(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[must_use]
    pub fn line(&self, y: usize) -> Option<&Line> {
        self.lines.get(y)
    }

    /// `init_line(y)`: the row-level operations' contract is that they act
    /// on whichever row this returns a mutable view of.
    pub fn line_mut(&mut self, y: usize) -> Option<&mut Line> {
        self.lines.get_mut(y)
    }

    pub fn clear_row(&mut self, y: usize, fill_char: char) {
        if let Some(line) = self.lines.get_mut(y) {
            line.clear(fill_char);
        }
    }

    /// Shift rows `[y..bottom-count+1)` down to `[y+count..bottom+1)`; rows
    /// `[y..y+count)` become blank.
    pub fn insert_lines(&mut self, count: usize, y: usize, bottom: usize) {
        if y > bottom || bottom >= self.lines.len() {
            return;
        }
        let count = count.min(bottom - y + 1);
        for i in (y + count..=bottom).rev() {
            self.lines.swap(i, i - count);
        }
        for row in &mut self.lines[y..y + count] {
            *row = Line::blank(self.columns);
        }
    }

    /// Symmetric to [`Self::insert_lines`]: shifts `[y+count..bottom+1)` up
    /// to `[y..bottom-count+1)`, blanking the trailing `count` rows.
    pub fn delete_lines(&mut self, count: usize, y: usize, bottom: usize) {
        if y > bottom || bottom >= self.lines.len() {
            return;
        }
        let count = count.min(bottom - y + 1);
        for i in y..=bottom - count {
            self.lines.swap(i, i + count);
        }
        for row in &mut self.lines[bottom - count + 1..=bottom] {
            *row = Line::blank(self.columns);
        }
    }

    /// Rotate rows in `[top..=bottom]` up by one: row `top` is discarded and
    /// returned to the caller, row `bottom` becomes blank.
    pub fn index(&mut self, top: usize, bottom: usize) -> Option<Line> {
        if top > bottom || bottom >= self.lines.len() {
            return None;
        }
        let expelled = self.lines[top].clone();
        for i in top..bottom {
            self.lines.swap(i, i + 1);
        }
        self.lines[bottom] = Line::blank(self.columns);
        Some(expelled)
    }

    /// Symmetric to [`Self::index`]: rotates `[top..=bottom]` down by one,
    /// discarding row `bottom` and blanking row `top`.
    pub fn reverse_index(&mut self, top: usize, bottom: usize) -> Option<Line> {
        if top > bottom || bottom >= self.lines.len() {
            return None;
        }
        let expelled = self.lines[bottom].clone();
        for i in (top + 1..=bottom).rev() {
            self.lines.swap(i, i - 1);
        }
        self.lines[top] = Line::blank(self.columns);
        Some(expelled)
    }

    /// Flatten this buffer into logical lines: consecutive rows with
    /// `continued == true` are joined with their predecessor. Returns, for
    /// each logical line, its cells (continuation markers dropped, since
    /// width is already carried by the preceding cell) and the physical row
    /// range `[start, end)` it spanned in the old buffer.
    fn logical_lines(&self) -> Vec<(Vec<Cell>, std::ops::Range<usize>)> {
        let mut out: Vec<(Vec<Cell>, std::ops::Range<usize>)> = Vec::new();
        for (y, line) in self.lines.iter().enumerate() {
            let content: Vec<Cell> = line
                .cells()
                .iter()
                .filter(|c| !c.is_continuation())
                .cloned()
                .collect();
            if line.continued {
                if let Some((cells, range)) = out.last_mut() {
                    cells.extend(content);
                    range.end = y + 1;
                    continue;
                }
            }
            out.push((content, y..y + 1));
        }
        out
    }

    /// Re-chunk a flat logical line's cells into rows of `new_columns`,
    /// never splitting a width-2 cell across a row boundary.
    fn rewrap_logical_line(cells: &[Cell], new_columns: usize) -> Vec<Line> {
        let mut rows = Vec::new();
        let mut current = Vec::with_capacity(new_columns);
        for cell in cells {
            let w = cell.width().max(1) as usize;
            if current.len() + w > new_columns {
                while current.len() < new_columns {
                    current.push(Cell::blank());
                }
                rows.push(current);
                current = Vec::with_capacity(new_columns);
            }
            current.push(cell.clone());
            if w == 2 {
                current.push(Cell::continuation());
            }
        }
        while current.len() < new_columns {
            current.push(Cell::blank());
        }
        rows.push(current);

        rows.into_iter()
            .enumerate()
            .map(|(i, cells)| Line::from_cells(cells, i > 0))
            .collect()
    }

    /// Reflow this buffer's content into a new `new_lines x new_columns`
    /// geometry. Rows that fall off the top are pushed into `history` (if
    /// given), oldest first. Returns the new buffer and the row the old
    /// cursor (at `old_cursor_y`) now falls on.
    #[must_use]
    pub fn rewrap(
        &self,
        new_lines: usize,
        new_columns: usize,
        old_cursor_y: usize,
        mut history: Option<&mut HistoryBuf>,
    ) -> (Self, usize) {
        let logical = self.logical_lines();
        let mut all_rows: Vec<Line> = Vec::new();
        let mut cursor_row: usize = 0;

        for (cells, range) in &logical {
            let rewrapped = Self::rewrap_logical_line(cells, new_columns);
            let base = all_rows.len();
            if range.contains(&old_cursor_y) {
                let offset_in_logical = old_cursor_y - range.start;
                let new_offset =
                    (offset_in_logical * self.columns) / new_columns.max(1);
                cursor_row = base + new_offset.min(rewrapped.len().saturating_sub(1));
            }
            all_rows.extend(rewrapped);
        }

        if all_rows.is_empty() {
            all_rows.push(Line::blank(new_columns));
        }

        let overflow = all_rows.len().saturating_sub(new_lines);
        if overflow > 0 {
            if let Some(history) = history.as_deref_mut() {
                for row in all_rows.drain(..overflow) {
                    history.add_line(row);
                }
            } else {
                all_rows.drain(..overflow);
            }
            cursor_row = cursor_row.saturating_sub(overflow);
        }

        while all_rows.len() < new_lines {
            all_rows.push(Line::blank(new_columns));
        }

        let new_buf = Self {
            lines: all_rows,
            columns: new_columns,
        };
        (new_buf, cursor_row.min(new_lines.saturating_sub(1)))
    }
}
