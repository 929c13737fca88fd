// Copyright (C) 2024-2025 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::VecDeque;

use crate::line::Line;

/// Ring buffer of up to `ynum` evicted lines, each of width `columns`.
/// Insertion at the tail evicts the head once full.
#[derive(Clone, Debug)]
pub struct HistoryBuf {
    lines: VecDeque<Line>,
    ynum: usize,
    columns: usize,
}

impl HistoryBuf {
    #[must_use]
    pub fn new(ynum: usize, columns: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(ynum),
            ynum,
            columns,
        }
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.ynum
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Append `line`, evicting the oldest entry if already at capacity.
    pub fn add_line(&mut self, line: Line) {
        if self.ynum == 0 {
            return;
        }
        if self.lines.len() >= self.ynum {
            self.lines.pop_front();
            trace!(capacity = self.ynum, "history buffer full, evicting oldest line");
        }
        self.lines.push_back(line);
    }

    /// Read the line `offset` entries back from the newest (`0` is the most
    /// recently pushed line).
    #[must_use]
    pub fn read_line_at(&self, offset: usize) -> Option<&Line> {
        let len = self.lines.len();
        let idx = len.checked_sub(1)?.checked_sub(offset)?;
        self.lines.get(idx)
    }

    /// Resize the ring to hold at most `new_ynum` lines, preserving the
    /// newest ones.
    pub fn resize(&mut self, new_ynum: usize) {
        while self.lines.len() > new_ynum {
            self.lines.pop_front();
        }
        self.ynum = new_ynum;
    }

    /// Reflow every stored line to a new column width `new_columns`,
    /// merging/splitting wrapped rows the same way [`crate::linebuf::LineBuf::rewrap`]
    /// does, oldest-first.
    pub fn rewrap(&mut self, new_columns: usize) {
        if new_columns == self.columns || self.lines.is_empty() {
            self.columns = new_columns;
            return;
        }
        let old: Vec<Line> = self.lines.drain(..).collect();
        let mut logical: Vec<Vec<crate::cell::Cell>> = Vec::new();
        for line in old {
            let content: Vec<crate::cell::Cell> = line
                .cells()
                .iter()
                .filter(|c| !c.is_continuation())
                .cloned()
                .collect();
            if line.continued {
                if let Some(last) = logical.last_mut() {
                    last.extend(content);
                    continue;
                }
            }
            logical.push(content);
        }

        let mut new_lines = Vec::new();
        for cells in logical {
            new_lines.extend(Self::rewrap_one(&cells, new_columns));
        }
        self.columns = new_columns;
        for line in new_lines {
            self.add_line(line);
        }
    }

    fn rewrap_one(cells: &[crate::cell::Cell], new_columns: usize) -> Vec<Line> {
        let mut rows = Vec::new();
        let mut current = Vec::with_capacity(new_columns);
        for cell in cells {
            let w = usize::from(cell.width().max(1));
            if current.len() + w > new_columns {
                while current.len() < new_columns {
                    current.push(crate::cell::Cell::blank());
                }
                rows.push(current);
                current = Vec::with_capacity(new_columns);
            }
            current.push(cell.clone());
            if w == 2 {
                current.push(crate::cell::Cell::continuation());
            }
        }
        while current.len() < new_columns {
            current.push(crate::cell::Cell::blank());
        }
        rows.push(current);
        rows.into_iter()
            .enumerate()
            .map(|(i, cells)| Line::from_cells(cells, i > 0))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;

    fn line_with(text: &str, columns: usize) -> Line {
        let mut line = Line::blank(columns);
        let cursor = Cursor::default();
        for (x, ch) in text.chars().enumerate() {
            line.set_char(x, ch, 1, &cursor);
        }
        line
    }

    #[test]
    fn evicts_oldest_when_full() {
        let mut h = HistoryBuf::new(2, 4);
        h.add_line(line_with("aaaa", 4));
        h.add_line(line_with("bbbb", 4));
        h.add_line(line_with("cccc", 4));
        assert_eq!(h.count(), 2);
        assert_eq!(h.read_line_at(1).unwrap().cell(0).unwrap().codepoint(), 'b');
        assert_eq!(h.read_line_at(0).unwrap().cell(0).unwrap().codepoint(), 'c');
    }

    #[test]
    fn resize_preserves_newest() {
        let mut h = HistoryBuf::new(5, 4);
        for text in ["aaaa", "bbbb", "cccc"] {
            h.add_line(line_with(text, 4));
        }
        h.resize(1);
        assert_eq!(h.count(), 1);
        assert_eq!(h.read_line_at(0).unwrap().cell(0).unwrap().codepoint(), 'c');
    }

    #[test]
    fn zero_capacity_drops_everything() {
        let mut h = HistoryBuf::new(0, 4);
        h.add_line(line_with("aaaa", 4));
        assert_eq!(h.count(), 0);
    }
}
