// Copyright (C) 2024-2025 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors surfaced at the screen's public boundary (§7). Per-character and
/// motion operations never fail; only construction, resize, and the
/// bounds-checked history/line accessors can.
#[derive(Debug, Error)]
pub enum ScreenError {
    #[error("failed to allocate a {lines}x{columns} screen: {source}")]
    ConstructAllocation {
        lines: u32,
        columns: u32,
        #[source]
        source: anyhow::Error,
    },

    #[error("failed to resize screen to {lines}x{columns}: {source}")]
    ResizeAllocation {
        lines: u32,
        columns: u32,
        #[source]
        source: anyhow::Error,
    },

    #[error("line index {0} out of range")]
    LineOutOfRange(usize),

    #[error("history offset {0} out of range")]
    HistoryOutOfRange(usize),
}
