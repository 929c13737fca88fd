// Copyright (C) 2024-2025 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use core::fmt;

use super::{ModeStatus, SetMode, TerminalMode};

/// Column Mode (DECCOLM) `?3`: switch between 80 and 132 columns. Setting or
/// resetting it triggers `erase_in_display(2)` and a cursor home.
#[derive(Debug, Eq, PartialEq, Default, Clone, Copy)]
pub enum Deccolm {
    #[default]
    Columns80,
    Columns132,
}

impl Deccolm {
    #[must_use]
    pub const fn new(mode: &SetMode) -> Self {
        match mode {
            SetMode::DecSet | SetMode::DecQuery => Self::Columns132,
            SetMode::DecRst => Self::Columns80,
        }
    }

    #[must_use]
    pub const fn columns(self) -> u32 {
        match self {
            Self::Columns80 => 80,
            Self::Columns132 => 132,
        }
    }
}

impl TerminalMode for Deccolm {
    fn code(&self) -> u16 {
        3
    }

    fn is_private(&self) -> bool {
        true
    }

    fn status(&self) -> ModeStatus {
        match self {
            Self::Columns132 => ModeStatus::Set,
            Self::Columns80 => ModeStatus::Reset,
        }
    }
}

impl fmt::Display for Deccolm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Columns80 => write!(f, "80 Column Mode (DECCOLM Reset)"),
            Self::Columns132 => write!(f, "132 Column Mode (DECCOLM Set)"),
        }
    }
}
