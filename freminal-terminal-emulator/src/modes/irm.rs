// Copyright (C) 2024-2025 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use core::fmt;

use super::{ModeStatus, SetMode, TerminalMode};

/// Insert/Replace Mode (IRM), ANSI mode 4 (public). When set, `draw`
/// right-shifts the row at the cursor before writing instead of overwriting.
#[derive(Debug, Eq, PartialEq, Default, Clone, Copy)]
pub enum Irm {
    Insert,
    #[default]
    Replace,
}

impl Irm {
    #[must_use]
    pub const fn new(mode: &SetMode) -> Self {
        match mode {
            SetMode::DecSet | SetMode::DecQuery => Self::Insert,
            SetMode::DecRst => Self::Replace,
        }
    }

    #[must_use]
    pub const fn is_insert(self) -> bool {
        matches!(self, Self::Insert)
    }
}

impl TerminalMode for Irm {
    fn code(&self) -> u16 {
        4
    }

    fn is_private(&self) -> bool {
        false
    }

    fn status(&self) -> ModeStatus {
        match self {
            Self::Insert => ModeStatus::Set,
            Self::Replace => ModeStatus::Reset,
        }
    }
}

impl fmt::Display for Irm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Insert => write!(f, "Insert Mode (IRM Set)"),
            Self::Replace => write!(f, "Replace Mode (IRM Reset)"),
        }
    }
}
