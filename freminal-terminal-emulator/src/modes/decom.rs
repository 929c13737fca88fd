// Copyright (C) 2024-2025 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use core::fmt;

use super::{ModeStatus, SetMode, TerminalMode};

/// Origin Mode (DECOM) `?6`. Setting or resetting it homes the cursor.
#[derive(Debug, Eq, PartialEq, Default, Clone, Copy)]
pub enum Decom {
    #[default]
    NormalCursor,
    OriginMode,
}

impl Decom {
    #[must_use]
    pub const fn new(mode: &SetMode) -> Self {
        match mode {
            SetMode::DecSet | SetMode::DecQuery => Self::OriginMode,
            SetMode::DecRst => Self::NormalCursor,
        }
    }

    #[must_use]
    pub const fn is_set(self) -> bool {
        matches!(self, Self::OriginMode)
    }
}

impl TerminalMode for Decom {
    fn code(&self) -> u16 {
        6
    }

    fn is_private(&self) -> bool {
        true
    }

    fn status(&self) -> ModeStatus {
        match self {
            Self::OriginMode => ModeStatus::Set,
            Self::NormalCursor => ModeStatus::Reset,
        }
    }
}

impl fmt::Display for Decom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NormalCursor => write!(f, "Normal Cursor (DECOM Reset)"),
            Self::OriginMode => write!(f, "Origin Mode (DECOM Set)"),
        }
    }
}
