// Copyright (C) 2024-2025 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use core::fmt;

use super::{ModeStatus, SetMode, TerminalMode};

/// Focus In/Out Event Reporting `?1004`.
#[derive(Debug, Eq, PartialEq, Default, Clone, Copy)]
pub enum XtMseWin {
    #[default]
    Disabled,
    Enabled,
}

impl XtMseWin {
    #[must_use]
    pub const fn new(mode: &SetMode) -> Self {
        match mode {
            SetMode::DecSet | SetMode::DecQuery => Self::Enabled,
            SetMode::DecRst => Self::Disabled,
        }
    }
}

impl TerminalMode for XtMseWin {
    fn code(&self) -> u16 {
        1004
    }

    fn is_private(&self) -> bool {
        true
    }

    fn status(&self) -> ModeStatus {
        match self {
            Self::Enabled => ModeStatus::Set,
            Self::Disabled => ModeStatus::Reset,
        }
    }
}

impl fmt::Display for XtMseWin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => write!(f, "Focus Tracking Disabled"),
            Self::Enabled => write!(f, "Focus Tracking Enabled"),
        }
    }
}
