// Copyright (C) 2024-2025 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use core::fmt;

use super::{ModeStatus, SetMode, TerminalMode};

/// Cursor Blinking `?12`.
#[derive(Debug, Eq, PartialEq, Default, Clone, Copy)]
pub enum XtCBlink {
    #[default]
    Blink,
    Steady,
}

impl XtCBlink {
    #[must_use]
    pub const fn new(mode: &SetMode) -> Self {
        match mode {
            SetMode::DecSet | SetMode::DecQuery => Self::Blink,
            SetMode::DecRst => Self::Steady,
        }
    }

    #[must_use]
    pub const fn blinks(self) -> bool {
        matches!(self, Self::Blink)
    }
}

impl TerminalMode for XtCBlink {
    fn code(&self) -> u16 {
        12
    }

    fn is_private(&self) -> bool {
        true
    }

    fn status(&self) -> ModeStatus {
        match self {
            Self::Blink => ModeStatus::Set,
            Self::Steady => ModeStatus::Reset,
        }
    }
}

impl fmt::Display for XtCBlink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blink => write!(f, "Cursor Blinking Enabled"),
            Self::Steady => write!(f, "Cursor Blinking Disabled"),
        }
    }
}
