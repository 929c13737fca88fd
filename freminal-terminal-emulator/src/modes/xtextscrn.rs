// Copyright (C) 2024-2025 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use core::fmt;

use super::{ModeStatus, SetMode, TerminalMode};

/// Alternate Screen Buffer `?1049`. Entering saves the cursor, clears the
/// alt screen, and homes; leaving restores the cursor.
#[derive(Debug, Eq, PartialEq, Default, Clone, Copy)]
pub enum XtExtscrn {
    #[default]
    Main,
    Alternate,
}

impl XtExtscrn {
    #[must_use]
    pub const fn new(mode: &SetMode) -> Self {
        match mode {
            SetMode::DecSet | SetMode::DecQuery => Self::Alternate,
            SetMode::DecRst => Self::Main,
        }
    }

    #[must_use]
    pub const fn is_alternate(self) -> bool {
        matches!(self, Self::Alternate)
    }
}

impl TerminalMode for XtExtscrn {
    fn code(&self) -> u16 {
        1049
    }

    fn is_private(&self) -> bool {
        true
    }

    fn status(&self) -> ModeStatus {
        match self {
            Self::Alternate => ModeStatus::Set,
            Self::Main => ModeStatus::Reset,
        }
    }
}

impl fmt::Display for XtExtscrn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Main => write!(f, "Main Screen Buffer"),
            Self::Alternate => write!(f, "Alternate Screen Buffer"),
        }
    }
}
