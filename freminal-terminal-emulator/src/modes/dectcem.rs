// Copyright (C) 2024-2025 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use core::fmt;

use super::{ModeStatus, SetMode, TerminalMode};

/// Text Cursor Enable Mode (DECTCEM) `?25`. Toggling this sets
/// `cursor_changed`.
#[derive(Debug, Eq, PartialEq, Default, Clone, Copy)]
pub enum Dectcem {
    #[default]
    Visible,
    Hidden,
}

impl Dectcem {
    #[must_use]
    pub const fn new(mode: &SetMode) -> Self {
        match mode {
            SetMode::DecSet | SetMode::DecQuery => Self::Visible,
            SetMode::DecRst => Self::Hidden,
        }
    }

    #[must_use]
    pub const fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
    }
}

impl TerminalMode for Dectcem {
    fn code(&self) -> u16 {
        25
    }

    fn is_private(&self) -> bool {
        true
    }

    fn status(&self) -> ModeStatus {
        match self {
            Self::Visible => ModeStatus::Set,
            Self::Hidden => ModeStatus::Reset,
        }
    }
}

impl fmt::Display for Dectcem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Visible => write!(f, "Cursor Visible (DECTCEM Set)"),
            Self::Hidden => write!(f, "Cursor Hidden (DECTCEM Reset)"),
        }
    }
}
