// Copyright (C) 2024-2025 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use core::fmt;

use super::{ModeStatus, SetMode, TerminalMode};

/// Line Feed/New Line Mode (LNM), ANSI mode 20 (public, no `?` prefix).
#[derive(Debug, Eq, PartialEq, Default, Clone, Copy)]
pub enum Lnm {
    NewLine,
    #[default]
    LineFeed,
}

impl Lnm {
    #[must_use]
    pub const fn new(mode: &SetMode) -> Self {
        match mode {
            SetMode::DecSet | SetMode::DecQuery => Self::NewLine,
            SetMode::DecRst => Self::LineFeed,
        }
    }

    #[must_use]
    pub const fn is_newline_mode(self) -> bool {
        matches!(self, Self::NewLine)
    }
}

impl TerminalMode for Lnm {
    fn code(&self) -> u16 {
        20
    }

    fn is_private(&self) -> bool {
        false
    }

    fn status(&self) -> ModeStatus {
        match self {
            Self::NewLine => ModeStatus::Set,
            Self::LineFeed => ModeStatus::Reset,
        }
    }
}

impl fmt::Display for Lnm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NewLine => write!(f, "New Line Mode (LNM Set)"),
            Self::LineFeed => write!(f, "Line Feed Mode (LNM Reset)"),
        }
    }
}
