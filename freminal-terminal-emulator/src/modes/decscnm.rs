// Copyright (C) 2024-2025 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use core::fmt;

use super::{ModeStatus, SetMode, TerminalMode};

/// Reverse Video Mode (DECSCNM) `?5`. Toggling this sets `is_dirty` (the
/// whole screen's rendering is affected).
#[derive(Debug, Eq, PartialEq, Default, Clone, Copy)]
pub enum Decscnm {
    #[default]
    Normal,
    Reverse,
}

impl Decscnm {
    #[must_use]
    pub const fn new(mode: &SetMode) -> Self {
        match mode {
            SetMode::DecSet | SetMode::DecQuery => Self::Reverse,
            SetMode::DecRst => Self::Normal,
        }
    }

    #[must_use]
    pub const fn is_set(self) -> bool {
        matches!(self, Self::Reverse)
    }
}

impl TerminalMode for Decscnm {
    fn code(&self) -> u16 {
        5
    }

    fn is_private(&self) -> bool {
        true
    }

    fn status(&self) -> ModeStatus {
        match self {
            Self::Reverse => ModeStatus::Set,
            Self::Normal => ModeStatus::Reset,
        }
    }
}

impl fmt::Display for Decscnm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "Normal Video (DECSCNM Reset)"),
            Self::Reverse => write!(f, "Reverse Video (DECSCNM Set)"),
        }
    }
}
