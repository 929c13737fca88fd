// Copyright (C) 2024-2025 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use core::fmt;

use super::{ModeStatus, SetMode, TerminalMode};

/// Extended keyboard mode, xterm private mode `?1036` ("Meta Sends Escape"):
/// whether the Meta/Alt modifier is reported by prefixing the key with ESC
/// rather than setting the high bit. Purely a passthrough flag; key encoding
/// itself belongs to the input layer.
#[derive(Debug, Eq, PartialEq, Default, Clone, Copy)]
pub enum XtExtKeyb {
    #[default]
    Disabled,
    Enabled,
}

impl XtExtKeyb {
    #[must_use]
    pub const fn new(mode: &SetMode) -> Self {
        match mode {
            SetMode::DecSet | SetMode::DecQuery => Self::Enabled,
            SetMode::DecRst => Self::Disabled,
        }
    }
}

impl TerminalMode for XtExtKeyb {
    fn code(&self) -> u16 {
        1036
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

impl fmt::Display for XtExtKeyb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => write!(f, "Extended Keyboard Mode Disabled"),
            Self::Enabled => write!(f, "Extended Keyboard Mode Enabled"),
        }
    }
}
