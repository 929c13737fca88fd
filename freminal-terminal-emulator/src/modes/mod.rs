// Copyright (C) 2024-2025 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! ANSI/DEC mode state: one small enum per mode, each constructed from a
//! [`SetMode`] and reporting its own human-readable [`std::fmt::Display`].
//! Numeric code and public/private status live on [`TerminalMode`] so the
//! DECRPM wire format (§6) is assembled in one place rather than once per
//! mode file.

pub mod decarm;
pub mod decawm;
pub mod decckm;
pub mod deccolm;
pub mod decom;
pub mod decscnm;
pub mod dectcem;
pub mod irm;
pub mod lnm;
pub mod mouse;
pub mod rl_bracket;
pub mod xtcblink;
pub mod xtextkeyb;
pub mod xtextscrn;
pub mod xtmsewin;

use core::fmt;

/// The three ways a mode-setting escape can address a mode: turn it on
/// (`CSI ... h`), turn it off (`CSI ... l`), or ask what it currently is
/// (`CSI ... $p`, a DECRQM query).
#[derive(Debug, Eq, PartialEq, Default, Clone, Copy)]
pub enum SetMode {
    DecSet,
    #[default]
    DecRst,
    DecQuery,
}

impl fmt::Display for SetMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DecSet => write!(f, "Mode Set"),
            Self::DecRst => write!(f, "Mode Reset"),
            Self::DecQuery => write!(f, "Mode Query"),
        }
    }
}

/// The four answers a DECRPM reply can give (§6 `DECRPM` format:
/// `ans ∈ {0,1,2,3}`): unknown, set, reset, or permanently set (a mode this
/// engine always honors and never turns off).
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum ModeStatus {
    NotRecognized,
    Set,
    Reset,
    PermanentlySet,
}

impl ModeStatus {
    const fn code(self) -> u8 {
        match self {
            Self::NotRecognized => 0,
            Self::Set => 1,
            Self::Reset => 2,
            Self::PermanentlySet => 3,
        }
    }
}

/// A mode that can be constructed from a `SetMode` and knows its own wire
/// identity, used to assemble `report_mode_status` replies uniformly.
pub trait TerminalMode: fmt::Display {
    /// The numeric mode code as it appears after `CSI ?` (private) or `CSI`
    /// (public).
    fn code(&self) -> u16;
    /// Whether this mode is a DEC private mode (`CSI ?code`) or a public
    /// ANSI mode (`CSI code`).
    fn is_private(&self) -> bool;
    fn status(&self) -> ModeStatus;
}

/// Assemble a DECRPM reply: `ESC [ [?] code ; ans $ y`.
#[must_use]
pub fn report_mode_status(mode: &dyn TerminalMode) -> String {
    let prefix = if mode.is_private() { "?" } else { "" };
    format!("\x1b[{prefix}{};{}$y", mode.code(), mode.status().code())
}

/// A `(code, private, status)` triple already resolved by [`super::screen::Modes::status_of`],
/// routed through [`report_mode_status`] so there is a single place that
/// assembles the DECRPM wire format. Needed because some codes (the mouse
/// tracking/protocol groups) resolve to a status without a single concrete
/// `TerminalMode` value to borrow when the queried code isn't the currently
/// active variant.
struct QueriedMode {
    code: u16,
    private: bool,
    status: ModeStatus,
}

impl fmt::Display for QueriedMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mode {}", self.code)
    }
}

impl TerminalMode for QueriedMode {
    fn code(&self) -> u16 {
        self.code
    }

    fn is_private(&self) -> bool {
        self.private
    }

    fn status(&self) -> ModeStatus {
        self.status
    }
}

/// Assemble a DECRPM reply for an already-resolved `(code, private, status)`
/// triple, via [`report_mode_status`].
#[must_use]
pub fn report_mode_status_for(code: u16, private: bool, status: ModeStatus) -> String {
    report_mode_status(&QueriedMode { code, private, status })
}
