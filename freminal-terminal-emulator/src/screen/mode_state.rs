// Copyright (C) 2024-2025 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Aggregates one instance of every mode enum from [`crate::modes`] into a
//! single struct the screen owns, plus the `(code, private)` dispatch table
//! that turns an incoming `set_mode`/`reset_mode`/`report_mode` call into
//! the right member.

use crate::modes::decarm::Decarm;
use crate::modes::decawm::Decawm;
use crate::modes::decckm::Decckm;
use crate::modes::deccolm::Deccolm;
use crate::modes::decom::Decom;
use crate::modes::decscnm::Decscnm;
use crate::modes::dectcem::Dectcem;
use crate::modes::irm::Irm;
use crate::modes::lnm::Lnm;
use crate::modes::mouse::{self, MouseProtocol, MouseTracking};
use crate::modes::rl_bracket::RlBracket;
use crate::modes::xtcblink::XtCBlink;
use crate::modes::xtextkeyb::XtExtKeyb;
use crate::modes::xtextscrn::XtExtscrn;
use crate::modes::xtmsewin::XtMseWin;
use crate::modes::{ModeStatus, SetMode, TerminalMode};

/// One slot per mode this screen tracks, including `XtExtscrn` (the
/// alt-screen toggle `?1049`); [`Screen::toggle_alt_screen`](super::Screen::toggle_alt_screen)
/// keeps it in sync with which buffer is actually active regardless of
/// which call path (mode escape or direct API call) triggered the swap.
#[derive(Debug, Clone, Copy, Default)]
pub struct Modes {
    pub decckm: Decckm,
    pub decawm: Decawm,
    pub decarm: Decarm,
    pub decom: Decom,
    pub decscnm: Decscnm,
    pub dectcem: Dectcem,
    pub deccolm: Deccolm,
    pub irm: Irm,
    pub lnm: Lnm,
    pub bracketed_paste: RlBracket,
    pub focus_tracking: XtMseWin,
    pub cursor_blink: XtCBlink,
    pub extended_keyboard: XtExtKeyb,
    pub alt_screen: XtExtscrn,
    pub mouse_tracking: MouseTracking,
    pub mouse_protocol: MouseProtocol,
}

/// Outcome of dispatching a `(code, private)` pair through [`Modes::apply`],
/// used by the screen to decide what side effects (cursor home, erase,
/// dirty flag, …) a mode change triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeEffect {
    None,
    CursorHomed,
    ColumnModeChanged,
    CursorVisibilityChanged,
    ReverseVideoChanged,
    /// `?1049`: the requested buffer (`true` = alternate) differs from
    /// `is_private`'s `action`, so the screen must swap buffers to match.
    AlternateScreenRequested(bool),
}

impl Modes {
    /// Apply `action` to the mode named by `(code, private)`. Returns the
    /// side effect the screen must still perform, or `None` if `code` is not
    /// recognized (the caller logs that case).
    pub fn apply(&mut self, code: u16, private: bool, action: &SetMode) -> Option<ModeEffect> {
        if private {
            match code {
                1 => {
                    self.decckm = Decckm::new(action);
                    Some(ModeEffect::None)
                }
                7 => {
                    self.decawm = Decawm::new(action);
                    Some(ModeEffect::None)
                }
                8 => {
                    self.decarm = Decarm::new(action);
                    Some(ModeEffect::None)
                }
                6 => {
                    self.decom = Decom::new(action);
                    Some(ModeEffect::CursorHomed)
                }
                5 => {
                    self.decscnm = Decscnm::new(action);
                    Some(ModeEffect::ReverseVideoChanged)
                }
                25 => {
                    self.dectcem = Dectcem::new(action);
                    Some(ModeEffect::CursorVisibilityChanged)
                }
                3 => {
                    self.deccolm = Deccolm::new(action);
                    Some(ModeEffect::ColumnModeChanged)
                }
                2004 => {
                    self.bracketed_paste = RlBracket::new(action);
                    Some(ModeEffect::None)
                }
                1004 => {
                    self.focus_tracking = XtMseWin::new(action);
                    Some(ModeEffect::None)
                }
                12 => {
                    self.cursor_blink = XtCBlink::new(action);
                    Some(ModeEffect::None)
                }
                1036 => {
                    self.extended_keyboard = XtExtKeyb::new(action);
                    Some(ModeEffect::None)
                }
                9 | 1000 | 1002 | 1003 => {
                    if let Some(tracking) = mouse::tracking_from_code(code, action) {
                        self.mouse_tracking = tracking;
                    }
                    Some(ModeEffect::None)
                }
                1005 | 1006 | 1015 => {
                    if let Some(protocol) = mouse::protocol_from_code(code, action) {
                        self.mouse_protocol = protocol;
                    }
                    Some(ModeEffect::None)
                }
                1049 => {
                    self.alt_screen = XtExtscrn::new(action);
                    Some(ModeEffect::AlternateScreenRequested(self.alt_screen.is_alternate()))
                }
                _ => None,
            }
        } else {
            match code {
                4 => {
                    self.irm = Irm::new(action);
                    Some(ModeEffect::None)
                }
                20 => {
                    self.lnm = Lnm::new(action);
                    Some(ModeEffect::None)
                }
                _ => None,
            }
        }
    }

    /// Report the current status of `(code, private)` in DECRPM terms,
    /// or `NotRecognized` if this screen does not track that mode.
    #[must_use]
    pub fn status_of(&self, code: u16, private: bool) -> ModeStatus {
        let status: Option<ModeStatus> = if private {
            match code {
                1 => Some(self.decckm.status()),
                7 => Some(self.decawm.status()),
                8 => Some(self.decarm.status()),
                6 => Some(self.decom.status()),
                5 => Some(self.decscnm.status()),
                25 => Some(self.dectcem.status()),
                3 => Some(self.deccolm.status()),
                2004 => Some(self.bracketed_paste.status()),
                1004 => Some(self.focus_tracking.status()),
                12 => Some(self.cursor_blink.status()),
                1036 => Some(self.extended_keyboard.status()),
                9 | 1000 | 1002 | 1003 => Some(if self.mouse_tracking.code() == code {
                    self.mouse_tracking.status()
                } else {
                    ModeStatus::Reset
                }),
                1005 | 1006 | 1015 => Some(if self.mouse_protocol.code() == code {
                    self.mouse_protocol.status()
                } else {
                    ModeStatus::Reset
                }),
                1049 => Some(self.alt_screen.status()),
                _ => None,
            }
        } else {
            match code {
                4 => Some(self.irm.status()),
                20 => Some(self.lnm.status()),
                _ => None,
            }
        };
        status.unwrap_or(ModeStatus::NotRecognized)
    }
}
