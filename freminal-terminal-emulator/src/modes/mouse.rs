// Copyright (C) 2024-2025 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use core::fmt;

use super::{ModeStatus, SetMode, TerminalMode};

/// Which events are reported. Exclusive within the group: setting one
/// tracking mode replaces whatever was previously set (§4.5).
#[derive(Debug, Eq, PartialEq, Default, Clone, Copy)]
pub enum MouseTracking {
    #[default]
    Off,
    /// `?9` X10 compatibility: button-down only.
    X10,
    /// `?1000` VT200: button press and release.
    ButtonEvent,
    /// `?1002` VT200 + button-motion tracking while a button is held.
    ButtonMotion,
    /// `?1003` all-motion tracking, independent of button state.
    AnyMotion,
}

impl MouseTracking {
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            Self::Off | Self::X10 => 9,
            Self::ButtonEvent => 1000,
            Self::ButtonMotion => 1002,
            Self::AnyMotion => 1003,
        }
    }
}

/// Which wire format mouse reports use. Exclusive within the group.
#[derive(Debug, Eq, PartialEq, Default, Clone, Copy)]
pub enum MouseProtocol {
    #[default]
    Normal,
    /// `?1005` UTF-8 extended coordinates.
    Utf8,
    /// `?1006` SGR extended coordinates.
    Sgr,
    /// `?1015` urxvt extended coordinates.
    Urxvt,
}

impl MouseProtocol {
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            Self::Normal => 1005,
            Self::Utf8 => 1005,
            Self::Sgr => 1006,
            Self::Urxvt => 1015,
        }
    }
}

/// Construct a [`MouseTracking`] value from the private mode code the CSI
/// sequence named and the requested set/reset/query action.
#[must_use]
pub const fn tracking_from_code(code: u16, mode: &SetMode) -> Option<MouseTracking> {
    let set = matches!(mode, SetMode::DecSet | SetMode::DecQuery);
    match code {
        9 => Some(if set { MouseTracking::X10 } else { MouseTracking::Off }),
        1000 => Some(if set {
            MouseTracking::ButtonEvent
        } else {
            MouseTracking::Off
        }),
        1002 => Some(if set {
            MouseTracking::ButtonMotion
        } else {
            MouseTracking::Off
        }),
        1003 => Some(if set { MouseTracking::AnyMotion } else { MouseTracking::Off }),
        _ => None,
    }
}

/// Construct a [`MouseProtocol`] value from the private mode code named and
/// the requested set/reset/query action.
#[must_use]
pub const fn protocol_from_code(code: u16, mode: &SetMode) -> Option<MouseProtocol> {
    let set = matches!(mode, SetMode::DecSet | SetMode::DecQuery);
    match code {
        1005 => Some(if set { MouseProtocol::Utf8 } else { MouseProtocol::Normal }),
        1006 => Some(if set { MouseProtocol::Sgr } else { MouseProtocol::Normal }),
        1015 => Some(if set { MouseProtocol::Urxvt } else { MouseProtocol::Normal }),
        _ => None,
    }
}

impl TerminalMode for MouseTracking {
    fn code(&self) -> u16 {
        Self::code(*self)
    }

    fn is_private(&self) -> bool {
        true
    }

    fn status(&self) -> ModeStatus {
        if matches!(self, Self::Off) {
            ModeStatus::Reset
        } else {
            ModeStatus::Set
        }
    }
}

impl TerminalMode for MouseProtocol {
    fn code(&self) -> u16 {
        Self::code(*self)
    }

    fn is_private(&self) -> bool {
        true
    }

    fn status(&self) -> ModeStatus {
        if matches!(self, Self::Normal) {
            ModeStatus::Reset
        } else {
            ModeStatus::Set
        }
    }
}

impl fmt::Display for MouseTracking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Off => write!(f, "Mouse Tracking Off"),
            Self::X10 => write!(f, "Mouse Tracking: X10 Compatibility"),
            Self::ButtonEvent => write!(f, "Mouse Tracking: Button Event"),
            Self::ButtonMotion => write!(f, "Mouse Tracking: Button Motion"),
            Self::AnyMotion => write!(f, "Mouse Tracking: Any Motion"),
        }
    }
}

impl fmt::Display for MouseProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "Mouse Protocol: Normal"),
            Self::Utf8 => write!(f, "Mouse Protocol: UTF-8"),
            Self::Sgr => write!(f, "Mouse Protocol: SGR"),
            Self::Urxvt => write!(f, "Mouse Protocol: URXVT"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setting_one_tracking_mode_replaces_prior() {
        assert_eq!(
            tracking_from_code(1002, &SetMode::DecSet),
            Some(MouseTracking::ButtonMotion)
        );
        assert_eq!(
            tracking_from_code(1000, &SetMode::DecRst),
            Some(MouseTracking::Off)
        );
    }

    #[test]
    fn protocol_group_is_independent_of_tracking_group() {
        assert_eq!(
            protocol_from_code(1006, &SetMode::DecSet),
            Some(MouseProtocol::Sgr)
        );
    }
}
