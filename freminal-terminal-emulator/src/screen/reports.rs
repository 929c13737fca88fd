// Copyright (C) 2024-2025 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Device attribute and status reports. These are the only operations that
//! write bytes back to the child process rather than mutating screen state
//! (§4.6 "Device reports", §4.7 the callback surface).

use super::Screen;
use crate::callbacks::Callbacks;

const PRIMARY_VERSION: u32 = 1;
const SECONDARY_VERSION: u32 = 0;

impl<C: Callbacks> Screen<C> {
    /// `DA`/`DA2`: report device attributes. `secondary` selects `CSI > c`
    /// (VT220-class terminal, this crate's own version pair) over the
    /// primary `CSI ? 62 c` (VT220 with no extensions advertised).
    pub fn report_device_attributes(&mut self, secondary: bool) {
        let reply = if secondary {
            format!("\x1b[>1;{PRIMARY_VERSION};{SECONDARY_VERSION}c")
        } else {
            "\x1b[?62c".to_string()
        };
        self.callbacks.write_to_child(reply.as_bytes());
    }

    /// `DSR`: `which == 5` reports terminal status (always OK); `which ==
    /// 6` reports the cursor position (`CPR`), `1`-based and DECOM-relative
    /// when origin mode is set, with a leading `?` when the request was
    /// private (`CSI ? 6 n`).
    pub fn report_device_status(&mut self, which: u8, private: bool) {
        let reply = match which {
            5 => "\x1b[0n".to_string(),
            6 => {
                let bias = if self.modes.decom.is_set() { self.margin_top } else { 0 };
                let row = self.cursor.y.saturating_sub(bias) + 1;
                let col = self.cursor.x + 1;
                let prefix = if private { "?" } else { "" };
                format!("\x1b[{prefix}{row};{col}R")
            }
            other => {
                warn!(which = other, "unsupported device status request");
                return;
            }
        };
        self.callbacks.write_to_child(reply.as_bytes());
    }
}
