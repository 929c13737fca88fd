// Copyright (C) 2024-2025 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Outward notification surface (§4.7, §9). The screen only publishes to a
//! sink; the sink must never retain the screen (no cycles).

/// Capability set a host/UI layer implements to receive screen
/// notifications and replies. All methods have a default no-op body so an
/// embedder can override only the events it cares about.
pub trait Callbacks {
    /// Bytes destined for the child process: device/mode replies, CPR, etc.
    fn write_to_child(&mut self, _bytes: &[u8]) {}

    /// Alt-screen swap; `is_main` is true after switching back to main.
    fn buf_toggled(&mut self, _is_main: bool) {}

    fn bell(&mut self) {}

    /// Charset encoding toggled between UTF-8 and Latin-1/8-bit.
    fn use_utf8(&mut self, _utf8: bool) {}

    fn title_changed(&mut self, _title: &str) {}

    fn icon_changed(&mut self, _icon: &str) {}

    fn set_dynamic_color(&mut self, _code: u32, _value: Option<&str>) {}

    fn set_color_table_color(&mut self, _code: u32, _value: Option<&str>) {}

    fn request_capabilities(&mut self, _query: &str) {}
}

/// A sink that drops every event. The default for a screen constructed
/// without an explicit embedder callback.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullCallbacks;

impl Callbacks for NullCallbacks {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_callbacks_accepts_every_event_without_panicking() {
        let mut cb = NullCallbacks;
        cb.write_to_child(b"hello");
        cb.buf_toggled(true);
        cb.bell();
        cb.use_utf8(false);
        cb.title_changed("t");
        cb.icon_changed("i");
        cb.set_dynamic_color(10, Some("#fff"));
        cb.set_color_table_color(4, None);
        cb.request_capabilities("q");
    }
}
