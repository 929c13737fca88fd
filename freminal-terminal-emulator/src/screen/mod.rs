// Copyright (C) 2024-2025 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The screen state machine: owns the main and alternate grids, history,
//! cursor, mode/charset state, and scroll margins, and exposes the typed
//! operations a parser drives it with (§4.6 of the design notes this crate
//! was built against). Per-character and motion operations never fail;
//! only construction, resize, and the bounds-checked accessors return
//! [`ScreenError`].

mod draw;
mod erase;
mod mode_state;
mod motion;
mod reports;
mod resize;
mod scroll;
mod sgr;

pub use mode_state::{ModeEffect, Modes};

use anyhow::Context;
use freminal_common::charset::{CharsetSlot, CharsetState};
use freminal_common::wcwidth::WcwidthStrategy;
use freminal_grid::cursor::{Cursor, CursorShape};
use freminal_grid::history::HistoryBuf;
use freminal_grid::line::Line;
use freminal_grid::linebuf::LineBuf;
use freminal_grid::savepoint::{Savepoint, SavepointRing};

use crate::callbacks::{Callbacks, NullCallbacks};
use crate::error::ScreenError;
use crate::modes::SetMode;
use crate::options::ScreenOptions;

/// Which of the two owned [`LineBuf`]s is currently live. Swapping this is a
/// pointer re-tag, never a move or copy of the underlying grid (§9
/// "Ownership").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ActiveBuffer {
    #[default]
    Main,
    Alt,
}

/// Every 8th column is a tab stop at init (§3 invariant 6).
fn default_tabstops(columns: usize) -> Vec<bool> {
    (0..columns).map(|x| x > 0 && x % 8 == 0).collect()
}

/// The screen state machine. Generic over the outward notification sink;
/// defaults to [`NullCallbacks`] so a screen can be constructed without an
/// embedder in the loop.
pub struct Screen<C: Callbacks = NullCallbacks> {
    main: LineBuf,
    alt: LineBuf,
    history: HistoryBuf,
    main_tabstops: Vec<bool>,
    alt_tabstops: Vec<bool>,
    main_savepoints: SavepointRing,
    alt_savepoints: SavepointRing,
    active: ActiveBuffer,
    cursor: Cursor,
    charset: CharsetState,
    modes: Modes,
    lines: usize,
    columns: usize,
    margin_top: usize,
    margin_bottom: usize,
    is_dirty: bool,
    cursor_changed: bool,
    history_line_added_count: usize,
    wcwidth: WcwidthStrategy,
    savepoint_capacity: usize,
    /// Set when the cursor has just filled the last column under DECAWM:
    /// the wrap itself is deferred until the *next* printable character, so
    /// that a line exactly `columns` characters wide does not spuriously
    /// wrap (the classic xterm "last column" / auto-wrap-pending flag).
    wrap_pending: bool,
    callbacks: C,
}

fn allocate_buffers(lines: u32, columns: u32, scrollback: u32) -> anyhow::Result<(LineBuf, LineBuf, HistoryBuf)> {
    let lines = usize::try_from(lines).context("line count does not fit usize")?;
    let columns = usize::try_from(columns).context("column count does not fit usize")?;
    let scrollback = usize::try_from(scrollback).context("scrollback does not fit usize")?;
    Ok((
        LineBuf::new(lines, columns),
        LineBuf::new(lines, columns),
        HistoryBuf::new(scrollback, columns),
    ))
}

impl Screen<NullCallbacks> {
    /// Construct a screen with default options and a sink that drops every
    /// event. Defaults per the external interface: `(24, 80, 0)`.
    pub fn new(lines: u32, columns: u32, scrollback: u32) -> Result<Self, ScreenError> {
        Self::with_options(lines, columns, scrollback, NullCallbacks, ScreenOptions::default())
    }
}

impl<C: Callbacks> Screen<C> {
    /// Construct a screen with an explicit callback sink and default
    /// options.
    pub fn with_callbacks(lines: u32, columns: u32, scrollback: u32, callbacks: C) -> Result<Self, ScreenError> {
        Self::with_options(lines, columns, scrollback, callbacks, ScreenOptions::default())
    }

    /// Construct a screen with an explicit callback sink and
    /// [`ScreenOptions`].
    pub fn with_options(
        lines: u32,
        columns: u32,
        scrollback: u32,
        callbacks: C,
        options: ScreenOptions,
    ) -> Result<Self, ScreenError> {
        let (main, alt, history) =
            allocate_buffers(lines, columns, scrollback).map_err(|source| ScreenError::ConstructAllocation {
                lines,
                columns,
                source,
            })?;
        let columns_usize = main.columns();
        let lines_usize = main.lines();
        Ok(Self {
            main,
            alt,
            history,
            main_tabstops: default_tabstops(columns_usize),
            alt_tabstops: default_tabstops(columns_usize),
            main_savepoints: SavepointRing::new(options.savepoint_capacity),
            alt_savepoints: SavepointRing::new(options.savepoint_capacity),
            active: ActiveBuffer::Main,
            cursor: Cursor::default(),
            charset: CharsetState::default(),
            modes: Modes::default(),
            lines: lines_usize,
            columns: columns_usize,
            margin_top: 0,
            margin_bottom: lines_usize.saturating_sub(1),
            is_dirty: true,
            cursor_changed: true,
            history_line_added_count: 0,
            wcwidth: options.wcwidth_strategy,
            savepoint_capacity: options.savepoint_capacity,
            wrap_pending: false,
            callbacks,
        })
    }

    /// Return to the screen's initial state without reallocating any
    /// buffer.
    pub fn reset(&mut self) {
        for y in 0..self.lines {
            self.main.clear_row(y, ' ');
            self.alt.clear_row(y, ' ');
        }
        self.history.resize(0);
        self.history.resize(self.history.capacity());
        self.main_tabstops = default_tabstops(self.columns);
        self.alt_tabstops = default_tabstops(self.columns);
        self.main_savepoints = SavepointRing::new(self.savepoint_capacity);
        self.alt_savepoints = SavepointRing::new(self.savepoint_capacity);
        self.active = ActiveBuffer::Main;
        self.cursor = Cursor::default();
        self.charset = CharsetState::default();
        self.modes = Modes::default();
        self.margin_top = 0;
        self.margin_bottom = self.lines.saturating_sub(1);
        self.wrap_pending = false;
        self.mark_dirty();
        self.mark_cursor_changed();
        self.history_line_added_count = 0;
    }

    #[must_use]
    pub const fn lines(&self) -> usize {
        self.lines
    }

    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    #[must_use]
    pub const fn cursor_changed(&self) -> bool {
        self.cursor_changed
    }

    #[must_use]
    pub const fn history_line_added_count(&self) -> usize {
        self.history_line_added_count
    }

    #[must_use]
    pub const fn modes(&self) -> &Modes {
        &self.modes
    }

    #[must_use]
    pub const fn is_alt_screen(&self) -> bool {
        matches!(self.active, ActiveBuffer::Alt)
    }

    /// Clear `is_dirty`, `cursor_changed`, and zero
    /// `history_line_added_count`. Intended to be called by the renderer
    /// once per frame, after it has sampled state.
    pub fn reset_dirty(&mut self) {
        self.is_dirty = false;
        self.cursor_changed = false;
        self.history_line_added_count = 0;
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.is_dirty = true;
    }

    pub(crate) fn mark_cursor_changed(&mut self) {
        self.cursor_changed = true;
    }

    pub(crate) const fn active_buf(&self) -> &LineBuf {
        match self.active {
            ActiveBuffer::Main => &self.main,
            ActiveBuffer::Alt => &self.alt,
        }
    }

    pub(crate) fn active_buf_mut(&mut self) -> &mut LineBuf {
        match self.active {
            ActiveBuffer::Main => &mut self.main,
            ActiveBuffer::Alt => &mut self.alt,
        }
    }

    pub(crate) fn active_tabstops(&self) -> &[bool] {
        match self.active {
            ActiveBuffer::Main => &self.main_tabstops,
            ActiveBuffer::Alt => &self.alt_tabstops,
        }
    }

    pub(crate) fn active_tabstops_mut(&mut self) -> &mut Vec<bool> {
        match self.active {
            ActiveBuffer::Main => &mut self.main_tabstops,
            ActiveBuffer::Alt => &mut self.alt_tabstops,
        }
    }

    pub(crate) fn active_savepoints_mut(&mut self) -> &mut SavepointRing {
        match self.active {
            ActiveBuffer::Main => &mut self.main_savepoints,
            ActiveBuffer::Alt => &mut self.alt_savepoints,
        }
    }

    /// Bounds-checked read of a row of the active buffer (§7 kind 2:
    /// out-of-range accessors signal an error rather than clamping).
    pub fn line_at(&self, y: usize) -> Result<&Line, ScreenError> {
        self.active_buf().line(y).ok_or(ScreenError::LineOutOfRange(y))
    }

    /// Bounds-checked read of a scrollback row, `0` being the newest.
    pub fn history_line_at(&self, offset: usize) -> Result<&Line, ScreenError> {
        self.history.read_line_at(offset).ok_or(ScreenError::HistoryOutOfRange(offset))
    }

    /// Sample up to `self.lines` rows into `dest`, honoring a vertical
    /// scroll offset of `scrolled_by` history lines. `force` requests a full
    /// redraw regardless of the dirty flag. Returns `(cursor_changed, the
    /// effective scrolled_by actually applied)`; the latter is clamped to
    /// the amount of history actually available.
    ///
    /// This is the renderer's one-shot read interface (§5); it must only be
    /// called when the mutator is quiescent.
    pub fn update_cell_data(&mut self, dest: &mut Vec<Line>, scrolled_by: usize, force: bool) -> (bool, usize) {
        let effective_scrolled_by = scrolled_by.min(self.history.count());
        if !self.is_dirty && !force && effective_scrolled_by == 0 {
            let changed = self.cursor_changed;
            return (changed, effective_scrolled_by);
        }

        dest.clear();
        let history_rows = effective_scrolled_by.min(self.lines);
        for i in (0..history_rows).rev() {
            if let Ok(line) = self.history_line_at(i) {
                dest.push(line.clone());
            }
        }
        let remaining = self.lines.saturating_sub(dest.len());
        for y in 0..remaining {
            if let Ok(line) = self.line_at(y) {
                dest.push(line.clone());
            }
        }

        let changed = self.cursor_changed;
        (changed, effective_scrolled_by)
    }

    /// Toggle between the main and alternate screen (`?1049`). Entering
    /// saves the cursor and charset state, clears the alt screen, and homes
    /// the cursor; leaving restores the saved cursor.
    pub fn toggle_alt_screen(&mut self) {
        match self.active {
            ActiveBuffer::Main => {
                self.push_savepoint();
                self.active = ActiveBuffer::Alt;
                for y in 0..self.lines {
                    self.alt.clear_row(y, ' ');
                }
                self.cursor.x = 0;
                self.cursor.y = 0;
                debug!("switched to alternate screen");
                self.callbacks.buf_toggled(false);
            }
            ActiveBuffer::Alt => {
                self.active = ActiveBuffer::Main;
                self.pop_savepoint();
                debug!("switched to main screen");
                self.callbacks.buf_toggled(true);
            }
        }
        self.modes.alt_screen = crate::modes::xtextscrn::XtExtscrn::new(&bool_to_setmode(self.is_alt_screen()));
        self.mark_dirty();
        self.mark_cursor_changed();
    }

    /// `DECSC`: push the current cursor/mode/charset snapshot onto the
    /// active buffer's savepoint ring.
    pub fn save_cursor(&mut self) {
        self.push_savepoint();
    }

    fn push_savepoint(&mut self) {
        let sp = Savepoint {
            cursor: self.cursor,
            decom: self.modes.decom.is_set(),
            decawm: self.modes.decawm.is_set(),
            decscnm: self.modes.decscnm.is_set(),
            charset: self.charset,
        };
        self.active_savepoints_mut().push(sp);
    }

    /// `DECRC`: pop the most recent snapshot and restore cursor, DECOM,
    /// DECAWM, DECSCNM, and charset state from it. An empty ring homes the
    /// cursor and resets DECOM/DECSCNM/charsets instead (§4.6).
    pub fn restore_cursor(&mut self) {
        self.pop_savepoint();
    }

    fn pop_savepoint(&mut self) {
        match self.active_savepoints_mut().pop() {
            Some(sp) => {
                self.cursor = sp.cursor;
                self.modes.decom = crate::modes::decom::Decom::new(&bool_to_setmode(sp.decom));
                self.modes.decawm = crate::modes::decawm::Decawm::new(&bool_to_setmode(sp.decawm));
                self.modes.decscnm = crate::modes::decscnm::Decscnm::new(&bool_to_setmode(sp.decscnm));
                self.charset = sp.charset;
            }
            None => {
                self.cursor.x = 0;
                self.cursor.y = 0;
                self.modes.decom = crate::modes::decom::Decom::new(&SetMode::DecRst);
                self.modes.decscnm = crate::modes::decscnm::Decscnm::new(&SetMode::DecRst);
                self.charset = CharsetState::default();
            }
        }
        self.mark_dirty();
        self.mark_cursor_changed();
    }

    /// `DECALN`: home the cursor, clear the margins to the full screen, and
    /// fill the screen with uppercase `E`.
    ///
    /// The distilled description this crate was built from sets
    /// `margin_bottom = columns - 1` after the fill, confusing the column
    /// count for the line count; this crate follows VT510 and sets
    /// `margin_bottom = lines - 1` instead (see DESIGN.md).
    pub fn align(&mut self) {
        self.margin_top = 0;
        self.margin_bottom = self.lines.saturating_sub(1);
        self.cursor.x = 0;
        self.cursor.y = 0;
        let lines = self.lines;
        let buf = self.active_buf_mut();
        for y in 0..lines {
            buf.clear_row(y, 'E');
        }
        self.mark_dirty();
        self.mark_cursor_changed();
    }

    /// Set the mode named by `(code, private)` (`CSI ... h` / `CSI ? ... h`).
    /// Unsupported codes are logged at `warn!` and otherwise ignored (§4.5).
    pub fn set_mode(&mut self, code: u16, private: bool) {
        self.apply_mode(code, private, &SetMode::DecSet);
    }

    /// Reset the mode named by `(code, private)` (`CSI ... l`).
    pub fn reset_mode(&mut self, code: u16, private: bool) {
        self.apply_mode(code, private, &SetMode::DecRst);
    }

    fn apply_mode(&mut self, code: u16, private: bool, action: &SetMode) {
        let Some(effect) = self.modes.apply(code, private, action) else {
            warn!(code, private, "unsupported mode code");
            return;
        };
        match effect {
            ModeEffect::None => {}
            ModeEffect::CursorHomed => {
                self.cursor.x = 0;
                self.cursor.y = if self.modes.decom.is_set() { self.margin_top } else { 0 };
                self.mark_cursor_changed();
                debug!(private, code, "origin mode toggled, cursor homed");
            }
            ModeEffect::ColumnModeChanged => {
                self.erase_in_display(2, false);
                self.cursor.x = 0;
                self.cursor.y = 0;
                self.mark_dirty();
                self.mark_cursor_changed();
                debug!(columns = self.modes.deccolm.columns(), "column mode toggled");
            }
            ModeEffect::CursorVisibilityChanged => {
                self.cursor.visible = self.modes.dectcem.is_visible();
                self.mark_cursor_changed();
            }
            ModeEffect::ReverseVideoChanged => {
                self.mark_dirty();
            }
            ModeEffect::AlternateScreenRequested(alternate) => {
                if alternate != self.is_alt_screen() {
                    self.toggle_alt_screen();
                }
            }
        }
    }

    /// Assemble a DECRPM reply for `(code, private)`.
    #[must_use]
    pub fn report_mode_status(&self, code: u16, private: bool) -> String {
        let status = self.modes.status_of(code, private);
        crate::modes::report_mode_status_for(code, private, status)
    }

    /// Switch the active charset slot (`SI`/`SO`).
    pub fn change_charset(&mut self, which: CharsetSlot) {
        self.charset.change_charset(which);
    }

    /// Designate a table into slot `which` (an `SCS` escape).
    pub fn designate_charset(&mut self, which: CharsetSlot, designator: char) {
        self.charset.designate_charset(which, designator);
    }

    /// Toggle UTF-8 vs Latin-1/8-bit decoding, notifying the callback sink.
    pub fn use_latin1(&mut self, latin1: bool) {
        self.charset.use_utf8(!latin1);
        self.callbacks.use_utf8(!latin1);
    }

    pub fn bell(&mut self) {
        self.callbacks.bell();
    }

    pub fn set_title(&mut self, title: &str) {
        self.callbacks.title_changed(title);
    }

    pub fn set_icon(&mut self, icon: &str) {
        self.callbacks.icon_changed(icon);
    }

    pub fn set_dynamic_color(&mut self, code: u32, value: Option<&str>) {
        self.callbacks.set_dynamic_color(code, value);
    }

    pub fn set_color_table_color(&mut self, code: u32, value: Option<&str>) {
        self.callbacks.set_color_table_color(code, value);
    }

    pub fn request_capabilities(&mut self, query: &str) {
        self.callbacks.request_capabilities(query);
    }

    /// `DECSCUSR`: set the cursor shape and blink behavior. `Ps` values
    /// follow VT520: 0/1 blinking block, 2 steady block, 3 blinking
    /// underline, 4 steady underline, 5 blinking bar, 6 steady bar.
    pub fn set_cursor_style(&mut self, ps: u8) {
        let (shape, blink) = match ps {
            0 | 1 => (CursorShape::Block, true),
            2 => (CursorShape::Block, false),
            3 => (CursorShape::Underline, true),
            4 => (CursorShape::Underline, false),
            5 => (CursorShape::Beam, true),
            6 => (CursorShape::Beam, false),
            other => {
                warn!(ps = other, "unsupported DECSCUSR parameter");
                return;
            }
        };
        self.cursor.shape = shape;
        self.cursor.blink = blink;
        self.mark_cursor_changed();
    }

    pub(crate) const fn wcwidth(&self) -> WcwidthStrategy {
        self.wcwidth
    }

    pub(crate) const fn margins(&self) -> (usize, usize) {
        (self.margin_top, self.margin_bottom)
    }
}

fn bool_to_setmode(set: bool) -> SetMode {
    if set {
        SetMode::DecSet
    } else {
        SetMode::DecRst
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn screen(lines: u32, columns: u32) -> Screen {
        Screen::new(lines, columns, 10).unwrap()
    }

    #[test]
    fn new_screen_has_requested_geometry() {
        let s = screen(24, 80);
        assert_eq!(s.lines(), 24);
        assert_eq!(s.columns(), 80);
        assert_eq!(s.margin_top, 0);
        assert_eq!(s.margin_bottom, 23);
    }

    #[test]
    fn default_tab_stops_are_every_eighth_column() {
        let s = screen(5, 20);
        let stops: Vec<usize> = s
            .active_tabstops()
            .iter()
            .enumerate()
            .filter_map(|(i, &set)| set.then_some(i))
            .collect();
        assert_eq!(stops, vec![8, 16]);
    }

    #[test]
    fn toggle_alt_screen_homes_cursor_and_round_trips() {
        let mut s = screen(3, 5);
        s.cursor.x = 2;
        s.cursor.y = 1;
        s.toggle_alt_screen();
        assert!(s.is_alt_screen());
        assert_eq!((s.cursor.x, s.cursor.y), (0, 0));
        s.toggle_alt_screen();
        assert!(!s.is_alt_screen());
        assert_eq!((s.cursor.x, s.cursor.y), (2, 1));
    }

    #[test]
    fn set_mode_1049_toggles_alternate_screen() {
        let mut s = screen(3, 5);
        s.cursor.x = 2;
        s.cursor.y = 1;
        s.set_mode(1049, true);
        assert!(s.is_alt_screen());
        assert_eq!((s.cursor.x, s.cursor.y), (0, 0));
        assert_eq!(s.modes.status_of(1049, true), crate::modes::ModeStatus::Set);
        s.reset_mode(1049, true);
        assert!(!s.is_alt_screen());
        assert_eq!((s.cursor.x, s.cursor.y), (2, 1));
        assert_eq!(s.modes.status_of(1049, true), crate::modes::ModeStatus::Reset);
    }

    #[test]
    fn restore_from_empty_ring_homes_cursor() {
        let mut s = screen(3, 5);
        s.cursor.x = 4;
        s.cursor.y = 2;
        s.restore_cursor();
        assert_eq!((s.cursor.x, s.cursor.y), (0, 0));
    }

    #[test]
    fn save_restore_round_trips_cursor_and_modes() {
        let mut s = screen(3, 5);
        s.cursor.x = 2;
        s.cursor.y = 1;
        s.set_mode(6, true); // DECOM
        s.save_cursor();
        s.cursor.x = 0;
        s.reset_mode(6, true);
        s.restore_cursor();
        assert_eq!(s.cursor.x, 2);
        assert!(s.modes.decom.is_set());
    }

    #[test]
    fn decaln_fills_screen_with_e_and_homes_cursor() {
        let mut s = screen(2, 3);
        s.cursor.x = 1;
        s.cursor.y = 1;
        s.align();
        assert_eq!((s.cursor.x, s.cursor.y), (0, 0));
        assert_eq!(s.margin_bottom, 1);
        let line = s.line_at(0).unwrap();
        assert!(line.cells().iter().all(|c| c.codepoint() == 'E'));
    }

    #[test]
    fn unsupported_mode_code_is_ignored() {
        let mut s = screen(3, 5);
        s.set_mode(9999, true);
        assert_eq!(s.modes.status_of(9999, true), crate::modes::ModeStatus::NotRecognized);
    }

    #[test]
    fn dectcem_toggle_marks_cursor_changed_and_hides_cursor() {
        let mut s = screen(3, 5);
        s.reset_dirty();
        s.reset_mode(25, true);
        assert!(s.cursor_changed());
        assert!(!s.cursor.visible);
    }
}
