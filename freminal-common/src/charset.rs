// Copyright (C) 2024-2025 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! G0/G1 charset designation and translation, mirroring the classic VT100
//! `g0_charset`/`g1_charset`/`g_charset` trio: two designated tables, one
//! active slot, switched independently of which table it points at.

/// Which of the two designation slots an operation addresses.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CharsetSlot {
    G0,
    G1,
}

/// A 256-entry codepoint translation table for a single designated charset.
///
/// Only codepoints below 256 are ever looked up (`draw` passes codepoints
/// `>= 256` through untranslated), so a fixed-size array is exact rather than
/// a sparse map.
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct CharsetTable([char; 256]);

impl std::fmt::Debug for CharsetTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CharsetTable").finish_non_exhaustive()
    }
}

impl CharsetTable {
    #[must_use]
    pub fn translate(&self, c: char) -> char {
        if (c as u32) < 256 {
            self.0[c as usize]
        } else {
            c
        }
    }

    /// Identity table: US-ASCII/UTF-8, no translation.
    #[must_use]
    pub fn ascii() -> Self {
        let mut table = [' '; 256];
        for (i, slot) in table.iter_mut().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            let byte = i as u8;
            *slot = char::from(byte);
        }
        Self(table)
    }

    /// The DEC Special Graphics and Line Drawing set, designated by `0`.
    ///
    /// Only the printable ASCII range `0x60..=0x7e` is remapped to the
    /// box-drawing glyphs; everything else behaves like ASCII.
    #[must_use]
    pub fn dec_special_graphics() -> Self {
        let mut table = Self::ascii();
        const MAPPING: &[(u8, char)] = &[
            (0x60, '\u{25c6}'), // ` -> diamond
            (0x61, '\u{2592}'), // a -> checkerboard
            (0x62, '\u{2409}'), // b -> HT symbol
            (0x63, '\u{240c}'), // c -> FF symbol
            (0x64, '\u{240d}'), // d -> CR symbol
            (0x65, '\u{240a}'), // e -> LF symbol
            (0x66, '\u{00b0}'), // f -> degree
            (0x67, '\u{00b1}'), // g -> plus/minus
            (0x68, '\u{2424}'), // h -> NL symbol
            (0x69, '\u{240b}'), // i -> VT symbol
            (0x6a, '\u{2518}'), // j -> bottom-right corner
            (0x6b, '\u{2510}'), // k -> top-right corner
            (0x6c, '\u{250c}'), // l -> top-left corner
            (0x6d, '\u{2514}'), // m -> bottom-left corner
            (0x6e, '\u{253c}'), // n -> cross
            (0x6f, '\u{23ba}'), // o -> scan line 1
            (0x70, '\u{23bb}'), // p -> scan line 3
            (0x71, '\u{2500}'), // q -> horizontal line
            (0x72, '\u{23bc}'), // r -> scan line 7
            (0x73, '\u{23bd}'), // s -> scan line 9
            (0x74, '\u{251c}'), // t -> left tee
            (0x75, '\u{2524}'), // u -> right tee
            (0x76, '\u{2534}'), // v -> bottom tee
            (0x77, '\u{252c}'), // w -> top tee
            (0x78, '\u{2502}'), // x -> vertical line
            (0x79, '\u{2264}'), // y -> less-or-equal
            (0x7a, '\u{2265}'), // z -> greater-or-equal
            (0x7b, '\u{03c0}'), // { -> pi
            (0x7c, '\u{2260}'), // | -> not-equal
            (0x7d, '\u{00a3}'), // } -> pound sterling
            (0x7e, '\u{00b7}'), // ~ -> middle dot
        ];
        for &(byte, glyph) in MAPPING {
            table.0[byte as usize] = glyph;
        }
        table
    }

    /// Resolve a designator byte (the final intermediate byte of a
    /// `SCS` escape, e.g. `0` or `B`) to the table it selects. Unknown
    /// designators fall back to ASCII.
    #[must_use]
    pub fn from_designator(designator: char) -> Self {
        match designator {
            '0' => Self::dec_special_graphics(),
            _ => Self::ascii(),
        }
    }
}

impl Default for CharsetTable {
    fn default() -> Self {
        Self::ascii()
    }
}

/// The full charset subsystem for one screen buffer: two designated tables,
/// which one is active, and the UTF-8/Latin-1 decoding flag.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CharsetState {
    g0: CharsetTable,
    g1: CharsetTable,
    active: CharsetSlot,
    utf8: bool,
}

impl CharsetState {
    #[must_use]
    pub fn active_table(&self) -> CharsetTable {
        match self.active {
            CharsetSlot::G0 => self.g0,
            CharsetSlot::G1 => self.g1,
        }
    }

    /// Translate a decoded codepoint through the active table.
    #[must_use]
    pub fn translate(&self, c: char) -> char {
        self.active_table().translate(c)
    }

    /// Switch the active slot (`SI`/`SO`), independent of what each slot is
    /// currently designated to.
    pub fn change_charset(&mut self, which: CharsetSlot) {
        self.active = which;
    }

    /// Designate a new table into slot `which` (an `SCS` escape). If that
    /// slot was the active one, the newly designated table becomes active
    /// immediately.
    pub fn designate_charset(&mut self, which: CharsetSlot, designator: char) {
        let table = CharsetTable::from_designator(designator);
        match which {
            CharsetSlot::G0 => self.g0 = table,
            CharsetSlot::G1 => self.g1 = table,
        }
    }

    #[must_use]
    pub const fn is_utf8(&self) -> bool {
        self.utf8
    }

    pub fn use_utf8(&mut self, utf8: bool) {
        self.utf8 = utf8;
    }
}

impl Default for CharsetState {
    fn default() -> Self {
        Self {
            g0: CharsetTable::ascii(),
            g1: CharsetTable::ascii(),
            active: CharsetSlot::G0,
            utf8: true,
        }
    }
}
