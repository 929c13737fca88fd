// Copyright (C) 2024-2025 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use freminal_terminal_emulator::screen::Screen;
use proptest::prelude::*;

proptest! {
    #[test]
    fn cursor_stays_in_bounds_after_arbitrary_draws(
        lines in 1u32..12,
        columns in 1u32..20,
        text in "[ -~]{0,64}",
    ) {
        let mut screen = Screen::new(lines, columns, 10).unwrap();
        for c in text.chars() {
            screen.draw(c);
        }
        let cursor = screen.cursor();
        prop_assert!(cursor.x < screen.columns());
        prop_assert!(cursor.y < screen.lines());
    }

    #[test]
    fn cursor_stays_in_bounds_after_motion(
        dy in -20i32..20,
        dx in -20i32..20,
    ) {
        let mut screen = Screen::new(5, 10, 0).unwrap();
        if dy >= 0 {
            screen.cursor_down(dy as u32);
        } else {
            screen.cursor_up((-dy) as u32);
        }
        if dx >= 0 {
            screen.cursor_forward(dx as u32);
        } else {
            screen.cursor_back((-dx) as u32);
        }
        let cursor = screen.cursor();
        prop_assert!(cursor.x < screen.columns());
        prop_assert!(cursor.y < screen.lines());
    }

    #[test]
    fn resize_always_leaves_cursor_in_bounds(
        lines in 1u32..12,
        columns in 1u32..20,
        new_lines in 1u32..12,
        new_columns in 1u32..20,
        text in "[ -~]{0,64}",
    ) {
        let mut screen = Screen::new(lines, columns, 10).unwrap();
        for c in text.chars() {
            screen.draw(c);
        }
        screen.resize(new_lines, new_columns).unwrap();
        let cursor = screen.cursor();
        prop_assert!(cursor.x < screen.columns());
        prop_assert!(cursor.y < screen.lines());
    }
}
