// Copyright (C) 2024-2025 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use freminal_common::wcwidth::WcwidthStrategy;

/// Default savepoint ring capacity (§3 "typical S≈10").
pub const DEFAULT_SAVEPOINT_CAPACITY: usize = 10;

/// Init-time choices the spec leaves open (§9 "wcwidth pluggability", §3
/// "Savepoint... bounded ring of capacity S"). Both are fixed for the
/// lifetime of the screen; neither is reconsidered per-call.
#[derive(Debug, Clone, Copy)]
pub struct ScreenOptions {
    pub wcwidth_strategy: WcwidthStrategy,
    pub savepoint_capacity: usize,
}

impl Default for ScreenOptions {
    fn default() -> Self {
        Self {
            wcwidth_strategy: WcwidthStrategy::default(),
            savepoint_capacity: DEFAULT_SAVEPOINT_CAPACITY,
        }
    }
}

impl ScreenOptions {
    #[must_use]
    pub const fn with_wcwidth_strategy(mut self, strategy: WcwidthStrategy) -> Self {
        self.wcwidth_strategy = strategy;
        self
    }

    #[must_use]
    pub const fn with_savepoint_capacity(mut self, capacity: usize) -> Self {
        self.savepoint_capacity = capacity.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_spec_defaults() {
        let opts = ScreenOptions::default();
        assert_eq!(opts.savepoint_capacity, 10);
        assert_eq!(opts.wcwidth_strategy, WcwidthStrategy::Legacy);
    }

    #[test]
    fn savepoint_capacity_is_clamped_to_at_least_one() {
        let opts = ScreenOptions::default().with_savepoint_capacity(0);
        assert_eq!(opts.savepoint_capacity, 1);
    }
}
