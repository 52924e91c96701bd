//! Process-wide focus counter that orders windows for rendering and hit-testing.

use serde::{Deserialize, Serialize};

/// First value handed out; sits above any z-order used by desktop chrome.
pub const DEFAULT_INITIAL_Z_ORDER: u64 = 100;

/// Monotonic stacking counter. Every value is handed out at most once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackingCounter {
    next: u64,
}

impl Default for StackingCounter {
    fn default() -> Self {
        Self::new(DEFAULT_INITIAL_Z_ORDER)
    }
}

impl StackingCounter {
    pub fn new(initial: u64) -> Self {
        Self { next: initial }
    }

    /// The value the next [`StackingCounter::advance`] call will return.
    pub fn peek(&self) -> u64 {
        self.next
    }

    /// Returns the next stacking value and bumps the counter.
    ///
    /// # Panics
    ///
    /// Panics when the `u64` space is exhausted, which needs more open/focus events than any
    /// session can produce.
    pub fn advance(&mut self) -> u64 {
        let value = self.next;
        self.next = value
            .checked_add(1)
            .expect("stacking counter exhausted");
        value
    }
}
