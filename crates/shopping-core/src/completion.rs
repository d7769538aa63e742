//! Completion Detector
//!
//! "Complete" means at least one item and every item bought. The tracker
//! turns that level into an edge: it reports a celebration only when the
//! list goes from not complete to complete.

use std::time::Duration;

use crate::config::ListConfig;
use crate::domain::Item;

/// Non-empty and all bought
pub fn is_complete(items: &[Item]) -> bool {
    !items.is_empty() && items.iter().all(|item| item.is_bought)
}

/// One firing of the completion effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Celebration {
    /// Increases by one per firing; lets a stale timer recognise itself
    pub generation: u64,
    pub duration: Duration,
    pub pieces: u32,
}

/// Remembers the previous completion state between recomputations
#[derive(Debug, Clone, Default)]
pub struct CompletionTracker {
    was_complete: bool,
    fired: u64,
}

impl CompletionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current snapshot. Returns a celebration on a false -> true
    /// transition and `None` otherwise.
    pub fn observe(&mut self, items: &[Item], config: &ListConfig) -> Option<Celebration> {
        let complete = is_complete(items);
        let rising = complete && !self.was_complete;
        self.was_complete = complete;

        if !rising {
            return None;
        }

        self.fired += 1;
        tracing::info!("[COMPLETION] All {} items bought, celebration #{}", items.len(), self.fired);
        Some(Celebration {
            generation: self.fired,
            duration: config.celebration_duration(),
            pieces: config.confetti_pieces,
        })
    }

    pub fn is_complete(&self) -> bool {
        self.was_complete
    }

    /// Number of celebrations fired so far
    pub fn fired(&self) -> u64 {
        self.fired
    }
}
