//! LRU (Least Recently Used) replacement policy.

use std::collections::HashMap;

use crate::common::PageRef;
use crate::sim::policy::Replacer;
use crate::sim::FrameSet;

/// Evicts the resident page whose most recent reference is furthest in
/// the past.
///
/// Unlike FIFO this keys on *references*, not insertions: every step,
/// hit or miss, bumps the referenced page's last-used index. The victim
/// is the resident page with the minimum index, found by a linear scan
/// over the (small) frame set.
///
/// Step indices are strictly increasing, so two resident pages can never
/// share a last-used index and the minimum is unique. The scan visits
/// residents in insertion order, which is the tie-break that would apply
/// if that invariant were ever broken.
pub struct LruReplacer {
    /// Page -> step index of its most recent reference.
    ///
    /// Holds exactly the resident pages: entries are added by
    /// `record_access` and dropped on eviction.
    last_used: HashMap<PageRef, usize>,
}

impl LruReplacer {
    /// Create a new LRU replacer.
    pub fn new() -> Self {
        Self {
            last_used: HashMap::new(),
        }
    }
}

impl Replacer for LruReplacer {
    fn record_access(&mut self, page: PageRef, step: usize) {
        self.last_used.insert(page, step);
    }

    fn evicted(&mut self, page: PageRef) {
        self.last_used.remove(&page);
    }

    fn select_victim(&mut self, frames: &FrameSet, _future: &[PageRef]) -> PageRef {
        let residents = frames.resident();

        // Every resident page became resident through a recorded
        // reference, so indexing cannot miss.
        let mut victim = residents[0];
        let mut victim_used = self.last_used[&victim];

        for &page in &residents[1..] {
            let used = self.last_used[&page];
            if used < victim_used {
                victim = page;
                victim_used = used;
            }
        }

        victim
    }
}

impl Default for LruReplacer {
    fn default() -> Self {
        Self::new()
    }
}
