//! FIFO (First-In-First-Out) replacement policy.

use crate::common::PageRef;
use crate::sim::policy::Replacer;
use crate::sim::FrameSet;

/// Evicts pages in the order they became resident.
///
/// The frame set already keeps residents in insertion order, so FIFO
/// needs no metadata of its own: the victim is always the head. Hits do
/// not reorder anything.
pub struct FifoReplacer;

impl FifoReplacer {
    /// Create a new FIFO replacer.
    pub fn new() -> Self {
        Self
    }
}

impl Replacer for FifoReplacer {
    fn select_victim(&mut self, frames: &FrameSet, _future: &[PageRef]) -> PageRef {
        frames.oldest().expect("frame set is empty")
    }
}

impl Default for FifoReplacer {
    fn default() -> Self {
        Self::new()
    }
}
