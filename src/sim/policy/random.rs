//! Random replacement policy.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::common::PageRef;
use crate::sim::policy::Replacer;
use crate::sim::FrameSet;

/// Evicts a uniformly random resident page.
///
/// The baseline policy: no access-pattern tracking at all. Each replacer
/// owns its generator, never a process-wide one, so a seeded run replays
/// to an identical trace and concurrent runs cannot disturb each other.
pub struct RandomReplacer {
    rng: StdRng,
}

impl RandomReplacer {
    /// Create a new Random replacer.
    ///
    /// `Some(seed)` gives a reproducible victim sequence; `None` seeds
    /// from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self { rng }
    }
}

impl Replacer for RandomReplacer {
    fn select_victim(&mut self, frames: &FrameSet, _future: &[PageRef]) -> PageRef {
        let slot = self.rng.gen_range(0..frames.len());
        frames.resident()[slot]
    }
}
