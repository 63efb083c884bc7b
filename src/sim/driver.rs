//! Simulation driver - replays a reference sequence against a policy.
//!
//! The driver owns the step loop shared by every policy:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     Simulation::step                     │
//! │                                                          │
//! │  reference p ──▶ resident? ──yes──▶ Hit                  │
//! │                     │no                                  │
//! │                 free frame? ──yes──▶ insert p            │
//! │                     │no              (MissInserted)      │
//! │                 replacer picks victim v                  │
//! │                 v ──▶ swap space, insert p               │
//! │                 (MissEvicted(v))                         │
//! │                     │                                    │
//! │                 record_access(p), append StepRecord      │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Policies differ only in victim selection and the metadata they keep.

use log::{debug, trace};

use crate::common::{PageRef, Result, SimConfig};
use crate::sim::policy::{Policy, Replacer};
use crate::sim::{FrameSet, StepOutcome, StepRecord, Summary, Trace};

/// One in-progress simulation run.
///
/// Owns its frame set, replacer and counters; nothing is shared between
/// runs, so identical inputs (and seed, for Random) replay to identical
/// results.
///
/// Most callers want [`run`], which drives a fresh `Simulation` to
/// completion. Stepping manually is for embedders that need to stop
/// between references - checking a cancellation flag on a huge input,
/// say - by simply not calling [`step`](Simulation::step) again.
///
/// # Example
/// ```
/// use pagesim::{PageRef, Policy, SimConfig, Simulation};
///
/// let refs: Vec<PageRef> = [1, 2, 1].iter().map(|&n| PageRef::new(n)).collect();
/// let mut sim = Simulation::new(Policy::Fifo, &refs, &SimConfig::new(2)).unwrap();
///
/// let first = sim.step().unwrap();
/// assert!(first.outcome.is_miss());
///
/// let (trace, summary) = sim.finish();
/// assert_eq!(trace.len(), 3);
/// assert_eq!(summary.hits, 1);
/// ```
pub struct Simulation<'a> {
    /// The full input sequence; steps consumed so far = `steps.len()`.
    refs: &'a [PageRef],

    /// Resident pages + swap space, mutated per step.
    frames: FrameSet,

    /// Victim selection strategy.
    replacer: Box<dyn Replacer>,

    /// Records accumulated so far.
    steps: Vec<StepRecord>,

    hits: u64,
    misses: u64,
}

impl<'a> Simulation<'a> {
    /// Set up a run of the given built-in policy.
    ///
    /// # Errors
    /// - `Error::ZeroFrameCount` if the configured frame count is 0
    pub fn new(policy: Policy, refs: &'a [PageRef], config: &SimConfig) -> Result<Self> {
        Self::with_replacer(policy.replacer(config), refs, config)
    }

    /// Set up a run of a custom [`Replacer`].
    ///
    /// # Errors
    /// - `Error::ZeroFrameCount` if the configured frame count is 0
    pub fn with_replacer(
        replacer: Box<dyn Replacer>,
        refs: &'a [PageRef],
        config: &SimConfig,
    ) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            refs,
            frames: FrameSet::new(config.frame_count),
            replacer,
            steps: Vec::with_capacity(refs.len()),
            hits: 0,
            misses: 0,
        })
    }

    /// Consume the next reference and return its record.
    ///
    /// Returns `None` once the whole sequence has been replayed.
    pub fn step(&mut self) -> Option<&StepRecord> {
        let pos = self.steps.len();
        let &page = self.refs.get(pos)?;
        let index = pos + 1;

        let outcome = if self.frames.contains(page) {
            self.hits += 1;
            StepOutcome::Hit
        } else if !self.frames.is_full() {
            self.misses += 1;
            self.frames.insert(page);
            StepOutcome::MissInserted
        } else {
            self.misses += 1;

            // References strictly after the faulting one; only Optimal
            // looks at them.
            let future = &self.refs[index..];
            let victim = self.replacer.select_victim(&self.frames, future);
            trace!("step {}: {} faults, evicting {}", index, page, victim);

            self.frames.evict(victim);
            self.replacer.evicted(victim);
            self.frames.insert(page);
            StepOutcome::MissEvicted(victim)
        };

        self.replacer.record_access(page, index);

        self.steps.push(StepRecord {
            index,
            page,
            resident: self.frames.resident().to_vec(),
            swap: self.frames.swap_space().to_vec(),
            outcome,
        });

        self.steps.last()
    }

    /// Replay any remaining references and return the full results.
    pub fn finish(mut self) -> (Trace, Summary) {
        while self.step().is_some() {}

        let summary = Summary {
            hits: self.hits,
            misses: self.misses,
        };

        (Trace::new(self.steps), summary)
    }

    /// Steps consumed so far.
    #[inline]
    pub fn steps_taken(&self) -> usize {
        self.steps.len()
    }

    /// References not yet consumed.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.refs.len() - self.steps.len()
    }

    /// Whether every reference has been replayed.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.steps.len() == self.refs.len()
    }

    /// Hits so far.
    #[inline]
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Misses so far.
    #[inline]
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// The current frame set.
    #[inline]
    pub fn frames(&self) -> &FrameSet {
        &self.frames
    }
}

/// Run `policy` over `refs` with the given configuration.
///
/// Either the full trace and summary are produced or an error is
/// returned before the first step; never partial results. An empty
/// sequence is legal and yields an empty trace with both ratios 0.
///
/// # Errors
/// - `Error::ZeroFrameCount` if the configured frame count is 0
///
/// # Example
/// ```
/// use pagesim::{run, PageRef, Policy, SimConfig, StepOutcome};
///
/// let refs: Vec<PageRef> = [1, 2, 3, 1, 2, 4].iter().map(|&n| PageRef::new(n)).collect();
/// let (trace, summary) = run(Policy::Lru, &refs, &SimConfig::new(3)).unwrap();
///
/// // Page 3 is the least recently used when 4 faults in.
/// let last = trace.steps().last().unwrap();
/// assert_eq!(last.outcome, StepOutcome::MissEvicted(PageRef::new(3)));
/// assert_eq!((summary.hits, summary.misses), (2, 4));
/// ```
pub fn run(policy: Policy, refs: &[PageRef], config: &SimConfig) -> Result<(Trace, Summary)> {
    debug!(
        "running {} over {} references with {} frames",
        policy,
        refs.len(),
        config.frame_count
    );

    let sim = Simulation::new(policy, refs, config)?;
    let (trace, summary) = sim.finish();

    debug!("{}: {}", policy, summary);
    Ok((trace, summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Error;

    fn seq(ids: &[u64]) -> Vec<PageRef> {
        ids.iter().map(|&id| PageRef::new(id)).collect()
    }

    fn page(id: u64) -> PageRef {
        PageRef::new(id)
    }

    #[test]
    fn test_zero_frame_count_rejected() {
        let refs = seq(&[1, 2, 3]);
        let err = run(Policy::Fifo, &refs, &SimConfig::new(0)).unwrap_err();
        assert_eq!(err, Error::ZeroFrameCount);
    }

    #[test]
    fn test_empty_sequence_yields_empty_results() {
        let (trace, summary) = run(Policy::Lru, &[], &SimConfig::new(3)).unwrap();

        assert!(trace.is_empty());
        assert_eq!(summary.total(), 0);
        assert_eq!(summary.hit_ratio(), 0.0);
        assert_eq!(summary.miss_ratio(), 0.0);
    }

    #[test]
    fn test_all_pages_fit_without_eviction() {
        let refs = seq(&[1, 2, 1, 2, 1]);
        let (trace, summary) = run(Policy::Fifo, &refs, &SimConfig::new(5)).unwrap();

        assert_eq!(summary.misses, 2);
        assert_eq!(summary.hits, 3);
        assert!(trace.iter().all(|step| step.outcome.evicted().is_none()));
        assert!(trace.steps().last().unwrap().swap.is_empty());
    }

    #[test]
    fn test_single_frame_thrashes() {
        let refs = seq(&[1, 2, 1, 2]);
        let (trace, summary) = run(Policy::Fifo, &refs, &SimConfig::new(1)).unwrap();

        assert_eq!(summary.misses, 4);
        assert_eq!(summary.hits, 0);
        assert_eq!(
            trace.steps()[3].outcome,
            StepOutcome::MissEvicted(page(1))
        );
    }

    #[test]
    fn test_step_records_snapshot_state() {
        let refs = seq(&[1, 2, 3]);
        let (trace, _) = run(Policy::Fifo, &refs, &SimConfig::new(2)).unwrap();

        let steps = trace.steps();
        assert_eq!(steps[0].resident, seq(&[1]));
        assert_eq!(steps[1].resident, seq(&[1, 2]));
        assert_eq!(steps[2].resident, seq(&[2, 3]));
        assert_eq!(steps[2].swap, seq(&[1]));
        assert_eq!(steps[2].index, 3);
    }

    #[test]
    fn test_manual_stepping_can_stop_early() {
        let refs = seq(&[1, 2, 3, 4, 5]);
        let mut sim = Simulation::new(Policy::Fifo, &refs, &SimConfig::new(2)).unwrap();

        sim.step();
        sim.step();

        assert_eq!(sim.steps_taken(), 2);
        assert_eq!(sim.remaining(), 3);
        assert!(!sim.is_finished());
        assert_eq!(sim.misses(), 2);
        assert_eq!(sim.frames().resident(), &seq(&[1, 2])[..]);
        // Dropping `sim` here is the cancellation story: no teardown needed.
    }

    #[test]
    fn test_finish_completes_remaining_steps() {
        let refs = seq(&[1, 2, 1]);
        let mut sim = Simulation::new(Policy::Fifo, &refs, &SimConfig::new(2)).unwrap();

        sim.step();
        let (trace, summary) = sim.finish();

        assert_eq!(trace.len(), 3);
        assert_eq!(summary.hits, 1);
        assert_eq!(summary.misses, 2);
    }

    #[test]
    fn test_custom_replacer_runs() {
        /// Always evicts the newest resident page.
        struct NewestFirst;

        impl Replacer for NewestFirst {
            fn select_victim(&mut self, frames: &FrameSet, _future: &[PageRef]) -> PageRef {
                *frames.resident().last().expect("frame set is empty")
            }
        }

        let refs = seq(&[1, 2, 3, 4]);
        let sim = Simulation::with_replacer(Box::new(NewestFirst), &refs, &SimConfig::new(2))
            .unwrap();
        let (trace, _) = sim.finish();

        assert_eq!(
            trace.steps()[2].outcome,
            StepOutcome::MissEvicted(page(2))
        );
        assert_eq!(
            trace.steps()[3].outcome,
            StepOutcome::MissEvicted(page(3))
        );
    }
}
