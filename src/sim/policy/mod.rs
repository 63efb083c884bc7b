//! Eviction policy implementations (replacers).
//!
//! Implements:
//! - [`FifoReplacer`] - evict the longest-resident page
//! - [`LruReplacer`] - evict the least recently referenced page
//! - [`OptimalReplacer`] - evict the page referenced furthest in the future
//! - [`RandomReplacer`] - evict a uniformly random resident page

mod fifo;
mod lru;
mod optimal;
mod random;

use std::fmt;
use std::str::FromStr;

use crate::common::{Error, PageRef, SimConfig};
use crate::sim::FrameSet;

pub use fifo::FifoReplacer;
pub use lru::LruReplacer;
pub use optimal::OptimalReplacer;
pub use random::RandomReplacer;

/// A victim-selection strategy.
///
/// The driver owns the step loop; a replacer only answers two questions:
/// what metadata to record when a page is referenced, and which resident
/// page to sacrifice on a miss with full frames. Implementing this trait
/// is the seam for plugging a custom policy into
/// [`Simulation::with_replacer`](crate::Simulation::with_replacer).
pub trait Replacer {
    /// Record that `page` was referenced at 1-based step `step`.
    ///
    /// Called once per reference, hit or miss, after the step's
    /// insertion/eviction has been applied.
    fn record_access(&mut self, _page: PageRef, _step: usize) {}

    /// Forget a page that was just evicted.
    fn evicted(&mut self, _page: PageRef) {}

    /// Choose the resident page to evict.
    ///
    /// Called only when the frame set is full, so `frames` is never
    /// empty. `future` holds the references that come strictly after the
    /// one that faulted; only the Optimal policy looks at it.
    fn select_victim(&mut self, frames: &FrameSet, future: &[PageRef]) -> PageRef;
}

/// Selector for one of the built-in eviction policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// First-in, first-out.
    Fifo,
    /// Least recently used.
    Lru,
    /// Bélády's clairvoyant policy (benchmarking only).
    Optimal,
    /// Uniformly random victim.
    Random,
}

impl Policy {
    /// Every built-in policy, in comparator evaluation order.
    pub const ALL: [Policy; 4] = [Policy::Fifo, Policy::Lru, Policy::Optimal, Policy::Random];

    /// Human-readable policy name.
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fifo => "FIFO",
            Policy::Lru => "LRU",
            Policy::Optimal => "Optimal",
            Policy::Random => "Random",
        }
    }

    /// Build the replacer implementing this policy.
    ///
    /// The configuration supplies the seed for [`Policy::Random`]; the
    /// other policies ignore it.
    pub fn replacer(&self, config: &SimConfig) -> Box<dyn Replacer> {
        match self {
            Policy::Fifo => Box::new(FifoReplacer::new()),
            Policy::Lru => Box::new(LruReplacer::new()),
            Policy::Optimal => Box::new(OptimalReplacer::new()),
            Policy::Random => Box::new(RandomReplacer::new(config.seed)),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Policy {
    type Err = Error;

    /// Parse a policy name as typed by a user, case-insensitively.
    ///
    /// # Example
    /// ```
    /// use pagesim::Policy;
    ///
    /// assert_eq!(" fifo ".parse::<Policy>().unwrap(), Policy::Fifo);
    /// assert!("clock".parse::<Policy>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Policy::ALL
            .iter()
            .copied()
            .find(|policy| policy.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnknownPolicy(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_display() {
        assert_eq!(format!("{}", Policy::Fifo), "FIFO");
        assert_eq!(format!("{}", Policy::Optimal), "Optimal");
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("FIFO".parse::<Policy>().unwrap(), Policy::Fifo);
        assert_eq!("lru".parse::<Policy>().unwrap(), Policy::Lru);
        assert_eq!("  optimal ".parse::<Policy>().unwrap(), Policy::Optimal);
        assert_eq!("RANDOM".parse::<Policy>().unwrap(), Policy::Random);
    }

    #[test]
    fn test_policy_from_str_unknown() {
        let err = "clock".parse::<Policy>().unwrap_err();
        assert_eq!(err, Error::UnknownPolicy("clock".to_string()));
    }

    #[test]
    fn test_evaluation_order() {
        assert_eq!(
            Policy::ALL,
            [Policy::Fifo, Policy::Lru, Policy::Optimal, Policy::Random]
        );
    }
}
