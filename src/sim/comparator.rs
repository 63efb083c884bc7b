//! Comparator - runs every policy over the same input and ranks them.

use std::cmp::Ordering;

use log::debug;

use crate::common::{PageRef, Result, SimConfig};
use crate::sim::driver::run;
use crate::sim::policy::Policy;
use crate::sim::Summary;

/// The score a comparison optimizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Maximize the hit ratio.
    HitRatio,
    /// Minimize the miss ratio.
    MissRatio,
}

impl Metric {
    /// Order two summaries, best first.
    fn rank(&self, a: &Summary, b: &Summary) -> Ordering {
        match self {
            Metric::HitRatio => b.hit_ratio().total_cmp(&a.hit_ratio()),
            Metric::MissRatio => a.miss_ratio().total_cmp(&b.miss_ratio()),
        }
    }
}

/// The outcome of running all four policies over identical inputs.
#[derive(Debug, Clone)]
pub struct Comparison {
    metric: Metric,
    results: Vec<(Policy, Summary)>,
}

impl Comparison {
    /// The metric this comparison was scored by.
    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Per-policy summaries in evaluation order
    /// (FIFO, LRU, Optimal, Random).
    pub fn results(&self) -> &[(Policy, Summary)] {
        &self.results
    }

    /// The summary of one policy.
    pub fn summary(&self, policy: Policy) -> Option<Summary> {
        self.results
            .iter()
            .find(|(p, _)| *p == policy)
            .map(|(_, summary)| *summary)
    }

    /// The winning policy.
    ///
    /// Equal scores resolve to the earliest policy in evaluation order.
    pub fn best(&self) -> Policy {
        self.ranking()[0].0
    }

    /// All policies sorted best-first by the metric.
    ///
    /// The sort is stable, so ties keep evaluation order.
    pub fn ranking(&self) -> Vec<(Policy, Summary)> {
        let mut ranked = self.results.clone();
        ranked.sort_by(|(_, a), (_, b)| self.metric.rank(a, b));
        ranked
    }
}

/// Run every built-in policy over `refs` and score them by `metric`.
///
/// All four runs see identical inputs; Random uses the configured seed,
/// so a seeded comparison is fully reproducible.
///
/// # Errors
/// - `Error::ZeroFrameCount` if the configured frame count is 0
///
/// # Example
/// ```
/// use pagesim::{compare, Metric, PageRef, Policy, SimConfig};
///
/// let refs: Vec<PageRef> = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]
///     .iter()
///     .map(|&n| PageRef::new(n))
///     .collect();
/// let comparison = compare(&refs, &SimConfig::new(3).with_seed(1), Metric::HitRatio).unwrap();
///
/// // Nothing beats clairvoyance.
/// assert_eq!(comparison.best(), Policy::Optimal);
/// ```
pub fn compare(refs: &[PageRef], config: &SimConfig, metric: Metric) -> Result<Comparison> {
    let mut results = Vec::with_capacity(Policy::ALL.len());

    for policy in Policy::ALL {
        let (_, summary) = run(policy, refs, config)?;
        debug!("compare: {} scored {}", policy, summary);
        results.push((policy, summary));
    }

    Ok(Comparison { metric, results })
}
