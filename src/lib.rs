//! pagesim - A page-replacement simulator with swappable eviction policies.
//!
//! Given a sequence of page references and a fixed number of physical
//! frames, pagesim replays the sequence against a chosen eviction policy
//! and reports hits, misses, and the full step-by-step frame/swap-space
//! trajectory.
//!
//! # Architecture
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                           pagesim                              │
//! ├────────────────────────────────────────────────────────────────┤
//! │  ┌──────────────────────────────────────────────────────────┐  │
//! │  │                 Comparator (sim/comparator)              │  │
//! │  │        runs the driver once per policy and ranks         │  │
//! │  └──────────────────────────────────────────────────────────┘  │
//! │                              ↓                                 │
//! │  ┌──────────────────────────────────────────────────────────┐  │
//! │  │                   Driver (sim/driver)                    │  │
//! │  │  ┌────────────────────────────────────────────────────┐  │  │
//! │  │  │  Eviction Policies: FIFO | LRU | Optimal | Random  │  │  │
//! │  │  │              (swappable per run)                   │  │  │
//! │  │  └────────────────────────────────────────────────────┘  │  │
//! │  │        Simulation step loop + Trace/Summary output       │  │
//! │  └──────────────────────────────────────────────────────────┘  │
//! │                              ↓                                 │
//! │  ┌──────────────────────────────────────────────────────────┐  │
//! │  │                 FrameSet (sim/frame_set)                 │  │
//! │  │          resident pages + swap-space log                 │  │
//! │  └──────────────────────────────────────────────────────────┘  │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine is a pure library: no I/O, no global state, no threads.
//! Parsing user input and rendering traces (tables, plots, animated
//! step-through) belong to presentation layers that consume this crate;
//! they pace themselves by iterating the eagerly produced [`Trace`].
//!
//! # Modules
//! - [`common`] - Shared primitives (PageRef, SimConfig, Error)
//! - [`sim`] - The simulation engine and eviction policies
//!
//! # Quick Start
//! ```
//! use pagesim::{run, PageRef, Policy, SimConfig};
//!
//! let refs: Vec<PageRef> = [1, 2, 3, 1, 2, 4].iter().map(|&n| PageRef::new(n)).collect();
//!
//! let (trace, summary) = run(Policy::Fifo, &refs, &SimConfig::new(3)).unwrap();
//! assert_eq!(summary.misses, 4);
//! assert_eq!(trace.cumulative_miss_counts(), vec![1, 2, 3, 3, 3, 4]);
//! ```

pub mod common;
pub mod sim;

// Re-export commonly used items at crate root for convenience
pub use common::{Error, PageRef, Result, SimConfig};
pub use sim::policy::{
    FifoReplacer, LruReplacer, OptimalReplacer, Policy, RandomReplacer, Replacer,
};
pub use sim::{
    compare, run, Comparison, FrameSet, Metric, Simulation, StepOutcome, StepRecord, Summary,
    Trace,
};
