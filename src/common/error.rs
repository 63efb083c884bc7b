//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// The engine performs no I/O, so every error is a rejected input:
/// either the configuration is unusable or a policy name failed to parse.
/// When an error is returned the simulation has not run at all — there
/// are never partial results.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Frame count was zero.
    ///
    /// A pool with no frames cannot hold a single page, so the run is
    /// rejected before the first reference is consumed.
    #[error("frame count must be positive")]
    ZeroFrameCount,

    /// A policy name did not match any known replacement policy.
    ///
    /// Produced by `Policy::from_str` when a presentation layer hands us
    /// unrecognized user text.
    #[error("unknown replacement policy: {0:?}")]
    UnknownPolicy(String),
}
