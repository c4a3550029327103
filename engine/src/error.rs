//! Engine-level error kinds, layered on top of `chess_core`'s FEN/move/NNUE errors.
//!
//! Most of these are recovered from locally rather than bubbled up as a hard failure; see each
//! variant's propagation note. [`OutOfMemory`] and [`Cancelled`] in particular are expected
//! outcomes of resource pressure and search aborts, not bugs.

use chess_core::errors::NnueError;

/// Errors a search thread or the UCI front-end can encounter while running.
#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    /// A requested `EvalFile` failed to load. At option time this falls back to the
    /// previously active (or embedded default) network and is reported as a UCI
    /// `info string`; at startup with no fallback available it is fatal.
    #[error("failed to load NNUE network: {0}")]
    BadNetFile(#[from] NnueError),

    /// A transposition table or per-worker buffer allocation failed. TT allocation falls
    /// back to the minimum configured size (1 MiB); a worker allocation failure instead
    /// reduces the configured worker count.
    #[error("allocation of {requested_bytes} bytes failed")]
    OutOfMemory { requested_bytes: usize },

    /// The search was aborted by a `stop` command or a time-control deadline. Recovered
    /// from locally inside the worker: the last completed iteration's PV is returned as the
    /// best known line rather than propagated as a failure.
    #[error("search cancelled")]
    Cancelled,
}
