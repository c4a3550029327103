//! Global handle to the loaded NNUE network, and the `UseNNUE`/`EvalFile` switch that
//! decides whether [`crate::search::eval::Evaluation`] consults it.
//!
//! Loading a network can fail (a missing or malformed `EvalFile`); per the `EvalFile` UCI
//! option's propagation policy this falls back to the classical evaluator rather than
//! aborting the engine, surfacing the failure as a UCI `info string` instead.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;

use chess_core::errors::NnueError;
use chess_core::nnue::{self, Network};
use chess_core::Board;

lazy_static! {
    static ref NETWORK: RwLock<Option<Network>> = RwLock::new(None);
}

/// Whether the search should prefer the NNUE evaluator over the classical one. Off by
/// default until a network is successfully loaded.
static USE_NNUE: AtomicBool = AtomicBool::new(false);

/// Attempts to load a `.nnue` file from disk and install it as the active network.
///
/// On success, also turns `UseNNUE` on. On failure, the previously loaded network (if any)
/// is left in place and `UseNNUE` is untouched; the caller is expected to report the error
/// string back over UCI.
pub fn load_eval_file<P: AsRef<Path>>(path: P) -> Result<(), NnueError> {
    let net = Network::load_from_path(path)?;
    *NETWORK.write() = Some(net);
    USE_NNUE.store(true, Ordering::Relaxed);
    Ok(())
}

/// Installs the embedded placeholder network, used when `EvalFile` names no real network but
/// `UseNNUE` is requested anyway.
#[cfg(feature = "embedded_nnue")]
pub fn load_embedded_default() -> Result<(), NnueError> {
    let net = Network::embedded_default()?;
    *NETWORK.write() = Some(net);
    Ok(())
}

pub fn set_use_nnue(on: bool) {
    USE_NNUE.store(on, Ordering::Relaxed);
}

#[inline(always)]
pub fn is_enabled() -> bool {
    USE_NNUE.load(Ordering::Relaxed) && NETWORK.read().is_some()
}

/// Runs `f` against the currently loaded network, if any and if `UseNNUE` is on.
pub fn with_network<T>(f: impl FnOnce(&Network) -> T) -> Option<T> {
    if !USE_NNUE.load(Ordering::Relaxed) {
        return None;
    }
    NETWORK.read().as_ref().map(f)
}

/// If `UseNNUE` is on and a network is loaded, brings `board`'s accumulator up to date and
/// returns the network's evaluation from the side to move's perspective. Returns `None`
/// (leaving `board` untouched) so the caller can fall back to the classical evaluator.
pub fn evaluate(board: &mut Board) -> Option<i32> {
    if !USE_NNUE.load(Ordering::Relaxed) {
        return None;
    }
    let guard = NETWORK.read();
    let net = guard.as_ref()?;
    board.ensure_nnue_current(net);
    Some(nnue::evaluate(net, board.nnue_accumulator(), board.turn()))
}
