//! Constant values and static structures.

use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize};
use std::sync::atomic::Ordering;

use chess_core::tools::tt::TranspositionTable;

use crate::time::time_management::TimeManager;

pub const MAX_PLY: u16 = 126;
pub const THREAD_STACK_SIZE: usize = MAX_PLY as usize + 7;
pub const MAX_THREADS: usize = 512;

pub const DEFAULT_TT_SIZE: usize = 256;
pub const DEFAULT_MOVE_OVERHEAD: i64 = 100;

pub const PAWN_TABLE_SIZE: usize = 16384;
pub const MATERIAL_TABLE_SIZE: usize = 8192;

static INITALIZED: AtomicBool = AtomicBool::new(false);

/// Whether search output (`info`/`bestmove` lines) should be printed to stdout. Disabled by
/// tests and embedders that drive the engine programmatically.
pub static USE_STDOUT: AtomicBool = AtomicBool::new(true);

/// Number of principal variations to report via `multipv`-tagged `info` lines. Mirrors the
/// `MultiPV` UCI option; 1 is the ordinary single-PV behavior.
static MULTI_PV: AtomicUsize = AtomicUsize::new(1);

/// Millisecond safety margin subtracted from the available clock before time management
/// commits to a move, covering GUI/OS scheduling jitter. Backs the `Move Overhead` option.
static MOVE_OVERHEAD: AtomicI64 = AtomicI64::new(DEFAULT_MOVE_OVERHEAD);

/// Whether pondering (thinking on the opponent's clock) is permitted. Stored for the GUI's
/// benefit; the search loop itself already understands `LimitsType::Ponder`.
static PONDER: AtomicBool = AtomicBool::new(false);

/// Whether the engine may consult a built-in opening book before falling back to search.
/// No book ships with this crate, so this only gates a `collaborator not installed` notice.
static OWN_BOOK: AtomicBool = AtomicBool::new(false);

/// Whether castling moves are reported in Chess960 notation (`king takes own rook`) instead
/// of the regular two-square king move.
static CHESS_960: AtomicBool = AtomicBool::new(false);

#[inline(always)]
pub fn multi_pv() -> usize {
    MULTI_PV.load(Ordering::Relaxed)
}

#[inline(always)]
pub fn set_multi_pv(n: usize) {
    MULTI_PV.store(n.max(1), Ordering::Relaxed);
}

#[inline(always)]
pub fn move_overhead() -> i64 {
    MOVE_OVERHEAD.load(Ordering::Relaxed)
}

#[inline(always)]
pub fn set_move_overhead(msec: i64) {
    MOVE_OVERHEAD.store(msec, Ordering::Relaxed);
}

#[inline(always)]
pub fn ponder() -> bool {
    PONDER.load(Ordering::Relaxed)
}

#[inline(always)]
pub fn set_ponder(on: bool) {
    PONDER.store(on, Ordering::Relaxed);
}

#[inline(always)]
pub fn own_book() -> bool {
    OWN_BOOK.load(Ordering::Relaxed)
}

#[inline(always)]
pub fn set_own_book(on: bool) {
    OWN_BOOK.store(on, Ordering::Relaxed);
}

#[inline(always)]
pub fn chess_960() -> bool {
    CHESS_960.load(Ordering::Relaxed)
}

#[inline(always)]
pub fn set_chess_960(on: bool) {
    CHESS_960.store(on, Ordering::Relaxed);
}
/// Global Timer
//pub static TIMER: TimeManager = TimeManager::uninitialized();
//pub static TT_TABLE: TranspositionTable = unsafe {TranspositionTable::uninitialized()};
//pub static mut POSITION: Board = unsafe {Board::uninitialized()};

lazy_static! {
    pub static ref TT_TABLE: TranspositionTable = TranspositionTable::new(DEFAULT_TT_SIZE);
    pub static ref TIMER: TimeManager = TimeManager::uninitialized();
}

/// Returns access to the global transposition table.
#[inline(always)]
pub fn tt() -> &'static TranspositionTable {
    &TT_TABLE
}

/// Returns access to the global time manager, shared by every search thread.
#[inline(always)]
pub fn timer() -> &'static TimeManager {
    &TIMER
}

pub fn init_globals() {
    if !INITALIZED.swap(true, Ordering::SeqCst) {
        lazy_static::initialize(&TT_TABLE);
        lazy_static::initialize(&TIMER);
    }
}

pub trait PVNode {
    fn is_pv() -> bool;
}

pub struct PV {}
pub struct NonPV {}

impl PVNode for PV {
    fn is_pv() -> bool {
        true
    }
}

impl PVNode for NonPV {
    fn is_pv() -> bool {
        false
    }
}

pub trait CheckState {
    fn in_check() -> bool;
}


pub struct InCheck {}
pub struct NoCheck {}

impl CheckState for InCheck {
    fn in_check() -> bool { true}
}

impl CheckState for NoCheck {
    fn in_check() -> bool { false}
}

//
//#[cfg(test)]
//mod tests {
//    use super::*;
//    #[test]
//    fn test_da() {
//        init_globals();
//
//    }
//}