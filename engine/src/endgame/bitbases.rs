//! The interface to an external endgame tablebase probe (e.g. Syzygy WDL/DTZ files).
//!
//! Only the probe signature is consumed here; loading and parsing a tablebase format is
//! someone else's problem. A search thread calls [`probe_wdl`] at the root and during the
//! main search once the piece count drops low enough, and folds a hit into the score as a
//! tablebase-win/loss/draw bound rather than a search result.

use parking_lot::RwLock;

use chess_core::core::masks::PLAYER_CNT;
use chess_core::{BitBoard, BitMove, Player, SQ};

lazy_static! {
    static ref SYZYGY_PATH: RwLock<String> = RwLock::new(String::new());
}

/// Stores the `SyzygyPath` UCI option. No tablebase backend ships with this crate; this just
/// remembers the configured path so a future [`TablebaseProbe`] implementation can pick it up.
pub fn set_syzygy_path(path: String) {
    *SYZYGY_PATH.write() = path;
}

pub fn syzygy_path() -> String {
    SYZYGY_PATH.read().clone()
}

/// Win/draw/loss result of a root or in-search tablebase probe, from the side to move's
/// perspective.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Wdl {
    Loss,
    BlessedLoss,
    Draw,
    CursedWin,
    Win,
}

/// Bitboard occupancy of a position, as required by a tablebase probe: one bitboard per
/// piece type (both colors combined) plus each side's overall occupancy.
pub struct Occupancies {
    pub piece_bb: [BitBoard; 6],
    pub side_bb: [BitBoard; PLAYER_CNT],
}

/// Implemented by whatever tablebase backend is linked in. No implementation ships with
/// this crate; a `UseNNUE`-style option at the UCI layer supplies `SyzygyPath` and wires a
/// concrete prober in.
pub trait TablebaseProbe {
    /// Largest number of pieces on the board this tablebase set can answer for.
    fn max_pieces(&self) -> u8;

    /// Probes for the WDL value of a position, without a best move.
    fn probe_wdl(
        &self,
        occ: &Occupancies,
        fifty_move_counter: u8,
        castling_rights: u8,
        ep_square: Option<SQ>,
        side_to_move: Player,
    ) -> Option<Wdl>;

    /// Probes for the WDL value and an optimal move at the root of a search.
    fn probe_root(
        &self,
        occ: &Occupancies,
        fifty_move_counter: u8,
        castling_rights: u8,
        ep_square: Option<SQ>,
        side_to_move: Player,
    ) -> Option<(Wdl, BitMove)>;
}

/// Stand-in used when no `SyzygyPath` has been configured: every probe misses.
pub struct NoTablebase;

impl TablebaseProbe for NoTablebase {
    fn max_pieces(&self) -> u8 {
        0
    }

    fn probe_wdl(
        &self,
        _occ: &Occupancies,
        _fifty_move_counter: u8,
        _castling_rights: u8,
        _ep_square: Option<SQ>,
        _side_to_move: Player,
    ) -> Option<Wdl> {
        None
    }

    fn probe_root(
        &self,
        _occ: &Occupancies,
        _fifty_move_counter: u8,
        _castling_rights: u8,
        _ep_square: Option<SQ>,
        _side_to_move: Player,
    ) -> Option<(Wdl, BitMove)> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::BitBoard;

    #[test]
    fn no_tablebase_always_misses() {
        let tb = NoTablebase;
        let occ = Occupancies {
            piece_bb: [BitBoard(0); 6],
            side_bb: [BitBoard(0); PLAYER_CNT],
        };
        assert_eq!(tb.max_pieces(), 0);
        assert!(tb
            .probe_wdl(&occ, 0, 0, None, Player::White)
            .is_none());
        assert!(tb
            .probe_root(&occ, 0, 0, None, Player::White)
            .is_none());
    }
}
