mod pick;

use chess_core::board::movegen::{MoveGen, PseudoLegal};
use chess_core::core::mono_traits::*;
use chess_core::core::score::piecetype_value;
use chess_core::{BitMove, Board, PieceType, ScoringMoveList, SQ};

use crate::tables::prelude::*;

use self::pick::Pick;

/// Depth, in the qsearch's own reversed-ply units, below which only recaptures onto the
/// square the opponent just captured on are considered -- mirrors the classical engines'
/// `DEPTH_QS_RECAPTURES` cutoff.
const QS_RECAPTURE_DEPTH: i16 = -5;

/// Selects and orders moves for a single search node, one stage at a time, so the search
/// never needs to generate (or sort) moves it ends up pruning before trying them.
///
/// Holds the board and history tables it was constructed with as raw pointers rather than
/// borrowed references. A `MovePicker` is built once per node and lives across that node's
/// entire move loop, which also calls `Board::apply_move`/`undo_move` (through `&mut self`
/// on the owning `Searcher`) between `next()` calls -- a borrowed `&Board` held here would
/// conflict with that mutation under the borrow checker, the same reason `Stack::cont_history`
/// is a raw pointer.
pub struct MovePicker {
    stage: Pick,
    board: *const Board,
    in_check: bool,
    main_history: *const ButterflyHistory,
    capture_history: *const CapturePieceToHistory,
    cont_hists: *const [*const PieceToHistory; 4],
    tt_move: BitMove,
    killers: [BitMove; 2],
    counter_move: BitMove,
    recapture_sq: SQ,
    rev_depth: i16,
    captures: ScoringMoveList,
    quiets: ScoringMoveList,
    bad_captures: ScoringMoveList,
    quiet_checks_done: bool,
    idx: usize,
}

impl MovePicker {
    /// Move picker for the main search (`Searcher::search`). Walks the TT move, then -- if
    /// the side to move is in check -- every evasion, else good captures, both killers, the
    /// countermove, the remaining quiets, and finally captures that lost the SEE exchange.
    pub fn main_search(
        board: &Board,
        depth: i16,
        main_history: &ButterflyHistory,
        capture_history: &CapturePieceToHistory,
        cont_hists: *const [*const PieceToHistory; 4],
        mut tt_move: BitMove,
        killers: [BitMove; 2],
        counter_move: BitMove,
    ) -> Self {
        let in_check = board.in_check();
        if tt_move == BitMove::null() || !board.pseudo_legal_move(tt_move) {
            tt_move = BitMove::null();
        }
        let stage = if tt_move != BitMove::null() {
            if in_check {
                Pick::EvasionSearch
            } else {
                Pick::MainSearch
            }
        } else if in_check {
            Pick::EvasionsInit
        } else {
            Pick::CapturesInit
        };
        let _ = depth;
        MovePicker {
            stage,
            board: board as *const Board,
            in_check,
            main_history: main_history as *const ButterflyHistory,
            capture_history: capture_history as *const CapturePieceToHistory,
            cont_hists,
            tt_move,
            killers,
            counter_move,
            recapture_sq: SQ::NONE,
            rev_depth: 0,
            captures: ScoringMoveList::default(),
            quiets: ScoringMoveList::default(),
            bad_captures: ScoringMoveList::default(),
            quiet_checks_done: false,
            idx: 0,
        }
    }

    /// Move picker for the quiescence search (`Searcher::qsearch`). Walks the TT move, then
    /// -- in check -- every evasion, else captures (plus checking quiet moves when `rev_depth
    /// >= 0`, and only recaptures onto `recapture_sq` once `rev_depth` drops below the
    /// recapture-only threshold).
    pub fn qsearch(
        board: &Board,
        rev_depth: i16,
        mut tt_move: BitMove,
        main_history: &ButterflyHistory,
        capture_history: &CapturePieceToHistory,
        recapture_sq: SQ,
    ) -> Self {
        let in_check = board.in_check();
        if tt_move == BitMove::null() || !board.pseudo_legal_move(tt_move) {
            tt_move = BitMove::null();
        }
        let recapture_only = !in_check && rev_depth < QS_RECAPTURE_DEPTH;
        if recapture_only && tt_move != BitMove::null() && tt_move.get_dest() != recapture_sq {
            tt_move = BitMove::null();
        }
        let stage = if tt_move != BitMove::null() {
            if in_check {
                Pick::EvasionSearch
            } else {
                Pick::QSearch
            }
        } else if in_check {
            Pick::EvasionsInit
        } else {
            Pick::QSearchInit
        };
        MovePicker {
            stage,
            board: board as *const Board,
            in_check,
            main_history: main_history as *const ButterflyHistory,
            capture_history: capture_history as *const CapturePieceToHistory,
            cont_hists: std::ptr::null(),
            tt_move,
            killers: [BitMove::null(); 2],
            counter_move: BitMove::null(),
            recapture_sq,
            rev_depth,
            captures: ScoringMoveList::default(),
            quiets: ScoringMoveList::default(),
            bad_captures: ScoringMoveList::default(),
            quiet_checks_done: false,
            idx: 0,
        }
    }

    #[inline(always)]
    fn board(&self) -> &Board {
        unsafe { &*self.board }
    }

    #[inline(always)]
    fn main_history(&self) -> &ButterflyHistory {
        unsafe { &*self.main_history }
    }

    #[inline(always)]
    fn capture_history(&self) -> &CapturePieceToHistory {
        unsafe { &*self.capture_history }
    }

    /// Score and stable-sort a generated move buffer in place, highest score first.
    fn sort_scored(moves: &mut ScoringMoveList) {
        let slice = moves.as_mut_slice();
        slice.sort_by(|a, b| b.score.cmp(&a.score));
    }

    fn score_captures(&self, moves: &mut ScoringMoveList) {
        let board = self.board();
        for sm in moves.as_mut_slice().iter_mut() {
            let mov = sm.bit_move;
            let moved = board.moved_piece(mov);
            let captured = board
                .captured_piece(mov)
                .map(|p| p.type_of())
                .unwrap_or(PieceType::None);
            let mvv = piecetype_value(captured, false) as i32 * 6;
            let hist = self.capture_history()[(moved, mov.get_dest(), captured)] as i32;
            sm.score = (mvv + hist).max(i16::MIN as i32).min(i16::MAX as i32) as i16;
        }
    }

    fn score_quiets(&self, moves: &mut ScoringMoveList) {
        let board = self.board();
        let us = board.turn();
        for sm in moves.as_mut_slice().iter_mut() {
            let mov = sm.bit_move;
            let piece = board.moved_piece(mov);
            let to = mov.get_dest();
            let mut score = self.main_history()[(us, mov)] as i32;
            if !self.cont_hists.is_null() {
                unsafe {
                    let hists = &*self.cont_hists;
                    if !hists[0].is_null() {
                        score += 2 * (*hists[0])[(piece, to)] as i32;
                    }
                    if !hists[1].is_null() {
                        score += 2 * (*hists[1])[(piece, to)] as i32;
                    }
                    if !hists[3].is_null() {
                        score += (*hists[3])[(piece, to)] as i32;
                    }
                }
            }
            sm.score = score.max(i16::MIN as i32).min(i16::MAX as i32) as i16;
        }
    }

    /// Partitions freshly-generated, scored captures into the winning-SEE and losing-SEE
    /// buckets, sorting each by score. Losing captures are deferred to `BadCaptures`.
    fn init_captures(&mut self) {
        let mut moves: ScoringMoveList = MoveGen::generate_scoring::<PseudoLegal, CapturesGenType>(self.board());
        self.score_captures(&mut moves);
        Self::sort_scored(&mut moves);
        let board = self.board();
        for sm in moves.as_slice().iter() {
            if sm.bit_move == self.tt_move {
                continue;
            }
            if board.see_ge(sm.bit_move, 0) {
                self.captures.push_score(sm.bit_move, sm.score);
            } else {
                self.bad_captures.push_score(sm.bit_move, sm.score);
            }
        }
        self.idx = 0;
    }

    fn init_quiets(&mut self) {
        let mut moves: ScoringMoveList = MoveGen::generate_scoring::<PseudoLegal, QuietsGenType>(self.board());
        self.score_quiets(&mut moves);
        Self::sort_scored(&mut moves);
        for sm in moves.as_slice().iter() {
            if sm.bit_move == self.tt_move
                || sm.bit_move == self.killers[0]
                || sm.bit_move == self.killers[1]
                || sm.bit_move == self.counter_move
            {
                continue;
            }
            self.quiets.push_score(sm.bit_move, sm.score);
        }
        self.idx = 0;
    }

    fn init_evasions(&mut self) {
        let moves: ScoringMoveList = MoveGen::generate_scoring::<PseudoLegal, EvasionsGenType>(self.board());
        for sm in moves.as_slice().iter() {
            if sm.bit_move == self.tt_move {
                continue;
            }
            self.captures.push(sm.bit_move);
        }
        self.idx = 0;
    }

    fn init_quiet_checks(&mut self) {
        let moves: ScoringMoveList = MoveGen::generate_scoring::<PseudoLegal, QuietChecksGenType>(self.board());
        for sm in moves.as_slice().iter() {
            if sm.bit_move == self.tt_move {
                continue;
            }
            self.quiets.push(sm.bit_move);
        }
        self.idx = 0;
        self.quiet_checks_done = true;
    }

    fn init_recaptures(&mut self) {
        let moves: ScoringMoveList = MoveGen::generate_scoring::<PseudoLegal, CapturesGenType>(self.board());
        for sm in moves.as_slice().iter() {
            if sm.bit_move == self.tt_move || sm.bit_move.get_dest() != self.recapture_sq {
                continue;
            }
            self.captures.push(sm.bit_move);
        }
        self.idx = 0;
    }

    /// Returns the next move of this node's search, skipping quiet moves once `skip_quiets`
    /// is set (main search's late-move / move-count pruning), or `None` once the node is
    /// exhausted.
    pub fn next(&mut self, skip_quiets: bool) -> Option<BitMove> {
        loop {
            match self.stage {
                Pick::MainSearch | Pick::QSearch | Pick::EvasionSearch => {
                    self.stage.incr();
                    return Some(self.tt_move);
                }
                Pick::CapturesInit => {
                    self.init_captures();
                    self.stage = Pick::GoodCaptures;
                }
                Pick::GoodCaptures => {
                    if self.idx < self.captures.len() {
                        let sm = self.captures.as_slice()[self.idx];
                        self.idx += 1;
                        return Some(sm.bit_move);
                    }
                    self.idx = 0;
                    self.stage = Pick::KillerOne;
                }
                Pick::KillerOne => {
                    self.stage = Pick::KillerTwo;
                    let k = self.killers[0];
                    if k != BitMove::null()
                        && k != self.tt_move
                        && self.board().pseudo_legal_move(k)
                        && !self.board().is_capture(k)
                    {
                        return Some(k);
                    }
                }
                Pick::KillerTwo => {
                    self.stage = Pick::CounterMove;
                    let k = self.killers[1];
                    if k != BitMove::null()
                        && k != self.tt_move
                        && self.board().pseudo_legal_move(k)
                        && !self.board().is_capture(k)
                    {
                        return Some(k);
                    }
                }
                Pick::CounterMove => {
                    self.stage = Pick::QuietInit;
                    let c = self.counter_move;
                    if c != BitMove::null()
                        && c != self.tt_move
                        && c != self.killers[0]
                        && c != self.killers[1]
                        && self.board().pseudo_legal_move(c)
                        && !self.board().is_capture(c)
                    {
                        return Some(c);
                    }
                }
                Pick::QuietInit => {
                    if skip_quiets {
                        self.stage = Pick::BadCaptures;
                    } else {
                        self.init_quiets();
                        self.stage = Pick::QuietMoves;
                    }
                }
                Pick::QuietMoves => {
                    if !skip_quiets && self.idx < self.quiets.len() {
                        let sm = self.quiets.as_slice()[self.idx];
                        self.idx += 1;
                        return Some(sm.bit_move);
                    }
                    self.idx = 0;
                    self.stage = Pick::BadCaptures;
                }
                Pick::BadCaptures => {
                    if self.idx < self.bad_captures.len() {
                        let sm = self.bad_captures.as_slice()[self.idx];
                        self.idx += 1;
                        return Some(sm.bit_move);
                    }
                    return None;
                }
                Pick::EvasionsInit => {
                    self.init_evasions();
                    self.stage = Pick::AllEvasions;
                }
                Pick::AllEvasions => {
                    if self.idx < self.captures.len() {
                        let sm = self.captures.as_slice()[self.idx];
                        self.idx += 1;
                        return Some(sm.bit_move);
                    }
                    return None;
                }
                Pick::QSearchInit => {
                    let recapture_only = !self.in_check && self.rev_depth < QS_RECAPTURE_DEPTH;
                    if recapture_only {
                        self.init_recaptures();
                        self.stage = Pick::QRecaptures;
                    } else {
                        self.init_captures();
                        self.stage = Pick::QCaptures;
                    }
                }
                Pick::QCaptures => {
                    if self.idx < self.captures.len() {
                        let sm = self.captures.as_slice()[self.idx];
                        self.idx += 1;
                        return Some(sm.bit_move);
                    }
                    self.idx = 0;
                    if self.rev_depth >= 0 {
                        self.stage = Pick::QChecks;
                    } else {
                        return None;
                    }
                }
                Pick::QChecks => {
                    if !self.quiet_checks_done {
                        self.init_quiet_checks();
                    }
                    if self.idx < self.quiets.len() {
                        let sm = self.quiets.as_slice()[self.idx];
                        self.idx += 1;
                        return Some(sm.bit_move);
                    }
                    return None;
                }
                Pick::QSearchRecaptures | Pick::QRecaptures => {
                    if self.idx < self.captures.len() {
                        let sm = self.captures.as_slice()[self.idx];
                        self.idx += 1;
                        return Some(sm.bit_move);
                    }
                    return None;
                }
                Pick::ProbCutSearch | Pick::ProbCutCapturesInit | Pick::ProbCutCaptures => {
                    // ProbCut pruning is not implemented by the main search; these stages
                    // are unreachable, but kept so `Pick::incr()` stays total over the enum.
                    return None;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::prelude::*;

    #[test]
    fn main_search_yields_every_legal_move_once() {
        let board = Board::default();
        let main_history = ButterflyHistory::new();
        let capture_history = CapturePieceToHistory::new();
        let mut picker = MovePicker::main_search(
            &board,
            4,
            &main_history,
            &capture_history,
            std::ptr::null(),
            BitMove::null(),
            [BitMove::null(); 2],
            BitMove::null(),
        );
        let mut count = 0;
        while picker.next(false).is_some() {
            count += 1;
        }
        assert_eq!(count, 20);
    }

    #[test]
    fn skip_quiets_hides_quiet_moves_from_the_start_position() {
        let board = Board::default();
        let main_history = ButterflyHistory::new();
        let capture_history = CapturePieceToHistory::new();
        let mut picker = MovePicker::main_search(
            &board,
            4,
            &main_history,
            &capture_history,
            std::ptr::null(),
            BitMove::null(),
            [BitMove::null(); 2],
            BitMove::null(),
        );
        // The start position has no captures, so skipping quiets should yield nothing.
        assert!(picker.next(true).is_none());
    }
}
