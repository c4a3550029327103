

#[allow(unused_imports)]
use chess_core::{Board,BitBoard,SQ,Rank,File,Player,PieceType};
#[allow(unused_imports)]
use chess_core::core::mono_traits::*;
use chess_core::core::score::*;
use chess_core::core::masks::*;

use crate::tables::pawn_table::{PawnEntry, PawnTable};
use crate::tables::material::{MaterialEntry,Material};

const LAZY_THRESHOLD: Value = 1500;

pub struct Evaluation<'a> {
    board: &'a Board,
    pawn_entry: &'a mut PawnEntry,
    material_entry: &'a mut MaterialEntry,
    king_ring: [BitBoard; PLAYER_CNT],
    mobility_area: [BitBoard; PLAYER_CNT],
    mobility: [Score; PLAYER_CNT],
    attacked_by: [[Score; PIECE_TYPE_CNT];PLAYER_CNT],
    attacked_by2: [Score;PLAYER_CNT],
    king_attackers_count: [u8; PLAYER_CNT],
    king_attackers_weight: [i32; PLAYER_CNT],
    king_adjacent_zone_attacks_count: [i32; PLAYER_CNT],
}

impl <'a> Evaluation <'a> {
    /// Statically evaluates `board`, preferring the NNUE network (if `UseNNUE` is on and a
    /// network is loaded) and falling back to the classical pawn/material evaluator otherwise.
    pub fn evaluate(board: &mut Board, pawn_table: &mut PawnTable, material: &mut Material) -> Value {
        if let Some(v) = crate::nnue_state::evaluate(board) {
            return v;
        }
        Self::evaluate_classical(board, pawn_table, material)
    }

    fn evaluate_classical(board: &Board, pawn_table: &mut PawnTable, material: &mut Material) -> Value {
        #[allow(unused_variables)]

        let pawn_entry = { pawn_table.probe(&board) };
        let material_entry = { material.probe(&board) };

        let mut eval = Evaluation {
            board,
            pawn_entry,
            material_entry,
            king_ring: [BitBoard(0); PLAYER_CNT],
            mobility_area: [BitBoard(0); PLAYER_CNT],
            mobility: [Score(0,0); PLAYER_CNT],
            attacked_by: [[Score(0,0); PIECE_TYPE_CNT];PLAYER_CNT],
            attacked_by2: [Score(0,0) ;PLAYER_CNT],
            king_attackers_count: [0; PLAYER_CNT],
            king_attackers_weight: [0; PLAYER_CNT],
            king_adjacent_zone_attacks_count: [0; PLAYER_CNT],
        };

        eval.value()
    }

    /// Prints a breakdown of the static evaluation of `board` to stdout, for the UCI `eval`
    /// debug command. Uses its own scratch pawn/material tables rather than a worker's, since
    /// this can be invoked outside of a search.
    pub fn trace(board: &Board) {
        let mut pawn_table = PawnTable::new(crate::consts::PAWN_TABLE_SIZE);
        let mut material = Material::new(crate::consts::MATERIAL_TABLE_SIZE);
        let mut scratch = board.clone();
        let classical = Self::evaluate_classical(&scratch, &mut pawn_table, &mut material);
        let nnue = crate::nnue_state::evaluate(&mut scratch);

        println!("NNUE available: {}", nnue.is_some());
        if let Some(v) = nnue {
            println!("NNUE evaluation: {}", v);
        }
        println!("Classical evaluation: {}", classical);
        let white_pov = if board.turn() == Player::White { classical } else { -classical };
        println!("Classical evaluation (White's perspective): {}", white_pov);
    }

    fn value(&mut self) -> Value {
        let score = self.pawn_entry.pawns_score() + self.material_entry.score();
        let v = (score.0 + score.1) / 2;
        if v.abs() > LAZY_THRESHOLD {
            if self.board.turn() == Player::White {return v;}
            else {return -v;}
        }

        return v;
    }

//    fn initialize<P: PlayerTrait>(&mut self) {
//        let low_ranks: BitBoard = if P::player() == Player::White {Ra | RANK_3} else {RANK_6 | RANK_8};
//
//        // Find our pawns on the first two ranks, and those which are blocked
//        let mut b: BitBoard = self.board.piece_bb(P::player(), PieceType::P)
//            & P::shift_down(self.board.get_occupied() | low_ranks);
//
//        self.mobility_area[P::player() as usize] = !(b | self.board.piece_bb(P::player(), PieceType::K)
//                | self.pawn_entry.pawn_attacks(P::player()));
//
//
//    }
}