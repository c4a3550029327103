use std::ops::{Index, IndexMut};

use chess_core::core::masks::*;
use chess_core::{BitMove, Player};

use super::{StatBoard, NumStatBoard};

/// ButterflyBoards are 2 tables (one for each color) indexed by the move's from
/// and to squares, see chessprogramming.wikispaces.com/Butterfly+Boards
pub struct ButterflyHistory {
    a: [[i16; (SQ_CNT * SQ_CNT)]; PLAYER_CNT]
}

// [player][from * SQ_CNT + to]
type ButterflyIdx = (Player, BitMove);

#[inline(always)]
fn butterfly_index(mov: BitMove) -> usize {
    mov.get_src().0 as usize * SQ_CNT + mov.get_dest().0 as usize
}

impl Index<ButterflyIdx> for ButterflyHistory {
    type Output = i16;

    #[inline(always)]
    fn index(&self, idx: ButterflyIdx) -> &Self::Output {
        unsafe {
            self.a
                .get_unchecked(idx.0 as usize)
                .get_unchecked(butterfly_index(idx.1))
        }
    }
}

impl IndexMut<ButterflyIdx> for ButterflyHistory {
    #[inline(always)]
    fn index_mut(&mut self, idx: ButterflyIdx) -> &mut Self::Output {
        unsafe {
            self.a
                .get_unchecked_mut(idx.0 as usize)
                .get_unchecked_mut(butterfly_index(idx.1))
        }
    }
}

impl StatBoard<i16> for ButterflyHistory {
    const FILL: i16 = 0;
}

impl NumStatBoard for ButterflyHistory {
    const D: i16 = 324;
}