
extern crate chess_core;

mod board_build;
mod move_generating;
mod fen_building;
mod board_move_apply;
mod basic_bots;
mod pseudo_legal_checks;
mod board_hash;

