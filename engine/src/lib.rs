//! Parallel alpha-beta search, transposition table, and UCI front-end built on `chess_core`.
//!
//! This crate is not intended to be used by other crates as a dependency; it's useful mostly
//! as a direct executable (see `src/main.rs`).
//!
//! The board representation, move generation, and NNUE evaluator live in the `chess_core`
//! crate instead.

#![cfg_attr(test, allow(dead_code))]
#![allow(dead_code)]

#[macro_use]
extern crate lazy_static;

pub mod endgame;
pub mod error;
pub mod nnue_state;
pub mod threadpool;
pub mod sync;
pub mod time;
pub mod consts;
pub mod uci;
pub mod root_moves;
pub mod movepick;
pub mod tables;
pub mod engine;
pub mod search;

pub use crate::consts::*;