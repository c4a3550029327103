//! A Rust re-write of the basic building blocks of the [Stockfish](https://stockfishchess.org/)
//! chess engine.
//!
//! This package is separated into two parts. Firstly, the board representation & associated functions
//! (the current crate), and secondly, the search/engine implementations built on top of these
//! chess foundations, in the sibling `engine` crate.
//!
//! # Usage
//!
//! This crate is [on crates.io](https://crates.io/crates/chess_core) and can be
//! used by adding `chess_core` to the dependencies in your project's `Cargo.toml`.
//!
//! # Safety
//!
//! While generally a safe library, chess_core was built with a focus of speed in mind. Usage of methods must be followed
//! carefully, as there are many possible ways to `panic` unexpectedly. Methods with the ability to panic will be
//! documented as such.
//!
//! # Examples
//!
//! You can create a [`Board`] with the starting position like so:
//!
//! ```ignore
//! use chess_core::Board;
//! let board = Board::start_pos();
//! ```
//!
//! Generating a list of moves (Contained inside a [`MoveList`]) can be done with:
//!
//! ```ignore
//! let list = board.generate_moves();
//! ```
//!
//! Applying and undoing moves is simple:
//!
//! ```ignore
//! let mut board = Board::start_pos();
//! let list = board.generate_moves();
//!
//! for mov in list.iter() {
//!     board.apply_move(*mov);
//!     println!("{}",board.get_fen());
//!     board.undo_move();
//! }
//! ```
//!
//! Using fen strings is also supported:
//!
//! ```ignore
//! let start_position = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
//! let board = Board::from_fen(start_position).unwrap();
//! ```
//!
//! [`MoveList`]: core/move_list/struct.MoveList.html
//! [`Board`]: board/struct.Board.html

#![cfg_attr(test, allow(dead_code))]
#![allow(dead_code)]

#[macro_use]
extern crate bitflags;
#[macro_use]
extern crate lazy_static;

pub mod core;
pub mod board;
pub mod tools;
pub mod errors;
pub mod nnue;

pub use crate::board::Board;
pub use crate::core::piece_move::{BitMove,ScoringMove};
pub use crate::core::move_list::{MoveList,ScoringMoveList};
pub use crate::core::sq::SQ;
pub use crate::core::bitboard::BitBoard;
pub use crate::core::{Player, Piece, PieceType, Rank, File};
pub use crate::errors::{FenError, MoveError, NnueError};
