//! Typed error enums returned from fallible `core` operations: building a [`Board`] from a
//! FEN string, validating a position, applying an unknown UCI move string, and loading an
//! NNUE evaluation file.
//!
//! [`Board`]: ../board/struct.Board.html

use crate::core::{Player, PieceType};
use std::num;

/// Errors encountered while parsing a FEN string into a [`Board`](../board/struct.Board.html).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid number of fen sections: {sections}, expected 6")]
    NotEnoughSections { sections: usize },
    #[error("invalid number of ranks: {ranks}, expected 8")]
    IncorrectRankAmounts { ranks: usize },
    #[error("invalid turn: {turn}, expected 'w' or 'b'")]
    UnrecognizedTurn { turn: String },
    #[error("unreadable en-passant square: {ep}")]
    EPSquareUnreadable { ep: String },
    #[error("invalid en-passant square: {ep}")]
    EPSquareInvalid { ep: String },
    #[error("square number too small for rank {rank}: {square}")]
    SquareSmallerRank { rank: usize, square: String },
    #[error("square number too large for rank {rank}: {square}")]
    SquareLargerRank { rank: usize, square: String },
    #[error("unrecognized piece: {piece}")]
    UnrecognizedPiece { piece: char },
    #[error("unreadable halfmove/fullmove count")]
    UnreadableMoves(#[from] num::ParseIntError),
    #[error("too many checking pieces: {num}")]
    IllegalNumCheckingPieces { num: u8 },
    #[error("these two pieces cannot check the king at the same time: {piece_1}, {piece_2}")]
    IllegalCheckState { piece_1: PieceType, piece_2: PieceType },
    #[error("too many pawns for player {player}: {num}")]
    TooManyPawns { player: Player, num: u8 },
    #[error("pawn on first or last rank")]
    PawnOnLastRow,
    #[error("incorrect number of kings for {player}: {num}")]
    IncorrectKingNum { player: Player, num: u8 },
}

/// Errors encountered while applying a move given as UCI long algebraic notation
/// (e.g. `e2e4`, `e7e8q`) to a [`Board`](../board/struct.Board.html).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("move string '{uci}' could not be parsed")]
    Unparsable { uci: String },
    #[error("move '{uci}' is not legal in the current position")]
    IllegalMove { uci: String },
    #[error("no piece found on the source square of move '{uci}'")]
    NoPieceOnSquare { uci: String },
}

/// Errors encountered while loading or evaluating an NNUE network.
#[derive(thiserror::Error, Debug)]
pub enum NnueError {
    #[error("failed to read NNUE file: {0}")]
    Io(#[from] std::io::Error),
    #[error("NNUE file too short: got {got} bytes, need at least {need}")]
    TooShort { got: usize, need: usize },
    #[error("NNUE file has wrong magic stamp at offset {offset}: got {got:#010x}")]
    BadMagic { offset: usize, got: u32 },
    #[error("NNUE file size mismatch: got {got} bytes, expected {expected}")]
    SizeMismatch { got: usize, expected: usize },
    #[error("no NNUE network is loaded and no embedded default is available")]
    NoNetworkAvailable,
}
