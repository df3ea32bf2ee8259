//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_core::board::prelude::*;
//!
//! let mut board = Board::new();
//! assert_eq!(board.generate_legal_moves().len(), 20);
//! ```

pub use super::{
    format_square, Board, BoardBuilder, CastlingRights, Color, FenError, Move, MoveList,
    MoveParseError, Piece, Square, SquareError,
};
