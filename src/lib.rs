//! Bitboard chess position representation and pseudo-legal move generator.
//!
//! This crate owns the position model, attack tables, move generation,
//! make/unmake, Zobrist hashing, and a perft driver for validating all of
//! the above. It does not evaluate positions, search, or speak UCI — those
//! are a consumer's job, built on top of [`board::Board`].

pub mod attacks;
pub mod bitutil;
pub mod board;
pub mod perft;
mod zobrist;

pub use board::Board;
