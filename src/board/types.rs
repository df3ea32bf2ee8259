//! Core value types: squares, colours, pieces, bitboards, and moves.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::SquareError;

pub(crate) fn file_to_index(file: char) -> usize {
    file as usize - ('a' as usize)
}

pub(crate) fn rank_to_index(rank: char) -> usize {
    (rank as usize) - ('0' as usize) - 1
}

pub(crate) fn bit_for_square(sq: Square) -> Bitboard {
    Bitboard(1u64 << sq.index().as_usize())
}

pub(crate) fn pop_lsb(bb: &mut Bitboard) -> SquareIdx {
    SquareIdx(crate::bitutil::pop_lsb(&mut bb.0))
}

pub(crate) const CASTLE_WHITE_K: u8 = 1 << 0;
pub(crate) const CASTLE_WHITE_Q: u8 = 1 << 1;
pub(crate) const CASTLE_BLACK_K: u8 = 1 << 2;
pub(crate) const CASTLE_BLACK_Q: u8 = 1 << 3;

pub(crate) fn castle_bit(color: Color, side: char) -> u8 {
    match (color, side) {
        (Color::White, 'K') => CASTLE_WHITE_K,
        (Color::White, 'Q') => CASTLE_WHITE_Q,
        (Color::Black, 'K') => CASTLE_BLACK_K,
        (Color::Black, 'Q') => CASTLE_BLACK_Q,
        _ => 0,
    }
}

/// The four castling rights as an independently-settable bitset, used by
/// `BoardBuilder`. Internally the board still stores them packed into a
/// single `u8` (see `CASTLE_*` bit constants); this type is the ergonomic
/// read/write view over that packing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct CastlingRights(u8);

impl CastlingRights {
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q)
    }

    #[must_use]
    pub const fn from_u8(bits: u8) -> Self {
        CastlingRights(bits & 0b1111)
    }

    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// `kingside = true` for the `K`/`k` right, `false` for `Q`/`q`.
    pub fn set(&mut self, color: Color, kingside: bool) {
        let side = if kingside { 'K' } else { 'Q' };
        self.0 |= castle_bit(color, side);
    }

    #[must_use]
    pub fn has(self, color: Color, kingside: bool) -> bool {
        let side = if kingside { 'K' } else { 'Q' };
        self.0 & castle_bit(color, side) != 0
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Piece {
    pub(crate) fn index(self) -> usize {
        match self {
            Piece::Pawn => 0,
            Piece::Knight => 1,
            Piece::Bishop => 2,
            Piece::Rook => 3,
            Piece::Queen => 4,
            Piece::King => 5,
        }
    }

    pub(crate) fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'p' => Some(Piece::Pawn),
            'n' => Some(Piece::Knight),
            'b' => Some(Piece::Bishop),
            'r' => Some(Piece::Rook),
            'q' => Some(Piece::Queen),
            'k' => Some(Piece::King),
            _ => None,
        }
    }

    pub(crate) fn to_fen_char(self, color: Color) -> char {
        let c = match self {
            Piece::Pawn => 'p',
            Piece::Knight => 'n',
            Piece::Bishop => 'b',
            Piece::Rook => 'r',
            Piece::Queen => 'q',
            Piece::King => 'k',
        };
        if color == Color::White {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }

    /// Material value in centipawns, used for `Board::material`.
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            Piece::Pawn => 100,
            Piece::Knight => 325,
            Piece::Bishop => 325,
            Piece::Rook => 550,
            Piece::Queen => 1000,
            Piece::King => 50_000,
        }
    }
}

/// Promotion piece choices, queen first (the common case, listed first so
/// callers that only want the "obvious" promotion can take index 0).
pub(crate) const PROMOTION_PIECES: [Piece; 4] =
    [Piece::Queen, Piece::Rook, Piece::Bishop, Piece::Knight];

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub(crate) fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SquareIdx(pub u8);

impl SquareIdx {
    pub(crate) fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// A board square as (rank, file), both 0..8. Rank 0 is the 1st rank, file 0
/// is the a-file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize);

impl Square {
    #[must_use]
    pub const fn new(rank: usize, file: usize) -> Self {
        Square(rank, file)
    }

    #[must_use]
    pub const fn rank(self) -> usize {
        self.0
    }

    #[must_use]
    pub const fn file(self) -> usize {
        self.1
    }

    pub(crate) fn from_index(idx: SquareIdx) -> Self {
        let idx = idx.0 as usize;
        Square(idx / 8, idx % 8)
    }

    pub(crate) fn index(self) -> SquareIdx {
        SquareIdx((self.0 * 8 + self.1) as u8)
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format_square(*self))
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((rank, file): (usize, usize)) -> Result<Self, Self::Error> {
        if rank >= 8 {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        if file >= 8 {
            return Err(SquareError::FileOutOfBounds { file });
        }
        Ok(Square::new(rank, file))
    }
}

impl std::str::FromStr for Square {
    type Err = SquareError;

    /// Parses single-square algebraic notation, e.g. `"e4"`.
    ///
    /// For parsing a full move (`"e2e4"`, with optional promotion suffix)
    /// see `Board::try_from_fen`'s move-list sibling in `fen.rs` instead.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 {
            return Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            });
        }

        let file = match chars[0] {
            'a'..='h' => chars[0] as usize - 'a' as usize,
            _ => {
                return Err(SquareError::InvalidNotation {
                    notation: s.to_string(),
                })
            }
        };

        let rank = match chars[1] {
            '1'..='8' => chars[1] as usize - '1' as usize,
            _ => {
                return Err(SquareError::InvalidNotation {
                    notation: s.to_string(),
                })
            }
        };

        Ok(Square::new(rank, file))
    }
}

impl TryFrom<&str> for Square {
    type Error = SquareError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bitboard(pub u64);

/// A single move. This is a small `Copy` struct rather than a packed 32-bit
/// word; see the design notes for why that's an equivalent, not a lesser,
/// choice at this scope.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub is_castle: bool,
    pub is_en_passant: bool,
    pub is_double_push: bool,
    pub promotion: Option<Piece>,
    pub captured: Option<Piece>,
}

impl Move {
    /// A null move (used in tests and as an array-fill placeholder).
    #[must_use]
    pub const fn null() -> Self {
        Move {
            from: Square(0, 0),
            to: Square(0, 0),
            is_castle: false,
            is_en_passant: false,
            is_double_push: false,
            promotion: None,
            captured: None,
        }
    }

    #[must_use]
    pub fn is_capture(self) -> bool {
        self.captured.is_some() || self.is_en_passant
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", format_square(self.from), format_square(self.to))?;
        if let Some(p) = self.promotion {
            write!(f, "{}", p.to_fen_char(Color::Black))?;
        }
        Ok(())
    }
}

pub const MAX_MOVES: usize = 256;
const EMPTY_MOVE: Move = Move::null();

#[derive(Clone, Debug)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveList {
    #[must_use]
    pub const fn new() -> Self {
        MoveList {
            moves: [EMPTY_MOVE; MAX_MOVES],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        debug_assert!(self.len < MAX_MOVES, "move list overflow (> {MAX_MOVES})");
        self.moves[self.len] = mv;
        self.len += 1;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        if idx < self.len {
            Some(self.moves[idx])
        } else {
            None
        }
    }

    #[must_use]
    pub fn contains(&self, from: Square, to: Square, promotion: Option<Piece>) -> bool {
        self.iter()
            .any(|m| m.from == from && m.to == to && m.promotion == promotion)
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

pub fn format_square(sq: Square) -> String {
    format!("{}{}", (sq.1 as u8 + b'a') as char, sq.0 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_index_round_trips() {
        for rank in 0..8 {
            for file in 0..8 {
                let sq = Square(rank, file);
                let idx = sq.index();
                assert_eq!(Square::from_index(idx), sq);
            }
        }
    }

    #[test]
    fn format_square_matches_algebraic() {
        assert_eq!(format_square(Square(0, 0)), "a1");
        assert_eq!(format_square(Square(7, 7)), "h8");
        assert_eq!(format_square(Square(3, 4)), "e4");
    }

    #[test]
    fn move_display_includes_promotion_suffix() {
        let mv = Move {
            promotion: Some(Piece::Queen),
            ..Move::null()
        };
        assert_eq!(mv.to_string(), "a1a1q");
    }

    #[test]
    fn castling_rights_independent_bits() {
        let mut rights = CastlingRights::none();
        rights.set(Color::White, true);
        assert!(rights.has(Color::White, true));
        assert!(!rights.has(Color::White, false));
        assert!(!rights.has(Color::Black, true));
    }

    #[test]
    fn square_from_str_parses_algebraic_notation() {
        assert_eq!("e4".parse::<Square>().unwrap(), Square(3, 4));
        assert_eq!("a1".parse::<Square>().unwrap(), Square(0, 0));
        assert_eq!("h8".parse::<Square>().unwrap(), Square(7, 7));
    }

    #[test]
    fn square_from_str_rejects_malformed_notation() {
        assert_eq!(
            "e9".parse::<Square>(),
            Err(SquareError::InvalidNotation {
                notation: "e9".to_string()
            })
        );
        assert_eq!(
            "z4".parse::<Square>(),
            Err(SquareError::InvalidNotation {
                notation: "z4".to_string()
            })
        );
        assert!("e".parse::<Square>().is_err());
        assert!("e44".parse::<Square>().is_err());
    }

    #[test]
    fn square_try_from_str_matches_from_str() {
        assert_eq!(Square::try_from("d5").unwrap(), Square(4, 3));
    }

    #[test]
    fn square_try_from_rank_file_bounds_checks() {
        assert_eq!(Square::try_from((3, 4)).unwrap(), Square(3, 4));
        assert_eq!(
            Square::try_from((8, 0)),
            Err(SquareError::RankOutOfBounds { rank: 8 })
        );
        assert_eq!(
            Square::try_from((0, 8)),
            Err(SquareError::FileOutOfBounds { file: 8 })
        );
    }
}
