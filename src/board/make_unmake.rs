//! Make/unmake: mutate a board to reflect a move, and reverse it exactly.

use crate::zobrist::ZOBRIST;

use super::state::UnmakeInfo;
use super::{bit_for_square, castle_bit, Board, Color, Move, Piece, Square};

impl Board {
    pub(crate) fn current_color(&self) -> Color {
        if self.white_to_move {
            Color::White
        } else {
            Color::Black
        }
    }

    pub(crate) fn opponent_color(&self, color: Color) -> Color {
        color.opposite()
    }

    pub(crate) fn has_castling_right(&self, color: Color, side: char) -> bool {
        self.castling_rights & castle_bit(color, side) != 0
    }

    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        let bit = bit_for_square(sq).0;
        let c_idx = color.index();
        let p_idx = piece.index();
        self.pieces[c_idx][p_idx].0 |= bit;
        self.occupied[c_idx].0 |= bit;
        self.all_occupied.0 |= bit;
    }

    pub(crate) fn remove_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        let bit = bit_for_square(sq).0;
        let c_idx = color.index();
        let p_idx = piece.index();
        self.pieces[c_idx][p_idx].0 &= !bit;
        self.occupied[c_idx].0 &= !bit;
        self.all_occupied.0 &= !bit;
    }

    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        let bit = bit_for_square(sq).0;
        if self.all_occupied.0 & bit == 0 {
            return None;
        }
        let color = if self.occupied[0].0 & bit != 0 {
            Color::White
        } else {
            Color::Black
        };
        let c_idx = color.index();
        for p_idx in 0..6 {
            if self.pieces[c_idx][p_idx].0 & bit != 0 {
                let piece = match p_idx {
                    0 => Piece::Pawn,
                    1 => Piece::Knight,
                    2 => Piece::Bishop,
                    3 => Piece::Rook,
                    4 => Piece::Queen,
                    5 => Piece::King,
                    _ => unreachable!(),
                };
                return Some((color, piece));
            }
        }
        None
    }

    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        self.all_occupied.0 & bit_for_square(sq).0 == 0
    }

    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|(_, piece)| piece)
    }

    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    pub(crate) fn calculate_initial_hash(&self) -> u64 {
        let mut hash: u64 = 0;
        for r in 0..8 {
            for f in 0..8 {
                let sq = Square::new(r, f);
                if let Some((color, piece)) = self.piece_at(sq) {
                    hash ^= ZOBRIST.piece_keys[piece.index()][color.index()][sq.index().as_usize()];
                }
            }
        }
        if !self.white_to_move {
            hash ^= ZOBRIST.black_to_move_key;
        }
        if self.castling_rights & super::CASTLE_WHITE_K != 0 {
            hash ^= ZOBRIST.castling_keys[0][0];
        }
        if self.castling_rights & super::CASTLE_WHITE_Q != 0 {
            hash ^= ZOBRIST.castling_keys[0][1];
        }
        if self.castling_rights & super::CASTLE_BLACK_K != 0 {
            hash ^= ZOBRIST.castling_keys[1][0];
        }
        if self.castling_rights & super::CASTLE_BLACK_Q != 0 {
            hash ^= ZOBRIST.castling_keys[1][1];
        }
        if let Some(ep_square) = self.en_passant_target {
            hash ^= ZOBRIST.en_passant_keys[ep_square.file()];
        }
        hash
    }

    fn castle_rook_squares(to: Square) -> (Square, Square) {
        // to.file() == 6 => kingside (rook h->f), else queenside (rook a->d)
        let (from_f, to_f) = if to.file() == 6 { (7, 5) } else { (0, 3) };
        (Square::new(to.rank(), from_f), Square::new(to.rank(), to_f))
    }

    /// Applies `mv` unconditionally (no legality check) and returns the undo
    /// record needed to reverse it. Pseudo-legal-only: the caller is
    /// responsible for checking king safety if it cares (see `try_make`).
    #[must_use]
    pub fn make_move(&mut self, mv: Move) -> UnmakeInfo {
        let prior_hash = self.hash;
        let prior_en_passant_target = self.en_passant_target;
        let prior_castling_rights = self.castling_rights;
        let prior_halfmove_clock = self.halfmove_clock;
        let prior_material = self.material;

        let color = self.current_color();
        let c_idx = color.index();
        let opp = color.opposite();
        let opp_idx = opp.index();

        let mut hash = self.hash;
        hash ^= ZOBRIST.black_to_move_key;
        if let Some(old_ep) = self.en_passant_target {
            hash ^= ZOBRIST.en_passant_keys[old_ep.file()];
        }
        self.en_passant_target = None;

        // 1. Remove any captured piece (including en passant).
        let captured = if mv.is_en_passant {
            let capture_rank = if color == Color::White {
                mv.to.rank() - 1
            } else {
                mv.to.rank() + 1
            };
            let capture_sq = Square::new(capture_rank, mv.to.file());
            let captured = self.piece_at(capture_sq).expect("en passant capture square empty");
            self.remove_piece(capture_sq, captured.0, captured.1);
            hash ^= ZOBRIST.piece_keys[captured.1.index()][captured.0.index()][capture_sq.index().as_usize()];
            self.material[opp_idx] -= captured.1.value();
            Some(captured)
        } else if !mv.is_castle {
            if let Some(captured) = self.piece_at(mv.to) {
                self.remove_piece(mv.to, captured.0, captured.1);
                hash ^= ZOBRIST.piece_keys[captured.1.index()][captured.0.index()][mv.to.index().as_usize()];
                self.material[opp_idx] -= captured.1.value();
                Some(captured)
            } else {
                None
            }
        } else {
            None
        };

        // 2. Move the piece off `from`.
        let (moving_color, moving_piece) = self.piece_at(mv.from).expect("make_move: from square empty");
        debug_assert_eq!(moving_color, color);
        self.remove_piece(mv.from, color, moving_piece);
        hash ^= ZOBRIST.piece_keys[moving_piece.index()][c_idx][mv.from.index().as_usize()];

        // 3. Place it at `to` (or the promoted piece; or the king+rook for castling).
        if mv.is_castle {
            self.set_piece(mv.to, color, Piece::King);
            hash ^= ZOBRIST.piece_keys[Piece::King.index()][c_idx][mv.to.index().as_usize()];

            let (rook_from, rook_to) = Self::castle_rook_squares(mv.to);
            self.remove_piece(rook_from, color, Piece::Rook);
            self.set_piece(rook_to, color, Piece::Rook);
            hash ^= ZOBRIST.piece_keys[Piece::Rook.index()][c_idx][rook_from.index().as_usize()];
            hash ^= ZOBRIST.piece_keys[Piece::Rook.index()][c_idx][rook_to.index().as_usize()];
        } else {
            let placed = mv.promotion.unwrap_or(moving_piece);
            self.set_piece(mv.to, color, placed);
            hash ^= ZOBRIST.piece_keys[placed.index()][c_idx][mv.to.index().as_usize()];
            if mv.promotion.is_some() {
                self.material[c_idx] += placed.value() - moving_piece.value();
            }
        }

        // 4. New en passant square, if this was a double push.
        if mv.is_double_push {
            let ep_rank = (mv.from.rank() + mv.to.rank()) / 2;
            let ep_sq = Square::new(ep_rank, mv.from.file());
            self.en_passant_target = Some(ep_sq);
            hash ^= ZOBRIST.en_passant_keys[ep_sq.file()];
        }

        // 5. Halfmove clock.
        if moving_piece == Piece::Pawn || mv.is_capture() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }

        // 6. Castling-rights updates.
        hash ^= self.update_castling_rights(mv, moving_piece, color, captured);

        self.white_to_move = !self.white_to_move;
        self.hash = hash;

        let info = UnmakeInfo {
            captured,
            prior_en_passant_target,
            prior_castling_rights,
            prior_hash,
            prior_halfmove_clock,
            prior_material,
        };
        self.history.push(info);
        info
    }

    fn update_castling_rights(
        &mut self,
        mv: Move,
        moving_piece: Piece,
        color: Color,
        captured: Option<(Color, Piece)>,
    ) -> u64 {
        let mut delta = 0u64;
        if moving_piece == Piece::King {
            if self.has_castling_right(color, 'K') {
                delta ^= ZOBRIST.castling_keys[color.index()][0];
                self.castling_rights &= !castle_bit(color, 'K');
            }
            if self.has_castling_right(color, 'Q') {
                delta ^= ZOBRIST.castling_keys[color.index()][1];
                self.castling_rights &= !castle_bit(color, 'Q');
            }
        } else if moving_piece == Piece::Rook {
            let start_rank = if color == Color::White { 0 } else { 7 };
            if mv.from == Square::new(start_rank, 0) && self.has_castling_right(color, 'Q') {
                delta ^= ZOBRIST.castling_keys[color.index()][1];
                self.castling_rights &= !castle_bit(color, 'Q');
            } else if mv.from == Square::new(start_rank, 7) && self.has_castling_right(color, 'K') {
                delta ^= ZOBRIST.castling_keys[color.index()][0];
                self.castling_rights &= !castle_bit(color, 'K');
            }
        }

        if let Some((cap_color, cap_piece)) = captured {
            if cap_piece == Piece::Rook {
                let start_rank = if cap_color == Color::White { 0 } else { 7 };
                if mv.to == Square::new(start_rank, 0) && self.has_castling_right(cap_color, 'Q') {
                    delta ^= ZOBRIST.castling_keys[cap_color.index()][1];
                    self.castling_rights &= !castle_bit(cap_color, 'Q');
                } else if mv.to == Square::new(start_rank, 7) && self.has_castling_right(cap_color, 'K')
                {
                    delta ^= ZOBRIST.castling_keys[cap_color.index()][0];
                    self.castling_rights &= !castle_bit(cap_color, 'K');
                }
            }
        }
        delta
    }

    /// Reverses a move applied by `make_move`. The move and undo record must
    /// correspond to the immediately preceding `make_move` call.
    pub fn unmake_move(&mut self, mv: Move, info: UnmakeInfo) {
        let popped = self.history.pop();
        debug_assert_eq!(popped.prior_hash, info.prior_hash, "unmake/make mismatch");

        self.white_to_move = !self.white_to_move;
        let color = self.current_color();

        if mv.is_castle {
            self.remove_piece(mv.to, color, Piece::King);
            self.set_piece(mv.from, color, Piece::King);
            let (rook_from, rook_to) = Self::castle_rook_squares(mv.to);
            self.remove_piece(rook_to, color, Piece::Rook);
            self.set_piece(rook_from, color, Piece::Rook);
        } else {
            let placed = self.piece_at(mv.to).expect("unmake: to square empty");
            self.remove_piece(mv.to, placed.0, placed.1);
            let restored_piece = if mv.promotion.is_some() { Piece::Pawn } else { placed.1 };
            self.set_piece(mv.from, color, restored_piece);

            if mv.is_en_passant {
                let capture_rank = if color == Color::White {
                    mv.to.rank() - 1
                } else {
                    mv.to.rank() + 1
                };
                if let Some((cap_color, cap_piece)) = info.captured {
                    self.set_piece(Square::new(capture_rank, mv.to.file()), cap_color, cap_piece);
                }
            } else if let Some((cap_color, cap_piece)) = info.captured {
                self.set_piece(mv.to, cap_color, cap_piece);
            }
        }

        self.en_passant_target = info.prior_en_passant_target;
        self.castling_rights = info.prior_castling_rights;
        self.hash = info.prior_hash;
        self.halfmove_clock = info.prior_halfmove_clock;
        self.material = info.prior_material;
    }

    /// `make_move` plus a king-safety check: returns `None` (and leaves the
    /// board unchanged) if the move leaves the mover's own king attacked.
    #[must_use]
    pub fn try_make(&mut self, mv: Move) -> Option<UnmakeInfo> {
        let mover = self.current_color();
        let info = self.make_move(mv);
        let king_sq = self.king_square(mover).expect("no king on board");
        if self.is_square_attacked(king_sq, mover.opposite()) {
            self.unmake_move(mv, info);
            None
        } else {
            Some(info)
        }
    }
}
