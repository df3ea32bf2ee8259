//! Debug-only invariant checking and pretty-printing.
//!
//! `assert_board_ok` is wired into the perft driver at every leaf and after
//! every unmake in debug builds; it is the cheapest way to catch a
//! make/unmake bug close to where it happened rather than as a perft count
//! mismatch three plies later.

#[cfg(feature = "logging")]
use log::error;

use super::{Bitboard, Board, Color, Piece, Square};

#[cfg(debug_assertions)]
impl Board {
    /// Panics if any of the position invariants are violated. No-op cost in
    /// release builds (the whole function is compiled out).
    pub fn assert_board_ok(&self) {
        macro_rules! check {
            ($cond:expr, $($msg:tt)*) => {
                if !$cond {
                    #[cfg(feature = "logging")]
                    error!("board invariant violated: {}", format!($($msg)*));
                    panic!("board invariant violated: {}", format!($($msg)*));
                }
            };
        }

        let white_occ = self.occupied[Color::White.index()].0;
        let black_occ = self.occupied[Color::Black.index()].0;
        check!(
            white_occ & black_occ == 0,
            "white and black occupancy overlap: {white_occ:#018x} & {black_occ:#018x}"
        );
        check!(
            self.all_occupied.0 == (white_occ | black_occ),
            "all_occupied out of sync with per-colour occupancy"
        );

        for color in [Color::White, Color::Black] {
            let c_idx = color.index();
            let mut union = 0u64;
            for p_idx in 0..6 {
                let bb = self.pieces[c_idx][p_idx].0;
                check!(
                    bb & union == 0,
                    "two piece types of {color:?} overlap (piece index {p_idx})"
                );
                union |= bb;
            }
            check!(
                union == self.occupied[c_idx].0,
                "{color:?} piece bitboards don't union to its occupancy bitboard"
            );
        }

        for color in [Color::White, Color::Black] {
            let king_count =
                crate::bitutil::popcount(self.pieces[color.index()][Piece::King.index()].0);
            check!(king_count == 1, "{color:?} has {king_count} kings, expected exactly 1");
        }

        for sq_idx in 0..64u8 {
            let sq = Square::from_index(super::SquareIdx(sq_idx));
            if let Some((_, piece)) = self.piece_at(sq) {
                if piece == Piece::Pawn {
                    check!(
                        sq.rank() != 0 && sq.rank() != 7,
                        "pawn found on back rank at {sq}"
                    );
                }
            }
        }

        let recomputed_hash = self.calculate_initial_hash();
        check!(
            recomputed_hash == self.hash,
            "incremental hash {:#018x} disagrees with recomputed hash {recomputed_hash:#018x}",
            self.hash
        );

        let recomputed_material = self.recompute_material();
        check!(
            recomputed_material == self.material,
            "incremental material {:?} disagrees with recomputed material {recomputed_material:?}",
            self.material
        );

        for (color, kingside) in [
            (Color::White, true),
            (Color::White, false),
            (Color::Black, true),
            (Color::Black, false),
        ] {
            if !self.has_castling_right(color, if kingside { 'K' } else { 'Q' }) {
                continue;
            }
            let back_rank = if color == Color::White { 0 } else { 7 };
            let rook_file = if kingside { 7 } else { 0 };
            check!(
                self.piece_at(Square(back_rank, 4)) == Some((color, Piece::King)),
                "{color:?} retains {} castling right but king isn't on e{}",
                if kingside { "kingside" } else { "queenside" },
                back_rank + 1
            );
            check!(
                self.piece_at(Square(back_rank, rook_file)) == Some((color, Piece::Rook)),
                "{color:?} retains {} castling right but rook isn't on its start square",
                if kingside { "kingside" } else { "queenside" }
            );
        }

        if let Some(ep) = self.en_passant_target {
            if self.white_to_move {
                check!(ep.rank() == 5, "white to move but en passant target not on rank 6: {ep}");
                check!(
                    self.piece_at(Square(4, ep.file())) == Some((Color::Black, Piece::Pawn)),
                    "en passant target {ep} has no black pawn behind it"
                );
            } else {
                check!(ep.rank() == 2, "black to move but en passant target not on rank 3: {ep}");
                check!(
                    self.piece_at(Square(3, ep.file())) == Some((Color::White, Piece::Pawn)),
                    "en passant target {ep} has no white pawn behind it"
                );
            }
        }
    }

    /// Debug helper to print all bitboard values.
    pub fn debug_bitboards(&self) {
        let colors = [Color::White, Color::Black];
        let pieces = [
            (Piece::Pawn, "P"),
            (Piece::Knight, "N"),
            (Piece::Bishop, "B"),
            (Piece::Rook, "R"),
            (Piece::Queen, "Q"),
            (Piece::King, "K"),
        ];

        println!(
            "Side to move: {}",
            if self.white_to_move { "White" } else { "Black" }
        );
        println!("Castling mask: {:#06b}", self.castling_rights);
        if let Some(ep_target) = self.en_passant_target {
            println!("EP Target: {ep_target}");
        }
        println!("All occupied: {:#018x}", self.all_occupied.0);

        for color in colors {
            let label = if color == Color::White { "White" } else { "Black" };
            for (piece, name) in pieces {
                let bb = self.pieces_of(color, piece).0;
                println!("{label} {name}: {bb:#018x}");
            }
        }
        println!("------------------------------------");
    }

    pub fn print_bitboard_grid(&self, label: &str, bb: Bitboard) {
        println!("{label} {:#018x}", bb.0);
        println!("  +---+---+---+---+---+---+---+---+");
        for rank in (0..8).rev() {
            print!("{} |", rank + 1);
            for file in 0..8 {
                let idx = (rank * 8 + file) as u8;
                let ch = if (bb.0 >> idx) & 1 == 1 { '1' } else { '.' };
                print!(" {ch} |");
            }
            println!("\n  +---+---+---+---+---+---+---+---+");
        }
        println!("    a   b   c   d   e   f   g   h");
        println!("------------------------------------");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_passes_invariant_checks() {
        Board::new().assert_board_ok();
    }

    #[test]
    fn kiwipete_passes_invariant_checks() {
        Board::try_from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
            .unwrap()
            .assert_board_ok();
    }

    #[test]
    #[should_panic(expected = "board invariant violated")]
    fn missing_king_fails_invariant_check() {
        let board = super::BoardBuilder::new()
            .piece(Square(0, 4), Color::White, Piece::King)
            .build();
        board.assert_board_ok();
    }
}
