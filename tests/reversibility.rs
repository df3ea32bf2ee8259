//! Property-based test: for any sequence of legal-move choices, playing
//! them out and unmaking in reverse order restores the exact starting
//! position (hash, FEN, and every board invariant).

use chess_core::board::Board;
use proptest::prelude::*;

proptest! {
    #[test]
    fn make_unmake_round_trips_for_arbitrary_move_sequences(choices in proptest::collection::vec(0u32..64, 1..40)) {
        let mut board = Board::new();
        let initial_hash = board.hash();
        let initial_fen = board.to_fen();

        let mut played = Vec::new();
        for choice in &choices {
            let legal = board.generate_legal_moves();
            if legal.is_empty() {
                break;
            }
            let idx = (*choice as usize) % legal.len();
            let mv = legal.get(idx).unwrap();
            let info = board.make_move(mv);
            played.push((mv, info));
        }

        for (mv, info) in played.into_iter().rev() {
            board.unmake_move(mv, info);
        }

        prop_assert_eq!(board.hash(), initial_hash);
        prop_assert_eq!(board.to_fen(), initial_fen);
    }
}
