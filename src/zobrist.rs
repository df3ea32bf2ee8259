//! Zobrist hashing keys for incremental position hashing.
//!
//! Keys are seeded from a fixed PRNG seed so hashes are reproducible across
//! runs and processes (useful for perft mismatch debugging and for fixtures
//! that hard-code expected hash values).

use once_cell::sync::Lazy;
use rand::prelude::*;

#[cfg(feature = "logging")]
use log::debug;

const ZOBRIST_SEED: u64 = 1_234_567_890;

pub(crate) struct ZobristKeys {
    /// `piece_keys[piece_kind][color][square]`
    pub(crate) piece_keys: [[[u64; 64]; 2]; 6],
    pub(crate) black_to_move_key: u64,
    /// `castling_keys[color][side]`: side 0 = kingside, 1 = queenside.
    pub(crate) castling_keys: [[u64; 2]; 2],
    /// Indexed by file only; the en-passant target's rank never matters for
    /// hashing since at most one side can have a live en-passant square.
    pub(crate) en_passant_keys: [u64; 8],
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(ZOBRIST_SEED);
        let mut piece_keys = [[[0u64; 64]; 2]; 6];
        let mut castling_keys = [[0u64; 2]; 2];
        let mut en_passant_keys = [0u64; 8];

        for piece in &mut piece_keys {
            for color in piece.iter_mut() {
                for key in color.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        let black_to_move_key = rng.gen();

        for color in &mut castling_keys {
            for key in color.iter_mut() {
                *key = rng.gen();
            }
        }

        for key in &mut en_passant_keys {
            *key = rng.gen();
        }

        ZobristKeys {
            piece_keys,
            black_to_move_key,
            castling_keys,
            en_passant_keys,
        }
    }
}

pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(|| {
    #[cfg(feature = "logging")]
    debug!("generating zobrist key set from fixed seed {ZOBRIST_SEED}");
    ZobristKeys::new()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_deterministic_across_instantiations() {
        let a = ZobristKeys::new();
        let b = ZobristKeys::new();
        assert_eq!(a.black_to_move_key, b.black_to_move_key);
        assert_eq!(a.piece_keys, b.piece_keys);
        assert_eq!(a.castling_keys, b.castling_keys);
        assert_eq!(a.en_passant_keys, b.en_passant_keys);
    }

    #[test]
    fn keys_are_pairwise_distinct_spot_check() {
        let k = &*ZOBRIST;
        assert_ne!(k.piece_keys[0][0][0], k.piece_keys[0][0][1]);
        assert_ne!(k.piece_keys[0][0][0], k.piece_keys[0][1][0]);
        assert_ne!(k.black_to_move_key, k.piece_keys[0][0][0]);
    }
}
