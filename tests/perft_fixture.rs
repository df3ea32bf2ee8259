//! Perft validation driven by a JSON fixture, exercising the `serde_json`
//! fixture-loading style instead of the hard-coded `PERFT_SUITE` table.

use serde::Deserialize;

use chess_core::board::Board;
use chess_core::perft::perft;

#[derive(Deserialize)]
struct FixtureSet {
    cases: Vec<FixtureCase>,
}

#[derive(Deserialize)]
struct FixtureCase {
    name: String,
    fen: String,
    depth: u32,
    nodes: u64,
}

#[test]
fn perft_fixture_suite() {
    let data = include_str!("data/perft_fixture.json");
    let set: FixtureSet = serde_json::from_str(data).expect("invalid perft_fixture.json");

    for case in &set.cases {
        let mut board = Board::try_from_fen(&case.fen)
            .unwrap_or_else(|err| panic!("invalid FEN for '{}': {err}", case.name));
        let nodes = perft(&mut board, case.depth);
        assert_eq!(
            nodes, case.nodes,
            "perft mismatch for '{}' at depth {}: expected {}, got {nodes}",
            case.name, case.depth, case.nodes
        );
    }
}
