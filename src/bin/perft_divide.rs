//! Command-line perft driver: prints either a per-root-move breakdown
//! (`divide`) or runs the built-in position suite and checks node counts.
//!
//! ```text
//! perft_divide divide <depth> [fen]
//! perft_divide suite
//! ```

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use chess_core::board::Board;
use chess_core::perft::{divide, perft, PERFT_SUITE};

const DEFAULT_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    match args.get(1).map(String::as_str) {
        Some("divide") => run_divide(&args[2..]),
        Some("suite") => run_suite(),
        _ => {
            eprintln!("usage: perft_divide divide <depth> [fen]");
            eprintln!("       perft_divide suite");
            ExitCode::FAILURE
        }
    }
}

fn run_divide(rest: &[String]) -> ExitCode {
    let Some(depth) = rest.first().and_then(|s| s.parse::<u32>().ok()) else {
        eprintln!("divide requires a numeric depth argument");
        return ExitCode::FAILURE;
    };
    let fen = rest
        .get(1..)
        .filter(|parts| !parts.is_empty())
        .map(|parts| parts.join(" "))
        .unwrap_or_else(|| DEFAULT_FEN.to_string());

    let mut board = match Board::try_from_fen(&fen) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("invalid FEN '{fen}': {err}");
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();
    let breakdown = divide(&mut board, depth);
    let total: u64 = breakdown.iter().map(|(_, nodes)| nodes).sum();
    for (mv, nodes) in &breakdown {
        println!("{mv}: {nodes}");
    }
    println!("\nTotal nodes: {total} ({:?})", start.elapsed());
    ExitCode::SUCCESS
}

fn run_suite() -> ExitCode {
    let mut all_ok = true;
    for case in PERFT_SUITE {
        let mut board = match Board::try_from_fen(case.fen) {
            Ok(board) => board,
            Err(err) => {
                eprintln!("{}: invalid FEN: {err}", case.name);
                all_ok = false;
                continue;
            }
        };
        for &(depth, expected) in case.depths {
            let start = Instant::now();
            let nodes = perft(&mut board, depth);
            let elapsed = start.elapsed();
            let status = if nodes == expected { "ok" } else { "MISMATCH" };
            println!("{:<16} depth {depth}: {nodes:>12} nodes in {elapsed:>10?}  [{status}]", case.name);
            if nodes != expected {
                all_ok = false;
                println!("  expected {expected}, got {nodes}");
            }
        }
    }
    if all_ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
