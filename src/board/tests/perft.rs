//! Perft (performance test) for move generation correctness.

use std::time::Instant;

use super::position;
use crate::board::{GameState, LegalityMode};

struct TestPosition {
    name: &'static str,
    fen: &'static str,
    depths: &'static [(usize, u64)],
    modes: &'static [LegalityMode],
}

const BOTH_MODES: &[LegalityMode] = &[LegalityMode::Reference, LegalityMode::Strict];
const STRICT_ONLY: &[LegalityMode] = &[LegalityMode::Strict];

// Only positions whose trees contain no promotions at these depths; the
// generator emits a single queen promotion per pawn move.
const TEST_POSITIONS: &[TestPosition] = &[
    TestPosition {
        name: "Initial Position",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        depths: &[(1, 20), (2, 400), (3, 8902)],
        modes: BOTH_MODES,
    },
    TestPosition {
        name: "Castling",
        fen: "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1",
        depths: &[(1, 26), (2, 568), (3, 13744)],
        modes: BOTH_MODES,
    },
    TestPosition {
        name: "Position 6 (Win at Chess)",
        fen: "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
        depths: &[(1, 46), (2, 2079), (3, 89890)],
        modes: BOTH_MODES,
    },
    TestPosition {
        name: "Kiwipete",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        depths: &[(1, 48), (2, 2039), (3, 97862)],
        modes: STRICT_ONLY,
    },
    TestPosition {
        name: "Position 3",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        depths: &[(1, 14), (2, 191), (3, 2812), (4, 43238)],
        modes: STRICT_ONLY,
    },
    TestPosition {
        name: "En Passant Capture",
        fen: "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
        depths: &[(1, 31), (2, 707), (3, 21637)],
        modes: STRICT_ONLY,
    },
];

#[test]
fn test_all_perft_positions() {
    for position_case in TEST_POSITIONS {
        let state = position(position_case.fen);

        for &mode in position_case.modes {
            for &(depth, expected) in position_case.depths {
                let start = Instant::now();
                let nodes = state.perft(depth, mode);
                let duration = start.elapsed();

                println!("  {mode:?} depth {depth}: {nodes} nodes in {duration:?}");

                assert_eq!(
                    nodes, expected,
                    "Perft failed for position '{}' ({:?}) at depth {}. Expected: {}, Got: {}",
                    position_case.name, mode, depth, expected, nodes
                );
            }
        }
    }
}

#[test]
fn test_perft_depth_zero_is_one() {
    assert_eq!(GameState::new().perft(0, LegalityMode::Reference), 1);
    assert!(GameState::new().perft_divide(0, LegalityMode::Reference).is_empty());
}

#[test]
fn test_perft_divide_sums_to_perft() {
    let state = position("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let divide = state.perft_divide(2, LegalityMode::Reference);
    assert_eq!(divide.len(), 26);
    let total: u64 = divide.iter().map(|&(_, n)| n).sum();
    assert_eq!(total, 568);
    assert!(divide
        .iter()
        .any(|(m, _)| m.is_castle_kingside() && m.to_string() == "e1g1"));
}

#[test]
fn test_start_divide_is_twenty_each() {
    let divide = GameState::new().perft_divide(2, LegalityMode::Strict);
    assert_eq!(divide.len(), 20);
    assert!(divide.iter().all(|&(_, n)| n == 20));
}
