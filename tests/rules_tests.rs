//! StandardRules integration tests: escort geometry, fills, captures, connectivity.

use brique::core::{Board, GameState, Move, Position, Stone};
use brique::rules::{create_rules, GameRules, RuleType, SquareShade, StandardRules};

fn setup(size: usize, stones: &[((i32, i32), Stone)]) -> GameState {
    let mut state = GameState::new(size).unwrap();
    for &(pos, stone) in stones {
        state.board_mut().set_stone(Position::from(pos), stone);
    }
    state
}

// =============================================================================
// Escorts
// =============================================================================

/// Interior escorts follow parity on every size.
#[test]
fn test_interior_escorts_all_cells() {
    let rules = StandardRules::new();
    let n = 6;
    let board = Board::new(n).unwrap();

    for row in 1..(n as i32 - 1) {
        for col in 1..(n as i32 - 1) {
            let pos = Position::new(row, col);
            let escorts = rules.escorts(pos, &board);
            let expected = match SquareShade::at(pos) {
                SquareShade::Light => [Position::new(row - 1, col), Position::new(row, col - 1)],
                SquareShade::Dark => [Position::new(row + 1, col), Position::new(row, col + 1)],
            };
            assert_eq!(escorts.as_slice(), &expected, "escorts of {}", pos);
        }
    }
}

/// Escorts never leave the board and never exceed two.
#[test]
fn test_escorts_stay_on_board() {
    let rules = StandardRules::new();
    for n in 1..6 {
        let board = Board::new(n).unwrap();
        for pos in board.positions() {
            let escorts = rules.escorts(pos, &board);
            assert!(escorts.len() <= 2);
            assert!(escorts.iter().all(|&e| board.is_valid_position(e)));
        }
    }
}

#[test]
fn test_corner_escorts() {
    let rules = StandardRules::new();
    let board = Board::new(5).unwrap();
    assert!(rules.escorts(Position::new(0, 0), &board).is_empty());
    // (4,4) is light on an odd board: both escorts present
    assert_eq!(rules.escorts(Position::new(4, 4), &board).len(), 2);
    // (0,4) is light: only the left escort survives
    assert_eq!(rules.escorts(Position::new(0, 4), &board).as_slice(), &[Position::new(0, 3)]);
}

/// Positions far outside the board, up to the coordinate limits, have no escorts.
#[test]
fn test_far_off_board_escorts_are_empty() {
    let rules = StandardRules::new();
    let board = Board::new(3).unwrap();
    for pos in [
        Position::new(i32::MAX, 0),
        Position::new(i32::MAX, i32::MAX),
        Position::new(i32::MIN, 1),
        Position::new(-100, -100),
    ] {
        assert!(rules.escorts(pos, &board).is_empty(), "escorts of {}", pos);
    }
    assert_eq!(SquareShade::at(Position::new(i32::MAX, 1)), SquareShade::Light);
}

// =============================================================================
// Fills and Captures
// =============================================================================

/// Both escorts of (1,1) are Black; a White stone there is captured by an
/// unrelated Black placement.
#[test]
fn test_capture_scenario() {
    let rules = StandardRules::new();
    let mut state = setup(
        3,
        &[((0, 1), Stone::Black), ((1, 0), Stone::Black), ((1, 1), Stone::White)],
    );

    let mv = Move::new(Position::new(2, 2), Stone::Black);
    assert!(rules.is_valid_move(&state, &mv));
    let mv = rules.process_move(&mut state, mv);

    assert_eq!(state.board().stone(Position::new(1, 1)), Stone::Black);
    assert!(mv.captured().contains(&Position::new(1, 1)));
    assert!(mv.filled().contains(&Position::new(1, 1)));
    assert_eq!(state.board().count(Stone::White), 0);
}

/// Captures are always a subset of fills.
#[test]
fn test_captured_subset_of_filled() {
    let rules = StandardRules::new();
    let mut state = setup(
        4,
        &[
            ((0, 1), Stone::White),
            ((1, 0), Stone::White),
            ((1, 1), Stone::Black),
            ((2, 2), Stone::White),
            ((1, 3), Stone::White),
        ],
    );
    state.switch_player();

    let mv = rules.process_move(&mut state, Move::new(Position::new(3, 0), Stone::White));

    assert_eq!(mv.filled(), &[Position::new(1, 1), Position::new(1, 2)]);
    assert_eq!(mv.captured(), &[Position::new(1, 1)]);
    for pos in mv.captured() {
        assert!(mv.filled().contains(pos));
    }
}

/// Nothing happens when no cell has both escorts.
#[test]
fn test_no_fill_on_sparse_board() {
    let rules = StandardRules::new();
    let mut state = GameState::new(5).unwrap();
    let mv = rules.process_move(&mut state, Move::new(Position::new(2, 2), Stone::Black));

    assert!(mv.filled().is_empty());
    assert_eq!(state.board().count(Stone::Black), 1);
}

// =============================================================================
// Connectivity
// =============================================================================

#[test]
fn test_black_needs_top_and_bottom() {
    let rules = StandardRules::new();
    // Full row 1 of Black touches neither top nor bottom edge
    let state = setup(
        3,
        &[((1, 0), Stone::Black), ((1, 1), Stone::Black), ((1, 2), Stone::Black)],
    );
    assert!(!rules.check_win_condition(&state, Stone::Black));
}

#[test]
fn test_white_needs_left_and_right() {
    let rules = StandardRules::new();
    let state = setup(
        3,
        &[((0, 1), Stone::White), ((1, 1), Stone::White), ((2, 1), Stone::White)],
    );
    assert!(!rules.check_win_condition(&state, Stone::White));
}

#[test]
fn test_opponent_stones_block() {
    let rules = StandardRules::new();
    let state = setup(
        3,
        &[
            ((0, 0), Stone::Black),
            ((1, 0), Stone::Black),
            ((1, 1), Stone::White),
            ((2, 1), Stone::Black),
        ],
    );
    assert!(!rules.check_win_condition(&state, Stone::Black));
}

#[test]
fn test_serpentine_path() {
    let rules = StandardRules::new();
    let path = [(0, 0), (1, 0), (1, 1), (1, 2), (1, 3), (2, 3), (3, 3), (3, 2), (4, 2)];
    let stones: Vec<_> = path.iter().map(|&p| (p, Stone::Black)).collect();
    let state = setup(5, &stones);
    assert!(rules.check_win_condition(&state, Stone::Black));
}

// =============================================================================
// Registry
// =============================================================================

#[test]
fn test_factory_builds_standard() {
    let rules = create_rules(RuleType::Standard);
    let state = GameState::new(3).unwrap();
    assert!(rules.is_valid_move(&state, &Move::new(Position::new(2, 2), Stone::Black)));
    assert!(!rules.is_valid_move(&state, &Move::new(Position::new(2, 2), Stone::White)));
}
