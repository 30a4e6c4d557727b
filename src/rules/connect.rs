//! Edge-to-edge connectivity search.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use crate::core::{Board, Edge, Stone};

/// The pair of edges `player` must join: Black top→bottom, White left→right.
///
/// `None` for `Empty`.
#[must_use]
pub fn goal_edges(player: Stone) -> Option<(Edge, Edge)> {
    match player {
        Stone::Black => Some((Edge::Top, Edge::Bottom)),
        Stone::White => Some((Edge::Left, Edge::Right)),
        Stone::Empty => None,
    }
}

/// Breadth-first search through orthogonally adjacent `stone` cells.
///
/// Seeds the frontier with every `stone` on `from` and succeeds as soon as
/// a dequeued cell lies on `to`. Diagonals do not connect.
#[must_use]
pub fn connects(board: &Board, stone: Stone, from: Edge, to: Edge) -> bool {
    let mut visited = FxHashSet::default();
    let mut frontier = VecDeque::new();

    for pos in board.edge(from) {
        if board.stone(pos) == stone && visited.insert(pos) {
            frontier.push_back(pos);
        }
    }

    while let Some(current) = frontier.pop_front() {
        if board.is_on_edge(current, to) {
            return true;
        }
        for next in current.orthogonal_neighbors() {
            if board.get(next) == Some(stone) && visited.insert(next) {
                frontier.push_back(next);
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Position;

    fn board_with(size: usize, stones: &[(i32, i32)], stone: Stone) -> Board {
        let mut board = Board::new(size).unwrap();
        for &pos in stones {
            board.set_stone(Position::from(pos), stone);
        }
        board
    }

    #[test]
    fn test_goal_edges() {
        assert_eq!(goal_edges(Stone::Black), Some((Edge::Top, Edge::Bottom)));
        assert_eq!(goal_edges(Stone::White), Some((Edge::Left, Edge::Right)));
        assert_eq!(goal_edges(Stone::Empty), None);
    }

    #[test]
    fn test_straight_column() {
        let board = board_with(3, &[(0, 1), (1, 1), (2, 1)], Stone::Black);
        assert!(connects(&board, Stone::Black, Edge::Top, Edge::Bottom));
        assert!(!connects(&board, Stone::Black, Edge::Left, Edge::Right));
    }

    #[test]
    fn test_winding_path() {
        let board = board_with(
            4,
            &[(1, 0), (1, 1), (2, 1), (3, 1), (3, 2), (2, 2), (2, 3)],
            Stone::White,
        );
        assert!(connects(&board, Stone::White, Edge::Left, Edge::Right));
    }

    #[test]
    fn test_diagonal_does_not_connect() {
        let board = board_with(3, &[(0, 0), (1, 1), (2, 2)], Stone::Black);
        assert!(!connects(&board, Stone::Black, Edge::Top, Edge::Bottom));
    }

    #[test]
    fn test_gap_blocks() {
        let mut board = board_with(3, &[(0, 0), (2, 0)], Stone::Black);
        board.set_stone(Position::new(1, 0), Stone::White);
        assert!(!connects(&board, Stone::Black, Edge::Top, Edge::Bottom));
    }

    #[test]
    fn test_single_cell_board() {
        let board = board_with(1, &[(0, 0)], Stone::Black);
        assert!(connects(&board, Stone::Black, Edge::Top, Edge::Bottom));
        assert!(!connects(&board, Stone::White, Edge::Left, Edge::Right));
    }

    #[test]
    fn test_empty_board() {
        let board = Board::new(5).unwrap();
        assert!(!connects(&board, Stone::Black, Edge::Top, Edge::Bottom));
        assert!(!connects(&board, Stone::White, Edge::Left, Edge::Right));
    }
}
