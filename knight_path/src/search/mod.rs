mod batch;
mod bfs;

use serde::Serialize;
use tracing::debug;
use util::{error::ChessError, square::Square};

pub use batch::batch_paths;
pub use bfs::{bfs, SearchNode, SearchTree};

/// A shortest knight path together with how much work the search did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KnightPath {
    pub squares: Vec<Square>,
    /// Nodes popped from the frontier and expanded before the target was reached.
    pub expanded: usize,
}

impl KnightPath {
    pub fn moves(&self) -> usize {
        self.squares.len().saturating_sub(1)
    }
}

/// Shortest sequence of knight moves from `start` to `end`, both inclusive.
///
/// Every call owns its own visited set and frontier, so calls are
/// independent of each other and safe to run concurrently.
pub fn shortest_knight_path(start: Square, end: Square) -> Result<KnightPath, ChessError> {
    let (tree, terminal) = bfs(start, end)?;
    let squares = tree.reconstruct(terminal);
    debug!(
        %start,
        %end,
        moves = squares.len() - 1,
        expanded = tree.expanded(),
        discovered = tree.len(),
        "knight search finished"
    );
    Ok(KnightPath {
        squares,
        expanded: tree.expanded(),
    })
}

pub fn distance(start: Square, end: Square) -> Result<usize, ChessError> {
    let (tree, terminal) = bfs(start, end)?;
    Ok(tree.depth(terminal).map_or(0, usize::from))
}

#[cfg(test)]
mod tests {
    use util::{error::ChessError, square::Square};

    use super::{distance, shortest_knight_path};
    use crate::movegen::{is_knight_move, KNIGHT_JUMPS};

    /// All-pairs knight distances by Floyd-Warshall, independent of the BFS.
    fn distance_table() -> Vec<Vec<u32>> {
        const INF: u32 = u32::MAX / 2;
        let mut dist = vec![vec![INF; 64]; 64];
        for (i, sq) in Square::ALL.iter().enumerate() {
            dist[i][i] = 0;
            for (d_file, d_rank) in KNIGHT_JUMPS {
                let to = Square::new(sq.file + d_file, sq.rank + d_rank);
                if let Some(j) = to.idx() {
                    dist[i][j] = 1;
                }
            }
        }
        for k in 0..64 {
            for i in 0..64 {
                for j in 0..64 {
                    let via = dist[i][k] + dist[k][j];
                    if via < dist[i][j] {
                        dist[i][j] = via;
                    }
                }
            }
        }
        dist
    }

    fn assert_valid_path(start: Square, end: Square, squares: &[Square]) {
        assert_eq!(squares.first(), Some(&start));
        assert_eq!(squares.last(), Some(&end));
        for pair in squares.windows(2) {
            assert!(
                is_knight_move(&pair[0], &pair[1]),
                "{} -> {} is not a knight move",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn all_pairs_are_minimal() {
        let table = distance_table();
        for (i, start) in Square::ALL.iter().enumerate() {
            for (j, end) in Square::ALL.iter().enumerate() {
                let path = shortest_knight_path(*start, *end).expect("on-board squares");
                assert_valid_path(*start, *end, &path.squares);
                assert_eq!(
                    path.moves() as u32,
                    table[i][j],
                    "wrong distance from {start} to {end}"
                );
            }
        }
    }

    #[test]
    fn distance_is_symmetric() {
        for a in Square::ALL {
            for b in Square::ALL {
                assert_eq!(distance(a, b), distance(b, a));
            }
        }
    }

    #[test]
    fn neighbouring_file_takes_two_moves() {
        let start = Square::new(1, 3);
        let end = Square::new(1, 5);
        let path = shortest_knight_path(start, end).expect("on-board squares");
        assert_valid_path(start, end, &path.squares);
        assert_eq!(path.moves(), 2);
    }

    #[test]
    fn corner_to_corner() {
        assert_eq!(distance(Square::new(1, 1), Square::new(8, 8)), Ok(6));
    }

    #[test]
    fn corner_to_diagonal_neighbour() {
        assert_eq!(distance(Square::new(1, 1), Square::new(2, 2)), Ok(4));
    }

    #[test]
    fn same_square() {
        let sq = Square::new(4, 4);
        let path = shortest_knight_path(sq, sq).expect("on-board square");
        assert_eq!(path.squares, vec![sq]);
        assert_eq!(path.moves(), 0);
    }

    #[test]
    fn repeated_calls_are_independent() {
        let first = shortest_knight_path(Square::new(1, 3), Square::new(1, 5));
        // a leaked visited set would leave this one unreachable
        let second = shortest_knight_path(Square::new(1, 3), Square::new(1, 5));
        assert_eq!(first, second);
        for _ in 0..3 {
            assert_eq!(distance(Square::new(1, 1), Square::new(8, 8)), Ok(6));
        }
    }

    #[test]
    fn ties_follow_jump_order() {
        // (2,5) is expanded first but cannot reach (1,5), (3,4) is the first that can
        let path = shortest_knight_path(Square::new(1, 3), Square::new(1, 5))
            .expect("on-board squares");
        assert_eq!(
            path.squares,
            vec![Square::new(1, 3), Square::new(3, 4), Square::new(1, 5)]
        );
    }

    #[test]
    fn out_of_bounds_is_reported() {
        assert_eq!(
            shortest_knight_path(Square::new(9, 1), Square::new(1, 1)),
            Err(ChessError::OutOfBounds(Square::new(9, 1)))
        );
        assert_eq!(
            distance(Square::new(1, 1), Square::new(1, -1)),
            Err(ChessError::OutOfBounds(Square::new(1, -1)))
        );
        let inputs = [
            ("200,1", Square::new(200, 1)),
            ("1,-300", Square::new(1, -300)),
        ];
        for (input, parsed) in inputs {
            let sq = Square::from_str(input).expect("integer coordinates parse");
            assert_eq!(
                shortest_knight_path(sq, Square::new(1, 1)),
                Err(ChessError::OutOfBounds(parsed))
            );
        }
    }
}
