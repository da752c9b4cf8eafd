use std::collections::VecDeque;

use tracing::error;
use util::{bitboard::Bitboard, error::ChessError, square::Square};

use crate::movegen::knight_neighbors;

/// A discovered square and the node that discovered it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchNode {
    pub square: Square,
    /// Index into the owning [`SearchTree`], `None` for the start node.
    pub parent: Option<usize>,
    pub depth: u8,
}

/// Node table built by one search. A node's parent always sits at a lower
/// index and exactly one depth shallower.
#[derive(Debug, Clone, Default)]
pub struct SearchTree {
    nodes: Vec<SearchNode>,
    expanded: usize,
}

impl SearchTree {
    fn push(&mut self, square: Square, parent: Option<usize>) -> usize {
        let depth = match parent {
            Some(p) => self.nodes[p].depth + 1,
            None => 0,
        };
        self.nodes.push(SearchNode {
            square,
            parent,
            depth,
        });
        self.nodes.len() - 1
    }

    pub fn node(&self, idx: usize) -> Option<&SearchNode> {
        self.nodes.get(idx)
    }

    pub fn nodes(&self) -> &[SearchNode] {
        &self.nodes
    }

    pub fn depth(&self, idx: usize) -> Option<u8> {
        self.node(idx).map(|n| n.depth)
    }

    /// Number of discovered squares.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Squares from the root down to `terminal`. Empty if `terminal` is not in the tree.
    pub fn reconstruct(&self, terminal: usize) -> Vec<Square> {
        let mut path = Vec::with_capacity(self.depth(terminal).map_or(0, |d| d as usize + 1));
        let mut current = Some(terminal);
        while let Some(node) = current.and_then(|idx| self.node(idx)) {
            path.push(node.square);
            current = node.parent;
        }
        path.reverse();
        path
    }
}

/// Breadth first search over the implicit knight graph. Returns the search
/// tree and the index of the node holding `end`.
pub fn bfs(start: Square, end: Square) -> Result<(SearchTree, usize), ChessError> {
    for sq in [start, end] {
        if !sq.on_board() {
            return Err(ChessError::OutOfBounds(sq));
        }
    }
    search_from(start, end, Bitboard::EMPTY)
}

fn search_from(
    start: Square,
    end: Square,
    mut visited: Bitboard,
) -> Result<(SearchTree, usize), ChessError> {
    let mut tree = SearchTree::default();
    let mut frontier = VecDeque::with_capacity(Square::ALL.len());

    visited.insert(start);
    frontier.push_back(tree.push(start, None));

    while let Some(current) = frontier.pop_front() {
        let square = tree.nodes[current].square;
        if square == end {
            return Ok((tree, current));
        }

        tree.expanded += 1;
        for next in knight_neighbors(&square, visited) {
            visited.insert(next);
            frontier.push_back(tree.push(next, Some(current)));
        }
    }

    error!(
        %start,
        %end,
        discovered = tree.len(),
        "knight search exhausted its frontier"
    );
    Err(ChessError::ExhaustedSearch { start, end })
}
