use util::{bitboard::Bitboard, square::Square};

/// `(d_file, d_rank)` jumps. Neighbours are reported in this order, which
/// decides which of several shortest paths gets returned.
pub const KNIGHT_JUMPS: [(i32, i32); 8] = [
    (1, 2),
    (1, -2),
    (2, 1),
    (2, -1),
    (-1, 2),
    (-1, -2),
    (-2, 1),
    (-2, -1),
];

/// On-board knight destinations from `sq` that are not yet in `visited`.
///
/// `sq` itself does not have to be on the board.
pub fn knight_neighbors(sq: &Square, visited: Bitboard) -> impl Iterator<Item = Square> {
    let sq = *sq;
    KNIGHT_JUMPS
        .into_iter()
        .map(move |delta| sq.apply_delta(delta))
        .filter(move |to| to.on_board() && !visited.has_sq(*to))
}

pub fn knight_moves(sq: &Square) -> Bitboard {
    knight_neighbors(sq, Bitboard::EMPTY).collect()
}

pub fn is_knight_move(from: &Square, to: &Square) -> bool {
    let d_file = to.file as i64 - from.file as i64;
    let d_rank = to.rank as i64 - from.rank as i64;
    KNIGHT_JUMPS
        .iter()
        .any(|&(f, r)| f as i64 == d_file && r as i64 == d_rank)
}
