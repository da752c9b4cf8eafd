mod knight;

pub use knight::{is_knight_move, knight_moves, knight_neighbors, KNIGHT_JUMPS};
