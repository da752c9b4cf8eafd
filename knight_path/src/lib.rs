pub mod cli;
pub mod display;
pub mod movegen;
pub mod search;

pub use search::{distance, shortest_knight_path, KnightPath};
pub use util::{bitboard::Bitboard, error::ChessError, square::Square};
