pub mod bitboard;
pub mod error;
pub mod square;
