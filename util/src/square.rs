use std::{fmt::Display, num::IntErrorKind};

use serde::{Deserialize, Serialize};

use crate::{bitboard::Bitboard, error::ChessError};

pub const BOARD_SIZE: i32 = 8;

/// A board cell as 1-based `(file, rank)` coordinates.
///
/// Squares off the board are representable so that offsets can be applied
/// freely; whether a square is playable is answered by [`Square::on_board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub file: i32,
    pub rank: i32,
}

const fn generate_all() -> [Square; 64] {
    let mut all = [Square::new(0, 0); 64];
    let mut i = 0;
    while i < all.len() {
        all[i] = Square::new((i % 8) as i32 + 1, (i / 8) as i32 + 1);
        i += 1;
    }
    all
}

impl Square {
    pub const ALL: [Self; 64] = generate_all();

    pub const fn new(file: i32, rank: i32) -> Self {
        Self { file, rank }
    }

    pub const fn on_board(&self) -> bool {
        self.file >= 1 && self.file <= BOARD_SIZE && self.rank >= 1 && self.rank <= BOARD_SIZE
    }

    /// Parses either algebraic notation (`b3`) or a coordinate pair
    /// (`2,3`, `(2, 3)`, `[2, 3]`, `2 3`).
    ///
    /// Coordinate pairs are not bounds checked here. Integers beyond the
    /// `i32` range saturate, which keeps them off the board.
    pub fn from_str(str: &str) -> Result<Self, ChessError> {
        let str = str.trim();
        match str.chars().next() {
            Some(c) if c.is_ascii_alphabetic() => Self::from_algebraic(str),
            Some(_) => Self::from_coords(str),
            None => Err(ChessError::Parse(
                "an empty string cannot be used to construct a square".to_owned(),
            )),
        }
    }

    fn from_algebraic(str: &str) -> Result<Self, ChessError> {
        let mut chars = str.chars();

        let (c1, c2) = match (chars.next(), chars.next(), chars.next()) {
            (Some(c1), Some(c2), None) => (c1, c2),
            _ => {
                return Err(ChessError::Parse(format!(
                    "'{str}' cannot be used to construct a square"
                )))
            }
        };

        let file = match c1.to_ascii_lowercase() {
            f @ 'a'..='h' => (f as u8 - b'a') as i32 + 1,
            _ => {
                return Err(ChessError::Parse(format!(
                    "Char '{c1}' cannot be used to create a file"
                )))
            }
        };

        let rank = match c2 {
            r @ '1'..='8' => (r as u8 - b'0') as i32,
            _ => {
                return Err(ChessError::Parse(format!(
                    "Char '{c2}' cannot be used to create a rank"
                )))
            }
        };

        Ok(Self::new(file, rank))
    }

    fn from_coords(str: &str) -> Result<Self, ChessError> {
        let inner = str
            .trim_start_matches(['(', '['])
            .trim_end_matches([')', ']']);
        let parts: Vec<&str> = inner
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();

        match parts.as_slice() {
            [file, rank] => {
                // integers too large for a coordinate still name an off-board square
                let parse = |part: &str| match part.parse::<i32>() {
                    Ok(v) => Ok(v),
                    Err(err) => match err.kind() {
                        IntErrorKind::PosOverflow => Ok(i32::MAX),
                        IntErrorKind::NegOverflow => Ok(i32::MIN),
                        _ => Err(ChessError::Parse(format!(
                            "'{part}' is not a valid coordinate"
                        ))),
                    },
                };
                Ok(Self::new(parse(*file)?, parse(*rank)?))
            }
            _ => Err(ChessError::Parse(format!(
                "'{str}' cannot be used to construct a square"
            ))),
        }
    }

    pub const fn apply_delta(&self, (d_file, d_rank): (i32, i32)) -> Self {
        Self::new(
            self.file.saturating_add(d_file),
            self.rank.saturating_add(d_rank),
        )
    }

    pub const fn idx(&self) -> Option<usize> {
        if self.on_board() {
            Some((self.rank - 1) as usize * 8 + (self.file - 1) as usize)
        } else {
            None
        }
    }

    pub const fn bitboard(&self) -> Bitboard {
        match self.idx() {
            Some(idx) => Bitboard(1 << idx),
            None => Bitboard::EMPTY,
        }
    }

    pub fn algebraic(&self) -> Option<String> {
        if !self.on_board() {
            return None;
        }
        let file = (b'a' + (self.file - 1) as u8) as char;
        Some(format!("{file}{}", self.rank))
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.file, self.rank)
    }
}

#[cfg(test)]
mod tests {
    use crate::{error::ChessError, square::Square};

    #[test]
    fn parse_algebraic() {
        assert_eq!(Square::from_str("a1"), Ok(Square::new(1, 1)));
        assert_eq!(Square::from_str("H8"), Ok(Square::new(8, 8)));
        assert_eq!(Square::from_str("c5"), Ok(Square::new(3, 5)));
        assert!(matches!(Square::from_str("i1"), Err(ChessError::Parse(_))));
        assert!(matches!(Square::from_str("a9"), Err(ChessError::Parse(_))));
        assert!(matches!(Square::from_str("a10"), Err(ChessError::Parse(_))));
    }

    #[test]
    fn parse_coords() {
        assert_eq!(Square::from_str("1,3"), Ok(Square::new(1, 3)));
        assert_eq!(Square::from_str("(4, 4)"), Ok(Square::new(4, 4)));
        assert_eq!(Square::from_str("[8, 1]"), Ok(Square::new(8, 1)));
        assert_eq!(Square::from_str("2 7"), Ok(Square::new(2, 7)));
        // bounds are the search's concern, not the parser's
        assert_eq!(Square::from_str("0,9"), Ok(Square::new(0, 9)));
        assert_eq!(Square::from_str("200,1"), Ok(Square::new(200, 1)));
        assert_eq!(Square::from_str("1,-300"), Ok(Square::new(1, -300)));
        assert_eq!(
            Square::from_str("99999999999,1"),
            Ok(Square::new(i32::MAX, 1))
        );
        assert_eq!(
            Square::from_str("1,-99999999999"),
            Ok(Square::new(1, i32::MIN))
        );
        assert!(matches!(Square::from_str("1,x"), Err(ChessError::Parse(_))));
        assert!(matches!(Square::from_str("1,2,3"), Err(ChessError::Parse(_))));
        assert!(matches!(Square::from_str(""), Err(ChessError::Parse(_))));
    }

    #[test]
    fn bounds_and_indices() {
        assert!(Square::new(1, 1).on_board());
        assert!(Square::new(8, 8).on_board());
        assert!(!Square::new(0, 4).on_board());
        assert!(!Square::new(4, 9).on_board());
        assert_eq!(Square::new(1, 1).idx(), Some(0));
        assert_eq!(Square::new(8, 8).idx(), Some(63));
        assert_eq!(Square::new(-1, 3).idx(), None);
        assert!(Square::new(9, 9).bitboard().is_empty());

        for (i, sq) in Square::ALL.iter().enumerate() {
            assert_eq!(sq.idx(), Some(i));
        }
    }

    #[test]
    fn rendering() {
        assert_eq!(Square::new(1, 3).to_string(), "[1, 3]");
        assert_eq!(Square::new(1, 3).algebraic().as_deref(), Some("a3"));
        assert_eq!(Square::new(8, 8).algebraic().as_deref(), Some("h8"));
        assert_eq!(Square::new(0, 8).algebraic(), None);
    }

    #[test]
    fn delta_saturates() {
        assert_eq!(Square::new(1, 1).apply_delta((-2, 1)), Square::new(-1, 2));
        assert_eq!(
            Square::new(i32::MAX, 1).apply_delta((2, 1)),
            Square::new(i32::MAX, 2)
        );
    }
}
