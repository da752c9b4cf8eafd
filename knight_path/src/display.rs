use clap::ValueEnum;
use serde::Serialize;
use util::{bitboard::Bitboard, square::Square};

use crate::search::KnightPath;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    /// Text with squares as `a1`..`h8`
    Algebraic,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathReport {
    pub from: Square,
    pub to: Square,
    pub moves: usize,
    pub path: Vec<Square>,
}

impl PathReport {
    pub fn new(from: Square, to: Square, path: &KnightPath) -> Self {
        Self {
            from,
            to,
            moves: path.moves(),
            path: path.squares.clone(),
        }
    }

    pub fn to_text(&self) -> String {
        self.render(|sq| sq.to_string())
    }

    pub fn to_algebraic(&self) -> String {
        self.render(|sq| sq.algebraic().unwrap_or_else(|| sq.to_string()))
    }

    fn render(&self, square: impl Fn(&Square) -> String) -> String {
        let squares = self.path.iter().map(square).collect::<Vec<_>>().join(" -> ");
        let plural = if self.moves == 1 { "" } else { "s" };
        format!("{} move{plural}: {squares}", self.moves)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovesReport {
    pub square: Square,
    pub moves: Vec<Square>,
}

impl MovesReport {
    pub fn new(square: Square, moves: Bitboard) -> Self {
        Self {
            square,
            moves: moves.collect(),
        }
    }

    pub fn to_text(&self) -> String {
        format!(
            "Moves: {}",
            self.moves.iter().fold(String::new(), |mut acc, sq| {
                if !acc.is_empty() {
                    acc += ", ";
                }
                acc += &sq.to_string();
                acc
            })
        )
    }
}
