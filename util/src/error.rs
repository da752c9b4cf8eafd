use crate::square::Square;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ChessError {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("square {0} is off the board, both coordinates must be within 1..=8")]
    OutOfBounds(Square),

    /// The frontier ran dry before the target was dequeued. On a full board
    /// this only happens if the visited set was stale.
    #[error("search from {start} to {end} exhausted the frontier without reaching the target")]
    ExhaustedSearch { start: Square, end: Square },
}
