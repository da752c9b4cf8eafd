use std::{panic, thread};

use tracing::debug;
use util::{error::ChessError, square::Square};

use super::{shortest_knight_path, KnightPath};

/// Solves every `(start, end)` pair, spreading the pairs over up to
/// `thread_count` scoped threads. Results are returned in input order.
pub fn batch_paths(
    pairs: &[(Square, Square)],
    thread_count: usize,
) -> Vec<Result<KnightPath, ChessError>> {
    if pairs.is_empty() {
        return Vec::new();
    }
    let thread_count = thread_count.clamp(1, pairs.len());
    let chunk_size = pairs.len().div_ceil(thread_count);
    debug!(pairs = pairs.len(), thread_count, chunk_size, "starting batch");

    thread::scope(|s| {
        let threads: Vec<_> = pairs
            .chunks(chunk_size)
            .map(|chunk| {
                s.spawn(move || {
                    chunk
                        .iter()
                        .map(|&(start, end)| shortest_knight_path(start, end))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        threads
            .into_iter()
            .flat_map(|t| t.join().unwrap_or_else(|err| panic::resume_unwind(err)))
            .collect()
    })
}
