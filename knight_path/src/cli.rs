use std::io::Write;

use clap::{Parser, Subcommand};
use util::{error::ChessError, square::Square};

use crate::{
    display::{Format, MovesReport, PathReport},
    movegen::knight_moves,
    search::{batch_paths, shortest_knight_path},
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Squares are given as `b3`, `2,3` or `(2,3)`.
#[derive(Subcommand, Debug)]
#[clap(rename_all = "snake_case")]
pub enum Command {
    /// Shortest knight path between two squares
    Path {
        from: String,
        to: String,
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Legal knight destinations from a square
    Moves { sq: String },
    /// Many `<from>:<to>` queries at once
    Batch {
        pairs: Vec<String>,
        #[arg(short, long, default_value_t = 4)]
        thread_count: usize,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Chess(#[from] ChessError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("{0} of the batch queries failed")]
    Batch(usize),
}

pub fn handle_command(cmd: Command, out: &mut impl Write) -> Result<(), CliError> {
    match cmd {
        Command::Path { from, to, format } => {
            let from = Square::from_str(&from)?;
            let to = Square::from_str(&to)?;
            let path = shortest_knight_path(from, to)?;
            let report = PathReport::new(from, to, &path);
            match format {
                Format::Text => writeln!(out, "{}", report.to_text())?,
                Format::Algebraic => writeln!(out, "{}", report.to_algebraic())?,
                Format::Json => writeln!(out, "{}", serde_json::to_string(&report)?)?,
            }
        }
        Command::Moves { sq } => {
            let sq = Square::from_str(&sq)?;
            if !sq.on_board() {
                return Err(ChessError::OutOfBounds(sq).into());
            }
            writeln!(out, "{}", MovesReport::new(sq, knight_moves(&sq)).to_text())?;
        }
        Command::Batch {
            pairs,
            thread_count,
        } => {
            let parsed: Vec<_> = pairs.iter().map(|p| parse_pair(p)).collect();
            let valid: Vec<(Square, Square)> = parsed
                .iter()
                .filter_map(|p| p.as_ref().ok().copied())
                .collect();
            // one result per successfully parsed pair, in the same order
            let mut solved = batch_paths(&valid, thread_count).into_iter();
            let mut failed = 0;
            for (input, parsed) in pairs.iter().zip(parsed) {
                let res = parsed.and_then(|(from, to)| {
                    let path = solved.next().unwrap_or(Err(ChessError::ExhaustedSearch {
                        start: from,
                        end: to,
                    }))?;
                    Ok(PathReport::new(from, to, &path))
                });
                match res {
                    Ok(report) => writeln!(out, "{input}: {}", report.to_text())?,
                    Err(err) => {
                        failed += 1;
                        writeln!(out, "{input}: Error: {err}")?
                    }
                }
            }
            if failed > 0 {
                return Err(CliError::Batch(failed));
            }
        }
    }
    Ok(())
}

pub fn parse_pair(input: &str) -> Result<(Square, Square), ChessError> {
    match input.split_once(':') {
        Some((from, to)) => Ok((Square::from_str(from)?, Square::from_str(to)?)),
        None => Err(ChessError::Parse(format!(
            "'{input}' should be of form <from>:<to> eg. 'a1:h8'"
        ))),
    }
}
