//! Reading breach descriptions from their text form.
//!
//! The format is line based:
//!
//! ```text
//! 4            buffer size
//! 2            matrix size
//! 1            number of upload sequences
//! BD 55        matrix rows, one per line
//! E9 1C
//! 55 1C        upload sequences, one per line
//! ```
//!
//! Upload sequences are given increasing priority in the order they appear, so
//! the first one listed is the first one given up on.

use std::{num::ParseIntError, str::FromStr};

use crate::{
    grid::{Grid, ShapeError},
    sequence::{Priority, Sequence},
    specification::{self, Specification},
};

/// A single cell value, compared only for equality.
pub type Code = String;

impl FromStr for Specification<Code> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines().enumerate();
        let mut next_line = |what: &'static str| {
            lines
                .next()
                .map(|(idx, line)| (idx + 1, line))
                .ok_or(Error::MissingLine(what))
        };

        let mut header = |what: &'static str| -> Result<usize, Error> {
            let (line, text) = next_line(what)?;
            text.trim()
                .parse()
                .map_err(|source| Error::InvalidInteger { line, what, source })
        };
        let buffer_size = header("buffer size")?;
        let size = header("matrix size")?;
        let sequence_count = header("sequence count")?;

        let sequence_count = Priority::try_from(sequence_count)
            .map_err(|_| Error::TooManySequences(sequence_count))?;

        // sized by what is actually read, not by the header
        let mut rows = Vec::new();
        for _ in 0..size {
            let (_, text) = next_line("matrix row")?;
            rows.push(codes(text));
        }

        let mut sequences = Vec::new();
        for priority in 1..=sequence_count {
            let (_, text) = next_line("upload sequence")?;
            sequences.push(Sequence::new(codes(text), priority));
        }

        let grid = Grid::new(rows)?;
        Ok(Specification::new(grid, sequences, buffer_size)?)
    }
}

fn codes(line: &str) -> Vec<Code> {
    line.split_whitespace().map(str::to_owned).collect()
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("the input ended before the {0}")]
    MissingLine(&'static str),
    #[error("line {line}: the {what} is not a non-negative integer")]
    InvalidInteger {
        line: usize,
        what: &'static str,
        #[source]
        source: ParseIntError,
    },
    #[error("{0} upload sequences cannot each be given a priority")]
    TooManySequences(usize),
    #[error(transparent)]
    Shape(#[from] ShapeError),
    #[error(transparent)]
    Specification(#[from] specification::Error),
}
