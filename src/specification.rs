use std::collections::BTreeSet;

use crate::{
    grid::Grid,
    sequence::{Priority, Sequence},
};

/// The full description of one breach: where to look, what to find, and how
/// many picks the buffer allows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Specification<T> {
    grid: Grid<T>,
    sequences: Vec<Sequence<T>>,
    buffer_size: usize,
}

impl<T> Specification<T> {
    pub fn new(
        grid: Grid<T>,
        sequences: Vec<Sequence<T>>,
        buffer_size: usize,
    ) -> Result<Self, Error> {
        if sequences.is_empty() {
            return Err(Error::NoSequences);
        }
        if let Some(index) = sequences.iter().position(Sequence::is_empty) {
            return Err(Error::EmptySequence { index });
        }
        if buffer_size == 0 {
            return Err(Error::ZeroBuffer);
        }

        Ok(Self {
            grid,
            sequences,
            buffer_size,
        })
    }

    pub fn grid(&self) -> &Grid<T> {
        &self.grid
    }

    pub fn sequences(&self) -> &[Sequence<T>] {
        &self.sequences
    }

    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    /// The distinct priorities of the sequences, lowest first.
    pub fn priorities(&self) -> BTreeSet<Priority> {
        self.sequences.iter().map(Sequence::priority).collect()
    }
}

impl<T> Specification<T>
where
    T: Clone,
{
    /// Drop the lowest priority tier.
    ///
    /// Returns the discarded priority and a new specification holding the
    /// remaining sequences in their original order, or `None` when only one
    /// tier is left.
    pub fn relax(&self) -> Option<(Priority, Self)> {
        let priorities = self.priorities();
        if priorities.len() < 2 {
            return None;
        }
        let lowest = *priorities.first()?;

        let sequences = self
            .sequences
            .iter()
            .filter(|sequence| sequence.priority() > lowest)
            .cloned()
            .collect();

        let relaxed = Self {
            grid: self.grid.clone(),
            sequences,
            buffer_size: self.buffer_size,
        };
        Some((lowest, relaxed))
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("at least one upload sequence is required")]
    NoSequences,
    #[error("upload sequence {index} is empty")]
    EmptySequence { index: usize },
    #[error("the buffer size must be positive")]
    ZeroBuffer,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid<&'static str> {
        Grid::new(vec![vec!["BD", "55"], vec!["E9", "1C"]]).unwrap()
    }

    #[test]
    fn rejects_missing_sequences() {
        assert_eq!(
            Specification::new(grid(), Vec::new(), 2),
            Err(Error::NoSequences)
        );
    }

    #[test]
    fn rejects_empty_sequence() {
        let sequences = vec![Sequence::new(["55"], 1), Sequence::new([], 2)];
        assert_eq!(
            Specification::new(grid(), sequences, 2),
            Err(Error::EmptySequence { index: 1 })
        );
    }

    #[test]
    fn rejects_zero_buffer() {
        let sequences = vec![Sequence::new(["55"], 1)];
        assert_eq!(
            Specification::new(grid(), sequences, 0),
            Err(Error::ZeroBuffer)
        );
    }

    #[test]
    fn relax_drops_the_whole_lowest_tier() {
        let sequences = vec![
            Sequence::new(["55"], 2),
            Sequence::new(["BD"], 1),
            Sequence::new(["E9"], 3),
            Sequence::new(["1C"], 1),
        ];
        let specification = Specification::new(grid(), sequences, 2).unwrap();

        let (discarded, relaxed) = specification.relax().unwrap();
        assert_eq!(discarded, 1);
        assert_eq!(
            relaxed.sequences(),
            &[Sequence::new(["55"], 2), Sequence::new(["E9"], 3)]
        );
        assert_eq!(relaxed.grid(), specification.grid());
        assert_eq!(relaxed.buffer_size(), 2);
        // the original is untouched
        assert_eq!(specification.sequences().len(), 4);

        let (discarded, relaxed) = relaxed.relax().unwrap();
        assert_eq!(discarded, 2);
        assert_eq!(relaxed.sequences(), &[Sequence::new(["E9"], 3)]);

        assert!(relaxed.relax().is_none());
    }

    #[test]
    fn single_tier_cannot_relax() {
        let sequences = vec![Sequence::new(["55"], 4), Sequence::new(["BD"], 4)];
        let specification = Specification::new(grid(), sequences, 2).unwrap();
        assert!(specification.relax().is_none());
    }
}
