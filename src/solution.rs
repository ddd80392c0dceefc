use crate::{
    matrix::{self, Board, Position},
    specification::Specification,
};

/// A single step in the solution path: the value it adds to the buffer, and
/// the cell it was taken from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Step<T> {
    pub value: T,
    pub row: usize,
    pub column: usize,
}

impl<T> Step<T> {
    pub fn new(value: T, row: usize, column: usize) -> Self {
        Self { value, row, column }
    }

    pub fn position(&self) -> Position {
        Position::new(self.row, self.column)
    }
}

/// A path through the grid, in the order its cells are picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution<T> {
    steps: Vec<Step<T>>,
}

impl<T> Solution<T> {
    pub fn new(steps: Vec<Step<T>>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[Step<T>] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The buffer contents this path produces.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.steps.iter().map(|step| &step.value)
    }

    /// The step at `position`, with its index along the path.
    pub fn step_at(&self, position: Position) -> Option<(usize, &Step<T>)> {
        self.steps
            .iter()
            .enumerate()
            .find(|(_, step)| step.position() == position)
    }
}

impl<T> Solution<T>
where
    T: PartialEq,
{
    /// Check this path against the rules of the game and the given specification.
    ///
    /// The path must start in the first row, alternate between columns and rows,
    /// never revisit a cell, report the grid's own values, fit in the buffer, and
    /// contain every sequence of `specification` as a contiguous run.
    pub fn verify(&self, specification: &Specification<T>) -> Result<(), Error> {
        if self.len() > specification.buffer_size() {
            return Err(Error::TooLong {
                len: self.len(),
                buffer_size: specification.buffer_size(),
            });
        }

        let mut board = Board::new(specification.grid());
        for step in &self.steps {
            board.select_value(step.position(), &step.value)?;
        }

        for (index, sequence) in specification.sequences().iter().enumerate() {
            if !sequence.is_matched(board.selected_values()) {
                return Err(Error::Unsatisfied { index });
            }
        }

        Ok(())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Rule(#[from] matrix::Error),
    #[error("the path has {len} steps but the buffer only holds {buffer_size}")]
    TooLong { len: usize, buffer_size: usize },
    #[error("upload sequence {index} does not appear in the path")]
    Unsatisfied { index: usize },
}
