use crate::grid::Grid;

/// The coordinates of a single cell, `(row, column)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// The line the next pick must come from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Active {
    Row(usize),
    Column(usize),
}

impl Default for Active {
    /// Every breach starts in the first row.
    fn default() -> Self {
        Self::Row(0)
    }
}

impl Active {
    /// `true` if `position` lies on the active line.
    pub fn contains(self, position: Position) -> bool {
        match self {
            Active::Row(row) => position.row == row,
            Active::Column(column) => position.column == column,
        }
    }

    /// The active line after picking `position`: a pick from a row opens its
    /// column, and a pick from a column opens its row.
    pub fn after(self, position: Position) -> Self {
        match self {
            Active::Row(_) => Active::Column(position.column),
            Active::Column(_) => Active::Row(position.row),
        }
    }

    /// Return the new active set if the specified point is valid, or `Error::NotActive` otherwise.
    pub fn toggle(self, position: Position) -> Result<Self, Error> {
        if self.contains(position) {
            Ok(self.after(position))
        } else {
            Err(Error::NotActive {
                row: position.row,
                column: position.column,
                active: self,
            })
        }
    }
}

/// A grid being picked from, one cell at a time, under the rules of the game.
pub struct Board<'a, T> {
    values: &'a Grid<T>,
    chosen: Grid<bool>,
    selections: Vec<Position>,
    active: Active,
}

impl<'a, T> Board<'a, T> {
    pub fn new(values: &'a Grid<T>) -> Self {
        Self {
            values,
            chosen: Grid::filled(values.size(), false),
            selections: Vec::new(),
            active: Active::default(),
        }
    }

    fn check_bounds(&self, position: Position) -> Result<(), Error> {
        let size = self.values.size();
        if position.row < size && position.column < size {
            Ok(())
        } else {
            Err(Error::OutOfBounds {
                row: position.row,
                column: position.column,
                size,
            })
        }
    }

    /// Select the point at the given coordinates if it is legal to do so.
    pub fn select(&mut self, position: Position) -> Result<(), Error> {
        self.check_bounds(position)?;
        if self.chosen[(position.row, position.column)] {
            return Err(Error::AlreadySelected {
                row: position.row,
                column: position.column,
            });
        }
        // the following line modifies self, so we can't fail past that point
        self.active = self.active.toggle(position)?;
        if let Some(chosen) = self.chosen.get_mut(position.row, position.column) {
            *chosen = true;
        }

        self.selections.push(position);

        Ok(())
    }

    /// Iterate over the selected values
    pub fn selected_values(&self) -> impl Iterator<Item = &'a T> + '_ {
        let values = self.values;
        self.selections
            .iter()
            .map(move |position| &values[(position.row, position.column)])
    }
}

impl<'a, T> Board<'a, T>
where
    T: PartialEq,
{
    /// Select a cell which is expected to hold `value`.
    pub fn select_value(&mut self, position: Position, value: &T) -> Result<(), Error> {
        self.check_bounds(position)?;
        if self.values[(position.row, position.column)] != *value {
            return Err(Error::ValueMismatch {
                row: position.row,
                column: position.column,
            });
        }
        self.select(position)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("the point `({row}, {column})` is out of bounds for a grid of size {size}")]
    OutOfBounds {
        row: usize,
        column: usize,
        size: usize,
    },
    #[error("the point `({row}, {column})` is not a member of the active set: {active:?}")]
    NotActive {
        row: usize,
        column: usize,
        active: Active,
    },
    #[error("the point `({row}, {column})` has already been selected")]
    AlreadySelected { row: usize, column: usize },
    #[error("the point `({row}, {column})` does not hold the expected value")]
    ValueMismatch { row: usize, column: usize },
}
