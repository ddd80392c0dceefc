use std::ops::Index;

/// A square 2d grid of cell values.
///
/// For indexing operations on this grid, `(0, 0)` is the top left corner and
/// coordinates are given as `(row, column)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    size: usize,
    // row-major
    cells: Vec<T>,
}

impl<T> Grid<T>
where
    T: Clone,
{
    /// A grid of the given size with every cell set to `value`.
    pub fn filled(size: usize, value: T) -> Self {
        Grid {
            size,
            cells: vec![value; size * size],
        }
    }
}

impl<T> Grid<T> {
    /// Build a grid from its rows.
    ///
    /// Fails unless there is at least one row and every row is exactly as long
    /// as there are rows.
    pub fn new(rows: Vec<Vec<T>>) -> Result<Self, ShapeError> {
        let size = rows.len();
        if size == 0 {
            return Err(ShapeError::Empty);
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(ShapeError::RaggedRow {
                    row,
                    len: values.len(),
                    size,
                });
            }
            cells.extend(values);
        }

        Ok(Grid { size, cells })
    }

    /// The number of rows, which is also the number of columns.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get the internal index where the desired value is stored,
    /// or `None` if it is out of bounds.
    fn idx(&self, row: usize, column: usize) -> Option<usize> {
        (row < self.size && column < self.size).then_some((row * self.size) + column)
    }

    pub fn get(&self, row: usize, column: usize) -> Option<&T> {
        self.idx(row, column).map(|idx| &self.cells[idx])
    }

    pub fn get_mut(&mut self, row: usize, column: usize) -> Option<&mut T> {
        self.idx(row, column).map(|idx| &mut self.cells[idx])
    }

    /// Iterate over `(column, value)` for the given row.
    ///
    /// Yields nothing if the row is out of bounds.
    pub fn row(&self, row: usize) -> impl Iterator<Item = (usize, &T)> {
        let cells: &[T] = if row < self.size {
            &self.cells[row * self.size..(row + 1) * self.size]
        } else {
            &[]
        };
        cells.iter().enumerate()
    }

    /// Iterate over `(row, value)` for the given column.
    ///
    /// Yields nothing if the column is out of bounds.
    pub fn column(&self, column: usize) -> impl Iterator<Item = (usize, &T)> {
        let skip = if column < self.size { column } else { self.cells.len() };
        self.cells
            .iter()
            .skip(skip)
            .step_by(self.size.max(1))
            .enumerate()
    }

    /// Iterate over the rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.size.max(1))
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (row, column): (usize, usize)) -> &Self::Output {
        match self.get(row, column) {
            Some(value) => value,
            None => panic!(
                "the point `({row}, {column})` is out of bounds for a grid of size {}",
                self.size
            ),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ShapeError {
    #[error("a grid must have at least one row")]
    Empty,
    #[error("row {row} has {len} cells but the grid has {size} rows")]
    RaggedRow { row: usize, len: usize, size: usize },
}
