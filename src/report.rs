use std::{fmt, io, time::Duration};

use crate::{grid::Grid, matrix::Position, solution::Solution, solve::Outcome};

/// Human-readable rendering of one solution: its buffer contents, its path, and
/// the grid with each picked cell marked by its 1-based step number.
pub struct Report<'a, T> {
    pub grid: &'a Grid<T>,
    pub solution: &'a Solution<T>,
}

impl<'a, T> Report<'a, T> {
    pub fn new(grid: &'a Grid<T>, solution: &'a Solution<T>) -> Self {
        Self { grid, solution }
    }
}

impl<'a, T> fmt::Display for Report<'a, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Solution:")?;
        for value in self.solution.values() {
            write!(f, " {value}")?;
        }
        writeln!(f)?;

        write!(f, "Path: ")?;
        for (idx, step) in self.solution.steps().iter().enumerate() {
            if idx > 0 {
                write!(f, " > ")?;
            }
            write!(f, "({} {})", step.row, step.column)?;
        }
        writeln!(f)?;

        for (row, values) in self.grid.rows().enumerate() {
            for (column, value) in values.iter().enumerate() {
                match self.solution.step_at(Position::new(row, column)) {
                    Some((idx, _)) => {
                        let marker = format!("({})", idx + 1);
                        write!(f, "{value} {marker:<6}")?;
                    }
                    None => write!(f, "{:<9}", value.to_string())?,
                }
            }
            writeln!(f)?;
        }
        writeln!(f)
    }
}

/// Write the full result of a solve: a warning per discarded tier, a report for
/// each of the first `max_printed` solutions, and a closing summary line.
pub fn write_outcome<W, T>(
    out: &mut W,
    outcome: &Outcome<T>,
    max_printed: usize,
    elapsed: Duration,
) -> io::Result<()>
where
    W: io::Write,
    T: fmt::Display,
{
    for relaxation in &outcome.relaxations {
        writeln!(out, "Warning: {relaxation}")?;
    }

    let grid = outcome.specification.grid();
    for solution in outcome.solutions.iter().take(max_printed) {
        write!(out, "{}", Report::new(grid, solution))?;
    }

    writeln!(
        out,
        "Found {} solutions in {:.3} seconds",
        outcome.solutions.len(),
        elapsed.as_secs_f64()
    )
}
