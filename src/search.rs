use std::collections::HashSet;

use tracing::{debug, trace};

use crate::{
    grid::Grid,
    matrix::{Active, Position},
    sequence::Sequence,
    solution::{Solution, Step},
    specification::Specification,
};

/// How much of the search space to explore.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Stop at the first complete path, whatever its length.
    #[default]
    FirstSolution,
    /// Find every complete path, shortest first.
    AllSolutions,
}

/// One branch of the search.
#[derive(Debug, Clone)]
struct SearchState {
    // picks in order; `visited` holds the same positions for membership tests
    path: Vec<Position>,
    visited: HashSet<Position>,
    // unmatched trailing items per sequence
    remaining: Vec<usize>,
    active: Active,
}

impl SearchState {
    /// The state before any pick has been made.
    fn empty<T>(sequences: &[Sequence<T>]) -> Self {
        Self {
            path: Vec::new(),
            visited: HashSet::new(),
            remaining: sequences.iter().map(Sequence::len).collect(),
            active: Active::default(),
        }
    }

    fn current(&self) -> Option<Position> {
        self.path.last().copied()
    }

    fn is_complete(&self) -> bool {
        self.remaining.iter().all(|&remaining| remaining == 0)
    }

    /// `true` if the picks left in the buffer could still complete every sequence.
    fn can_complete(&self, buffer_size: usize) -> bool {
        let slack = buffer_size.saturating_sub(self.path.len());
        let needed = self.remaining.iter().copied().max().unwrap_or(0);
        slack >= needed
    }

    /// The state after picking `value` at `position` from the active line.
    fn child<T>(&self, position: Position, value: &T, sequences: &[Sequence<T>]) -> Self
    where
        T: PartialEq,
    {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(position);

        let mut visited = self.visited.clone();
        visited.insert(position);

        let remaining = sequences
            .iter()
            .zip(&self.remaining)
            .map(|(sequence, &remaining)| sequence.advance(remaining, value))
            .collect();

        Self {
            path,
            visited,
            remaining,
            active: self.active.after(position),
        }
    }

    fn solution<T>(&self, grid: &Grid<T>) -> Solution<T>
    where
        T: Clone,
    {
        Solution::new(
            self.path
                .iter()
                .map(|&Position { row, column }| {
                    Step::new(grid[(row, column)].clone(), row, column)
                })
                .collect(),
        )
    }
}

/// Find paths through the grid which contain every sequence of the specification.
///
/// The search is depth-first and exact. With [`Strategy::FirstSolution`] the
/// result holds at most one path; with [`Strategy::AllSolutions`] it holds every
/// path, sorted by length with ties in discovery order. An empty result means no
/// path fits in the buffer.
pub fn search<T>(specification: &Specification<T>, strategy: Strategy) -> Vec<Solution<T>>
where
    T: Clone + PartialEq,
{
    let grid = specification.grid();
    let sequences = specification.sequences();
    let buffer_size = specification.buffer_size();

    debug!(
        size = grid.size(),
        sequences = sequences.len(),
        buffer_size,
        ?strategy,
        "starting search"
    );

    // the first pick always comes from the first row
    let root = SearchState::empty(sequences);
    let mut stack: Vec<SearchState> = grid
        .row(0)
        .map(|(column, value)| root.child(Position::new(0, column), value, sequences))
        .collect();

    let mut solutions = Vec::new();
    let mut explored = 0_usize;

    while let Some(state) = stack.pop() {
        explored += 1;

        if state.is_complete() {
            let solution = state.solution(grid);
            trace!(len = solution.len(), "found solution");
            solutions.push(solution);
            if strategy == Strategy::FirstSolution {
                break;
            }
            continue;
        }

        if !state.can_complete(buffer_size) {
            continue;
        }

        let Some(current) = state.current() else {
            continue;
        };

        match state.active {
            Active::Row(row) => {
                for (column, value) in grid.row(row) {
                    let position = Position::new(row, column);
                    if position != current && !state.visited.contains(&position) {
                        stack.push(state.child(position, value, sequences));
                    }
                }
            }
            Active::Column(column) => {
                for (row, value) in grid.column(column) {
                    let position = Position::new(row, column);
                    if position != current && !state.visited.contains(&position) {
                        stack.push(state.child(position, value, sequences));
                    }
                }
            }
        }
    }

    // stable, so equal lengths keep discovery order
    solutions.sort_by_key(Solution::len);

    debug!(explored, solutions = solutions.len(), "search finished");
    solutions
}
