mod grid;
mod matrix;
pub mod parse;
mod report;
mod search;
mod sequence;
mod solution;
mod solve;
pub mod specification;

pub use grid::{Grid, ShapeError};
pub use matrix::{Active, Board, Error as RuleError, Position};
pub use parse::Code;
pub use report::{write_outcome, Report};
pub use search::{search, Strategy};
pub use sequence::{Priority, Sequence};
pub use solution::{Error as VerifyError, Solution, Step};
pub use solve::{solve, Outcome, Relaxation};
pub use specification::{Error as SpecificationError, Specification};
