use std::fmt;

use tracing::debug;

use crate::{
    search::{search, Strategy},
    sequence::Priority,
    solution::Solution,
    specification::Specification,
};

/// A priority tier was discarded because no path satisfied every sequence.
///
/// This is informational: the solve carried on with the remaining sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relaxation {
    pub discarded_priority: Priority,
}

impl fmt::Display for Relaxation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Could not find a solution that satisfies all upload sequences. \
             Discarding all sequences with priority <= {}.",
            self.discarded_priority
        )
    }
}

/// Everything a solve produced.
#[derive(Debug, Clone)]
pub struct Outcome<T> {
    /// The paths found; empty if even the highest tier could not be satisfied.
    pub solutions: Vec<Solution<T>>,
    /// The tiers discarded along the way, lowest first.
    pub relaxations: Vec<Relaxation>,
    /// The specification the solutions were found for. This differs from the
    /// input exactly when `relaxations` is non-empty.
    pub specification: Specification<T>,
}

impl<T> Outcome<T> {
    pub fn is_solved(&self) -> bool {
        !self.solutions.is_empty()
    }
}

/// Solve the breach, discarding the lowest priority tier each time no path
/// satisfies every remaining sequence.
///
/// Stops at the first attempt with any solution, or when a single tier is left.
pub fn solve<T>(specification: &Specification<T>, strategy: Strategy) -> Outcome<T>
where
    T: Clone + PartialEq,
{
    let mut specification = specification.clone();
    let mut relaxations = Vec::new();

    loop {
        let solutions = search(&specification, strategy);
        if !solutions.is_empty() {
            return Outcome {
                solutions,
                relaxations,
                specification,
            };
        }

        match specification.relax() {
            Some((discarded_priority, relaxed)) => {
                debug!(
                    discarded_priority,
                    remaining = relaxed.sequences().len(),
                    "no solution, relaxing"
                );
                relaxations.push(Relaxation { discarded_priority });
                specification = relaxed;
            }
            None => {
                return Outcome {
                    solutions,
                    relaxations,
                    specification,
                }
            }
        }
    }
}
