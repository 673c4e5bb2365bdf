//! Crossword filling as a constraint satisfaction problem.
//!
//! A [`Puzzle`] derives word slots from a [`Grid`] and indexes where they
//! cross. Solving enforces node consistency, then arc consistency (AC-3), then
//! runs a backtracking search over what is left.

pub mod config;
pub mod consistency;
pub mod crossword;
pub mod domain;
pub mod error;
pub mod fill;
pub mod order;
pub mod parse;
pub mod puzzle;
pub mod render;
pub mod solve;

pub use crate::config::SolverConfig;
pub use crate::crossword::{Direction, Grid, Slot};
pub use crate::domain::Domains;
pub use crate::error::PuzzleError;
pub use crate::fill::{assignment_complete, consistent, Assignment};
pub use crate::puzzle::Puzzle;
pub use crate::render::FilledGrid;
pub use crate::solve::Solver;

/// Solves `grid` with `words` using the plain search order. Malformed input
/// is the only error; an unsatisfiable puzzle gives `Ok(None)`.
pub fn solve(grid: Grid, words: Vec<String>) -> Result<Option<Assignment>, PuzzleError> {
    let puzzle = Puzzle::new(grid, words)?;
    Ok(Solver::default().solve(&puzzle))
}

#[cfg(test)]
mod tests {
    use crate::{parse::parse_structure, solve, Direction, PuzzleError, Slot};

    #[test]
    fn solve_works() {
        let grid = parse_structure("__\n__");
        let words = vec![
            String::from("AB"),
            String::from("CD"),
            String::from("AC"),
            String::from("BD"),
        ];

        let assignment = solve(grid, words).unwrap().unwrap();

        assert_eq!(Some("AB"), assignment.get(&Slot::new(0, 0, 2, Direction::Across)));
        assert_eq!(Some("CD"), assignment.get(&Slot::new(1, 0, 2, Direction::Across)));
        assert_eq!(Some("AC"), assignment.get(&Slot::new(0, 0, 2, Direction::Down)));
        assert_eq!(Some("BD"), assignment.get(&Slot::new(0, 1, 2, Direction::Down)));
    }

    #[test]
    fn solve_rejects_malformed_words() {
        let grid = parse_structure("__");

        assert_eq!(
            Err(PuzzleError::EmptyWord),
            solve(grid.clone(), vec![String::new()])
        );
        assert_eq!(Ok(None), solve(grid, vec![String::from("ABC")]));
    }
}
