use crate::{fill::Assignment, puzzle::Puzzle};
use std::fmt;

/// Letters placed by `assignment`, indexed `[row][col]`. Cells no assigned
/// word covers are `None`.
pub fn letter_grid(puzzle: &Puzzle, assignment: &Assignment) -> Vec<Vec<Option<char>>> {
    let grid = puzzle.grid();
    let mut letters = vec![vec![None; grid.width()]; grid.height()];

    for slot in puzzle.slots() {
        if let Some(word) = assignment.get(slot) {
            for ((row, col), c) in slot.cells().zip(word.chars()) {
                letters[row][col] = Some(c);
            }
        }
    }

    letters
}

/// A grid with an assignment written into it, for printing.
pub struct FilledGrid<'s> {
    puzzle: &'s Puzzle,
    assignment: &'s Assignment,
}

impl<'s> FilledGrid<'s> {
    pub fn new(puzzle: &'s Puzzle, assignment: &'s Assignment) -> FilledGrid<'s> {
        FilledGrid { puzzle, assignment }
    }
}

impl fmt::Display for FilledGrid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grid = self.puzzle.grid();
        let letters = letter_grid(self.puzzle, self.assignment);

        for (row, line) in letters.iter().enumerate() {
            for (col, letter) in line.iter().enumerate() {
                if grid.is_fillable(row, col) {
                    write!(f, "{}", letter.unwrap_or(' '))?;
                } else {
                    write!(f, "█")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{letter_grid, FilledGrid};
    use crate::{
        crossword::{Direction, Slot},
        fill::Assignment,
        parse::{parse_structure, parse_words},
        puzzle::Puzzle,
    };

    #[test]
    fn letters_land_in_their_cells() {
        let puzzle = Puzzle::new(parse_structure("___\n_##\n_##"), parse_words("cat\ncar")).unwrap();
        let mut assignment = Assignment::default();
        assignment.insert(Slot::new(0, 0, 3, Direction::Down), String::from("CAR"));

        let letters = letter_grid(&puzzle, &assignment);
        assert_eq!(vec![Some('C'), None, None], letters[0]);
        assert_eq!(vec![Some('A'), None, None], letters[1]);
        assert_eq!(vec![Some('R'), None, None], letters[2]);

        assignment.insert(Slot::new(0, 0, 3, Direction::Across), String::from("CAT"));
        assert_eq!(
            "CAT\nA██\nR██\n",
            FilledGrid::new(&puzzle, &assignment).to_string()
        );
    }

    #[test]
    fn partial_fill_leaves_blanks() {
        let puzzle = Puzzle::new(parse_structure("#__\n___"), vec![]).unwrap();
        let assignment = Assignment::default();

        assert_eq!(
            "█  \n   \n",
            FilledGrid::new(&puzzle, &assignment).to_string()
        );
    }
}
