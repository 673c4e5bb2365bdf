use crate::crossword::{Direction, Grid, Slot};
use rustc_hash::FxHashSet;

/// Finds every maximal run of at least two fillable cells. Across runs come
/// first in row-major order, then down runs in column-major order.
pub fn parse_slots(grid: &Grid) -> Vec<Slot> {
    let mut result = vec![];

    for row in 0..grid.height {
        let mut start = None;
        let mut length = 0;

        for col in 0..grid.width {
            if grid.is_fillable(row, col) {
                // found a cell; is it our first?
                if start.is_none() {
                    start = Some((row, col));
                }
                length += 1;
            } else {
                push_run(&mut result, start.take(), length, Direction::Across);
                length = 0;
            }
        }
        // have to process end of row
        push_run(&mut result, start.take(), length, Direction::Across);
    }

    for col in 0..grid.width {
        let mut start = None;
        let mut length = 0;

        for row in 0..grid.height {
            if grid.is_fillable(row, col) {
                if start.is_none() {
                    start = Some((row, col));
                }
                length += 1;
            } else {
                push_run(&mut result, start.take(), length, Direction::Down);
                length = 0;
            }
        }
        push_run(&mut result, start.take(), length, Direction::Down);
    }

    result
}

fn push_run(
    result: &mut Vec<Slot>,
    start: Option<(usize, usize)>,
    length: usize,
    direction: Direction,
) {
    // single cells belong to a crossing word only
    if let Some((start_row, start_col)) = start {
        if length >= 2 {
            result.push(Slot::new(start_row, start_col, length, direction));
        }
    }
}

/// Reads a structure file: one line per row, `_` marks a fillable cell and
/// anything else is blocked.
pub fn parse_structure(contents: &str) -> Grid {
    let rows: Vec<Vec<bool>> = contents
        .lines()
        .map(|line| line.chars().map(|c| c == '_').collect())
        .collect();

    Grid::new(rows)
}

/// Reads a word list: one word per line, trimmed and upper-cased. Blank lines
/// are skipped and only the first occurrence of a word is kept.
pub fn parse_words(contents: &str) -> Vec<String> {
    let mut seen = FxHashSet::default();
    let mut result = vec![];

    for line in contents.lines() {
        let word = line.trim().to_uppercase();
        if word.is_empty() {
            continue;
        }
        if seen.insert(word.clone()) {
            result.push(word);
        }
    }

    result
}
