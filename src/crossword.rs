use crate::error::PuzzleError;
use std::fmt;

/// Which cells of the puzzle can hold a letter. Row-major, `true` means fillable.
#[derive(PartialEq, Eq, Debug, Hash, Clone)]
pub struct Grid {
    pub(crate) cells: Vec<bool>,
    pub(crate) width: usize,
    pub(crate) height: usize,
}

impl Grid {
    /// Builds a grid from rows. The width is that of the longest row; shorter
    /// rows are padded with blocked cells.
    pub fn new(rows: Vec<Vec<bool>>) -> Grid {
        let width = rows.iter().map(|row| row.len()).max().unwrap_or(0);
        let height = rows.len();

        let mut cells = Vec::with_capacity(width * height);
        for row in rows {
            let padding = width - row.len();
            cells.extend(row);
            cells.extend(std::iter::repeat(false).take(padding));
        }

        Grid {
            cells,
            width,
            height,
        }
    }

    pub fn rectangle(cells: Vec<bool>, width: usize, height: usize) -> Result<Grid, PuzzleError> {
        match width.checked_mul(height) {
            Some(expected) if expected == cells.len() => {}
            _ => {
                return Err(PuzzleError::DimensionMismatch {
                    width,
                    height,
                    expected: width.saturating_mul(height),
                    actual: cells.len(),
                })
            }
        }
        Ok(Grid {
            cells,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Out-of-bounds cells count as blocked.
    pub fn is_fillable(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width && self.cells[row * self.width + col]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                if self.is_fillable(row, col) {
                    write!(f, "_")?;
                } else {
                    write!(f, "█")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub enum Direction {
    Across,
    Down,
}

/// A maximal run of fillable cells that receives one word.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub struct Slot {
    pub(crate) start_row: usize,
    pub(crate) start_col: usize,
    pub(crate) length: usize,
    pub(crate) direction: Direction,
}

impl Slot {
    pub fn new(start_row: usize, start_col: usize, length: usize, direction: Direction) -> Slot {
        Slot {
            start_row,
            start_col,
            length,
            direction,
        }
    }

    pub fn start(&self) -> (usize, usize) {
        (self.start_row, self.start_col)
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The cell holding the final letter, or `None` for an empty slot or one
    /// whose coordinates overflow.
    pub fn last_cell(&self) -> Option<(usize, usize)> {
        let offset = self.length.checked_sub(1)?;
        match self.direction {
            Direction::Across => Some((self.start_row, self.start_col.checked_add(offset)?)),
            Direction::Down => Some((self.start_row.checked_add(offset)?, self.start_col)),
        }
    }

    pub fn cells(&self) -> SlotCells {
        SlotCells {
            slot: *self,
            index: 0,
        }
    }
}

/// Grid coordinates covered by a slot, in word order.
#[derive(Clone, Debug)]
pub struct SlotCells {
    slot: Slot,
    index: usize,
}

impl Iterator for SlotCells {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.slot.length {
            return None;
        }

        let result = match self.slot.direction {
            Direction::Across => (self.slot.start_row, self.slot.start_col + self.index),
            Direction::Down => (self.slot.start_row + self.index, self.slot.start_col),
        };
        self.index += 1;
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.slot.length - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SlotCells {}

/// Character at `offset` of `word`, counting characters rather than bytes.
pub(crate) fn letter_at(word: &str, offset: usize) -> Option<char> {
    word.chars().nth(offset)
}

pub(crate) fn word_length(word: &str) -> usize {
    word.chars().count()
}
