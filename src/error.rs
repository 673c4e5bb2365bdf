use thiserror::Error;

use crate::crossword::Slot;

/// Reasons a grid, slot list or word list is refused before any solving starts.
///
/// An unsatisfiable puzzle is not an error: solving it yields `None`.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum PuzzleError {
    #[error("grid of {width}x{height} needs {expected} cells, got {actual}")]
    DimensionMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    #[error("word list contains an empty word")]
    EmptyWord,

    #[error("word {0:?} contains whitespace")]
    InvalidWord(String),

    #[error("slot {0:?} is shorter than two cells")]
    SlotTooShort(Slot),

    #[error("slot {0:?} runs off the grid")]
    SlotOutOfBounds(Slot),

    #[error("slot {slot:?} covers blocked cell ({row}, {col})")]
    SlotCoversBlockedCell { slot: Slot, row: usize, col: usize },

    #[error("slot {0:?} is listed more than once")]
    DuplicateSlot(Slot),

    #[error("parallel slots {0:?} and {1:?} share a cell")]
    ParallelOverlap(Slot, Slot),
}
