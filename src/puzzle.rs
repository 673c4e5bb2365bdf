//! The immutable puzzle: grid, slots, the overlap table between slots and the
//! vocabulary. Everything here is built once and only queried afterwards.

use crate::{
    crossword::{Grid, Slot},
    error::PuzzleError,
    parse::parse_slots,
};
use rustc_hash::{FxHashMap, FxHashSet};

#[derive(Debug, Clone)]
pub struct Puzzle {
    grid: Grid,
    slots: Vec<Slot>,
    words: Vec<String>,
    vocabulary: FxHashSet<String>,
    overlaps: FxHashMap<(Slot, Slot), (usize, usize)>,
    neighbors: FxHashMap<Slot, Vec<Slot>>,
}

impl Puzzle {
    /// Derives the slots from `grid` and indexes their overlaps.
    pub fn new(grid: Grid, words: Vec<String>) -> Result<Puzzle, PuzzleError> {
        let slots = parse_slots(&grid);
        Puzzle::with_slots(grid, slots, words)
    }

    /// Like `new`, but with a caller-supplied slot list that is checked
    /// against the grid.
    pub fn with_slots(
        grid: Grid,
        slots: Vec<Slot>,
        words: Vec<String>,
    ) -> Result<Puzzle, PuzzleError> {
        validate_slots(&grid, &slots)?;

        let mut vocabulary = FxHashSet::default();
        let mut unique_words = Vec::with_capacity(words.len());
        for word in words {
            if word.is_empty() {
                return Err(PuzzleError::EmptyWord);
            }
            if word.chars().any(char::is_whitespace) {
                return Err(PuzzleError::InvalidWord(word));
            }
            if vocabulary.insert(word.clone()) {
                unique_words.push(word);
            }
        }

        let overlaps = build_overlaps(&slots)?;

        let mut neighbors: FxHashMap<Slot, Vec<Slot>> = FxHashMap::default();
        for x in &slots {
            let entry = neighbors.entry(*x).or_default();
            for y in &slots {
                if overlaps.contains_key(&(*x, *y)) {
                    entry.push(*y);
                }
            }
        }

        Ok(Puzzle {
            grid,
            slots,
            words: unique_words,
            vocabulary,
            overlaps,
            neighbors,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Slots in a stable order: across runs row by row, then down runs column
    /// by column (for derived slots).
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// The vocabulary in insertion order, without duplicates.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn contains_word(&self, word: &str) -> bool {
        self.vocabulary.contains(word)
    }

    /// Slots crossing `slot`, in slot order.
    pub fn neighbors(&self, slot: &Slot) -> &[Slot] {
        self.neighbors
            .get(slot)
            .map(|neighbors| neighbors.as_slice())
            .unwrap_or(&[])
    }

    /// `Some((a, b))` when letter `a` of `x` shares a cell with letter `b` of `y`.
    pub fn overlap(&self, x: &Slot, y: &Slot) -> Option<(usize, usize)> {
        self.overlaps.get(&(*x, *y)).copied()
    }

    /// Every ordered pair of crossing slots.
    pub fn arcs(&self) -> Vec<(Slot, Slot)> {
        self.slots
            .iter()
            .flat_map(|x| self.neighbors(x).iter().map(move |y| (*x, *y)))
            .collect()
    }
}

fn validate_slots(grid: &Grid, slots: &[Slot]) -> Result<(), PuzzleError> {
    let mut seen = FxHashSet::default();

    for slot in slots {
        if slot.length < 2 {
            return Err(PuzzleError::SlotTooShort(*slot));
        }
        match slot.last_cell() {
            Some((row, col)) if row < grid.height && col < grid.width => {}
            _ => return Err(PuzzleError::SlotOutOfBounds(*slot)),
        }
        for (row, col) in slot.cells() {
            if !grid.is_fillable(row, col) {
                return Err(PuzzleError::SlotCoversBlockedCell {
                    slot: *slot,
                    row,
                    col,
                });
            }
        }
        if !seen.insert(*slot) {
            return Err(PuzzleError::DuplicateSlot(*slot));
        }
    }

    Ok(())
}

/// Indexes every cell by the slots covering it; a cell claimed by two slots
/// yields one overlap in each direction.
fn build_overlaps(
    slots: &[Slot],
) -> Result<FxHashMap<(Slot, Slot), (usize, usize)>, PuzzleError> {
    let mut lookup: FxHashMap<(usize, usize), Vec<(Slot, usize)>> = FxHashMap::default();

    for slot in slots {
        for (offset, cell) in slot.cells().enumerate() {
            lookup.entry(cell).or_default().push((*slot, offset));
        }
    }

    let mut result = FxHashMap::default();

    for claims in lookup.values() {
        for (i, (x, a)) in claims.iter().enumerate() {
            for (y, b) in &claims[i + 1..] {
                if x.direction == y.direction {
                    return Err(PuzzleError::ParallelOverlap(*x, *y));
                }
                result.insert((*x, *y), (*a, *b));
                result.insert((*y, *x), (*b, *a));
            }
        }
    }

    Ok(result)
}
