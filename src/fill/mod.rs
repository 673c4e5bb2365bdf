use crate::{
    config::{ConsistencyCheck, Inference, SolverConfig},
    consistency::{ac3, arcs_into},
    crossword::{letter_at, word_length, Slot},
    domain::Domains,
    puzzle::Puzzle,
};
use rustc_hash::FxHashMap;

pub mod iterative;
pub mod recursive;

/// Backtracking search over the domains left by preprocessing.
pub trait Filler {
    /// The first complete, consistent assignment in search order, or `None`
    /// when every branch fails.
    fn fill(&mut self, puzzle: &Puzzle, domains: &Domains) -> Option<Assignment>;

    fn statistics(&self) -> Statistics;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Statistics {
    /// Tentative assignments tried.
    pub states: usize,
    /// Slots whose candidates all failed.
    pub backtracks: usize,
}

/// Words chosen so far, by slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    words: FxHashMap<Slot, String>,
}

impl Assignment {
    pub fn get(&self, slot: &Slot) -> Option<&str> {
        self.words.get(slot).map(|word| word.as_str())
    }

    pub fn contains(&self, slot: &Slot) -> bool {
        self.words.contains_key(slot)
    }

    pub fn insert(&mut self, slot: Slot, word: String) -> Option<String> {
        self.words.insert(slot, word)
    }

    pub fn remove(&mut self, slot: &Slot) -> Option<String> {
        self.words.remove(slot)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Entries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&Slot, &str)> {
        self.words.iter().map(|(slot, word)| (slot, word.as_str()))
    }
}

/// Every slot holds a word from the vocabulary.
pub fn assignment_complete(puzzle: &Puzzle, assignment: &Assignment) -> bool {
    puzzle.slots().iter().all(|slot| match assignment.get(slot) {
        Some(word) => puzzle.contains_word(word),
        None => false,
    })
}

/// Checks the whole assignment: lengths match, no word is used twice and
/// crossing slots agree on their shared letter.
pub fn consistent(puzzle: &Puzzle, assignment: &Assignment) -> bool {
    let entries: Vec<(&Slot, &str)> = assignment.iter().collect();

    for (i, (x, w)) in entries.iter().enumerate() {
        if word_length(w) != x.length {
            return false;
        }
        for (y, v) in &entries[i + 1..] {
            if !compatible(puzzle, x, w, y, v) {
                return false;
            }
        }
    }

    true
}

/// Same checks as `consistent`, restricted to pairs involving `slot`. Enough
/// when the rest of the assignment is already known to be consistent.
pub fn consistent_with(puzzle: &Puzzle, assignment: &Assignment, slot: &Slot) -> bool {
    let word = match assignment.get(slot) {
        Some(word) => word,
        None => return true,
    };
    if word_length(word) != slot.length {
        return false;
    }

    assignment
        .iter()
        .filter(|(other, _)| *other != slot)
        .all(|(other, value)| compatible(puzzle, slot, word, other, value))
}

fn compatible(puzzle: &Puzzle, x: &Slot, w: &str, y: &Slot, v: &str) -> bool {
    if w == v {
        return false;
    }
    match puzzle.overlap(x, y) {
        Some((a, b)) => letter_at(w, a) == letter_at(v, b),
        None => true,
    }
}

/// Checks a fresh tentative assignment of `slot` the way `config` asks for.
pub(crate) fn check(
    config: &SolverConfig,
    puzzle: &Puzzle,
    assignment: &Assignment,
    slot: &Slot,
) -> bool {
    match config.check {
        ConsistencyCheck::Full => consistent(puzzle, assignment),
        ConsistencyCheck::Incremental => consistent_with(puzzle, assignment, slot),
    }
}

/// What inference leaves for the branch below a tentative assignment.
pub(crate) enum Branch {
    /// Keep searching with the parent's domains.
    Unchanged,
    /// Keep searching with these narrowed domains.
    Narrowed(Domains),
    /// Propagation emptied a domain; skip this value.
    Dead,
}

pub(crate) fn infer(
    config: &SolverConfig,
    puzzle: &Puzzle,
    domains: &Domains,
    slot: &Slot,
    word: &str,
) -> Branch {
    match config.inference {
        Inference::None => Branch::Unchanged,
        Inference::MaintainArcConsistency => {
            // the copy is the snapshot; dropping it on backtrack restores the parent
            let mut narrowed = domains.clone();
            narrowed.assign(slot, word);
            if !narrowed.is_empty(slot)
                && ac3(puzzle, &mut narrowed, Some(arcs_into(puzzle, slot)))
            {
                Branch::Narrowed(narrowed)
            } else {
                Branch::Dead
            }
        }
    }
}
