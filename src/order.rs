use crate::{
    config::{ValueOrder, VariableOrder},
    crossword::{letter_at, Slot},
    domain::Domains,
    fill::Assignment,
    puzzle::Puzzle,
};
use core::cmp::Ordering;

#[derive(Eq, PartialEq, Debug)]
pub(crate) struct SlotScore {
    remaining: usize,
    degree: usize,
}

impl PartialOrd for SlotScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SlotScore {
    fn cmp(&self, other: &Self) -> Ordering {
        // fewer remaining values wins
        if self.remaining != other.remaining {
            return self.remaining.cmp(&other.remaining);
        }
        // more unassigned neighbors wins
        other.degree.cmp(&self.degree)
    }
}

pub(crate) fn score_slot(
    puzzle: &Puzzle,
    domains: &Domains,
    assignment: &Assignment,
    slot: &Slot,
) -> SlotScore {
    SlotScore {
        remaining: domains.len(slot),
        degree: puzzle
            .neighbors(slot)
            .iter()
            .filter(|neighbor| !assignment.contains(neighbor))
            .count(),
    }
}

/// The next slot to fill, or `None` once every slot is assigned. Ties keep
/// puzzle order.
pub fn select_unassigned_variable(
    puzzle: &Puzzle,
    domains: &Domains,
    assignment: &Assignment,
    order: VariableOrder,
) -> Option<Slot> {
    let mut unassigned = puzzle
        .slots()
        .iter()
        .filter(|slot| !assignment.contains(slot));

    match order {
        VariableOrder::Enumeration => unassigned.next().copied(),
        VariableOrder::MinimumRemainingValues => unassigned
            .min_by_key(|slot| score_slot(puzzle, domains, assignment, slot))
            .copied(),
    }
}

/// How many values of unassigned neighbors become impossible if `slot` takes
/// `word`.
pub(crate) fn eliminations(
    puzzle: &Puzzle,
    domains: &Domains,
    assignment: &Assignment,
    slot: &Slot,
    word: &str,
) -> usize {
    let mut result = 0;

    for neighbor in puzzle.neighbors(slot) {
        if assignment.contains(neighbor) {
            continue;
        }
        let (a, b) = match puzzle.overlap(slot, neighbor) {
            Some(overlap) => overlap,
            None => continue,
        };
        let letter = letter_at(word, a);

        result += domains
            .get(neighbor)
            .iter()
            .filter(|value| value.as_str() == word || letter_at(value, b) != letter)
            .count();
    }

    result
}

/// The candidates of `slot`, in the order the search should try them.
pub fn order_domain_values(
    puzzle: &Puzzle,
    domains: &Domains,
    assignment: &Assignment,
    slot: &Slot,
    order: ValueOrder,
) -> Vec<String> {
    let mut values = domains.get(slot).to_vec();

    if order == ValueOrder::LeastConstraining {
        // stable, so equally constraining words keep domain order
        values.sort_by_cached_key(|word| eliminations(puzzle, domains, assignment, slot, word));
    }

    values
}
