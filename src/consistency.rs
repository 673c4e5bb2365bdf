//! Node and arc consistency over the domain store.
//!
//! Node consistency drops words of the wrong length. Arc consistency (AC-3)
//! drops every word of a slot that has no distinct, letter-compatible partner
//! left in some crossing slot, and keeps propagating until nothing changes or a
//! slot runs dry.

use crate::{
    crossword::{letter_at, word_length, Slot},
    domain::Domains,
    puzzle::Puzzle,
};
use log::{debug, trace};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

/// Removes every word whose length differs from its slot's. Returns the total
/// number of words removed.
pub fn enforce_node_consistency(puzzle: &Puzzle, domains: &mut Domains) -> usize {
    let removed: usize = puzzle
        .slots()
        .iter()
        .map(|slot| domains.restrict(slot, |word| word_length(word) == slot.length))
        .sum();

    debug!("node consistency removed {} values", removed);
    removed
}

/// Makes `x` arc consistent with `y`: removes each word `w` of `x` for which
/// `y` has no word `v != w` with `w[a] == v[b]`. Returns whether anything was
/// removed. Slots that do not cross are left alone.
pub fn revise(puzzle: &Puzzle, domains: &mut Domains, x: &Slot, y: &Slot) -> bool {
    let (a, b) = match puzzle.overlap(x, y) {
        Some(overlap) => overlap,
        None => return false,
    };

    let keep: Vec<bool> = {
        let candidates = domains.get(y);

        // how many words of y carry each letter at the crossing
        let mut supports: FxHashMap<char, usize> = FxHashMap::default();
        for v in candidates {
            if let Some(c) = letter_at(v, b) {
                *supports.entry(c).or_insert(0) += 1;
            }
        }
        let members: FxHashSet<&str> = candidates.iter().map(|v| v.as_str()).collect();

        domains
            .get(x)
            .iter()
            .map(|w| {
                let c = match letter_at(w, a) {
                    Some(c) => c,
                    None => return false,
                };
                let count = supports.get(&c).copied().unwrap_or(0);
                // w cannot support itself
                let own = members.contains(w.as_str()) && letter_at(w, b) == Some(c);
                count > usize::from(own)
            })
            .collect()
    };

    if keep.iter().all(|k| *k) {
        return false;
    }

    let mut index = 0;
    let removed = domains.restrict(x, |_| {
        let result = keep[index];
        index += 1;
        result
    });

    trace!("revised {:?} against {:?}, removed {}", x, y, removed);
    removed > 0
}

/// AC-3. Starts from `arcs`, or from every crossing pair in both directions
/// when `arcs` is `None`. Returns `false` as soon as some slot is left with no
/// values, `true` once the queue drains.
pub fn ac3(puzzle: &Puzzle, domains: &mut Domains, arcs: Option<Vec<(Slot, Slot)>>) -> bool {
    let mut queue: VecDeque<(Slot, Slot)> = arcs.unwrap_or_else(|| puzzle.arcs()).into();
    let mut queued: FxHashSet<(Slot, Slot)> = queue.iter().copied().collect();
    let mut revisions = 0;

    while let Some((x, y)) = queue.pop_front() {
        queued.remove(&(x, y));
        revisions += 1;

        if !revise(puzzle, domains, &x, &y) {
            continue;
        }

        if domains.is_empty(&x) {
            debug!(
                "arc consistency emptied {:?} after {} revisions",
                x, revisions
            );
            return false;
        }

        for z in puzzle.neighbors(&x) {
            if *z != y && queued.insert((*z, x)) {
                queue.push_back((*z, x));
            }
        }
    }

    debug!("arc consistency settled after {} revisions", revisions);
    true
}

/// Every crossing pair `(z, slot)`: the arcs to revisit after `slot` shrinks.
pub fn arcs_into(puzzle: &Puzzle, slot: &Slot) -> Vec<(Slot, Slot)> {
    puzzle
        .neighbors(slot)
        .iter()
        .map(|z| (*z, *slot))
        .collect()
}
