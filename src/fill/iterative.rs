use log::debug;

use crate::{
    config::SolverConfig,
    crossword::Slot,
    domain::Domains,
    order::{order_domain_values, select_unassigned_variable},
    puzzle::Puzzle,
};

use super::{assignment_complete, check, infer, Assignment, Branch, Filler, Statistics};

/// One slot being tried on the explicit stack.
struct Frame {
    slot: Slot,
    candidates: Vec<String>,
    next: usize,
    // domains below the current candidate, when inference narrowed them
    narrowed: Option<Domains>,
}

/// The same search as `RecursiveFiller`, driven by a heap-allocated stack of
/// frames so large grids cannot overflow the call stack. Both visit
/// candidates in the same order and return the same first fill.
pub struct IterativeFiller {
    config: SolverConfig,
    statistics: Statistics,
}

impl IterativeFiller {
    pub fn new(config: SolverConfig) -> IterativeFiller {
        IterativeFiller {
            config,
            statistics: Statistics::default(),
        }
    }

    fn open_frame(
        &self,
        puzzle: &Puzzle,
        domains: &Domains,
        assignment: &Assignment,
    ) -> Option<Frame> {
        let slot =
            select_unassigned_variable(puzzle, domains, assignment, self.config.variable_order)?;
        let candidates =
            order_domain_values(puzzle, domains, assignment, &slot, self.config.value_order);

        Some(Frame {
            slot,
            candidates,
            next: 0,
            narrowed: None,
        })
    }
}

/// The domains in force on top of `frames`: the most recent narrowing, or
/// `base` when nothing was narrowed.
fn current_domains<'a>(frames: &'a [Frame], base: &'a Domains) -> &'a Domains {
    frames
        .iter()
        .rev()
        .find_map(|frame| frame.narrowed.as_ref())
        .unwrap_or(base)
}

impl Filler for IterativeFiller {
    fn fill(&mut self, puzzle: &Puzzle, domains: &Domains) -> Option<Assignment> {
        self.statistics = Statistics::default();
        let mut assignment = Assignment::default();

        if assignment_complete(puzzle, &assignment) {
            return Some(assignment);
        }

        let mut stack: Vec<Frame> = self
            .open_frame(puzzle, domains, &assignment)
            .into_iter()
            .collect();

        loop {
            let frame = match stack.last_mut() {
                Some(frame) => frame,
                None => {
                    debug!(
                        "iterative fill exhausted after {} states, {} backtracks",
                        self.statistics.states, self.statistics.backtracks
                    );
                    return None;
                }
            };

            // undo the previous candidate of this frame
            assignment.remove(&frame.slot);
            frame.narrowed = None;

            if frame.next >= frame.candidates.len() {
                stack.pop();
                self.statistics.backtracks += 1;
                continue;
            }

            let slot = frame.slot;
            let value = frame.candidates[frame.next].clone();
            frame.next += 1;

            self.statistics.states += 1;
            assignment.insert(slot, value.clone());

            if !check(&self.config, puzzle, &assignment, &slot) {
                continue;
            }

            let parent = current_domains(&stack[..stack.len() - 1], domains);
            match infer(&self.config, puzzle, parent, &slot, &value) {
                Branch::Dead => continue,
                Branch::Unchanged => {}
                Branch::Narrowed(narrowed) => {
                    if let Some(frame) = stack.last_mut() {
                        frame.narrowed = Some(narrowed);
                    }
                }
            }

            if assignment_complete(puzzle, &assignment) {
                debug!(
                    "iterative fill tried {} states, backtracked {} times",
                    self.statistics.states, self.statistics.backtracks
                );
                return Some(assignment);
            }

            let child = self.open_frame(puzzle, current_domains(&stack, domains), &assignment);
            if let Some(child) = child {
                stack.push(child);
            }
        }
    }

    fn statistics(&self) -> Statistics {
        self.statistics
    }
}
