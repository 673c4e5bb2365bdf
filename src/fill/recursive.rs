use log::debug;

use crate::{
    config::SolverConfig,
    domain::Domains,
    order::{order_domain_values, select_unassigned_variable},
    puzzle::Puzzle,
};

use super::{assignment_complete, check, infer, Assignment, Branch, Filler, Statistics};

/// Depth-first backtracking on the call stack. Depth is bounded by the number
/// of slots.
pub struct RecursiveFiller {
    config: SolverConfig,
    statistics: Statistics,
}

impl RecursiveFiller {
    pub fn new(config: SolverConfig) -> RecursiveFiller {
        RecursiveFiller {
            config,
            statistics: Statistics::default(),
        }
    }

    fn backtrack(
        &mut self,
        puzzle: &Puzzle,
        domains: &Domains,
        assignment: &mut Assignment,
    ) -> bool {
        if assignment_complete(puzzle, assignment) {
            return true;
        }

        let slot = match select_unassigned_variable(
            puzzle,
            domains,
            assignment,
            self.config.variable_order,
        ) {
            Some(slot) => slot,
            None => return false,
        };

        for value in
            order_domain_values(puzzle, domains, assignment, &slot, self.config.value_order)
        {
            self.statistics.states += 1;
            assignment.insert(slot, value.clone());

            if check(&self.config, puzzle, assignment, &slot) {
                let found = match infer(&self.config, puzzle, domains, &slot, &value) {
                    Branch::Unchanged => self.backtrack(puzzle, domains, assignment),
                    Branch::Narrowed(narrowed) => self.backtrack(puzzle, &narrowed, assignment),
                    Branch::Dead => false,
                };
                if found {
                    return true;
                }
            }

            assignment.remove(&slot);
        }

        self.statistics.backtracks += 1;
        false
    }
}

impl Filler for RecursiveFiller {
    fn fill(&mut self, puzzle: &Puzzle, domains: &Domains) -> Option<Assignment> {
        self.statistics = Statistics::default();
        let mut assignment = Assignment::default();

        let found = self.backtrack(puzzle, domains, &mut assignment);
        debug!(
            "recursive fill tried {} states, backtracked {} times",
            self.statistics.states, self.statistics.backtracks
        );

        if found {
            Some(assignment)
        } else {
            None
        }
    }

    fn statistics(&self) -> Statistics {
        self.statistics
    }
}
