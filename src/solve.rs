use log::{debug, info};

use crate::{
    config::{SolverConfig, Strategy},
    consistency::{ac3, enforce_node_consistency},
    domain::Domains,
    fill::{iterative::IterativeFiller, recursive::RecursiveFiller, Assignment, Filler},
    puzzle::Puzzle,
};

/// Node consistency, then AC-3, then backtracking search.
#[derive(Debug, Clone, Copy, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Solver {
        Solver { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Domains after node and arc consistency, or `None` if preprocessing
    /// already proves the puzzle unsatisfiable.
    pub fn preprocess(&self, puzzle: &Puzzle) -> Option<Domains> {
        let mut domains = Domains::initialize(puzzle.slots(), puzzle.words());

        enforce_node_consistency(puzzle, &mut domains);
        if let Some(slot) = domains.first_empty(puzzle.slots()) {
            debug!("no word of length {} for {:?}", slot.length, slot);
            return None;
        }

        if !ac3(puzzle, &mut domains, None) {
            return None;
        }

        Some(domains)
    }

    /// The first fill found, or `None` if the puzzle cannot be filled. A puzzle
    /// without slots has nothing to fill and counts as unsatisfiable.
    pub fn solve(&self, puzzle: &Puzzle) -> Option<Assignment> {
        if puzzle.slots().is_empty() {
            info!("puzzle has no slots to fill");
            return None;
        }

        let domains = self.preprocess(puzzle)?;
        debug!(
            "{} candidates left across {} slots after preprocessing",
            domains.total(),
            puzzle.slots().len()
        );

        let mut filler: Box<dyn Filler> = match self.config.strategy {
            Strategy::Recursive => Box::new(RecursiveFiller::new(self.config)),
            Strategy::Iterative => Box::new(IterativeFiller::new(self.config)),
        };

        let result = filler.fill(puzzle, &domains);
        let statistics = filler.statistics();
        info!(
            "search {} after {} states and {} backtracks",
            if result.is_some() { "succeeded" } else { "failed" },
            statistics.states,
            statistics.backtracks
        );

        result
    }
}

#[cfg(test)]
mod tests {
    use super::Solver;
    use crate::{
        config::{Inference, SolverConfig, Strategy, ValueOrder, VariableOrder},
        crossword::{letter_at, Direction, Grid, Slot},
        fill::{assignment_complete, consistent},
        parse::{parse_structure, parse_words},
        puzzle::Puzzle,
    };
    use proptest::{collection::vec, prelude::any, prop_assert, proptest};

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| String::from(*w)).collect()
    }

    fn configs() -> Vec<SolverConfig> {
        let mut result = vec![];
        for strategy in &[Strategy::Recursive, Strategy::Iterative] {
            result.push(SolverConfig::default().with_strategy(*strategy));
            result.push(SolverConfig::heuristic().with_strategy(*strategy));
            result.push(SolverConfig {
                variable_order: VariableOrder::MinimumRemainingValues,
                value_order: ValueOrder::Domain,
                inference: Inference::None,
                ..SolverConfig::default().with_strategy(*strategy)
            });
        }
        result
    }

    #[test]
    fn one_slot_one_word() {
        let puzzle = Puzzle::new(parse_structure("____"), words(&["WORD"])).unwrap();

        for config in configs() {
            let assignment = Solver::new(config).solve(&puzzle).unwrap();
            assert_eq!(Some("WORD"), assignment.get(&Slot::new(0, 0, 4, Direction::Across)));
            assert_eq!(1, assignment.len());
        }
    }

    #[test]
    fn irreconcilable_crossing_is_unsatisfiable() {
        let puzzle = Puzzle::new(
            parse_structure("___\n_##\n_##"),
            words(&["CAT", "DOG", "EEL"]),
        )
        .unwrap();

        for config in configs() {
            assert_eq!(None, Solver::new(config).solve(&puzzle));
        }
        assert_eq!(None, Solver::default().preprocess(&puzzle));
    }

    #[test]
    fn words_cannot_be_reused() {
        let puzzle = Puzzle::new(parse_structure("___\n###\n___"), words(&["CAT", "DO"])).unwrap();

        for config in configs() {
            assert_eq!(None, Solver::new(config).solve(&puzzle));
        }
    }

    #[test]
    fn cat_car_dog() {
        let puzzle = Puzzle::new(
            parse_structure("___\n_##\n_##"),
            words(&["CAT", "CAR", "DOG"]),
        )
        .unwrap();
        let across = Slot::new(0, 0, 3, Direction::Across);
        let down = Slot::new(0, 0, 3, Direction::Down);

        for config in configs() {
            let assignment = Solver::new(config).solve(&puzzle).unwrap();

            let a = assignment.get(&across).unwrap();
            let b = assignment.get(&down).unwrap();
            assert_ne!(a, b);
            assert!(a == "CAT" || a == "CAR");
            assert!(b == "CAT" || b == "CAR");
        }

        let assignment = Solver::default().solve(&puzzle).unwrap();
        assert_eq!(Some("CAT"), assignment.get(&across));
        assert_eq!(Some("CAR"), assignment.get(&down));
    }

    #[test]
    fn empty_inputs_are_unsatisfiable() {
        let no_slots = Puzzle::new(Grid::new(vec![]), words(&["CAT"])).unwrap();
        assert_eq!(None, Solver::default().solve(&no_slots));

        let no_words = Puzzle::new(parse_structure("___"), vec![]).unwrap();
        assert_eq!(None, Solver::default().solve(&no_words));

        let missing_length = Puzzle::new(parse_structure("___\n#\n__"), words(&["CAT"])).unwrap();
        assert_eq!(None, Solver::default().solve(&missing_length));
    }

    #[test]
    fn fills_a_small_grid() {
        let puzzle = Puzzle::new(
            parse_structure(
                "#___#
#_##_
#_##_
#_##_
#____",
            ),
            parse_words("one\ntwo\nthree\nfour\nfive\nsix\nseven\neight\nnine\nten"),
        )
        .unwrap();

        for config in configs() {
            let assignment = Solver::new(config).solve(&puzzle).unwrap();

            assert!(assignment_complete(&puzzle, &assignment));
            assert!(consistent(&puzzle, &assignment));
            assert_eq!(
                Some("SEVEN"),
                assignment.get(&Slot::new(0, 1, 5, Direction::Down))
            );
        }
    }

    proptest! {
        #[test]
        fn solutions_are_sound(
            cells in vec(any::<bool>(), 9),
            list in vec("[AB]{2,3}", 0..14),
        ) {
            let grid = Grid::rectangle(cells, 3, 3).unwrap();
            let puzzle = Puzzle::new(grid, list).unwrap();

            let results: Vec<_> = configs()
                .into_iter()
                .map(|config| Solver::new(config).solve(&puzzle))
                .collect();

            for result in &results {
                // every configuration agrees on whether a fill exists
                prop_assert!(result.is_some() == results[0].is_some());

                if let Some(assignment) = result {
                    prop_assert!(assignment_complete(&puzzle, assignment));
                    prop_assert!(consistent(&puzzle, assignment));
                    for (x, y) in puzzle.arcs() {
                        let (a, b) = puzzle.overlap(&x, &y).unwrap();
                        let w = assignment.get(&x).unwrap();
                        let v = assignment.get(&y).unwrap();
                        prop_assert!(letter_at(w, a) == letter_at(v, b));
                    }
                }
            }
        }
    }
}
