use std::time::Instant;
use xwords_csp::{
    config::Strategy,
    parse::{parse_structure, parse_words},
    FilledGrid, Puzzle, Solver, SolverConfig,
};

fn main() {
    env_logger::init();
    let now = Instant::now();

    // a fully open square: every row and every column is a word
    let puzzle = Puzzle::new(
        parse_structure(include_str!("../data/square.txt")),
        parse_words(include_str!("../data/words3.txt")),
    )
    .unwrap();
    println!("Loaded {} words in {}ms", puzzle.words().len(), now.elapsed().as_millis());

    for config in &[
        SolverConfig::heuristic(),
        SolverConfig::heuristic().with_strategy(Strategy::Iterative),
    ] {
        let now = Instant::now();
        match Solver::new(*config).solve(&puzzle) {
            Some(assignment) => {
                println!("{:?} filled in {}ms.", config.strategy, now.elapsed().as_millis());
                println!("{}", FilledGrid::new(&puzzle, &assignment));
            }
            None => println!("No solution."),
        }
    }
}
