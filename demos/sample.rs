use std::time::Instant;
use xwords_csp::{
    parse::{parse_structure, parse_words},
    FilledGrid, Puzzle, Solver,
};

fn main() {
    let now = Instant::now();

    let puzzle = Puzzle::new(
        parse_structure(include_str!("../data/structure0.txt")),
        parse_words(include_str!("../data/words0.txt")),
    )
    .unwrap();

    println!("{}", puzzle.grid());

    let assignment = Solver::default().solve(&puzzle).unwrap();
    println!("Filled in {}ms.", now.elapsed().as_millis());
    println!("{}", FilledGrid::new(&puzzle, &assignment));
}
