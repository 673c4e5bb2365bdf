extern crate clap;

use clap::{App, Arg};
use log::info;
use std::time::Instant;
use xwords_csp::{
    config::{ConsistencyCheck, Strategy},
    parse::{parse_structure, parse_words},
    FilledGrid, Puzzle, Solver, SolverConfig,
};

fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("xwords")
        .about("Fills a crossword structure from a word list")
        .after_help("The filled grid is printed as text; image output is not supported.")
        .arg(
            Arg::with_name("structure")
                .value_name("STRUCTURE")
                .help("Structure file; `_` marks a fillable cell")
                .required(true),
        )
        .arg(
            Arg::with_name("words")
                .value_name("WORDS")
                .help("Word list, one word per line")
                .required(true),
        )
        .arg(
            Arg::with_name("heuristics")
                .long("heuristics")
                .help("Order slots by remaining values and words by least constraint, maintaining arc consistency"),
        )
        .arg(
            Arg::with_name("iterative")
                .long("iterative")
                .help("Search with an explicit stack instead of recursion"),
        )
        .arg(
            Arg::with_name("incremental")
                .long("incremental")
                .help("Only re-check pairs involving the slot just assigned"),
        )
}

fn main() -> Result<(), String> {
    env_logger::init();

    let matches = app().get_matches();

    let structure = matches.value_of("structure").ok_or("structure not included")?;
    let structure = std::fs::read_to_string(structure)
        .map_err(|err| format!("Failed to read {}: {}", structure, err))?;

    let words = matches.value_of("words").ok_or("words not included")?;
    let words = std::fs::read_to_string(words)
        .map_err(|err| format!("Failed to read {}: {}", words, err))?;

    let mut config = if matches.is_present("heuristics") {
        SolverConfig::heuristic()
    } else {
        SolverConfig::default()
    };
    if matches.is_present("iterative") {
        config = config.with_strategy(Strategy::Iterative);
    }
    if matches.is_present("incremental") {
        config.check = ConsistencyCheck::Incremental;
    }

    let puzzle = Puzzle::new(parse_structure(&structure), parse_words(&words))
        .map_err(|err| format!("Malformed puzzle: {}", err))?;

    let now = Instant::now();
    let output = Solver::new(config).solve(&puzzle);
    info!("Solved in {}ms", now.elapsed().as_millis());

    match output {
        Some(assignment) => print!("{}", FilledGrid::new(&puzzle, &assignment)),
        None => println!("No solution."),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::app;

    #[test]
    fn help_states_text_output() {
        let mut help = vec![];
        app().write_help(&mut help).unwrap();
        let help = String::from_utf8(help).unwrap();

        assert!(help.contains("--heuristics"));
        assert!(help.contains("image output is not supported"));
    }

    #[test]
    fn requires_both_files() {
        assert!(app().get_matches_from_safe(vec!["xwords", "grid.txt"]).is_err());

        let matches = app()
            .get_matches_from_safe(vec!["xwords", "grid.txt", "words.txt", "--iterative"])
            .unwrap();
        assert_eq!(Some("grid.txt"), matches.value_of("structure"));
        assert!(matches.is_present("iterative"));
        assert!(!matches.is_present("heuristics"));
    }
}
