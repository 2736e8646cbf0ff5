use log::{info, warn};
use std::path::Path;
use std::sync::mpsc::channel;

use crate::error::PuzzleError;
use crate::init_config::{InitConfig, DEFAULT_INIT_CONFIG};
use crate::ions::ION_REGISTRY;
use crate::puzzle::Puzzle;

pub mod command_loop;
pub mod spawn;
pub mod state;

use state::{LATEST_GRADE, LATEST_RESULT, PUZZLE_COMMAND_SENDER};

fn load_init_config(path: Option<&Path>) -> Result<InitConfig, PuzzleError> {
    match path {
        Some(path) => {
            let init = InitConfig::load_from_file(path)?;
            info!("Loaded starting board from {}", path.display());
            Ok(init)
        }
        None if Path::new(DEFAULT_INIT_CONFIG).exists() => {
            let init = InitConfig::load_default()?;
            info!("Loaded starting board from {}", DEFAULT_INIT_CONFIG);
            Ok(init)
        }
        None => {
            warn!("{} not found, starting with an empty board", DEFAULT_INIT_CONFIG);
            Ok(InitConfig::default())
        }
    }
}

/// Load the starting board, run it through the puzzle loop and print the outcome.
pub fn run(config_path: Option<&Path>) -> Result<(), PuzzleError> {
    let init = load_init_config(config_path)?;
    init.validate(&ION_REGISTRY)?;
    let config = init.puzzle_config()?;

    let mut puzzle = Puzzle::with_config(config.clone());
    puzzle.set_whitelist(init.whitelist(puzzle.registry()));

    let (tx, rx) = channel();
    *PUZZLE_COMMAND_SENDER.lock() = Some(tx);

    let handle = std::thread::spawn(move || command_loop::run_puzzle_loop(rx, puzzle));

    let queued = spawn::apply_configuration(&init, &config);
    // Dropping the sender lets the loop drain and exit.
    PUZZLE_COMMAND_SENDER.lock().take();
    let puzzle = handle.join().map_err(|_| PuzzleError::LoopPanicked)?;
    info!("Applied {} queued commands", queued?);

    report(&puzzle);
    Ok(())
}

fn report(puzzle: &Puzzle) {
    println!("Board: {} pieces, {} bonds", puzzle.pieces().len(), puzzle.bonds().len());
    for piece in puzzle.pieces() {
        println!(
            "  #{} {} at ({:.1}, {:.1}), bonded to {:?}",
            piece.id,
            piece.definition,
            piece.pos.x,
            piece.pos.y,
            piece.partners().collect::<Vec<_>>()
        );
    }

    let result = LATEST_RESULT.lock().clone();
    println!("Result: {}", result.display_text);
    println!("Valid: {}", result.is_valid);
    if let Some(grade) = LATEST_GRADE.lock().as_ref() {
        let verdict = if grade.is_valid { "correct" } else { "incorrect" };
        println!("Grade: {} ({})", grade.message, verdict);
    }
}
