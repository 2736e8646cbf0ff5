use log::info;
use ultraviolet::Vec2;

use crate::commands::PuzzleCommand;
use crate::config::PuzzleConfig;
use crate::error::PuzzleError;
use crate::init_config::InitConfig;

use super::state::send_command;

/// Uniform position that keeps the whole piece on the board.
pub fn random_position(rng: &mut fastrand::Rng, config: &PuzzleConfig) -> Vec2 {
    let half = config.piece_size * 0.5;
    let span_x = (config.board_width - config.piece_size.x).max(0.0);
    let span_y = (config.board_height - config.piece_size.y).max(0.0);
    Vec2::new(half.x + rng.f32() * span_x, half.y + rng.f32() * span_y)
}

/// Queue the starting board: explicit pieces, random scatters, then scripted drags.
/// Returns the number of commands sent.
pub fn apply_configuration(init: &InitConfig, config: &PuzzleConfig) -> Result<usize, PuzzleError> {
    let mut sent = 0;

    for piece in &init.pieces {
        send_command(PuzzleCommand::AddPiece {
            symbol: piece.symbol.clone(),
            position: piece.position(),
        })?;
        sent += 1;
    }
    if !init.pieces.is_empty() {
        info!("Queued {} configured pieces", init.pieces.len());
    }

    for random in &init.random {
        let mut rng = match random.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        for _ in 0..random.count {
            send_command(PuzzleCommand::AddPiece {
                symbol: random.symbol.clone(),
                position: Some(random_position(&mut rng, config)),
            })?;
            sent += 1;
        }
        info!("Scattered {} {} pieces", random.count, random.symbol);
    }

    for drag in &init.drags {
        send_command(PuzzleCommand::BeginDrag {
            point: Vec2::new(drag.from[0], drag.from[1]),
        })?;
        sent += 1;
        for point in drag.path() {
            send_command(PuzzleCommand::DragTo { point })?;
            sent += 1;
        }
        send_command(PuzzleCommand::EndDrag)?;
        sent += 1;
    }

    Ok(sent)
}
