use anyhow::Context;
use minedig_core::*;
use std::io::{BufRead, Write};

use crate::{BoardView, parse_location};

pub const PROMPT: &str = "Where would you like to dig? Input as row,col: ";

/// How a game driven by [`play`] ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
    /// Input ran out before the board was cleared or a mine was hit.
    Abandoned,
}

/// Runs one game to completion, reading locations from `input` and writing the board to `output`.
pub fn play<R: BufRead, W: Write>(
    mut board: Board,
    mut input: R,
    mut output: W,
) -> anyhow::Result<Outcome> {
    let safe_cells = board.total_cells() - board.mine_count();
    let mut line = String::new();
    let mut outcome = RevealOutcome::Safe;

    while board.revealed_count() < safe_cells {
        writeln!(output, "{}", BoardView(&board))?;
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line).context("Could not read player input")? == 0 {
            writeln!(output)?;
            log::info!("Input closed with {} safe cells left", board.safe_cells_remaining());
            return Ok(Outcome::Abandoned);
        }

        let (row, col) = match parse_location(&line) {
            Ok(location) => location,
            Err(err) => {
                log::warn!("Rejected input {:?}: {}", line.trim_end(), err);
                writeln!(output, "Invalid input. Try again")?;
                continue;
            }
        };

        let Some(coords) = to_coords(row, col, board.dim_size()) else {
            log::warn!("Location ({}, {}) is off the board", row, col);
            writeln!(output, "Invalid location. Try again")?;
            continue;
        };

        outcome = board.reveal_outcome(coords)?;
        if outcome == RevealOutcome::HitMine {
            break;
        }
    }

    log::debug!("Game ended: {:?}", board.state());
    if outcome != RevealOutcome::HitMine {
        writeln!(output, "Congratulations! You won!")?;
        Ok(Outcome::Won)
    } else {
        writeln!(output, "Sorry game over!")?;
        board.reveal_all();
        writeln!(output, "{}", BoardView(&board))?;
        Ok(Outcome::Lost)
    }
}

fn to_coords(row: i64, col: i64, dim_size: Coord) -> Option<Coord2> {
    let row = Coord::try_from(row).ok().filter(|&row| row < dim_size)?;
    let col = Coord::try_from(col).ok().filter(|&col| col < dim_size)?;
    Some((row, col))
}
