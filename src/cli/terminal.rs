//! The interactive turn loop over any line reader and writer.
//!
//! Prompts, boards and rejection messages all go to the same writer. A
//! rejected line re-prompts the same player; end of input stops the loop.

use std::io::{self, BufRead, Write};

use super::input::{parse_coord, parse_dimension};
use super::render::{render_board, render_score};
use crate::game::GameSession;
use crate::rules::{GameResult, RulesEngine};

fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Ask for the board dimension until a valid one is typed.
///
/// Returns `None` if input ends first.
pub fn ask_dimension(
    input: &mut impl BufRead,
    output: &mut impl Write,
    default: usize,
) -> io::Result<Option<usize>> {
    loop {
        writeln!(output, "tell me the dimension of the board (default={default}):")?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match parse_dimension(&line, default) {
            Ok(dimension) => return Ok(Some(dimension)),
            Err(e) => writeln!(output, "{e}")?,
        }
    }
}

/// Run `session` to completion, reading one move per line.
///
/// Returns the result, or `None` if input ends before the game does.
pub fn play<R: RulesEngine>(
    session: &mut GameSession<R>,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<Option<GameResult>> {
    let dimension = session.board().dimension();

    writeln!(output, "New Game Started!")?;
    writeln!(output, "{}", render_board(session.board()))?;

    while !session.is_over() {
        let player = session.current_player();
        writeln!(
            output,
            "{} ({})'s move (input your move in x,y format):",
            player,
            player.symbol()
        )?;

        let Some(line) = read_line(input)? else {
            tracing::debug!("input closed before the game ended");
            return Ok(None);
        };
        let coord = match parse_coord(&line, dimension) {
            Ok(coord) => coord,
            Err(e) => {
                writeln!(output, "{e}")?;
                continue;
            }
        };

        match session.play(coord) {
            Ok(report) => {
                writeln!(output, "{}", render_board(session.board()))?;
                writeln!(output, "{}", render_score(session.board()))?;
                if let Some(passed) = report.passed {
                    writeln!(output, "{passed} has no legal move and passes")?;
                }
            }
            Err(e) => writeln!(output, "{e}")?,
        }
    }

    let result = session.status().result();
    if let Some(result) = result {
        writeln!(output, "Game over: {result}")?;
    }
    Ok(result)
}
