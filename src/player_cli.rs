#![cfg(feature = "std")]

//! Terminal front end: coordinate parsing, board rendering and prompts.

use std::fmt::{self, Write as _};
use std::io::{self, BufRead, Write};
use std::string::{String, ToString};

use rand::rngs::SmallRng;

use crate::{
    board::{Board, Cell},
    common::{Coord, ShotOutcome},
    game::RoundSummary,
    player::Player,
};

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// Why a line of player input is not a coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordParseError {
    /// Fewer than two characters after trimming.
    TooShort,
    /// First character is not an ASCII letter.
    InvalidColumn(char),
    /// Row part is not made of digits.
    InvalidRow(String),
    /// Row `0` has no cell; rows are numbered from 1.
    RowZero,
}

impl fmt::Display for CoordParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordParseError::TooShort => write!(f, "need a column letter and a row number"),
            CoordParseError::InvalidColumn(c) => write!(f, "'{}' is not a column letter", c),
            CoordParseError::InvalidRow(r) => write!(f, "'{}' is not a row number", r),
            CoordParseError::RowZero => write!(f, "rows start at 1"),
        }
    }
}

impl std::error::Error for CoordParseError {}

/// Parse text such as `B5` or `b5` into a zero-based coordinate.
///
/// Bounds are not checked here; the engine reports `OutOfBounds`.
pub fn parse_coord(input: &str) -> Result<Coord, CoordParseError> {
    let input = input.trim();
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or(CoordParseError::TooShort)?;
    let row_str = chars.as_str();
    if row_str.is_empty() {
        return Err(CoordParseError::TooShort);
    }
    if !col_ch.is_ascii_alphabetic() {
        return Err(CoordParseError::InvalidColumn(col_ch));
    }
    if !row_str.chars().all(|c| c.is_ascii_digit()) {
        return Err(CoordParseError::InvalidRow(row_str.to_string()));
    }
    let row: usize = row_str
        .parse()
        .map_err(|_| CoordParseError::InvalidRow(row_str.to_string()))?;
    let row = row.checked_sub(1).ok_or(CoordParseError::RowZero)?;
    let col = (col_ch.to_ascii_uppercase() as u8 - b'A') as usize;
    Ok(Coord::new(row, col))
}

fn glyph(cell: Cell, reveal: bool) -> char {
    match cell {
        Cell::Empty => '.',
        Cell::ShipIntact if reveal => 'X',
        Cell::ShipIntact => '.',
        Cell::Miss => 'O',
        Cell::ShipSunk => 'S',
    }
}

/// Render the board with a header of column letters and 1-based row numbers.
///
/// Intact ship cells are only shown when `reveal` is set.
pub fn render_board(board: &Board, reveal: bool) -> String {
    let width = board.size().to_string().len();
    let mut out = String::new();
    let _ = write!(out, "{:width$}", "", width = width);
    for c in 0..board.size() {
        let letter = u8::try_from(c)
            .ok()
            .filter(|c| *c < 26)
            .map(|c| (b'A' + c) as char)
            .unwrap_or('?');
        let _ = write!(out, " {}", letter);
    }
    out.push('\n');
    for (r, row) in board.rows().enumerate() {
        let _ = write!(out, "{:>width$}", r + 1, width = width);
        for cell in row {
            let _ = write!(out, " {}", glyph(*cell, reveal));
        }
        out.push('\n');
    }
    out
}

/// Message shown after a shot.
pub fn outcome_message(outcome: ShotOutcome) -> &'static str {
    match outcome {
        ShotOutcome::Hit => "Hit!",
        ShotOutcome::Miss => "Miss!",
        ShotOutcome::AlreadyTargeted => "You've already shot here. Try again.",
        ShotOutcome::OutOfBounds => "Shot out of bounds. Try again.",
    }
}

/// Affirmative answer to the play-again prompt. Anything but `y`, after
/// trimming and lowercasing, means quit.
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().to_lowercase() == "y"
}

/// Interactive player reading from `R` and writing to `W`.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
    name: String,
    reveal: bool,
    clear: bool,
    notice: Option<String>,
}

impl CliPlayer<io::StdinLock<'static>, io::Stdout> {
    /// Player on the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            name: "Player".to_string(),
            reveal: false,
            clear: true,
            notice: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Show intact ship cells on the board.
    pub fn reveal(mut self, reveal: bool) -> Self {
        self.reveal = reveal;
        self
    }

    /// Clear the terminal before each board.
    pub fn clear_screen(mut self, clear: bool) -> Self {
        self.clear = clear;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Consume the player and hand back its writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print the welcome banner.
    pub fn greet(&mut self) -> io::Result<()> {
        writeln!(self.output, "Welcome to Battleship!")
    }

    /// Ask for the player's name. Blank input keeps the current name.
    pub fn prompt_name(&mut self) -> io::Result<()> {
        if let Some(line) = self.prompt("Enter your name: ")? {
            let line = line.trim();
            if !line.is_empty() {
                self.name = line.to_string();
            }
        }
        Ok(())
    }

    /// Print the farewell message.
    pub fn farewell(&mut self) -> io::Result<()> {
        writeln!(self.output, "Thanks for playing! Goodbye!")
    }

    /// Write `text`, flush, and read one line. `None` on end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn draw(&mut self, board: &Board) -> io::Result<()> {
        if self.clear {
            write!(self.output, "{}", CLEAR_SCREEN)?;
        }
        write!(self.output, "{}", render_board(board, self.reveal))?;
        if let Some(notice) = self.notice.take() {
            writeln!(self.output, "{}", notice)?;
        }
        Ok(())
    }

    fn read_target(&mut self, view: &Board) -> io::Result<Option<Coord>> {
        loop {
            self.draw(view)?;
            let prompt = format!("{}, enter your shot (e.g., B5): ", self.name);
            let Some(line) = self.prompt(&prompt)? else {
                return Ok(None);
            };
            match parse_coord(&line) {
                Ok(coord) => return Ok(Some(coord)),
                Err(CoordParseError::RowZero) => {
                    self.notice = Some(outcome_message(ShotOutcome::OutOfBounds).to_string());
                }
                Err(e) => {
                    log::debug!("rejected input {:?}: {}", line.trim(), e);
                    self.notice = Some("Invalid input, try again.".to_string());
                }
            }
        }
    }

    fn report(&mut self, result: io::Result<()>) {
        if let Err(e) = result {
            log::warn!("terminal write failed: {}", e);
        }
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn select_target(&mut self, _rng: &mut SmallRng, view: &Board) -> Option<Coord> {
        match self.read_target(view) {
            Ok(coord) => coord,
            Err(e) => {
                log::warn!("terminal read failed: {}", e);
                None
            }
        }
    }

    fn handle_shot_result(&mut self, _coord: Coord, outcome: ShotOutcome) {
        self.notice = Some(outcome_message(outcome).to_string());
    }

    fn handle_round_won(&mut self, summary: RoundSummary) {
        let notice = self.notice.take();
        let result = (|| -> io::Result<()> {
            if let Some(notice) = notice {
                writeln!(self.output, "{}", notice)?;
            }
            writeln!(
                self.output,
                "Congratulations, {}! You've sunk all ships.",
                self.name
            )?;
            writeln!(self.output, "Total shots: {}", summary.shots)
        })();
        self.report(result);
    }

    fn play_again(&mut self) -> bool {
        match self.prompt("Do you want to play again? (y/n): ") {
            Ok(Some(answer)) => is_affirmative(&answer),
            Ok(None) => false,
            Err(e) => {
                log::warn!("terminal read failed: {}", e);
                false
            }
        }
    }
}
