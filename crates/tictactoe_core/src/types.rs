//! Core domain types for tic-tac-toe.

use crate::error::{MoveError, ParseBoardError, ParseMoveError};
use crate::rules;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Side length of the board.
pub const SIZE: usize = 3;

/// A player's mark.
///
/// The human always plays `X` and moves first; the computer plays `O`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// The human's mark (goes first).
    X,
    /// The computer's mark.
    O,
}

impl Mark {
    /// Mark placed by the human player.
    pub const HUMAN: Mark = Mark::X;
    /// Mark placed by the computer player.
    pub const COMPUTER: Mark = Mark::O;

    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Cell holds a mark.
    Occupied(Mark),
}

/// A (row, column) coordinate.
///
/// Construction does not range-check; [`Board::place`] rejects coordinates
/// outside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    row: usize,
    col: usize,
}

impl Move {
    /// Creates a move at the given row and column.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row index (0 is the top row).
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column index (0 is the left column).
    pub fn col(&self) -> usize {
        self.col
    }

    /// Returns true if both coordinates lie on the board.
    pub fn in_bounds(&self) -> bool {
        self.row < SIZE && self.col < SIZE
    }

    fn index(&self) -> usize {
        self.row * SIZE + self.col
    }

    fn from_index(index: usize) -> Self {
        Self::new(index / SIZE, index % SIZE)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.row, self.col)
    }
}

/// Parses `"<row> <col>"`, two integers separated by whitespace.
impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        let &[row, col] = tokens.as_slice() else {
            return Err(ParseMoveError::WrongCount {
                found: tokens.len(),
            });
        };

        let parse = |token: &str| {
            token.parse::<i64>().map_err(|_| ParseMoveError::NotANumber {
                token: token.to_string(),
            })
        };
        let (row, col) = (parse(row)?, parse(col)?);

        let on_board = |v: i64| (0..SIZE as i64).contains(&v);
        if !on_board(row) || !on_board(col) {
            return Err(ParseMoveError::OutOfRange { row, col });
        }

        Ok(Move::new(row as usize, col as usize))
    }
}

/// Derived status of a board. Never stored; see [`Board::outcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// The human (`X`) has three in a row.
    HumanWins,
    /// The computer (`O`) has three in a row.
    ComputerWins,
    /// The board is full with no winner.
    Draw,
    /// The game continues.
    InProgress,
}

impl GameOutcome {
    /// Returns true unless the game is still in progress.
    pub fn is_terminal(self) -> bool {
        self != GameOutcome::InProgress
    }

    /// Returns the winning mark, if any.
    pub fn winner(self) -> Option<Mark> {
        match self {
            GameOutcome::HumanWins => Some(Mark::HUMAN),
            GameOutcome::ComputerWins => Some(Mark::COMPUTER),
            GameOutcome::Draw | GameOutcome::InProgress => None,
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; SIZE * SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cell at `mv`, or `None` if it is off the board.
    pub fn cell(&self, mv: Move) -> Option<Cell> {
        mv.in_bounds().then(|| self.cells[mv.index()])
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; SIZE * SIZE] {
        &self.cells
    }

    /// Checks that `mv` names an empty cell on the board.
    pub fn validate(&self, mv: Move) -> Result<(), MoveError> {
        match self.cell(mv) {
            None => Err(MoveError::OutOfRange {
                row: mv.row,
                col: mv.col,
            }),
            Some(Cell::Occupied(_)) => Err(MoveError::Occupied {
                row: mv.row,
                col: mv.col,
            }),
            Some(Cell::Empty) => Ok(()),
        }
    }

    /// Places `mark` at `mv`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] or [`MoveError::Occupied`] and leaves
    /// the board untouched.
    #[instrument(level = "trace", skip(self))]
    pub fn place(&mut self, mv: Move, mark: Mark) -> Result<(), MoveError> {
        self.validate(mv)?;
        self.cells[mv.index()] = Cell::Occupied(mark);
        Ok(())
    }

    /// Overwrites a cell without validation. `mv` must be on the board.
    pub(crate) fn set(&mut self, mv: Move, cell: Cell) {
        self.cells[mv.index()] = cell;
    }

    /// Resets the cell at `mv` to empty.
    ///
    /// Only meant for undoing a placement this caller just made; off-board
    /// coordinates are ignored.
    pub fn clear(&mut self, mv: Move) {
        if mv.in_bounds() {
            self.cells[mv.index()] = Cell::Empty;
        }
    }

    /// Returns true if `mark` fills any row, column, or diagonal.
    pub fn has_won(&self, mark: Mark) -> bool {
        rules::has_won(self, mark)
    }

    /// Returns true if no cell is empty.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Empty coordinates in row-major order.
    pub fn empty_cells(&self) -> Vec<Move> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(i, _)| Move::from_index(i))
            .collect()
    }

    /// Derives the game outcome from the current cells.
    pub fn outcome(&self) -> GameOutcome {
        rules::outcome(self)
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Occupied(mark))
            .count()
    }

    /// Returns a copy with every `X` turned into `O` and vice versa.
    pub fn swapped(&self) -> Self {
        let mut cells = self.cells;
        for cell in cells.iter_mut() {
            if let Cell::Occupied(mark) = *cell {
                *cell = Cell::Occupied(mark.opponent());
            }
        }
        Self { cells }
    }
}

/// Compact notation: rows joined by `/`, empty cells as `.`.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 && i % SIZE == 0 {
                write!(f, "/")?;
            }
            let symbol = match cell {
                Cell::Empty => '.',
                Cell::Occupied(Mark::X) => 'X',
                Cell::Occupied(Mark::O) => 'O',
            };
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

/// Parses nine cells in row-major order.
///
/// `X`/`x` and `O`/`o` are marks; `.`, `-`, and `_` are empty. Whitespace,
/// `|`, and `/` are ignored so `"XO./.X./..."` and `"X O . | . X . | . . ."`
/// both work.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|ch| !ch.is_whitespace() && !matches!(ch, '|' | '/'))
            .map(|ch| match ch {
                'X' | 'x' => Ok(Cell::Occupied(Mark::X)),
                'O' | 'o' => Ok(Cell::Occupied(Mark::O)),
                '.' | '-' | '_' => Ok(Cell::Empty),
                other => Err(ParseBoardError::BadCell { ch: other }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let found = cells.len();
        let cells: [Cell; SIZE * SIZE] = cells
            .try_into()
            .map_err(|_| ParseBoardError::WrongLength { found })?;

        Ok(Self { cells })
    }
}
