//! Gomoku (Five in a Row) board data structures.
//!
//! 15x15 grid of cells, Black moves first.

use crate::constants::BOARD_SIZE;
use crate::error::MoveError;
use serde::{Deserialize, Serialize};

/// Stone color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// The other color.
    pub fn opponent(&self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

/// Contents of a single intersection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    /// True if no stone is on the cell.
    pub fn is_empty(&self) -> bool {
        *self == Cell::Empty
    }

    /// True if the cell holds a stone of `player`.
    pub fn holds(&self, player: Player) -> bool {
        *self == Cell::from(player)
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

/// Board coordinate, 0-indexed (row, col)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Build a position; bounds are checked when it is used.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check if both coordinates are inside the 15x15 grid.
    pub fn is_on_board(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// The position `steps` cells away along `(dr, dc)`, or None once it leaves the board.
    pub fn step(&self, (dr, dc): (isize, isize), steps: usize) -> Option<Position> {
        let steps = steps as isize;
        let row = self.row as isize + dr * steps;
        let col = self.col as isize + dc * steps;
        if row < 0 || col < 0 || row >= BOARD_SIZE as isize || col >= BOARD_SIZE as isize {
            return None;
        }
        Some(Position::new(row as usize, col as usize))
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Position::new(row, col)
    }
}

/// A proposed placement: which player wants which cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub pos: Position,
    pub player: Player,
}

/// One of the four line axes through a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Horizontal,
    Vertical,
    DiagonalDown,
    DiagonalUp,
}

impl Direction {
    /// Fixed scan order; also the tie-break when one stone completes two fives.
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDown,
        Direction::DiagonalUp,
    ];

    /// (row_delta, col_delta) of the positive sense of this axis.
    pub fn delta(&self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDown => (1, 1),
            Direction::DiagonalUp => (1, -1),
        }
    }

    /// (row_delta, col_delta) of the negative sense of this axis.
    pub fn reversed(&self) -> (isize, isize) {
        let (dr, dc) = self.delta();
        (-dr, -dc)
    }
}

/// The 15x15 grid. Mutated only through [`Board::place`] and hypothetical probes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Cell contents, or `OutOfBounds` if `pos` is off the grid.
    pub fn get(&self, pos: Position) -> Result<Cell, MoveError> {
        if !pos.is_on_board() {
            return Err(MoveError::OutOfBounds {
                row: pos.row,
                col: pos.col,
            });
        }
        Ok(self.cells[pos.row][pos.col])
    }

    /// Place a stone. Turn order is not this type's concern.
    pub fn place(&mut self, pos: Position, player: Player) -> Result<(), MoveError> {
        if !self.get(pos)?.is_empty() {
            return Err(MoveError::CellOccupied {
                row: pos.row,
                col: pos.col,
            });
        }
        self.cells[pos.row][pos.col] = Cell::from(player);
        Ok(())
    }

    /// Check if the board is full (draw condition).
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// Number of stones of either color on the board.
    pub fn stone_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| !cell.is_empty()).count()
    }

    /// Empty positions in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::new(row, col)))
            .filter(|pos| self.cells[pos.row][pos.col].is_empty())
    }

    /// Raw grid, row by row.
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Temporarily put `player` on the empty cell `pos`, run `probe`, then clear the cell.
    ///
    /// The probe only sees a shared borrow, so the board is back to its prior
    /// contents when this returns.
    pub fn with_hypothetical<T>(
        &mut self,
        pos: Position,
        player: Player,
        probe: impl FnOnce(&Board) -> T,
    ) -> Result<T, MoveError> {
        self.place(pos, player)?;
        let result = probe(self);
        self.cells[pos.row][pos.col] = Cell::Empty;
        Ok(result)
    }
}
