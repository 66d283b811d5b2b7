//! Win/draw detection and threat classification.

use crate::board::{Board, Direction, Player, Position};
use crate::constants::*;
use crate::scan::{run_positions, scan_all, LineScan};
use serde::{Deserialize, Serialize};

/// The cells of a detected five (or longer), placed stone first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinLine {
    pub direction: Direction,
    pub cells: Vec<Position>,
}

impl WinLine {
    /// Number of cells in the run (five or more).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check if `pos` is part of the winning run.
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }
}

/// Check whether the stone at `pos` gives `player` five or more in a row.
/// Assumes the stone is already on the board (committed or hypothetical).
///
/// Axes are tried in [`Direction::ALL`] order and the first qualifying one is
/// reported.
pub fn check_win(board: &Board, pos: Position, player: Player) -> Option<WinLine> {
    Direction::ALL.into_iter().find_map(|direction| {
        let cells = run_positions(board, pos, player, direction, WIN_REACH);
        (cells.len() >= WIN_LENGTH).then_some(WinLine { direction, cells })
    })
}

/// Board full. Only meaningful after the win check on the same placement came back empty.
pub fn check_draw(board: &Board) -> bool {
    board.is_full()
}

/// Named buckets for a run, keyed by (count, open ends).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThreatLevel {
    Five,
    /// Four with at least one open end
    OpenFour,
    OpenThree,
    BlockedThree,
    OpenTwo,
    BlockedTwo,
    None,
}

impl ThreatLevel {
    /// Scoring weight used by the computer opponent.
    pub fn weight(&self) -> i32 {
        match self {
            ThreatLevel::Five => WEIGHT_FIVE,
            ThreatLevel::OpenFour => WEIGHT_FOUR,
            ThreatLevel::OpenThree => WEIGHT_OPEN_THREE,
            ThreatLevel::BlockedThree => WEIGHT_BLOCKED_THREE,
            ThreatLevel::OpenTwo => WEIGHT_OPEN_TWO,
            ThreatLevel::BlockedTwo => WEIGHT_BLOCKED_TWO,
            ThreatLevel::None => 0,
        }
    }
}

/// Bucket a run by its length and open ends.
pub fn classify_threat(count: usize, open_ends: usize) -> ThreatLevel {
    match (count, open_ends) {
        (c, _) if c >= WIN_LENGTH => ThreatLevel::Five,
        (4, o) if o >= 1 => ThreatLevel::OpenFour,
        (3, 2) => ThreatLevel::OpenThree,
        (3, 1) => ThreatLevel::BlockedThree,
        (2, 2) => ThreatLevel::OpenTwo,
        (2, 1) => ThreatLevel::BlockedTwo,
        _ => ThreatLevel::None,
    }
}

impl From<LineScan> for ThreatLevel {
    fn from(scan: LineScan) -> Self {
        classify_threat(scan.count, scan.open_ends)
    }
}

/// Post-move notice raised when the mover's longest run through the placed
/// stone is exactly three or exactly four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunAlert {
    Three,
    Four,
}

/// Longest contiguous run of `player` through `pos` over all four axes.
pub fn max_run(board: &Board, pos: Position, player: Player) -> usize {
    scan_all(board, pos, player)
        .iter()
        .map(|s| s.count)
        .max()
        .unwrap_or(1)
}

/// At most one alert per move, from the single longest run.
pub fn run_alert(board: &Board, pos: Position, player: Player) -> Option<RunAlert> {
    match max_run(board, pos, player) {
        4 => Some(RunAlert::Four),
        3 => Some(RunAlert::Three),
        _ => None,
    }
}
