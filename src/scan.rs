//! Directional line scanning shared by win detection and move scoring.

use crate::board::{Board, Direction, Player, Position};
use crate::constants::BOARD_SIZE;
use serde::{Deserialize, Serialize};

/// Result of scanning one axis through a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineScan {
    /// Stones in the run, counting the cell itself
    pub count: usize,
    /// How many of the two run ends border an empty in-bounds cell (0..=2)
    pub open_ends: usize,
}

/// Scan the axis `direction` through `pos` as if `player` stands on `pos`.
///
/// The cell at `pos` is always counted, whatever it holds, so this works for
/// committed stones and for candidate cells alike. Never mutates the board.
pub fn scan(board: &Board, pos: Position, player: Player, direction: Direction) -> LineScan {
    let mut count = 1;
    let mut open_ends = 0;

    for delta in [direction.delta(), direction.reversed()] {
        let run = run_length(board, pos, player, delta, BOARD_SIZE);
        count += run;
        if is_open(board, pos.step(delta, run + 1)) {
            open_ends += 1;
        }
    }

    LineScan { count, open_ends }
}

/// Scans of all four axes, in [`Direction::ALL`] order.
pub fn scan_all(board: &Board, pos: Position, player: Player) -> [LineScan; 4] {
    Direction::ALL.map(|direction| scan(board, pos, player, direction))
}

/// Positions of the run through `pos` on one axis, walking at most `reach`
/// cells each way. `pos` comes first, then the positive side outward, then
/// the negative side outward.
pub fn run_positions(
    board: &Board,
    pos: Position,
    player: Player,
    direction: Direction,
    reach: usize,
) -> Vec<Position> {
    let mut line = vec![pos];
    for delta in [direction.delta(), direction.reversed()] {
        let run = run_length(board, pos, player, delta, reach);
        line.extend((1..=run).filter_map(|i| pos.step(delta, i)));
    }
    line
}

/// Contiguous `player` stones beyond `pos` along `delta`, excluding `pos`.
fn run_length(
    board: &Board,
    pos: Position,
    player: Player,
    delta: (isize, isize),
    limit: usize,
) -> usize {
    (1..=limit)
        .take_while(|&i| {
            matches!(pos.step(delta, i), Some(next) if holds(board, next, player))
        })
        .count()
}

fn holds(board: &Board, pos: Position, player: Player) -> bool {
    board.rows()[pos.row][pos.col].holds(player)
}

fn is_open(board: &Board, pos: Option<Position>) -> bool {
    pos.is_some_and(|p| board.rows()[p.row][p.col].is_empty())
}
