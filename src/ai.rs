//! Computer opponent: one-ply win/block checks, then a scored search.

use crate::board::{Board, Player, Position};
use crate::constants::*;
use crate::error::MoveError;
use crate::rules::{check_win, ThreatLevel};
use crate::scan::scan_all;
use log::{debug, trace};
use rand::seq::SliceRandom;
use rand::Rng;

/// Which priority tier produced the chosen move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Win,
    Block,
    Scored,
}

/// Breakdown of a candidate cell's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellScore {
    pub attack: i32,
    pub defense: i32,
    pub center: i32,
}

impl CellScore {
    /// attack + 1.2 * defense + center, in tenths.
    pub fn total_tenths(&self) -> i64 {
        self.attack as i64 * SCORE_TENTHS
            + self.defense as i64 * DEFENSE_TENTHS
            + self.center as i64 * SCORE_TENTHS
    }

    /// Total score as a plain number, for display.
    pub fn total(&self) -> f64 {
        self.total_tenths() as f64 / SCORE_TENTHS as f64
    }
}

/// Pick a cell for `me`. Fails with `GameAlreadyOver` on a full board.
///
/// The board is probed with hypothetical stones and is unchanged on return.
pub fn choose_move<R: Rng>(
    board: &mut Board,
    me: Player,
    rng: &mut R,
) -> Result<Position, MoveError> {
    choose_move_with_tier(board, me, rng).map(|(pos, _)| pos)
}

/// Like [`choose_move`], also reporting which tier decided.
pub fn choose_move_with_tier<R: Rng>(
    board: &mut Board,
    me: Player,
    rng: &mut R,
) -> Result<(Position, Tier), MoveError> {
    if board.is_full() {
        return Err(MoveError::GameAlreadyOver);
    }

    if let Some(pos) = find_winning_move(board, me)? {
        debug!("{:?} takes winning cell {:?}", me, pos);
        return Ok((pos, Tier::Win));
    }

    if let Some(pos) = find_winning_move(board, me.opponent())? {
        debug!("{:?} blocks {:?} at {:?}", me, me.opponent(), pos);
        return Ok((pos, Tier::Block));
    }

    let best_moves = best_scored_cells(board, me);
    trace!("{} cells share the top score", best_moves.len());

    let pos = match best_moves.choose(rng).copied() {
        Some(pos) => pos,
        None => board.empty_cells().next().ok_or(MoveError::GameAlreadyOver)?,
    };
    debug!("{:?} plays scored cell {:?}", me, pos);
    Ok((pos, Tier::Scored))
}

/// First empty cell, in row-major order, where `player` would complete five.
pub fn find_winning_move(
    board: &mut Board,
    player: Player,
) -> Result<Option<Position>, MoveError> {
    let candidates: Vec<Position> = board.empty_cells().collect();
    for pos in candidates {
        let wins = board.with_hypothetical(pos, player, |b| {
            check_win(b, pos, player).is_some()
        })?;
        if wins {
            return Ok(Some(pos));
        }
    }
    Ok(None)
}

/// Sum of threat weights over the four axes if `player` stood on `pos`.
pub fn line_weight(board: &Board, pos: Position, player: Player) -> i32 {
    scan_all(board, pos, player)
        .into_iter()
        .map(|scan| ThreatLevel::from(scan).weight())
        .sum()
}

/// Pull toward the middle: 2N minus the Manhattan distance to the center.
pub fn center_bonus(pos: Position) -> i32 {
    let dist = pos.row.abs_diff(CENTER) + pos.col.abs_diff(CENTER);
    CENTER_PULL - dist as i32
}

/// Attack, defense and center components for `me` playing `pos`.
pub fn score_cell(board: &Board, pos: Position, me: Player) -> CellScore {
    CellScore {
        attack: line_weight(board, pos, me),
        defense: line_weight(board, pos, me.opponent()),
        center: center_bonus(pos),
    }
}

/// Every empty cell attaining the maximum score, in row-major order.
pub fn best_scored_cells(board: &Board, me: Player) -> Vec<Position> {
    let mut best_moves = Vec::new();
    let mut best_score = i64::MIN;

    for pos in board.empty_cells() {
        let score = score_cell(board, pos, me).total_tenths();
        if score > best_score {
            best_score = score;
            best_moves.clear();
            best_moves.push(pos);
        } else if score == best_score {
            best_moves.push(pos);
        }
    }

    best_moves
}
