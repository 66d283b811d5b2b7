//! Two-state turn machine: Black to move / White to move.

use crate::board::Player;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnState {
    BlackToMove,
    WhiteToMove,
}

/// Strict alternation, Black first, no passes. Freezes once the game ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnController {
    state: TurnState,
    frozen: bool,
}

impl Default for TurnController {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnController {
    /// Black to move, not frozen.
    pub fn new() -> Self {
        Self {
            state: TurnState::BlackToMove,
            frozen: false,
        }
    }

    /// Current state of the machine.
    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Player on move.
    pub fn current(&self) -> Player {
        match self.state {
            TurnState::BlackToMove => Player::Black,
            TurnState::WhiteToMove => Player::White,
        }
    }

    /// True once a win or draw has locked the turn.
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Hand the move to the other player after a non-terminal placement.
    /// Returns the player now on move. No-op once frozen.
    pub fn advance(&mut self) -> Player {
        if !self.frozen {
            self.state = match self.state {
                TurnState::BlackToMove => TurnState::WhiteToMove,
                TurnState::WhiteToMove => TurnState::BlackToMove,
            };
        }
        self.current()
    }

    /// Lock the machine after a win or draw.
    pub fn freeze(&mut self) {
        self.frozen = true;
    }
}
