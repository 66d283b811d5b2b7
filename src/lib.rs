//! Gomoku - Five in a Row rule engine and computer opponent
//!
//! This crate holds the board, win/draw rules, turn order and the heuristic
//! opponent. Rendering and input handling live with the caller.

pub mod ai;
pub mod board;
pub mod constants;
pub mod error;
pub mod rules;
pub mod scan;
pub mod session;
pub mod turn;

pub use board::{Board, Cell, Direction, Move, Player, Position};
pub use constants::{BOARD_SIZE, WIN_LENGTH};
pub use error::MoveError;
pub use rules::{RunAlert, ThreatLevel, WinLine};
pub use session::{GameMode, GameStatus, MoveOutcome, Session};
pub use turn::{TurnController, TurnState};
