//! Game session: the place -> check win -> check draw -> advance sequence.

use crate::ai;
use crate::board::{Board, Move, Player, Position};
use crate::error::MoveError;
use crate::rules::{check_draw, check_win, run_alert, RunAlert, WinLine};
use crate::turn::TurnController;
use log::{debug, info};
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    PlayerVsPlayer,
    /// Human plays Black, the computer plays White
    PlayerVsComputer,
}

impl GameMode {
    /// Color played by the computer, if any.
    pub fn computer_player(&self) -> Option<Player> {
        match self {
            GameMode::PlayerVsPlayer => None,
            GameMode::PlayerVsComputer => Some(Player::White),
        }
    }
}

/// What a committed placement led to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    Continued(Player),
    Won(Player, WinLine),
    Drawn,
}

impl MoveOutcome {
    /// True for a win or a draw.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, MoveOutcome::Continued(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won { winner: Player, line: WinLine },
    Drawn,
}

/// One game from first stone to win or draw. Never restarted; build a new one instead.
#[derive(Debug, Clone)]
pub struct Session {
    mode: GameMode,
    board: Board,
    turns: TurnController,
    status: GameStatus,
    last_move: Option<Position>,
    last_alert: Option<RunAlert>,
    history: Vec<Move>,
}

impl Session {
    /// Start a fresh game with Black to move.
    pub fn new(mode: GameMode) -> Self {
        info!("new {:?} session", mode);
        Self {
            mode,
            board: Board::new(),
            turns: TurnController::new(),
            status: GameStatus::InProgress,
            last_move: None,
            last_alert: None,
            history: Vec::new(),
        }
    }

    /// Mode this session was created with.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Current board snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whose turn it is (frozen on the last mover once the game ends).
    pub fn current_player(&self) -> Player {
        self.turns.current()
    }

    /// In progress, won, or drawn.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// True once the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Last committed position, for highlighting.
    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    /// Three/four notice raised by the most recent move, if any.
    pub fn last_alert(&self) -> Option<RunAlert> {
        self.last_alert
    }

    /// Committed moves in play order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// True when the computer should be asked for a move.
    pub fn is_computer_turn(&self) -> bool {
        !self.is_over() && self.mode.computer_player() == Some(self.current_player())
    }

    /// Validate and commit a stone for `player` at `pos`.
    pub fn attempt_move(
        &mut self,
        pos: Position,
        player: Player,
    ) -> Result<MoveOutcome, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameAlreadyOver);
        }
        let expected = self.current_player();
        if player != expected {
            return Err(MoveError::NotPlayersTurn {
                expected,
                attempted: player,
            });
        }

        self.board.place(pos, player)?;
        self.last_move = Some(pos);
        self.history.push(Move { pos, player });
        debug!("{:?} placed at ({}, {})", player, pos.row, pos.col);

        if let Some(line) = check_win(&self.board, pos, player) {
            info!("{:?} wins on move {}", player, self.history.len());
            self.last_alert = None;
            self.turns.freeze();
            self.status = GameStatus::Won {
                winner: player,
                line: line.clone(),
            };
            return Ok(MoveOutcome::Won(player, line));
        }

        self.last_alert = run_alert(&self.board, pos, player);

        if check_draw(&self.board) {
            info!("board full, game drawn");
            self.turns.freeze();
            self.status = GameStatus::Drawn;
            return Ok(MoveOutcome::Drawn);
        }

        Ok(MoveOutcome::Continued(self.turns.advance()))
    }

    /// Ask the computer for its cell without committing it.
    pub fn computer_move<R: Rng>(&mut self, rng: &mut R) -> Result<Position, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameAlreadyOver);
        }
        let current = self.current_player();
        let computer = match self.mode.computer_player() {
            Some(computer) if computer == current => computer,
            Some(computer) => {
                return Err(MoveError::NotPlayersTurn {
                    expected: current,
                    attempted: computer,
                })
            }
            None => {
                return Err(MoveError::NotPlayersTurn {
                    expected: current,
                    attempted: current.opponent(),
                })
            }
        };
        ai::choose_move(&mut self.board, computer, rng)
    }

    /// Choose and commit the computer's move.
    pub fn play_computer_turn<R: Rng>(
        &mut self,
        rng: &mut R,
    ) -> Result<(Position, MoveOutcome), MoveError> {
        let pos = self.computer_move(rng)?;
        let outcome = self.attempt_move(pos, self.current_player())?;
        Ok((pos, outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_new_session() {
        let session = Session::new(GameMode::PlayerVsPlayer);
        assert_eq!(session.current_player(), Player::Black);
        assert!(!session.is_over());
        assert!(session.last_move().is_none());
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_move_advances_turn() {
        let mut session = Session::new(GameMode::PlayerVsPlayer);
        let outcome = session.attempt_move(Position::new(7, 7), Player::Black).unwrap();
        assert_eq!(outcome, MoveOutcome::Continued(Player::White));
        assert_eq!(session.last_move(), Some(Position::new(7, 7)));
        assert_eq!(session.current_player(), Player::White);
    }

    #[test]
    fn test_wrong_player_rejected() {
        let mut session = Session::new(GameMode::PlayerVsPlayer);
        assert_eq!(
            session.attempt_move(Position::new(0, 0), Player::White),
            Err(MoveError::NotPlayersTurn {
                expected: Player::Black,
                attempted: Player::White
            })
        );
        assert_eq!(session.board().stone_count(), 0);
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut session = Session::new(GameMode::PlayerVsPlayer);
        session.attempt_move(Position::new(7, 7), Player::Black).unwrap();
        assert_eq!(
            session.attempt_move(Position::new(7, 7), Player::White),
            Err(MoveError::CellOccupied { row: 7, col: 7 })
        );
        assert_eq!(
            session.attempt_move(Position::new(7, 15), Player::White),
            Err(MoveError::OutOfBounds { row: 7, col: 15 })
        );
        assert_eq!(session.current_player(), Player::White);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_alert_on_three() {
        let mut session = Session::new(GameMode::PlayerVsPlayer);
        for (i, col) in [5, 6, 7].into_iter().enumerate() {
            session.attempt_move(Position::new(7, col), Player::Black).unwrap();
            if i < 2 {
                session.attempt_move(Position::new(0, col), Player::White).unwrap();
            }
        }
        assert_eq!(session.last_alert(), Some(RunAlert::Three));
    }

    #[test]
    fn test_computer_move_rejected_in_pvp() {
        let mut session = Session::new(GameMode::PlayerVsPlayer);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(matches!(
            session.computer_move(&mut rng),
            Err(MoveError::NotPlayersTurn { .. })
        ));
    }

    #[test]
    fn test_computer_move_needs_whites_turn() {
        let mut session = Session::new(GameMode::PlayerVsComputer);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(!session.is_computer_turn());
        assert_eq!(
            session.computer_move(&mut rng),
            Err(MoveError::NotPlayersTurn {
                expected: Player::Black,
                attempted: Player::White
            })
        );

        session.attempt_move(Position::new(7, 7), Player::Black).unwrap();
        assert!(session.is_computer_turn());
        let (pos, outcome) = session.play_computer_turn(&mut rng).unwrap();
        assert_eq!(outcome, MoveOutcome::Continued(Player::Black));
        assert_eq!(session.last_move(), Some(pos));
        assert_eq!(session.board().stone_count(), 2);
    }

    #[test]
    fn test_mode_computer_color() {
        assert_eq!(GameMode::PlayerVsComputer.computer_player(), Some(Player::White));
        assert_eq!(GameMode::PlayerVsPlayer.computer_player(), None);
    }
}
