use core::fmt;

use crate::{
    board::{Board, BoardPhase},
    common::{ShotError, ShotResult},
    config::PLAYER_NAMES,
    coord::Coordinate,
};

/// One of the two seats at the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub const BOTH: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    pub fn name(self) -> &'static str {
        PLAYER_NAMES[self.index()]
    }

    pub fn opponent(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Turn state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Player1Turn,
    Player2Turn,
    GameOver { winner: PlayerId },
}

/// Errors returned by [`GameSession::fire`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// A winner has already been declared.
    GameOver,
    /// The given player still has ships to place.
    SetupIncomplete(PlayerId),
    /// The target board refused the shot.
    Shot(ShotError),
}

impl From<ShotError> for GameError {
    fn from(err: ShotError) -> Self {
        GameError::Shot(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::GameOver => write!(f, "The game is already over"),
            GameError::SetupIncomplete(p) => write!(f, "{} has not placed all ships yet", p),
            GameError::Shot(e) => write!(f, "{}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}

/// Two boards and the alternating turn between them.
pub struct GameSession {
    boards: [Board; 2],
    state: GameState,
}

impl GameSession {
    /// Fresh session with two standard boards; player 1 fires first.
    pub fn new() -> Self {
        Self::with_boards(Board::new(), Board::new())
    }

    pub fn with_boards(player1: Board, player2: Board) -> Self {
        Self {
            boards: [player1, player2],
            state: GameState::Player1Turn,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn board(&self, player: PlayerId) -> &Board {
        &self.boards[player.index()]
    }

    /// Mutable access to a player's own board, for ship placement.
    pub fn board_mut(&mut self, player: PlayerId) -> &mut Board {
        &mut self.boards[player.index()]
    }

    /// Player whose turn it is, `None` once the game is over.
    pub fn active_player(&self) -> Option<PlayerId> {
        match self.state {
            GameState::Player1Turn => Some(PlayerId::One),
            GameState::Player2Turn => Some(PlayerId::Two),
            GameState::GameOver { .. } => None,
        }
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self.state {
            GameState::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    /// Fire the active player's shot at the opponent's board.
    ///
    /// A refused shot keeps the turn; a resolved one passes it, or ends the
    /// game when the opponent's fleet is gone.
    pub fn fire(&mut self, target: Coordinate) -> Result<ShotResult, GameError> {
        let shooter = self.active_player().ok_or(GameError::GameOver)?;
        for player in PlayerId::BOTH {
            if self.board(player).phase() == BoardPhase::Setup {
                return Err(GameError::SetupIncomplete(player));
            }
        }

        let defender = shooter.opponent();
        let result = self.boards[defender.index()].receive_shot(target)?;
        self.state = if self.board(defender).is_defeated() {
            log::info!("{} sank the last ship of {}", shooter, defender);
            GameState::GameOver { winner: shooter }
        } else {
            match defender {
                PlayerId::One => GameState::Player1Turn,
                PlayerId::Two => GameState::Player2Turn,
            }
        };
        Ok(result)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
