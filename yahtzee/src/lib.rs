//! Five dices, thirteen combinations, one append-only event log.
//!
//! Player intents come in as [`Command`]s, get validated against the
//! replayed [`Board`] state and, when accepted, turn into [`Event`]s.
//! Board state is never written directly: it is always a fold over the
//! event history.

use serde_derive::{Deserialize, Serialize};
use uuid::Uuid;

pub mod statemachine;

mod app;
pub use app::{execute, game_views, get_game};

mod board;
pub use board::{Board, GameStatus, NextTurn, PlayerTurn, Round, RoundNumber, MAX_ROLLS};

mod dice;
pub use dice::{Combination, DiceNumber, DicePosition, DiceValue, DieState, Dices};

mod game;
pub use game::Game;

mod player;
pub use player::Player;

mod scorecard;
pub use scorecard::{Category, Score, ScoreLine, Scorecard, UPPER_BONUS, UPPER_BONUS_THRESHOLD};

mod store;
pub use store::{EventStore, InMemoryEventStore};

mod views;
pub use views::{DiceView, GameViews, PlayerView, ScoreLineView, ScorecardView};

/// A player intent sent to a game.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub enum Command {
    CreateGame,
    AddPlayer {
        game: Uuid,
        player: String,
    },
    StartGame {
        game: Uuid,
    },
    RollDices {
        game: Uuid,
        player: String,
    },
    KeepDice {
        game: Uuid,
        player: String,
        number: DiceNumber,
    },
    Score {
        game: Uuid,
        player: String,
        combination: Combination,
    },
}

impl Command {
    /// The game a command targets; `CreateGame` allocates its own.
    pub fn game(&self) -> Option<Uuid> {
        match self {
            Command::CreateGame => None,
            Command::AddPlayer { game, .. }
            | Command::StartGame { game }
            | Command::RollDices { game, .. }
            | Command::KeepDice { game, .. }
            | Command::Score { game, .. } => Some(*game),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::CreateGame => "CreateGame",
            Command::AddPlayer { .. } => "AddPlayer",
            Command::StartGame { .. } => "StartGame",
            Command::RollDices { .. } => "RollDices",
            Command::KeepDice { .. } => "KeepDice",
            Command::Score { .. } => "Score",
        }
    }
}

/// An immutable fact recorded in a game's history. Events are append-only
/// and never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    GameCreated {
        game: Uuid,
    },
    PlayerAdded {
        player: String,
    },
    GameStarted,
    RollPerformed {
        attempt_nb: u8,
    },
    DicePositionChanged {
        number: DiceNumber,
        position: DicePosition,
        value: DiceValue,
    },
    PointsScored {
        player: String,
        category: Category,
        points: Score,
    },
    TurnChanged {
        new_player: String,
        round_number: RoundNumber,
    },
    GameEnded,
    /// Diagnostic side-log entry for a rejected command; not part of any
    /// game's domain history.
    ErrorRaised {
        message: String,
    },
}

/// Payload of an accepted command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum CommandOutcome {
    Created { game: Uuid },
    Accepted,
}

/// Why a command was rejected.
///
/// All variants but [`CommandError::Unhandled`] are domain rejections:
/// expected, recoverable, and first-class values the caller branches on.
/// `Unhandled` flags a caller wiring bug.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CommandError {
    #[error("Unhandled command {command} for a {status:?} game")]
    Unhandled {
        command: &'static str,
        status: GameStatus,
    },
    #[error("A player named {0} already exists")]
    PlayerAlreadyInGame(String),
    #[error("You can't start a game without any player")]
    NoPlayers,
    #[error("{0} is not part of this game")]
    UnknownPlayer(String),
    #[error("{0}, it's not your turn to play")]
    NotYourTurn(String),
    #[error("{0}, you already rolled the dices 3 times this turn")]
    NoRollsLeft(String),
    #[error("dice {0:?} is still in the cup")]
    DiceInTheCup(DiceNumber),
    #[error("you must roll the dices first")]
    MustRollFirst,
    #[error("you already scored {0}")]
    AlreadyScored(Combination),
}
