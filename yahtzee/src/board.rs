use serde_derive::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    dice::{DieState, Dices},
    player::Player,
    Event,
};

pub type RoundNumber = u32;

/// Rolls a player may use within a single turn.
pub const MAX_ROLLS: u8 = 3;

/// The turn of one player and the rolls they used so far.
///
/// `player` indexes into the board's player list; `None` means no player
/// is up, either because the game has not started or because it is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerTurn {
    pub player: Option<usize>,
    pub attempted_rolls: u8,
}

impl PlayerTurn {
    pub fn null() -> Self {
        Self {
            player: None,
            attempted_rolls: 0,
        }
    }

    fn of(player: usize) -> Self {
        Self {
            player: Some(player),
            attempted_rolls: 0,
        }
    }

    pub fn can_reroll(&self) -> bool {
        self.attempted_rolls < MAX_ROLLS
    }
}

/// Outcome of advancing past the current player's turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextTurn {
    Turn {
        player: String,
        round_number: RoundNumber,
    },
    GameOver,
}

/// A single game round: one full pass over the players in join order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub number: RoundNumber,
    pub turn: PlayerTurn,
}

impl Round {
    /// The round of a game that has not started yet.
    pub fn zero() -> Self {
        Self {
            number: 0,
            turn: PlayerTurn::null(),
        }
    }

    pub fn from_players(players: &[Player], number: RoundNumber, current: Option<usize>) -> Self {
        if players.is_empty() {
            return Self {
                number,
                turn: PlayerTurn::null(),
            };
        }
        Self {
            number,
            turn: PlayerTurn::of(current.unwrap_or(0)),
        }
    }

    fn ended(number: RoundNumber) -> Self {
        Self {
            number,
            turn: PlayerTurn::null(),
        }
    }

    pub fn with_attempt(&self, attempt_nb: u8) -> Self {
        Self {
            number: self.number,
            turn: PlayerTurn {
                player: self.turn.player,
                attempted_rolls: attempt_nb,
            },
        }
    }

    pub fn can_reroll(&self) -> bool {
        self.turn.can_reroll()
    }

    pub fn current_player(&self) -> Option<usize> {
        self.turn.player
    }

    /// Who plays after the current player scored.
    ///
    /// Turn order is the join order. When the last player of the list
    /// finishes with a complete scorecard the game is over, otherwise a
    /// new round starts at the first player.
    pub fn advance(&self, players: &[Player]) -> NextTurn {
        let current = match self.turn.player {
            Some(current) => current,
            None => return NextTurn::GameOver,
        };

        if let Some(next) = players.get(current + 1) {
            return NextTurn::Turn {
                player: next.name.clone(),
                round_number: self.number,
            };
        }

        let last_is_done = players
            .get(current)
            .map(|player| player.scorecard.is_complete())
            .unwrap_or(true);
        match players.first() {
            Some(first) if !last_is_done => NextTurn::Turn {
                player: first.name.clone(),
                round_number: self.number + 1,
            },
            _ => NextTurn::GameOver,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    New,
    Pending,
    Started,
    Over,
}

/// Derived state of a game, reconstructible from its event log alone.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    pub game_id: Uuid,
    pub status: GameStatus,
    pub players: Vec<Player>,
    pub round: Round,
    pub dices: Dices,
    pub version: u64,
}

impl Board {
    pub fn new() -> Self {
        Self {
            game_id: Uuid::nil(),
            status: GameStatus::New,
            players: Vec::new(),
            round: Round::zero(),
            dices: Dices::new_cup(),
            version: 0,
        }
    }

    pub fn get_player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|player| player.name == name)
    }

    fn get_player_mut(&mut self, name: &str) -> Option<&mut Player> {
        self.players.iter_mut().find(|player| player.name == name)
    }

    /// The player whose turn it is, if any.
    pub fn playing_player(&self) -> Option<&Player> {
        self.round
            .current_player()
            .and_then(|index| self.players.get(index))
    }

    fn bump_version(&mut self) {
        self.version += 1;
    }

    /// The single state transition function: fold one event into the
    /// board. Events that do not belong to the domain history are
    /// ignored with a diagnostic.
    pub fn apply(&mut self, event: &Event) {
        match event {
            Event::GameCreated { game } => {
                self.game_id = *game;
                self.status = GameStatus::Pending;
                self.bump_version();
            }
            Event::PlayerAdded { player } => {
                self.players.push(Player::new(player.clone()));
                self.bump_version();
            }
            Event::GameStarted => {
                self.status = GameStatus::Started;
                self.round = Round::from_players(&self.players, 1, None);
                self.dices = Dices::new_cup();
                self.bump_version();
            }
            Event::RollPerformed { attempt_nb } => {
                self.round = self.round.with_attempt(*attempt_nb);
                self.bump_version();
            }
            Event::DicePositionChanged {
                number,
                position,
                value,
            } => {
                self.dices
                    .set(*number, DieState::from_parts(*position, *value));
                self.bump_version();
            }
            Event::PointsScored {
                player,
                category,
                points,
            } => match self.get_player_mut(player) {
                Some(target) => {
                    target.scorecard.set(*category, *points);
                    self.bump_version();
                }
                None => tracing::warn!("Points scored for unknown player {:?}", player),
            },
            Event::TurnChanged {
                new_player,
                round_number,
            } => match self.players.iter().position(|p| p.name == *new_player) {
                Some(index) => {
                    self.round = Round::from_players(&self.players, *round_number, Some(index));
                    // a fresh cup for the incoming player
                    self.dices = Dices::new_cup();
                    self.bump_version();
                }
                None => tracing::warn!("Turn changed to unknown player {:?}", new_player),
            },
            Event::GameEnded => {
                self.status = GameStatus::Over;
                self.round = Round::ended(self.round.number);
                self.bump_version();
            }
            other => {
                tracing::warn!("Unapplyable event {:?}", other);
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
