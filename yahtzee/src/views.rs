//! Display-friendly projections of board state. Read-only plumbing, no
//! game rules live here.

use serde_derive::Serialize;

use crate::{
    board::Board,
    dice::{DiceNumber, DicePosition, DiceValue},
    player::Player,
    scorecard::Score,
};

#[derive(Debug, Clone, Serialize)]
pub struct ScoreLineView {
    pub category: &'static str,
    pub score: Option<Score>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScorecardView {
    pub lines: Vec<ScoreLineView>,
    pub upper_section_total: Score,
    pub total: Score,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerView {
    pub name: String,
    pub scorecard: ScorecardView,
}

#[derive(Debug, Clone, Serialize)]
pub struct DiceView {
    pub number: DiceNumber,
    pub position: DicePosition,
    pub value: Option<DiceValue>,
}

/// Query layer over a board snapshot.
pub struct GameViews {
    board: Board,
}

impl GameViews {
    pub fn of(board: Board) -> Self {
        Self { board }
    }

    pub fn players(&self) -> Vec<PlayerView> {
        self.board.players.iter().map(player_view).collect()
    }

    pub fn player(&self, name: &str) -> Option<PlayerView> {
        self.board.get_player(name).map(player_view)
    }

    pub fn current_player(&self) -> Option<PlayerView> {
        self.board.playing_player().map(player_view)
    }

    pub fn dices(&self) -> Vec<DiceView> {
        self.board
            .dices
            .iter()
            .map(|(number, state)| DiceView {
                number,
                position: state.position(),
                value: state.value(),
            })
            .collect()
    }
}

fn player_view(player: &Player) -> PlayerView {
    PlayerView {
        name: player.name.clone(),
        scorecard: ScorecardView {
            lines: player
                .scorecard
                .lines()
                .iter()
                .map(|line| ScoreLineView {
                    category: line.category.name(),
                    score: line.score,
                })
                .collect(),
            upper_section_total: player.scorecard.upper_section_score(),
            total: player.scorecard.score(),
        },
    }
}
