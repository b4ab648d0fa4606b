use crate::scorecard::{Category, Score, Scorecard};

/// A player of a game, identified by name, owning their scorecard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub scorecard: Scorecard,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scorecard: Scorecard::new(),
        }
    }

    pub fn score(&self) -> Score {
        self.scorecard.score()
    }

    pub fn can_score(&self, category: Category) -> bool {
        !self.scorecard.is_scored(category)
    }
}
