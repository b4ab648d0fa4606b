use std::fmt;

use serde_derive::{Deserialize, Serialize};

use crate::dice::Combination;

pub type Score = u32;

/// Upper section total required to earn the bonus.
pub const UPPER_BONUS_THRESHOLD: Score = 63;
/// Points granted once the threshold is reached.
pub const UPPER_BONUS: Score = 35;

/// Every line of a scorecard: the thirteen commandable combinations plus
/// the two bonus lines that are only ever derived, never scored directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Aces,
    Twos,
    Threes,
    Fours,
    Fives,
    Sixes,
    UpperSectionBonus,
    ThreeOfAKind,
    FourOfAKind,
    FullHouse,
    SmallStraight,
    LargeStraight,
    Yahtzee,
    Chance,
    YahtzeeBonus,
}

impl Category {
    pub const ALL: [Category; 15] = [
        Category::Aces,
        Category::Twos,
        Category::Threes,
        Category::Fours,
        Category::Fives,
        Category::Sixes,
        Category::UpperSectionBonus,
        Category::ThreeOfAKind,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::SmallStraight,
        Category::LargeStraight,
        Category::Yahtzee,
        Category::Chance,
        Category::YahtzeeBonus,
    ];

    /// Bonus pseudo-categories resolve from other lines and can not be
    /// scored by a command.
    pub fn is_bonus(&self) -> bool {
        matches!(self, Category::UpperSectionBonus | Category::YahtzeeBonus)
    }

    pub fn is_in_upper_section(&self) -> bool {
        matches!(
            self,
            Category::Aces
                | Category::Twos
                | Category::Threes
                | Category::Fours
                | Category::Fives
                | Category::Sixes
                | Category::UpperSectionBonus
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::Aces => "Aces",
            Category::Twos => "Twos",
            Category::Threes => "Threes",
            Category::Fours => "Fours",
            Category::Fives => "Fives",
            Category::Sixes => "Sixes",
            Category::UpperSectionBonus => "Upper Section Bonus",
            Category::ThreeOfAKind => "Three Of A Kind",
            Category::FourOfAKind => "Four Of A Kind",
            Category::FullHouse => "Full House",
            Category::SmallStraight => "Small Straight",
            Category::LargeStraight => "Large Straight",
            Category::Yahtzee => "Yahtzee",
            Category::Chance => "Chance",
            Category::YahtzeeBonus => "Yahtzee Bonus",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Combination> for Category {
    fn from(combination: Combination) -> Self {
        match combination {
            Combination::Aces => Category::Aces,
            Combination::Twos => Category::Twos,
            Combination::Threes => Category::Threes,
            Combination::Fours => Category::Fours,
            Combination::Fives => Category::Fives,
            Combination::Sixes => Category::Sixes,
            Combination::ThreeOfAKind => Category::ThreeOfAKind,
            Combination::FourOfAKind => Category::FourOfAKind,
            Combination::FullHouse => Category::FullHouse,
            Combination::SmallStraight => Category::SmallStraight,
            Combination::LargeStraight => Category::LargeStraight,
            Combination::Yahtzee => Category::Yahtzee,
            Combination::Chance => Category::Chance,
        }
    }
}

/// One line of a scorecard, unscored until a value is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreLine {
    pub category: Category,
    pub score: Option<Score>,
}

impl ScoreLine {
    fn unscored(category: Category) -> Self {
        Self {
            category,
            score: None,
        }
    }

    pub fn is_scored(&self) -> bool {
        self.score.is_some()
    }

    pub fn score_value(&self) -> Score {
        self.score.unwrap_or(0)
    }
}

/// Per-player record of scored categories.
///
/// The scorecard is a dumb record: it does not guard against scoring a
/// category twice, that check belongs to the command handlers. It does
/// own the upper section bonus rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scorecard {
    lines: Vec<ScoreLine>,
}

impl Scorecard {
    pub fn new() -> Self {
        Self {
            lines: Category::ALL.into_iter().map(ScoreLine::unscored).collect(),
        }
    }

    pub fn lines(&self) -> &[ScoreLine] {
        &self.lines
    }

    fn line(&self, category: Category) -> &ScoreLine {
        self.lines
            .iter()
            .find(|line| line.category == category)
            .expect("a scorecard holds a line for every category")
    }

    fn line_mut(&mut self, category: Category) -> &mut ScoreLine {
        self.lines
            .iter_mut()
            .find(|line| line.category == category)
            .expect("a scorecard holds a line for every category")
    }

    pub fn get(&self, category: Category) -> Option<Score> {
        self.line(category).score
    }

    pub fn is_scored(&self, category: Category) -> bool {
        self.line(category).is_scored()
    }

    /// Record a score on a line. Bonus lines are never set directly.
    pub fn set(&mut self, category: Category, score: Score) {
        assert!(
            !category.is_bonus(),
            "bonus lines resolve from the other lines"
        );
        self.line_mut(category).score = Some(score);
        self.update_upper_bonus();
    }

    /// Once the upper section reaches the threshold the bonus is worth 35
    /// points, permanently. Already-scored bonus lines are left alone.
    fn update_upper_bonus(&mut self) {
        if self.is_scored(Category::UpperSectionBonus) {
            return;
        }
        if self.upper_section_score() >= UPPER_BONUS_THRESHOLD {
            self.line_mut(Category::UpperSectionBonus).score = Some(UPPER_BONUS);
        }
    }

    pub fn upper_section_score(&self) -> Score {
        self.lines
            .iter()
            .filter(|line| line.category.is_in_upper_section())
            .map(ScoreLine::score_value)
            .sum()
    }

    pub fn score(&self) -> Score {
        self.lines.iter().map(ScoreLine::score_value).sum()
    }

    /// A scorecard is complete once every non-bonus category is scored;
    /// bonus lines resolve deterministically and may stay unscored.
    pub fn is_complete(&self) -> bool {
        self.lines
            .iter()
            .filter(|line| !line.category.is_bonus())
            .all(ScoreLine::is_scored)
    }
}

impl Default for Scorecard {
    fn default() -> Self {
        Self::new()
    }
}
