use std::fmt;

use serde_derive::{Deserialize, Serialize};

use crate::scorecard::Score;

/// Face of a die, 1 through 6.
pub type DiceValue = u8;

/// Identifies one of the five dices of a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiceNumber {
    One,
    Two,
    Three,
    Four,
    Five,
}

impl DiceNumber {
    pub const ALL: [DiceNumber; 5] = [
        DiceNumber::One,
        DiceNumber::Two,
        DiceNumber::Three,
        DiceNumber::Four,
        DiceNumber::Five,
    ];

    fn index(self) -> usize {
        match self {
            DiceNumber::One => 0,
            DiceNumber::Two => 1,
            DiceNumber::Three => 2,
            DiceNumber::Four => 3,
            DiceNumber::Five => 4,
        }
    }
}

/// Physical state of a die as recorded in the event log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DicePosition {
    InTheCup,
    OnTheTrack,
    Aside,
}

/// In-memory state of a single die.
///
/// A die still in the cup has not been rolled this turn and carries no
/// value; only rolled dices contribute to a combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DieState {
    InTheCup,
    OnTheTrack { value: DiceValue },
    Aside { value: DiceValue },
}

impl DieState {
    pub fn position(&self) -> DicePosition {
        match self {
            DieState::InTheCup => DicePosition::InTheCup,
            DieState::OnTheTrack { .. } => DicePosition::OnTheTrack,
            DieState::Aside { .. } => DicePosition::Aside,
        }
    }

    pub fn value(&self) -> Option<DiceValue> {
        match self {
            DieState::InTheCup => None,
            DieState::OnTheTrack { value } | DieState::Aside { value } => Some(*value),
        }
    }

    pub fn is_in_the_cup(&self) -> bool {
        matches!(self, DieState::InTheCup)
    }

    pub fn is_on_the_table(&self) -> bool {
        !self.is_in_the_cup()
    }

    /// Rebuilds a die state from the two fields of a `DicePositionChanged`
    /// event. The value of a die going back into the cup is dropped.
    pub fn from_parts(position: DicePosition, value: DiceValue) -> Self {
        match position {
            DicePosition::InTheCup => DieState::InTheCup,
            DicePosition::OnTheTrack => DieState::OnTheTrack { value },
            DicePosition::Aside => DieState::Aside { value },
        }
    }
}

/// A hand of five dices, one per `DiceNumber`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dices {
    dice: [DieState; 5],
}

impl Dices {
    /// A fresh cup: no die has been rolled yet.
    pub fn new_cup() -> Self {
        Self {
            dice: [DieState::InTheCup; 5],
        }
    }

    /// A hand with all five dices rolled to the given values.
    pub fn from_values(values: [DiceValue; 5]) -> Self {
        let mut dices = Self::new_cup();
        for (number, value) in DiceNumber::ALL.into_iter().zip(values) {
            dices.set(number, DieState::OnTheTrack { value });
        }
        dices
    }

    pub fn get(&self, number: DiceNumber) -> DieState {
        self.dice[number.index()]
    }

    pub fn set(&mut self, number: DiceNumber, state: DieState) {
        self.dice[number.index()] = state;
    }

    pub fn iter(&self) -> impl Iterator<Item = (DiceNumber, DieState)> + '_ {
        DiceNumber::ALL.into_iter().map(|number| (number, self.get(number)))
    }

    /// Numbers of the dices still waiting in the cup.
    pub fn cup_dice(&self) -> impl Iterator<Item = DiceNumber> + '_ {
        self.iter()
            .filter(|(_, state)| state.is_in_the_cup())
            .map(|(number, _)| number)
    }

    pub fn all_on_the_table(&self) -> bool {
        self.dice.iter().all(DieState::is_on_the_table)
    }

    /// Values of the rolled dices, in dice-number order.
    pub fn visible_values(&self) -> Vec<DiceValue> {
        self.dice.iter().filter_map(DieState::value).collect()
    }

    pub fn score(&self, combination: Combination) -> Score {
        combination.score(&self.visible_values())
    }
}

/// The thirteen scorable dice combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Combination {
    Aces,
    Twos,
    Threes,
    Fours,
    Fives,
    Sixes,
    ThreeOfAKind,
    FourOfAKind,
    FullHouse,
    SmallStraight,
    LargeStraight,
    Yahtzee,
    Chance,
}

const SMALL_STRAIGHTS: [[DiceValue; 4]; 3] = [[1, 2, 3, 4], [2, 3, 4, 5], [3, 4, 5, 6]];
const LARGE_STRAIGHTS: [[DiceValue; 5]; 2] = [[1, 2, 3, 4, 5], [2, 3, 4, 5, 6]];

impl Combination {
    pub const ALL: [Combination; 13] = [
        Combination::Aces,
        Combination::Twos,
        Combination::Threes,
        Combination::Fours,
        Combination::Fives,
        Combination::Sixes,
        Combination::ThreeOfAKind,
        Combination::FourOfAKind,
        Combination::FullHouse,
        Combination::SmallStraight,
        Combination::LargeStraight,
        Combination::Yahtzee,
        Combination::Chance,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Combination::Aces => "Aces",
            Combination::Twos => "Twos",
            Combination::Threes => "Threes",
            Combination::Fours => "Fours",
            Combination::Fives => "Fives",
            Combination::Sixes => "Sixes",
            Combination::ThreeOfAKind => "Three Of A Kind",
            Combination::FourOfAKind => "Four Of A Kind",
            Combination::FullHouse => "Full House",
            Combination::SmallStraight => "Small Straight",
            Combination::LargeStraight => "Large Straight",
            Combination::Yahtzee => "Yahtzee",
            Combination::Chance => "Chance",
        }
    }

    /// Score the combination against the visible dice values.
    ///
    /// Total function: an incomplete or empty hand scores 0, it never
    /// fails. Deterministic for a given hand.
    pub fn score(&self, values: &[DiceValue]) -> Score {
        match self {
            Combination::Aces => sum_of_face(values, 1),
            Combination::Twos => sum_of_face(values, 2),
            Combination::Threes => sum_of_face(values, 3),
            Combination::Fours => sum_of_face(values, 4),
            Combination::Fives => sum_of_face(values, 5),
            Combination::Sixes => sum_of_face(values, 6),
            Combination::ThreeOfAKind => {
                if has_group_of(values, 3) {
                    sum(values)
                } else {
                    0
                }
            }
            Combination::FourOfAKind => {
                if has_group_of(values, 4) {
                    sum(values)
                } else {
                    0
                }
            }
            Combination::FullHouse => {
                if is_full_house(values) {
                    25
                } else {
                    0
                }
            }
            Combination::SmallStraight => {
                if contains_any_straight(values, &SMALL_STRAIGHTS) {
                    20
                } else {
                    0
                }
            }
            Combination::LargeStraight => {
                if contains_any_straight(values, &LARGE_STRAIGHTS) {
                    40
                } else {
                    0
                }
            }
            Combination::Yahtzee => {
                if is_yahtzee(values) {
                    50
                } else {
                    0
                }
            }
            Combination::Chance => sum(values),
        }
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn sum(values: &[DiceValue]) -> Score {
    values.iter().map(|value| Score::from(*value)).sum()
}

fn sum_of_face(values: &[DiceValue], face: DiceValue) -> Score {
    values
        .iter()
        .filter(|value| **value == face)
        .map(|value| Score::from(*value))
        .sum()
}

/// Count of each face among the values, index 0 holding the aces.
fn face_counts(values: &[DiceValue]) -> [u8; 6] {
    let mut counts = [0u8; 6];
    for value in values {
        if (1..=6).contains(value) {
            counts[usize::from(value - 1)] += 1;
        }
    }
    counts
}

fn has_group_of(values: &[DiceValue], size: u8) -> bool {
    face_counts(values).iter().any(|count| *count >= size)
}

fn is_full_house(values: &[DiceValue]) -> bool {
    let mut groups: Vec<u8> = face_counts(values)
        .into_iter()
        .filter(|count| *count > 0)
        .collect();
    groups.sort_unstable();
    groups == [5] || groups == [2, 3]
}

fn contains_any_straight<const N: usize>(
    values: &[DiceValue],
    straights: &[[DiceValue; N]],
) -> bool {
    straights
        .iter()
        .any(|straight| straight.iter().all(|face| values.contains(face)))
}

fn is_yahtzee(values: &[DiceValue]) -> bool {
    match values.split_first() {
        Some((first, rest)) => rest.iter().all(|value| value == first),
        None => false,
    }
}
