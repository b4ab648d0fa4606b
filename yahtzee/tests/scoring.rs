use yahtzee::{Combination, Dices};

fn hand(values: [u8; 5]) -> Dices {
    Dices::from_values(values)
}

#[test]
fn three_of_a_kind_sums_every_visible_dice() {
    let dices = hand([1, 1, 1, 4, 5]);

    assert_eq!(12, dices.score(Combination::ThreeOfAKind));
    assert_eq!(0, dices.score(Combination::FullHouse));
}

#[test]
fn five_twos() {
    let dices = hand([2, 2, 2, 2, 2]);

    assert_eq!(50, dices.score(Combination::Yahtzee));
    assert_eq!(10, dices.score(Combination::FourOfAKind));
    assert_eq!(10, dices.score(Combination::ThreeOfAKind));
    assert_eq!(10, dices.score(Combination::Chance));
    assert_eq!(10, dices.score(Combination::Twos));
    // a single group of five counts as a full house
    assert_eq!(25, dices.score(Combination::FullHouse));
}

#[test]
fn straights() {
    let dices = hand([1, 2, 3, 4, 5]);
    assert_eq!(40, dices.score(Combination::LargeStraight));
    assert_eq!(20, dices.score(Combination::SmallStraight));

    let dices = hand([6, 3, 4, 2, 5]);
    assert_eq!(40, dices.score(Combination::LargeStraight));

    // 1-2-3-4 but no run of five
    let dices = hand([1, 2, 3, 4, 6]);
    assert_eq!(20, dices.score(Combination::SmallStraight));
    assert_eq!(0, dices.score(Combination::LargeStraight));

    let dices = hand([1, 2, 2, 4, 6]);
    assert_eq!(0, dices.score(Combination::SmallStraight));
}

#[test]
fn upper_section_sums_matching_faces_only() {
    let dices = hand([3, 3, 3, 2, 6]);

    assert_eq!(9, dices.score(Combination::Threes));
    assert_eq!(2, dices.score(Combination::Twos));
    assert_eq!(6, dices.score(Combination::Sixes));
    assert_eq!(0, dices.score(Combination::Aces));
    assert_eq!(17, dices.score(Combination::Chance));
}

#[test]
fn full_house_needs_a_pair_and_a_triple() {
    assert_eq!(25, hand([2, 2, 3, 3, 3]).score(Combination::FullHouse));
    assert_eq!(25, hand([5, 5, 5, 1, 1]).score(Combination::FullHouse));
    assert_eq!(0, hand([2, 2, 3, 3, 6]).score(Combination::FullHouse));
    assert_eq!(0, hand([2, 2, 2, 2, 6]).score(Combination::FullHouse));
}

#[test]
fn unrolled_dices_never_score() {
    let dices = Dices::new_cup();

    for combination in Combination::ALL {
        assert_eq!(0, dices.score(combination), "{}", combination);
    }
}

#[test]
fn scoring_is_deterministic() {
    let dices = hand([4, 4, 2, 6, 4]);

    for combination in Combination::ALL {
        assert_eq!(dices.score(combination), dices.score(combination));
    }
}
