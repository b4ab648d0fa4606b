use mocks::{DumbDistr, MockRand};
use tracing_test::traced_test;
use uuid::Uuid;
use yahtzee::{
    statemachine, Category, Combination, Command, CommandError, CommandOutcome, DiceNumber,
    DieState, Event, Game,
};

/// A started game replayed from scratch, with scripted rolls. DumbDistr
/// turns each scripted value `n` into the face `n % 6 + 1`.
fn started_game(players: &[&str], rolls: Vec<u64>) -> Game<MockRand> {
    let uuid = Uuid::new_v4();
    let mut events = vec![Event::GameCreated { game: uuid }];
    for player in players {
        events.push(Event::PlayerAdded {
            player: player.to_string(),
        });
    }
    events.push(Event::GameStarted);
    Game::from_events_with_rng(uuid, events, MockRand::new(rolls))
}

#[traced_test]
#[test]
fn roll_moves_every_cup_dice_on_the_track() {
    let mut game = started_game(&["alice", "bob"], vec![0, 1, 2, 3, 4]);
    let id = game.uuid;

    let outcome = statemachine::handle(
        &mut game,
        &DumbDistr {},
        &Command::RollDices {
            game: id,
            player: "alice".to_string(),
        },
    );

    assert_eq!(Ok(CommandOutcome::Accepted), outcome);
    for (face, number) in DiceNumber::ALL.into_iter().enumerate() {
        assert_eq!(
            DieState::OnTheTrack {
                value: face as u8 + 1
            },
            game.board.dices.get(number)
        );
    }
    assert_eq!(1, game.board.round.turn.attempted_rolls);
    // five dice moves plus the roll itself, committed as one unit
    assert_eq!(6, game.new_events.len());
    assert_eq!(
        Some(&Event::RollPerformed { attempt_nb: 1 }),
        game.new_events.last()
    );
}

#[traced_test]
#[test]
fn rolled_dices_are_not_rerolled() {
    let mut game = started_game(&["alice"], vec![0, 1, 2, 3, 4]);
    let id = game.uuid;
    let roll = Command::RollDices {
        game: id,
        player: "alice".to_string(),
    };

    statemachine::handle(&mut game, &DumbDistr {}, &roll).expect("first roll");
    let keep = Command::KeepDice {
        game: id,
        player: "alice".to_string(),
        number: DiceNumber::Three,
    };
    statemachine::handle(&mut game, &DumbDistr {}, &keep).expect("keeping a rolled dice");
    assert_eq!(
        DieState::Aside { value: 3 },
        game.board.dices.get(DiceNumber::Three)
    );

    let before = game.new_events.len();
    statemachine::handle(&mut game, &DumbDistr {}, &roll).expect("second roll");

    // no dice left in the cup: only the roll attempt is recorded
    assert_eq!(before + 1, game.new_events.len());
    assert_eq!(
        Some(&Event::RollPerformed { attempt_nb: 2 }),
        game.new_events.last()
    );
    assert_eq!(
        DieState::Aside { value: 3 },
        game.board.dices.get(DiceNumber::Three)
    );
    assert_eq!(
        DieState::OnTheTrack { value: 1 },
        game.board.dices.get(DiceNumber::One)
    );
    assert_eq!(2, game.board.round.turn.attempted_rolls);
}

#[traced_test]
#[test]
fn fourth_roll_is_rejected() {
    let mut game = started_game(&["alice"], vec![0, 1, 2, 3, 4]);
    let id = game.uuid;
    let roll = Command::RollDices {
        game: id,
        player: "alice".to_string(),
    };

    for _ in 0..3 {
        statemachine::handle(&mut game, &DumbDistr {}, &roll).expect("rolls within the budget");
    }
    assert_eq!(3, game.board.round.turn.attempted_rolls);

    let before = game.new_events.len();
    let outcome = statemachine::handle(&mut game, &DumbDistr {}, &roll);

    assert_eq!(
        Err(CommandError::NoRollsLeft("alice".to_string())),
        outcome
    );
    assert_eq!(before, game.new_events.len());
}

#[traced_test]
#[test]
fn rolling_out_of_turn_is_rejected() {
    let mut game = started_game(&["alice", "bob"], vec![]);
    let id = game.uuid;

    let outcome = statemachine::handle(
        &mut game,
        &DumbDistr {},
        &Command::RollDices {
            game: id,
            player: "bob".to_string(),
        },
    );

    assert_eq!(Err(CommandError::NotYourTurn("bob".to_string())), outcome);
    assert!(game.new_events.is_empty());
}

#[traced_test]
#[test]
fn keeping_an_unrolled_dice_is_rejected() {
    let mut game = started_game(&["alice"], vec![]);
    let id = game.uuid;

    let outcome = statemachine::handle(
        &mut game,
        &DumbDistr {},
        &Command::KeepDice {
            game: id,
            player: "alice".to_string(),
            number: DiceNumber::Two,
        },
    );

    assert_eq!(Err(CommandError::DiceInTheCup(DiceNumber::Two)), outcome);
    assert!(game.new_events.is_empty());
}

#[traced_test]
#[test]
fn scoring_before_rolling_is_rejected() {
    let mut game = started_game(&["alice"], vec![]);
    let id = game.uuid;

    let outcome = statemachine::handle(
        &mut game,
        &DumbDistr {},
        &Command::Score {
            game: id,
            player: "alice".to_string(),
            combination: Combination::Chance,
        },
    );

    assert_eq!(Err(CommandError::MustRollFirst), outcome);
    assert!(game.new_events.is_empty());
}

#[traced_test]
#[test]
fn scoring_records_points_and_hands_over_the_turn() {
    // faces 1 1 1 4 5
    let mut game = started_game(&["alice", "bob"], vec![0, 0, 0, 3, 4]);
    let id = game.uuid;

    statemachine::handle(
        &mut game,
        &DumbDistr {},
        &Command::RollDices {
            game: id,
            player: "alice".to_string(),
        },
    )
    .expect("roll");
    statemachine::handle(
        &mut game,
        &DumbDistr {},
        &Command::Score {
            game: id,
            player: "alice".to_string(),
            combination: Combination::ThreeOfAKind,
        },
    )
    .expect("score");

    let alice = game.board.get_player("alice").expect("alice is in the game");
    assert_eq!(Some(12), alice.scorecard.get(Category::ThreeOfAKind));
    assert_eq!(
        Some(&Event::TurnChanged {
            new_player: "bob".to_string(),
            round_number: 1,
        }),
        game.new_events.last()
    );
    let bob = game.board.playing_player().expect("a player is up");
    assert_eq!("bob", bob.name);
    // a fresh cup and a fresh roll budget for bob
    assert_eq!(0, game.board.round.turn.attempted_rolls);
    assert!(game.board.dices.cup_dice().count() == 5);
}
