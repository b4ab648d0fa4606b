//! Per-status command handling: the only place domain events are produced.
//!
//! Each `GameStatus` accepts its own set of commands; anything else is an
//! "unhandled command", a wiring bug rather than a rule violation. A
//! command is validated completely before its first event is appended, so
//! multi-event effects land atomically or not at all.

use rand::{distributions::Distribution, Rng};

use crate::{
    board::NextTurn,
    dice::{Combination, DiceNumber, DicePosition, DiceValue, DieState},
    scorecard::Category,
    Command, CommandError, CommandOutcome, Event, Game, GameStatus,
};

pub fn handle<R, D>(
    game: &mut Game<R>,
    faces: &D,
    command: &Command,
) -> Result<CommandOutcome, CommandError>
where
    R: Rng,
    D: Distribution<DiceValue>,
{
    match game.board.status {
        GameStatus::New => handle_new(game, command),
        GameStatus::Pending => handle_pending(game, command),
        GameStatus::Started => handle_started(game, faces, command),
        GameStatus::Over => Err(unhandled(command, GameStatus::Over)),
    }
}

fn unhandled(command: &Command, status: GameStatus) -> CommandError {
    tracing::warn!("Unhandled command {:?} for a {:?} game", command, status);
    CommandError::Unhandled {
        command: command.name(),
        status,
    }
}

fn handle_new<R: Rng>(
    game: &mut Game<R>,
    command: &Command,
) -> Result<CommandOutcome, CommandError> {
    match command {
        Command::CreateGame => {
            game.append(Event::GameCreated { game: game.uuid });
            Ok(CommandOutcome::Created { game: game.uuid })
        }
        other => Err(unhandled(other, GameStatus::New)),
    }
}

fn handle_pending<R: Rng>(
    game: &mut Game<R>,
    command: &Command,
) -> Result<CommandOutcome, CommandError> {
    match command {
        Command::AddPlayer { player, .. } => {
            if game.board.get_player(player).is_some() {
                return Err(CommandError::PlayerAlreadyInGame(player.clone()));
            }
            game.append(Event::PlayerAdded {
                player: player.clone(),
            });
            Ok(CommandOutcome::Accepted)
        }
        Command::StartGame { .. } => {
            if game.board.players.is_empty() {
                return Err(CommandError::NoPlayers);
            }
            game.append(Event::GameStarted);
            Ok(CommandOutcome::Accepted)
        }
        other => Err(unhandled(other, GameStatus::Pending)),
    }
}

fn handle_started<R, D>(
    game: &mut Game<R>,
    faces: &D,
    command: &Command,
) -> Result<CommandOutcome, CommandError>
where
    R: Rng,
    D: Distribution<DiceValue>,
{
    match command {
        Command::RollDices { player, .. } => roll_dices(game, faces, player),
        Command::KeepDice { player, number, .. } => keep_dice(game, player, *number),
        Command::Score {
            player,
            combination,
            ..
        } => score(game, player, *combination),
        other => Err(unhandled(other, GameStatus::Started)),
    }
}

fn assert_player_turn<R>(game: &Game<R>, player: &str) -> Result<(), CommandError> {
    if game.board.get_player(player).is_none() {
        return Err(CommandError::UnknownPlayer(player.to_string()));
    }
    match game.board.playing_player() {
        Some(current) if current.name == player => Ok(()),
        _ => Err(CommandError::NotYourTurn(player.to_string())),
    }
}

/// Roll every die still in the cup, each an independent uniform draw.
fn roll_dices<R, D>(
    game: &mut Game<R>,
    faces: &D,
    player: &str,
) -> Result<CommandOutcome, CommandError>
where
    R: Rng,
    D: Distribution<DiceValue>,
{
    assert_player_turn(game, player)?;
    if !game.board.round.can_reroll() {
        return Err(CommandError::NoRollsLeft(player.to_string()));
    }

    let attempt = game.board.round.turn.attempted_rolls + 1;
    let in_the_cup: Vec<DiceNumber> = game.board.dices.cup_dice().collect();
    for number in in_the_cup {
        let value = faces.sample(&mut game.rng);
        tracing::trace!("Rolled {} for dice {:?} of {}", value, number, player);
        game.append(Event::DicePositionChanged {
            number,
            position: DicePosition::OnTheTrack,
            value,
        });
    }
    game.append(Event::RollPerformed {
        attempt_nb: attempt,
    });
    Ok(CommandOutcome::Accepted)
}

/// Put a rolled die aside so the next roll leaves it untouched.
fn keep_dice<R>(
    game: &mut Game<R>,
    player: &str,
    number: DiceNumber,
) -> Result<CommandOutcome, CommandError>
where
    R: Rng,
{
    assert_player_turn(game, player)?;
    match game.board.dices.get(number) {
        DieState::InTheCup => Err(CommandError::DiceInTheCup(number)),
        DieState::OnTheTrack { value } | DieState::Aside { value } => {
            game.append(Event::DicePositionChanged {
                number,
                position: DicePosition::Aside,
                value,
            });
            Ok(CommandOutcome::Accepted)
        }
    }
}

fn score<R>(
    game: &mut Game<R>,
    player: &str,
    combination: Combination,
) -> Result<CommandOutcome, CommandError>
where
    R: Rng,
{
    assert_player_turn(game, player)?;
    if !game.board.dices.all_on_the_table() {
        return Err(CommandError::MustRollFirst);
    }
    let category = Category::from(combination);
    match game.board.get_player(player) {
        Some(target) if !target.can_score(category) => {
            return Err(CommandError::AlreadyScored(combination));
        }
        _ => {}
    }

    let points = game.board.dices.score(combination);
    tracing::debug!("{} scores {} for {}", player, points, combination);
    game.append(Event::PointsScored {
        player: player.to_string(),
        category,
        points,
    });

    // computed after PointsScored so a just-completed scorecard is seen
    match game.board.round.advance(&game.board.players) {
        NextTurn::Turn {
            player: new_player,
            round_number,
        } => game.append(Event::TurnChanged {
            new_player,
            round_number,
        }),
        NextTurn::GameOver => game.append(Event::GameEnded),
    }
    Ok(CommandOutcome::Accepted)
}
