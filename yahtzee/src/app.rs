//! Command execution entry point: replay, handle, commit.

use rand::distributions::Uniform;
use uuid::Uuid;

use crate::{
    statemachine, store::EventStore, views::GameViews, Command, CommandError, CommandOutcome,
    Event, Game,
};

/// Rebuild a game aggregate from its stored domain history.
pub fn get_game<S>(store: &S, game: Uuid) -> Game<rand::rngs::SmallRng>
where
    S: EventStore,
{
    Game::from_events(game, store.get_game_events(game))
}

/// Read-model projections over the current state of a game.
pub fn game_views<S>(store: &S, game: Uuid) -> GameViews
where
    S: EventStore,
{
    GameViews::of(get_game(store, game).board)
}

/// Execute one command against the store.
///
/// An accepted command commits all of its events as one unit; a rejected
/// command commits nothing to the game history, only an `ErrorRaised`
/// entry in the side-log.
pub fn execute<S>(store: &mut S, command: &Command) -> Result<CommandOutcome, CommandError>
where
    S: EventStore,
{
    let mut game = match command.game() {
        Some(id) => get_game(store, id),
        None => Game::new(),
    };

    let faces = Uniform::new_inclusive(1u8, 6u8);
    let result = statemachine::handle(&mut game, &faces, command);
    commit(store, game, &result);
    result
}

fn commit<S, R>(store: &mut S, game: Game<R>, result: &Result<CommandOutcome, CommandError>)
where
    S: EventStore,
{
    match result {
        Ok(_) => store.append_events(game.uuid, game.new_events),
        Err(error) => {
            tracing::error!("Rejected command on game {}: {}", game.uuid, error);
            store.append_events(
                game.uuid,
                vec![Event::ErrorRaised {
                    message: error.to_string(),
                }],
            );
        }
    }
}
