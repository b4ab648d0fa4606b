use rand::{Rng, SeedableRng};
use uuid::Uuid;

use crate::{board::Board, Event};

/// A game aggregate: the derived board tied to its event history.
///
/// `events` is the committed history the board was replayed from;
/// `new_events` buffers what the current command execution appended and
/// is what gets persisted on commit.
pub struct Game<R> {
    pub uuid: Uuid,
    pub board: Board,
    pub events: Vec<Event>,
    pub new_events: Vec<Event>,
    pub rng: R,
}

impl Game<rand::rngs::SmallRng> {
    /// A fresh game with a random identifier and no history. The
    /// `GameCreated` event is produced by the first command, not here.
    pub fn new() -> Self {
        Self::from_events(Uuid::new_v4(), Vec::new())
    }

    pub fn from_events(uuid: Uuid, events: Vec<Event>) -> Self {
        Self::from_events_with_rng(uuid, events, rand::rngs::SmallRng::from_entropy())
    }
}

impl<R> Game<R>
where
    R: Rng,
{
    /// Replays the events in order over an empty board. Replay is
    /// deterministic: the same history always yields the same board.
    pub fn from_events_with_rng(uuid: Uuid, events: Vec<Event>, rng: R) -> Self {
        let mut board = Board::new();
        for event in &events {
            board.apply(event);
        }
        Game {
            uuid,
            board,
            events,
            new_events: Vec::new(),
            rng,
        }
    }

    /// Apply an event to the board and buffer it for commit. The only
    /// way board state ever changes.
    pub fn append(&mut self, event: Event) {
        self.board.apply(&event);
        self.new_events.push(event);
    }
}
