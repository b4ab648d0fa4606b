use std::collections::HashMap;

use uuid::Uuid;

use crate::Event;

/// Append-only event log keyed by game identifier.
///
/// Appends preserve prior order and never rewrite history. Single-writer
/// discipline per game id is the caller's responsibility.
pub trait EventStore {
    /// Every event recorded for the game, empty for an unknown id.
    fn get_events(&self, game: Uuid) -> Vec<Event>;

    fn append_events(&mut self, game: Uuid, events: Vec<Event>);

    /// The domain history only: `ErrorRaised` entries are a diagnostic
    /// side-log and are not part of any game's state.
    fn get_game_events(&self, game: Uuid) -> Vec<Event> {
        self.get_events(game)
            .into_iter()
            .filter(|event| !matches!(event, Event::ErrorRaised { .. }))
            .collect()
    }
}

#[derive(Debug, Default)]
pub struct InMemoryEventStore {
    events: HashMap<Uuid, Vec<Event>>,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventStore for InMemoryEventStore {
    fn get_events(&self, game: Uuid) -> Vec<Event> {
        self.events.get(&game).cloned().unwrap_or_default()
    }

    fn append_events(&mut self, game: Uuid, events: Vec<Event>) {
        self.events.entry(game).or_default().extend(events);
    }
}
