//! Topic-based event bus implementation.

use std::collections::HashMap;
use std::sync::Arc;

use game_core::GameEvent;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Board changes (placements, moves, attacks, skills, defeats)
    Board,
    /// Turn boundaries and the game-over outcome
    Turn,
    /// User-facing notifications such as rejected actions
    Notice,
}

impl Topic {
    pub const ALL: [Topic; 3] = [Topic::Board, Topic::Turn, Topic::Notice];

    pub fn of(event: &GameEvent) -> Self {
        match event {
            GameEvent::Notification { .. } => Topic::Notice,
            GameEvent::TurnEnded { .. } | GameEvent::GameOver { .. } => Topic::Turn,
            GameEvent::Updated
            | GameEvent::UnitPlaced { .. }
            | GameEvent::UnitMoved { .. }
            | GameEvent::UnitAttacked { .. }
            | GameEvent::SkillCast { .. }
            | GameEvent::UnitWaited { .. }
            | GameEvent::UnitDefeated { .. } => Topic::Board,
        }
    }
}

/// Engine event stamped with publication order and the turn it happened in.
///
/// Events of an opponent phase, `TurnEnded` included, belong to the turn
/// being ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Strictly increasing across all topics of one session.
    pub seq: u64,
    pub turn: u32,
    pub event: GameEvent,
}

impl Event {
    pub fn topic(&self) -> Topic {
        Topic::of(&self.event)
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. Publishing never waits on a subscriber.
pub struct EventBus {
    channels: Arc<HashMap<Topic, broadcast::Sender<Event>>>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let channels = Topic::ALL
            .into_iter()
            .map(|topic| (topic, broadcast::channel(capacity).0))
            .collect();

        Self {
            channels: Arc::new(channels),
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();

        if let Some(tx) = self.channels.get(&topic)
            && tx.send(event).is_err()
        {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> Option<broadcast::Receiver<Event>> {
        self.channels.get(&topic).map(broadcast::Sender::subscribe)
    }

    /// Subscribe to multiple topics
    ///
    /// Returns receivers for each requested topic.
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> HashMap<Topic, broadcast::Receiver<Event>> {
        topics
            .iter()
            .filter_map(|&topic| self.subscribe(topic).map(|rx| (topic, rx)))
            .collect()
    }

    /// Number of live receivers on `topic`.
    pub fn subscriber_count(&self, topic: Topic) -> usize {
        self.channels
            .get(&topic)
            .map_or(0, broadcast::Sender::receiver_count)
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            channels: Arc::clone(&self.channels),
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
