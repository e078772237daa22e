//! Topic-based event bus for battle events.
//!
//! Events drained from the engine are published to a topic, and consumers
//! subscribe only to the topics they need.

mod bus;

pub use bus::{Event, EventBus, Topic};
