//! Runtime orchestration for skirmish battles.
//!
//! This crate turns content and scenario data into a running battle and
//! routes the engine's events to interested consumers. Clients embed a
//! [`Session`] to issue actions, end turns, and subscribe to events.
//!
//! Modules are organized by responsibility:
//! - [`scenario`] loads battle layouts and builds engines from them
//! - [`session`] drives one engine and publishes its events
//! - [`events`] provides the topic-based event bus
//! - [`config`] reads runtime settings from the environment
pub mod config;
pub mod error;
pub mod events;
pub mod scenario;
pub mod session;

pub use config::{RuntimeConfig, ScenarioSource};
pub use error::{Result, RuntimeError};
pub use events::{Event, EventBus, Topic};
pub use scenario::{Placement, Scenario};
pub use session::Session;
