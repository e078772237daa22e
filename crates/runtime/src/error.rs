//! Unified error types surfaced by the runtime.
//!
//! Wraps scenario, content, and placement failures so the client can bubble
//! them up with consistent context.
use std::path::PathBuf;

use game_core::{ActionError, Position};
use thiserror::Error;

pub type Result<T, E = RuntimeError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("invalid scenario: {0}")]
    Scenario(String),

    #[error("unknown unit template '{0}'")]
    UnknownTemplate(String),

    #[error("unit template '{template}' references unknown skill '{skill}'")]
    UnknownSkill { template: String, skill: String },

    #[error("failed to place '{template}' at {position}")]
    Placement {
        template: String,
        position: Position,
        #[source]
        source: ActionError,
    },

    #[error("failed to load content: {0}")]
    Content(String),

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
