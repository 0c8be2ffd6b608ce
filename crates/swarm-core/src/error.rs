//! Error types for swarm-core

use thiserror::Error;

/// Result type alias for swarm-core
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for agent operations
#[derive(Error, Debug)]
pub enum Error {
    /// Generic error message
    #[error("{0}")]
    Generic(String),

    /// A message handler failed while reacting to a message
    #[error("message handler failed: {0}")]
    HandlerFailed(String),

    /// A behavior failed during a scheduling pass
    #[error("behavior failed: {0}")]
    BehaviorFailed(String),
}
