//! Message handler capability

use async_trait::async_trait;

use crate::error::Result;
use crate::message::Message;

/// Trait for reacting to messages of a single type
///
/// A handler is registered on an agent for one message type and invoked at
/// most once per dispatched message. Side effects are unconstrained: a
/// handler may itself send messages through the agent that owns it.
///
/// Errors are not caught by the dispatching agent — a failing handler
/// aborts the current inbox drain and surfaces from the agent's `run` loop.
#[async_trait]
pub trait MessageHandler: Send + Sync {
    /// React to a dispatched message
    async fn handle(&self, message: Message) -> Result<()>;
}
