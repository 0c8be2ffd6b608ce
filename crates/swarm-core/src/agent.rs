//! Core Agent trait definition

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::behavior::{Behavior, Condition};
use crate::error::Result;
use crate::handler::MessageHandler;
use crate::message::Message;

/// Shared handle to an agent
///
/// Agents address their peers directly through these handles; there is no
/// registry or discovery layer.
pub type AgentRef = Arc<dyn Agent>;

/// Core trait that all agents must implement
///
/// An agent owns one inbox and one outbox, a mapping of message type to
/// handler, and a set of named periodic behaviors. Registration methods
/// take `&self` so handlers and behaviors can be registered before or
/// during `run`.
#[async_trait]
pub trait Agent: Send + Sync {
    /// Drive the agent's perpetual scheduling loop
    ///
    /// Returns only when a handler or behavior fails; otherwise it runs
    /// until the surrounding task is cancelled.
    async fn run(&self) -> Result<()>;

    /// Get the agent's name
    fn name(&self) -> &str;

    /// Register `handler` for messages of `message_type`
    ///
    /// Replaces any existing handler for that type.
    fn register_message_handler(&self, message_type: &str, handler: Arc<dyn MessageHandler>);

    /// Register a named periodic behavior
    ///
    /// Replaces any existing registration with the same name. `period` is
    /// the minimum time between firings; `condition`, if present, gates
    /// each firing.
    fn register_behavior(
        &self,
        name: &str,
        behavior: Arc<dyn Behavior>,
        period: Duration,
        condition: Option<Condition>,
    );

    /// Queue `message` onto this agent's own outbox for delivery to `to`
    ///
    /// Delivery is asynchronous: the message reaches the destination's
    /// inbox on a later outbox-forwarding pass. Never blocks on the
    /// destination (queues are unbounded).
    async fn send_message(&self, message: Message, to: AgentRef);

    /// Deliver `message` directly into this agent's inbox
    ///
    /// This is the delivery entry point invoked by a peer's
    /// outbox-forwarding step. External producers should prefer
    /// `send_message` on their own agent so the queue discipline is
    /// preserved.
    async fn receive_message(&self, message: Message);
}
