//! Message and envelope types flowing between agents

use serde::{Deserialize, Serialize};

use crate::agent::AgentRef;

/// A message exchanged between agents
///
/// Messages are immutable once constructed and carry no identity beyond
/// structural equality. The `content` is opaque to the runtime: handlers
/// are free to parse it however they like.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Message type, used to select a handler on the receiving agent
    pub message_type: String,

    /// Message payload (opaque to the runtime)
    pub content: String,
}

impl Message {
    /// Create a new message
    pub fn new(message_type: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            message_type: message_type.into(),
            content: content.into(),
        }
    }
}

/// An outbox entry pairing a destination agent with a message
///
/// Envelopes exist only inside an agent's outbox: they are created by
/// `send_message` and consumed by the outbox-forwarding step, which
/// delivers the message into the destination's inbox.
#[derive(Clone)]
pub struct Envelope {
    /// The agent whose inbox the message is delivered to
    pub destination: AgentRef,

    /// The message to deliver
    pub message: Message,
}

impl std::fmt::Debug for Envelope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Envelope")
            .field("destination", &self.destination.name())
            .field("message", &self.message)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_construction() {
        let message = Message::new("greeting", "hello world");
        assert_eq!(message.message_type, "greeting");
        assert_eq!(message.content, "hello world");
    }

    #[test]
    fn test_message_structural_equality() {
        let a = Message::new("all", "hi");
        let b = Message::new("all", "hi");
        let c = Message::new("all", "yo");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
