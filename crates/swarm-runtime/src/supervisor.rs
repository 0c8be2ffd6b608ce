//! Composition of multiple agent loops
//!
//! Agents interact only through each other's queues, so running a system
//! means driving every agent's `run` loop concurrently. `Supervisor`
//! packages that composition into a single cancellable future.

use futures::future::try_join_all;
use tracing::info;

use swarm_core::{AgentRef, Result};

/// Drives a set of agent loops as one structured unit
///
/// All loops are polled cooperatively inside the task that awaits
/// [`run`](Self::run): the first agent failure cancels the remaining
/// loops, and cancelling the awaiting task stops every loop abruptly —
/// in-flight handlers and behaviors are not waited on.
#[derive(Default)]
pub struct Supervisor {
    agents: Vec<AgentRef>,
}

impl Supervisor {
    /// Create an empty supervisor
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an agent to be driven by [`run`](Self::run)
    pub fn add_agent(&mut self, agent: AgentRef) {
        self.agents.push(agent);
    }

    /// Add an agent, builder style
    pub fn with_agent(mut self, agent: AgentRef) -> Self {
        self.add_agent(agent);
        self
    }

    /// Number of registered agents
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Whether no agents are registered
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Drive all registered agent loops until one fails or the task is cancelled
    pub async fn run(&self) -> Result<()> {
        info!(agents = self.agents.len(), "running agent loops");
        try_join_all(self.agents.iter().map(|agent| agent.run())).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AutonomousAgent;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use swarm_core::{Agent, Behavior, Error, Message, MessageHandler, Result};
    use tokio::time::timeout;

    struct RecordingHandler {
        seen: Mutex<Vec<Message>>,
    }

    #[async_trait]
    impl MessageHandler for RecordingHandler {
        async fn handle(&self, message: Message) -> Result<()> {
            self.seen.lock().unwrap().push(message);
            Ok(())
        }
    }

    struct PingBehavior {
        from: AgentRef,
        to: AgentRef,
    }

    #[async_trait]
    impl Behavior for PingBehavior {
        async fn execute(&self) -> Result<()> {
            self.from
                .send_message(Message::new("all", "ping"), self.to.clone())
                .await;
            Ok(())
        }
    }

    struct FailingBehavior;

    #[async_trait]
    impl Behavior for FailingBehavior {
        async fn execute(&self) -> Result<()> {
            Err(Error::BehaviorFailed("boom".to_string()))
        }
    }

    #[tokio::test]
    async fn test_agent_failure_stops_the_run() {
        let agent = Arc::new(AutonomousAgent::new("doomed"));
        agent.register_behavior("bad", Arc::new(FailingBehavior), Duration::ZERO, None);

        let supervisor = Supervisor::new().with_agent(agent);
        assert!(supervisor.run().await.is_err());
    }

    #[tokio::test]
    async fn test_messages_flow_between_running_agents() {
        let sender = Arc::new(AutonomousAgent::new("sender"));
        let receiver = Arc::new(AutonomousAgent::new("receiver"));
        let handler = Arc::new(RecordingHandler {
            seen: Mutex::new(Vec::new()),
        });
        receiver.register_message_handler("all", handler.clone());
        sender.register_behavior(
            "ping",
            Arc::new(PingBehavior {
                from: sender.clone(),
                to: receiver.clone(),
            }),
            Duration::from_millis(1),
            None,
        );

        let mut supervisor = Supervisor::new();
        supervisor.add_agent(sender.clone());
        supervisor.add_agent(receiver.clone());
        assert_eq!(supervisor.len(), 2);

        // The loops never return on their own; cut them off after enough
        // real time for several passes.
        let outcome = timeout(Duration::from_millis(200), supervisor.run()).await;
        assert!(outcome.is_err());

        let seen = handler.seen.lock().unwrap();
        assert!(!seen.is_empty());
        assert!(seen.iter().all(|message| message.content == "ping"));
    }
}
