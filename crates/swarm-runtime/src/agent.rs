//! Autonomous agent implementation
//!
//! `AutonomousAgent` owns an inbox and an outbox and drives the perpetual
//! scheduling loop: each pass concurrently drains the inbox, forwards the
//! outbox, and fires the behaviors that are due.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;
use tracing::{debug, trace};

use swarm_core::{
    Agent, AgentRef, Behavior, Condition, Envelope, InMemoryQueue, Message, MessageHandler,
    MessageQueue, Result,
};

/// A named behavior registration: the behavior itself, its firing period,
/// and an optional gating condition.
#[derive(Clone)]
struct BehaviorSlot {
    name: String,
    behavior: Arc<dyn Behavior>,
    period: Duration,
    condition: Option<Condition>,
}

/// An agent driven by a perpetual scheduling loop
///
/// Each iteration of the loop (a *pass*) joins three units of work:
/// draining the inbox into registered handlers, forwarding queued
/// envelopes to their destinations, and firing due behaviors. The three
/// units are polled cooperatively within one task and joined before the
/// next pass begins, so drains stay bounded and a slow handler only delays
/// its own agent.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use swarm_core::Agent;
/// use swarm_runtime::AutonomousAgent;
///
/// # async fn example(handler: Arc<dyn swarm_core::MessageHandler>) -> swarm_core::Result<()> {
/// let agent = Arc::new(AutonomousAgent::new("worker"));
/// agent.register_message_handler("all", handler);
/// agent.run().await?;
/// # Ok(())
/// # }
/// ```
pub struct AutonomousAgent {
    name: String,
    inbox: Arc<dyn MessageQueue<Message>>,
    outbox: Arc<dyn MessageQueue<Envelope>>,
    handlers: RwLock<HashMap<String, Arc<dyn MessageHandler>>>,
    // Vec rather than HashMap: firing order is registration order, and
    // re-registering a name keeps its original position.
    behaviors: RwLock<Vec<BehaviorSlot>>,
    // One timestamp shared by every behavior of this agent; None until the
    // first qualifying pass.
    last_execution: Mutex<Option<Instant>>,
}

impl AutonomousAgent {
    /// Create an agent with fresh default in-memory queues
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_queues(
            name,
            Arc::new(InMemoryQueue::new()),
            Arc::new(InMemoryQueue::new()),
        )
    }

    /// Create an agent with caller-supplied queues
    pub fn with_queues(
        name: impl Into<String>,
        inbox: Arc<dyn MessageQueue<Message>>,
        outbox: Arc<dyn MessageQueue<Envelope>>,
    ) -> Self {
        Self {
            name: name.into(),
            inbox,
            outbox,
            handlers: RwLock::new(HashMap::new()),
            behaviors: RwLock::new(Vec::new()),
            last_execution: Mutex::new(None),
        }
    }

    /// Drain the inbox and dispatch each message to its registered handler
    ///
    /// The drain is bounded by the emptiness check: a message enqueued
    /// concurrently after the check reports empty is picked up on the next
    /// pass, not this one. Messages without a registered handler are
    /// dropped silently.
    pub async fn process_inbox(&self) -> Result<()> {
        while !self.inbox.is_empty() {
            let message = self.inbox.get().await;
            let handler = self
                .handlers
                .read()
                .unwrap()
                .get(&message.message_type)
                .cloned();
            match handler {
                Some(handler) => {
                    trace!(
                        agent = %self.name,
                        message_type = %message.message_type,
                        "dispatching message"
                    );
                    handler.handle(message).await?;
                }
                None => {
                    debug!(
                        agent = %self.name,
                        message_type = %message.message_type,
                        "no handler registered, dropping message"
                    );
                }
            }
        }
        Ok(())
    }

    /// Forward every queued envelope to its destination's inbox
    ///
    /// Bounded drain, symmetric to [`process_inbox`](Self::process_inbox).
    pub async fn process_outbox(&self) -> Result<()> {
        while !self.outbox.is_empty() {
            let envelope = self.outbox.get().await;
            trace!(
                agent = %self.name,
                destination = %envelope.destination.name(),
                message_type = %envelope.message.message_type,
                "forwarding message"
            );
            envelope.destination.receive_message(envelope.message).await;
        }
        Ok(())
    }

    /// Fire every behavior whose period has elapsed and whose condition holds
    ///
    /// All behaviors share a single last-execution timestamp: the pass is
    /// skipped unless the shortest registered period has elapsed, and the
    /// timestamp is reset once at the end of a qualifying pass, so every
    /// behavior's next-due time resynchronizes to the same instant.
    pub async fn execute_behaviors(&self) -> Result<()> {
        let behaviors = self.behaviors.read().unwrap().clone();
        let Some(min_period) = behaviors.iter().map(|slot| slot.period).min() else {
            return Ok(());
        };

        let now = Instant::now();
        // None means the agent has never fired behaviors; every period is
        // then treated as elapsed.
        let elapsed = self.last_execution.lock().unwrap().map(|last| now - last);
        if elapsed.is_some_and(|elapsed| elapsed < min_period) {
            return Ok(());
        }

        for slot in &behaviors {
            if elapsed.is_some_and(|elapsed| elapsed < slot.period) {
                continue;
            }
            if let Some(condition) = slot.condition.as_deref() {
                if !condition() {
                    continue;
                }
            }
            trace!(agent = %self.name, behavior = %slot.name, "executing behavior");
            slot.behavior.execute().await?;
        }

        *self.last_execution.lock().unwrap() = Some(now);
        Ok(())
    }
}

#[async_trait]
impl Agent for AutonomousAgent {
    async fn run(&self) -> Result<()> {
        debug!(agent = %self.name, "agent loop started");
        loop {
            tokio::try_join!(
                self.execute_behaviors(),
                self.process_inbox(),
                self.process_outbox(),
            )?;
            // Each pass ends at a yield point so external cancellation can
            // take effect between passes.
            tokio::task::yield_now().await;
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn register_message_handler(&self, message_type: &str, handler: Arc<dyn MessageHandler>) {
        self.handlers
            .write()
            .unwrap()
            .insert(message_type.to_string(), handler);
    }

    fn register_behavior(
        &self,
        name: &str,
        behavior: Arc<dyn Behavior>,
        period: Duration,
        condition: Option<Condition>,
    ) {
        let slot = BehaviorSlot {
            name: name.to_string(),
            behavior,
            period,
            condition,
        };
        let mut behaviors = self.behaviors.write().unwrap();
        if let Some(existing) = behaviors.iter_mut().find(|s| s.name == name) {
            *existing = slot;
        } else {
            behaviors.push(slot);
        }
    }

    async fn send_message(&self, message: Message, to: AgentRef) {
        self.outbox
            .put(Envelope {
                destination: to,
                message,
            })
            .await;
    }

    async fn receive_message(&self, message: Message) {
        self.inbox.put(message).await;
    }
}
