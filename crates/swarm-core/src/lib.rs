//! Core abstractions for swarm-rs
//!
//! This crate defines the fundamental traits and types used throughout the
//! swarm-rs runtime: messages and envelopes, the queue contract, the
//! handler and behavior capabilities, and the `Agent` trait itself.

pub mod agent;
pub mod behavior;
pub mod error;
pub mod handler;
pub mod message;
pub mod queue;

pub use agent::{Agent, AgentRef};
pub use behavior::{Behavior, Condition};
pub use error::{Error, Result};
pub use handler::MessageHandler;
pub use message::{Envelope, Message};
pub use queue::{InMemoryQueue, MessageQueue};
