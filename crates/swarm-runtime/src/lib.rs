//! Agent runtime for swarm-rs
//!
//! This crate provides the runtime half of the system: the
//! `AutonomousAgent` implementation of the core `Agent` trait, driven by a
//! perpetual scheduling loop, and the `Supervisor` for composing several
//! agent loops into one cancellable unit.

pub mod agent;
pub mod supervisor;

// Re-export key types
pub use agent::AutonomousAgent;
pub use supervisor::Supervisor;
