//! Shared utilities for swarm-rs
//!
//! This crate provides common functionality used across the swarm-rs
//! workspace: logging setup and demo configuration.

pub mod config;
pub mod logging;

pub use config::Config;
pub use logging::{init_tracing, init_tracing_with};
