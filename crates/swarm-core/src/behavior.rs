//! Periodic behavior capability

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;

/// Zero-argument predicate gating a behavior
///
/// Evaluated synchronously at dispatch time; the scheduler assumes nothing
/// about its side effects. An absent condition means "always fire".
pub type Condition = Arc<dyn Fn() -> bool + Send + Sync>;

/// Trait for actions an agent performs periodically
///
/// A behavior is registered on an agent under a name together with a firing
/// period and an optional [`Condition`]. The scheduler invokes `execute`
/// once per scheduling pass in which the behavior is due.
#[async_trait]
pub trait Behavior: Send + Sync {
    /// Perform one round of the behavior
    async fn execute(&self) -> Result<()>;
}
