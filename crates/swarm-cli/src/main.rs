//! Command-line demo for swarm-rs
//!
//! Wires two autonomous agents together: each one periodically publishes a
//! random two-word message to its peer, and each one reacts to incoming
//! messages whose content contains the trigger word.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use tokio::signal;
use tracing::info;

use swarm_core::{Agent, AgentRef, Behavior, Message, MessageHandler, Result};
use swarm_runtime::{AutonomousAgent, Supervisor};
use swarm_utils::Config;

#[derive(Parser, Debug)]
#[command(name = "swarm-cli")]
#[command(about = "Two-agent message passing demo", long_about = None)]
struct Args {
    /// Seconds between publish rounds
    #[arg(short, long)]
    period: Option<f64>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Logs incoming messages whose content contains the trigger word
struct KeywordHandler {
    agent_name: String,
    trigger: String,
}

#[async_trait]
impl MessageHandler for KeywordHandler {
    async fn handle(&self, message: Message) -> Result<()> {
        if message.content.to_lowercase().contains(&self.trigger) {
            info!(
                agent = %self.agent_name,
                content = %message.content,
                "received message containing trigger word"
            );
        }
        Ok(())
    }
}

/// Publishes a random two-word message to a peer agent
struct RandomPublisher {
    from: AgentRef,
    to: AgentRef,
    words: Vec<String>,
    rng: Mutex<SmallRng>,
}

#[async_trait]
impl Behavior for RandomPublisher {
    async fn execute(&self) -> Result<()> {
        let content = {
            let mut rng = self.rng.lock().unwrap();
            let mut pick = || self.words.choose(&mut *rng).cloned().unwrap_or_default();
            format!("{} {}", pick(), pick())
        };
        info!(
            from = %self.from.name(),
            to = %self.to.name(),
            content = %content,
            "publishing message"
        );
        self.from
            .send_message(Message::new("all", content), self.to.clone())
            .await;
        Ok(())
    }
}

fn register_demo_wiring(from: &Arc<AutonomousAgent>, to: &Arc<AutonomousAgent>, config: &Config, period: Duration) {
    from.register_message_handler(
        "all",
        Arc::new(KeywordHandler {
            agent_name: from.name().to_string(),
            trigger: config.trigger_word.clone(),
        }),
    );
    from.register_behavior(
        "random_message_publish",
        Arc::new(RandomPublisher {
            from: from.clone() as AgentRef,
            to: to.clone() as AgentRef,
            words: config.words.clone(),
            rng: Mutex::new(SmallRng::from_entropy()),
        }),
        period,
        None,
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    swarm_utils::init_tracing_with(if args.verbose { "debug" } else { "info" });

    let config = Config::default();
    let period_secs = args.period.unwrap_or(config.publish_period_secs);
    anyhow::ensure!(
        period_secs.is_finite() && period_secs >= 0.0,
        "period must be a non-negative number of seconds"
    );
    let period = Duration::from_secs_f64(period_secs);

    let agent_one = Arc::new(AutonomousAgent::new("agent-one"));
    let agent_two = Arc::new(AutonomousAgent::new("agent-two"));
    register_demo_wiring(&agent_one, &agent_two, &config, period);
    register_demo_wiring(&agent_two, &agent_one, &config, period);

    let supervisor = Supervisor::new()
        .with_agent(agent_one.clone() as AgentRef)
        .with_agent(agent_two.clone() as AgentRef);

    info!("starting agents, press ctrl-c to stop");
    tokio::select! {
        result = supervisor.run() => result?,
        _ = signal::ctrl_c() => info!("stopped"),
    }

    Ok(())
}
