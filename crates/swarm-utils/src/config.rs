//! Configuration management utilities

use serde::{Deserialize, Serialize};

/// Configuration for the demo wiring
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Seconds between publisher rounds
    pub publish_period_secs: f64,
    /// Word a receiving handler reacts to
    pub trigger_word: String,
    /// Vocabulary the publisher draws from
    pub words: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            publish_period_secs: 2.0,
            trigger_word: "hello".to_string(),
            words: [
                "hello", "sun", "world", "space", "moon", "crypto", "sky", "ocean", "universe",
                "human",
            ]
            .into_iter()
            .map(str::to_string)
            .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.publish_period_secs, 2.0);
        assert_eq!(config.trigger_word, "hello");
        assert!(config.words.contains(&"hello".to_string()));
    }
}
