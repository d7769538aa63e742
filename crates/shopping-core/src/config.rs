//! List Configuration
//!
//! Tunables for the completion celebration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

const DEFAULT_CELEBRATION_MS: u64 = 3000;
const DEFAULT_CONFETTI_PIECES: u32 = 300;

fn default_celebration_ms() -> u64 {
    DEFAULT_CELEBRATION_MS
}

fn default_confetti_pieces() -> u32 {
    DEFAULT_CONFETTI_PIECES
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListConfig {
    /// How long the celebration stays active once fired
    #[serde(default = "default_celebration_ms")]
    pub celebration_ms: u64,
    /// Confetti pieces rendered while active
    #[serde(default = "default_confetti_pieces")]
    pub confetti_pieces: u32,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            celebration_ms: DEFAULT_CELEBRATION_MS,
            confetti_pieces: DEFAULT_CONFETTI_PIECES,
        }
    }
}

impl ListConfig {
    /// Parse from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> DomainResult<Self> {
        serde_json::from_str(json).map_err(|e| DomainError::InvalidConfig(e.to_string()))
    }

    pub fn celebration_duration(&self) -> Duration {
        Duration::from_millis(self.celebration_ms)
    }
}
