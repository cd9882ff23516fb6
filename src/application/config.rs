//! Driver-supplied simulation settings.

use serde::{Deserialize, Serialize};

const MIN_UPDATES_PER_SECOND: u32 = 1;
const MAX_UPDATES_PER_SECOND: u32 = 60;

fn default_updates_per_second() -> u32 {
    MAX_UPDATES_PER_SECOND
}

/// Simulation configuration owned by the driver. The core never computes
/// these values; it only consumes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Grid width in cells
    pub width: usize,
    /// Grid height in cells
    pub height: usize,
    /// Upper bound on generations advanced per second
    #[serde(default = "default_updates_per_second")]
    pub updates_per_second: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
            updates_per_second: MAX_UPDATES_PER_SECOND,
        }
    }
}

impl SimConfig {
    /// Clamp the configuration into its supported ranges: dimensions at
    /// least 1x1, update rate within 1..=60.
    pub fn clamped(mut self) -> Self {
        self.width = self.width.max(1);
        self.height = self.height.max(1);
        self.updates_per_second = self
            .updates_per_second
            .clamp(MIN_UPDATES_PER_SECOND, MAX_UPDATES_PER_SECOND);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimConfig::default();
        assert_eq!((config.width, config.height), (64, 64));
        assert_eq!(config.updates_per_second, 60);
    }

    #[test]
    fn test_clamping() {
        let config = SimConfig {
            width: 0,
            height: 10,
            updates_per_second: 500,
        }
        .clamped();

        assert_eq!((config.width, config.height), (1, 10));
        assert_eq!(config.updates_per_second, 60);

        let slow = SimConfig {
            updates_per_second: 0,
            ..SimConfig::default()
        }
        .clamped();
        assert_eq!(slow.updates_per_second, 1);
    }

    #[test]
    fn test_update_rate_defaults_when_missing_from_json() {
        let config: SimConfig = serde_json::from_str(r#"{"width": 32, "height": 16}"#).unwrap();
        assert_eq!((config.width, config.height), (32, 16));
        assert_eq!(config.updates_per_second, 60);
    }
}
