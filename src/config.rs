use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_WIDTH: u16 = 40;
pub const DEFAULT_HEIGHT: u16 = 18;
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(200);

/// Smallest side that still leaves a playable interior.
pub const MIN_SIDE: u16 = 4;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board must be at least {min}x{min}, got {width}x{height}")]
    BoardTooSmall { width: u16, height: u16, min: u16 },
    #[error("tick interval must be positive")]
    ZeroInterval,
}

/// Settings for a play session. Width and height survive restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u16,
    pub height: u16,
    pub base_interval: Duration,
    /// Fixed RNG seed; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            base_interval: DEFAULT_TICK_INTERVAL,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height, ..Default::default() }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < MIN_SIDE || self.height < MIN_SIDE {
            return Err(ConfigError::BoardTooSmall { width: self.width, height: self.height, min: MIN_SIDE });
        }
        if self.base_interval.is_zero() {
            return Err(ConfigError::ZeroInterval);
        }
        Ok(())
    }

    /// Terminal cells needed: the frame plus one status line below it.
    pub fn required_terminal_size(&self) -> (u16, u16) {
        (self.width.saturating_add(1), self.height.saturating_add(2))
    }
}
