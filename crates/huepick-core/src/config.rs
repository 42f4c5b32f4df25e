//! Picker configuration.

use crate::color::COLOR_SPACE_SIZE;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of colors in a generated palette.
pub const DEFAULT_PALETTE_SIZE: usize = 6;

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Palette size must be between 1 and {max}, got {got}")]
    PaletteSize { got: usize, max: usize },
}

/// What a canceled color chooser does to the current selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CancelPolicy {
    /// Return to "not selected".
    #[default]
    Reset,
    /// Leave the previous selection in place.
    Keep,
}

/// Behavior knobs for the picker state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerConfig {
    /// Number of colors produced by palette generation.
    pub palette_size: usize,
    /// Effect of canceling the color chooser.
    pub cancel_policy: CancelPolicy,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            palette_size: DEFAULT_PALETTE_SIZE,
            cancel_policy: CancelPolicy::default(),
        }
    }
}

impl PickerConfig {
    /// Check that the configuration can be honored.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.palette_size == 0 || self.palette_size > COLOR_SPACE_SIZE {
            return Err(ConfigError::PaletteSize {
                got: self.palette_size,
                max: COLOR_SPACE_SIZE,
            });
        }
        Ok(())
    }

    pub fn with_palette_size(mut self, palette_size: usize) -> Self {
        self.palette_size = palette_size;
        self
    }

    pub fn with_cancel_policy(mut self, cancel_policy: CancelPolicy) -> Self {
        self.cancel_policy = cancel_policy;
        self
    }
}
