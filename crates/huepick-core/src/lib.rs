//! Huepick Core Library
//!
//! Platform-agnostic color model, palette and selection state for the Huepick
//! color picker. The application shell only sends [`Command`]s and renders
//! [`PickerView`]s.

pub mod color;
pub mod config;
pub mod mode;
pub mod palette;
pub mod selection;
pub mod state;
pub mod view;

pub use color::{Color, ColorError, Hsl, Hsv, channel_to_percent, percent_to_channel};
pub use config::{CancelPolicy, ConfigError, PickerConfig, DEFAULT_PALETTE_SIZE};
pub use mode::ColorMode;
pub use palette::{Palette, PaletteError};
pub use selection::Selection;
pub use state::{Command, Effect, PickerState, StateError, Transition};
pub use view::{ColorFields, PaletteRow, PickerView};
