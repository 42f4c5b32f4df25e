//! Huepick Application
//!
//! The application shell: window, GPU surface, egui UI, clipboard and
//! keyboard shortcuts around the picker state in `huepick-core`.

mod app;
mod clipboard;
mod event_handler;
mod shortcuts;
mod ui;

pub use app::{App, AppConfig, AppError};
pub use clipboard::{ClipboardError, ClipboardSink, SystemClipboard};
pub use event_handler::{Dispatched, EventHandler};
pub use shortcuts::{Shortcut, ShortcutCommand, ShortcutRegistry};
pub use ui::{UiAction, UiState, render_ui};
