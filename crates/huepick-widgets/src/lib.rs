//! Reusable egui widget components for the Huepick color picker.
//!
//! - **Buttons**: toggle buttons and filled action buttons
//! - **Colors**: preview swatches and saved-color rows
//! - **Fields**: numeric spin fields and single-line text input
//! - **Frames**: modal dialog frame
//! - **Layout**: section labels, separators

pub mod buttons;
pub mod colors;
pub mod fields;
pub mod frames;
pub mod layout;

pub use buttons::{
    ActionButton, ActionButtonStyle, ToggleButton, default_btn, primary_btn, secondary_btn,
};
pub use colors::{ColorSwatch, PaletteRow};
pub use fields::{input_text, spin_field};
pub use frames::modal_frame;
pub use layout::{section_label, separator};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Small swatch size (palette rows)
    pub const SMALL: f32 = 20.0;
    /// Button height
    pub const BUTTON_HEIGHT: f32 = 28.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 4;
    /// Modal corner radius
    pub const MODAL_RADIUS: u8 = 12;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Swatch outline
    pub const SWATCH_BORDER: Color32 = Color32::from_rgb(68, 68, 68);
    /// Selection/active color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Hover background
    pub const HOVER_BG: Color32 = Color32::from_rgb(245, 245, 245);
    /// Selected background
    pub const SELECTED_BG: Color32 = Color32::from_rgb(235, 245, 255);
}
