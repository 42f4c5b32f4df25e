//! Read-only projection of picker state for the presentation layer.

use crate::color::{Color, Hsl, Hsv};
use crate::mode::ColorMode;
use crate::state::PickerState;
use serde::{Deserialize, Serialize};

/// Numeric field values for all three color models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ColorFields {
    pub rgb: Color,
    pub hsv: Hsv,
    pub hsl: Hsl,
}

impl ColorFields {
    /// Fields mirroring `color` in every model.
    pub fn from_color(color: Color) -> Self {
        Self {
            rgb: color,
            hsv: color.to_hsv(),
            hsl: color.to_hsl(),
        }
    }

    /// The color described by the field group of `mode`.
    pub fn color_for(&self, mode: ColorMode) -> Color {
        match mode {
            ColorMode::Rgb => self.rgb,
            ColorMode::Hsv => Color::from_hsv(self.hsv),
            ColorMode::Hsl => Color::from_hsl(self.hsl),
        }
    }
}

/// One row of the saved-colors list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteRow {
    pub hex: String,
    pub color: Color,
}

/// Everything the window shows, derived from [`PickerState`] alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerView {
    pub mode: ColorMode,
    pub readout: String,
    /// Preview swatch color; `None` draws an empty swatch.
    pub swatch: Option<Color>,
    /// Field values; zeros when nothing is selected.
    pub fields: ColorFields,
    pub palette: Vec<PaletteRow>,
}

impl PickerView {
    /// Project `state` into display values.
    pub fn project(state: &PickerState) -> Self {
        let swatch = state.selection.color();
        Self {
            mode: state.mode,
            readout: state.selection.readout(),
            swatch,
            fields: swatch.map(ColorFields::from_color).unwrap_or_default(),
            palette: state
                .palette
                .iter()
                .map(|color| PaletteRow {
                    hex: color.to_hex(),
                    color,
                })
                .collect(),
        }
    }
}
