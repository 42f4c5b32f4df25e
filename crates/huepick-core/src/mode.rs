//! Input color models.

use serde::{Deserialize, Serialize};

/// The color model whose numeric fields are shown and applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ColorMode {
    #[default]
    Rgb,
    Hsv,
    Hsl,
}

impl ColorMode {
    pub const ALL: &'static [ColorMode] = &[ColorMode::Rgb, ColorMode::Hsv, ColorMode::Hsl];

    pub fn name(&self) -> &'static str {
        match self {
            ColorMode::Rgb => "RGB",
            ColorMode::Hsv => "HSV",
            ColorMode::Hsl => "HSL",
        }
    }

    /// Channel labels in field order.
    pub fn channel_labels(&self) -> [&'static str; 3] {
        match self {
            ColorMode::Rgb => ["R", "G", "B"],
            ColorMode::Hsv => ["H", "S", "V"],
            ColorMode::Hsl => ["H", "S", "L"],
        }
    }

    /// Label of the apply action for this mode.
    pub fn apply_label(&self) -> &'static str {
        match self {
            ColorMode::Rgb => "Apply RGB",
            ColorMode::Hsv => "Apply HSV",
            ColorMode::Hsl => "Apply HSL",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_modes_have_distinct_names() {
        let names: Vec<_> = ColorMode::ALL.iter().map(ColorMode::name).collect();
        assert_eq!(names, vec!["RGB", "HSV", "HSL"]);
        assert_eq!(ColorMode::default(), ColorMode::Rgb);
    }

    #[test]
    fn test_apply_label_matches_name() {
        for mode in ColorMode::ALL {
            assert!(mode.apply_label().ends_with(mode.name()));
        }
    }
}
