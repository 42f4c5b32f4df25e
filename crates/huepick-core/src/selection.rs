//! The currently displayed color.

use crate::color::Color;
use serde::{Deserialize, Serialize};

/// Readout shown when nothing is selected.
pub const NOT_SELECTED: &str = "Color: not selected";

/// Either nothing, or the single color currently on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Selection {
    #[default]
    NoSelection,
    HasSelection(Color),
}

impl Selection {
    pub fn color(&self) -> Option<Color> {
        match self {
            Selection::NoSelection => None,
            Selection::HasSelection(color) => Some(*color),
        }
    }

    pub fn is_selected(&self) -> bool {
        matches!(self, Selection::HasSelection(_))
    }

    /// Text for the color-info readout, e.g. `Color: #ff0000  (R: 255, G: 0, B: 0)`.
    pub fn readout(&self) -> String {
        match self {
            Selection::NoSelection => NOT_SELECTED.to_string(),
            Selection::HasSelection(color) => format!(
                "Color: {}  (R: {}, G: {}, B: {})",
                color.to_hex(),
                color.r,
                color.g,
                color.b
            ),
        }
    }
}

impl From<Option<Color>> for Selection {
    fn from(color: Option<Color>) -> Self {
        color.map_or(Selection::NoSelection, Selection::HasSelection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readout() {
        assert_eq!(Selection::NoSelection.readout(), "Color: not selected");
        assert_eq!(
            Selection::HasSelection(Color::new(255, 0, 0)).readout(),
            "Color: #ff0000  (R: 255, G: 0, B: 0)"
        );
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Selection::from(None), Selection::NoSelection);
        let selection = Selection::from(Some(Color::WHITE));
        assert!(selection.is_selected());
        assert_eq!(selection.color(), Some(Color::WHITE));
    }
}
