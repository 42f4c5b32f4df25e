//! Picker state and the single update function that changes it.
//!
//! Every user intent becomes a [`Command`]. [`PickerState::update`] consumes
//! the old state and returns a [`Transition`]: the new state plus the side
//! effects the shell must carry out. Display is derived afterwards with
//! [`PickerView::project`](crate::view::PickerView::project), so nothing the
//! view does can feed back into an update.

use crate::color::{Color, Hsl, Hsv};
use crate::config::{CancelPolicy, ConfigError, PickerConfig};
use crate::mode::ColorMode;
use crate::palette::Palette;
use crate::selection::Selection;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// State serialization errors.
#[derive(Debug, Error)]
pub enum StateError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A user intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Apply the RGB fields.
    ApplyRgb(Color),
    /// Apply the HSV fields.
    ApplyHsv(Hsv),
    /// Apply the HSL fields.
    ApplyHsl(Hsl),
    /// Apply typed hex text; malformed text is ignored.
    ApplyHex(String),
    /// The color chooser was confirmed with a color.
    ChooserConfirmed(Color),
    /// The color chooser was dismissed.
    ChooserCanceled,
    /// A saved color was clicked.
    SelectEntry(usize),
    /// Replace the palette with freshly sampled colors.
    GeneratePalette,
    /// Empty the palette.
    ClearPalette,
    /// Switch the active input model.
    SetMode(ColorMode),
    /// Copy the current hex code again.
    CopyCurrent,
}

/// Side effects requested by an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Overwrite the clipboard text.
    CopyToClipboard(String),
    /// Reload the editable field buffers from the projection.
    RefreshFields,
}

/// Result of [`PickerState::update`].
#[derive(Debug, Clone)]
pub struct Transition {
    pub state: PickerState,
    pub effects: Vec<Effect>,
}

/// The complete in-memory state of the picker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerState {
    pub selection: Selection,
    pub palette: Palette,
    pub mode: ColorMode,
    #[serde(skip)]
    pub config: PickerConfig,
}

impl PickerState {
    /// Create an empty state with a validated configuration.
    pub fn new(config: PickerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    /// Apply `command` and return the resulting state and effects.
    pub fn update<R: Rng + ?Sized>(mut self, command: Command, rng: &mut R) -> Transition {
        let mut effects = Vec::new();

        match command {
            Command::ApplyRgb(color) | Command::ChooserConfirmed(color) => {
                self.select(color, &mut effects);
            }
            Command::ApplyHsv(hsv) => self.select(Color::from_hsv(hsv), &mut effects),
            Command::ApplyHsl(hsl) => self.select(Color::from_hsl(hsl), &mut effects),
            Command::ApplyHex(text) => match Color::from_hex(&text) {
                Ok(color) => self.select(color, &mut effects),
                Err(e) => log::debug!("Ignoring hex input: {}", e),
            },
            Command::ChooserCanceled => match self.config.cancel_policy {
                CancelPolicy::Reset => {
                    self.selection = Selection::NoSelection;
                    effects.push(Effect::RefreshFields);
                }
                CancelPolicy::Keep => log::debug!("Chooser canceled, keeping selection"),
            },
            Command::SelectEntry(index) => match self.palette.get(index) {
                Some(color) => self.select(color, &mut effects),
                None => log::debug!("Ignoring click on missing palette entry {}", index),
            },
            Command::GeneratePalette => {
                match self.palette.randomize(self.config.palette_size, rng) {
                    Ok(()) => log::debug!("Generated {} palette colors", self.palette.len()),
                    Err(e) => log::warn!("Palette generation failed: {}", e),
                }
            }
            Command::ClearPalette => self.palette.clear(),
            Command::SetMode(mode) => self.mode = mode,
            Command::CopyCurrent => {
                if let Some(color) = self.selection.color() {
                    effects.push(Effect::CopyToClipboard(color.to_hex()));
                }
            }
        }

        Transition { state: self, effects }
    }

    /// Enter `HasSelection(color)`: fields, swatch, clipboard and palette all follow.
    fn select(&mut self, color: Color, effects: &mut Vec<Effect>) {
        self.selection = Selection::HasSelection(color);
        if self.palette.add(color) {
            log::debug!("Added {} to palette", color);
        }
        effects.push(Effect::RefreshFields);
        effects.push(Effect::CopyToClipboard(color.to_hex()));
    }

    /// Serialize selection, palette and mode to JSON.
    pub fn to_json(&self) -> Result<String, StateError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Restore selection, palette and mode from JSON with a default config.
    pub fn from_json(json: &str) -> Result<Self, StateError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const RED: Color = Color::new(255, 0, 0);

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    fn run(state: PickerState, commands: impl IntoIterator<Item = Command>) -> (PickerState, Vec<Effect>) {
        let mut rng = rng();
        let mut effects = Vec::new();
        let mut state = state;
        for command in commands {
            let transition = state.update(command, &mut rng);
            state = transition.state;
            effects.extend(transition.effects);
        }
        (state, effects)
    }

    #[test]
    fn test_apply_rgb_red() {
        let (state, effects) = run(PickerState::default(), [Command::ApplyRgb(RED)]);

        assert_eq!(state.selection.readout(), "Color: #ff0000  (R: 255, G: 0, B: 0)");
        assert_eq!(
            effects,
            vec![
                Effect::RefreshFields,
                Effect::CopyToClipboard("#ff0000".to_string())
            ]
        );
        assert_eq!(state.palette.colors(), &[RED]);
    }

    #[test]
    fn test_same_color_twice_keeps_palette_size() {
        let (state, effects) = run(
            PickerState::default(),
            [Command::ApplyRgb(RED), Command::ApplyHex("#FF0000".to_string())],
        );
        assert_eq!(state.palette.len(), 1);
        // The clipboard is still written on every selection.
        let copies = effects
            .iter()
            .filter(|e| matches!(e, Effect::CopyToClipboard(_)))
            .count();
        assert_eq!(copies, 2);
    }

    #[test]
    fn test_hsv_and_hsl_apply() {
        let (state, _) = run(PickerState::default(), [Command::ApplyHsv(Hsv::new(240, 100, 100))]);
        assert_eq!(state.selection.color(), Some(Color::new(0, 0, 255)));

        let (state, _) = run(state, [Command::ApplyHsl(Hsl::new(0, 0, 100))]);
        assert_eq!(state.selection.color(), Some(Color::WHITE));
        assert_eq!(state.palette.len(), 2);
    }

    #[test]
    fn test_invalid_hex_is_ignored() {
        let (before, _) = run(PickerState::default(), [Command::ApplyRgb(RED)]);
        let (after, effects) = run(before.clone(), [Command::ApplyHex("#12345".to_string())]);
        assert_eq!(after, before);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_chooser_confirm_selects() {
        let green = Color::new(0, 255, 0);
        let (state, effects) = run(PickerState::default(), [Command::ChooserConfirmed(green)]);
        assert_eq!(state.selection, Selection::HasSelection(green));
        assert!(effects.contains(&Effect::CopyToClipboard("#00ff00".to_string())));
    }

    #[test]
    fn test_chooser_cancel_resets_by_default() {
        let (state, effects) = run(
            PickerState::default(),
            [Command::ApplyRgb(RED), Command::ChooserCanceled],
        );
        assert_eq!(state.selection, Selection::NoSelection);
        assert_eq!(state.selection.readout(), "Color: not selected");
        assert_eq!(effects.last(), Some(&Effect::RefreshFields));
        // The palette keeps what was collected.
        assert_eq!(state.palette.len(), 1);
    }

    #[test]
    fn test_chooser_cancel_can_keep_selection() {
        let config = PickerConfig::default().with_cancel_policy(CancelPolicy::Keep);
        let state = PickerState::new(config).unwrap();
        let (state, effects) = run(state, [Command::ApplyRgb(RED), Command::ChooserCanceled]);
        assert_eq!(state.selection, Selection::HasSelection(RED));
        assert_eq!(effects.len(), 2);
    }

    #[test]
    fn test_select_palette_entry() {
        let blue = Color::new(0, 0, 255);
        let (state, _) = run(
            PickerState::default(),
            [Command::ApplyRgb(RED), Command::ApplyRgb(blue), Command::SelectEntry(0)],
        );
        assert_eq!(state.selection.color(), Some(RED));
        assert_eq!(state.palette.colors(), &[RED, blue]);

        let (after, effects) = run(state.clone(), [Command::SelectEntry(9)]);
        assert_eq!(after, state);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_generate_twice_replaces_batch() {
        let (first, _) = run(
            PickerState::default(),
            [Command::ApplyRgb(RED), Command::GeneratePalette],
        );
        assert_eq!(first.palette.len(), 6);
        assert!(!first.palette.contains("#ff0000"));
        // Generation does not change what is selected.
        assert_eq!(first.selection.color(), Some(RED));

        let mut rng = StdRng::seed_from_u64(99);
        let second = first.clone().update(Command::GeneratePalette, &mut rng).state;
        assert_eq!(second.palette.len(), 6);
        for color in first.palette.iter() {
            assert!(!second.palette.contains(&color.to_hex()));
        }
    }

    #[test]
    fn test_generate_uses_configured_size() {
        let state = PickerState::new(PickerConfig::default().with_palette_size(7)).unwrap();
        let (state, effects) = run(state, [Command::GeneratePalette]);
        assert_eq!(state.palette.len(), 7);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_clear_palette() {
        let (state, _) = run(
            PickerState::default(),
            [Command::ApplyRgb(RED), Command::ClearPalette],
        );
        assert!(state.palette.is_empty());
        assert!(!state.palette.contains("#ff0000"));
        assert_eq!(state.selection.color(), Some(RED));
    }

    #[test]
    fn test_set_mode_keeps_selection() {
        let (state, effects) = run(
            PickerState::default(),
            [Command::ApplyRgb(RED), Command::SetMode(ColorMode::Hsv)],
        );
        assert_eq!(state.mode, ColorMode::Hsv);
        assert_eq!(state.selection.color(), Some(RED));
        assert_eq!(effects.len(), 2);
    }

    #[test]
    fn test_copy_current() {
        let (_, effects) = run(PickerState::default(), [Command::CopyCurrent]);
        assert!(effects.is_empty());

        let (_, effects) = run(
            PickerState::default(),
            [Command::ApplyRgb(RED), Command::CopyCurrent],
        );
        assert_eq!(effects.last(), Some(&Effect::CopyToClipboard("#ff0000".to_string())));
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        assert!(PickerState::new(PickerConfig::default().with_palette_size(0)).is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let (state, _) = run(
            PickerState::default(),
            [
                Command::ApplyRgb(Color::new(0, 255, 0)),
                Command::ApplyRgb(RED),
                Command::SetMode(ColorMode::Hsl),
            ],
        );
        let json = state.to_json().unwrap();
        assert!(json.contains("#00ff00"));

        let restored = PickerState::from_json(&json).unwrap();
        assert_eq!(restored, state);
        assert_eq!(restored.palette.colors(), &[Color::new(0, 255, 0), RED]);
    }

    #[test]
    fn test_from_json_rejects_duplicate_palette() {
        let json = r##"{"selection":"NoSelection","palette":["#ff0000","#ff0000"],"mode":"Rgb"}"##;
        assert!(matches!(
            PickerState::from_json(json),
            Err(StateError::Serialization(_))
        ));
    }
}
