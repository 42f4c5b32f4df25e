//! Deduplicated, insertion-ordered color palette.

use crate::color::{COLOR_SPACE_SIZE, Color};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Palette errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    #[error("Cannot sample {0} distinct colors from the 24-bit color space")]
    TooManyColors(usize),
    #[error("Duplicate palette entry: {0}")]
    Duplicate(String),
}

/// Colors collected in this session, each hex code at most once.
///
/// The ordered list drives display; the hex set answers membership in O(1).
/// Serializes as a plain list of hex codes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Color>", into = "Vec<Color>")]
pub struct Palette {
    entries: Vec<Color>,
    seen: HashSet<String>,
}

impl Palette {
    /// Create an empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `color` unless its hex code is already present.
    /// Returns true if the color was inserted.
    pub fn add(&mut self, color: Color) -> bool {
        if !self.seen.insert(color.to_hex()) {
            return false;
        }
        self.entries.push(color);
        true
    }

    /// Membership test by hex code. The query is normalized, so `#FF0000`
    /// matches `#ff0000`; unparseable codes are never present.
    pub fn contains(&self, hex: &str) -> bool {
        Color::from_hex(hex).is_ok_and(|color| self.seen.contains(&color.to_hex()))
    }

    /// Remove every color.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.seen.clear();
    }

    /// Replace the contents with `count` distinct, uniformly random colors.
    ///
    /// Colors are drawn without replacement from the 24-bit color space, so
    /// the call never retries and always terminates.
    pub fn randomize<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) -> Result<(), PaletteError> {
        if count > COLOR_SPACE_SIZE {
            return Err(PaletteError::TooManyColors(count));
        }

        self.clear();
        for index in rand::seq::index::sample(rng, COLOR_SPACE_SIZE, count) {
            self.add(Color::from_index(index as u32));
        }
        debug_assert_eq!(self.len(), count);
        Ok(())
    }

    /// Number of colors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the palette has no colors.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Color at `index` in insertion order.
    pub fn get(&self, index: usize) -> Option<Color> {
        self.entries.get(index).copied()
    }

    /// Colors in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.entries.iter().copied()
    }

    /// Colors in insertion order, as a slice.
    pub fn colors(&self) -> &[Color] {
        &self.entries
    }
}

impl TryFrom<Vec<Color>> for Palette {
    type Error = PaletteError;

    fn try_from(colors: Vec<Color>) -> Result<Self, Self::Error> {
        let mut palette = Palette::new();
        for color in colors {
            if !palette.add(color) {
                return Err(PaletteError::Duplicate(color.to_hex()));
            }
        }
        Ok(palette)
    }
}

impl From<Palette> for Vec<Color> {
    fn from(palette: Palette) -> Self {
        palette.entries
    }
}

impl FromIterator<Color> for Palette {
    /// Collect colors, silently skipping duplicates.
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        let mut palette = Palette::new();
        for color in iter {
            palette.add(color);
        }
        palette
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const RED: Color = Color::new(255, 0, 0);
    const GREEN: Color = Color::new(0, 255, 0);

    #[test]
    fn test_add_is_idempotent() {
        let mut palette = Palette::new();
        assert!(palette.add(RED));
        assert!(!palette.add(RED));
        assert!(!palette.add(Color::from_hex("#FF0000").unwrap()));
        assert_eq!(palette.len(), 1);
        assert_eq!(palette.colors(), &[RED]);
    }

    #[test]
    fn test_insertion_order() {
        let mut palette = Palette::new();
        palette.add(GREEN);
        palette.add(RED);
        palette.add(GREEN);
        assert_eq!(palette.iter().collect::<Vec<_>>(), vec![GREEN, RED]);
        assert_eq!(palette.get(1), Some(RED));
        assert_eq!(palette.get(2), None);
    }

    #[test]
    fn test_contains() {
        let mut palette = Palette::new();
        palette.add(RED);
        assert!(palette.contains("#ff0000"));
        assert!(palette.contains("#FF0000"));
        assert!(!palette.contains("#00ff00"));
        assert!(!palette.contains("not a color"));
    }

    #[test]
    fn test_clear_forgets_everything() {
        let mut palette = Palette::new();
        palette.add(RED);
        palette.add(GREEN);
        palette.clear();
        assert!(palette.is_empty());
        assert!(!palette.contains("#ff0000"));
        assert!(!palette.contains("#00ff00"));
        // Previously seen colors can be added again.
        assert!(palette.add(RED));
    }

    #[test]
    fn test_randomize_exact_count() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut palette = Palette::new();
        for count in [0, 1, 6, 7, 64] {
            palette.randomize(count, &mut rng).unwrap();
            assert_eq!(palette.len(), count);
            let distinct: HashSet<String> = palette.iter().map(Color::to_hex).collect();
            assert_eq!(distinct.len(), count);
        }
    }

    #[test]
    fn test_randomize_replaces_previous_contents() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut palette = Palette::new();
        palette.add(RED);
        palette.randomize(6, &mut rng).unwrap();
        let first: Vec<Color> = palette.iter().collect();

        palette.randomize(6, &mut rng).unwrap();
        assert_eq!(palette.len(), 6);
        for color in first {
            assert!(!palette.contains(&color.to_hex()), "{color} survived regeneration");
        }
    }

    #[test]
    fn test_randomize_rejects_oversized_request() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut palette = Palette::new();
        palette.add(RED);
        let err = palette.randomize(COLOR_SPACE_SIZE + 1, &mut rng).unwrap_err();
        assert_eq!(err, PaletteError::TooManyColors(COLOR_SPACE_SIZE + 1));
        // Failed requests leave the palette alone.
        assert_eq!(palette.colors(), &[RED]);
    }

    #[test]
    fn test_serde_round_trip_keeps_order() {
        let palette: Palette = [GREEN, RED].into_iter().collect();
        let json = serde_json::to_string(&palette).unwrap();
        assert_eq!(json, r##"["#00ff00","#ff0000"]"##);

        let restored: Palette = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, palette);
        assert!(restored.contains("#00ff00"));
    }

    #[test]
    fn test_deserialize_rejects_duplicates() {
        let result = serde_json::from_str::<Palette>(r##"["#ff0000","#FF0000"]"##);
        assert!(result.is_err());
    }
}
