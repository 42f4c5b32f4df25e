//! Color preview components: swatches and saved-color rows.

use egui::{
    Align2, Color32, CornerRadius, CursorIcon, Pos2, Rect, Sense, Stroke, StrokeKind, Ui, Vec2,
    vec2,
};

use crate::{sizing, theme};

/// A square color swatch with a thin outline.
///
/// `None` draws an empty, crossed-out swatch for "no color".
pub struct ColorSwatch<'a> {
    color: Option<Color32>,
    tooltip: &'a str,
    size: Vec2,
    clickable: bool,
}

impl<'a> ColorSwatch<'a> {
    /// Create a new swatch.
    pub fn new(color: Option<Color32>, tooltip: &'a str) -> Self {
        Self {
            color,
            tooltip,
            size: vec2(sizing::SMALL, sizing::SMALL),
            clickable: false,
        }
    }

    /// Set the size.
    pub fn size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    /// Show a pointing hand on hover and report clicks.
    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    /// Show the swatch and return (clicked, rect).
    pub fn show(self, ui: &mut Ui) -> (bool, Rect) {
        let sense = if self.clickable { Sense::click() } else { Sense::hover() };
        let (rect, response) = ui.allocate_exact_size(self.size, sense);

        if ui.is_rect_visible(rect) {
            paint_swatch(ui, rect, self.color);
        }

        let clicked = response.clicked();
        let response = if self.tooltip.is_empty() {
            response
        } else {
            response.on_hover_text(self.tooltip)
        };
        if self.clickable {
            response.on_hover_cursor(CursorIcon::PointingHand);
        }
        (clicked, rect)
    }
}

/// One entry of the saved-colors list: small swatch followed by the hex code.
pub struct PaletteRow<'a> {
    color: Color32,
    label: &'a str,
    selected: bool,
}

impl<'a> PaletteRow<'a> {
    /// Create a new row.
    pub fn new(color: Color32, label: &'a str) -> Self {
        Self {
            color,
            label,
            selected: false,
        }
    }

    /// Highlight this row as the current selection.
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Show the row and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let size = vec2(ui.available_width(), sizing::SMALL + 6.0);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                theme::SELECTED_BG
            } else if response.hovered() {
                theme::HOVER_BG
            } else {
                Color32::TRANSPARENT
            };
            ui.painter()
                .rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), bg_color);

            let swatch_rect = Rect::from_min_size(
                Pos2::new(rect.left() + 4.0, rect.center().y - sizing::SMALL / 2.0),
                vec2(sizing::SMALL, sizing::SMALL),
            );
            paint_swatch(ui, swatch_rect, Some(self.color));

            ui.painter().text(
                Pos2::new(swatch_rect.right() + 8.0, rect.center().y),
                Align2::LEFT_CENTER,
                self.label,
                egui::FontId::monospace(13.0),
                theme::TEXT,
            );
        }

        let clicked = response.clicked();
        response.on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}

fn paint_swatch(ui: &Ui, rect: Rect, color: Option<Color32>) {
    let painter = ui.painter();
    let outline = Stroke::new(1.0, theme::SWATCH_BORDER);
    match color {
        Some(color) => {
            painter.rect_filled(rect, CornerRadius::ZERO, color);
        }
        None => {
            painter.rect_filled(rect, CornerRadius::ZERO, Color32::WHITE);
            painter.line_segment(
                [rect.left_bottom(), rect.right_top()],
                Stroke::new(1.0, Color32::from_rgb(239, 68, 68)),
            );
        }
    }
    painter.rect_stroke(rect, CornerRadius::ZERO, outline, StrokeKind::Inside);
}
