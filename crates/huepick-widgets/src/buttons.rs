//! Button components: toggle buttons and filled action buttons.

use egui::{Align2, Color32, CornerRadius, CursorIcon, Sense, Stroke, StrokeKind, Ui, vec2};

use crate::{sizing, theme};

/// A toggle button with text label.
/// Uses solid blue background when selected.
pub struct ToggleButton<'a> {
    label: &'a str,
    selected: bool,
    min_width: Option<f32>,
}

impl<'a> ToggleButton<'a> {
    /// Create a new toggle button.
    pub fn new(label: &'a str, selected: bool) -> Self {
        Self {
            label,
            selected,
            min_width: None,
        }
    }

    /// Set minimum width.
    pub fn min_width(mut self, width: f32) -> Self {
        self.min_width = Some(width);
        self
    }

    /// Show the button and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let font_id = egui::FontId::proportional(12.0);
        let galley = ui.painter().layout_no_wrap(
            self.label.to_string(),
            font_id.clone(),
            Color32::PLACEHOLDER, // Color doesn't matter for sizing
        );
        let text_width = galley.size().x;
        let width = self.min_width.unwrap_or(text_width + 16.0).max(text_width + 16.0);
        let (rect, response) = ui.allocate_exact_size(vec2(width, 24.0), Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                theme::ACCENT
            } else if response.hovered() {
                Color32::from_gray(235)
            } else {
                Color32::from_gray(245)
            };

            let text_color = if self.selected {
                Color32::WHITE
            } else {
                Color32::from_gray(80)
            };

            ui.painter()
                .rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), bg_color);
            ui.painter()
                .text(rect.center(), Align2::CENTER_CENTER, self.label, font_id, text_color);
        }

        let clicked = response.clicked();
        response.on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}

/// Visual weight of an [`ActionButton`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ActionButtonStyle {
    /// Filled accent background.
    Primary,
    /// Outlined, white background.
    Secondary,
    /// Light gray background.
    #[default]
    Default,
}

/// A labelled push button.
pub struct ActionButton<'a> {
    label: &'a str,
    style: ActionButtonStyle,
    fill_width: bool,
    tooltip: Option<&'a str>,
}

impl<'a> ActionButton<'a> {
    /// Create a new button with the default style.
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            style: ActionButtonStyle::Default,
            fill_width: false,
            tooltip: None,
        }
    }

    /// Set the style.
    pub fn style(mut self, style: ActionButtonStyle) -> Self {
        self.style = style;
        self
    }

    /// Stretch across the available width.
    pub fn fill_width(mut self) -> Self {
        self.fill_width = true;
        self
    }

    /// Hover text, e.g. a keyboard shortcut.
    pub fn tooltip(mut self, tooltip: &'a str) -> Self {
        self.tooltip = Some(tooltip);
        self
    }

    /// Show the button and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let font_id = egui::FontId::proportional(13.0);
        let galley = ui
            .painter()
            .layout_no_wrap(self.label.to_string(), font_id.clone(), Color32::PLACEHOLDER);
        let width = if self.fill_width {
            ui.available_width()
        } else {
            galley.size().x + 24.0
        };
        let (rect, response) =
            ui.allocate_exact_size(vec2(width, sizing::BUTTON_HEIGHT), Sense::click());

        if ui.is_rect_visible(rect) {
            let hovered = response.hovered();
            let (bg_color, text_color, stroke) = match self.style {
                ActionButtonStyle::Primary => (
                    if hovered {
                        Color32::from_rgb(37, 99, 235)
                    } else {
                        theme::ACCENT
                    },
                    Color32::WHITE,
                    Stroke::NONE,
                ),
                ActionButtonStyle::Secondary => (
                    if hovered { theme::HOVER_BG } else { Color32::WHITE },
                    theme::TEXT,
                    Stroke::new(1.0, theme::BORDER),
                ),
                ActionButtonStyle::Default => (
                    if hovered {
                        Color32::from_gray(232)
                    } else {
                        Color32::from_gray(242)
                    },
                    theme::TEXT,
                    Stroke::NONE,
                ),
            };

            let radius = CornerRadius::same(sizing::CORNER_RADIUS);
            ui.painter().rect_filled(rect, radius, bg_color);
            if stroke != Stroke::NONE {
                ui.painter()
                    .rect_stroke(rect, radius, stroke, StrokeKind::Inside);
            }
            ui.painter()
                .text(rect.center(), Align2::CENTER_CENTER, self.label, font_id, text_color);
        }

        let clicked = response.clicked();
        let response = response.on_hover_cursor(CursorIcon::PointingHand);
        if let Some(tooltip) = self.tooltip {
            response.on_hover_text(tooltip);
        }
        clicked
    }
}

/// Filled accent button.
pub fn primary_btn(ui: &mut Ui, label: &str) -> bool {
    ActionButton::new(label).style(ActionButtonStyle::Primary).show(ui)
}

/// Outlined button.
pub fn secondary_btn(ui: &mut Ui, label: &str) -> bool {
    ActionButton::new(label).style(ActionButtonStyle::Secondary).show(ui)
}

/// Plain gray button.
pub fn default_btn(ui: &mut Ui, label: &str) -> bool {
    ActionButton::new(label).show(ui)
}
