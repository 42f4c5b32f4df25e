//! Input fields: labelled numeric spinners and single-line text entry.

use std::ops::RangeInclusive;

use egui::{DragValue, Response, TextEdit, Ui, emath::Numeric, vec2};

use crate::theme;

/// Width reserved for a field's leading label.
const LABEL_WIDTH: f32 = 28.0;

/// A labelled integer spinner clamped to `range`.
///
/// Drag or type to change the value. Nothing outside `range` can be entered.
pub fn spin_field<T: Numeric>(
    ui: &mut Ui,
    label: &str,
    value: &mut T,
    range: RangeInclusive<T>,
) -> Response {
    ui.horizontal(|ui| {
        ui.allocate_ui_with_layout(
            vec2(LABEL_WIDTH, ui.spacing().interact_size.y),
            egui::Layout::left_to_right(egui::Align::Center),
            |ui| {
                ui.label(egui::RichText::new(label).color(theme::TEXT));
            },
        );
        ui.add_sized(
            vec2(ui.available_width(), ui.spacing().interact_size.y),
            DragValue::new(value).range(range).speed(1.0),
        )
    })
    .inner
}

/// Single-line text entry with placeholder text.
pub fn input_text(ui: &mut Ui, text: &mut String, width: f32, hint: &str) -> Response {
    ui.add(
        TextEdit::singleline(text)
            .hint_text(hint)
            .desired_width(width)
            .font(egui::TextStyle::Monospace),
    )
}
