//! Frame preset for modal dialogs.

use egui::{Color32, CornerRadius, Frame, Margin, Shadow, Stroke};

use crate::{sizing, theme};

/// White card with a soft shadow, used for dialogs drawn over a dimmed backdrop.
pub fn modal_frame() -> Frame {
    Frame::new()
        .fill(Color32::WHITE)
        .stroke(Stroke::new(1.0, theme::BORDER))
        .corner_radius(CornerRadius::same(sizing::MODAL_RADIUS))
        .inner_margin(Margin::same(20))
        .shadow(Shadow {
            offset: [0, 4],
            blur: 16,
            spread: 0,
            color: Color32::from_black_alpha(40),
        })
}
