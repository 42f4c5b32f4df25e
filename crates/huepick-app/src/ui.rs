//! UI components using egui.

use egui::{Align2, Color32, Context, Frame, Margin, Pos2, Vec2, color_picker::Alpha, vec2};
use huepick_core::color::{MAX_HUE, MAX_PERCENT};
use huepick_core::{Color, ColorFields, ColorMode, Command, Hsl, Hsv, PickerView};

use huepick_widgets::{
    ActionButton, ActionButtonStyle, ColorSwatch, PaletteRow, ToggleButton, default_btn,
    input_text, modal_frame, primary_btn, secondary_btn, section_label, separator, spin_field,
    theme,
};

use crate::shortcuts::{ShortcutCommand, ShortcutRegistry};

/// Height of the saved-colors list.
const PALETTE_LIST_HEIGHT: f32 = 140.0;

/// Size of the preview swatch next to the readout.
const PREVIEW_SIZE: f32 = 20.0;

/// Actions that can be triggered from the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    ApplyRgb(Color),
    ApplyHsv(Hsv),
    ApplyHsl(Hsl),
    ApplyHex(String),
    ChooserConfirmed(Color),
    ChooserCanceled,
    SelectEntry(usize),
    GeneratePalette,
    ClearPalette,
    SetMode(ColorMode),
    CopyCurrent,
    ToggleShortcuts,
}

impl UiAction {
    /// The picker command for this action, if it changes picker state.
    pub fn into_command(self) -> Option<Command> {
        let command = match self {
            UiAction::ApplyRgb(color) => Command::ApplyRgb(color),
            UiAction::ApplyHsv(hsv) => Command::ApplyHsv(hsv),
            UiAction::ApplyHsl(hsl) => Command::ApplyHsl(hsl),
            UiAction::ApplyHex(text) => Command::ApplyHex(text),
            UiAction::ChooserConfirmed(color) => Command::ChooserConfirmed(color),
            UiAction::ChooserCanceled => Command::ChooserCanceled,
            UiAction::SelectEntry(index) => Command::SelectEntry(index),
            UiAction::GeneratePalette => Command::GeneratePalette,
            UiAction::ClearPalette => Command::ClearPalette,
            UiAction::SetMode(mode) => Command::SetMode(mode),
            UiAction::CopyCurrent => Command::CopyCurrent,
            UiAction::ToggleShortcuts => return None,
        };
        Some(command)
    }
}

/// UI state that persists across frames.
///
/// Field buffers are edited freely; nothing reaches the picker state until
/// an apply button is pressed.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Editable numeric fields for every color model.
    pub fields: ColorFields,
    /// Editable hex text.
    pub hex_input: String,
    /// Draft color while the chooser dialog is open.
    pub chooser: Option<Color32>,
    /// Is the shortcuts modal open?
    pub shortcuts_open: bool,
}

impl UiState {
    /// Create UI state mirroring `view`.
    pub fn from_view(view: &PickerView) -> Self {
        let mut ui_state = Self::default();
        ui_state.sync_fields(view);
        ui_state
    }

    /// Overwrite the field buffers and hex text with the projected values.
    pub fn sync_fields(&mut self, view: &PickerView) {
        self.fields = view.fields;
        self.hex_input = view.swatch.map(|color| color.to_hex()).unwrap_or_default();
    }

    /// Open the chooser, starting from the current color or white.
    pub fn open_chooser(&mut self, view: &PickerView) {
        let start = view.swatch.unwrap_or(Color::WHITE);
        self.chooser = Some(to_color32(start));
    }

    /// The apply action for the field group of `mode`.
    fn apply_action(&self, mode: ColorMode) -> UiAction {
        match mode {
            ColorMode::Rgb => UiAction::ApplyRgb(self.fields.rgb),
            ColorMode::Hsv => UiAction::ApplyHsv(self.fields.hsv),
            ColorMode::Hsl => UiAction::ApplyHsl(self.fields.hsl),
        }
    }
}

pub fn to_color32(color: Color) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}

pub fn from_color32(color: Color32) -> Color {
    Color::new(color.r(), color.g(), color.b())
}

/// Render the entire UI and return any action triggered.
pub fn render_ui(ctx: &Context, ui_state: &mut UiState, view: &PickerView) -> Option<UiAction> {
    let mut action = handle_shortcuts(ctx, ui_state, view);

    egui::CentralPanel::default()
        .frame(Frame::new().inner_margin(Margin::same(12)))
        .show(ctx, |ui| {
            if let Some(main_action) = render_main(ui, ui_state, view) {
                action = Some(main_action);
            }
        });

    if ui_state.chooser.is_some() {
        if let Some(chooser_action) = render_chooser(ctx, ui_state) {
            action = Some(chooser_action);
        }
    }

    if ui_state.shortcuts_open {
        render_shortcuts_modal(ctx, ui_state);
    }

    action
}

fn handle_shortcuts(ctx: &Context, ui_state: &mut UiState, view: &PickerView) -> Option<UiAction> {
    let command = ShortcutRegistry::consume(ctx)?;

    // The chooser is modal: only Escape gets through.
    if ui_state.chooser.is_some() && command != ShortcutCommand::CancelChooser {
        return None;
    }
    // So is the help overlay, which F1 also dismisses.
    if ui_state.shortcuts_open
        && !matches!(
            command,
            ShortcutCommand::CancelChooser | ShortcutCommand::ToggleHelp
        )
    {
        return None;
    }

    match command {
        ShortcutCommand::OpenChooser => {
            ui_state.open_chooser(view);
            None
        }
        ShortcutCommand::CancelChooser => {
            if ui_state.chooser.take().is_some() {
                Some(UiAction::ChooserCanceled)
            } else {
                ui_state.shortcuts_open = false;
                None
            }
        }
        ShortcutCommand::GeneratePalette => Some(UiAction::GeneratePalette),
        ShortcutCommand::ClearPalette => Some(UiAction::ClearPalette),
        ShortcutCommand::CopyCurrent => Some(UiAction::CopyCurrent),
        ShortcutCommand::ToggleHelp => Some(UiAction::ToggleShortcuts),
    }
}

fn render_main(ui: &mut egui::Ui, ui_state: &mut UiState, view: &PickerView) -> Option<UiAction> {
    let mut action = None;

    // Readout and preview
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(&view.readout).size(13.0).color(theme::TEXT));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let (clicked, _) = ColorSwatch::new(view.swatch.map(to_color32), "Copy hex code")
                .size(vec2(PREVIEW_SIZE, PREVIEW_SIZE))
                .clickable(view.swatch.is_some())
                .show(ui);
            if clicked {
                action = Some(UiAction::CopyCurrent);
            }
        });
    });
    ui.add_space(4.0);

    // Mode selector and chooser
    ui.horizontal(|ui| {
        for mode in ColorMode::ALL {
            if ToggleButton::new(mode.name(), view.mode == *mode)
                .min_width(48.0)
                .show(ui)
                && view.mode != *mode
            {
                action = Some(UiAction::SetMode(*mode));
            }
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ActionButton::new("Select color").tooltip("Ctrl+O").show(ui) {
                ui_state.open_chooser(view);
            }
        });
    });
    ui.add_space(4.0);

    render_fields(ui, ui_state, view.mode);
    if ActionButton::new(view.mode.apply_label())
        .style(ActionButtonStyle::Primary)
        .fill_width()
        .show(ui)
    {
        action = Some(ui_state.apply_action(view.mode));
    }

    // Hex entry
    ui.horizontal(|ui| {
        let response = input_text(ui, &mut ui_state.hex_input, 200.0, "#rrggbb");
        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if default_btn(ui, "Apply hex") || submitted {
            action = Some(UiAction::ApplyHex(ui_state.hex_input.clone()));
        }
    });
    separator(ui);

    if ActionButton::new("Generate Custom Palette")
        .fill_width()
        .tooltip("Ctrl+G")
        .show(ui)
    {
        action = Some(UiAction::GeneratePalette);
    }

    section_label(ui, "Saved Colors:");
    egui::ScrollArea::vertical()
        .min_scrolled_height(PALETTE_LIST_HEIGHT)
        .max_height(PALETTE_LIST_HEIGHT)
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for (index, row) in view.palette.iter().enumerate() {
                let selected = view.swatch == Some(row.color);
                if PaletteRow::new(to_color32(row.color), &row.hex)
                    .selected(selected)
                    .show(ui)
                {
                    action = Some(UiAction::SelectEntry(index));
                }
            }
        });

    if ActionButton::new("Clear Palette")
        .style(ActionButtonStyle::Secondary)
        .fill_width()
        .tooltip("Ctrl+Shift+Delete")
        .show(ui)
    {
        action = Some(UiAction::ClearPalette);
    }

    action
}

/// Three spinners for the active model. Editing them never dispatches.
fn render_fields(ui: &mut egui::Ui, ui_state: &mut UiState, mode: ColorMode) {
    let [a, b, c] = mode.channel_labels();
    let fields = &mut ui_state.fields;
    match mode {
        ColorMode::Rgb => {
            spin_field(ui, a, &mut fields.rgb.r, 0..=255);
            spin_field(ui, b, &mut fields.rgb.g, 0..=255);
            spin_field(ui, c, &mut fields.rgb.b, 0..=255);
        }
        ColorMode::Hsv => {
            spin_field(ui, a, &mut fields.hsv.h, 0..=MAX_HUE);
            spin_field(ui, b, &mut fields.hsv.s, 0..=MAX_PERCENT);
            spin_field(ui, c, &mut fields.hsv.v, 0..=MAX_PERCENT);
        }
        ColorMode::Hsl => {
            spin_field(ui, a, &mut fields.hsl.h, 0..=MAX_HUE);
            spin_field(ui, b, &mut fields.hsl.s, 0..=MAX_PERCENT);
            spin_field(ui, c, &mut fields.hsl.l, 0..=MAX_PERCENT);
        }
    }
}

/// Dimmed full-window layer that blocks the main UI; returns true if clicked.
fn backdrop(ctx: &Context, id: &str) -> bool {
    egui::Area::new(egui::Id::new(id))
        .fixed_pos(Pos2::ZERO)
        .order(egui::Order::Middle)
        .show(ctx, |ui| {
            let screen_rect = ctx.input(|i| i.content_rect());
            let response = ui.allocate_rect(screen_rect, egui::Sense::click());
            ui.painter()
                .rect_filled(screen_rect, 0.0, Color32::from_black_alpha(80));
            response.clicked()
        })
        .inner
}

/// Render the color chooser modal.
fn render_chooser(ctx: &Context, ui_state: &mut UiState) -> Option<UiAction> {
    let mut action = None;

    if backdrop(ctx, "chooser_backdrop") {
        action = Some(UiAction::ChooserCanceled);
    }

    egui::Area::new(egui::Id::new("chooser_modal"))
        .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            modal_frame().show(ui, |ui| {
                ui.set_width(280.0);
                ui.label(egui::RichText::new("Select color").size(16.0).strong());
                ui.add_space(12.0);

                let Some(draft) = ui_state.chooser.as_mut() else {
                    return;
                };
                egui::color_picker::color_picker_color32(ui, draft, Alpha::Opaque);
                ui.add_space(12.0);

                ui.horizontal(|ui| {
                    if primary_btn(ui, "OK") {
                        action = Some(UiAction::ChooserConfirmed(from_color32(*draft)));
                    }
                    if secondary_btn(ui, "Cancel") {
                        action = Some(UiAction::ChooserCanceled);
                    }
                });
            });
        });

    if action.is_some() {
        ui_state.chooser = None;
    }
    action
}

/// Render the keyboard shortcuts modal.
fn render_shortcuts_modal(ctx: &Context, ui_state: &mut UiState) {
    if backdrop(ctx, "shortcuts_backdrop") {
        ui_state.shortcuts_open = false;
    }

    egui::Area::new(egui::Id::new("shortcuts_modal"))
        .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            modal_frame().show(ui, |ui| {
                ui.set_width(300.0);
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("Keyboard Shortcuts").size(16.0).strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if default_btn(ui, "✕") {
                            ui_state.shortcuts_open = false;
                        }
                    });
                });
                ui.add_space(12.0);

                for shortcut in ShortcutRegistry::all() {
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(shortcut.format())
                                .size(12.0)
                                .family(egui::FontFamily::Monospace)
                                .color(Color32::from_rgb(100, 116, 139)),
                        );
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(
                                egui::RichText::new(shortcut.description)
                                    .size(12.0)
                                    .color(theme::TEXT),
                            );
                        });
                    });
                    ui.add_space(4.0);
                }
            });
        });
}
