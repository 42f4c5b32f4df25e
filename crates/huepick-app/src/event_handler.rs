//! Dispatches picker commands and carries out their side effects.

use huepick_core::{Command, Effect, PickerState, PickerView};
use rand::Rng;

use crate::clipboard::ClipboardSink;

/// What the shell still has to do after a dispatch.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Dispatched {
    /// Field buffers must be reloaded from the new view.
    pub refresh_fields: bool,
    /// Text the system clipboard refused; hand it to egui's platform output.
    pub fallback_copy: Option<String>,
}

/// Owns the picker state and routes every command through
/// [`PickerState::update`].
pub struct EventHandler<R: Rng> {
    state: PickerState,
    rng: R,
    clipboard: Box<dyn ClipboardSink>,
}

impl<R: Rng> EventHandler<R> {
    /// Create a new event handler.
    pub fn new(state: PickerState, rng: R, clipboard: Box<dyn ClipboardSink>) -> Self {
        Self {
            state,
            rng,
            clipboard,
        }
    }

    pub fn state(&self) -> &PickerState {
        &self.state
    }

    /// Current display values.
    pub fn view(&self) -> PickerView {
        PickerView::project(&self.state)
    }

    /// Apply `command` and execute the effects it requests.
    pub fn dispatch(&mut self, command: Command) -> Dispatched {
        log::debug!("Dispatching {:?}", command);
        let state = std::mem::take(&mut self.state);
        let transition = state.update(command, &mut self.rng);
        self.state = transition.state;

        let mut dispatched = Dispatched::default();
        for effect in transition.effects {
            match effect {
                Effect::RefreshFields => dispatched.refresh_fields = true,
                Effect::CopyToClipboard(text) => match self.clipboard.set_text(&text) {
                    Ok(()) => log::info!("Copied {} to clipboard", text),
                    Err(e) => {
                        log::error!("{}", e);
                        dispatched.fallback_copy = Some(text);
                    }
                },
            }
        }
        dispatched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::ClipboardError;
    use huepick_core::{CancelPolicy, Color, ColorMode, PickerConfig};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records writes; fails every write when `broken` is set.
    #[derive(Clone, Default)]
    struct FakeClipboard {
        writes: Rc<RefCell<Vec<String>>>,
        broken: bool,
    }

    impl ClipboardSink for FakeClipboard {
        fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            if self.broken {
                return Err(ClipboardError::Unavailable("no display".to_string()));
            }
            self.writes.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    fn handler(config: PickerConfig) -> (EventHandler<StdRng>, FakeClipboard) {
        let clipboard = FakeClipboard::default();
        let state = PickerState::new(config).unwrap();
        let handler = EventHandler::new(
            state,
            StdRng::seed_from_u64(7),
            Box::new(clipboard.clone()),
        );
        (handler, clipboard)
    }

    #[test]
    fn test_apply_writes_clipboard_and_refreshes() {
        let (mut handler, clipboard) = handler(PickerConfig::default());

        let dispatched = handler.dispatch(Command::ApplyRgb(Color::new(255, 0, 0)));

        assert!(dispatched.refresh_fields);
        assert_eq!(dispatched.fallback_copy, None);
        assert_eq!(*clipboard.writes.borrow(), vec!["#ff0000".to_string()]);
        let view = handler.view();
        assert_eq!(view.readout, "Color: #ff0000  (R: 255, G: 0, B: 0)");
        assert_eq!(view.palette.len(), 1);
    }

    #[test]
    fn test_broken_clipboard_falls_back() {
        let clipboard = FakeClipboard {
            broken: true,
            ..FakeClipboard::default()
        };
        let mut handler = EventHandler::new(
            PickerState::default(),
            StdRng::seed_from_u64(7),
            Box::new(clipboard.clone()),
        );

        let dispatched = handler.dispatch(Command::ApplyHex("00ff00".to_string()));

        assert_eq!(dispatched.fallback_copy, Some("#00ff00".to_string()));
        assert!(clipboard.writes.borrow().is_empty());
        // The selection still happened.
        assert_eq!(handler.state().selection.color(), Some(Color::new(0, 255, 0)));
    }

    #[test]
    fn test_palette_click_recopies() {
        let (mut handler, clipboard) = handler(PickerConfig::default());
        handler.dispatch(Command::ApplyHex("#112233".to_string()));
        handler.dispatch(Command::ApplyHex("#445566".to_string()));

        handler.dispatch(Command::SelectEntry(0));

        assert_eq!(
            *clipboard.writes.borrow(),
            vec!["#112233", "#445566", "#112233"]
        );
        assert_eq!(handler.state().palette.len(), 2);
    }

    #[test]
    fn test_generate_does_not_touch_clipboard() {
        let (mut handler, clipboard) = handler(PickerConfig::default().with_palette_size(7));

        let dispatched = handler.dispatch(Command::GeneratePalette);

        assert_eq!(dispatched, Dispatched::default());
        assert!(clipboard.writes.borrow().is_empty());
        assert_eq!(handler.view().palette.len(), 7);
    }

    #[test]
    fn test_cancel_keep_preserves_config() {
        let (mut handler, _clipboard) =
            handler(PickerConfig::default().with_cancel_policy(CancelPolicy::Keep));
        handler.dispatch(Command::ChooserConfirmed(Color::WHITE));

        let dispatched = handler.dispatch(Command::ChooserCanceled);

        assert!(!dispatched.refresh_fields);
        assert_eq!(handler.state().config.cancel_policy, CancelPolicy::Keep);
        assert_eq!(handler.state().selection.color(), Some(Color::WHITE));
    }

    #[test]
    fn test_mode_switch_keeps_selection() {
        let (mut handler, clipboard) = handler(PickerConfig::default());
        handler.dispatch(Command::ApplyRgb(Color::new(1, 2, 3)));

        handler.dispatch(Command::SetMode(ColorMode::Hsl));

        assert_eq!(handler.view().mode, ColorMode::Hsl);
        assert_eq!(handler.state().selection.color(), Some(Color::new(1, 2, 3)));
        assert_eq!(clipboard.writes.borrow().len(), 1);
    }

    #[test]
    fn test_copy_current_without_selection_is_noop() {
        let (mut handler, clipboard) = handler(PickerConfig::default());
        let dispatched = handler.dispatch(Command::CopyCurrent);
        assert_eq!(dispatched, Dispatched::default());
        assert!(clipboard.writes.borrow().is_empty());
    }
}
