//! Keyboard shortcut registry and documentation.

use egui::{Key, KeyboardShortcut, Modifiers};

/// What a shortcut triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutCommand {
    OpenChooser,
    CancelChooser,
    GeneratePalette,
    ClearPalette,
    CopyCurrent,
    ToggleHelp,
}

/// A keyboard shortcut definition.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: Key,
    pub ctrl: bool,
    pub shift: bool,
    pub description: &'static str,
    pub command: ShortcutCommand,
}

impl Shortcut {
    pub const fn new(
        key: Key,
        ctrl: bool,
        shift: bool,
        description: &'static str,
        command: ShortcutCommand,
    ) -> Self {
        Self {
            key,
            ctrl,
            shift,
            description,
            command,
        }
    }

    /// Format the shortcut for display (e.g., "Ctrl+G").
    pub fn format(&self) -> String {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.shift {
            parts.push("Shift");
        }
        parts.push(self.key.name());
        parts.join("+")
    }

    /// The egui shortcut to consume from input. Ctrl maps to Cmd on macOS.
    pub fn keyboard_shortcut(&self) -> KeyboardShortcut {
        let modifiers = Modifiers {
            command: self.ctrl,
            shift: self.shift,
            ..Modifiers::NONE
        };
        KeyboardShortcut::new(modifiers, self.key)
    }
}

/// Registry of all keyboard shortcuts.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    /// Get all registered shortcuts.
    ///
    /// Shift variants come first: egui matches shortcuts loosely on Shift,
    /// so they must be consumed before any plain Ctrl binding on the same key.
    pub fn all() -> Vec<Shortcut> {
        vec![
            Shortcut::new(
                Key::C,
                true,
                true,
                "Copy current hex code",
                ShortcutCommand::CopyCurrent,
            ),
            Shortcut::new(
                Key::Delete,
                true,
                true,
                "Clear palette",
                ShortcutCommand::ClearPalette,
            ),
            Shortcut::new(
                Key::O,
                true,
                false,
                "Open color chooser",
                ShortcutCommand::OpenChooser,
            ),
            Shortcut::new(
                Key::G,
                true,
                false,
                "Generate custom palette",
                ShortcutCommand::GeneratePalette,
            ),
            Shortcut::new(
                Key::F1,
                false,
                false,
                "Show keyboard shortcuts",
                ShortcutCommand::ToggleHelp,
            ),
            Shortcut::new(
                Key::Escape,
                false,
                false,
                "Cancel color chooser",
                ShortcutCommand::CancelChooser,
            ),
        ]
    }

    /// Consume the first registered shortcut pressed this frame.
    pub fn consume(ctx: &egui::Context) -> Option<ShortcutCommand> {
        ctx.input_mut(|input| {
            Self::all()
                .into_iter()
                .find(|shortcut| input.consume_shortcut(&shortcut.keyboard_shortcut()))
                .map(|shortcut| shortcut.command)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format() {
        let all = ShortcutRegistry::all();
        let formatted: Vec<String> = all.iter().map(Shortcut::format).collect();
        assert_eq!(
            formatted,
            vec![
                "Ctrl+Shift+C",
                "Ctrl+Shift+Delete",
                "Ctrl+O",
                "Ctrl+G",
                "F1",
                "Escape"
            ]
        );
    }

    #[test]
    fn test_every_command_has_one_binding() {
        let all = ShortcutRegistry::all();
        for command in [
            ShortcutCommand::OpenChooser,
            ShortcutCommand::CancelChooser,
            ShortcutCommand::GeneratePalette,
            ShortcutCommand::ClearPalette,
            ShortcutCommand::CopyCurrent,
            ShortcutCommand::ToggleHelp,
        ] {
            assert_eq!(all.iter().filter(|s| s.command == command).count(), 1);
        }
    }

    #[test]
    fn test_keyboard_shortcut_modifiers() {
        let copy = &ShortcutRegistry::all()[0];
        let shortcut = copy.keyboard_shortcut();
        assert_eq!(shortcut.logical_key, Key::C);
        assert!(shortcut.modifiers.command);
        assert!(shortcut.modifiers.shift);
        assert!(!shortcut.modifiers.alt);
    }
}
