//! Keyboard bindings for the canvas editor.
//!
//! | Keys | Action |
//! |------|--------|
//! | Arrows | move selection 1 unit |
//! | Shift + Arrows | move selection 10 units |
//! | Alt + Arrows | resize selection 1 unit (Shift for 10) |
//! | Delete / Backspace | delete selection |
//! | Ctrl/Cmd + Z | undo |
//! | Ctrl/Cmd + Shift + Z, Ctrl/Cmd + Y | redo |
//!
//! Everything except undo/redo needs a selection.

use super::EditorSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Delete,
    Backspace,
    Char(char),
}

impl Key {
    /// Parse a DOM `KeyboardEvent.key` value ("ArrowUp", "Delete", "z").
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowUp" => Some(Key::ArrowUp),
            "ArrowDown" => Some(Key::ArrowDown),
            "ArrowLeft" => Some(Key::ArrowLeft),
            "ArrowRight" => Some(Key::ArrowRight),
            "Delete" => Some(Key::Delete),
            "Backspace" => Some(Key::Backspace),
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(Key::Char(c)),
                    _ => None,
                }
            }
        }
    }

    /// Unit direction for arrow keys.
    fn direction(self) -> Option<(f32, f32)> {
        match self {
            Key::ArrowUp => Some((0.0, -1.0)),
            Key::ArrowDown => Some((0.0, 1.0)),
            Key::ArrowLeft => Some((-1.0, 0.0)),
            Key::ArrowRight => Some((1.0, 0.0)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub alt: bool,
    pub ctrl: bool,
    /// Cmd on macOS.
    pub meta: bool,
}

impl Modifiers {
    /// Ctrl on most platforms, Cmd on macOS. Either counts.
    pub fn primary(self) -> bool {
        self.ctrl || self.meta
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
        }
    }

    pub fn shift(mut self) -> Self {
        self.modifiers.shift = true;
        self
    }

    pub fn alt(mut self) -> Self {
        self.modifiers.alt = true;
        self
    }

    pub fn ctrl(mut self) -> Self {
        self.modifiers.ctrl = true;
        self
    }

    pub fn meta(mut self) -> Self {
        self.modifiers.meta = true;
        self
    }
}

impl EditorSession {
    /// Apply a key press. Returns `true` when the event was consumed, so the
    /// host can suppress the platform default (scrolling, back navigation).
    pub fn handle_key(&mut self, event: KeyEvent) -> bool {
        let mods = event.modifiers;

        if mods.primary() {
            return match event.key {
                Key::Char('z' | 'Z') if mods.shift => {
                    self.redo();
                    true
                }
                Key::Char('z' | 'Z') => {
                    self.undo();
                    true
                }
                Key::Char('y' | 'Y') => {
                    self.redo();
                    true
                }
                _ => false,
            };
        }

        let Some(id) = self.selected().map(str::to_string) else {
            return false;
        };

        if let Some((dx, dy)) = event.key.direction() {
            let step = if mods.shift {
                self.config().nudge_step_large
            } else {
                self.config().nudge_step
            };
            if mods.alt {
                self.grow(&id, dx * step, dy * step);
            } else {
                self.nudge(&id, dx * step, dy * step);
            }
            return true;
        }

        match event.key {
            Key::Delete | Key::Backspace => {
                self.delete(&id);
                true
            }
            _ => false,
        }
    }
}
