//! Key chord to action resolution

use crate::action::Action;
use crate::config::{Config, Keybinding};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Parse a key name from config ("a", "Enter", "F5", ...)
pub fn parse_key(name: &str) -> Option<KeyCode> {
    let lower = name.trim().to_lowercase();
    let code = match lower.as_str() {
        "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "esc" | "escape" => KeyCode::Esc,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "insert" => KeyCode::Insert,
        "space" => KeyCode::Char(' '),
        _ => {
            if let Some(num) = lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                return Some(KeyCode::F(num));
            }
            let mut chars = lower.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return None,
            }
        }
    };
    Some(code)
}

/// Parse modifier names ("ctrl", "alt", "shift")
pub fn parse_modifiers(names: &[String]) -> Option<KeyModifiers> {
    let mut modifiers = KeyModifiers::NONE;
    for name in names {
        modifiers |= match name.trim().to_lowercase().as_str() {
            "ctrl" | "control" => KeyModifiers::CONTROL,
            "alt" | "meta" => KeyModifiers::ALT,
            "shift" => KeyModifiers::SHIFT,
            _ => return None,
        };
    }
    Some(modifiers)
}

/// Human-readable form of a chord, e.g. "Ctrl+S"
pub fn format_keybinding(code: &KeyCode, modifiers: &KeyModifiers) -> String {
    let mut result = String::new();
    if modifiers.contains(KeyModifiers::CONTROL) {
        result.push_str("Ctrl+");
    }
    if modifiers.contains(KeyModifiers::ALT) {
        result.push_str("Alt+");
    }
    if modifiers.contains(KeyModifiers::SHIFT) {
        result.push_str("Shift+");
    }
    match code {
        KeyCode::Char(' ') => result.push_str("Space"),
        KeyCode::Char(c) => result.push(c.to_ascii_uppercase()),
        KeyCode::F(n) => result.push_str(&format!("F{n}")),
        KeyCode::Enter => result.push_str("Enter"),
        KeyCode::Tab => result.push_str("Tab"),
        KeyCode::Backspace => result.push_str("Backspace"),
        KeyCode::Delete => result.push_str("Del"),
        KeyCode::Esc => result.push_str("Esc"),
        KeyCode::Left => result.push_str("Left"),
        KeyCode::Right => result.push_str("Right"),
        KeyCode::Up => result.push_str("Up"),
        KeyCode::Down => result.push_str("Down"),
        KeyCode::Home => result.push_str("Home"),
        KeyCode::End => result.push_str("End"),
        KeyCode::PageUp => result.push_str("PgUp"),
        KeyCode::PageDown => result.push_str("PgDn"),
        other => result.push_str(&format!("{other:?}")),
    }
    result
}

/// Letters arrive lowercase with Ctrl/Alt held on most terminals, but some
/// report the shifted form. Normalize so bindings match either way.
fn normalize(code: KeyCode, modifiers: KeyModifiers) -> (KeyCode, KeyModifiers) {
    match code {
        KeyCode::Char(c) if modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            (KeyCode::Char(c.to_ascii_lowercase()), modifiers)
        }
        // Shift is implied by the character itself
        KeyCode::Char(c) => (KeyCode::Char(c), modifiers - KeyModifiers::SHIFT),
        _ => (code, modifiers),
    }
}

/// Resolves key events to actions
#[derive(Debug, Clone)]
pub struct KeybindingResolver {
    bindings: HashMap<(KeyCode, KeyModifiers), Action>,
}

impl KeybindingResolver {
    /// Build the built-in table and apply the user's bindings on top.
    pub fn new(config: &Config) -> Self {
        let mut resolver = Self {
            bindings: HashMap::new(),
        };
        for binding in Config::default_keybindings()
            .iter()
            .chain(config.keybindings.iter())
        {
            resolver.add_binding(binding);
        }
        resolver
    }

    fn add_binding(&mut self, binding: &Keybinding) {
        let Some(action) = Action::from_name(&binding.action) else {
            tracing::warn!("Unknown action in keybinding: {:?}", binding.action);
            return;
        };
        let Some(code) = parse_key(&binding.key) else {
            tracing::warn!("Unknown key in keybinding: {:?}", binding.key);
            return;
        };
        let Some(modifiers) = parse_modifiers(&binding.modifiers) else {
            tracing::warn!("Unknown modifier in keybinding: {:?}", binding.modifiers);
            return;
        };
        let chord = normalize(code, modifiers);
        if let Some(previous) = self.bindings.insert(chord, action) {
            if previous != action {
                tracing::debug!(
                    "{} rebound from {:?} to {:?}",
                    format_keybinding(&chord.0, &chord.1),
                    previous,
                    action
                );
            }
        }
    }

    /// Action bound to the key event, if any.
    ///
    /// Unbound printable characters (with or without Shift) become
    /// [`Action::InsertChar`].
    pub fn resolve(&self, event: &KeyEvent) -> Option<Action> {
        let chord = normalize(event.code, event.modifiers);
        if let Some(action) = self.bindings.get(&chord) {
            return Some(*action);
        }
        match chord {
            (KeyCode::Char(c), modifiers) if modifiers.is_empty() => Some(Action::InsertChar(c)),
            _ => None,
        }
    }

    /// Display form of a chord bound to `action`, preferring the shortest
    pub fn binding_for(&self, action: Action) -> Option<String> {
        self.bindings
            .iter()
            .filter(|(_, bound)| **bound == action)
            .map(|((code, modifiers), _)| format_keybinding(code, modifiers))
            .min_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)))
    }
}

impl Default for KeybindingResolver {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
