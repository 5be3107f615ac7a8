//! Keyboard shortcuts for the toolbar controls.

use webpane_browser::ToolbarButton;
use winit::keyboard::{Key, ModifiersState, NamedKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Toolbar(ToolbarButton),
    Done,
    DevTools,
}

/// Map a key press to a shortcut.
///
/// Alt+Left/Right go back and forward, F5 or Ctrl+R reloads, Escape
/// stops, Ctrl+S shares, Ctrl+W closes and F12 opens devtools.
pub fn shortcut_for(key: &Key, mods: ModifiersState) -> Option<Shortcut> {
    let ctrl = mods.control_key() || mods.super_key();
    match key {
        Key::Named(NamedKey::ArrowLeft) if mods.alt_key() => {
            Some(Shortcut::Toolbar(ToolbarButton::Back))
        }
        Key::Named(NamedKey::ArrowRight) if mods.alt_key() => {
            Some(Shortcut::Toolbar(ToolbarButton::Forward))
        }
        Key::Named(NamedKey::F5) => Some(Shortcut::Toolbar(ToolbarButton::Refresh)),
        Key::Named(NamedKey::Escape) => Some(Shortcut::Toolbar(ToolbarButton::Stop)),
        Key::Named(NamedKey::F12) => Some(Shortcut::DevTools),
        Key::Character(c) if ctrl => match c.to_lowercase().as_str() {
            "r" => Some(Shortcut::Toolbar(ToolbarButton::Refresh)),
            "s" => Some(Shortcut::Toolbar(ToolbarButton::Action)),
            "w" => Some(Shortcut::Done),
            _ => None,
        },
        _ => None,
    }
}
