//=========================================================================
// Key Bindings
//=========================================================================
//
// Maps physical keys to game shortcuts.
//
// Default bindings:
//   Digit1 / Digit2 / Digit3 → home / timeline / cause view
//   Escape                  → cancel the current drag
//   KeyC / KeyR             → check / reset the game on screen
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::debug;

//=== Internal Dependencies ===============================================

use super::event::KeyCode;
use crate::core::controller::{GameController, UiCommand};
use crate::core::router::View;

//=== KeyAction ===========================================================

/// What a bound key does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    Navigate(View),
    CancelDrag,
    CheckActive,
    ResetActive,
}

//=== KeyBindings =========================================================

/// Key → action table. One action per key.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyCode, KeyAction>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = Self::empty();
        bindings.bind(KeyCode::Digit1, KeyAction::Navigate(View::Home));
        bindings.bind(KeyCode::Digit2, KeyAction::Navigate(View::Timeline));
        bindings.bind(KeyCode::Digit3, KeyAction::Navigate(View::Cause));
        bindings.bind(KeyCode::Escape, KeyAction::CancelDrag);
        bindings.bind(KeyCode::KeyC, KeyAction::CheckActive);
        bindings.bind(KeyCode::KeyR, KeyAction::ResetActive);
        bindings
    }
}

impl KeyBindings {
    /// A table with no bindings.
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Binds `key`, replacing any previous action for it.
    pub fn bind(&mut self, key: KeyCode, action: KeyAction) {
        if let Some(previous) = self.bindings.insert(key, action) {
            debug!("Rebound {:?}: {:?} -> {:?}", key, previous, action);
        }
    }

    pub fn unbind(&mut self, key: KeyCode) {
        self.bindings.remove(&key);
    }

    pub fn action(&self, key: KeyCode) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }

    /// Resolves `key` to a command against the current game state.
    ///
    /// Check and reset only apply on a game view; cancel only while a
    /// drag is active.
    pub fn resolve(&self, key: KeyCode, controller: &GameController) -> Option<UiCommand> {
        match self.action(key)? {
            KeyAction::Navigate(view) => Some(UiCommand::Navigate(view.name().to_string())),
            KeyAction::CancelDrag => controller
                .drag()
                .is_dragging()
                .then_some(UiCommand::DragEnd),
            KeyAction::CheckActive => controller.active_game().map(UiCommand::Check),
            KeyAction::ResetActive => controller.active_game().map(UiCommand::Reset),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
