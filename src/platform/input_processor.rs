//=========================================================================
// Input Processor
//=========================================================================
//
// Converts winit window events into game InputEvents.
//
// Architecture:
//   Winit Events → InputProcessor → InputEvent → InputBuffer
//
// Stateful: tracks the last cursor position so button events can carry
// it, and the window scale factor so every position is reported in
// logical pixels. Key repeats, key releases and unmapped keys are
// filtered out.
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::{
    dpi::PhysicalPosition,
    event::{ElementState, KeyEvent, MouseButton as WinitMouseButton},
    keyboard::{KeyCode as WinitKeyCode, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::event::{InputEvent, KeyCode, MouseButton};

//=== InputProcessor ======================================================

pub(crate) struct InputProcessor {
    scale_factor: f64,
    cursor: (f32, f32),
}

impl InputProcessor {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        Self {
            scale_factor: 1.0,
            cursor: (0.0, 0.0),
        }
    }

    //--- State Management -------------------------------------------------

    pub(crate) fn set_scale_factor(&mut self, scale_factor: f64) {
        if scale_factor > 0.0 {
            self.scale_factor = scale_factor;
        }
    }

    pub(crate) fn cursor(&self) -> (f32, f32) {
        self.cursor
    }

    //--- Event Processing -------------------------------------------------

    /// Records the cursor position (logical pixels).
    pub(crate) fn process_cursor_moved(&mut self, position: PhysicalPosition<f64>) -> InputEvent {
        let logical = position.to_logical::<f64>(self.scale_factor);
        self.cursor = (logical.x as f32, logical.y as f32);
        InputEvent::PointerMoved {
            x: self.cursor.0,
            y: self.cursor.1,
        }
    }

    /// Button press/release at the last known cursor position.
    pub(crate) fn process_mouse_button(
        &self,
        button: WinitMouseButton,
        state: ElementState,
    ) -> InputEvent {
        let button = MouseButton::from(button);
        let (x, y) = self.cursor;

        match state {
            ElementState::Pressed => InputEvent::PointerDown { button, x, y },
            ElementState::Released => InputEvent::PointerUp { button, x, y },
        }
    }

    /// Converts a winit key event (filters repeats, releases, unmapped keys).
    pub(crate) fn process_key_event(&self, key_event: &KeyEvent) -> Option<InputEvent> {
        let key = match key_event.physical_key {
            PhysicalKey::Code(code) => KeyCode::from(code),
            _ => return None,
        };
        Self::key_input_event(key, key_event.state, key_event.repeat)
    }

    pub(crate) fn process_cursor_left(&self) -> InputEvent {
        InputEvent::PointerLeft
    }

    /// Focus loss becomes an event; gaining focus produces nothing.
    pub(crate) fn process_focus(&self, focused: bool) -> Option<InputEvent> {
        (!focused).then_some(InputEvent::FocusLost)
    }

    //--- Internal Helpers -------------------------------------------------

    fn key_input_event(key: KeyCode, state: ElementState, repeat: bool) -> Option<InputEvent> {
        if repeat || state == ElementState::Released || key == KeyCode::Unidentified {
            return None;
        }
        Some(InputEvent::KeyDown { key })
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

/// Maps A-Z, 0-9 and a few special keys. Everything else is `Unidentified`.
impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode::*;
        match code {
            //--- Digits -------------------------------------------------------

            Digit0 => KeyCode::Digit0,
            Digit1 => KeyCode::Digit1,
            Digit2 => KeyCode::Digit2,
            Digit3 => KeyCode::Digit3,
            Digit4 => KeyCode::Digit4,
            Digit5 => KeyCode::Digit5,
            Digit6 => KeyCode::Digit6,
            Digit7 => KeyCode::Digit7,
            Digit8 => KeyCode::Digit8,
            Digit9 => KeyCode::Digit9,

            //--- Letters ------------------------------------------------------

            KeyA => KeyCode::KeyA,
            KeyB => KeyCode::KeyB,
            KeyC => KeyCode::KeyC,
            KeyD => KeyCode::KeyD,
            KeyE => KeyCode::KeyE,
            KeyF => KeyCode::KeyF,
            KeyG => KeyCode::KeyG,
            KeyH => KeyCode::KeyH,
            KeyI => KeyCode::KeyI,
            KeyJ => KeyCode::KeyJ,
            KeyK => KeyCode::KeyK,
            KeyL => KeyCode::KeyL,
            KeyM => KeyCode::KeyM,
            KeyN => KeyCode::KeyN,
            KeyO => KeyCode::KeyO,
            KeyP => KeyCode::KeyP,
            KeyQ => KeyCode::KeyQ,
            KeyR => KeyCode::KeyR,
            KeyS => KeyCode::KeyS,
            KeyT => KeyCode::KeyT,
            KeyU => KeyCode::KeyU,
            KeyV => KeyCode::KeyV,
            KeyW => KeyCode::KeyW,
            KeyX => KeyCode::KeyX,
            KeyY => KeyCode::KeyY,
            KeyZ => KeyCode::KeyZ,

            //--- Special ------------------------------------------------------

            Space => KeyCode::Space,
            Enter => KeyCode::Enter,
            Escape => KeyCode::Escape,
            Tab => KeyCode::Tab,
            Backspace => KeyCode::Backspace,

            _ => KeyCode::Unidentified,
        }
    }
}

/// Left/Right/Middle map directly; Back/Forward/Other → Other.
impl From<WinitMouseButton> for MouseButton {
    fn from(button: WinitMouseButton) -> Self {
        match button {
            WinitMouseButton::Left => MouseButton::Left,
            WinitMouseButton::Right => MouseButton::Right,
            WinitMouseButton::Middle => MouseButton::Middle,
            _ => MouseButton::Other,
        }
    }
}

//=========================================================================
// Tests
//=========================================================================
