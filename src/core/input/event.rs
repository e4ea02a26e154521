//=========================================================================
// Input Event Types
//=========================================================================
//
// Platform-independent pointer and keyboard events.
//
// Event Flow:
// ```text
// Platform Layer (Winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    PointerInterpreter / KeyBindings
//         ↓
//    UiCommand → GameController
// ```
//
// Pointer coordinates are logical pixels, top-left origin, in the board's
// fixed layout space. Presses and releases carry their own position so
// they stay correct even when the platform coalesces movement.
//
//=========================================================================

//=== MouseButton =========================================================

/// Physical mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (typically left).
    Left,

    /// Secondary button (typically right).
    Right,

    /// Middle button (wheel click).
    Middle,

    /// Side buttons, thumb buttons and anything else.
    Other,
}

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the character produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------

    /// Number row: 0-9
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------

    /// Letter keys: A-Z (physical location, not character)
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Special Keys -----------------------------------------------------

    Space,
    Enter,
    Escape,
    Tab,
    Backspace,

    /// Any key the input layer does not name.
    Unidentified,
}

//=== InputEvent ==========================================================

/// Low-level input event from the platform layer.
///
/// - **PointerDown/PointerUp/KeyDown/PointerLeft/FocusLost**: discrete,
///   order significant
/// - **PointerMoved**: continuous, only the latest position matters
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved within the window.
    PointerMoved { x: f32, y: f32 },

    /// Mouse button pressed at a position.
    PointerDown { button: MouseButton, x: f32, y: f32 },

    /// Mouse button released at a position.
    PointerUp { button: MouseButton, x: f32, y: f32 },

    /// Cursor left the window.
    PointerLeft,

    /// Window lost keyboard focus.
    FocusLost,

    /// Key pressed. Releases are not reported.
    KeyDown { key: KeyCode },

    /// Unrecognized or unsupported event. Ignored.
    Unidentified,
}

impl InputEvent {
    /// Whether only the latest event of this kind matters.
    pub fn is_continuous(&self) -> bool {
        matches!(self, InputEvent::PointerMoved { .. })
    }

    /// Position carried by the event, if any.
    pub fn position(&self) -> Option<(f32, f32)> {
        match *self {
            InputEvent::PointerMoved { x, y }
            | InputEvent::PointerDown { x, y, .. }
            | InputEvent::PointerUp { x, y, .. } => Some((x, y)),
            _ => None,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
