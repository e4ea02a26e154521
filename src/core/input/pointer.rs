//=========================================================================
// Pointer Interpreter
//=========================================================================
//
// Turns raw pointer and key events into UiCommands.
//
// Gesture model:
// ```text
//   PointerDown on card   → DragStart(card) [+ DragOver(zone)]
//   PointerMoved          → DragLeave(old) / DragOver(new) on zone change
//   PointerUp             → Drop(zone)? then DragEnd, always
//   PointerLeft/FocusLost → DragEnd
//   PointerDown+Up on the same button → Navigate / Check / Reset
// ```
//
// Interpretation reads the controller as it is after all previously
// emitted commands were applied, so callers must apply each event's
// commands before interpreting the next event.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::trace;

//=== Internal Dependencies ===============================================

use super::bindings::KeyBindings;
use super::event::{InputEvent, MouseButton};
use crate::core::controller::{GameController, UiCommand};
use crate::core::drag::ZoneId;
use crate::core::layout::{ButtonId, Hit, Layout};

//=== PointerInterpreter ==================================================

pub struct PointerInterpreter {
    layout: Layout,
    bindings: KeyBindings,
    over: Option<ZoneId>,
    pressed: Option<ButtonId>,
    position: (f32, f32),
}

impl PointerInterpreter {
    pub fn new(layout: Layout, bindings: KeyBindings) -> Self {
        Self {
            layout,
            bindings,
            over: None,
            pressed: None,
            position: (0.0, 0.0),
        }
    }

    //--- Interpretation ---------------------------------------------------

    /// Appends the commands produced by `event` to `out`.
    pub fn interpret(
        &mut self,
        event: InputEvent,
        controller: &GameController,
        out: &mut Vec<UiCommand>,
    ) {
        if let Some(position) = event.position() {
            self.position = position;
        }

        match event {
            InputEvent::PointerMoved { x, y } => {
                if controller.drag().is_dragging() {
                    let zone = self.layout.zone_at(controller, x, y);
                    self.hover(zone, out);
                }
            }

            InputEvent::PointerDown { button: MouseButton::Left, x, y } => {
                match self.layout.hit(controller, x, y) {
                    Some(Hit::Card(card)) => {
                        out.push(UiCommand::DragStart(card));
                        let zone = self.layout.zone_at(controller, x, y);
                        self.hover(zone, out);
                    }
                    Some(Hit::Button(button)) => self.pressed = Some(button),
                    _ => {}
                }
            }

            InputEvent::PointerUp { button: MouseButton::Left, x, y } => {
                if controller.drag().is_dragging() {
                    if let Some(zone) = self.layout.zone_at(controller, x, y) {
                        out.push(UiCommand::Drop(zone));
                    }
                    self.end_gesture(out);
                }

                if let Some(pressed) = self.pressed.take() {
                    if self.layout.hit(controller, x, y) == Some(Hit::Button(pressed)) {
                        out.push(Self::click(pressed));
                    }
                }
            }

            InputEvent::PointerLeft | InputEvent::FocusLost => {
                self.pressed = None;
                if controller.drag().is_dragging() {
                    self.end_gesture(out);
                }
            }

            InputEvent::KeyDown { key } => {
                if let Some(command) = self.bindings.resolve(key, controller) {
                    if command == UiCommand::DragEnd {
                        self.over = None;
                    }
                    out.push(command);
                }
            }

            other => trace!("Ignoring input {:?}", other),
        }
    }

    /// Last known pointer position.
    pub fn position(&self) -> (f32, f32) {
        self.position
    }

    //--- Internal Helpers -------------------------------------------------

    fn hover(&mut self, zone: Option<ZoneId>, out: &mut Vec<UiCommand>) {
        if zone == self.over {
            return;
        }
        if let Some(old) = self.over {
            out.push(UiCommand::DragLeave(old));
        }
        if let Some(new) = zone {
            out.push(UiCommand::DragOver(new));
        }
        self.over = zone;
    }

    fn end_gesture(&mut self, out: &mut Vec<UiCommand>) {
        self.over = None;
        out.push(UiCommand::DragEnd);
    }

    fn click(button: ButtonId) -> UiCommand {
        match button {
            ButtonId::Nav(view) => UiCommand::Navigate(view.name().to_string()),
            ButtonId::Check(game) => UiCommand::Check(game),
            ButtonId::Reset(game) => UiCommand::Reset(game),
        }
    }
}

impl Default for PointerInterpreter {
    fn default() -> Self {
        Self::new(Layout::default(), KeyBindings::default())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
