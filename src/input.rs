use std::collections::HashSet;

use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::gallery::NavCommand;

/// Pixels of trackpad scroll that count as one wheel notch
const PIXELS_PER_LINE: f32 = 40.0;

/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    KeyR,
    Escape,
    MouseLeft,
}

/// Controller - handles button input states
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// Check if button went down since the last reset
    fn was_pressed(&self, button: Button) -> bool;

    /// Get all currently pressed buttons
    fn get_down_keys(&self) -> &[Button];
}

impl NavCommand {
    /// Down/right advance, up/left go back
    pub fn from_controller(controller: &dyn Controller) -> Option<NavCommand> {
        if controller.was_pressed(Button::ArrowDown) || controller.was_pressed(Button::ArrowRight) {
            Some(NavCommand::Next)
        } else if controller.was_pressed(Button::ArrowUp) || controller.was_pressed(Button::ArrowLeft) {
            Some(NavCommand::Previous)
        } else {
            None
        }
    }
}

/// Adapter that bridges Winit events to the Controller trait
#[derive(Debug, Clone, Default)]
pub struct WinitController {
    /// Currently pressed buttons
    pressed_keys: HashSet<Button>,
    /// All pressed buttons as a vec (for efficient get_down_keys)
    pressed_vec: Vec<Button>,
    /// Buttons that went down since the last reset
    just_pressed: HashSet<Button>,
    /// Current mouse position (relative to window)
    mouse_position: Option<(f32, f32)>,
    /// Mouse movement delta since last reset
    mouse_delta: (f32, f32),
    /// Wheel notches since last reset, positive = away from the user
    scroll_delta: f32,
}

impl WinitController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a Winit WindowEvent and update internal state
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    if let Some(button) = Self::keycode_to_button(keycode) {
                        self.set_state(button, event.state);
                    }
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(btn) = Self::mouse_button_to_button(*button) {
                    self.set_state(btn, *state);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let new_pos = (position.x as f32, position.y as f32);
                if let Some(old_pos) = self.mouse_position {
                    self.mouse_delta.0 += new_pos.0 - old_pos.0;
                    self.mouse_delta.1 += new_pos.1 - old_pos.1;
                }
                self.mouse_position = Some(new_pos);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.scroll_delta += match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_LINE,
                };
            }
            WindowEvent::Focused(false) => self.release_all(),
            _ => {}
        }
    }

    fn set_state(&mut self, button: Button, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if self.pressed_keys.insert(button) {
                    self.pressed_vec.push(button);
                    self.just_pressed.insert(button);
                }
            }
            ElementState::Released => {
                if self.pressed_keys.remove(&button) {
                    self.pressed_vec.retain(|&b| b != button);
                }
            }
        }
    }

    fn release_all(&mut self) {
        self.pressed_keys.clear();
        self.pressed_vec.clear();
    }

    /// Reset per-frame state (mouse delta, scroll, edge presses).
    /// Call this at the end of each frame after processing input.
    pub fn reset_deltas(&mut self) {
        self.mouse_delta = (0.0, 0.0);
        self.scroll_delta = 0.0;
        self.just_pressed.clear();
    }

    pub fn mouse_position(&self) -> Option<(f32, f32)> {
        self.mouse_position
    }

    pub fn mouse_delta(&self) -> (f32, f32) {
        self.mouse_delta
    }

    pub fn scroll_delta(&self) -> f32 {
        self.scroll_delta
    }

    fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::ArrowUp => Some(Button::ArrowUp),
            KeyCode::ArrowDown => Some(Button::ArrowDown),
            KeyCode::ArrowLeft => Some(Button::ArrowLeft),
            KeyCode::ArrowRight => Some(Button::ArrowRight),
            KeyCode::KeyR => Some(Button::KeyR),
            KeyCode::Escape => Some(Button::Escape),
            _ => None,
        }
    }

    fn mouse_button_to_button(button: MouseButton) -> Option<Button> {
        match button {
            MouseButton::Left => Some(Button::MouseLeft),
            _ => None,
        }
    }
}

impl Controller for WinitController {
    fn is_down(&self, button: Button) -> bool {
        self.pressed_keys.contains(&button)
    }

    fn was_pressed(&self, button: Button) -> bool {
        self.just_pressed.contains(&button)
    }

    fn get_down_keys(&self) -> &[Button] {
        &self.pressed_vec
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Winit events carry platform-specific fields that can't be built in tests,
    // so these drive the state setters directly.

    #[test]
    fn new_controller_is_empty() {
        let controller = WinitController::new();
        assert!(!controller.is_down(Button::ArrowUp));
        assert_eq!(controller.get_down_keys().len(), 0);
        assert_eq!(controller.mouse_position(), None);
        assert_eq!(controller.mouse_delta(), (0.0, 0.0));
    }

    #[test]
    fn press_is_reported_once() {
        let mut controller = WinitController::new();
        controller.set_state(Button::ArrowDown, ElementState::Pressed);
        assert!(controller.was_pressed(Button::ArrowDown));
        assert_eq!(NavCommand::from_controller(&controller), Some(NavCommand::Next));

        controller.reset_deltas();
        assert!(controller.is_down(Button::ArrowDown));
        assert!(!controller.was_pressed(Button::ArrowDown));
        assert_eq!(NavCommand::from_controller(&controller), None);
    }

    #[test]
    fn held_key_does_not_repeat_press() {
        let mut controller = WinitController::new();
        controller.set_state(Button::ArrowUp, ElementState::Pressed);
        controller.reset_deltas();
        // OS key repeat sends more Pressed events
        controller.set_state(Button::ArrowUp, ElementState::Pressed);
        assert!(!controller.was_pressed(Button::ArrowUp));
    }

    #[test]
    fn up_and_left_go_back() {
        let mut controller = WinitController::new();
        controller.set_state(Button::ArrowLeft, ElementState::Pressed);
        assert_eq!(NavCommand::from_controller(&controller), Some(NavCommand::Previous));
    }

    #[test]
    fn release_drops_from_down_list() {
        let mut controller = WinitController::new();
        controller.set_state(Button::MouseLeft, ElementState::Pressed);
        controller.set_state(Button::MouseLeft, ElementState::Released);
        assert!(!controller.is_down(Button::MouseLeft));
        assert!(controller.get_down_keys().is_empty());
    }
}
