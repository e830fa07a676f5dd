use winit::{event::ElementState, keyboard::KeyCode};

use super::fly_camera::MovementInput;

/// Tracks which movement keys are held between frames
#[derive(Debug, Clone, Copy, Default)]
pub struct CameraController {
    is_forward_pressed: bool,
    is_backward_pressed: bool,
    is_left_pressed: bool,
    is_right_pressed: bool,
}

impl CameraController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the key is a movement key
    pub fn process_key(&mut self, code: KeyCode, state: ElementState) -> bool {
        let is_pressed = state == ElementState::Pressed;
        match code {
            KeyCode::KeyW => {
                self.is_forward_pressed = is_pressed;
                true
            }
            KeyCode::KeyS => {
                self.is_backward_pressed = is_pressed;
                true
            }
            KeyCode::KeyA => {
                self.is_left_pressed = is_pressed;
                true
            }
            KeyCode::KeyD => {
                self.is_right_pressed = is_pressed;
                true
            }
            _ => false,
        }
    }

    pub fn movement(&self) -> MovementInput {
        MovementInput {
            forward: self.is_forward_pressed,
            backward: self.is_backward_pressed,
            left: self.is_left_pressed,
            right: self.is_right_pressed,
        }
    }

    /// Releases every key, e.g. when the window loses focus
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
