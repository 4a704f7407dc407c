//! Desktop producer for the tapline input pipeline.
//!
//! Forward every [`WindowEvent`] from the winit event loop to
//! [`DesktopWinitPlatform::handle_window_event`]; it converts physical pixels
//! to logical ones, translates keys and buttons and calls the matching
//! capture handler.

mod keymap;

use std::sync::Arc;

use tapline_core::{Buttons, InputPipeline, Point};
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::PhysicalKey;

pub use keymap::{translate_button, translate_key_code, translate_physical_key};

/// Pixels treated as one wheel notch for touchpads that report pixel deltas.
const PIXELS_PER_NOTCH: f64 = 40.0;

pub struct DesktopWinitPlatform {
    scale_factor: f64,
    pipeline: Arc<InputPipeline>,
    cursor: Point,
    held: Buttons,
}

impl DesktopWinitPlatform {
    pub fn new(pipeline: Arc<InputPipeline>, scale_factor: f64) -> Self {
        Self {
            scale_factor,
            pipeline,
            cursor: Point::ZERO,
            held: Buttons::NONE,
        }
    }

    pub fn set_scale_factor(&mut self, factor: f64) {
        self.scale_factor = factor;
    }

    pub fn pipeline(&self) -> &Arc<InputPipeline> {
        &self.pipeline
    }

    pub fn pointer_position(&self, position: PhysicalPosition<f64>) -> Point {
        Point::new(
            (position.x / self.scale_factor) as i32,
            (position.y / self.scale_factor) as i32,
        )
    }

    /// Returns `true` when the event was input the pipeline consumed.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.set_scale_factor(*scale_factor);
                false
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(*position);
                true
            }
            WindowEvent::CursorEntered { .. } => {
                self.pipeline.mouse_entered(self.cursor.x, self.cursor.y);
                true
            }
            WindowEvent::CursorLeft { .. } => {
                self.pipeline.mouse_exited();
                true
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.mouse_input(*state, *button);
                true
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.mouse_wheel(*delta);
                true
            }
            WindowEvent::KeyboardInput { event, .. } => {
                self.key_input(event.physical_key, event.state, event.text.as_deref());
                true
            }
            WindowEvent::Focused(false) => {
                // Releases are lost once focus moves elsewhere.
                self.held.clear();
                false
            }
            _ => false,
        }
    }

    pub fn cursor_moved(&mut self, position: PhysicalPosition<f64>) {
        self.cursor = self.pointer_position(position);
        if self.held.is_empty() {
            self.pipeline.mouse_moved(self.cursor.x, self.cursor.y);
        } else {
            self.pipeline.mouse_dragged(self.cursor.x, self.cursor.y);
        }
    }

    pub fn mouse_input(&mut self, state: ElementState, button: MouseButton) {
        let button = translate_button(button);
        match state {
            ElementState::Pressed => {
                self.held.insert(button);
                self.pipeline
                    .mouse_pressed(self.cursor.x, self.cursor.y, button);
            }
            ElementState::Released => {
                self.held.remove(button);
                self.pipeline
                    .mouse_released(self.cursor.x, self.cursor.y, button);
            }
        }
    }

    /// winit reports wheel-up as positive; the pipeline counts notches
    /// towards the user.
    pub fn mouse_wheel(&mut self, delta: MouseScrollDelta) {
        let notches = match delta {
            MouseScrollDelta::LineDelta(_, y) => -(y.round() as i32),
            MouseScrollDelta::PixelDelta(position) => {
                let lines = -(position.y / PIXELS_PER_NOTCH).round() as i32;
                if lines == 0 && position.y != 0.0 {
                    -(position.y.signum() as i32)
                } else {
                    lines
                }
            }
        };
        if notches != 0 {
            self.pipeline.mouse_wheel(notches);
        }
    }

    /// Presses (including auto-repeat) also emit typed characters for any
    /// text the key produced.
    pub fn key_input(&mut self, key: PhysicalKey, state: ElementState, text: Option<&str>) {
        let key = translate_physical_key(key);
        match state {
            ElementState::Pressed => {
                self.pipeline.key_pressed(key);
                for character in text.unwrap_or_default().chars() {
                    self.pipeline.key_typed(character);
                }
            }
            ElementState::Released => self.pipeline.key_released(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tapline_core::{Button, Key, PointerSlot};
    use winit::keyboard::KeyCode;

    fn platform(scale_factor: f64) -> DesktopWinitPlatform {
        DesktopWinitPlatform::new(Arc::new(InputPipeline::default()), scale_factor)
    }

    #[test]
    fn positions_are_logical() {
        let platform = platform(2.0);
        assert_eq!(
            platform.pointer_position(PhysicalPosition::new(201.0, 99.0)),
            Point::new(100, 49)
        );
    }

    #[test]
    fn motion_with_button_held_is_a_drag() {
        let mut platform = platform(1.0);
        platform.cursor_moved(PhysicalPosition::new(10.0, 10.0));
        platform.mouse_input(ElementState::Pressed, MouseButton::Left);
        platform.cursor_moved(PhysicalPosition::new(15.0, 12.0));

        let pipeline = platform.pipeline();
        assert!(pipeline.is_touched());
        assert!(pipeline.is_button_pressed(Button::Left));
        assert_eq!(pipeline.delta_x_of(PointerSlot::PRIMARY), 5);
        assert_eq!(pipeline.pending_events(), (0, 3));

        platform.mouse_input(ElementState::Released, MouseButton::Left);
        assert!(!platform.pipeline().is_touched());
    }

    #[test]
    fn wheel_direction_is_flipped() {
        let mut platform = platform(1.0);
        platform.mouse_wheel(MouseScrollDelta::LineDelta(0.0, 0.0));
        assert_eq!(platform.pipeline().pending_events(), (0, 0));

        platform.mouse_wheel(MouseScrollDelta::LineDelta(0.0, -1.0));
        platform.mouse_wheel(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 3.0)));
        assert_eq!(platform.pipeline().pending_events(), (0, 2));
    }

    #[test]
    fn key_press_emits_down_and_typed() {
        let mut platform = platform(1.0);
        platform.key_input(
            PhysicalKey::Code(KeyCode::KeyH),
            ElementState::Pressed,
            Some("h"),
        );
        assert!(platform.pipeline().is_key_pressed(Key::H));
        assert_eq!(platform.pipeline().pending_events(), (2, 0));

        platform.key_input(PhysicalKey::Code(KeyCode::KeyH), ElementState::Released, None);
        assert!(!platform.pipeline().is_key_pressed(Key::H));
    }
}
