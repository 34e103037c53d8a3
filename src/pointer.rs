use std::collections::HashMap;

use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, Touch, TouchPhase, WindowEvent};

/// Rotation in degrees produced by a drag: yaw about Y from horizontal motion,
/// pitch about X from vertical motion.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationDelta {
    pub yaw: f32,
    pub pitch: f32,
}

/// Turns single-finger drags and mouse drags into rotation deltas.
pub struct PointerHandler {
    // screen density, physical pixels per logical pixel
    density: f64,
    // active touches by id
    active_touches: HashMap<u64, PhysicalPosition<f64>>,
    mouse_position: Option<PhysicalPosition<f64>>,
    mouse_pressed: bool,
}

impl PointerHandler {
    pub fn new(density: f64) -> Self {
        Self {
            density: density.max(f64::EPSILON),
            active_touches: HashMap::new(),
            mouse_position: None,
            mouse_pressed: false,
        }
    }

    pub fn set_density(&mut self, density: f64) {
        self.density = density.max(f64::EPSILON);
    }

    pub fn process_window_event(&mut self, event: &WindowEvent) -> Option<RotationDelta> {
        match event {
            WindowEvent::Touch(Touch {
                id,
                phase,
                location,
                ..
            }) => self.touch(*id, *phase, *location),
            WindowEvent::CursorMoved { position, .. } => self.cursor_moved(*position),
            WindowEvent::MouseInput { state, .. } => {
                self.mouse_input(*state);
                None
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor_left();
                None
            }
            _ => None,
        }
    }

    /// Only a lone finger rotates; extra fingers are tracked but ignored.
    pub fn touch(
        &mut self,
        id: u64,
        phase: TouchPhase,
        location: PhysicalPosition<f64>,
    ) -> Option<RotationDelta> {
        match phase {
            TouchPhase::Started => {
                self.active_touches.insert(id, location);
                None
            }
            TouchPhase::Moved => {
                let previous = self.active_touches.insert(id, location)?;
                (self.active_touches.len() == 1).then(|| self.delta(previous, location))
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                self.active_touches.remove(&id);
                None
            }
        }
    }

    pub fn cursor_moved(&mut self, position: PhysicalPosition<f64>) -> Option<RotationDelta> {
        let previous = self.mouse_position.replace(position)?;
        self.mouse_pressed.then(|| self.delta(previous, position))
    }

    /// Leaving the window ends any mouse drag.
    pub fn cursor_left(&mut self) {
        self.mouse_pressed = false;
        self.mouse_position = None;
    }

    pub fn mouse_input(&mut self, state: ElementState) {
        self.mouse_pressed = state.is_pressed();
    }

    fn delta(&self, from: PhysicalPosition<f64>, to: PhysicalPosition<f64>) -> RotationDelta {
        RotationDelta {
            yaw: ((to.x - from.x) / self.density / 2.0) as f32,
            pitch: ((to.y - from.y) / self.density / 2.0) as f32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f64, y: f64) -> PhysicalPosition<f64> {
        PhysicalPosition::new(x, y)
    }

    #[test]
    fn single_finger_drag_rotates() {
        let mut pointer = PointerHandler::new(2.0);
        assert_eq!(pointer.touch(1, TouchPhase::Started, at(100.0, 100.0)), None);
        let delta = pointer.touch(1, TouchPhase::Moved, at(140.0, 80.0));
        assert_eq!(delta, Some(RotationDelta { yaw: 10.0, pitch: -5.0 }));
        pointer.touch(1, TouchPhase::Ended, at(140.0, 80.0));
        assert_eq!(pointer.touch(1, TouchPhase::Moved, at(200.0, 80.0)), None);
    }

    #[test]
    fn second_finger_stops_rotation() {
        let mut pointer = PointerHandler::new(1.0);
        pointer.touch(1, TouchPhase::Started, at(0.0, 0.0));
        pointer.touch(2, TouchPhase::Started, at(50.0, 50.0));
        assert_eq!(pointer.touch(1, TouchPhase::Moved, at(10.0, 0.0)), None);
        pointer.touch(2, TouchPhase::Ended, at(50.0, 50.0));
        let delta = pointer.touch(1, TouchPhase::Moved, at(20.0, 0.0));
        assert_eq!(delta, Some(RotationDelta { yaw: 5.0, pitch: 0.0 }));
    }

    #[test]
    fn mouse_rotates_only_while_pressed() {
        let mut pointer = PointerHandler::new(1.0);
        assert_eq!(pointer.cursor_moved(at(0.0, 0.0)), None);
        assert_eq!(pointer.cursor_moved(at(10.0, 10.0)), None);
        pointer.mouse_input(ElementState::Pressed);
        let delta = pointer.cursor_moved(at(30.0, 14.0));
        assert_eq!(delta, Some(RotationDelta { yaw: 10.0, pitch: 2.0 }));
        pointer.mouse_input(ElementState::Released);
        assert_eq!(pointer.cursor_moved(at(60.0, 14.0)), None);
    }

    #[test]
    fn leaving_the_window_ends_a_drag() {
        let mut pointer = PointerHandler::new(1.0);
        pointer.cursor_moved(at(0.0, 0.0));
        pointer.mouse_input(ElementState::Pressed);
        assert!(pointer.cursor_moved(at(10.0, 0.0)).is_some());
        pointer.cursor_left();
        assert_eq!(pointer.cursor_moved(at(20.0, 0.0)), None);
        assert_eq!(pointer.cursor_moved(at(30.0, 0.0)), None);
    }
}
