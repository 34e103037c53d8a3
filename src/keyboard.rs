use std::fmt::Display;

use glam::Vec3;
use winit::event::KeyEvent;
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::{LabEvent, Radio};

const NUDGE: f32 = 0.1;

struct KeyAction {
    code: KeyCode,
    description: String,
    lab_event: Box<dyn Fn() -> LabEvent>,
}

impl Display for KeyAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description)
    }
}

pub struct Keyboard {
    actions: Vec<KeyAction>,
}

impl Default for Keyboard {
    fn default() -> Self {
        Self::new().with_actions()
    }
}

impl Keyboard {
    pub fn new() -> Self {
        Self {
            actions: Default::default(),
        }
    }

    pub fn with_actions(mut self) -> Self {
        self.add_action(KeyCode::Space, "Space to replay", || LabEvent::RestartAnimation);
        self.add_action(KeyCode::KeyR, "R to reset view", || LabEvent::ResetView);
        for (code, description, offset) in [
            (KeyCode::ArrowLeft, "\u{2190}", Vec3::NEG_X),
            (KeyCode::ArrowRight, "\u{2192}", Vec3::X),
            (KeyCode::ArrowUp, "\u{2191}", Vec3::Y),
            (KeyCode::ArrowDown, "\u{2193}", Vec3::NEG_Y),
            (KeyCode::PageUp, "PgUp", Vec3::NEG_Z),
            (KeyCode::PageDown, "PgDn", Vec3::Z),
        ] {
            self.add_action(code, &format!("{description} to move puck"), move || {
                LabEvent::NudgePuck {
                    index: 0,
                    offset: offset * NUDGE,
                }
            });
        }
        self.add_action(KeyCode::Escape, "Esc to exit", || LabEvent::Exit);
        self
    }

    /// Sends the matching event on key press. Returns whether the key was bound.
    pub fn handle_key_event(&self, key_event: &KeyEvent, radio: &Radio) -> bool {
        if !key_event.state.is_pressed() {
            return false;
        }
        let PhysicalKey::Code(code) = key_event.physical_key else {
            return false;
        };
        match self.event_for(code) {
            Some(lab_event) => {
                lab_event.send(radio);
                true
            }
            None => false,
        }
    }

    pub fn event_for(&self, code: KeyCode) -> Option<LabEvent> {
        self.actions
            .iter()
            .find(|action| action.code == code)
            .map(|action| (action.lab_event)())
    }

    pub fn legend(&self) -> Vec<String> {
        self.actions.iter().map(|action| action.to_string()).collect()
    }

    fn add_action(
        &mut self,
        code: KeyCode,
        description: &str,
        lab_event: impl Fn() -> LabEvent + 'static,
    ) {
        self.actions.push(KeyAction {
            code,
            description: description.into(),
            lab_event: Box::new(lab_event),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bound_keys() {
        let keyboard = Keyboard::default();
        assert!(matches!(keyboard.event_for(KeyCode::Space), Some(LabEvent::RestartAnimation)));
        assert!(matches!(keyboard.event_for(KeyCode::KeyR), Some(LabEvent::ResetView)));
        assert!(matches!(keyboard.event_for(KeyCode::Escape), Some(LabEvent::Exit)));
        assert!(keyboard.event_for(KeyCode::KeyQ).is_none());
    }

    #[test]
    fn arrows_nudge_the_first_puck() {
        let keyboard = Keyboard::default();
        match keyboard.event_for(KeyCode::ArrowUp) {
            Some(LabEvent::NudgePuck { index, offset }) => {
                assert_eq!(index, 0);
                assert_eq!(offset, Vec3::new(0.0, NUDGE, 0.0));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn legend_lists_every_action() {
        let legend = Keyboard::default().legend();
        assert_eq!(legend.len(), 9);
        assert_eq!(legend[0], "Space to replay");
        assert_eq!(legend[8], "Esc to exit");
    }
}
