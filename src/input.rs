//! Player controls
//!
//! The simulation only asks "is this control held right now". Key event
//! registration belongs to the host; [`ControlState`] is the held-flag store a
//! host feeds from its key events.

use serde::{Deserialize, Serialize};

/// Browser key codes for the arrow keys and space bar
pub mod keys {
    pub const LEFT: u32 = 37;
    pub const UP: u32 = 38;
    pub const RIGHT: u32 = 39;
    pub const DOWN: u32 = 40;
    pub const SPACE: u32 = 32;
}

/// A control the ship responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Control {
    TurnLeft,
    TurnRight,
    Thrust,
    Fire,
}

impl Control {
    pub const ALL: [Control; 4] = [
        Control::TurnLeft,
        Control::TurnRight,
        Control::Thrust,
        Control::Fire,
    ];

    /// Map a key code to a control. `DOWN` has no binding.
    pub fn from_key_code(code: u32) -> Option<Self> {
        match code {
            keys::LEFT => Some(Control::TurnLeft),
            keys::RIGHT => Some(Control::TurnRight),
            keys::UP => Some(Control::Thrust),
            keys::SPACE => Some(Control::Fire),
            _ => None,
        }
    }
}

/// Source of held-control queries
pub trait InputSource {
    fn is_held(&self, control: Control) -> bool;
}

/// Held flags for every control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlState {
    pub turn_left: bool,
    pub turn_right: bool,
    pub thrust: bool,
    pub fire: bool,
}

impl ControlState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, control: Control, held: bool) {
        match control {
            Control::TurnLeft => self.turn_left = held,
            Control::TurnRight => self.turn_right = held,
            Control::Thrust => self.thrust = held,
            Control::Fire => self.fire = held,
        }
    }

    pub fn press(&mut self, control: Control) {
        self.set(control, true);
    }

    pub fn release(&mut self, control: Control) {
        self.set(control, false);
    }

    /// Release everything (e.g. when the host loses focus)
    pub fn release_all(&mut self) {
        *self = Self::default();
    }

    /// Returns false for keys without a binding
    pub fn key_down(&mut self, code: u32) -> bool {
        match Control::from_key_code(code) {
            Some(control) => {
                self.press(control);
                true
            }
            None => false,
        }
    }

    /// Returns false for keys without a binding
    pub fn key_up(&mut self, code: u32) -> bool {
        match Control::from_key_code(code) {
            Some(control) => {
                self.release(control);
                true
            }
            None => false,
        }
    }
}

impl InputSource for ControlState {
    fn is_held(&self, control: Control) -> bool {
        match control {
            Control::TurnLeft => self.turn_left,
            Control::TurnRight => self.turn_right,
            Control::Thrust => self.thrust,
            Control::Fire => self.fire,
        }
    }
}
