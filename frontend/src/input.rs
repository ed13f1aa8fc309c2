use std::collections::{BTreeMap, HashMap};

use handpad_core::input::{AxisReader, Button, ButtonSource, Buttons};
use sdl2::joystick::Joystick;
use sdl2::keyboard::Scancode;

use crate::error::FrontendError;

/// Maps SDL scancodes to device buttons.
pub struct KeyMap {
    map: HashMap<Scancode, Button>,
}

impl KeyMap {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Bind a scancode to a device button.
    pub fn bind(&mut self, scancode: Scancode, button: Button) {
        self.map.insert(scancode, button);
    }

    /// Remove every scancode bound to `button`.
    pub fn unbind(&mut self, button: Button) {
        self.map.retain(|_, bound| *bound != button);
    }

    /// Look up the device button for a scancode.
    pub fn get(&self, scancode: Scancode) -> Option<Button> {
        self.map.get(&scancode).copied()
    }

    /// Default layout with `overrides` (button name → scancode name)
    /// replacing the keys of the buttons they name.
    pub fn with_overrides(overrides: &BTreeMap<String, String>) -> Result<Self, FrontendError> {
        let mut km = default_key_map();
        for (button_name, key_name) in overrides {
            let button = Button::from_name(button_name)
                .ok_or_else(|| FrontendError::UnknownButton(button_name.clone()))?;
            let scancode = Scancode::from_name(key_name)
                .ok_or_else(|| FrontendError::UnknownKey(key_name.clone()))?;
            km.unbind(button);
            km.bind(scancode, button);
        }
        Ok(km)
    }
}

/// Build the default keyboard layout.
///
/// Arrows are the d-pad and IJKL stand in for the stick, so analog hotkeys
/// can be tried without a joystick.
pub fn default_key_map() -> KeyMap {
    let mut km = KeyMap::new();

    for (scancode, button) in [
        (Scancode::Q, Button::L),
        (Scancode::W, Button::R),
        (Scancode::Down, Button::Down),
        (Scancode::Up, Button::Up),
        (Scancode::Left, Button::Left),
        (Scancode::Right, Button::Right),
        (Scancode::Return, Button::Start),
        (Scancode::RShift, Button::Select),
        (Scancode::Z, Button::FaceDown),
        (Scancode::X, Button::FaceRight),
        (Scancode::A, Button::FaceLeft),
        (Scancode::S, Button::FaceUp),
        (Scancode::K, Button::AnalogDown),
        (Scancode::I, Button::AnalogUp),
        (Scancode::J, Button::AnalogLeft),
        (Scancode::L, Button::AnalogRight),
    ] {
        km.bind(scancode, button);
    }

    km
}

/// Keyboard state accumulated from SDL key events.
#[derive(Debug, Default)]
pub struct KeyboardPad {
    held: Buttons,
}

impl KeyboardPad {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, button: Button, pressed: bool) {
        self.held.set(button.mask(), pressed);
    }

    /// Drop everything held, e.g. when the window loses focus.
    pub fn clear(&mut self) {
        self.held = Buttons::empty();
    }
}

impl ButtonSource for KeyboardPad {
    fn pressed_buttons(&mut self) -> Buttons {
        self.held
    }
}

/// First two axes of an SDL joystick, or a centered stick when none is
/// attached.
pub struct JoystickAxes {
    joystick: Option<Joystick>,
}

impl JoystickAxes {
    pub fn new(joystick: Option<Joystick>) -> Self {
        Self { joystick }
    }

    fn axis(&self, index: u32) -> i16 {
        self.joystick
            .as_ref()
            .and_then(|joystick| joystick.axis(index).ok())
            .unwrap_or(0)
    }
}

impl AxisReader for JoystickAxes {
    fn horizontal_axis(&mut self) -> i16 {
        self.axis(0)
    }

    fn vertical_axis(&mut self) -> i16 {
        self.axis(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_map_covers_every_button() {
        let km = default_key_map();
        for button in Button::ALL {
            assert!(km.map.values().any(|&b| b == button), "{button:?}");
        }
    }

    #[test]
    fn test_override_replaces_binding() {
        let mut overrides = BTreeMap::new();
        overrides.insert(String::from("FaceRight"), String::from("Space"));
        let km = KeyMap::with_overrides(&overrides).unwrap();
        assert_eq!(km.get(Scancode::Space), Some(Button::FaceRight));
        assert_eq!(km.get(Scancode::X), None);
    }

    #[test]
    fn test_override_errors() {
        let mut overrides = BTreeMap::new();
        overrides.insert(String::from("Turbo"), String::from("Space"));
        assert!(matches!(
            KeyMap::with_overrides(&overrides),
            Err(FrontendError::UnknownButton(_))
        ));

        let mut overrides = BTreeMap::new();
        overrides.insert(String::from("L"), String::from("NotAKey"));
        assert!(matches!(
            KeyMap::with_overrides(&overrides),
            Err(FrontendError::UnknownKey(_))
        ));
    }

    #[test]
    fn test_keyboard_pad_tracks_keys() {
        let mut pad = KeyboardPad::new();
        pad.set(Button::Up, true);
        pad.set(Button::FaceRight, true);
        pad.set(Button::Up, false);
        assert_eq!(pad.pressed_buttons(), Buttons::FACE_RIGHT);
        pad.clear();
        assert!(pad.pressed_buttons().is_empty());
    }
}
