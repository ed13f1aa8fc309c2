use super::button::{Button, Buttons};

/// Capabilities and labelling of one handheld variant.
///
/// Everything that differs between devices goes through this value instead
/// of being compiled in: whether the stick exists (which decides if analog
/// bits can ever be reported) and what the left/top face buttons are printed
/// as. The bottom and right face buttons are "B" and "A" on every supported
/// variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceProfile {
    /// Human-readable device name (e.g., "GCW Zero").
    pub name: &'static str,
    pub has_analog_stick: bool,
    pub left_face_label: &'static str,
    pub top_face_label: &'static str,
}

impl DeviceProfile {
    pub const fn new(
        name: &'static str,
        has_analog_stick: bool,
        left_face_label: &'static str,
        top_face_label: &'static str,
    ) -> Self {
        Self {
            name,
            has_analog_stick,
            left_face_label,
            top_face_label,
        }
    }

    /// Buttons this device can physically report.
    pub const fn supported_buttons(&self) -> Buttons {
        if self.has_analog_stick {
            Buttons::all()
        } else {
            Buttons::all().difference(Buttons::ANALOG)
        }
    }

    /// Label printed on the device for `button`.
    pub fn button_name(&self, button: Button) -> &'static str {
        match button {
            Button::FaceDown => "B",
            Button::FaceRight => "A",
            Button::FaceLeft => self.left_face_label,
            Button::FaceUp => self.top_face_label,
            Button::AnalogDown => "Analog Down",
            Button::AnalogUp => "Analog Up",
            Button::AnalogLeft => "Analog Left",
            Button::AnalogRight => "Analog Right",
            other => other.name(),
        }
    }

    /// Render a mask as "Select+Start", or "None" when empty.
    pub fn describe(&self, buttons: Buttons) -> String {
        if buttons.is_empty() {
            return String::from("None");
        }
        buttons
            .buttons()
            .map(|button| self.button_name(button))
            .collect::<Vec<_>>()
            .join("+")
    }

    /// See [`crate::mapping::is_impossible_hotkey`].
    pub fn is_impossible_hotkey(&self, hotkey: Buttons) -> bool {
        crate::mapping::is_impossible_hotkey(hotkey, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STICKLESS: DeviceProfile = DeviceProfile::new("Test", false, "Y", "X");

    #[test]
    fn test_supported_buttons_without_stick() {
        assert!(!STICKLESS.supported_buttons().intersects(Buttons::ANALOG));
        assert!(STICKLESS.supported_buttons().contains(Buttons::DPAD));
    }

    #[test]
    fn test_face_labels_follow_profile() {
        assert_eq!(STICKLESS.button_name(Button::FaceLeft), "Y");
        assert_eq!(STICKLESS.button_name(Button::FaceUp), "X");
        assert_eq!(STICKLESS.button_name(Button::FaceRight), "A");
    }

    #[test]
    fn test_describe() {
        assert_eq!(STICKLESS.describe(Buttons::empty()), "None");
        assert_eq!(
            STICKLESS.describe(Buttons::START | Buttons::SELECT | Buttons::FACE_UP),
            "Start+Select+X"
        );
    }
}
