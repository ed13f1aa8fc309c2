//! Gameplay translation: physical buttons to the emulated keypad.

use bitflags::bitflags;

use super::remap::{GbaButton, RemappingTable};
use crate::input::{AnalogAction, AnalogConfig, Buttons};

bitflags! {
    /// Emulated keypad state, in KEYINPUT bit order (1 = pressed).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct GbaKeys: u16 {
        const A = 1 << 0;
        const B = 1 << 1;
        const SELECT = 1 << 2;
        const START = 1 << 3;
        const RIGHT = 1 << 4;
        const LEFT = 1 << 5;
        const UP = 1 << 6;
        const DOWN = 1 << 7;
        const R = 1 << 8;
        const L = 1 << 9;
    }
}

impl GbaKeys {
    /// KEYINPUT register value: active low, bits 10-15 always set.
    pub fn to_keyinput(self) -> u16 {
        (!self.bits() & 0x03FF) | 0xFC00
    }
}

impl GbaButton {
    /// Keypad bit driven by this logical button. Rapid-fire buttons have
    /// none of their own.
    pub const fn key(self) -> Option<GbaKeys> {
        match self {
            GbaButton::A => Some(GbaKeys::A),
            GbaButton::B => Some(GbaKeys::B),
            GbaButton::Select => Some(GbaKeys::SELECT),
            GbaButton::Start => Some(GbaKeys::START),
            GbaButton::Right => Some(GbaKeys::RIGHT),
            GbaButton::Left => Some(GbaKeys::LEFT),
            GbaButton::Up => Some(GbaKeys::UP),
            GbaButton::Down => Some(GbaKeys::DOWN),
            GbaButton::R => Some(GbaKeys::R),
            GbaButton::L => Some(GbaKeys::L),
            GbaButton::RapidA | GbaButton::RapidB => None,
        }
    }
}

const ANALOG_TO_DPAD: [(Buttons, GbaKeys); 4] = [
    (Buttons::ANALOG_RIGHT, GbaKeys::RIGHT),
    (Buttons::ANALOG_LEFT, GbaKeys::LEFT),
    (Buttons::ANALOG_UP, GbaKeys::UP),
    (Buttons::ANALOG_DOWN, GbaKeys::DOWN),
];

/// Applies the remapping table each frame. Holds the rapid-fire phase.
#[derive(Debug, Clone, Default)]
pub struct KeypadTranslator {
    rapid_phase: bool,
}

impl KeypadTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// A logical button is pressed when any of its bound buttons is held.
    /// Rapid-fire bindings report A/B on every other call while held.
    pub fn translate(
        &mut self,
        pressed: Buttons,
        remapping: &RemappingTable,
        analog: &AnalogConfig,
    ) -> GbaKeys {
        let mut keys = GbaKeys::empty();

        for (button, mask) in remapping.iter() {
            if let Some(key) = button.key()
                && pressed.intersects(mask)
            {
                keys |= key;
            }
        }

        if analog.action == AnalogAction::DPad {
            for (bit, key) in ANALOG_TO_DPAD {
                if pressed.contains(bit) {
                    keys |= key;
                }
            }
        }

        let rapid_a = pressed.intersects(remapping.get(GbaButton::RapidA));
        let rapid_b = pressed.intersects(remapping.get(GbaButton::RapidB));
        if rapid_a || rapid_b {
            self.rapid_phase = !self.rapid_phase;
            if self.rapid_phase {
                if rapid_a {
                    keys |= GbaKeys::A;
                }
                if rapid_b {
                    keys |= GbaKeys::B;
                }
            }
        } else {
            self.rapid_phase = false;
        }

        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::AnalogSensitivity;

    fn dpad_analog() -> AnalogConfig {
        AnalogConfig {
            sensitivity: AnalogSensitivity::default(),
            action: AnalogAction::DPad,
        }
    }

    #[test]
    fn test_default_mapping() {
        let mut translator = KeypadTranslator::new();
        let keys = translator.translate(
            Buttons::FACE_RIGHT | Buttons::UP | Buttons::L,
            &RemappingTable::DEFAULT,
            &AnalogConfig::default(),
        );
        assert_eq!(keys, GbaKeys::A | GbaKeys::UP | GbaKeys::L);
    }

    #[test]
    fn test_keyinput_is_active_low() {
        assert_eq!(GbaKeys::empty().to_keyinput(), 0xFFFF);
        assert_eq!(GbaKeys::A.to_keyinput(), 0xFFFE);
        assert_eq!(GbaKeys::all().to_keyinput(), 0xFC00);
    }

    #[test]
    fn test_analog_drives_dpad_only_when_enabled() {
        let mut translator = KeypadTranslator::new();
        let pressed = Buttons::ANALOG_LEFT | Buttons::ANALOG_DOWN;
        assert_eq!(
            translator.translate(pressed, &RemappingTable::DEFAULT, &AnalogConfig::default()),
            GbaKeys::empty()
        );
        assert_eq!(
            translator.translate(pressed, &RemappingTable::DEFAULT, &dpad_analog()),
            GbaKeys::LEFT | GbaKeys::DOWN
        );
    }

    #[test]
    fn test_empty_binding_never_matches() {
        let mut table = RemappingTable::DEFAULT;
        table.set(GbaButton::Start, Buttons::empty());
        let mut translator = KeypadTranslator::new();
        let keys = translator.translate(Buttons::all(), &table, &AnalogConfig::default());
        assert!(!keys.contains(GbaKeys::START));
    }

    #[test]
    fn test_rapid_fire_alternates() {
        let mut table = RemappingTable::DEFAULT;
        table.set(GbaButton::RapidA, Buttons::FACE_LEFT);
        let mut translator = KeypadTranslator::new();
        let cfg = AnalogConfig::default();

        let frames: Vec<bool> = (0..4)
            .map(|_| {
                translator
                    .translate(Buttons::FACE_LEFT, &table, &cfg)
                    .contains(GbaKeys::A)
            })
            .collect();
        assert_eq!(frames, vec![true, false, true, false]);

        // Releasing restarts the cycle on the pressed phase.
        translator.translate(Buttons::empty(), &table, &cfg);
        assert!(
            translator
                .translate(Buttons::FACE_LEFT, &table, &cfg)
                .contains(GbaKeys::A)
        );
    }
}
