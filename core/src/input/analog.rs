//! Analog stick configuration and axis-to-direction translation.

use super::button::Buttons;

/// Axis magnitude that counts as a held direction, indexed by sensitivity.
/// Index 0 needs the stick fully engaged; index 4 reacts to a light tap.
pub const SENSITIVITY_THRESHOLDS: [i16; 5] = [31000, 24000, 17000, 10000, 4000];

/// Stick sensitivity, 0 (least) to 4 (most). Serialized as the bare level;
/// out-of-range levels saturate on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "u8", into = "u8")
)]
pub struct AnalogSensitivity(u8);

impl AnalogSensitivity {
    pub const MAX: u8 = (SENSITIVITY_THRESHOLDS.len() - 1) as u8;

    /// Values above [`Self::MAX`] saturate.
    pub const fn new(level: u8) -> Self {
        if level > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(level)
        }
    }

    #[inline]
    pub const fn level(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn threshold(self) -> i16 {
        SENSITIVITY_THRESHOLDS[self.0 as usize]
    }
}

impl Default for AnalogSensitivity {
    fn default() -> Self {
        Self(2)
    }
}

impl From<u8> for AnalogSensitivity {
    fn from(level: u8) -> Self {
        Self::new(level)
    }
}

impl From<AnalogSensitivity> for u8 {
    fn from(sensitivity: AnalogSensitivity) -> Self {
        sensitivity.level()
    }
}

/// What the stick does during gameplay. Hotkeys and the GUI may use the
/// analog directions either way. Serialized as its index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "u32", into = "u32")
)]
pub enum AnalogAction {
    #[default]
    None,
    /// The stick also drives the game's d-pad.
    DPad,
}

impl AnalogAction {
    /// 0 is [`AnalogAction::None`]; any other value is [`AnalogAction::DPad`].
    pub const fn from_index(index: u32) -> Self {
        match index {
            0 => AnalogAction::None,
            _ => AnalogAction::DPad,
        }
    }

    pub const fn index(self) -> u32 {
        match self {
            AnalogAction::None => 0,
            AnalogAction::DPad => 1,
        }
    }
}

impl From<u32> for AnalogAction {
    fn from(index: u32) -> Self {
        Self::from_index(index)
    }
}

impl From<AnalogAction> for u32 {
    fn from(action: AnalogAction) -> Self {
        action.index()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct AnalogConfig {
    pub sensitivity: AnalogSensitivity,
    pub action: AnalogAction,
}

/// Translate raw axis values into `ANALOG_*` bits.
///
/// Negative values are left/up, positive values right/down. Only analog bits
/// are ever set in the result.
pub fn analog_directions(horizontal: i16, vertical: i16, config: &AnalogConfig) -> Buttons {
    let threshold = i32::from(config.sensitivity.threshold());
    let (h, v) = (i32::from(horizontal), i32::from(vertical));
    let mut result = Buttons::empty();

    if h <= -threshold {
        result |= Buttons::ANALOG_LEFT;
    } else if h >= threshold {
        result |= Buttons::ANALOG_RIGHT;
    }
    if v <= -threshold {
        result |= Buttons::ANALOG_UP;
    } else if v >= threshold {
        result |= Buttons::ANALOG_DOWN;
    }

    result
}
