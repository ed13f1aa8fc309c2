use crate::input::{Buttons, DeviceProfile};

/// Non-gameplay functions that can be bound to a button combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HotkeySlot {
    /// Fast-forward while the combination is held.
    HoldFastForward,
    /// Open the menu.
    Menu,
    /// Switch fast-forward on or off each time the combination is pressed.
    ToggleFastForward,
}

impl HotkeySlot {
    pub const COUNT: usize = 3;

    pub const ALL: [HotkeySlot; Self::COUNT] = [
        HotkeySlot::HoldFastForward,
        HotkeySlot::Menu,
        HotkeySlot::ToggleFastForward,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            HotkeySlot::HoldFastForward => "Fast-forward while held",
            HotkeySlot::Menu => "Menu",
            HotkeySlot::ToggleFastForward => "Fast-forward toggle",
        }
    }
}

/// Returns true if `hotkey` can never be entered as one simultaneous
/// combination on `device`:
///
/// - d-pad Up and Down both set;
/// - d-pad Left and Right both set;
/// - analog Up and Down both set;
/// - analog Left and Right both set;
/// - any analog direction on a device without a stick.
pub fn is_impossible_hotkey(hotkey: Buttons, device: &DeviceProfile) -> bool {
    hotkey.contains(Buttons::UP | Buttons::DOWN)
        || hotkey.contains(Buttons::LEFT | Buttons::RIGHT)
        || hotkey.contains(Buttons::ANALOG_UP | Buttons::ANALOG_DOWN)
        || hotkey.contains(Buttons::ANALOG_LEFT | Buttons::ANALOG_RIGHT)
        || (!device.has_analog_stick && hotkey.intersects(Buttons::ANALOG))
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors from committing a hotkey binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyError {
    /// The combination cannot be physically pressed on the device.
    Impossible { slot: HotkeySlot, hotkey: Buttons },
}

impl std::fmt::Display for HotkeyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Impossible { slot, hotkey } => write!(
                f,
                "hotkey {:#06x} for \"{}\" cannot be pressed on this device",
                hotkey.bits(),
                slot.name()
            ),
        }
    }
}

impl std::error::Error for HotkeyError {}

// ---------------------------------------------------------------------------
// HotkeyTable
// ---------------------------------------------------------------------------

/// Button combination bound to each [`HotkeySlot`]. Empty means unbound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HotkeyTable {
    entries: [Buttons; HotkeySlot::COUNT],
}

impl HotkeyTable {
    pub const DEFAULT: HotkeyTable = HotkeyTable {
        entries: [
            Buttons::empty(),
            Buttons::SELECT.union(Buttons::START),
            Buttons::empty(),
        ],
    };

    #[inline]
    pub fn get(&self, slot: HotkeySlot) -> Buttons {
        self.entries[slot.index()]
    }

    /// Store `hotkey` without checking it. Prefer [`HotkeyTable::bind`] for
    /// user edits.
    pub fn set(&mut self, slot: HotkeySlot, hotkey: Buttons) {
        self.entries[slot.index()] = hotkey;
    }

    /// Store `hotkey` if it can be pressed on `device`. An empty mask is
    /// accepted and unbinds the slot.
    pub fn bind(
        &mut self,
        slot: HotkeySlot,
        hotkey: Buttons,
        device: &DeviceProfile,
    ) -> Result<(), HotkeyError> {
        if is_impossible_hotkey(hotkey, device) {
            log::warn!(
                "Rejected hotkey {} for {}",
                device.describe(hotkey),
                slot.name()
            );
            return Err(HotkeyError::Impossible { slot, hotkey });
        }
        log::info!("Hotkey {} = {}", slot.name(), device.describe(hotkey));
        self.set(slot, hotkey);
        Ok(())
    }

    pub fn replace(&mut self, entries: [Buttons; HotkeySlot::COUNT]) {
        self.entries = entries;
    }

    pub fn reset(&mut self) {
        *self = Self::DEFAULT;
    }

    pub fn iter(&self) -> impl Iterator<Item = (HotkeySlot, Buttons)> + '_ {
        HotkeySlot::ALL
            .into_iter()
            .map(|slot| (slot, self.entries[slot.index()]))
    }

    /// True if `slot` is bound and every button of it is in `pressed`.
    #[inline]
    pub fn is_held(&self, slot: HotkeySlot, pressed: Buttons) -> bool {
        let hotkey = self.get(slot);
        !hotkey.is_empty() && pressed.contains(hotkey)
    }

    /// Union of the combinations currently held in full.
    pub fn held_buttons(&self, pressed: Buttons) -> Buttons {
        self.iter()
            .filter(|&(slot, _)| self.is_held(slot, pressed))
            .fold(Buttons::empty(), |acc, (_, hotkey)| acc | hotkey)
    }
}

impl Default for HotkeyTable {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// ---------------------------------------------------------------------------
// HotkeyTracker
// ---------------------------------------------------------------------------

/// Previous/current latch over button masks for hotkey edge detection.
#[derive(Debug, Clone, Copy, Default)]
pub struct HotkeyTracker {
    current: Buttons,
    previous: Buttons,
}

impl HotkeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latch a new poll.
    pub fn update(&mut self, pressed: Buttons) {
        self.previous = self.current;
        self.current = pressed;
    }

    /// Make the current state the previous one, so a combination that is
    /// still held does not count as a fresh press.
    pub fn latch(&mut self) {
        self.previous = self.current;
    }

    #[inline]
    pub fn is_held(&self, table: &HotkeyTable, slot: HotkeySlot) -> bool {
        table.is_held(slot, self.current)
    }

    #[inline]
    pub fn was_held(&self, table: &HotkeyTable, slot: HotkeySlot) -> bool {
        table.is_held(slot, self.previous)
    }

    /// True only on the poll where the combination becomes fully held.
    pub fn just_pressed(&self, table: &HotkeyTable, slot: HotkeySlot) -> bool {
        self.is_held(table, slot) && !self.was_held(table, slot)
    }

    /// True only on the poll where the combination stops being fully held.
    pub fn just_released(&self, table: &HotkeyTable, slot: HotkeySlot) -> bool {
        !self.is_held(table, slot) && self.was_held(table, slot)
    }
}
