use crate::input::Buttons;

/// Logical buttons a game sees, in remapping-table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GbaButton {
    A,
    B,
    Select,
    Start,
    Right,
    Left,
    Up,
    Down,
    R,
    L,
    /// Auto-fire A while held.
    RapidA,
    /// Auto-fire B while held.
    RapidB,
}

impl GbaButton {
    pub const COUNT: usize = 12;

    pub const ALL: [GbaButton; Self::COUNT] = [
        GbaButton::A,
        GbaButton::B,
        GbaButton::Select,
        GbaButton::Start,
        GbaButton::Right,
        GbaButton::Left,
        GbaButton::Up,
        GbaButton::Down,
        GbaButton::R,
        GbaButton::L,
        GbaButton::RapidA,
        GbaButton::RapidB,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            GbaButton::A => "A",
            GbaButton::B => "B",
            GbaButton::Select => "Select",
            GbaButton::Start => "Start",
            GbaButton::Right => "D-pad Right",
            GbaButton::Left => "D-pad Left",
            GbaButton::Up => "D-pad Up",
            GbaButton::Down => "D-pad Down",
            GbaButton::R => "R",
            GbaButton::L => "L",
            GbaButton::RapidA => "Rapid-fire A",
            GbaButton::RapidB => "Rapid-fire B",
        }
    }
}

/// Physical buttons bound to each [`GbaButton`].
///
/// Any mask is accepted in any slot; overlapping bindings are the game
/// input's business. An empty mask leaves the logical button unbound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RemappingTable {
    entries: [Buttons; GbaButton::COUNT],
}

impl RemappingTable {
    pub const DEFAULT: RemappingTable = RemappingTable {
        entries: [
            Buttons::FACE_RIGHT,
            Buttons::FACE_DOWN,
            Buttons::SELECT,
            Buttons::START,
            Buttons::RIGHT,
            Buttons::LEFT,
            Buttons::UP,
            Buttons::DOWN,
            Buttons::R,
            Buttons::L,
            Buttons::empty(),
            Buttons::empty(),
        ],
    };

    #[inline]
    pub fn get(&self, button: GbaButton) -> Buttons {
        self.entries[button.index()]
    }

    pub fn set(&mut self, button: GbaButton, mask: Buttons) {
        self.entries[button.index()] = mask;
    }

    /// Swap in a whole table at once (configuration load).
    pub fn replace(&mut self, entries: [Buttons; GbaButton::COUNT]) {
        self.entries = entries;
    }

    pub fn reset(&mut self) {
        *self = Self::DEFAULT;
    }

    pub fn iter(&self) -> impl Iterator<Item = (GbaButton, Buttons)> + '_ {
        GbaButton::ALL
            .into_iter()
            .map(|button| (button, self.entries[button.index()]))
    }
}

impl Default for RemappingTable {
    fn default() -> Self {
        Self::DEFAULT
    }
}
