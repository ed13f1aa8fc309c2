use bitflags::bitflags;

/// Number of physical button flags a device can report.
pub const BUTTON_COUNT: usize = 16;

bitflags! {
    /// Set of physical buttons, one bit per button.
    ///
    /// Bit positions never change: the GUI resolver, the remapping table and
    /// the hotkey table all store raw masks in this layout. Analog bits are
    /// derived from the stick by [`crate::input::poll_buttons`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Buttons: u16 {
        const L = 1 << 0;
        const R = 1 << 1;
        const DOWN = 1 << 2;
        const UP = 1 << 3;
        const LEFT = 1 << 4;
        const RIGHT = 1 << 5;
        const START = 1 << 6;
        const SELECT = 1 << 7;
        const FACE_DOWN = 1 << 8;
        const FACE_RIGHT = 1 << 9;
        const FACE_LEFT = 1 << 10;
        const FACE_UP = 1 << 11;
        const ANALOG_DOWN = 1 << 12;
        const ANALOG_UP = 1 << 13;
        const ANALOG_LEFT = 1 << 14;
        const ANALOG_RIGHT = 1 << 15;
    }
}

impl Buttons {
    /// D-pad mask (UP | DOWN | LEFT | RIGHT)
    pub const DPAD: Buttons = Buttons::UP
        .union(Buttons::DOWN)
        .union(Buttons::LEFT)
        .union(Buttons::RIGHT);

    /// Face buttons mask
    pub const FACE: Buttons = Buttons::FACE_DOWN
        .union(Buttons::FACE_RIGHT)
        .union(Buttons::FACE_LEFT)
        .union(Buttons::FACE_UP);

    /// Stick-derived directions
    pub const ANALOG: Buttons = Buttons::ANALOG_UP
        .union(Buttons::ANALOG_DOWN)
        .union(Buttons::ANALOG_LEFT)
        .union(Buttons::ANALOG_RIGHT);

    /// Iterate the individual buttons in this set, in bit order.
    pub fn buttons(self) -> impl Iterator<Item = Button> {
        Button::ALL
            .into_iter()
            .filter(move |button| self.contains(button.mask()))
    }
}

/// A single physical button. The discriminant is its bit index in [`Buttons`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    L,
    R,
    Down,
    Up,
    Left,
    Right,
    Start,
    Select,
    FaceDown,
    FaceRight,
    FaceLeft,
    FaceUp,
    AnalogDown,
    AnalogUp,
    AnalogLeft,
    AnalogRight,
}

impl Button {
    pub const ALL: [Button; BUTTON_COUNT] = [
        Button::L,
        Button::R,
        Button::Down,
        Button::Up,
        Button::Left,
        Button::Right,
        Button::Start,
        Button::Select,
        Button::FaceDown,
        Button::FaceRight,
        Button::FaceLeft,
        Button::FaceUp,
        Button::AnalogDown,
        Button::AnalogUp,
        Button::AnalogLeft,
        Button::AnalogRight,
    ];

    #[inline]
    pub const fn mask(self) -> Buttons {
        Buttons::from_bits_retain(1 << self as u16)
    }

    /// Device-independent name, also accepted by [`Button::from_name`].
    /// Face buttons get their printed labels from a
    /// [`crate::input::DeviceProfile`] instead.
    pub const fn name(self) -> &'static str {
        match self {
            Button::L => "L",
            Button::R => "R",
            Button::Down => "Down",
            Button::Up => "Up",
            Button::Left => "Left",
            Button::Right => "Right",
            Button::Start => "Start",
            Button::Select => "Select",
            Button::FaceDown => "FaceDown",
            Button::FaceRight => "FaceRight",
            Button::FaceLeft => "FaceLeft",
            Button::FaceUp => "FaceUp",
            Button::AnalogDown => "AnalogDown",
            Button::AnalogUp => "AnalogUp",
            Button::AnalogLeft => "AnalogLeft",
            Button::AnalogRight => "AnalogRight",
        }
    }

    /// Case-insensitive lookup by [`Button::name`].
    pub fn from_name(name: &str) -> Option<Button> {
        Button::ALL
            .into_iter()
            .find(|button| button.name().eq_ignore_ascii_case(name))
    }
}

impl From<Button> for Buttons {
    fn from(button: Button) -> Self {
        button.mask()
    }
}
