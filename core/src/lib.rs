pub mod fast_forward;
pub mod gui;
pub mod input;
pub mod mapping;
pub mod session;

pub mod prelude {
    pub use crate::fast_forward::{FastForward, FrameAction};
    pub use crate::gui::{GuiAction, GuiActionResolver};
    pub use crate::input::{
        AnalogAction, AnalogConfig, AnalogSensitivity, AxisReader, Button, ButtonSource, Buttons,
        DeviceProfile, NoAxes,
    };
    pub use crate::mapping::{
        GbaButton, GbaKeys, HotkeyError, HotkeySlot, HotkeyTable, RemappingTable,
        is_impossible_hotkey,
    };
    pub use crate::session::{GameplayFrame, InputConfig, InputSession};
}
